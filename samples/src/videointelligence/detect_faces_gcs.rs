// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// [START video_detect_faces_gcs]
use google_cloud_lro::Poller;
use google_cloud_videointelligence_v1::client::VideoIntelligenceService;
use google_cloud_videointelligence_v1::model::{AnnotateVideoResponse, Feature};

/// Detects faces in a video stored in Cloud Storage.
///
/// # Parameters
/// - `uri`: the object to analyze. For example:
///   `gs://cloud-samples-data/video/googlework_short.mp4`.
pub async fn sample(
    client: &VideoIntelligenceService,
    uri: &str,
) -> anyhow::Result<AnnotateVideoResponse> {
    println!("Waiting for operation to complete...");
    let response = client
        .annotate_video()
        .set_input_uri(uri)
        .set_features([Feature::FaceDetection])
        .set_video_context(super::detect_faces::face_detection_context())
        .poller()
        .until_done()
        .await?;
    print!("{}", super::face_report(&response));

    Ok(response)
}
// [END video_detect_faces_gcs]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::videointelligence::tests::{MockVideoIntelligenceService, finished_operation, one_face};
    use google_cloud_gax::response::Response;

    #[tokio::test]
    async fn sends_uri() -> anyhow::Result<()> {
        let mut mock = MockVideoIntelligenceService::new();
        mock.expect_annotate_video()
            .withf(|r, _| r.input_uri == "gs://bucket/video.mp4" && r.input_content.is_empty())
            .return_once(|_, _| Ok(Response::from(finished_operation(&one_face()))));
        let client = VideoIntelligenceService::from_stub(mock);

        let got = sample(&client, "gs://bucket/video.mp4").await?;
        assert_eq!(super::super::face_report(&got).lines().next(), Some("Face detected:"));
        Ok(())
    }
}
