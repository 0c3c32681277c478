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

// [START video_detect_faces]
use google_cloud_lro::Poller;
use google_cloud_videointelligence_v1::client::VideoIntelligenceService;
use google_cloud_videointelligence_v1::model::{
    AnnotateVideoResponse, FaceDetectionConfig, Feature, VideoContext,
};

/// Detects faces in a local video file.
///
/// # Parameters
/// - `path`: the video to analyze. For example: `./my-file.mp4`.
pub async fn sample(
    client: &VideoIntelligenceService,
    path: &str,
) -> anyhow::Result<AnnotateVideoResponse> {
    let content = tokio::fs::read(path).await?;
    println!("Waiting for operation to complete...");
    let response = client
        .annotate_video()
        .set_input_content(content)
        .set_features([Feature::FaceDetection])
        .set_video_context(face_detection_context())
        .poller()
        .until_done()
        .await?;
    print!("{}", super::face_report(&response));

    Ok(response)
}

/// Requests bounding boxes and attributes for each face.
pub fn face_detection_context() -> VideoContext {
    // Attributes are only returned with bounding boxes.
    VideoContext::new().set_face_detection_config(
        FaceDetectionConfig::new()
            .set_include_bounding_boxes(true)
            .set_include_attributes(true),
    )
}
// [END video_detect_faces]
