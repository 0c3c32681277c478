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

//! Samples for [Video Intelligence](https://cloud.google.com/video-intelligence/docs).

use google_cloud_videointelligence_v1::model::AnnotateVideoResponse;
use std::fmt::Write;

pub mod detect_faces;
pub mod detect_faces_gcs;

/// Formats the faces found in `response`.
///
/// Only the first video in the response is considered, the samples annotate
/// one video at a time.
///
/// # Example
/// ```
/// # use google_cloud_samples::videointelligence::face_report;
/// use google_cloud_videointelligence_v1::model::AnnotateVideoResponse;
/// assert_eq!(face_report(&AnnotateVideoResponse::new()), "");
/// ```
pub fn face_report(response: &AnnotateVideoResponse) -> String {
    let mut report = String::new();
    let Some(results) = response.annotation_results.first() else {
        return report;
    };
    for face in &results.face_detection_annotations {
        report.push_str("Face detected:\n");
        for track in &face.tracks {
            let segment = track.segment.as_ref();
            let start = segment.and_then(|s| s.start_time_offset.as_ref());
            let end = segment.and_then(|s| s.end_time_offset.as_ref());
            let _ = writeln!(report, "\tStart: {}s", offset(start));
            let _ = writeln!(report, "\tEnd: {}s", offset(end));
            // Attributes include `glasses`, `headwear`, and `smiling`.
            let Some(first) = track.timestamped_objects.first() else {
                continue;
            };
            for attribute in &first.attributes {
                let _ = writeln!(report, "\tAttribute: {}; ", attribute.name);
            }
        }
    }
    report
}

fn offset(d: Option<&google_cloud_wkt::Duration>) -> String {
    let (seconds, nanos) = d.map(|d| (d.seconds(), d.nanos())).unwrap_or_default();
    format!("{seconds}.{:03}", nanos / 1_000_000)
}
