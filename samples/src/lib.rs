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

//! Samples showing how to use the Google Cloud Client Libraries for Rust with
//! Batch, Cloud TPU, Game Servers, Parameter Manager, and Video Intelligence.
//!
//! Each sample is a function named `sample()` in its own module. The binaries
//! in `src/bin` expose them as subcommands, and the integration tests in
//! `tests/` run them against a real project.

pub mod batch;
pub mod errors;
pub mod gameservers;
pub mod names;
pub mod parametermanager;
pub mod rest;
pub mod tpu;
pub mod videointelligence;

pub use errors::{ignore_not_found, is_not_found};

/// Resources created by the integration tests and older than this are leaked
/// and safe to delete.
pub const STALE_AGE: std::time::Duration = std::time::Duration::from_secs(48 * 60 * 60);

/// Returns the timestamp before which test resources are considered stale.
pub fn stale_deadline() -> anyhow::Result<google_cloud_wkt::Timestamp> {
    use std::time::{SystemTime, UNIX_EPOCH};
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?;
    let deadline = now.saturating_sub(STALE_AGE);
    Ok(google_cloud_wkt::Timestamp::clamp(deadline.as_secs() as i64, 0))
}

/// Initializes logging for the sample binaries.
///
/// The filter is read from `RUST_LOG`, for example `RUST_LOG=debug`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();
}
