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

use tracing_subscriber::EnvFilter;

/// The log level for the samples when `RUST_LOG` is not set.
#[cfg(feature = "log-integration-tests")]
const SAMPLES_LEVEL: &str = "info";
#[cfg(not(feature = "log-integration-tests"))]
const SAMPLES_LEVEL: &str = "warn";

/// Installs a `fmt` subscriber for the current thread.
///
/// Integration tests hold on to the guard for the duration of the test.
/// Without `RUST_LOG`, events from the samples and the client libraries are
/// shown at `WARN`, or at `INFO` with the `log-integration-tests` feature.
pub fn enable_tracing() -> ::tracing::subscriber::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_thread_ids(true)
        .with_test_writer()
        .finish();

    tracing::subscriber::set_default(subscriber)
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives()))
}

fn default_directives() -> String {
    format!("warn,google_cloud_samples={SAMPLES_LEVEL},google_cloud={SAMPLES_LEVEL}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_default() {
        let _guard = enable_tracing();
        let default = tracing::Dispatch::default();
        assert!(
            default.is::<tracing_subscriber::FmtSubscriber<
                tracing_subscriber::fmt::format::DefaultFields,
                tracing_subscriber::fmt::format::Format,
                EnvFilter,
                tracing_subscriber::fmt::TestWriter,
            >>(),
            "{default:?}"
        );
    }

    #[test]
    fn directives() {
        let got = default_directives();
        assert!(got.starts_with("warn,"), "{got}");
        assert!(
            got.contains(&format!("google_cloud_samples={SAMPLES_LEVEL}")),
            "{got}"
        );
    }
}
