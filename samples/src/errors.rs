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

//! Helpers to make cleanup idempotent.

use google_cloud_gax as gax;

/// Returns true if the error means the resource does not exist.
///
/// Services report this as a `NOT_FOUND` status. Some HTTP front-ends reply
/// with a bare 404 and no status payload; those count too.
pub fn is_not_found(error: &gax::error::Error) -> bool {
    use gax::error::rpc::Code;
    if let Some(status) = error.status() {
        return status.code == Code::NotFound;
    }
    error.http_status_code() == Some(404)
}

/// Converts a `NOT_FOUND` error into `Ok(None)`.
///
/// Deleting a resource that was already deleted, or never created, is not an
/// error for cleanup code.
///
/// # Example
/// ```
/// # use google_cloud_samples::ignore_not_found;
/// use google_cloud_gax::error::Error;
/// use google_cloud_gax::error::rpc::{Code, Status};
/// let result: google_cloud_gax::Result<()> =
///     Err(Error::service(Status::default().set_code(Code::NotFound)));
/// assert!(matches!(ignore_not_found(result), Ok(None)));
/// ```
pub fn ignore_not_found<T>(result: gax::Result<T>) -> gax::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e) if is_not_found(&e) => {
            tracing::debug!("ignoring NOT_FOUND error: {e}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};
    use test_case::test_case;

    fn service_error(code: Code) -> Error {
        Error::service(Status::default().set_code(code).set_message("simulated"))
    }

    #[test_case(Code::NotFound, true)]
    #[test_case(Code::PermissionDenied, false)]
    #[test_case(Code::AlreadyExists, false)]
    #[test_case(Code::Unavailable, false)]
    fn not_found(code: Code, want: bool) {
        assert_eq!(is_not_found(&service_error(code)), want);
    }

    #[test]
    fn ignore_success() {
        let got = ignore_not_found(Ok(42));
        assert!(matches!(got, Ok(Some(42))), "{got:?}");
    }

    #[test]
    fn ignore_not_found_error() {
        let got = ignore_not_found::<i32>(Err(service_error(Code::NotFound)));
        assert!(matches!(got, Ok(None)), "{got:?}");
    }

    #[test]
    fn keep_other_errors() {
        let got = ignore_not_found::<i32>(Err(service_error(Code::PermissionDenied)));
        let err = got.expect_err("PERMISSION_DENIED should be preserved");
        assert_eq!(
            err.status().map(|s| s.code.clone()),
            Some(Code::PermissionDenied)
        );
    }

    #[test]
    fn keep_timeouts() {
        let got = ignore_not_found::<i32>(Err(Error::timeout("operation did not finish")));
        assert!(got.is_err(), "{got:?}");
    }
}
