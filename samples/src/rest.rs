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

//! Plumbing for the services called through their REST APIs.
//!
//! Batch and Game Services have no generated client in this workspace. Their
//! clients send JSON over HTTP with [RestClient], and wait for long-running
//! operations with [until_done].

use google_cloud_auth::credentials::{CacheableResource, Credentials};
use google_cloud_gax::Result;
use google_cloud_gax::error::Error;
use google_cloud_gax::error::rpc::{Code, Status};
use http::Extensions;
use reqwest::Method;
use std::time::Duration;

/// A long-running operation returned by mutations.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Operation {
    pub name: String,
    pub done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Status>,
    /// The result of a successful operation, including its `@type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Value>,
}

impl Operation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    pub fn set_done(mut self, v: bool) -> Self {
        self.done = v;
        self
    }

    pub fn set_error(mut self, v: Status) -> Self {
        self.error = Some(v);
        self
    }

    /// Sets the response to the JSON representation of `v`.
    pub fn set_response<T: serde::Serialize>(mut self, v: &T) -> Self {
        self.response = serde_json::to_value(v).ok();
        self
    }

    /// Decodes the response of a finished operation.
    ///
    /// Operations without a response, such as deletes, decode as
    /// `T::default()`.
    pub fn response_as<T>(&self) -> Result<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        match &self.response {
            None => Ok(T::default()),
            Some(v) => serde_json::from_value(v.clone()).map_err(Error::deser),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetOperationRequest {
    pub name: String,
}

/// Controls how long clients wait for operations.
///
/// The delay between polls starts at `initial_delay` and doubles after each
/// poll, up to `maximum_delay`.
#[derive(Clone, Debug, PartialEq)]
pub struct PollingPolicy {
    initial_delay: Duration,
    maximum_delay: Duration,
    deadline: Duration,
}

impl PollingPolicy {
    pub fn new(initial_delay: Duration, maximum_delay: Duration, deadline: Duration) -> Self {
        Self {
            initial_delay,
            maximum_delay: maximum_delay.max(initial_delay),
            deadline,
        }
    }

    /// The delay before poll number `attempt`, starting at 1.
    fn delay(&self, attempt: u32) -> Duration {
        let scale = 2_u32.saturating_pow(attempt.saturating_sub(1));
        self.initial_delay
            .saturating_mul(scale)
            .min(self.maximum_delay)
    }
}

impl Default for PollingPolicy {
    fn default() -> Self {
        Self::new(
            Duration::from_secs(1),
            Duration::from_secs(30),
            Duration::from_secs(30 * 60),
        )
    }
}

/// Polls `operation` with `poll` until it is done.
///
/// Returns the finished operation. An operation that finished with an error
/// returns that error as a service error. Gives up with a timeout error when
/// the next poll would start after the policy deadline.
pub(crate) async fn until_done<F, Fut>(
    policy: &PollingPolicy,
    operation: Operation,
    poll: F,
) -> Result<Operation>
where
    F: Fn(GetOperationRequest) -> Fut,
    Fut: std::future::Future<Output = Result<Operation>>,
{
    let deadline = tokio::time::Instant::now() + policy.deadline;
    let mut operation = operation;
    let mut attempt = 0_u32;
    while !operation.done {
        attempt += 1;
        let delay = policy.delay(attempt);
        if tokio::time::Instant::now() + delay > deadline {
            return Err(Error::timeout(format!(
                "operation {} did not finish after {attempt} polls",
                operation.name
            )));
        }
        tokio::time::sleep(delay).await;
        tracing::debug!("polling operation {}", operation.name);
        operation = poll(GetOperationRequest {
            name: operation.name.clone(),
        })
        .await?;
    }
    match operation.error.take() {
        Some(status) => Err(Error::service(status)),
        None => Ok(operation),
    }
}

/// Sends JSON requests to `{endpoint}/v1/{path}` with Application Default
/// Credentials.
#[derive(Clone, Debug)]
pub(crate) struct RestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
}

impl RestClient {
    pub(crate) fn new(cred: Credentials, endpoint: String) -> Self {
        Self {
            inner: reqwest::Client::new(),
            cred,
            endpoint,
        }
    }

    pub(crate) fn builder(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}/v1/{path}", self.endpoint))
    }

    pub(crate) async fn execute<I, O>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<&I>,
    ) -> Result<O>
    where
        I: serde::Serialize + ?Sized,
        O: serde::de::DeserializeOwned + Default,
    {
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let cached_auth_headers = self
            .cred
            .headers(Extensions::new())
            .await
            .map_err(|e| service_error(Code::Unauthenticated, format!("cannot create auth headers: {e}")))?;
        let auth_headers = match cached_auth_headers {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => {
                return Err(service_error(
                    Code::Unauthenticated,
                    "auth headers were not returned",
                ));
            }
        };
        for (key, value) in auth_headers.iter() {
            builder = builder.header(key, value);
        }

        let request = builder
            .build()
            .map_err(|e| service_error(Code::InvalidArgument, format!("invalid request: {e}")))?;
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");
        let response = self
            .inner
            .execute(request)
            .await
            .map_err(map_send_error)?;
        if !response.status().is_success() {
            return to_http_error(response).await;
        }
        to_http_response(response).await
    }
}

/// The body of requests without one.
#[derive(serde::Serialize)]
pub(crate) struct NoBody;

pub(crate) fn page_query(
    builder: reqwest::RequestBuilder,
    page_size: i32,
    page_token: &str,
) -> reqwest::RequestBuilder {
    let builder = match page_size {
        0 => builder,
        n => builder.query(&[("pageSize", n)]),
    };
    match page_token {
        "" => builder,
        t => builder.query(&[("pageToken", t)]),
    }
}

fn service_error<M: Into<String>>(code: Code, message: M) -> Error {
    Error::service(Status::default().set_code(code).set_message(message))
}

fn map_send_error(err: reqwest::Error) -> Error {
    match err {
        e if e.is_timeout() => Error::timeout(e),
        e => service_error(Code::Unavailable, format!("cannot send request: {e}")),
    }
}

// Errors without a `google.rpc.Status` payload, for example from load
// balancers, get the code matching their HTTP status.
fn code_from_http(status: reqwest::StatusCode) -> Code {
    match status.as_u16() {
        400 => Code::InvalidArgument,
        401 => Code::Unauthenticated,
        403 => Code::PermissionDenied,
        404 => Code::NotFound,
        409 => Code::Aborted,
        429 => Code::ResourceExhausted,
        499 => Code::Cancelled,
        501 => Code::Unimplemented,
        503 => Code::Unavailable,
        504 => Code::DeadlineExceeded,
        _ if status.is_client_error() => Code::FailedPrecondition,
        _ if status.is_server_error() => Code::Internal,
        _ => Code::Unknown,
    }
}

async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| service_error(Code::Unavailable, format!("cannot read error body: {e}")))?;

    let status = match Status::try_from(&body) {
        Ok(status) => status,
        Err(_) => Status::default()
            .set_code(code_from_http(status_code))
            .set_message(format!(
                "HTTP {status_code}: {}",
                String::from_utf8_lossy(&body)
            )),
    };
    Err(Error::service(status))
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<O> {
    // Some deletes reply with 204 and no body.
    let no_content_status = response.status() == reqwest::StatusCode::NO_CONTENT;
    let body = response
        .bytes()
        .await
        .map_err(|e| service_error(Code::Unavailable, format!("cannot read body: {e}")))?;
    match body {
        content if content.is_empty() && no_content_status => Ok(O::default()),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser),
    }
}
