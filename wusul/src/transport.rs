// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};
use std::time::Duration;

use bytes::Bytes;
use http::{Method, StatusCode};
use log::debug;
use serde_json::Value;
use wusul_core::{Context, Error, ErrorKind, Result};
use wusul_payload_sig::{Credential, RequestSigner};

const TIMEOUT_MESSAGE: &str = "request timeout - no response received from Wusul API";

/// Transport signs and sends requests to the Wusul API.
///
/// One transport is shared by every resource of a client. Each call is a
/// single round trip bounded by the configured timeout.
pub struct Transport {
    ctx: Context,
    signer: RequestSigner,
    base_url: String,
    timeout: Duration,
}

impl Debug for Transport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("signer", &self.signer)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Transport {
    /// Create a new transport.
    ///
    /// One trailing `/` of `base_url` is dropped so paths can be appended as is.
    pub fn new(ctx: Context, credential: Credential, base_url: &str, timeout_ms: u64) -> Self {
        let base_url = base_url.strip_suffix('/').unwrap_or(base_url);

        Self {
            ctx,
            signer: RequestSigner::new(credential),
            base_url: base_url.to_string(),
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// The base url every path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The timeout applied to every call.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send a signed GET.
    ///
    /// `sig_payload` is signed and sent as the `sig_payload` query parameter.
    pub async fn get(&self, path: &str, sig_payload: Option<&Value>) -> Result<Value> {
        let (mut parts, _) = self.request(Method::GET, path)?.into_parts();
        self.signer.sign_read(&mut parts, sig_payload)?;

        self.send(http::Request::from_parts(parts, Bytes::new())).await
    }

    /// Send a signed POST, with `body` as JSON entity when given.
    pub async fn post(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.send_with_body(Method::POST, path, body).await
    }

    /// Send a signed PATCH, with `body` as JSON entity when given.
    pub async fn patch(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.send_with_body(Method::PATCH, path, body).await
    }

    /// Send a signed DELETE without entity.
    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.send_with_body(Method::DELETE, path, None).await
    }

    async fn send_with_body(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        let (mut parts, _) = self.request(method, path)?.into_parts();
        self.signer.sign_write(&mut parts, body)?;

        // Compact JSON, the same bytes the signature covers.
        let body = match body {
            Some(v) => Bytes::from(v.to_string()),
            None => Bytes::new(),
        };
        self.send(http::Request::from_parts(parts, body)).await
    }

    fn request(&self, method: Method, path: &str) -> Result<http::Request<()>> {
        let req = http::Request::builder()
            .method(method)
            .uri(format!("{}{}", self.base_url, path))
            .body(())?;
        Ok(req)
    }

    async fn send(&self, req: http::Request<Bytes>) -> Result<Value> {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        debug!("sending {} {}{}", method, self.base_url, path);

        let resp = match tokio::time::timeout(self.timeout, self.ctx.http_send_as_string(req)).await
        {
            Ok(Ok(resp)) => resp,
            Ok(Err(err)) if err.kind() == ErrorKind::RequestTimeout => {
                return Err(Error::request_timeout(TIMEOUT_MESSAGE).with_source(err))
            }
            Ok(Err(err)) => {
                return Err(Error::request_failed(format!("request error: {err}")).with_source(err))
            }
            Err(_) => {
                debug!("{} {} timed out after {:?}", method, path, self.timeout);
                return Err(Error::request_timeout(TIMEOUT_MESSAGE));
            }
        };

        debug!("{} {} responded with {}", method, path, resp.status());
        parse_response(resp.status(), resp.into_body())
    }
}

/// Turn a raw response into the value the caller asked for.
///
/// - non-2xx: [`ErrorKind::ApiFailed`] with the server message
/// - JSON object with `data`: the `data` field
/// - other JSON: the whole value
/// - not JSON: the raw text
fn parse_response(status: StatusCode, body: String) -> Result<Value> {
    let parsed = serde_json::from_str::<Value>(&body).ok();

    if !status.is_success() {
        let reason = parsed
            .as_ref()
            .and_then(error_message)
            .unwrap_or_else(|| status_line(status));
        return Err(Error::api_failed(
            status.as_u16(),
            format!("Wusul API error ({}): {}", status.as_u16(), reason),
        ));
    }

    match parsed {
        Some(Value::Object(mut map)) if map.contains_key("data") => {
            Ok(map.remove("data").unwrap_or(Value::Null))
        }
        Some(v) => Ok(v),
        None => Ok(Value::String(body)),
    }
}

/// Server reason for a failed call.
///
/// The API answers `{"error":{"code","message","details"}}`; older
/// deployments send `error` or `message` as plain strings.
fn error_message(value: &Value) -> Option<String> {
    let non_empty = |v: Option<&Value>| {
        v.and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let from_error = match value.get("error") {
        Some(Value::Object(err)) => non_empty(err.get("message")),
        other => non_empty(other),
    };
    from_error.or_else(|| non_empty(value.get("message")))
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
