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

mod client;
mod console;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, Request, Response, StatusCode, Uri};
use percent_encoding::percent_decode_str;
use serde_json::Value;
use wusul::{Config, Context, HttpSend, Result, Wusul};
use wusul_core::hash::base64_decode;

pub const ACCOUNT_ID: &str = "test_account";
pub const SHARED_SECRET: &str = "test_secret";

/// A request as seen by the mock.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// HttpSend that records every request and replays queued responses.
#[derive(Debug, Clone, Default)]
pub struct MockHttpSend {
    responses: Arc<Mutex<VecDeque<(StatusCode, String)>>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockHttpSend {
    /// Queue a response for the next request.
    pub fn respond(&self, status: StatusCode, body: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back((status, body.to_string()));
        self
    }

    /// All requests sent so far.
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// The only request sent so far.
    pub fn single(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: Request<Bytes>) -> Result<Response<Bytes>> {
        let (parts, body) = req.into_parts();
        self.requests.lock().unwrap().push(Recorded {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            body,
        });

        let (status, body) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or((StatusCode::OK, "{}".to_string()));
        Ok(Response::builder().status(status).body(Bytes::from(body))?)
    }
}

/// Build a client that talks to `mock`.
pub fn client(mock: &MockHttpSend) -> Wusul {
    let _ = env_logger::builder().is_test(true).try_init();

    Wusul::with_context(
        Config::new(ACCOUNT_ID, SHARED_SECRET),
        Context::new().with_http_send(mock.clone()),
    )
    .expect("client must be valid")
}

/// Header value as str.
pub fn header<'a>(req: &'a Recorded, name: &str) -> &'a str {
    req.headers
        .get(name)
        .unwrap_or_else(|| panic!("header {name} must be set"))
        .to_str()
        .unwrap()
}

/// The raw `sig_payload` query value, still percent-encoded.
pub fn raw_sig_payload(req: &Recorded) -> String {
    req.uri
        .query()
        .unwrap_or_default()
        .split('&')
        .find_map(|pair| pair.strip_prefix("sig_payload="))
        .expect("sig_payload must be set")
        .to_string()
}

/// The `sig_payload` query value as sent, i.e. the signed base64 text.
pub fn sig_payload(req: &Recorded) -> String {
    percent_decode_str(&raw_sig_payload(req))
        .decode_utf8()
        .unwrap()
        .into_owned()
}

/// The JSON text behind the `sig_payload` query value.
pub fn sig_payload_json(req: &Recorded) -> String {
    String::from_utf8(base64_decode(&sig_payload(req)).unwrap()).unwrap()
}

/// The request body as JSON text.
pub fn body_text(req: &Recorded) -> String {
    String::from_utf8(req.body.to_vec()).unwrap()
}

/// The request body as JSON value.
pub fn body_json(req: &Recorded) -> Value {
    serde_json::from_slice(&req.body).unwrap()
}
