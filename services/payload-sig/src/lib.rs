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

//! Payload signature scheme for the Wusul API.
//!
//! Every request carries three headers:
//!
//! - `X-ACCT-ID`: the account id
//! - `X-PAYLOAD-SIG`: hex SHA256 of the shared secret followed by the encoded payload
//! - `Content-Type: application/json`
//!
//! The encoded payload is standard base64 of the compact JSON payload. Write
//! requests sign their JSON body. Read requests sign a small descriptor and
//! send the encoded form as the `sig_payload` query parameter. Requests with
//! nothing to sign use `{"id":"0"}`.
//!
//! ## Example
//!
//! ```no_run
//! use serde_json::json;
//! use wusul_core::Result;
//! use wusul_payload_sig::{Credential, RequestSigner};
//!
//! fn main() -> Result<()> {
//!     let signer = RequestSigner::new(Credential::new("your-account-id", "your-shared-secret"));
//!
//!     let mut req = http::Request::get("https://api.wusul.io/v1/access-passes")
//!         .body(())
//!         .unwrap()
//!         .into_parts()
//!         .0;
//!     signer.sign_read(&mut req, Some(&json!({"template_id": "tpl_1"})))?;
//!
//!     let mut req = http::Request::post("https://api.wusul.io/v1/access-passes")
//!         .body(())
//!         .unwrap()
//!         .into_parts()
//!         .0;
//!     signer.sign_write(&mut req, Some(&json!({"fullName": "John Doe"})))?;
//!     Ok(())
//! }
//! ```

mod constants;

mod credential;
pub use credential::Credential;

pub mod payload;
pub use payload::{default_payload, encode, encode_payload};

pub mod signature;
pub use signature::{sign, verify};

mod sign_request;
pub use sign_request::{build_read_headers, build_write_headers, RequestSigner};
