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

//! Core components for talking to the Wusul API.
//!
//! This crate provides the foundational types and traits shared by the
//! signer and the client crates.
//!
//! ## Overview
//!
//! - **Context**: A container that holds the HTTP sender and the environment
//! - **Traits**: [`HttpSend`] to plug in a transport, [`Env`] to read configuration
//! - **Error**: A single [`Error`] carrying an [`ErrorKind`], and the HTTP
//!   status for API failures
//!
//! ## Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use bytes::Bytes;
//! use wusul_core::{Context, HttpSend, Result};
//!
//! #[derive(Debug)]
//! struct AlwaysOk;
//!
//! #[async_trait]
//! impl HttpSend for AlwaysOk {
//!     async fn http_send(&self, _req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
//!         Ok(http::Response::new(Bytes::from_static(br#"{"status":"ok"}"#)))
//!     }
//! }
//!
//! let ctx = Context::new().with_http_send(AlwaysOk);
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: base64 and SHA256 helpers
//! - [`utils`]: data redaction for `Debug` output

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod utils;

mod context;
pub use context::{Context, NoopEnv, NoopHttpSend};
mod env;
pub use env::{Env, OsEnv, StaticEnv};
mod error;
pub use error::{Error, ErrorKind, Result};
mod http;
pub use http::HttpSend;
