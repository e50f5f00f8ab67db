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

//! Client for the Wusul digital access control API.
//!
//! Every request is signed with the account's shared secret, see
//! [`wusul_payload_sig`] for the scheme.
//!
//! ## Example
//!
//! ```no_run
//! use wusul::types::ListAccessPassesParams;
//! use wusul::types::AccessPassState;
//! use wusul::{Result, Wusul};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Wusul::new("your-account-id", "your-shared-secret")?;
//!
//!     let passes = client
//!         .access_passes()
//!         .list(Some(&ListAccessPassesParams {
//!             state: Some(AccessPassState::Active),
//!             ..Default::default()
//!         }))
//!         .await?;
//!     println!("{} active passes", passes.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! ```bash
//! export WUSUL_ACCOUNT_ID=your-account-id
//! export WUSUL_SHARED_SECRET=your-shared-secret
//! export WUSUL_BASE_URL=https://api.wusul.io  # Optional
//! export WUSUL_TIMEOUT_MS=30000               # Optional
//! ```
//!
//! ```no_run
//! # fn main() -> wusul::Result<()> {
//! let client = wusul::Wusul::from_env()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom transport
//!
//! Requests go through the [`HttpSend`] of a [`Context`]. Pass your own to
//! [`Wusul::with_context`] to change how requests are sent.

mod constants;

mod config;
pub use config::Config;

mod client;
pub use client::Wusul;

mod transport;
pub use transport::Transport;

pub mod resources;
pub mod types;

pub use wusul_core::{Context, Env, Error, ErrorKind, HttpSend, OsEnv, Result, StaticEnv};
pub use wusul_payload_sig::Credential;

/// Create a context that reads the OS environment and sends requests with
/// reqwest.
#[cfg(feature = "default-context")]
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(wusul_http_send_reqwest::ReqwestHttpSend::default())
        .with_env(OsEnv)
}
