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

use std::sync::Arc;

use serde_json::Value;
use wusul_core::{Context, Error, Result};
use wusul_payload_sig::Credential;

use crate::config::Config;
use crate::resources::{AccessPasses, Console};
use crate::transport::Transport;

/// Client for the Wusul API.
///
/// Cloning is cheap, every clone shares the same transport.
#[derive(Debug, Clone)]
pub struct Wusul {
    transport: Arc<Transport>,
    access_passes: AccessPasses,
    console: Console,
}

impl Wusul {
    /// Create a client with the default base url and timeout.
    #[cfg(feature = "default-context")]
    pub fn new(account_id: impl Into<String>, shared_secret: impl Into<String>) -> Result<Self> {
        Self::with_config(Config::new(account_id, shared_secret))
    }

    /// Create a client from config, using the default context.
    #[cfg(feature = "default-context")]
    pub fn with_config(config: Config) -> Result<Self> {
        Self::with_context(config, crate::default_context())
    }

    /// Create a client from the `WUSUL_*` env values.
    #[cfg(feature = "default-context")]
    pub fn from_env() -> Result<Self> {
        let ctx = crate::default_context();
        let config = Config::default().from_env(&ctx)?;
        Self::with_context(config, ctx)
    }

    /// Create a client that sends requests through `ctx`.
    pub fn with_context(config: Config, ctx: Context) -> Result<Self> {
        let credential = Credential::new(
            config.account_id.clone().unwrap_or_default(),
            config.shared_secret.clone().unwrap_or_default(),
        );
        if !credential.is_valid() {
            return Err(Error::config_invalid(
                "account_id and shared_secret are required",
            ));
        }

        let transport = Arc::new(Transport::new(
            ctx,
            credential,
            config.base_url(),
            config.timeout_ms(),
        ));

        Ok(Self {
            access_passes: AccessPasses::new(transport.clone()),
            console: Console::new(transport.clone()),
            transport,
        })
    }

    /// Access pass operations.
    pub fn access_passes(&self) -> &AccessPasses {
        &self.access_passes
    }

    /// Card template operations.
    pub fn console(&self) -> &Console {
        &self.console
    }

    /// The transport shared by all resources.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Check that the API is reachable and the credential is accepted.
    pub async fn health(&self) -> Result<Value> {
        self.transport.get("/health", None).await
    }
}
