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

use wusul_core::utils::Redact;
use wusul_core::{Context, Error, Result};

use crate::constants::*;

/// Config for the Wusul client.
#[derive(Clone, Default)]
pub struct Config {
    /// `account_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`WUSUL_ACCOUNT_ID`]
    pub account_id: Option<String>,
    /// `shared_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`WUSUL_SHARED_SECRET`]
    pub shared_secret: Option<String>,
    /// `base_url` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`WUSUL_BASE_URL`]
    /// - default to `https://api.wusul.io`
    pub base_url: Option<String>,
    /// `timeout_ms` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`WUSUL_TIMEOUT_MS`]
    /// - default to `30000`
    pub timeout_ms: Option<u64>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("account_id", &self.account_id)
            .field("shared_secret", &Redact::from(&self.shared_secret))
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl Config {
    /// Create a config with both credentials set.
    pub fn new(account_id: impl Into<String>, shared_secret: impl Into<String>) -> Self {
        Self {
            account_id: Some(account_id.into()),
            shared_secret: Some(shared_secret.into()),
            ..Default::default()
        }
    }

    /// Set the API base url.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the per-request timeout in milliseconds.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Load config from env.
    ///
    /// Fields already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Result<Self> {
        if let Some(v) = ctx.env_var(WUSUL_ACCOUNT_ID) {
            self.account_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(WUSUL_SHARED_SECRET) {
            self.shared_secret.get_or_insert(v);
        }
        if self.base_url.as_deref().map_or(true, str::is_empty) {
            if let Some(v) = ctx.env_var(WUSUL_BASE_URL) {
                self.base_url = Some(v);
            }
        }
        if self.timeout_ms.map_or(true, |t| t == 0) {
            if let Some(v) = ctx.env_var(WUSUL_TIMEOUT_MS) {
                let timeout_ms = v.trim().parse::<u64>().map_err(|e| {
                    Error::config_invalid(format!("{WUSUL_TIMEOUT_MS} is not a valid number: {v}"))
                        .with_source(e)
                })?;
                self.timeout_ms = Some(timeout_ms);
            }
        }

        Ok(self)
    }

    /// The base url to use. Unset or empty falls back to the default.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    /// The timeout in milliseconds to use. Unset or `0` falls back to the default.
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
            .filter(|&t| t > 0)
            .unwrap_or(DEFAULT_TIMEOUT_MS)
    }
}
