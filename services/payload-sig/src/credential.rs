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

/// Credential for the Wusul API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Account id, sent as `X-ACCT-ID`.
    pub account_id: String,
    /// Shared secret used to sign payloads. Never transmitted.
    pub shared_secret: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(account_id: impl Into<String>, shared_secret: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            shared_secret: shared_secret.into(),
        }
    }

    /// Both the account id and the shared secret are non-empty.
    pub fn is_valid(&self) -> bool {
        !self.account_id.is_empty() && !self.shared_secret.is_empty()
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("account_id", &Redact::from(&self.account_id))
            .field("shared_secret", &Redact::from(&self.shared_secret))
            .finish()
    }
}
