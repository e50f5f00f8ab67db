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

use wusul_core::Result;
use wusul_payload_sig::payload::to_payload;

use super::{decode, path_segment};
use crate::transport::Transport;
use crate::types::{
    AccessPass, ActionResponse, IssueAccessPassParams, ListAccessPassesParams,
    UpdateAccessPassParams,
};

/// Access pass operations: issue, list, update and state transitions.
#[derive(Debug, Clone)]
pub struct AccessPasses {
    transport: Arc<Transport>,
}

impl AccessPasses {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Issue a new access pass.
    ///
    /// ```no_run
    /// # async fn example(client: wusul::Wusul) -> wusul::Result<()> {
    /// use wusul::types::{Classification, IssueAccessPassParams};
    ///
    /// let pass = client
    ///     .access_passes()
    ///     .issue(&IssueAccessPassParams {
    ///         card_template_id: "tpl_1".to_string(),
    ///         full_name: "John Doe".to_string(),
    ///         email: Some("john@example.com".to_string()),
    ///         classification: Some(Classification::FullTime),
    ///         start_date: "2025-01-01T00:00:00Z".to_string(),
    ///         expiration_date: "2026-01-01T00:00:00Z".to_string(),
    ///         ..Default::default()
    ///     })
    ///     .await?;
    /// println!("install link: {:?}", pass.url);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn issue(&self, params: &IssueAccessPassParams) -> Result<AccessPass> {
        let body = to_payload(params)?;
        let value = self.transport.post("/v1/access-passes", Some(&body)).await?;
        decode(value)
    }

    /// List access passes, optionally filtered by template and state.
    pub async fn list(&self, params: Option<&ListAccessPassesParams>) -> Result<Vec<AccessPass>> {
        let sig_payload = params.map(to_payload).transpose()?;
        let value = self
            .transport
            .get("/v1/access-passes", sig_payload.as_ref())
            .await?;
        decode(value)
    }

    /// Update an access pass. Only the fields set are changed.
    pub async fn update(&self, params: &UpdateAccessPassParams) -> Result<AccessPass> {
        let path = format!("/v1/access-passes/{}", path_segment(&params.access_pass_id));
        let body = to_payload(params)?;
        let value = self.transport.patch(&path, Some(&body)).await?;
        decode(value)
    }

    /// Suspend an access pass.
    pub async fn suspend(&self, access_pass_id: &str) -> Result<ActionResponse> {
        self.action(access_pass_id, "suspend").await
    }

    /// Resume a suspended access pass.
    pub async fn resume(&self, access_pass_id: &str) -> Result<ActionResponse> {
        self.action(access_pass_id, "resume").await
    }

    /// Unlink an access pass from its device.
    pub async fn unlink(&self, access_pass_id: &str) -> Result<ActionResponse> {
        self.action(access_pass_id, "unlink").await
    }

    /// Delete an access pass. This can't be undone.
    pub async fn delete(&self, access_pass_id: &str) -> Result<ActionResponse> {
        self.action(access_pass_id, "delete").await
    }

    async fn action(&self, access_pass_id: &str, action: &str) -> Result<ActionResponse> {
        let path = format!(
            "/v1/access-passes/{}/{}",
            path_segment(access_pass_id),
            action
        );
        let value = self.transport.post(&path, None).await?;
        decode(value)
    }
}
