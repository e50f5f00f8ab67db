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

use serde_json::{Map, Value};
use wusul_core::Result;
use wusul_payload_sig::payload::to_payload;

use super::{decode, path_segment};
use crate::transport::Transport;
use crate::types::{
    ActionResponse, CardTemplate, CreateCardTemplateParams, EventLogEntry, ReadEventLogParams,
    UpdateCardTemplateParams,
};

/// Card template management.
///
/// Console operations are only available to ENTERPRISE accounts, other tiers
/// get an [`wusul_core::ErrorKind::ApiFailed`] back from the server.
#[derive(Debug, Clone)]
pub struct Console {
    transport: Arc<Transport>,
}

impl Console {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Create a card template.
    pub async fn create_template(&self, params: &CreateCardTemplateParams) -> Result<CardTemplate> {
        let body = to_payload(params)?;
        let value = self
            .transport
            .post("/v1/console/card-templates", Some(&body))
            .await?;
        decode(value)
    }

    /// Read a card template.
    pub async fn read_template(&self, card_template_id: &str) -> Result<CardTemplate> {
        let path = format!("/v1/console/card-templates/{}", path_segment(card_template_id));
        let sig_payload = id_payload(card_template_id);
        let value = self.transport.get(&path, Some(&sig_payload)).await?;
        decode(value)
    }

    /// Update a card template. Only the fields set are changed.
    pub async fn update_template(&self, params: &UpdateCardTemplateParams) -> Result<CardTemplate> {
        let path = format!(
            "/v1/console/card-templates/{}",
            path_segment(&params.card_template_id)
        );
        let body = to_payload(params)?;
        let value = self.transport.patch(&path, Some(&body)).await?;
        decode(value)
    }

    /// Publish a card template so passes can be issued from it.
    pub async fn publish_template(&self, card_template_id: &str) -> Result<ActionResponse> {
        let path = format!(
            "/v1/console/card-templates/{}/publish",
            path_segment(card_template_id)
        );
        let value = self.transport.post(&path, None).await?;
        decode(value)
    }

    /// Read the event log of a card template.
    pub async fn event_log(&self, params: &ReadEventLogParams) -> Result<Vec<EventLogEntry>> {
        let path = format!(
            "/v1/console/card-templates/{}/logs",
            path_segment(&params.card_template_id)
        );

        // The id comes first, followed by the filters in field order.
        let mut sig_payload = id_payload(&params.card_template_id);
        if let Some(filters) = &params.filters {
            if let (Value::Object(map), Value::Object(filters)) =
                (&mut sig_payload, to_payload(filters)?)
            {
                map.extend(filters);
            }
        }

        let value = self.transport.get(&path, Some(&sig_payload)).await?;
        decode(value)
    }
}

fn id_payload(id: &str) -> Value {
    let mut map = Map::with_capacity(1);
    map.insert("id".to_string(), Value::String(id.to_string()));
    Value::Object(map)
}
