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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Platform, Protocol, UseCase};

/// Visual design of a card template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTemplateDesign {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_image: Option<String>,
}

/// Support contacts shown on the back of a pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy_policy_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_and_conditions_url: Option<String>,
}

/// A card template that access passes are issued from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTemplate {
    pub id: String,
    pub name: String,
    pub platform: Platform,
    pub use_case: UseCase,
    pub protocol: Protocol,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_on_multiple_devices: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iphone_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design: Option<CardTemplateDesign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_info: Option<SupportInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Parameters for creating a card template.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardTemplateParams {
    pub name: String,
    pub platform: Platform,
    pub use_case: UseCase,
    pub protocol: Protocol,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_on_multiple_devices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iphone_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design: Option<CardTemplateDesign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_info: Option<SupportInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl CreateCardTemplateParams {
    /// Create params with the required fields and nothing else.
    pub fn new(
        name: impl Into<String>,
        platform: Platform,
        use_case: UseCase,
        protocol: Protocol,
    ) -> Self {
        Self {
            name: name.into(),
            platform,
            use_case,
            protocol,
            allow_on_multiple_devices: None,
            watch_count: None,
            iphone_count: None,
            design: None,
            support_info: None,
            metadata: None,
        }
    }
}

/// Parameters for updating a card template.
///
/// `card_template_id` goes into the path and is never part of the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardTemplateParams {
    #[serde(skip_serializing)]
    pub card_template_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_on_multiple_devices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iphone_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_info: Option<SupportInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}
