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

use anyhow::Result;
use http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use wusul::types::{
    CardTemplateDesign, CreateCardTemplateParams, EventDevice, EventLogFilters, EventType,
    Platform, Protocol, ReadEventLogParams, UpdateCardTemplateParams, UseCase,
};
use wusul::ErrorKind;

use super::*;

const TEMPLATE: &str = r##"{
    "id": "tpl_1",
    "name": "Employee Badge",
    "platform": "apple",
    "useCase": "employee_badge",
    "protocol": "desfire",
    "allowOnMultipleDevices": true,
    "watchCount": 2,
    "iphoneCount": 3,
    "design": {"backgroundColor": "#FFFFFF"},
    "createdAt": "2025-01-01T00:00:00Z",
    "updatedAt": "2025-01-01T00:00:00Z"
}"##;

#[tokio::test]
async fn test_create_template() -> Result<()> {
    let mock = MockHttpSend::default();
    mock.respond(StatusCode::CREATED, &format!(r#"{{"data":{TEMPLATE}}}"#));

    let params = CreateCardTemplateParams {
        allow_on_multiple_devices: Some(true),
        design: Some(CardTemplateDesign {
            background_color: Some("#FFFFFF".to_string()),
            ..Default::default()
        }),
        ..CreateCardTemplateParams::new(
            "Employee Badge",
            Platform::Apple,
            UseCase::EmployeeBadge,
            Protocol::Desfire,
        )
    };
    let tpl = client(&mock).console().create_template(&params).await?;

    assert_eq!(tpl.id, "tpl_1");
    assert_eq!(tpl.watch_count, Some(2));

    let req = mock.single();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.uri.path(), "/v1/console/card-templates");
    assert_eq!(
        body_json(&req),
        json!({
            "name": "Employee Badge",
            "platform": "apple",
            "useCase": "employee_badge",
            "protocol": "desfire",
            "allowOnMultipleDevices": true,
            "design": {"backgroundColor": "#FFFFFF"}
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_read_template_signs_id() -> Result<()> {
    let mock = MockHttpSend::default();
    mock.respond(StatusCode::OK, TEMPLATE);

    let tpl = client(&mock).console().read_template("tpl_1").await?;
    assert_eq!(tpl.platform, Platform::Apple);

    let req = mock.single();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.uri.path(), "/v1/console/card-templates/tpl_1");
    assert_eq!(sig_payload(&req), "eyJpZCI6InRwbF8xIn0=");
    assert_eq!(
        header(&req, "x-payload-sig"),
        "2831d4868d9e3b3d3880f360fbe7da92fdc19ee30f88b7698b47c556a0f43553"
    );
    Ok(())
}

#[tokio::test]
async fn test_update_template_moves_id_to_path() -> Result<()> {
    let mock = MockHttpSend::default();
    mock.respond(StatusCode::OK, TEMPLATE);

    let params = UpdateCardTemplateParams {
        card_template_id: "tpl_1".to_string(),
        name: Some("Visitor Badge".to_string()),
        watch_count: Some(1),
        ..Default::default()
    };
    client(&mock).console().update_template(&params).await?;

    let req = mock.single();
    assert_eq!(req.method, Method::PATCH);
    assert_eq!(req.uri.path(), "/v1/console/card-templates/tpl_1");
    assert_eq!(body_text(&req), r#"{"name":"Visitor Badge","watchCount":1}"#);
    Ok(())
}

#[tokio::test]
async fn test_publish_template() -> Result<()> {
    let mock = MockHttpSend::default();
    mock.respond(StatusCode::OK, r#"{"success":true}"#);

    let resp = client(&mock).console().publish_template("tpl_1").await?;
    assert!(resp.success);
    assert_eq!(resp.message, None);

    let req = mock.single();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.uri.path(), "/v1/console/card-templates/tpl_1/publish");
    assert!(req.body.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_event_log_signs_id_then_filters() -> Result<()> {
    let mock = MockHttpSend::default();
    mock.respond(
        StatusCode::OK,
        r#"{"data":[{"id":"evt_1","type":"install","timestamp":"2025-03-01T12:00:00Z","device":"mobile"}]}"#,
    );

    let params = ReadEventLogParams {
        card_template_id: "tpl_1".to_string(),
        filters: Some(EventLogFilters {
            device: Some(EventDevice::Mobile),
            event_type: Some(EventType::Install),
            ..Default::default()
        }),
    };
    let events = client(&mock).console().event_log(&params).await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type, EventType::Install);

    let req = mock.single();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.uri.path(), "/v1/console/card-templates/tpl_1/logs");
    assert_eq!(
        sig_payload_json(&req),
        r#"{"id":"tpl_1","device":"mobile","event_type":"install"}"#
    );
    assert_eq!(
        sig_payload(&req),
        "eyJpZCI6InRwbF8xIiwiZGV2aWNlIjoibW9iaWxlIiwiZXZlbnRfdHlwZSI6Imluc3RhbGwifQ=="
    );
    Ok(())
}

#[tokio::test]
async fn test_event_log_without_filters() -> Result<()> {
    let mock = MockHttpSend::default();
    mock.respond(StatusCode::OK, "[]");

    let params = ReadEventLogParams {
        card_template_id: "tpl_1".to_string(),
        filters: None,
    };
    let events = client(&mock).console().event_log(&params).await?;
    assert!(events.is_empty());

    assert_eq!(sig_payload_json(&mock.single()), r#"{"id":"tpl_1"}"#);
    Ok(())
}

#[tokio::test]
async fn test_forbidden_for_lower_tiers() -> Result<()> {
    let mock = MockHttpSend::default();
    mock.respond(
        StatusCode::FORBIDDEN,
        r#"{"message":"console requires an ENTERPRISE account"}"#,
    );

    let err = client(&mock)
        .console()
        .read_template("tpl_1")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ApiFailed);
    assert_eq!(err.status(), Some(403));
    assert_eq!(
        err.to_string(),
        "Wusul API error (403): console requires an ENTERPRISE account"
    );
    Ok(())
}
