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

use std::time::Duration;

use anyhow::Result;
use http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;
use wusul::ErrorKind;

use super::*;

#[derive(Debug)]
struct NeverHttpSend;

#[async_trait]
impl HttpSend for NeverHttpSend {
    async fn http_send(&self, _: Request<Bytes>) -> wusul::Result<Response<Bytes>> {
        std::future::pending::<wusul::Result<Response<Bytes>>>().await
    }
}

#[test_case("", "secret"; "empty account id")]
#[test_case("acct", ""; "empty secret")]
#[test_case("", ""; "both empty")]
fn test_empty_credentials_are_rejected(account_id: &str, shared_secret: &str) {
    let err = Wusul::with_context(Config::new(account_id, shared_secret), Context::new())
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert_eq!(err.to_string(), "account_id and shared_secret are required");
}

#[test]
fn test_missing_credentials_are_rejected() {
    let err = Wusul::with_context(Config::default(), Context::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}

#[test]
fn test_defaults() {
    let client = client(&MockHttpSend::default());

    assert_eq!(client.transport().base_url(), "https://api.wusul.io");
    assert_eq!(client.transport().timeout(), Duration::from_secs(30));
}

#[test]
fn test_custom_base_url_and_timeout() {
    let client = Wusul::with_context(
        Config::new(ACCOUNT_ID, SHARED_SECRET)
            .with_base_url("http://localhost:3000/")
            .with_timeout_ms(1500),
        Context::new(),
    )
    .unwrap();

    assert_eq!(client.transport().base_url(), "http://localhost:3000");
    assert_eq!(client.transport().timeout(), Duration::from_millis(1500));
}

#[tokio::test]
async fn test_empty_base_url_and_zero_timeout_use_defaults() -> Result<()> {
    let mock = MockHttpSend::default();
    let client = Wusul::with_context(
        Config::new(ACCOUNT_ID, SHARED_SECRET)
            .with_base_url("")
            .with_timeout_ms(0),
        Context::new().with_http_send(mock.clone()),
    )?;

    assert_eq!(client.transport().base_url(), "https://api.wusul.io");
    assert_eq!(client.transport().timeout(), Duration::from_secs(30));

    client.health().await?;
    assert_eq!(mock.single().uri.host(), Some("api.wusul.io"));
    Ok(())
}

#[tokio::test]
async fn test_health() -> Result<()> {
    let mock = MockHttpSend::default();
    mock.respond(StatusCode::OK, r#"{"status":"ok","version":"1.0.0"}"#);

    let value = client(&mock).health().await?;
    assert_eq!(value, json!({"status": "ok", "version": "1.0.0"}));

    let req = mock.single();
    assert_eq!(req.method, Method::GET);
    assert_eq!(
        req.uri.to_string(),
        "https://api.wusul.io/health?sig_payload=eyJpZCI6IjAifQ%3D%3D"
    );
    assert_eq!(header(&req, "x-acct-id"), ACCOUNT_ID);
    assert_eq!(
        header(&req, "x-payload-sig"),
        "4b773ad252c6891113571613157c69705a8a5808516a2744fb89c3176e4e2c80"
    );
    Ok(())
}

#[tokio::test]
async fn test_clients_share_transport() -> Result<()> {
    let mock = MockHttpSend::default();
    let client = client(&mock);
    let cloned = client.clone();

    client.health().await?;
    cloned.access_passes().suspend("abc").await?;
    cloned.console().publish_template("tpl_1").await?;

    assert_eq!(mock.requests().len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_timeout() {
    let _ = env_logger::builder().is_test(true).try_init();

    let client = Wusul::with_context(
        Config::new(ACCOUNT_ID, SHARED_SECRET).with_timeout_ms(50),
        Context::new().with_http_send(NeverHttpSend),
    )
    .unwrap();

    let err = client.access_passes().list(None).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestTimeout);
    assert_eq!(
        err.to_string(),
        "request timeout - no response received from Wusul API"
    );
}

#[tokio::test]
async fn test_no_http_client_is_request_failed() {
    let client =
        Wusul::with_context(Config::new(ACCOUNT_ID, SHARED_SECRET), Context::new()).unwrap();

    let err = client.health().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestFailed);
    assert!(err.to_string().starts_with("request error: "));
}

#[test]
fn test_from_env() {
    temp_env::with_vars(
        [
            ("WUSUL_ACCOUNT_ID", Some("env_account")),
            ("WUSUL_SHARED_SECRET", Some("env_secret")),
            ("WUSUL_BASE_URL", Some("https://sandbox.wusul.io/")),
            ("WUSUL_TIMEOUT_MS", Some("5000")),
        ],
        || {
            let client = Wusul::from_env().expect("client must be valid");

            assert_eq!(client.transport().base_url(), "https://sandbox.wusul.io");
            assert_eq!(client.transport().timeout(), Duration::from_secs(5));
        },
    );
}

#[test]
fn test_from_env_without_credentials() {
    temp_env::with_vars_unset(["WUSUL_ACCOUNT_ID", "WUSUL_SHARED_SECRET"], || {
        let err = Wusul::from_env().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    });
}
