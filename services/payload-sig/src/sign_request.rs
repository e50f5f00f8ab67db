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

use http::header::{HeaderName, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue};
use log::debug;
use serde_json::Value;
use wusul_core::{Error, Result};

use crate::constants::{CONTENT_TYPE_JSON, SIG_PAYLOAD, X_ACCT_ID, X_PAYLOAD_SIG};
use crate::credential::Credential;
use crate::payload::encode_or_default;
use crate::signature::sign;

/// Build the auth headers for a request whose body is the signed payload.
///
/// Absent payloads (`None`, `null`, `{}`) sign `{"id":"0"}` instead.
pub fn build_write_headers(cred: &Credential, payload: Option<&Value>) -> Result<HeaderMap> {
    let encoded = encode_or_default(payload);
    build_headers(cred, &encoded)
}

/// Build the auth headers for a read request.
///
/// Returns the headers together with the encoded payload that was signed.
/// That exact string must be sent as the `sig_payload` query parameter.
pub fn build_read_headers(
    cred: &Credential,
    sig_payload: Option<&Value>,
) -> Result<(HeaderMap, String)> {
    let encoded = encode_or_default(sig_payload);
    let headers = build_headers(cred, &encoded)?;
    Ok((headers, encoded))
}

fn build_headers(cred: &Credential, encoded: &str) -> Result<HeaderMap> {
    let signature = sign(&cred.shared_secret, encoded);

    let account_id = HeaderValue::from_str(&cred.account_id).map_err(|e| {
        Error::config_invalid("account_id is not a valid header value").with_source(e)
    })?;
    let mut signature: HeaderValue = signature.parse()?;
    signature.set_sensitive(true);

    let mut headers = HeaderMap::with_capacity(3);
    headers.insert(HeaderName::from_static(X_ACCT_ID), account_id);
    headers.insert(HeaderName::from_static(X_PAYLOAD_SIG), signature);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
    Ok(headers)
}

/// RequestSigner applies the payload signature scheme to outgoing requests.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credential: Credential,
}

impl RequestSigner {
    /// Create a new signer for this credential.
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }

    /// Sign a request that carries `body` as its JSON entity.
    pub fn sign_write(&self, req: &mut http::request::Parts, body: Option<&Value>) -> Result<()> {
        let headers = build_write_headers(&self.credential, body)?;
        req.headers.extend(headers);

        debug!("signed {} {} with body payload", req.method, req.uri.path());
        Ok(())
    }

    /// Sign a read request, appending the signed payload to the query.
    ///
    /// Existing query pairs are kept in place.
    pub fn sign_read(
        &self,
        req: &mut http::request::Parts,
        sig_payload: Option<&Value>,
    ) -> Result<()> {
        let (headers, encoded) = build_read_headers(&self.credential, sig_payload)?;
        req.headers.extend(headers);

        let mut query = req.uri.query().unwrap_or_default().to_string();
        form_urlencoded::Serializer::for_suffix(&mut query, 0)
            .append_pair(SIG_PAYLOAD, &encoded)
            .finish();

        let mut parts = req.uri.clone().into_parts();
        parts.path_and_query = Some(format!("{}?{}", req.uri.path(), query).try_into()?);
        req.uri = http::Uri::from_parts(parts)?;

        debug!("signed {} {} with query payload", req.method, req.uri.path());
        Ok(())
    }
}
