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

//! Canonical payload encoding.
//!
//! A payload is encoded as the compact JSON text of the value (no whitespace
//! between tokens, keys in the order the caller inserted them) followed by
//! standard padded base64 of its UTF-8 bytes.

use serde::Serialize;
use serde_json::{Map, Value};
use wusul_core::hash::base64_encode;
use wusul_core::{Error, Result};

use crate::constants::{DEFAULT_PAYLOAD_KEY, DEFAULT_PAYLOAD_VALUE};

/// Encode a JSON value into its canonical payload form.
///
/// Mapping keys keep their insertion order, so the same value built in the
/// same order always produces the same bytes.
pub fn encode_payload(value: &Value) -> String {
    base64_encode(value.to_string().as_bytes())
}

/// Encode any serializable value into its canonical payload form.
///
/// Struct fields are emitted in declaration order. Values serde can't turn
/// into JSON are rejected with [`wusul_core::ErrorKind::EncodingFailed`].
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).map_err(|e| {
        Error::encoding_failed(format!("payload can't be serialized: {e}")).with_source(e)
    })?;
    Ok(base64_encode(json.as_bytes()))
}

/// Convert a serializable value into a JSON value, keeping field order.
pub fn to_payload<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| {
        Error::encoding_failed(format!("payload can't be serialized: {e}")).with_source(e)
    })
}

/// The payload signed when a request carries nothing to sign: `{"id":"0"}`.
pub fn default_payload() -> Value {
    let mut map = Map::with_capacity(1);
    map.insert(
        DEFAULT_PAYLOAD_KEY.to_string(),
        Value::String(DEFAULT_PAYLOAD_VALUE.to_string()),
    );
    Value::Object(map)
}

/// Whether the caller supplied something to sign.
///
/// `null` and `{}` count as absent. Every other value, including `0`,
/// `false` and `""`, is signed as given.
pub fn is_present(payload: Option<&Value>) -> bool {
    match payload {
        None | Some(Value::Null) => false,
        Some(Value::Object(map)) => !map.is_empty(),
        Some(_) => true,
    }
}

/// Encode the payload, falling back to [`default_payload`] when absent.
pub fn encode_or_default(payload: Option<&Value>) -> String {
    match payload {
        Some(value) if is_present(payload) => encode_payload(value),
        _ => encode_payload(&default_payload()),
    }
}
