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

//! Payload signature engine.

use wusul_core::hash::{constant_time_eq, hex_sha256_concat};

/// Sign an encoded payload with the shared secret.
///
/// The signature is the lowercase hex SHA256 of the secret followed by the
/// encoded payload. No salt, no timestamp: equal inputs give equal output.
pub fn sign(secret: &str, encoded_payload: &str) -> String {
    hex_sha256_concat(&[secret.as_bytes(), encoded_payload.as_bytes()])
}

/// Check that `signature` was produced by [`sign`] for these inputs.
///
/// The comparison runs in constant time over the signature bytes.
pub fn verify(secret: &str, encoded_payload: &str, signature: &str) -> bool {
    let expected = sign(secret, encoded_payload);
    constant_time_eq(expected.as_bytes(), signature.as_bytes())
}
