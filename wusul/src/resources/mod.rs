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

//! Resource facades, one method per API endpoint.

use percent_encoding::utf8_percent_encode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use wusul_core::{Error, Result};

use crate::constants::PATH_SEGMENT_ENCODE_SET;

mod access_passes;
pub use access_passes::AccessPasses;

mod console;
pub use console::Console;

/// Encode an id so it stays a single path segment.
fn path_segment(id: &str) -> String {
    utf8_percent_encode(id, &PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Decode an API value into the expected record.
fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| {
        Error::response_invalid(format!("response doesn't match the expected shape: {e}"))
            .with_source(e)
    })
}
