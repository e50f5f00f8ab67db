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

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

// Env values used to configure the client.
pub const WUSUL_ACCOUNT_ID: &str = "WUSUL_ACCOUNT_ID";
pub const WUSUL_SHARED_SECRET: &str = "WUSUL_SHARED_SECRET";
pub const WUSUL_BASE_URL: &str = "WUSUL_BASE_URL";
pub const WUSUL_TIMEOUT_MS: &str = "WUSUL_TIMEOUT_MS";

pub const DEFAULT_BASE_URL: &str = "https://api.wusul.io";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// AsciiSet for a single path segment.
///
/// Unreserved characters stay as is, everything else is percent-encoded.
pub static PATH_SEGMENT_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
