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

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A string didn't match any variant of a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl UnknownVariant {
    /// The rejected value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// The value used on the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

string_enum! {
    /// Lifecycle state of an access pass.
    AccessPassState, "access pass state" {
        /// Usable on the device.
        Active => "active",
        /// Temporarily disabled.
        Suspended => "suspended",
        /// Removed from the device it was installed on.
        Unlinked => "unlinked",
        /// Permanently removed.
        Deleted => "deleted",
        /// Past its expiration date.
        Expired => "expired",
    }
}

string_enum! {
    /// Wallet platform of a card template.
    Platform, "platform" {
        /// Apple Wallet.
        Apple => "apple",
        /// Google Wallet.
        Google => "google",
    }
}

string_enum! {
    /// NFC credential protocol.
    Protocol, "protocol" {
        /// MIFARE DESFire.
        Desfire => "desfire",
        /// HID Seos.
        Seos => "seos",
        /// Google Smart Tap.
        SmartTap => "smart_tap",
    }
}

string_enum! {
    /// Employment classification of a pass holder.
    Classification, "classification" {
        FullTime => "full_time",
        Contractor => "contractor",
        PartTime => "part_time",
        Temporary => "temporary",
    }
}

string_enum! {
    /// What a card template is used for.
    UseCase, "use case" {
        /// Corporate employee badge.
        EmployeeBadge => "employee_badge",
        /// Hotel room key.
        Hotel => "hotel",
    }
}

string_enum! {
    /// Account tier. Console operations need [`AccountTier::Enterprise`].
    AccountTier, "account tier" {
        Basic => "BASIC",
        Professional => "PROFESSIONAL",
        Enterprise => "ENTERPRISE",
    }
}

string_enum! {
    /// Device an event was recorded on.
    EventDevice, "event device" {
        /// Phone.
        Mobile => "mobile",
        /// Watch.
        Watch => "watch",
    }
}

string_enum! {
    /// Kind of a template event.
    EventType, "event type" {
        Issue => "issue",
        Install => "install",
        Update => "update",
        Suspend => "suspend",
        Resume => "resume",
        Unlink => "unlink",
    }
}
