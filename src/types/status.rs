// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device lifecycle status.
//!
//! The enum itself is the only list of valid statuses in the crate. Parsing,
//! label validation and serialization all iterate its variants, so adding a
//! variant (and its label in [`DeviceStatus::as_str`]) is enough to make the
//! label accepted everywhere.

use std::fmt;
use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{EnumCount, EnumIter};

use crate::error::ValueError;

/// Lifecycle status of a device.
///
/// Each variant maps to a fixed label. Note that the label of
/// [`DeviceStatus::Initial`] is `"PENDING ACTIVATION"`, not the variant name.
///
/// # Examples
///
/// ```
/// use device_lib::types::DeviceStatus;
///
/// assert_eq!(DeviceStatus::Initial.as_str(), "PENDING ACTIVATION");
/// assert_eq!("ACTIVE".parse::<DeviceStatus>().unwrap(), DeviceStatus::Active);
///
/// // Labels are matched exactly
/// assert!("active".parse::<DeviceStatus>().is_err());
/// assert!("INITIAL".parse::<DeviceStatus>().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumCount,
    EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(into = "&'static str", try_from = "String")]
pub enum DeviceStatus {
    /// Device created but not yet activated.
    #[default]
    Initial,
    /// Device is active.
    Active,
    /// Device is inactive.
    Inactive,
    /// Device state cannot be determined.
    Unknown,
}

impl DeviceStatus {
    /// Returns the status label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Initial => "PENDING ACTIVATION",
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Returns an iterator over every valid status label, in declaration order.
    pub fn labels() -> impl Iterator<Item = &'static str> {
        Self::iter().map(|status| status.as_str())
    }

    /// Returns `true` if `label` is exactly one of the status labels.
    ///
    /// The comparison is case-sensitive and does not trim whitespace.
    #[must_use]
    pub fn is_valid_label(label: &str) -> bool {
        Self::labels().any(|l| l == label)
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceStatus {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValueError::InvalidStatus(s.to_string()))
    }
}

impl TryFrom<String> for DeviceStatus {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DeviceStatus> for &'static str {
    fn from(status: DeviceStatus) -> Self {
        status.as_str()
    }
}
