// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device classification.

use std::fmt;
use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{EnumCount, EnumIter};

use crate::error::ValueError;

/// Class of a device.
///
/// | Variant | Label |
/// |---------|-------|
/// | `Pc` | `MACBOOK` |
/// | `Phone` | `IPHONE` |
/// | `Tablet` | `IPAD` |
/// | `Watch` | `APPLE_WATCH` |
///
/// # Examples
///
/// ```
/// use device_lib::types::DeviceType;
///
/// assert_eq!(DeviceType::Phone.as_str(), "IPHONE");
/// assert_eq!("IPAD".parse::<DeviceType>().unwrap(), DeviceType::Tablet);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumCount,
    EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(into = "&'static str", try_from = "String")]
pub enum DeviceType {
    /// Laptop or desktop computer.
    Pc,
    /// Phone.
    Phone,
    /// Tablet.
    Tablet,
    /// Watch.
    Watch,
}

impl DeviceType {
    /// Returns the display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pc => "MACBOOK",
            Self::Phone => "IPHONE",
            Self::Tablet => "IPAD",
            Self::Watch => "APPLE_WATCH",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|device_type| device_type.as_str() == s)
            .ok_or_else(|| ValueError::InvalidDeviceType(s.to_string()))
    }
}

impl TryFrom<String> for DeviceType {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DeviceType> for &'static str {
    fn from(device_type: DeviceType) -> Self {
        device_type.as_str()
    }
}
