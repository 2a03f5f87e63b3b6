// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plain snapshot of a device.
//!
//! A [`DeviceProjection`] serializes with its keys in this order:
//!
//! ```json
//! {
//!   "id": "<uuid>",
//!   "type": "MACBOOK | IPHONE | IPAD | APPLE_WATCH",
//!   "status": "PENDING ACTIVATION | ACTIVE | INACTIVE | UNKNOWN",
//!   "user_info": { "id": "<uuid>", "name": "<text>", "email": "<text>" }
//! }
//! ```

use crate::error::{ParseError, Result};
use crate::types::{DeviceId, DeviceStatus, DeviceType, DeviceUserInfo, UserId};

/// Snapshot of a device's state at the time it was taken.
///
/// Produced by [`Device::to_projection`](crate::Device::to_projection). It does
/// not track later changes to the device.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeviceProjection {
    /// Device identifier.
    pub id: DeviceId,
    /// Device class, serialized as its label.
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    /// Status at snapshot time, serialized as its label.
    pub status: DeviceStatus,
    /// Owning user.
    pub user_info: UserInfoProjection,
}

/// The `user_info` part of a [`DeviceProjection`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserInfoProjection {
    /// User identifier.
    pub id: UserId,
    /// User name.
    pub name: String,
    /// User email address.
    pub email: String,
}

impl DeviceProjection {
    /// Serializes the projection to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self).map_err(ParseError::from)?)
    }

    /// Serializes the projection to indented JSON.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self).map_err(ParseError::from)?)
    }

    /// Parses a projection from JSON.
    ///
    /// Unknown `type` or `status` labels are rejected.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the input is malformed or a label is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json).map_err(ParseError::from)?)
    }
}

impl From<&DeviceUserInfo> for UserInfoProjection {
    fn from(info: &DeviceUserInfo) -> Self {
        Self {
            id: info.user_id(),
            name: info.name().to_string(),
            email: info.email().to_string(),
        }
    }
}

impl From<UserInfoProjection> for DeviceUserInfo {
    fn from(projection: UserInfoProjection) -> Self {
        DeviceUserInfo::new(projection.id, projection.name, projection.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DeviceProjection {
        DeviceProjection {
            id: "bcde2b57-1e4d-42cc-95bf-e674014b3426".parse().unwrap(),
            device_type: DeviceType::Tablet,
            status: DeviceStatus::Inactive,
            user_info: UserInfoProjection {
                id: "acde2b57-1e4d-42cc-95bf-e674014b3426".parse().unwrap(),
                name: "John Doe".to_string(),
                email: "johndoe@gmail.com".to_string(),
            },
        }
    }

    #[test]
    fn keys_are_in_fixed_order() {
        let json = sample().to_json().unwrap();
        assert_eq!(
            json,
            r#"{"id":"bcde2b57-1e4d-42cc-95bf-e674014b3426","type":"IPAD","status":"INACTIVE","user_info":{"id":"acde2b57-1e4d-42cc-95bf-e674014b3426","name":"John Doe","email":"johndoe@gmail.com"}}"#
        );
    }

    #[test]
    fn from_json_accepts_own_output() {
        let projection = sample();
        let parsed = DeviceProjection::from_json(&projection.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed, projection);
    }

    #[test]
    fn from_json_rejects_unknown_status() {
        let json = r#"{"id":"bcde2b57-1e4d-42cc-95bf-e674014b3426","type":"IPAD","status":"BROKEN","user_info":{"id":"acde2b57-1e4d-42cc-95bf-e674014b3426","name":"","email":""}}"#;
        let err = DeviceProjection::from_json(json).unwrap_err();
        assert!(matches!(err, crate::Error::Parse(ParseError::Json(_))));
    }

    #[test]
    fn user_info_conversion() {
        let info = DeviceUserInfo::new(UserId::new(), "Kent Beck", "kent.beck@email.com");
        let projection = UserInfoProjection::from(&info);
        assert_eq!(projection.id, info.user_id());
        assert_eq!(DeviceUserInfo::from(projection), info);
    }
}
