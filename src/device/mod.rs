// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The device entity.
//!
//! A [`Device`] has an identity, a class and an owning user that are fixed
//! when it is created, and a status that can change for its whole lifetime.
//!
//! # Status Validation
//!
//! [`Device::set_status`] accepts a text label and only assigns it if it is
//! exactly the label of one of the [`DeviceStatus`] variants. On failure the
//! status is left untouched.
//!
//! ```
//! use device_lib::{Device, DeviceType, DeviceUserInfo, UserId};
//!
//! # fn main() -> device_lib::Result<()> {
//! let user_info = DeviceUserInfo::new(UserId::new(), "John Doe", "johndoe@gmail.com");
//! let device = Device::new(device_lib::DeviceId::new(), DeviceType::Phone, user_info);
//! assert_eq!(device.get_status(), "PENDING ACTIVATION");
//!
//! device.set_status("ACTIVE")?;
//! assert_eq!(device.get_status(), "ACTIVE");
//!
//! assert!(device.set_status("active").is_err());
//! assert_eq!(device.get_status(), "ACTIVE");
//! # Ok(())
//! # }
//! ```
//!
//! # Sharing
//!
//! Status reads and writes take `&self` and go through a lock, so a device can
//! be wrapped in an `Arc` and updated from several threads.

mod builder;

pub use builder::DeviceBuilder;

use parking_lot::RwLock;

use crate::error::Result;
use crate::projection::{DeviceProjection, UserInfoProjection};
use crate::state::StatusChange;
use crate::types::{DeviceId, DeviceStatus, DeviceType, DeviceUserInfo};

/// A device owned by a user.
#[derive(Debug)]
pub struct Device {
    id: DeviceId,
    device_type: DeviceType,
    user_info: DeviceUserInfo,
    status: RwLock<DeviceStatus>,
}

impl Device {
    /// Creates a device with status [`DeviceStatus::Initial`].
    #[must_use]
    pub fn new(id: DeviceId, device_type: DeviceType, user_info: DeviceUserInfo) -> Self {
        Self::with_status(id, device_type, user_info, DeviceStatus::Initial)
    }

    /// Creates a builder for a device of the given type and user.
    ///
    /// # Examples
    ///
    /// ```
    /// use device_lib::{Device, DeviceStatus, DeviceType, DeviceUserInfo, UserId};
    ///
    /// let user_info = DeviceUserInfo::new(UserId::new(), "Kent Beck", "kent.beck@email.com");
    /// let device = Device::builder(DeviceType::Pc, user_info)
    ///     .with_status(DeviceStatus::Active)
    ///     .build();
    ///
    /// assert_eq!(device.get_status(), "ACTIVE");
    /// ```
    #[must_use]
    pub fn builder(device_type: DeviceType, user_info: DeviceUserInfo) -> DeviceBuilder {
        DeviceBuilder::new(device_type, user_info)
    }

    pub(crate) fn with_status(
        id: DeviceId,
        device_type: DeviceType,
        user_info: DeviceUserInfo,
        status: DeviceStatus,
    ) -> Self {
        tracing::debug!(
            device_id = %id,
            device_type = %device_type,
            status = %status,
            "Created device"
        );
        Self {
            id,
            device_type,
            user_info,
            status: RwLock::new(status),
        }
    }

    /// Returns the device identifier.
    #[must_use]
    pub const fn id(&self) -> DeviceId {
        self.id
    }

    /// Returns the device class.
    #[must_use]
    pub const fn device_type(&self) -> DeviceType {
        self.device_type
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_info(&self) -> &DeviceUserInfo {
        &self.user_info
    }

    /// Returns the current status.
    #[must_use]
    pub fn status(&self) -> DeviceStatus {
        *self.status.read()
    }

    /// Returns the label of the current status.
    #[must_use]
    pub fn get_status(&self) -> &'static str {
        self.status().as_str()
    }

    /// Sets the status from its label.
    ///
    /// `status` must exactly match one of the [`DeviceStatus`] labels
    /// (case-sensitive, no trimming). Any status may follow any other.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidStatus` carrying the rejected value if
    /// `status` is not a valid label. The current status is left unchanged.
    pub fn set_status(&self, status: &str) -> Result<()> {
        let status = status.parse::<DeviceStatus>().inspect_err(|_| {
            tracing::warn!(device_id = %self.id, status, "Rejected invalid status");
        })?;
        self.set_device_status(status);
        Ok(())
    }

    /// Sets the status from a typed value.
    ///
    /// Returns the applied change; setting the current status again is a
    /// no-op change.
    pub fn set_device_status(&self, status: DeviceStatus) -> StatusChange {
        let from = std::mem::replace(&mut *self.status.write(), status);
        let change = StatusChange::new(from, status);

        if change.is_noop() {
            tracing::trace!(device_id = %self.id, status = %status, "Status unchanged");
        } else {
            tracing::debug!(
                device_id = %self.id,
                from = %change.from,
                to = %change.to,
                "Status changed"
            );
        }

        change
    }

    /// Returns a snapshot of the device's current state.
    ///
    /// # Examples
    ///
    /// ```
    /// use device_lib::{Device, DeviceId, DeviceType, DeviceUserInfo, UserId};
    ///
    /// let user_info = DeviceUserInfo::new(UserId::new(), "John Doe", "johndoe@gmail.com");
    /// let device = Device::new(DeviceId::new(), DeviceType::Watch, user_info);
    ///
    /// let projection = device.to_projection();
    /// assert_eq!(projection.device_type.as_str(), "APPLE_WATCH");
    /// assert_eq!(projection.user_info.name, "John Doe");
    /// ```
    #[must_use]
    pub fn to_projection(&self) -> DeviceProjection {
        DeviceProjection {
            id: self.id,
            device_type: self.device_type,
            status: self.status(),
            user_info: UserInfoProjection::from(&self.user_info),
        }
    }
}

impl Clone for Device {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            device_type: self.device_type,
            user_info: self.user_info.clone(),
            status: RwLock::new(self.status()),
        }
    }
}

impl From<DeviceProjection> for Device {
    fn from(projection: DeviceProjection) -> Self {
        Self::with_status(
            projection.id,
            projection.device_type,
            projection.user_info.into(),
            projection.status,
        )
    }
}

impl serde::Serialize for Device {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_projection(), serializer)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::error::{Error, ValueError};
    use crate::types::UserId;

    fn device(device_type: DeviceType) -> Device {
        let user_info = DeviceUserInfo::new(UserId::new(), "Kent Beck", "kent.beck@email.com");
        Device::new(DeviceId::new(), device_type, user_info)
    }

    #[test]
    fn new_device_is_initial() {
        for device_type in DeviceType::iter() {
            let device = device(device_type);
            assert_eq!(device.status(), DeviceStatus::Initial);
            assert_eq!(device.get_status(), "PENDING ACTIVATION");
        }
    }

    #[test]
    fn set_status_accepts_every_label() {
        let device = device(DeviceType::Pc);
        for status in DeviceStatus::iter() {
            device.set_status(status.as_str()).unwrap();
            assert_eq!(device.get_status(), status.as_str());
        }
    }

    #[test]
    fn set_status_rejects_and_keeps_previous() {
        let device = device(DeviceType::Pc);
        device.set_status("INACTIVE").unwrap();

        let err = device.set_status("SOME INVALID STATUS").unwrap_err();
        assert!(matches!(
            err,
            Error::Value(ValueError::InvalidStatus(ref s)) if s == "SOME INVALID STATUS"
        ));
        assert_eq!(device.get_status(), "INACTIVE");
    }

    #[test]
    fn set_device_status_reports_change() {
        let device = device(DeviceType::Tablet);

        let change = device.set_device_status(DeviceStatus::Active);
        assert_eq!(
            change,
            StatusChange::new(DeviceStatus::Initial, DeviceStatus::Active)
        );

        let change = device.set_device_status(DeviceStatus::Active);
        assert!(change.is_noop());

        let change = device.set_device_status(DeviceStatus::Initial);
        assert_eq!(change.from, DeviceStatus::Active);
        assert_eq!(device.get_status(), "PENDING ACTIVATION");
    }

    #[test]
    fn clone_is_independent() {
        let original = device(DeviceType::Phone);
        let copy = original.clone();

        original.set_device_status(DeviceStatus::Unknown);
        assert_eq!(copy.status(), DeviceStatus::Initial);
        assert_eq!(copy.id(), original.id());
    }

    #[test]
    fn from_projection_restores_status() {
        let original = device(DeviceType::Watch);
        original.set_device_status(DeviceStatus::Inactive);

        let restored = Device::from(original.to_projection());
        assert_eq!(restored.status(), DeviceStatus::Inactive);
        assert_eq!(restored.user_info(), original.user_info());
        assert_eq!(restored.device_type(), DeviceType::Watch);
    }

    #[test]
    fn serialize_matches_projection() {
        let device = device(DeviceType::Pc);
        assert_eq!(
            serde_json::to_value(&device).unwrap(),
            serde_json::to_value(device.to_projection()).unwrap()
        );
    }
}
