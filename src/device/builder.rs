// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device builder.

use crate::device::Device;
use crate::types::{DeviceId, DeviceStatus, DeviceType, DeviceUserInfo};

/// Builder for [`Device`].
///
/// Created with [`Device::builder`]. The id defaults to a fresh random UUID
/// and the status to [`DeviceStatus::Initial`].
///
/// # Examples
///
/// ```
/// use device_lib::{Device, DeviceId, DeviceType, DeviceUserInfo, UserId};
///
/// let id: DeviceId = "bcde2b57-1e4d-42cc-95bf-e674014b3426".parse().unwrap();
/// let user_info = DeviceUserInfo::new(UserId::new(), "John Doe", "johndoe@gmail.com");
///
/// let device = Device::builder(DeviceType::Phone, user_info)
///     .with_id(id)
///     .build();
///
/// assert_eq!(device.id(), id);
/// assert_eq!(device.get_status(), "PENDING ACTIVATION");
/// ```
#[derive(Debug, Clone)]
pub struct DeviceBuilder {
    device_type: DeviceType,
    user_info: DeviceUserInfo,
    id: Option<DeviceId>,
    status: DeviceStatus,
}

impl DeviceBuilder {
    pub(crate) fn new(device_type: DeviceType, user_info: DeviceUserInfo) -> Self {
        Self {
            device_type,
            user_info,
            id: None,
            status: DeviceStatus::default(),
        }
    }

    /// Sets the device identifier.
    #[must_use]
    pub fn with_id(mut self, id: DeviceId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the starting status.
    #[must_use]
    pub fn with_status(mut self, status: DeviceStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds the device.
    #[must_use]
    pub fn build(self) -> Device {
        Device::with_status(
            self.id.unwrap_or_default(),
            self.device_type,
            self.user_info,
            self.status,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserId;

    fn user_info() -> DeviceUserInfo {
        DeviceUserInfo::new(UserId::new(), "John Doe", "johndoe@gmail.com")
    }

    #[test]
    fn defaults() {
        let device = DeviceBuilder::new(DeviceType::Tablet, user_info()).build();
        assert_eq!(device.status(), DeviceStatus::Initial);
        assert_eq!(device.device_type(), DeviceType::Tablet);
    }

    #[test]
    fn generated_ids_differ() {
        let a = DeviceBuilder::new(DeviceType::Pc, user_info()).build();
        let b = DeviceBuilder::new(DeviceType::Pc, user_info()).build();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn with_status_and_id() {
        let id = DeviceId::new();
        let device = DeviceBuilder::new(DeviceType::Watch, user_info())
            .with_id(id)
            .with_status(DeviceStatus::Unknown)
            .build();
        assert_eq!(device.id(), id);
        assert_eq!(device.get_status(), "UNKNOWN");
    }
}
