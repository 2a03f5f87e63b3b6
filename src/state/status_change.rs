// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status change record.

use crate::types::DeviceStatus;

/// A status transition applied to a device.
///
/// Any status may follow any other, including itself.
///
/// # Examples
///
/// ```
/// use device_lib::state::StatusChange;
/// use device_lib::types::DeviceStatus;
///
/// let change = StatusChange::new(DeviceStatus::Initial, DeviceStatus::Active);
/// assert!(!change.is_noop());
///
/// let same = StatusChange::new(DeviceStatus::Active, DeviceStatus::Active);
/// assert!(same.is_noop());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct StatusChange {
    /// Status before the change.
    pub from: DeviceStatus,
    /// Status after the change.
    pub to: DeviceStatus,
}

impl StatusChange {
    /// Creates a change record.
    #[must_use]
    pub const fn new(from: DeviceStatus, to: DeviceStatus) -> Self {
        Self { from, to }
    }

    /// Returns `true` if the status did not actually change.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}
