// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! User information attached to a device.

use super::UserId;

/// The user a device belongs to.
///
/// Immutable once built; a [`Device`](crate::Device) owns its copy.
///
/// # Examples
///
/// ```
/// use device_lib::types::{DeviceUserInfo, UserId};
///
/// let info = DeviceUserInfo::new(UserId::new(), "John Doe", "johndoe@gmail.com");
/// assert_eq!(info.name(), "John Doe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceUserInfo {
    user_id: UserId,
    name: String,
    email: String,
}

impl DeviceUserInfo {
    /// Creates user information.
    #[must_use]
    pub fn new(user_id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the user's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the user's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructed_values() {
        let user_id = UserId::new();
        let info = DeviceUserInfo::new(user_id, "Kent Beck", "kent.beck@email.com");
        assert_eq!(info.user_id(), user_id);
        assert_eq!(info.name(), "Kent Beck");
        assert_eq!(info.email(), "kent.beck@email.com");
    }

    #[test]
    fn empty_fields_are_allowed() {
        let info = DeviceUserInfo::new(UserId::new(), "", "");
        assert!(info.name().is_empty());
        assert!(info.email().is_empty());
    }
}
