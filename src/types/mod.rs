// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types describing a device.
//!
//! # Types
//!
//! - [`DeviceType`] - Device class (MACBOOK, IPHONE, IPAD, APPLE_WATCH)
//! - [`DeviceStatus`] - Lifecycle status and its validation source
//! - [`DeviceUserInfo`] - The owning user's id, name and email
//! - [`DeviceId`] / [`UserId`] - UUID-backed identifiers

mod device_type;
mod id;
mod status;
mod user_info;

pub use device_type::DeviceType;
pub use id::{DeviceId, UserId};
pub use status::DeviceStatus;
pub use user_info::DeviceUserInfo;
