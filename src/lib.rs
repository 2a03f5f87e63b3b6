// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device Lib - a device entity with a validated lifecycle status.
//!
//! A [`Device`] is created with an id, a [`DeviceType`] and the
//! [`DeviceUserInfo`] of its owner, all fixed for its lifetime. Its status
//! starts as `"PENDING ACTIVATION"` and can be changed to any
//! [`DeviceStatus`] label.
//!
//! # Quick Start
//!
//! ```
//! use device_lib::{Device, DeviceId, DeviceType, DeviceUserInfo, UserId};
//!
//! fn main() -> device_lib::Result<()> {
//!     let user_info = DeviceUserInfo::new(UserId::new(), "John Doe", "johndoe@gmail.com");
//!     let device = Device::new(DeviceId::new(), DeviceType::Phone, user_info);
//!
//!     device.set_status("ACTIVE")?;
//!
//!     let json = device.to_projection().to_json_pretty()?;
//!     println!("{json}");
//!     Ok(())
//! }
//! ```
//!
//! # Logging
//!
//! Status changes and rejected statuses are reported through `tracing`.
//! The library never installs a subscriber.

mod device;
pub mod error;
pub mod projection;
pub mod state;
pub mod types;

pub use device::{Device, DeviceBuilder};
pub use error::{Error, ParseError, Result, ValueError};
pub use projection::{DeviceProjection, UserInfoProjection};
pub use state::StatusChange;
pub use types::{DeviceId, DeviceStatus, DeviceType, DeviceUserInfo, UserId};
