// SPDX-License-Identifier: MPL-2.0

//! Device projection example.
//!
//! Builds one device with random ids and sample user data, then prints its
//! projection as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example device_demo
//! ```

use device_lib::{Device, DeviceId, DeviceType, DeviceUserInfo, UserId};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let user_info = DeviceUserInfo::new(UserId::new(), "Kent Beck", "kent.beck@email.com");
    let device = Device::new(DeviceId::new(), DeviceType::Pc, user_info);

    println!("{}", device.to_projection().to_json_pretty()?);

    Ok(())
}
