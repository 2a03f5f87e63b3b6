// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device status tracking types.
//!
//! The status itself lives on [`Device`](crate::Device); this module holds the
//! [`StatusChange`] record returned when it is updated.

mod status_change;

pub use status_change::StatusChange;
