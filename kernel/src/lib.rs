// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! Shared support code for the RX chip crates.
//!
//! The chip crates build on the pieces collected here: the `StaticRef` handle
//! for memory-mapped register blocks, the re-exported Tock register
//! interface, the `ErrorCode` returned by fallible hardware operations, and
//! the `debug!` output channel.

#![warn(unreachable_pub)]
#![no_std]

// This is used to run the tests on a host
#[cfg(test)]
#[macro_use]
extern crate std;

#[macro_use]
pub mod debug;
pub mod errorcode;
pub mod utilities;

pub use crate::errorcode::ErrorCode;
