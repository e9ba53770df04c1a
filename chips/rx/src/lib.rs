// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! Peripheral implementations shared by the Renesas RX family.
//!
//! Chip crates (`rx220`, `rx24t`, ...) supply a pin table through
//! [`chip_specific::ChipSpecs`] and get a [`pinmux::PinRouter`] for their
//! package.

#![no_std]

// This is used to run the tests on a host
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod chip_specific;
pub(crate) mod config;
pub mod mpc;
pub mod peripheral;
pub mod pin_control;
pub mod pinmux;
pub mod port;
