// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! This module contains all chip-specific code.
//!
//! RX family members share the MPC and PORT register layout, but each package
//! wires a different set of peripheral signals to its pins. Chip crates
//! describe their wiring as a constant pin table and hand it to the generic
//! code in this crate through the [`ChipSpecs`] trait.

pub mod chip_specs;
pub mod pin_table;

pub use chip_specs::ChipSpecs;
pub use pin_table::{psel, validate, Order, PinFunction, PinTableError};
