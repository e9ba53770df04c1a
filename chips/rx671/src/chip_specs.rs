// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! RX671 specifications

use rx::chip_specific::{ChipSpecs, PinFunction};

pub enum Rx671Specs {}

impl ChipSpecs for Rx671Specs {
    const NAME: &'static str = "RX671";
    const PIN_FUNCTIONS: &'static [PinFunction] = crate::pins::PIN_FUNCTIONS;
}
