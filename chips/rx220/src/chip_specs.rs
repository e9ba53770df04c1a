// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! RX220 specifications

use rx::chip_specific::{ChipSpecs, PinFunction};

pub enum Rx220Specs {}

impl ChipSpecs for Rx220Specs {
    const NAME: &'static str = "RX220";
    const PIN_FUNCTIONS: &'static [PinFunction] = crate::pins::PIN_FUNCTIONS;
}
