// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! RX64M specifications

use rx::chip_specific::{ChipSpecs, PinFunction};

pub enum Rx64mSpecs {}

impl ChipSpecs for Rx64mSpecs {
    const NAME: &'static str = "RX64M";
    const PIN_FUNCTIONS: &'static [PinFunction] = crate::pins::PIN_FUNCTIONS;
}
