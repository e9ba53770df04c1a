// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! RX24T specifications

use rx::chip_specific::{ChipSpecs, PinFunction};

pub enum Rx24tSpecs {}

impl ChipSpecs for Rx24tSpecs {
    const NAME: &'static str = "RX24T";
    const PIN_FUNCTIONS: &'static [PinFunction] = crate::pins::PIN_FUNCTIONS;
}
