// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! Per-chip specification consumed by the pin router.

use crate::chip_specific::pin_table::{Order, PinFunction};
use crate::peripheral::{Peripheral, Signal};

/// Constant data describing one RX chip variant.
///
/// Implemented by an uninhabited type in each chip crate, e.g.
/// `pub enum Rx220Specs {}`.
pub trait ChipSpecs {
    /// Part name used in diagnostics.
    const NAME: &'static str;

    /// Every physically wired `(peripheral, signal, candidate)` alternative
    /// of the package.
    const PIN_FUNCTIONS: &'static [PinFunction];

    /// Look up the pin wired to `signal` of `peripheral` for candidate
    /// `order`.
    fn find(peripheral: Peripheral, signal: Signal, order: Order) -> Option<&'static PinFunction> {
        Self::PIN_FUNCTIONS
            .iter()
            .find(|f| f.peripheral == peripheral && f.signal == signal && f.order == order)
    }

    /// Whether the chip routes any signal of `peripheral`.
    fn provides(peripheral: Peripheral) -> bool {
        Self::PIN_FUNCTIONS
            .iter()
            .any(|f| f.peripheral == peripheral)
    }

    /// Number of wired candidates for `signal` of `peripheral`.
    fn candidates(peripheral: Peripheral, signal: Signal) -> usize {
        Self::PIN_FUNCTIONS
            .iter()
            .filter(|f| f.peripheral == peripheral && f.signal == signal)
            .count()
    }
}
