// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! Pin routing for the RX24T group.

#![no_std]

#[cfg(test)]
extern crate std;

pub use rx::{chip_specific, mpc, peripheral, pin_control, pinmux, port};

pub mod chip_specs;
pub mod pins;

use rx::mpc::MPC_BASE;
use rx::pin_control::RxPinFunctions;
use rx::port::PORT_BASE;

pub use crate::chip_specs::Rx24tSpecs;

pub type PinRouter = rx::pinmux::PinRouter<Rx24tSpecs, RxPinFunctions>;

/// Router over the RX24T MPC and PORT blocks.
///
/// ## Safety
///
/// Only one router may exist for the chip; it assumes exclusive ownership
/// of `PWPR` and the `PmnPFS` registers.
pub unsafe fn pin_router() -> PinRouter {
    PinRouter::new(RxPinFunctions::new(MPC_BASE, PORT_BASE))
}
