// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! Pin routing for the RX64M group.

#![no_std]

#[cfg(test)]
extern crate std;

pub use rx::{chip_specific, mpc, peripheral, pin_control, pinmux, port};

pub mod chip_specs;
pub mod pins;

use rx::mpc::MPC_BASE;
use rx::pin_control::RxPinFunctions;
use rx::port::PORT_BASE;

pub use crate::chip_specs::Rx64mSpecs;

pub type PinRouter = rx::pinmux::PinRouter<Rx64mSpecs, RxPinFunctions>;

/// Router over the RX64M MPC and PORT blocks.
///
/// ## Safety
///
/// Only one router may exist for the chip; it assumes exclusive ownership
/// of `PWPR` and the `PmnPFS` registers.
pub unsafe fn pin_router() -> PinRouter {
    PinRouter::new(RxPinFunctions::new(MPC_BASE, PORT_BASE))
}

#[cfg(test)]
mod tests {
    use super::PinRouter;
    use kernel::utilities::registers::interfaces::{Readable, Writeable};
    use kernel::utilities::StaticRef;
    use kernel::ErrorCode;
    use rx::chip_specific::Order;
    use rx::mpc::{MpcRegisters, PWPR_LOCKED};
    use rx::peripheral::Peripheral;
    use rx::pin_control::RxPinFunctions;
    use rx::pinmux::RouteOption;
    use rx::port::PortRegisters;
    use std::boxed::Box;
    use std::mem::size_of;

    fn router_over_memory() -> PinRouter {
        let mpc = Box::leak(Box::new([0u8; size_of::<MpcRegisters>()]));
        let port = Box::leak(Box::new([0u8; size_of::<PortRegisters>()]));
        let router = unsafe {
            PinRouter::new(RxPinFunctions::new(
                StaticRef::new(mpc.as_ptr().cast::<MpcRegisters>()),
                StaticRef::new(port.as_ptr().cast::<PortRegisters>()),
            ))
        };
        router.registers().mpc().pwpr.set(PWPR_LOCKED);
        router
    }

    fn assert_untouched(router: &PinRouter) {
        let regs = router.registers();
        assert!(regs.port().pmr.iter().all(|pmr| pmr.get() == 0));
        assert!(regs.mpc().pfs.iter().all(|pfs| pfs.get() == 0));
        assert_eq!(regs.mpc().pwpr.get(), PWPR_LOCKED);
    }

    #[test]
    fn sci1_driver_enable_selects_cts_function() {
        let router = router_over_memory();

        assert_eq!(
            router.route(Peripheral::Sci(1), true, Order::First, RouteOption::De),
            Ok(())
        );

        let regs = router.registers();
        // DE1 on P14, RXD1 on P15, TXD1 on P16
        assert_eq!(regs.port().pmr[1].get(), 0b0111_0000);
        assert_eq!(regs.mpc().pfs[0x0c].get(), 0b01011);
        assert_eq!(regs.mpc().pfs[0x0d].get(), 0b01010);
        assert_eq!(regs.mpc().pfs[0x0e].get(), 0b01010);
        assert_eq!(regs.mpc().pwpr.get(), PWPR_LOCKED);

        assert!(router.turn(Peripheral::Sci(1), false, Order::First, RouteOption::De));
        assert_untouched(&router);
    }

    #[test]
    fn missing_driver_enable_candidate_writes_nothing() {
        let router = router_over_memory();
        // SCI3 data pins exist for the second candidate, DE does not.
        assert_eq!(
            router.route(Peripheral::Sci(3), true, Order::Second, RouteOption::De),
            Err(ErrorCode::INVAL)
        );
        assert_untouched(&router);
    }
}
