// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! RX64M multi-function pin assignments (176-pin package).
//!
//! The `De` rows are the CTSn#/RTSn# pins; RS-485 boards drive the
//! transceiver's driver enable from them.

use rx::chip_specific::psel::{CAN, MTU, RIIC, RSPI, SCI, SCI_CTS, SCI_EXT, TMR};
use rx::chip_specific::Order::{First, Second, Third};
use rx::chip_specific::PinFunction;
use rx::peripheral::CanSignal::{Rx, Tx};
use rx::peripheral::MtuChannel::{A, B, C, D};
use rx::peripheral::RiicSignal::{Scl, Sda};
use rx::peripheral::RspiSignal::{Miso, Mosi, Rspck};
use rx::peripheral::SciSignal::{De, Rxd, Sck, Txd};
use rx::peripheral::TmrSignal::{Tmci, Tmo, Tmri};
use rx::port::Port::{P0, P1, P2, P3, P5, P8, P9, PA, PB, PC, PD, PE, PF, PH, PJ};
use rx::port::Pin;

pub const PIN_FUNCTIONS: &[PinFunction] = &[
    // SCI0
    PinFunction::sci(0, Txd, First, Pin::new(P2, 0), SCI),
    PinFunction::sci(0, Rxd, First, Pin::new(P2, 1), SCI),
    PinFunction::sci(0, Sck, First, Pin::new(P2, 2), SCI),
    PinFunction::sci(0, De, First, Pin::new(P2, 3), SCI_CTS),
    PinFunction::sci(0, Txd, Second, Pin::new(P3, 2), SCI),
    PinFunction::sci(0, Rxd, Second, Pin::new(P3, 3), SCI),
    PinFunction::sci(0, Sck, Second, Pin::new(P3, 4), SCI),
    PinFunction::sci(0, De, Second, Pin::new(PJ, 3), SCI_CTS),
    // SCI1
    PinFunction::sci(1, Txd, First, Pin::new(P1, 6), SCI),
    PinFunction::sci(1, Rxd, First, Pin::new(P1, 5), SCI),
    PinFunction::sci(1, Sck, First, Pin::new(P1, 7), SCI),
    PinFunction::sci(1, De, First, Pin::new(P1, 4), SCI_CTS),
    PinFunction::sci(1, Txd, Second, Pin::new(P2, 6), SCI),
    PinFunction::sci(1, Rxd, Second, Pin::new(P3, 0), SCI),
    PinFunction::sci(1, Sck, Second, Pin::new(P2, 7), SCI),
    PinFunction::sci(1, De, Second, Pin::new(P3, 1), SCI_CTS),
    PinFunction::sci(1, Txd, Third, Pin::new(PF, 0), SCI),
    PinFunction::sci(1, Rxd, Third, Pin::new(PF, 2), SCI),
    PinFunction::sci(1, Sck, Third, Pin::new(PF, 1), SCI),
    // SCI2
    PinFunction::sci(2, Txd, First, Pin::new(P1, 3), SCI),
    PinFunction::sci(2, Rxd, First, Pin::new(P1, 2), SCI),
    PinFunction::sci(2, Sck, First, Pin::new(P1, 1), SCI),
    PinFunction::sci(2, De, First, Pin::new(PJ, 5), SCI_CTS),
    PinFunction::sci(2, Txd, Second, Pin::new(P5, 0), SCI),
    PinFunction::sci(2, Rxd, Second, Pin::new(P5, 2), SCI),
    PinFunction::sci(2, Sck, Second, Pin::new(P5, 1), SCI),
    PinFunction::sci(2, De, Second, Pin::new(P5, 4), SCI_CTS),
    // SCI3
    PinFunction::sci(3, Txd, First, Pin::new(P2, 3), SCI),
    PinFunction::sci(3, Rxd, First, Pin::new(P2, 5), SCI),
    PinFunction::sci(3, Sck, First, Pin::new(P2, 4), SCI),
    PinFunction::sci(3, De, First, Pin::new(P2, 6), SCI_CTS),
    PinFunction::sci(3, Txd, Second, Pin::new(P1, 7), SCI),
    PinFunction::sci(3, Rxd, Second, Pin::new(P1, 6), SCI),
    PinFunction::sci(3, Sck, Second, Pin::new(P1, 5), SCI),
    // SCI4
    PinFunction::sci(4, Txd, First, Pin::new(PB, 1), SCI),
    PinFunction::sci(4, Rxd, First, Pin::new(PB, 0), SCI),
    PinFunction::sci(4, Sck, First, Pin::new(PB, 3), SCI),
    PinFunction::sci(4, De, First, Pin::new(PB, 2), SCI_CTS),
    // SCI5
    PinFunction::sci(5, Txd, First, Pin::new(PA, 4), SCI),
    PinFunction::sci(5, Rxd, First, Pin::new(PA, 3), SCI),
    PinFunction::sci(5, Sck, First, Pin::new(PA, 1), SCI),
    PinFunction::sci(5, De, First, Pin::new(PA, 6), SCI_CTS),
    PinFunction::sci(5, Txd, Second, Pin::new(PC, 3), SCI),
    PinFunction::sci(5, Rxd, Second, Pin::new(PC, 2), SCI),
    PinFunction::sci(5, Sck, Second, Pin::new(PC, 1), SCI),
    PinFunction::sci(5, De, Second, Pin::new(PC, 0), SCI_CTS),
    // SCI6
    PinFunction::sci(6, Txd, First, Pin::new(P0, 0), SCI),
    PinFunction::sci(6, Rxd, First, Pin::new(P0, 1), SCI),
    PinFunction::sci(6, Sck, First, Pin::new(P0, 2), SCI),
    PinFunction::sci(6, De, First, Pin::new(PJ, 3), SCI_CTS),
    PinFunction::sci(6, Txd, Second, Pin::new(P3, 2), SCI),
    PinFunction::sci(6, Rxd, Second, Pin::new(P3, 3), SCI),
    PinFunction::sci(6, Sck, Second, Pin::new(P3, 4), SCI),
    PinFunction::sci(6, De, Second, Pin::new(PB, 2), SCI_CTS),
    PinFunction::sci(6, Txd, Third, Pin::new(PB, 1), SCI),
    PinFunction::sci(6, Rxd, Third, Pin::new(PB, 0), SCI),
    PinFunction::sci(6, Sck, Third, Pin::new(PB, 3), SCI),
    // SCI7
    PinFunction::sci(7, Txd, First, Pin::new(P9, 0), SCI),
    PinFunction::sci(7, Rxd, First, Pin::new(P9, 2), SCI),
    PinFunction::sci(7, Sck, First, Pin::new(P9, 1), SCI),
    PinFunction::sci(7, De, First, Pin::new(P9, 3), SCI_CTS),
    // SCI12
    PinFunction::sci(12, Txd, First, Pin::new(PE, 1), SCI_EXT),
    PinFunction::sci(12, Rxd, First, Pin::new(PE, 2), SCI_EXT),
    PinFunction::sci(12, Sck, First, Pin::new(PE, 0), SCI_EXT),
    PinFunction::sci(12, De, First, Pin::new(PE, 3), SCI_CTS),
    // RIIC0, RIIC2
    PinFunction::riic(0, Scl, First, Pin::new(P1, 2), RIIC),
    PinFunction::riic(0, Sda, First, Pin::new(P1, 3), RIIC),
    PinFunction::riic(2, Scl, First, Pin::new(P1, 6), RIIC),
    PinFunction::riic(2, Sda, First, Pin::new(P1, 7), RIIC),
    // RSPI0
    PinFunction::rspi(0, Rspck, First, Pin::new(PA, 5), RSPI),
    PinFunction::rspi(0, Mosi, First, Pin::new(PA, 6), RSPI),
    PinFunction::rspi(0, Miso, First, Pin::new(PA, 7), RSPI),
    PinFunction::rspi(0, Rspck, Second, Pin::new(PC, 5), RSPI),
    PinFunction::rspi(0, Mosi, Second, Pin::new(PC, 6), RSPI),
    PinFunction::rspi(0, Miso, Second, Pin::new(PC, 7), RSPI),
    // CAN0, CAN1
    PinFunction::can(0, Rx, First, Pin::new(P3, 3), CAN),
    PinFunction::can(0, Tx, First, Pin::new(P3, 2), CAN),
    PinFunction::can(0, Rx, Second, Pin::new(PD, 2), CAN),
    PinFunction::can(0, Tx, Second, Pin::new(PD, 1), CAN),
    PinFunction::can(1, Rx, First, Pin::new(P1, 5), CAN),
    PinFunction::can(1, Tx, First, Pin::new(P1, 4), CAN),
    PinFunction::can(1, Rx, Second, Pin::new(P5, 5), CAN),
    PinFunction::can(1, Tx, Second, Pin::new(P5, 4), CAN),
    // MTU0
    PinFunction::mtu(0, A, First, Pin::new(P3, 4), MTU),
    PinFunction::mtu(0, A, Second, Pin::new(PB, 3), MTU),
    PinFunction::mtu(0, B, First, Pin::new(P1, 3), MTU),
    PinFunction::mtu(0, B, Second, Pin::new(P1, 5), MTU),
    PinFunction::mtu(0, C, First, Pin::new(P3, 2), MTU),
    PinFunction::mtu(0, C, Second, Pin::new(PB, 1), MTU),
    PinFunction::mtu(0, D, First, Pin::new(P3, 3), MTU),
    PinFunction::mtu(0, D, Second, Pin::new(PA, 3), MTU),
    // MTU1
    PinFunction::mtu(1, A, First, Pin::new(P2, 0), MTU),
    PinFunction::mtu(1, A, Second, Pin::new(PE, 4), MTU),
    PinFunction::mtu(1, B, First, Pin::new(P2, 1), MTU),
    PinFunction::mtu(1, B, Second, Pin::new(PB, 5), MTU),
    // MTU2
    PinFunction::mtu(2, A, First, Pin::new(P2, 6), MTU),
    PinFunction::mtu(2, A, Second, Pin::new(PB, 5), MTU),
    PinFunction::mtu(2, B, First, Pin::new(P2, 7), MTU),
    PinFunction::mtu(2, B, Second, Pin::new(PE, 5), MTU),
    // MTU3
    PinFunction::mtu(3, A, First, Pin::new(P1, 4), MTU),
    PinFunction::mtu(3, A, Second, Pin::new(P1, 7), MTU),
    PinFunction::mtu(3, A, Third, Pin::new(PC, 7), MTU),
    PinFunction::mtu(3, B, First, Pin::new(P1, 7), MTU),
    PinFunction::mtu(3, B, Second, Pin::new(P2, 2), MTU),
    PinFunction::mtu(3, B, Third, Pin::new(PC, 5), MTU),
    PinFunction::mtu(3, C, First, Pin::new(P1, 6), MTU),
    PinFunction::mtu(3, C, Second, Pin::new(P5, 6), MTU),
    PinFunction::mtu(3, C, Third, Pin::new(PC, 6), MTU),
    PinFunction::mtu(3, D, First, Pin::new(P2, 3), MTU),
    PinFunction::mtu(3, D, Second, Pin::new(P8, 1), MTU),
    PinFunction::mtu(3, D, Third, Pin::new(PC, 4), MTU),
    // MTU4
    PinFunction::mtu(4, A, First, Pin::new(P2, 4), MTU),
    PinFunction::mtu(4, A, Second, Pin::new(P8, 2), MTU),
    PinFunction::mtu(4, A, Third, Pin::new(PA, 0), MTU),
    PinFunction::mtu(4, B, First, Pin::new(P3, 0), MTU),
    PinFunction::mtu(4, B, Second, Pin::new(P5, 4), MTU),
    PinFunction::mtu(4, B, Third, Pin::new(PC, 2), MTU),
    PinFunction::mtu(4, C, First, Pin::new(P2, 5), MTU),
    PinFunction::mtu(4, C, Second, Pin::new(P8, 3), MTU),
    PinFunction::mtu(4, C, Third, Pin::new(PE, 5), MTU),
    PinFunction::mtu(4, D, First, Pin::new(P3, 1), MTU),
    PinFunction::mtu(4, D, Second, Pin::new(P5, 5), MTU),
    PinFunction::mtu(4, D, Third, Pin::new(PC, 3), MTU),
    // TMR0-3
    PinFunction::tmr(0, Tmo, First, Pin::new(PH, 1), TMR),
    PinFunction::tmr(0, Tmci, First, Pin::new(PH, 3), TMR),
    PinFunction::tmr(0, Tmri, First, Pin::new(PH, 2), TMR),
    PinFunction::tmr(1, Tmo, First, Pin::new(P2, 6), TMR),
    PinFunction::tmr(1, Tmci, First, Pin::new(P0, 2), TMR),
    PinFunction::tmr(1, Tmri, First, Pin::new(P2, 4), TMR),
    PinFunction::tmr(2, Tmo, First, Pin::new(P1, 6), TMR),
    PinFunction::tmr(2, Tmci, First, Pin::new(P1, 5), TMR),
    PinFunction::tmr(2, Tmri, First, Pin::new(P1, 4), TMR),
    PinFunction::tmr(3, Tmo, First, Pin::new(P1, 3), TMR),
    PinFunction::tmr(3, Tmci, First, Pin::new(P2, 7), TMR),
    PinFunction::tmr(3, Tmri, First, Pin::new(P3, 0), TMR),
    // IRQ0-7
    PinFunction::irq(0, First, Pin::new(P3, 0)),
    PinFunction::irq(0, Second, Pin::new(PD, 0)),
    PinFunction::irq(1, First, Pin::new(P3, 1)),
    PinFunction::irq(1, Second, Pin::new(PD, 1)),
    PinFunction::irq(2, First, Pin::new(P3, 2)),
    PinFunction::irq(2, Second, Pin::new(PD, 2)),
    PinFunction::irq(3, First, Pin::new(P3, 3)),
    PinFunction::irq(3, Second, Pin::new(PD, 3)),
    PinFunction::irq(4, First, Pin::new(P3, 4)),
    PinFunction::irq(4, Second, Pin::new(PD, 4)),
    PinFunction::irq(5, First, Pin::new(P1, 5)),
    PinFunction::irq(5, Second, Pin::new(PD, 5)),
    PinFunction::irq(6, First, Pin::new(P1, 6)),
    PinFunction::irq(6, Second, Pin::new(PD, 6)),
    PinFunction::irq(7, First, Pin::new(P1, 7)),
    PinFunction::irq(7, Second, Pin::new(PD, 7)),
];

#[cfg(test)]
mod tests {
    use super::PIN_FUNCTIONS;
    use crate::chip_specs::Rx64mSpecs;
    use rx::chip_specific::{validate, ChipSpecs, Order};
    use rx::peripheral::{Peripheral, SciSignal, Signal};

    #[test]
    fn table_is_consistent() {
        assert_eq!(validate(PIN_FUNCTIONS), Ok(()));
    }

    #[test]
    fn every_sci_channel_has_a_driver_enable_pin() {
        for channel in [0, 1, 2, 3, 4, 5, 6, 7, 12] {
            assert!(
                Rx64mSpecs::find(Peripheral::Sci(channel), Signal::Sci(SciSignal::De), Order::First)
                    .is_some(),
                "SCI{} has no DE pin",
                channel
            );
        }
        assert!(!Rx64mSpecs::provides(Peripheral::MtuClock));
    }
}
