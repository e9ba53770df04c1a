// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! RX24T multi-function pin assignments (100-pin package).

use rx::chip_specific::psel::{CAN, MTU, MTU_CLOCK, RIIC, RSPI, SCI, TMR};
use rx::chip_specific::Order::{First, Second, Third};
use rx::chip_specific::PinFunction;
use rx::peripheral::CanSignal::{Rx, Tx};
use rx::peripheral::RiicSignal::{Scl, Sda};
use rx::peripheral::RspiSignal::{Miso, Mosi, Rspck};
use rx::peripheral::SciSignal::{Rxd, Sck, Txd};
use rx::peripheral::TmrSignal::{Tmci, Tmo, Tmri};
use rx::peripheral::{MtuChannel, MtuClock};
use rx::port::Port::{P0, P1, P2, P3, P7, P8, P9, PA, PB, PD, PE, PF};
use rx::port::Pin;

pub const PIN_FUNCTIONS: &[PinFunction] = &[
    // SCI1
    PinFunction::sci(1, Txd, First, Pin::new(PD, 3), SCI),
    PinFunction::sci(1, Rxd, First, Pin::new(PD, 5), SCI),
    PinFunction::sci(1, Sck, First, Pin::new(PD, 4), SCI),
    PinFunction::sci(1, Txd, Second, Pin::new(P2, 6), SCI),
    PinFunction::sci(1, Rxd, Second, Pin::new(P2, 5), SCI),
    PinFunction::sci(1, Sck, Second, Pin::new(P2, 4), SCI),
    // SCI5
    PinFunction::sci(5, Txd, First, Pin::new(PB, 5), SCI),
    PinFunction::sci(5, Rxd, First, Pin::new(PB, 6), SCI),
    PinFunction::sci(5, Sck, First, Pin::new(PB, 7), SCI),
    PinFunction::sci(5, Txd, Second, Pin::new(PD, 3), SCI),
    PinFunction::sci(5, Rxd, Second, Pin::new(PD, 2), SCI),
    PinFunction::sci(5, Sck, Second, Pin::new(PD, 4), SCI),
    // SCI6
    PinFunction::sci(6, Txd, First, Pin::new(PB, 1), SCI),
    PinFunction::sci(6, Rxd, First, Pin::new(PB, 0), SCI),
    PinFunction::sci(6, Sck, First, Pin::new(PB, 3), SCI),
    PinFunction::sci(6, Txd, Second, Pin::new(P8, 1), SCI),
    PinFunction::sci(6, Rxd, Second, Pin::new(P8, 0), SCI),
    PinFunction::sci(6, Sck, Second, Pin::new(P8, 2), SCI),
    // RIIC0
    PinFunction::riic(0, Scl, First, Pin::new(PB, 1), RIIC),
    PinFunction::riic(0, Sda, First, Pin::new(PB, 2), RIIC),
    // RSPI0
    PinFunction::rspi(0, Rspck, First, Pin::new(PB, 3), RSPI),
    PinFunction::rspi(0, Mosi, First, Pin::new(PB, 0), RSPI),
    PinFunction::rspi(0, Miso, First, Pin::new(P2, 2), RSPI),
    PinFunction::rspi(0, Rspck, Second, Pin::new(P2, 4), RSPI),
    PinFunction::rspi(0, Mosi, Second, Pin::new(P2, 3), RSPI),
    PinFunction::rspi(0, Miso, Second, Pin::new(P2, 2), RSPI),
    PinFunction::rspi(0, Rspck, Third, Pin::new(PD, 0), RSPI),
    PinFunction::rspi(0, Mosi, Third, Pin::new(PD, 2), RSPI),
    PinFunction::rspi(0, Miso, Third, Pin::new(PD, 1), RSPI),
    // CAN0
    PinFunction::can(0, Rx, First, Pin::new(PA, 0), CAN),
    PinFunction::can(0, Tx, First, Pin::new(PA, 1), CAN),
    PinFunction::can(0, Rx, Second, Pin::new(PB, 5), CAN),
    PinFunction::can(0, Tx, Second, Pin::new(PB, 6), CAN),
    PinFunction::can(0, Rx, Third, Pin::new(PF, 3), CAN),
    PinFunction::can(0, Tx, Third, Pin::new(PF, 2), CAN),
    // MTU0
    PinFunction::mtu(0, MtuChannel::A, First, Pin::new(PB, 3), MTU),
    PinFunction::mtu(0, MtuChannel::B, First, Pin::new(PB, 2), MTU),
    PinFunction::mtu(0, MtuChannel::C, First, Pin::new(PB, 1), MTU),
    PinFunction::mtu(0, MtuChannel::D, First, Pin::new(PB, 0), MTU),
    // MTU1
    PinFunction::mtu(1, MtuChannel::A, First, Pin::new(PA, 5), MTU),
    PinFunction::mtu(1, MtuChannel::B, First, Pin::new(PA, 4), MTU),
    // MTU2
    PinFunction::mtu(2, MtuChannel::A, First, Pin::new(PA, 3), MTU),
    PinFunction::mtu(2, MtuChannel::B, First, Pin::new(PA, 2), MTU),
    // MTU3
    PinFunction::mtu(3, MtuChannel::A, First, Pin::new(P3, 3), MTU),
    PinFunction::mtu(3, MtuChannel::B, First, Pin::new(P7, 1), MTU),
    PinFunction::mtu(3, MtuChannel::B, Second, Pin::new(PE, 3), MTU),
    PinFunction::mtu(3, MtuChannel::C, First, Pin::new(P3, 2), MTU),
    PinFunction::mtu(3, MtuChannel::D, First, Pin::new(P7, 4), MTU),
    PinFunction::mtu(3, MtuChannel::D, Second, Pin::new(PE, 0), MTU),
    // MTU4
    PinFunction::mtu(4, MtuChannel::A, First, Pin::new(P7, 2), MTU),
    PinFunction::mtu(4, MtuChannel::A, Second, Pin::new(PE, 4), MTU),
    PinFunction::mtu(4, MtuChannel::B, First, Pin::new(P7, 3), MTU),
    PinFunction::mtu(4, MtuChannel::B, Second, Pin::new(PE, 1), MTU),
    PinFunction::mtu(4, MtuChannel::C, First, Pin::new(P7, 5), MTU),
    PinFunction::mtu(4, MtuChannel::C, Second, Pin::new(PE, 5), MTU),
    PinFunction::mtu(4, MtuChannel::D, First, Pin::new(P7, 6), MTU),
    PinFunction::mtu(4, MtuChannel::D, Second, Pin::new(PE, 2), MTU),
    // MTCLKA-D
    PinFunction::mtu_clock(MtuClock::A, First, Pin::new(P2, 1), MTU_CLOCK),
    PinFunction::mtu_clock(MtuClock::A, Second, Pin::new(P3, 3), MTU_CLOCK),
    PinFunction::mtu_clock(MtuClock::B, First, Pin::new(P2, 0), MTU_CLOCK),
    PinFunction::mtu_clock(MtuClock::B, Second, Pin::new(P3, 2), MTU_CLOCK),
    PinFunction::mtu_clock(MtuClock::C, First, Pin::new(P1, 1), MTU_CLOCK),
    PinFunction::mtu_clock(MtuClock::C, Second, Pin::new(P3, 1), MTU_CLOCK),
    PinFunction::mtu_clock(MtuClock::D, First, Pin::new(P1, 0), MTU_CLOCK),
    PinFunction::mtu_clock(MtuClock::D, Second, Pin::new(P3, 0), MTU_CLOCK),
    // TMR0-3
    PinFunction::tmr(0, Tmo, First, Pin::new(PB, 3), TMR),
    PinFunction::tmr(0, Tmci, First, Pin::new(PB, 1), TMR),
    PinFunction::tmr(0, Tmri, First, Pin::new(PB, 0), TMR),
    PinFunction::tmr(1, Tmo, First, Pin::new(PD, 6), TMR),
    PinFunction::tmr(1, Tmci, First, Pin::new(PD, 4), TMR),
    PinFunction::tmr(1, Tmri, First, Pin::new(PD, 5), TMR),
    PinFunction::tmr(2, Tmo, First, Pin::new(P9, 4), TMR),
    PinFunction::tmr(2, Tmci, First, Pin::new(P9, 6), TMR),
    PinFunction::tmr(2, Tmri, First, Pin::new(P9, 5), TMR),
    PinFunction::tmr(3, Tmo, First, Pin::new(P1, 1), TMR),
    PinFunction::tmr(3, Tmci, First, Pin::new(P1, 0), TMR),
    PinFunction::tmr(3, Tmri, First, Pin::new(P3, 1), TMR),
    // IRQ0-5
    PinFunction::irq(0, First, Pin::new(P1, 0)),
    PinFunction::irq(0, Second, Pin::new(PE, 5)),
    PinFunction::irq(1, First, Pin::new(P1, 1)),
    PinFunction::irq(1, Second, Pin::new(PA, 5)),
    PinFunction::irq(2, First, Pin::new(P0, 0)),
    PinFunction::irq(2, Second, Pin::new(PE, 4)),
    PinFunction::irq(3, First, Pin::new(P0, 1)),
    PinFunction::irq(3, Second, Pin::new(PB, 4)),
    PinFunction::irq(4, First, Pin::new(P0, 2)),
    PinFunction::irq(4, Second, Pin::new(PB, 1)),
    PinFunction::irq(5, First, Pin::new(P7, 0)),
    PinFunction::irq(5, Second, Pin::new(PD, 4)),
];

#[cfg(test)]
mod tests {
    use super::PIN_FUNCTIONS;
    use crate::chip_specs::Rx24tSpecs;
    use rx::chip_specific::{validate, ChipSpecs};
    use rx::peripheral::{CanSignal, Peripheral, Signal};

    #[test]
    fn table_is_consistent() {
        assert_eq!(validate(PIN_FUNCTIONS), Ok(()));
    }

    #[test]
    fn can0_has_three_candidates() {
        assert_eq!(Rx24tSpecs::candidates(Peripheral::Can(0), Signal::Can(CanSignal::Rx)), 3);
        assert_eq!(Rx24tSpecs::candidates(Peripheral::Can(0), Signal::Can(CanSignal::Tx)), 3);
        assert!(!Rx24tSpecs::provides(Peripheral::Sci(0)));
    }
}
