// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! RX220 multi-function pin assignments (100-pin package).
//!
//! Candidates follow the order the pins are listed in the hardware manual's
//! multiple pin function table for each signal.

use rx::chip_specific::psel::{MTU, MTU_CLOCK, RIIC, RSPI, SCI, SCI_CTS, SCI_EXT, TMR};
use rx::chip_specific::Order::{First, Second, Third};
use rx::chip_specific::PinFunction;
use rx::peripheral::RiicSignal::{Scl, Sda};
use rx::peripheral::RspiSignal::{Miso, Mosi, Rspck};
use rx::peripheral::SciSignal::{De, Rxd, Sck, Txd};
use rx::peripheral::TmrSignal::{Tmci, Tmo, Tmri};
use rx::peripheral::{MtuChannel, MtuClock};
use rx::port::Port::{P1, P2, P3, PA, PB, PC, PE};
use rx::port::Pin;

pub const PIN_FUNCTIONS: &[PinFunction] = &[
    // SCI0
    PinFunction::sci(0, Txd, First, Pin::new(P2, 0), SCI),
    PinFunction::sci(0, Rxd, First, Pin::new(P2, 1), SCI),
    PinFunction::sci(0, Sck, First, Pin::new(P2, 2), SCI),
    PinFunction::sci(0, De, First, Pin::new(P2, 3), SCI_CTS),
    // SCI1
    PinFunction::sci(1, Txd, First, Pin::new(P1, 6), SCI),
    PinFunction::sci(1, Rxd, First, Pin::new(P1, 5), SCI),
    PinFunction::sci(1, Sck, First, Pin::new(P1, 7), SCI),
    PinFunction::sci(1, De, First, Pin::new(P1, 4), SCI_CTS),
    PinFunction::sci(1, Txd, Second, Pin::new(P2, 6), SCI),
    PinFunction::sci(1, Rxd, Second, Pin::new(P3, 0), SCI),
    PinFunction::sci(1, Sck, Second, Pin::new(P2, 7), SCI),
    PinFunction::sci(1, De, Second, Pin::new(P3, 1), SCI_CTS),
    // SCI5
    PinFunction::sci(5, Txd, First, Pin::new(PA, 4), SCI),
    PinFunction::sci(5, Rxd, First, Pin::new(PA, 3), SCI),
    PinFunction::sci(5, Sck, First, Pin::new(PA, 1), SCI),
    PinFunction::sci(5, Txd, Second, Pin::new(PC, 3), SCI),
    PinFunction::sci(5, Rxd, Second, Pin::new(PC, 2), SCI),
    PinFunction::sci(5, Sck, Second, Pin::new(PC, 1), SCI),
    // SCI6
    PinFunction::sci(6, Txd, First, Pin::new(P3, 2), SCI),
    PinFunction::sci(6, Rxd, First, Pin::new(P3, 3), SCI),
    PinFunction::sci(6, Sck, First, Pin::new(P3, 4), SCI),
    PinFunction::sci(6, Txd, Second, Pin::new(PB, 1), SCI),
    PinFunction::sci(6, Rxd, Second, Pin::new(PB, 0), SCI),
    PinFunction::sci(6, Sck, Second, Pin::new(PB, 3), SCI),
    // SCI8
    PinFunction::sci(8, Txd, First, Pin::new(PC, 7), SCI),
    PinFunction::sci(8, Rxd, First, Pin::new(PC, 6), SCI),
    PinFunction::sci(8, Sck, First, Pin::new(PC, 5), SCI),
    // SCI9
    PinFunction::sci(9, Txd, First, Pin::new(PB, 7), SCI),
    PinFunction::sci(9, Rxd, First, Pin::new(PB, 6), SCI),
    PinFunction::sci(9, Sck, First, Pin::new(PB, 5), SCI),
    // SCI12
    PinFunction::sci(12, Txd, First, Pin::new(PE, 1), SCI_EXT),
    PinFunction::sci(12, Rxd, First, Pin::new(PE, 2), SCI_EXT),
    PinFunction::sci(12, Sck, First, Pin::new(PE, 0), SCI_EXT),
    // RIIC0
    PinFunction::riic(0, Scl, First, Pin::new(P1, 6), RIIC),
    PinFunction::riic(0, Sda, First, Pin::new(P1, 7), RIIC),
    PinFunction::riic(0, Scl, Second, Pin::new(P1, 2), RIIC),
    PinFunction::riic(0, Sda, Second, Pin::new(P1, 3), RIIC),
    // RSPI0
    PinFunction::rspi(0, Rspck, First, Pin::new(PA, 5), RSPI),
    PinFunction::rspi(0, Mosi, First, Pin::new(PA, 6), RSPI),
    PinFunction::rspi(0, Miso, First, Pin::new(PA, 7), RSPI),
    PinFunction::rspi(0, Rspck, Second, Pin::new(PC, 5), RSPI),
    PinFunction::rspi(0, Mosi, Second, Pin::new(PC, 6), RSPI),
    PinFunction::rspi(0, Miso, Second, Pin::new(PC, 7), RSPI),
    PinFunction::rspi(0, Rspck, Third, Pin::new(PB, 0), RSPI),
    PinFunction::rspi(0, Mosi, Third, Pin::new(P1, 6), RSPI),
    PinFunction::rspi(0, Miso, Third, Pin::new(P1, 7), RSPI),
    // MTU0
    PinFunction::mtu(0, MtuChannel::A, First, Pin::new(P3, 4), MTU),
    PinFunction::mtu(0, MtuChannel::A, Second, Pin::new(PB, 3), MTU),
    PinFunction::mtu(0, MtuChannel::B, First, Pin::new(P1, 3), MTU),
    PinFunction::mtu(0, MtuChannel::B, Second, Pin::new(P1, 5), MTU),
    PinFunction::mtu(0, MtuChannel::B, Third, Pin::new(PA, 1), MTU),
    PinFunction::mtu(0, MtuChannel::C, First, Pin::new(P3, 2), MTU),
    PinFunction::mtu(0, MtuChannel::C, Second, Pin::new(PB, 1), MTU),
    PinFunction::mtu(0, MtuChannel::D, First, Pin::new(P3, 3), MTU),
    PinFunction::mtu(0, MtuChannel::D, Second, Pin::new(PA, 3), MTU),
    // MTU1
    PinFunction::mtu(1, MtuChannel::A, First, Pin::new(P2, 0), MTU),
    PinFunction::mtu(1, MtuChannel::B, First, Pin::new(P2, 1), MTU),
    // MTU2
    PinFunction::mtu(2, MtuChannel::A, First, Pin::new(P2, 6), MTU),
    PinFunction::mtu(2, MtuChannel::B, First, Pin::new(P2, 7), MTU),
    // MTU3
    PinFunction::mtu(3, MtuChannel::A, First, Pin::new(P1, 4), MTU),
    PinFunction::mtu(3, MtuChannel::A, Second, Pin::new(P1, 7), MTU),
    PinFunction::mtu(3, MtuChannel::B, First, Pin::new(P2, 2), MTU),
    PinFunction::mtu(3, MtuChannel::B, Second, Pin::new(PC, 5), MTU),
    PinFunction::mtu(3, MtuChannel::C, First, Pin::new(P1, 6), MTU),
    PinFunction::mtu(3, MtuChannel::C, Second, Pin::new(PC, 6), MTU),
    PinFunction::mtu(3, MtuChannel::D, First, Pin::new(P2, 3), MTU),
    PinFunction::mtu(3, MtuChannel::D, Second, Pin::new(PC, 4), MTU),
    // MTU4
    PinFunction::mtu(4, MtuChannel::A, First, Pin::new(P2, 4), MTU),
    PinFunction::mtu(4, MtuChannel::A, Second, Pin::new(PB, 3), MTU),
    PinFunction::mtu(4, MtuChannel::B, First, Pin::new(P3, 0), MTU),
    PinFunction::mtu(4, MtuChannel::B, Second, Pin::new(PC, 2), MTU),
    PinFunction::mtu(4, MtuChannel::C, First, Pin::new(P2, 5), MTU),
    PinFunction::mtu(4, MtuChannel::C, Second, Pin::new(PB, 1), MTU),
    PinFunction::mtu(4, MtuChannel::D, First, Pin::new(P3, 1), MTU),
    PinFunction::mtu(4, MtuChannel::D, Second, Pin::new(PC, 3), MTU),
    // MTU5
    PinFunction::mtu(5, MtuChannel::U, First, Pin::new(PA, 4), MTU),
    PinFunction::mtu(5, MtuChannel::V, First, Pin::new(PA, 6), MTU),
    PinFunction::mtu(5, MtuChannel::W, First, Pin::new(PB, 0), MTU),
    // MTCLKA-D
    PinFunction::mtu_clock(MtuClock::A, First, Pin::new(P1, 4), MTU_CLOCK),
    PinFunction::mtu_clock(MtuClock::A, Second, Pin::new(P2, 4), MTU_CLOCK),
    PinFunction::mtu_clock(MtuClock::A, Third, Pin::new(PC, 6), MTU_CLOCK),
    PinFunction::mtu_clock(MtuClock::B, First, Pin::new(P1, 5), MTU_CLOCK),
    PinFunction::mtu_clock(MtuClock::B, Second, Pin::new(P2, 5), MTU_CLOCK),
    PinFunction::mtu_clock(MtuClock::B, Third, Pin::new(PC, 7), MTU_CLOCK),
    PinFunction::mtu_clock(MtuClock::C, First, Pin::new(P2, 2), MTU_CLOCK),
    PinFunction::mtu_clock(MtuClock::C, Second, Pin::new(PC, 4), MTU_CLOCK),
    PinFunction::mtu_clock(MtuClock::D, First, Pin::new(P2, 3), MTU_CLOCK),
    PinFunction::mtu_clock(MtuClock::D, Second, Pin::new(PC, 5), MTU_CLOCK),
    // TMR0-3
    PinFunction::tmr(0, Tmo, First, Pin::new(PB, 3), TMR),
    PinFunction::tmr(0, Tmci, First, Pin::new(PB, 1), TMR),
    PinFunction::tmr(0, Tmri, First, Pin::new(PA, 4), TMR),
    PinFunction::tmr(1, Tmo, First, Pin::new(P1, 7), TMR),
    PinFunction::tmr(1, Tmci, First, Pin::new(P1, 2), TMR),
    PinFunction::tmr(1, Tmri, First, Pin::new(PB, 5), TMR),
    PinFunction::tmr(2, Tmo, First, Pin::new(P1, 6), TMR),
    PinFunction::tmr(2, Tmci, First, Pin::new(P1, 5), TMR),
    PinFunction::tmr(2, Tmri, First, Pin::new(P1, 4), TMR),
    PinFunction::tmr(3, Tmo, First, Pin::new(P1, 3), TMR),
    PinFunction::tmr(3, Tmci, First, Pin::new(PC, 6), TMR),
    PinFunction::tmr(3, Tmri, First, Pin::new(P3, 2), TMR),
    // IRQ0-7
    PinFunction::irq(0, First, Pin::new(P3, 0)),
    PinFunction::irq(1, First, Pin::new(P3, 1)),
    PinFunction::irq(2, First, Pin::new(P3, 2)),
    PinFunction::irq(2, Second, Pin::new(P1, 2)),
    PinFunction::irq(3, First, Pin::new(P3, 3)),
    PinFunction::irq(3, Second, Pin::new(P1, 3)),
    PinFunction::irq(4, First, Pin::new(P1, 4)),
    PinFunction::irq(4, Second, Pin::new(PB, 1)),
    PinFunction::irq(5, First, Pin::new(P1, 5)),
    PinFunction::irq(5, Second, Pin::new(PA, 4)),
    PinFunction::irq(6, First, Pin::new(P1, 6)),
    PinFunction::irq(6, Second, Pin::new(PA, 3)),
    PinFunction::irq(7, First, Pin::new(P1, 7)),
    PinFunction::irq(7, Second, Pin::new(PE, 2)),
];

#[cfg(test)]
mod tests {
    use super::PIN_FUNCTIONS;
    use crate::chip_specs::Rx220Specs;
    use rx::chip_specific::{validate, ChipSpecs};
    use rx::peripheral::{MtuClock, Peripheral, SciSignal, Signal};

    #[test]
    fn table_is_consistent() {
        assert_eq!(validate(PIN_FUNCTIONS), Ok(()));
    }

    #[test]
    fn candidate_counts() {
        assert_eq!(Rx220Specs::candidates(Peripheral::Sci(1), Signal::Sci(SciSignal::Txd)), 2);
        assert_eq!(Rx220Specs::candidates(Peripheral::Sci(0), Signal::Sci(SciSignal::Txd)), 1);
        assert_eq!(
            Rx220Specs::candidates(Peripheral::MtuClock, Signal::MtuClock(MtuClock::A)),
            3
        );
        assert!(!Rx220Specs::provides(Peripheral::Can(0)));
        assert!(!Rx220Specs::provides(Peripheral::Qspix));
    }
}
