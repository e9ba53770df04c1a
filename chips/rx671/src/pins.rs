// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! RX671 multi-function pin assignments (144-pin package).

use rx::chip_specific::psel::{CAN, MTU, RIIC, RSPI, SCI, SCI_CTS, SCI_EXT, TMR};
use rx::chip_specific::Order::{First, Second};
use rx::chip_specific::PinFunction;
use rx::peripheral::CanSignal::{Rx, Tx};
use rx::peripheral::MtuChannel::{A, B, C, D};
use rx::peripheral::QspixSignal::{Clk, Io0, Io1, Io2, Io3, Ssl};
use rx::peripheral::RiicSignal::{Scl, Sda};
use rx::peripheral::RspiSignal::{Miso, Mosi, Rspck};
use rx::peripheral::SciSignal::{De, Rxd, Sck, Txd};
use rx::peripheral::TmrSignal::{Tmci, Tmo, Tmri};
use rx::port::Port::{P1, P2, P3, P7, P8, PA, PB, PC, PD, PE, PH};
use rx::port::Pin;

/// QSPIX clock, select and data pins
const QSPIX: u8 = 0b011011;

pub const PIN_FUNCTIONS: &[PinFunction] = &[
    // SCI0
    PinFunction::sci(0, Txd, First, Pin::new(P2, 0), SCI),
    PinFunction::sci(0, Rxd, First, Pin::new(P2, 1), SCI),
    PinFunction::sci(0, Sck, First, Pin::new(P2, 2), SCI),
    PinFunction::sci(0, De, First, Pin::new(P2, 3), SCI_CTS),
    PinFunction::sci(0, Txd, Second, Pin::new(P3, 2), SCI),
    PinFunction::sci(0, Rxd, Second, Pin::new(P3, 3), SCI),
    PinFunction::sci(0, Sck, Second, Pin::new(P3, 4), SCI),
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
    // SCI12
    PinFunction::sci(12, Txd, First, Pin::new(PE, 1), SCI_EXT),
    PinFunction::sci(12, Rxd, First, Pin::new(PE, 2), SCI_EXT),
    PinFunction::sci(12, Sck, First, Pin::new(PE, 0), SCI_EXT),
    // RIIC0
    PinFunction::riic(0, Scl, First, Pin::new(P1, 2), RIIC),
    PinFunction::riic(0, Sda, First, Pin::new(P1, 3), RIIC),
    // RSPI0
    PinFunction::rspi(0, Rspck, First, Pin::new(PA, 5), RSPI),
    PinFunction::rspi(0, Mosi, First, Pin::new(PA, 6), RSPI),
    PinFunction::rspi(0, Miso, First, Pin::new(PA, 7), RSPI),
    PinFunction::rspi(0, Rspck, Second, Pin::new(PC, 5), RSPI),
    PinFunction::rspi(0, Mosi, Second, Pin::new(PC, 6), RSPI),
    PinFunction::rspi(0, Miso, Second, Pin::new(PC, 7), RSPI),
    // CAN0
    PinFunction::can(0, Rx, First, Pin::new(P3, 3), CAN),
    PinFunction::can(0, Tx, First, Pin::new(P3, 2), CAN),
    PinFunction::can(0, Rx, Second, Pin::new(PD, 2), CAN),
    PinFunction::can(0, Tx, Second, Pin::new(PD, 1), CAN),
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
    PinFunction::mtu(1, B, First, Pin::new(P2, 1), MTU),
    // MTU2
    PinFunction::mtu(2, A, First, Pin::new(P2, 6), MTU),
    PinFunction::mtu(2, B, First, Pin::new(P2, 7), MTU),
    // MTU3
    PinFunction::mtu(3, A, First, Pin::new(P1, 4), MTU),
    PinFunction::mtu(3, A, Second, Pin::new(PC, 7), MTU),
    PinFunction::mtu(3, B, First, Pin::new(P2, 2), MTU),
    PinFunction::mtu(3, B, Second, Pin::new(PC, 5), MTU),
    PinFunction::mtu(3, C, First, Pin::new(P1, 6), MTU),
    PinFunction::mtu(3, C, Second, Pin::new(PC, 6), MTU),
    PinFunction::mtu(3, D, First, Pin::new(P2, 3), MTU),
    PinFunction::mtu(3, D, Second, Pin::new(PC, 4), MTU),
    // TMR0-1
    PinFunction::tmr(0, Tmo, First, Pin::new(PH, 1), TMR),
    PinFunction::tmr(0, Tmci, First, Pin::new(PH, 3), TMR),
    PinFunction::tmr(0, Tmri, First, Pin::new(PH, 2), TMR),
    PinFunction::tmr(1, Tmo, First, Pin::new(P2, 6), TMR),
    PinFunction::tmr(1, Tmri, First, Pin::new(P2, 4), TMR),
    // IRQ0-3
    PinFunction::irq(0, First, Pin::new(P3, 0)),
    PinFunction::irq(0, Second, Pin::new(PD, 0)),
    PinFunction::irq(1, First, Pin::new(P3, 1)),
    PinFunction::irq(1, Second, Pin::new(PD, 1)),
    PinFunction::irq(2, First, Pin::new(P3, 2)),
    PinFunction::irq(2, Second, Pin::new(PD, 2)),
    PinFunction::irq(3, First, Pin::new(P3, 3)),
    PinFunction::irq(3, Second, Pin::new(PD, 3)),
    // QSPIX, group A on port D
    PinFunction::qspix(Clk, First, Pin::new(PD, 5), QSPIX),
    PinFunction::qspix(Ssl, First, Pin::new(PD, 4), QSPIX),
    PinFunction::qspix(Io0, First, Pin::new(PD, 6), QSPIX),
    PinFunction::qspix(Io1, First, Pin::new(PD, 7), QSPIX),
    PinFunction::qspix(Io2, First, Pin::new(PD, 2), QSPIX),
    PinFunction::qspix(Io3, First, Pin::new(PD, 3), QSPIX),
    // QSPIX, group B on ports 7, 8 and C
    PinFunction::qspix(Clk, Second, Pin::new(P7, 7), QSPIX),
    PinFunction::qspix(Ssl, Second, Pin::new(P7, 6), QSPIX),
    PinFunction::qspix(Io0, Second, Pin::new(PC, 3), QSPIX),
    PinFunction::qspix(Io1, Second, Pin::new(PC, 4), QSPIX),
    PinFunction::qspix(Io2, Second, Pin::new(P8, 0), QSPIX),
    PinFunction::qspix(Io3, Second, Pin::new(P8, 1), QSPIX),
];
