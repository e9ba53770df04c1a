// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! On-chip modules that own routable pins, and the signal roles of each.

/// A peripheral module, or module channel, whose signals can be routed to
/// package pins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Peripheral {
    /// Serial communications interface channel
    Sci(u8),
    /// Serial peripheral interface channel
    Rspi(u8),
    /// I2C bus interface channel
    Riic(u8),
    /// CAN module channel
    Can(u8),
    /// Multi-function timer pulse unit channel
    Mtu(u8),
    /// External count clock inputs shared by all MTU channels
    MtuClock,
    /// 8-bit timer channel
    Tmr(u8),
    /// External interrupt input
    Irq(u8),
    /// Quad serial peripheral interface
    Qspix,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeripheralKind {
    Sci,
    Rspi,
    Riic,
    Can,
    Mtu,
    MtuClock,
    Tmr,
    Irq,
    Qspix,
}

impl Peripheral {
    pub const fn kind(&self) -> PeripheralKind {
        match *self {
            Peripheral::Sci(_) => PeripheralKind::Sci,
            Peripheral::Rspi(_) => PeripheralKind::Rspi,
            Peripheral::Riic(_) => PeripheralKind::Riic,
            Peripheral::Can(_) => PeripheralKind::Can,
            Peripheral::Mtu(_) => PeripheralKind::Mtu,
            Peripheral::MtuClock => PeripheralKind::MtuClock,
            Peripheral::Tmr(_) => PeripheralKind::Tmr,
            Peripheral::Irq(_) => PeripheralKind::Irq,
            Peripheral::Qspix => PeripheralKind::Qspix,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SciSignal {
    /// Receive data, or SSCL in simple I2C mode
    Rxd,
    /// Transmit data, or SSDA in simple I2C mode
    Txd,
    /// Serial clock
    Sck,
    /// CTS/RTS pin used as the RS-485 driver enable
    De,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RspiSignal {
    Rspck,
    Mosi,
    Miso,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiicSignal {
    Scl,
    Sda,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanSignal {
    Rx,
    Tx,
}

/// MTU input capture / output compare pin (`MTIOCnX`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MtuChannel {
    A,
    B,
    C,
    D,
    U,
    V,
    W,
}

/// MTU external count clock input (`MTCLKx`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MtuClock {
    A,
    B,
    C,
    D,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TmrSignal {
    /// Compare match output
    Tmo,
    /// External clock input
    Tmci,
    /// Counter reset input
    Tmri,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QspixSignal {
    Clk,
    Ssl,
    Io0,
    Io1,
    Io2,
    Io3,
}

/// A signal role within a peripheral.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    Sci(SciSignal),
    Rspi(RspiSignal),
    Riic(RiicSignal),
    Can(CanSignal),
    Mtu(MtuChannel),
    MtuClock(MtuClock),
    Tmr(TmrSignal),
    Irq,
    Qspix(QspixSignal),
}

impl Signal {
    /// The peripheral kind this role belongs to.
    pub const fn kind(&self) -> PeripheralKind {
        match *self {
            Signal::Sci(_) => PeripheralKind::Sci,
            Signal::Rspi(_) => PeripheralKind::Rspi,
            Signal::Riic(_) => PeripheralKind::Riic,
            Signal::Can(_) => PeripheralKind::Can,
            Signal::Mtu(_) => PeripheralKind::Mtu,
            Signal::MtuClock(_) => PeripheralKind::MtuClock,
            Signal::Tmr(_) => PeripheralKind::Tmr,
            Signal::Irq => PeripheralKind::Irq,
            Signal::Qspix(_) => PeripheralKind::Qspix,
        }
    }
}
