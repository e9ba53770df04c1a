// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! Pin table rows and candidate ordering.

use crate::peripheral::{
    CanSignal, MtuChannel, MtuClock, Peripheral, QspixSignal, RiicSignal, RspiSignal, SciSignal,
    Signal, TmrSignal,
};
use crate::port::Pin;

/// Which of the physically wired alternatives to use for a signal.
///
/// `First` .. `Eighth` pick a table candidate. `Bypass` leaves the pins to
/// the caller and touches no register. `User` hands the request to the
/// board's user route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Bypass,
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
    User,
}

impl Order {
    /// One-based candidate number, `None` for `Bypass` and `User`.
    pub const fn ordinal(&self) -> Option<u8> {
        match *self {
            Order::First => Some(1),
            Order::Second => Some(2),
            Order::Third => Some(3),
            Order::Fourth => Some(4),
            Order::Fifth => Some(5),
            Order::Sixth => Some(6),
            Order::Seventh => Some(7),
            Order::Eighth => Some(8),
            Order::Bypass | Order::User => None,
        }
    }

    pub const fn from_ordinal(ordinal: u8) -> Option<Order> {
        match ordinal {
            1 => Some(Order::First),
            2 => Some(Order::Second),
            3 => Some(Order::Third),
            4 => Some(Order::Fourth),
            5 => Some(Order::Fifth),
            6 => Some(Order::Sixth),
            7 => Some(Order::Seventh),
            8 => Some(Order::Eighth),
            _ => None,
        }
    }
}

/// One wired alternative: `signal` of `peripheral` is available on `pin` for
/// candidate `order` when the pin's `PSEL` is set to `psel`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinFunction {
    pub peripheral: Peripheral,
    pub signal: Signal,
    pub order: Order,
    pub pin: Pin,
    pub psel: u8,
}

impl PinFunction {
    pub const fn new(
        peripheral: Peripheral,
        signal: Signal,
        order: Order,
        pin: Pin,
        psel: u8,
    ) -> PinFunction {
        PinFunction {
            peripheral,
            signal,
            order,
            pin,
            psel,
        }
    }

    pub const fn sci(
        channel: u8,
        signal: SciSignal,
        order: Order,
        pin: Pin,
        psel: u8,
    ) -> PinFunction {
        PinFunction::new(Peripheral::Sci(channel), Signal::Sci(signal), order, pin, psel)
    }

    pub const fn rspi(
        channel: u8,
        signal: RspiSignal,
        order: Order,
        pin: Pin,
        psel: u8,
    ) -> PinFunction {
        PinFunction::new(Peripheral::Rspi(channel), Signal::Rspi(signal), order, pin, psel)
    }

    pub const fn riic(
        channel: u8,
        signal: RiicSignal,
        order: Order,
        pin: Pin,
        psel: u8,
    ) -> PinFunction {
        PinFunction::new(Peripheral::Riic(channel), Signal::Riic(signal), order, pin, psel)
    }

    pub const fn can(
        channel: u8,
        signal: CanSignal,
        order: Order,
        pin: Pin,
        psel: u8,
    ) -> PinFunction {
        PinFunction::new(Peripheral::Can(channel), Signal::Can(signal), order, pin, psel)
    }

    pub const fn mtu(
        channel: u8,
        pin_channel: MtuChannel,
        order: Order,
        pin: Pin,
        psel: u8,
    ) -> PinFunction {
        PinFunction::new(Peripheral::Mtu(channel), Signal::Mtu(pin_channel), order, pin, psel)
    }

    pub const fn mtu_clock(clock: MtuClock, order: Order, pin: Pin, psel: u8) -> PinFunction {
        PinFunction::new(Peripheral::MtuClock, Signal::MtuClock(clock), order, pin, psel)
    }

    pub const fn tmr(
        channel: u8,
        signal: TmrSignal,
        order: Order,
        pin: Pin,
        psel: u8,
    ) -> PinFunction {
        PinFunction::new(Peripheral::Tmr(channel), Signal::Tmr(signal), order, pin, psel)
    }

    /// IRQ pins are selected through `ISEL`, so their `psel` is unused.
    pub const fn irq(number: u8, order: Order, pin: Pin) -> PinFunction {
        PinFunction::new(Peripheral::Irq(number), Signal::Irq, order, pin, 0)
    }

    pub const fn qspix(signal: QspixSignal, order: Order, pin: Pin, psel: u8) -> PinFunction {
        PinFunction::new(Peripheral::Qspix, Signal::Qspix(signal), order, pin, psel)
    }
}

/// `PSEL` values shared across the family.
pub mod psel {
    /// MTU input capture / output compare
    pub const MTU: u8 = 0b00001;
    /// MTU external clock input
    pub const MTU_CLOCK: u8 = 0b00010;
    /// 8-bit timer
    pub const TMR: u8 = 0b00101;
    /// SCI transmit, receive and clock
    pub const SCI: u8 = 0b01010;
    /// SCI CTS#/RTS#/SS#, used as the RS-485 driver enable
    pub const SCI_CTS: u8 = 0b01011;
    /// SCI12 and the other extended-function SCI channels
    pub const SCI_EXT: u8 = 0b01100;
    pub const RSPI: u8 = 0b01101;
    pub const RIIC: u8 = 0b01111;
    pub const CAN: u8 = 0b10000;
}

/// First inconsistency found in a pin table, with the offending row index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinTableError {
    /// Row uses `Bypass` or `User`.
    SpecialOrder(usize),
    /// Signal role belongs to a different peripheral kind.
    SignalMismatch(usize),
    /// `psel` does not fit the 6-bit `PSEL` field.
    PselRange(usize),
    /// Pin bit is not in `0..8`.
    BitRange(usize),
    /// Same `(peripheral, signal, order)` key as an earlier row.
    Duplicate(usize),
    /// Candidate `n` exists but `n - 1` does not.
    OrderGap(usize),
}

/// Check a pin table for rows the router could never use consistently.
pub fn validate(table: &[PinFunction]) -> Result<(), PinTableError> {
    for (i, row) in table.iter().enumerate() {
        let ordinal = row.order.ordinal().ok_or(PinTableError::SpecialOrder(i))?;
        if row.signal.kind() != row.peripheral.kind() {
            return Err(PinTableError::SignalMismatch(i));
        }
        if row.psel > 0x3f {
            return Err(PinTableError::PselRange(i));
        }
        if row.pin.bit > 7 {
            return Err(PinTableError::BitRange(i));
        }
        let same_role = |other: &&PinFunction| {
            other.peripheral == row.peripheral && other.signal == row.signal
        };
        if table[..i]
            .iter()
            .filter(same_role)
            .any(|other| other.order == row.order)
        {
            return Err(PinTableError::Duplicate(i));
        }
        if ordinal > 1 {
            let previous = Order::from_ordinal(ordinal - 1);
            if !table
                .iter()
                .filter(same_role)
                .any(|other| Some(other.order) == previous)
            {
                return Err(PinTableError::OrderGap(i));
            }
        }
    }
    Ok(())
}
