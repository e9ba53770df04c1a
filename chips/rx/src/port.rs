// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! I/O ports and physical pin identities.
//!
//! Every RX port register is an array of byte-wide registers indexed by the
//! port number, one bit per pin. Open-drain control is the exception: each
//! port has an `ODR0`/`ODR1` pair with two bits per pin.

use kernel::utilities::registers::{
    register_bitfields, register_structs, Field, ReadOnly, ReadWrite,
};
use kernel::utilities::StaticRef;

register_structs! {
    pub PortRegisters {
        /// Port direction registers
        (0x000 => pub pdr: [ReadWrite<u8, PORT::Register>; 32]),
        /// Port output data registers
        (0x020 => pub podr: [ReadWrite<u8>; 32]),
        /// Port input data registers
        (0x040 => pub pidr: [ReadOnly<u8>; 32]),
        /// Port mode registers
        (0x060 => pub pmr: [ReadWrite<u8, PORT::Register>; 32]),
        /// Open drain control registers, `ODR0` at `2 * port`, `ODR1` at
        /// `2 * port + 1`
        (0x080 => pub odr: [ReadWrite<u8, ODR::Register>; 64]),
        /// Pull-up resistor control registers
        (0x0C0 => pub pcr: [ReadWrite<u8>; 32]),
        (0x0E0 => @END),
    }
}

register_bitfields![u8,
    /// One bit per pin, shared by the port-wide registers
    pub PORT [
        B0 OFFSET(0) NUMBITS(1) [],
        B1 OFFSET(1) NUMBITS(1) [],
        B2 OFFSET(2) NUMBITS(1) [],
        B3 OFFSET(3) NUMBITS(1) [],
        B4 OFFSET(4) NUMBITS(1) [],
        B5 OFFSET(5) NUMBITS(1) [],
        B6 OFFSET(6) NUMBITS(1) [],
        B7 OFFSET(7) NUMBITS(1) []
    ],
    /// NMOS open-drain bits of the four pins an `ODR0`/`ODR1` register covers
    pub ODR [
        B0 OFFSET(0) NUMBITS(1) [],
        B1 OFFSET(2) NUMBITS(1) [],
        B2 OFFSET(4) NUMBITS(1) [],
        B3 OFFSET(6) NUMBITS(1) []
    ]
];

pub const PORT_BASE: StaticRef<PortRegisters> =
    unsafe { StaticRef::new(0x0008_C000 as *const PortRegisters) };

/// I/O port, numbered as in the register arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Port {
    P0 = 0,
    P1 = 1,
    P2 = 2,
    P3 = 3,
    P4 = 4,
    P5 = 5,
    P6 = 6,
    P7 = 7,
    P8 = 8,
    P9 = 9,
    PA = 10,
    PB = 11,
    PC = 12,
    PD = 13,
    PE = 14,
    PF = 15,
    PG = 16,
    PH = 17,
    PJ = 18,
    PK = 19,
    PL = 20,
    PM = 21,
    PN = 22,
    PQ = 23,
}

/// One physical pin: a port and a bit within it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pin {
    pub port: Port,
    pub bit: u8,
}

impl Pin {
    pub const fn new(port: Port, bit: u8) -> Pin {
        Pin { port, bit }
    }

    /// Index of the port in the PORT register arrays.
    pub const fn port_index(&self) -> usize {
        self.port as usize
    }

    /// Index of this pin's `PmnPFS` register.
    pub const fn pfs_index(&self) -> usize {
        self.port as usize * 8 + self.bit as usize
    }

    /// Mask of this pin in the port-wide registers.
    pub const fn mask(&self) -> u8 {
        1 << self.bit
    }

    /// This pin's bit in `PDR`, `PMR` and the other port-wide registers.
    pub const fn port_field(&self) -> Field<u8, PORT::Register> {
        Field::new(1, self.bit as usize)
    }

    /// Index in `odr` of the register holding this pin's open-drain bit.
    pub const fn open_drain_index(&self) -> usize {
        self.port as usize * 2 + (self.bit as usize / 4)
    }

    /// This pin's NMOS open-drain bit within `odr[open_drain_index()]`.
    pub const fn open_drain_field(&self) -> Field<u8, ODR::Register> {
        Field::new(1, (self.bit as usize % 4) * 2)
    }
}
