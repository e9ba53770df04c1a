// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! Multi-function pin controller (MPC).
//!
//! The MPC holds one pin-function-select register (`PmnPFS`) per physical
//! pin and the write-protect register (`PWPR`) that guards them. `PmnPFS`
//! writes are ignored by the hardware unless `PWPR.PFSWE` is set, and
//! `PFSWE` itself can only be changed while `PWPR.B0WI` is clear.

use kernel::utilities::registers::{register_bitfields, register_structs, ReadWrite};
use kernel::utilities::StaticRef;

register_structs! {
    pub MpcRegisters {
        (0x000 => _reserved0),
        /// Write-protect register
        (0x01F => pub pwpr: ReadWrite<u8, PWPR::Register>),
        (0x020 => _reserved1),
        /// Pin function control registers, indexed by `port * 8 + bit`
        (0x040 => pub pfs: [ReadWrite<u8, PFS::Register>; 256]),
        (0x140 => @END),
    }
}

register_bitfields![u8,
    pub PWPR [
        /// PFS register write enable
        PFSWE OFFSET(6) NUMBITS(1) [],
        /// PFSWE bit write disable
        B0WI OFFSET(7) NUMBITS(1) []
    ],
    pub PFS [
        /// Pin function select
        PSEL OFFSET(0) NUMBITS(6) [],
        /// Interrupt input function select
        ISEL OFFSET(6) NUMBITS(1) [],
        /// Analog input function select
        ASEL OFFSET(7) NUMBITS(1) []
    ]
];

/// Value of `PWPR` out of reset and whenever the protection is engaged.
pub const PWPR_LOCKED: u8 = 0x80;

pub const MPC_BASE: StaticRef<MpcRegisters> =
    unsafe { StaticRef::new(0x0008_C100 as *const MpcRegisters) };
