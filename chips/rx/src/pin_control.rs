// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! Register-level pin function control.
//!
//! [`PinFunctionRegisters`] is the set of register writes the pin router is
//! built from. [`RxPinFunctions`] implements it over the MPC and PORT blocks.
//! The writes that change a pin's function are only reachable through a
//! [`WriteProtectSession`], which unlocks `PWPR` when opened and locks it
//! again when dropped.

use kernel::utilities::registers::interfaces::{ReadWriteable, Writeable};
use kernel::utilities::StaticRef;

use crate::mpc::{MpcRegisters, PFS, PWPR};
use crate::port::{Pin, PortRegisters};

/// Register writes needed to change which function drives a pin.
pub trait PinFunctionRegisters {
    /// Clear `PWPR.B0WI`, then set `PWPR.PFSWE`.
    fn unlock_write_protect(&self);

    /// Clear `PWPR.PFSWE`, then set `PWPR.B0WI`.
    fn lock_write_protect(&self);

    /// Set the pin's `PMR` bit: `true` for peripheral function, `false` for
    /// general I/O.
    fn set_port_mode(&self, pin: Pin, peripheral: bool);

    /// Write the pin's `PmnPFS.PSEL` field.
    fn set_function_select(&self, pin: Pin, psel: u8);

    /// Write the pin's `PmnPFS.ISEL` bit.
    fn set_interrupt_select(&self, pin: Pin, enable: bool);

    /// Set or clear the pin's NMOS open-drain bit.
    fn set_open_drain(&self, pin: Pin, enable: bool);

    /// Clear the pin's `PDR` bit.
    fn set_input(&self, pin: Pin);
}

/// Pin function registers of an RX chip.
pub struct RxPinFunctions {
    mpc: StaticRef<MpcRegisters>,
    port: StaticRef<PortRegisters>,
}

impl RxPinFunctions {
    pub const fn new(
        mpc: StaticRef<MpcRegisters>,
        port: StaticRef<PortRegisters>,
    ) -> RxPinFunctions {
        RxPinFunctions { mpc, port }
    }

    pub fn mpc(&self) -> &MpcRegisters {
        &self.mpc
    }

    pub fn port(&self) -> &PortRegisters {
        &self.port
    }
}

impl PinFunctionRegisters for RxPinFunctions {
    fn unlock_write_protect(&self) {
        self.mpc.pwpr.write(PWPR::B0WI::CLEAR);
        self.mpc.pwpr.write(PWPR::PFSWE::SET);
    }

    fn lock_write_protect(&self) {
        self.mpc.pwpr.write(PWPR::PFSWE::CLEAR);
        self.mpc.pwpr.write(PWPR::B0WI::SET);
    }

    fn set_port_mode(&self, pin: Pin, peripheral: bool) {
        self.port.pmr[pin.port_index()].modify(pin.port_field().val(u8::from(peripheral)));
    }

    fn set_function_select(&self, pin: Pin, psel: u8) {
        self.mpc.pfs[pin.pfs_index()].modify(PFS::PSEL.val(psel));
    }

    fn set_interrupt_select(&self, pin: Pin, enable: bool) {
        self.mpc.pfs[pin.pfs_index()].modify(if enable {
            PFS::ISEL::SET
        } else {
            PFS::ISEL::CLEAR
        });
    }

    fn set_open_drain(&self, pin: Pin, enable: bool) {
        self.port.odr[pin.open_drain_index()]
            .modify(pin.open_drain_field().val(u8::from(enable)));
    }

    fn set_input(&self, pin: Pin) {
        self.port.pdr[pin.port_index()].modify(pin.port_field().val(0));
    }
}

/// Scoped write access to the pin-function-select registers.
///
/// Opening a session unlocks `PWPR`; dropping it locks `PWPR` again, also on
/// early return.
pub struct WriteProtectSession<'a, R: PinFunctionRegisters> {
    registers: &'a R,
}

impl<'a, R: PinFunctionRegisters> WriteProtectSession<'a, R> {
    pub fn open(registers: &'a R) -> WriteProtectSession<'a, R> {
        registers.unlock_write_protect();
        WriteProtectSession { registers }
    }

    /// Hand `pin` to peripheral function `psel`, or back to general I/O when
    /// `enable` is false.
    ///
    /// The pin leaves peripheral mode before its selector changes, so it is
    /// never driven by two functions at once. A released pin always leaves
    /// open-drain mode, whichever option it was routed with.
    pub fn route_function(&self, pin: Pin, psel: u8, open_drain: bool, enable: bool) {
        self.registers.set_port_mode(pin, false);
        self.registers
            .set_function_select(pin, if enable { psel } else { 0 });
        if open_drain || !enable {
            self.registers.set_open_drain(pin, enable && open_drain);
        }
        self.registers.set_port_mode(pin, enable);
    }

    /// Use `pin` as an external interrupt input, or stop doing so.
    ///
    /// Interrupt inputs are sampled in general I/O mode, so `PMR` stays clear.
    pub fn route_interrupt(&self, pin: Pin, enable: bool) {
        self.registers.set_port_mode(pin, false);
        if enable {
            self.registers.set_input(pin);
        }
        self.registers.set_interrupt_select(pin, enable);
    }
}

impl<R: PinFunctionRegisters> Drop for WriteProtectSession<'_, R> {
    fn drop(&mut self) {
        self.registers.lock_write_protect();
    }
}
