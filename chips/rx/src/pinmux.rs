// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! Routing peripheral signals to package pins.
//!
//! A [`PinRouter`] looks a request up in its chip's pin table and applies the
//! result: every required pin is resolved first, then the write protection
//! is lifted, each pin goes through the disable / reprogram / enable
//! sequence, and the protection is restored. A request that cannot be fully
//! resolved fails before any register is written.
//!
//! Usage
//! -----
//!
//! ```rust,ignore
//! let router = unsafe { rx220::pin_router() };
//! // SCI1 on its second candidate pins, as a simple I2C master.
//! router.route(Peripheral::Sci(1), true, Order::Second, RouteOption::I2c)?;
//! ```

use core::cell::Cell;
use core::marker::PhantomData;

use kernel::debug;
use kernel::ErrorCode;

use crate::chip_specific::{ChipSpecs, Order, PinFunction};
use crate::config::CONFIG;
use crate::peripheral::{
    CanSignal, MtuChannel, MtuClock, Peripheral, PeripheralKind, QspixSignal, RiicSignal,
    RspiSignal, SciSignal, Signal, TmrSignal,
};
use crate::pin_control::{PinFunctionRegisters, WriteProtectSession};
use crate::port::Pin;

/// Board-supplied routing used for `Order::User` requests.
///
/// Receives the requested peripheral and enable flag and returns whether the
/// routing succeeded. It runs with the write protection lifted.
pub type UserRoute = fn(Peripheral, bool) -> bool;

/// Mode of an SCI channel, which decides the pins it needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteOption {
    /// Plain function pins
    None,
    /// SCI simple I2C: RXD/TXD become SSCL/SSDA with NMOS open-drain outputs
    I2c,
    /// SCI clock synchronous or simple SPI: adds the SCK pin
    Spi,
    /// SCI with RS-485 driver enable: adds the DE pin
    De,
}

const SCI_PINS: &[Signal] = &[Signal::Sci(SciSignal::Rxd), Signal::Sci(SciSignal::Txd)];
const SCI_SPI_PINS: &[Signal] = &[
    Signal::Sci(SciSignal::Rxd),
    Signal::Sci(SciSignal::Txd),
    Signal::Sci(SciSignal::Sck),
];
const SCI_DE_PINS: &[Signal] = &[
    Signal::Sci(SciSignal::Rxd),
    Signal::Sci(SciSignal::Txd),
    Signal::Sci(SciSignal::De),
];
const RSPI_PINS: &[Signal] = &[
    Signal::Rspi(RspiSignal::Rspck),
    Signal::Rspi(RspiSignal::Mosi),
    Signal::Rspi(RspiSignal::Miso),
];
const RIIC_PINS: &[Signal] = &[Signal::Riic(RiicSignal::Scl), Signal::Riic(RiicSignal::Sda)];
const CAN_PINS: &[Signal] = &[Signal::Can(CanSignal::Rx), Signal::Can(CanSignal::Tx)];
const QSPIX_PINS: &[Signal] = &[
    Signal::Qspix(QspixSignal::Clk),
    Signal::Qspix(QspixSignal::Ssl),
    Signal::Qspix(QspixSignal::Io0),
    Signal::Qspix(QspixSignal::Io1),
    Signal::Qspix(QspixSignal::Io2),
    Signal::Qspix(QspixSignal::Io3),
];

const MAX_PLAN_PINS: usize = QSPIX_PINS.len();

#[derive(Clone, Copy)]
enum PinMode {
    Function { psel: u8, open_drain: bool },
    Interrupt,
}

#[derive(Clone, Copy)]
struct PlannedPin {
    pin: Pin,
    mode: PinMode,
}

/// Every pin one request writes, resolved before the first write.
struct RoutePlan {
    pins: [Option<PlannedPin>; MAX_PLAN_PINS],
    len: usize,
}

impl RoutePlan {
    fn new() -> RoutePlan {
        RoutePlan {
            pins: [None; MAX_PLAN_PINS],
            len: 0,
        }
    }

    fn push(&mut self, function: &PinFunction, mode: PinMode) {
        self.pins[self.len] = Some(PlannedPin {
            pin: function.pin,
            mode,
        });
        self.len += 1;
    }

    fn iter(&self) -> impl Iterator<Item = &PlannedPin> {
        self.pins[..self.len].iter().flatten()
    }
}

/// Pin router for the chip described by `C`, writing through `R`.
pub struct PinRouter<C: ChipSpecs, R: PinFunctionRegisters> {
    registers: R,
    user_route: Cell<Option<UserRoute>>,
    _chip: PhantomData<C>,
}

impl<C: ChipSpecs, R: PinFunctionRegisters> PinRouter<C, R> {
    pub const fn new(registers: R) -> PinRouter<C, R> {
        PinRouter {
            registers,
            user_route: Cell::new(None),
            _chip: PhantomData,
        }
    }

    pub fn registers(&self) -> &R {
        &self.registers
    }

    /// Register the routing used for `Order::User` requests.
    pub fn set_user_route(&self, route: UserRoute) {
        self.user_route.set(Some(route));
    }

    pub fn clear_user_route(&self) {
        self.user_route.set(None);
    }

    /// Route the pins of a serial, SPI, I2C or CAN channel.
    ///
    /// `option` selects the SCI mode and must be `RouteOption::None` for any
    /// other peripheral.
    pub fn route(
        &self,
        peripheral: Peripheral,
        enable: bool,
        order: Order,
        option: RouteOption,
    ) -> Result<(), ErrorCode> {
        self.dispatch(peripheral, enable, order, || {
            let (signals, open_drain): (&[Signal], bool) = match (peripheral.kind(), option) {
                (PeripheralKind::Sci, RouteOption::None) => (SCI_PINS, false),
                (PeripheralKind::Sci, RouteOption::I2c) => (SCI_PINS, true),
                (PeripheralKind::Sci, RouteOption::Spi) => (SCI_SPI_PINS, false),
                (PeripheralKind::Sci, RouteOption::De) => (SCI_DE_PINS, false),
                (PeripheralKind::Rspi, RouteOption::None) => (RSPI_PINS, false),
                (PeripheralKind::Riic, RouteOption::None) => (RIIC_PINS, false),
                (PeripheralKind::Can, RouteOption::None) => (CAN_PINS, false),
                (PeripheralKind::Rspi, _)
                | (PeripheralKind::Riic, _)
                | (PeripheralKind::Can, _) => return Err(ErrorCode::NOSUPPORT),
                _ => return Err(ErrorCode::NODEVICE),
            };
            Self::plan_functions(peripheral, peripheral, signals, order, open_drain)
        })
    }

    /// Route one MTU input capture / output compare pin.
    ///
    /// Output polarity inversion is not available through the pin
    /// controller; `inverted` requests fail with `NOSUPPORT`.
    pub fn route_mtu(
        &self,
        peripheral: Peripheral,
        channel: MtuChannel,
        enable: bool,
        order: Order,
        inverted: bool,
    ) -> Result<(), ErrorCode> {
        self.dispatch(peripheral, enable, order, || {
            if peripheral.kind() != PeripheralKind::Mtu {
                return Err(ErrorCode::NODEVICE);
            }
            if inverted {
                return Err(ErrorCode::NOSUPPORT);
            }
            Self::plan_functions(peripheral, peripheral, &[Signal::Mtu(channel)], order, false)
        })
    }

    /// Route one MTU external count clock input for an MTU channel.
    pub fn route_mtu_clock(
        &self,
        peripheral: Peripheral,
        clock: MtuClock,
        enable: bool,
        order: Order,
    ) -> Result<(), ErrorCode> {
        self.dispatch(peripheral, enable, order, || {
            if peripheral.kind() != PeripheralKind::Mtu {
                return Err(ErrorCode::NODEVICE);
            }
            Self::plan_functions(
                peripheral,
                Peripheral::MtuClock,
                &[Signal::MtuClock(clock)],
                order,
                false,
            )
        })
    }

    /// Route one 8-bit timer pin.
    pub fn route_tmr(
        &self,
        peripheral: Peripheral,
        signal: TmrSignal,
        enable: bool,
        order: Order,
    ) -> Result<(), ErrorCode> {
        self.dispatch(peripheral, enable, order, || {
            if peripheral.kind() != PeripheralKind::Tmr {
                return Err(ErrorCode::NODEVICE);
            }
            Self::plan_functions(peripheral, peripheral, &[Signal::Tmr(signal)], order, false)
        })
    }

    /// Route an external interrupt input pin.
    pub fn route_irq(
        &self,
        peripheral: Peripheral,
        enable: bool,
        order: Order,
    ) -> Result<(), ErrorCode> {
        self.dispatch(peripheral, enable, order, || {
            if peripheral.kind() != PeripheralKind::Irq || !C::provides(peripheral) {
                return Err(ErrorCode::NODEVICE);
            }
            let function = C::find(peripheral, Signal::Irq, order).ok_or(ErrorCode::INVAL)?;
            let mut plan = RoutePlan::new();
            plan.push(function, PinMode::Interrupt);
            Ok(plan)
        })
    }

    /// Route the six QSPIX pins of one candidate group.
    pub fn route_qspix(&self, enable: bool, order: Order) -> Result<(), ErrorCode> {
        self.dispatch(Peripheral::Qspix, enable, order, || {
            Self::plan_functions(
                Peripheral::Qspix,
                Peripheral::Qspix,
                QSPIX_PINS,
                order,
                false,
            )
        })
    }

    pub fn turn(
        &self,
        peripheral: Peripheral,
        enable: bool,
        order: Order,
        option: RouteOption,
    ) -> bool {
        self.route(peripheral, enable, order, option).is_ok()
    }

    pub fn turn_mtu(
        &self,
        peripheral: Peripheral,
        channel: MtuChannel,
        enable: bool,
        order: Order,
        inverted: bool,
    ) -> bool {
        self.route_mtu(peripheral, channel, enable, order, inverted)
            .is_ok()
    }

    pub fn turn_mtu_clock(
        &self,
        peripheral: Peripheral,
        clock: MtuClock,
        enable: bool,
        order: Order,
    ) -> bool {
        self.route_mtu_clock(peripheral, clock, enable, order).is_ok()
    }

    pub fn turn_tmr(
        &self,
        peripheral: Peripheral,
        signal: TmrSignal,
        enable: bool,
        order: Order,
    ) -> bool {
        self.route_tmr(peripheral, signal, enable, order).is_ok()
    }

    pub fn turn_irq(&self, peripheral: Peripheral, enable: bool, order: Order) -> bool {
        self.route_irq(peripheral, enable, order).is_ok()
    }

    pub fn turn_qspix(&self, enable: bool, order: Order) -> bool {
        self.route_qspix(enable, order).is_ok()
    }

    /// Resolve the rows for `signals` of `table_peripheral`. `peripheral` is
    /// the one the caller asked for.
    fn plan_functions(
        peripheral: Peripheral,
        table_peripheral: Peripheral,
        signals: &[Signal],
        order: Order,
        open_drain: bool,
    ) -> Result<RoutePlan, ErrorCode> {
        if !C::provides(peripheral) || !C::provides(table_peripheral) {
            return Err(ErrorCode::NODEVICE);
        }
        let mut plan = RoutePlan::new();
        for signal in signals {
            let function = C::find(table_peripheral, *signal, order).ok_or(ErrorCode::INVAL)?;
            plan.push(
                function,
                PinMode::Function {
                    psel: function.psel,
                    open_drain,
                },
            );
        }
        Ok(plan)
    }

    fn dispatch<F>(
        &self,
        peripheral: Peripheral,
        enable: bool,
        order: Order,
        plan: F,
    ) -> Result<(), ErrorCode>
    where
        F: FnOnce() -> Result<RoutePlan, ErrorCode>,
    {
        let result = match order {
            Order::Bypass => return Ok(()),
            Order::User => self.apply_user(peripheral, enable),
            _ => plan().map(|plan| self.apply(&plan, enable)),
        };
        if CONFIG.trace_pin_routing {
            match result {
                Ok(pins) => debug!(
                    "{}: {:?} {:?} enable={} pins={}",
                    C::NAME,
                    peripheral,
                    order,
                    enable,
                    pins
                ),
                Err(e) => debug!("{}: {:?} {:?} failed: {}", C::NAME, peripheral, order, e),
            }
        }
        result.map(|_| ())
    }

    /// Write every planned pin and return how many were written.
    fn apply(&self, plan: &RoutePlan, enable: bool) -> usize {
        let session = WriteProtectSession::open(&self.registers);
        for planned in plan.iter() {
            match planned.mode {
                PinMode::Function { psel, open_drain } => {
                    session.route_function(planned.pin, psel, open_drain, enable)
                }
                PinMode::Interrupt => session.route_interrupt(planned.pin, enable),
            }
        }
        plan.len
    }

    fn apply_user(&self, peripheral: Peripheral, enable: bool) -> Result<usize, ErrorCode> {
        let route = self.user_route.get().ok_or(ErrorCode::FAIL)?;
        let _session = WriteProtectSession::open(&self.registers);
        if route(peripheral, enable) {
            Ok(0)
        } else {
            Err(ErrorCode::FAIL)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PinRouter, RouteOption};
    use crate::chip_specific::{ChipSpecs, Order, PinFunction};
    use crate::peripheral::{
        MtuChannel, MtuClock, Peripheral, QspixSignal, RiicSignal, SciSignal, Signal, TmrSignal,
    };
    use crate::pin_control::PinFunctionRegisters;
    use crate::port::{Pin, Port};
    use core::cell::{Cell, RefCell};
    use kernel::ErrorCode;
    use std::vec::Vec;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Op {
        Unlock,
        Lock,
        PortMode(Pin, bool),
        Psel(Pin, u8),
        Isel(Pin, bool),
        OpenDrain(Pin, bool),
        Input(Pin),
    }

    /// Register fake that records every access and, like the hardware,
    /// only lets `PmnPFS` writes through while `PWPR.PFSWE` is set.
    struct RecordingRegisters {
        ops: RefCell<Vec<Op>>,
        unlocked: Cell<bool>,
        pmr: RefCell<[u8; 32]>,
        pfs: RefCell<[u8; 256]>,
    }

    impl RecordingRegisters {
        fn new() -> RecordingRegisters {
            RecordingRegisters {
                ops: RefCell::new(Vec::new()),
                unlocked: Cell::new(false),
                pmr: RefCell::new([0; 32]),
                pfs: RefCell::new([0; 256]),
            }
        }

        fn ops(&self) -> Vec<Op> {
            self.ops.borrow().clone()
        }

        fn clear_ops(&self) {
            self.ops.borrow_mut().clear();
        }

        fn pmr(&self, port: Port) -> u8 {
            self.pmr.borrow()[port as usize]
        }

        fn pfs(&self, pin: Pin) -> u8 {
            self.pfs.borrow()[pin.pfs_index()]
        }

        fn record(&self, op: Op) {
            self.ops.borrow_mut().push(op);
        }
    }

    impl PinFunctionRegisters for RecordingRegisters {
        fn unlock_write_protect(&self) {
            self.record(Op::Unlock);
            self.unlocked.set(true);
        }

        fn lock_write_protect(&self) {
            self.record(Op::Lock);
            self.unlocked.set(false);
        }

        fn set_port_mode(&self, pin: Pin, peripheral: bool) {
            self.record(Op::PortMode(pin, peripheral));
            let mut pmr = self.pmr.borrow_mut();
            if peripheral {
                pmr[pin.port_index()] |= pin.mask();
            } else {
                pmr[pin.port_index()] &= !pin.mask();
            }
        }

        fn set_function_select(&self, pin: Pin, psel: u8) {
            self.record(Op::Psel(pin, psel));
            if self.unlocked.get() {
                let mut pfs = self.pfs.borrow_mut();
                pfs[pin.pfs_index()] = (pfs[pin.pfs_index()] & !0x3f) | psel;
            }
        }

        fn set_interrupt_select(&self, pin: Pin, enable: bool) {
            self.record(Op::Isel(pin, enable));
            if self.unlocked.get() {
                let mut pfs = self.pfs.borrow_mut();
                if enable {
                    pfs[pin.pfs_index()] |= 0x40;
                } else {
                    pfs[pin.pfs_index()] &= !0x40;
                }
            }
        }

        fn set_open_drain(&self, pin: Pin, enable: bool) {
            self.record(Op::OpenDrain(pin, enable));
        }

        fn set_input(&self, pin: Pin) {
            self.record(Op::Input(pin));
        }
    }

    const P20: Pin = Pin::new(Port::P2, 0);
    const P21: Pin = Pin::new(Port::P2, 1);
    const P22: Pin = Pin::new(Port::P2, 2);
    const P32: Pin = Pin::new(Port::P3, 2);
    const P33: Pin = Pin::new(Port::P3, 3);
    const P12: Pin = Pin::new(Port::P1, 2);
    const P13: Pin = Pin::new(Port::P1, 3);
    const P14: Pin = Pin::new(Port::P1, 4);
    const P24: Pin = Pin::new(Port::P2, 4);
    const P34: Pin = Pin::new(Port::P3, 4);
    const PB3: Pin = Pin::new(Port::PB, 3);

    const SCI: u8 = 0b01010;

    enum TestSpecs {}

    impl ChipSpecs for TestSpecs {
        const NAME: &'static str = "test";
        const PIN_FUNCTIONS: &'static [PinFunction] = &[
            PinFunction::new(Peripheral::Sci(0), Signal::Sci(SciSignal::Rxd), Order::First, P21, SCI),
            PinFunction::new(Peripheral::Sci(0), Signal::Sci(SciSignal::Txd), Order::First, P20, SCI),
            PinFunction::new(Peripheral::Sci(0), Signal::Sci(SciSignal::Sck), Order::First, P22, SCI),
            PinFunction::new(Peripheral::Sci(0), Signal::Sci(SciSignal::Rxd), Order::Second, P33, SCI),
            PinFunction::new(Peripheral::Sci(0), Signal::Sci(SciSignal::Txd), Order::Second, P32, SCI),
            PinFunction::new(Peripheral::Riic(0), Signal::Riic(RiicSignal::Scl), Order::First, P12, 0b01111),
            PinFunction::new(Peripheral::Riic(0), Signal::Riic(RiicSignal::Sda), Order::First, P13, 0b01111),
            PinFunction::new(Peripheral::Mtu(0), Signal::Mtu(MtuChannel::A), Order::First, P34, 0b00001),
            PinFunction::new(Peripheral::MtuClock, Signal::MtuClock(MtuClock::A), Order::First, P24, 0b00010),
            PinFunction::new(Peripheral::Tmr(0), Signal::Tmr(TmrSignal::Tmo), Order::First, PB3, 0b00101),
            PinFunction::new(Peripheral::Irq(4), Signal::Irq, Order::First, P14, 0),
            PinFunction::new(Peripheral::Qspix, Signal::Qspix(QspixSignal::Clk), Order::First, Pin::new(Port::PD, 5), 0b011011),
            PinFunction::new(Peripheral::Qspix, Signal::Qspix(QspixSignal::Ssl), Order::First, Pin::new(Port::PD, 4), 0b011011),
            PinFunction::new(Peripheral::Qspix, Signal::Qspix(QspixSignal::Io0), Order::First, Pin::new(Port::PD, 6), 0b011011),
            PinFunction::new(Peripheral::Qspix, Signal::Qspix(QspixSignal::Io1), Order::First, Pin::new(Port::PD, 7), 0b011011),
            PinFunction::new(Peripheral::Qspix, Signal::Qspix(QspixSignal::Io2), Order::First, Pin::new(Port::PD, 2), 0b011011),
            PinFunction::new(Peripheral::Qspix, Signal::Qspix(QspixSignal::Io3), Order::First, Pin::new(Port::PD, 3), 0b011011),
        ];
    }

    type TestRouter = PinRouter<TestSpecs, RecordingRegisters>;

    fn router() -> TestRouter {
        PinRouter::new(RecordingRegisters::new())
    }

    #[test]
    fn test_table_is_consistent() {
        assert_eq!(crate::chip_specific::pin_table::validate(TestSpecs::PIN_FUNCTIONS), Ok(()));
    }

    #[test]
    fn sci_first_candidate_sets_mode_and_selector() {
        let router = router();
        let regs = router.registers();

        assert_eq!(router.route(Peripheral::Sci(0), true, Order::First, RouteOption::None), Ok(()));

        assert_eq!(regs.pmr(Port::P2), 0b0000_0011);
        assert_eq!(regs.pfs(P20), SCI);
        assert_eq!(regs.pfs(P21), SCI);
        assert!(!regs.unlocked.get());
    }

    #[test]
    fn pins_leave_peripheral_mode_before_reprogramming() {
        let router = router();
        router.route(Peripheral::Sci(0), true, Order::First, RouteOption::None).unwrap();

        assert_eq!(
            router.registers().ops(),
            vec![
                Op::Unlock,
                Op::PortMode(P21, false),
                Op::Psel(P21, SCI),
                Op::PortMode(P21, true),
                Op::PortMode(P20, false),
                Op::Psel(P20, SCI),
                Op::PortMode(P20, true),
                Op::Lock,
            ]
        );
    }

    #[test]
    fn disable_is_idempotent() {
        let router = router();
        let regs = router.registers();
        router.route(Peripheral::Sci(0), true, Order::First, RouteOption::Spi).unwrap();

        router.route(Peripheral::Sci(0), false, Order::First, RouteOption::Spi).unwrap();
        let pmr = regs.pmr(Port::P2);
        let pfs = [regs.pfs(P20), regs.pfs(P21), regs.pfs(P22)];
        router.route(Peripheral::Sci(0), false, Order::First, RouteOption::Spi).unwrap();

        assert_eq!(regs.pmr(Port::P2), pmr);
        assert_eq!([regs.pfs(P20), regs.pfs(P21), regs.pfs(P22)], pfs);
        assert_eq!(pmr, 0);
        assert_eq!(pfs, [0, 0, 0]);
    }

    #[test]
    fn enable_then_disable_restores_port_mode() {
        let router = router();
        let regs = router.registers();
        regs.pmr.borrow_mut()[Port::P3 as usize] = 0b1000_0000;

        router.route(Peripheral::Sci(0), true, Order::Second, RouteOption::None).unwrap();
        assert_eq!(regs.pmr(Port::P3), 0b1000_1100);
        router.route(Peripheral::Sci(0), false, Order::Second, RouteOption::None).unwrap();
        assert_eq!(regs.pmr(Port::P3), 0b1000_0000);
    }

    #[test]
    fn bypass_touches_nothing() {
        let router = router();
        assert_eq!(router.route(Peripheral::Sci(0), true, Order::Bypass, RouteOption::None), Ok(()));
        assert_eq!(router.route(Peripheral::Tmr(9), true, Order::Bypass, RouteOption::I2c), Ok(()));
        assert_eq!(router.route_mtu(Peripheral::Sci(0), MtuChannel::W, true, Order::Bypass, true), Ok(()));
        assert_eq!(router.route_qspix(false, Order::Bypass), Ok(()));
        assert!(router.registers().ops().is_empty());
    }

    #[test]
    fn missing_candidate_fails_without_writes() {
        let router = router();
        assert_eq!(
            router.route(Peripheral::Sci(0), true, Order::Third, RouteOption::None),
            Err(ErrorCode::INVAL)
        );
        assert_eq!(
            router.route(Peripheral::Riic(0), true, Order::Second, RouteOption::None),
            Err(ErrorCode::INVAL)
        );
        assert_eq!(
            router.route_tmr(Peripheral::Tmr(0), TmrSignal::Tmci, true, Order::First),
            Err(ErrorCode::INVAL)
        );
        assert!(router.registers().ops().is_empty());
    }

    #[test]
    fn missing_clock_pin_leaves_data_pins_alone() {
        let router = router();
        // RXD/TXD exist for the second candidate but SCK does not.
        assert_eq!(
            router.route(Peripheral::Sci(0), true, Order::Second, RouteOption::Spi),
            Err(ErrorCode::INVAL)
        );
        assert!(router.registers().ops().is_empty());
        assert_eq!(router.registers().pmr(Port::P3), 0);
    }

    #[test]
    fn spi_option_adds_clock_pin() {
        let router = router();
        router.route(Peripheral::Sci(0), true, Order::First, RouteOption::Spi).unwrap();
        assert_eq!(router.registers().pmr(Port::P2), 0b0000_0111);
        assert_eq!(router.registers().pfs(P22), SCI);
    }

    #[test]
    fn i2c_option_sets_open_drain() {
        let router = router();
        router.route(Peripheral::Sci(0), true, Order::First, RouteOption::I2c).unwrap();
        let ops = router.registers().ops();
        assert!(ops.contains(&Op::OpenDrain(P21, true)));
        assert!(ops.contains(&Op::OpenDrain(P20, true)));

        router.registers().clear_ops();
        router.route(Peripheral::Sci(0), true, Order::First, RouteOption::None).unwrap();
        assert!(!router
            .registers()
            .ops()
            .iter()
            .any(|op| matches!(op, Op::OpenDrain(..))));
    }

    #[test]
    fn plain_release_clears_i2c_open_drain() {
        let router = router();
        router.route(Peripheral::Sci(0), true, Order::First, RouteOption::I2c).unwrap();
        router.registers().clear_ops();

        router.route(Peripheral::Sci(0), false, Order::First, RouteOption::None).unwrap();
        assert_eq!(
            router.registers().ops(),
            vec![
                Op::Unlock,
                Op::PortMode(P21, false),
                Op::Psel(P21, 0),
                Op::OpenDrain(P21, false),
                Op::PortMode(P21, false),
                Op::PortMode(P20, false),
                Op::Psel(P20, 0),
                Op::OpenDrain(P20, false),
                Op::PortMode(P20, false),
                Op::Lock,
            ]
        );
    }

    #[test]
    fn rejected_requests_keep_write_protect_locked() {
        let router = router();
        let rejected = [
            router.route(Peripheral::Sci(7), true, Order::First, RouteOption::None),
            router.route(Peripheral::Riic(0), true, Order::First, RouteOption::I2c),
            router.route(Peripheral::Mtu(0), true, Order::First, RouteOption::None),
            router.route_mtu(Peripheral::Mtu(0), MtuChannel::A, true, Order::First, true),
            router.route_mtu(Peripheral::Tmr(0), MtuChannel::A, true, Order::First, false),
            router.route_mtu_clock(Peripheral::Mtu(3), MtuClock::A, true, Order::First),
            router.route_irq(Peripheral::Irq(5), true, Order::First),
        ];
        assert_eq!(
            rejected,
            [
                Err(ErrorCode::NODEVICE),
                Err(ErrorCode::NOSUPPORT),
                Err(ErrorCode::NODEVICE),
                Err(ErrorCode::NOSUPPORT),
                Err(ErrorCode::NODEVICE),
                Err(ErrorCode::NODEVICE),
                Err(ErrorCode::NODEVICE),
            ]
        );
        assert!(router.registers().ops().is_empty());
        assert!(!router.registers().unlocked.get());
    }

    std::thread_local! {
        static USER_CALLS: RefCell<Vec<(Peripheral, bool)>> = const { RefCell::new(Vec::new()) };
    }

    fn accepting_route(peripheral: Peripheral, enable: bool) -> bool {
        USER_CALLS.with(|calls| calls.borrow_mut().push((peripheral, enable)));
        true
    }

    fn refusing_route(peripheral: Peripheral, enable: bool) -> bool {
        USER_CALLS.with(|calls| calls.borrow_mut().push((peripheral, enable)));
        false
    }

    #[test]
    fn user_order_calls_registered_route() {
        let router = router();
        router.set_user_route(accepting_route);

        assert_eq!(router.route(Peripheral::Can(1), false, Order::User, RouteOption::None), Ok(()));
        assert!(router.turn_tmr(Peripheral::Tmr(2), TmrSignal::Tmri, true, Order::User));

        router.set_user_route(refusing_route);
        assert_eq!(router.route_irq(Peripheral::Irq(4), true, Order::User), Err(ErrorCode::FAIL));

        USER_CALLS.with(|calls| {
            assert_eq!(
                *calls.borrow(),
                vec![
                    (Peripheral::Can(1), false),
                    (Peripheral::Tmr(2), true),
                    (Peripheral::Irq(4), true),
                ]
            )
        });
        // The router itself only brackets the callback with the write protection.
        assert_eq!(
            router.registers().ops(),
            vec![Op::Unlock, Op::Lock, Op::Unlock, Op::Lock, Op::Unlock, Op::Lock]
        );
    }

    #[test]
    fn user_order_without_route_fails() {
        let router = router();
        assert_eq!(router.route_qspix(true, Order::User), Err(ErrorCode::FAIL));
        router.set_user_route(accepting_route);
        router.clear_user_route();
        assert!(!router.turn(Peripheral::Sci(0), true, Order::User, RouteOption::None));
        assert!(router.registers().ops().is_empty());
    }

    #[test]
    fn irq_pin_becomes_interrupt_input() {
        let router = router();
        router.route_irq(Peripheral::Irq(4), true, Order::First).unwrap();
        assert_eq!(
            router.registers().ops(),
            vec![
                Op::Unlock,
                Op::PortMode(P14, false),
                Op::Input(P14),
                Op::Isel(P14, true),
                Op::Lock,
            ]
        );
        assert_eq!(router.registers().pfs(P14), 0x40);
        assert_eq!(router.registers().pmr(Port::P1), 0);

        router.route_irq(Peripheral::Irq(4), false, Order::First).unwrap();
        assert_eq!(router.registers().pfs(P14), 0);
    }

    #[test]
    fn timer_pins() {
        let router = router();
        assert!(router.turn_mtu(Peripheral::Mtu(0), MtuChannel::A, true, Order::First, false));
        assert_eq!(router.registers().pfs(P34), 0b00001);
        assert!(!router.turn_mtu(Peripheral::Mtu(0), MtuChannel::B, true, Order::First, false));

        assert!(router.turn_mtu_clock(Peripheral::Mtu(0), MtuClock::A, true, Order::First));
        assert_eq!(router.registers().pfs(P24), 0b00010);

        assert!(router.turn_tmr(Peripheral::Tmr(0), TmrSignal::Tmo, true, Order::First));
        assert_eq!(router.registers().pfs(PB3), 0b00101);
        assert_eq!(router.registers().pmr(Port::PB), 0b0000_1000);
    }

    #[test]
    fn qspix_routes_all_six_pins() {
        let router = router();
        assert!(router.turn_qspix(true, Order::First));
        assert_eq!(router.registers().pmr(Port::PD), 0b1111_1100);
        for bit in 2..8 {
            assert_eq!(router.registers().pfs(Pin::new(Port::PD, bit)), 0b011011);
        }
        assert!(!router.turn_qspix(true, Order::Second));
    }
}
