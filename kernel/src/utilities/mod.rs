// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! Utility types provided by the kernel crate.

mod static_ref;
pub use self::static_ref::StaticRef;

/// The Tock Register Interface.
///
/// This is a re-export of the `tock-registers` crate provided for
/// convenience.
pub mod registers {
    pub use tock_registers::fields::Field;
    pub use tock_registers::interfaces;
    pub use tock_registers::registers::{ReadOnly, ReadWrite};
    pub use tock_registers::{register_bitfields, register_structs};
}
