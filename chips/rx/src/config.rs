// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! Compile-time configuration options for the RX family crate.
//!
//! Options are plain `const` values so that disabled code paths are still
//! type-checked and then folded away by the compiler. This is the only place
//! in the crate that reads Cargo features.

/// Data structure holding compile-time configuration options.
pub(crate) struct Config {
    /// Whether the pin router should trace each routing request to the debug
    /// output.
    ///
    /// If enabled, every applied route prints the chip name, the peripheral,
    /// the candidate and the number of pins written, and every rejected route
    /// prints the error it failed with.
    pub(crate) trace_pin_routing: bool,
}

/// The unique `Config` instance for this crate.
pub(crate) const CONFIG: Config = Config {
    trace_pin_routing: cfg!(feature = "trace_pin_routing"),
};
