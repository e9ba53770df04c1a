// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! Support for in-kernel debugging.
//!
//! For printing, this module provides the `debug!` macro. Output goes to the
//! writer the board registered with [`set_debug_writer`], usually a polled
//! SCI channel brought up early in `main`. Until a writer is registered,
//! debug output is discarded.
//!
//! Each line is prefixed with the source location of the call:
//!
//! ```text
//! RX_DEBUG: chips/rx/src/pinmux.rs:212: route Sci(0) First -> 2 pins
//! ```
//!
//! Example
//! -------
//!
//! ```no_run
//! # use kernel::debug;
//! debug!("Yes the code gets here with value {}", 42);
//! ```

use core::fmt::{write, Arguments, Result, Write};
use core::ptr::addr_of_mut;

/// Byte sink the debug output is written into.
pub trait IoWrite {
    /// Write `buf` and return how many bytes were consumed.
    fn write(&mut self, buf: &[u8]) -> usize;
}

static mut DEBUG_WRITER: Option<&'static mut dyn IoWrite> = None;

/// Register the writer all `debug!` output is sent to.
///
/// ## Safety
///
/// Must not race with another call to `set_debug_writer` or with a `debug!`
/// in progress; boards call it once during single-threaded start-up.
pub unsafe fn set_debug_writer(writer: &'static mut dyn IoWrite) {
    *addr_of_mut!(DEBUG_WRITER) = Some(writer);
}

struct DebugWriterWrapper<'a> {
    writer: &'a mut dyn IoWrite,
}

impl Write for DebugWriterWrapper<'_> {
    fn write_str(&mut self, s: &str) -> Result {
        let mut bytes = s.as_bytes();
        while !bytes.is_empty() {
            let written = self.writer.write(bytes);
            if written == 0 {
                // Sink is full; drop the rest of the line.
                return Err(core::fmt::Error);
            }
            bytes = &bytes[written.min(bytes.len())..];
        }
        Ok(())
    }
}

fn with_writer<F: FnOnce(&mut DebugWriterWrapper)>(f: F) {
    // SAFETY: the writer is only installed during single-threaded start-up and
    // `debug!` is not called from interrupt context while a line is written.
    let writer = unsafe { (*addr_of_mut!(DEBUG_WRITER)).as_deref_mut() };
    if let Some(writer) = writer {
        f(&mut DebugWriterWrapper { writer });
    }
}

pub fn debug_fmt(args: Arguments, file_line: &(&'static str, u32)) {
    with_writer(|writer| {
        let (file, line) = *file_line;
        let _ = writer.write_fmt(format_args!("RX_DEBUG: {}:{}: ", file, line));
        let _ = write(writer, args);
        let _ = writer.write_str("\r\n");
    });
}

pub fn debug_str(msg: &str, file_line: &(&'static str, u32)) {
    debug_fmt(format_args!("{}", msg), file_line);
}

/// In-kernel `println()` debugging.
#[macro_export]
macro_rules! debug {
    () => ({
        // Allow an empty debug!() to print the location when hit
        $crate::debug!("")
    });
    ($msg:expr $(,)?) => ({
        $crate::debug::debug_str($msg, {
            static _FILE_LINE: (&'static str, u32) = (file!(), line!());
            &_FILE_LINE
        })
    });
    ($fmt:expr, $($arg:tt)+) => ({
        $crate::debug::debug_fmt(format_args!($fmt, $($arg)+), {
            static _FILE_LINE: (&'static str, u32) = (file!(), line!());
            &_FILE_LINE
        })
    });
}

#[cfg(test)]
mod tests {
    use super::{set_debug_writer, IoWrite};
    use std::boxed::Box;
    use std::string::String;
    use std::sync::Mutex;
    use std::vec::Vec;

    static CAPTURED: Mutex<Vec<u8>> = Mutex::new(Vec::new());

    struct Capture;

    impl IoWrite for Capture {
        fn write(&mut self, buf: &[u8]) -> usize {
            CAPTURED.lock().unwrap().extend_from_slice(buf);
            buf.len()
        }
    }

    #[test]
    fn debug_lines_carry_location_prefix() {
        unsafe { set_debug_writer(Box::leak(Box::new(Capture))) };

        debug!("route {} pins", 2);
        debug!("plain");

        let out = String::from_utf8(CAPTURED.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = out.split("\r\n").filter(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("RX_DEBUG: "));
        assert!(lines[0].contains("debug.rs:"));
        assert!(lines[0].ends_with(": route 2 pins"));
        assert!(lines[1].ends_with(": plain"));
    }
}
