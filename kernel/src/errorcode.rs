// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright RX HAL Contributors 2024.

//! Standard error enum for invoking operations

use core::fmt;

/// Standard errors returned by chip operations.
///
/// Pin routing is configured once at start-up and the wiring is fixed by the
/// board, so an error here is a configuration bug rather than something to
/// retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum ErrorCode {
    /// Generic failure condition
    FAIL = 1,
    /// An invalid parameter was passed
    INVAL = 6,
    /// Operation or command is unsupported
    NOSUPPORT = 10,
    /// Device does not exist
    NODEVICE = 11,
}

impl From<ErrorCode> for usize {
    fn from(err: ErrorCode) -> usize {
        err as usize
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            ErrorCode::FAIL => "FAIL",
            ErrorCode::INVAL => "INVAL",
            ErrorCode::NOSUPPORT => "NOSUPPORT",
            ErrorCode::NODEVICE => "NODEVICE",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorCode;
    use std::string::ToString;

    #[test]
    fn numeric_values_are_stable() {
        assert_eq!(usize::from(ErrorCode::FAIL), 1);
        assert_eq!(usize::from(ErrorCode::INVAL), 6);
        assert_eq!(usize::from(ErrorCode::NOSUPPORT), 10);
        assert_eq!(usize::from(ErrorCode::NODEVICE), 11);
        assert_eq!(ErrorCode::NODEVICE.to_string(), "NODEVICE");
    }
}
