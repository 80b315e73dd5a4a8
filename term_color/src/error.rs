/*
 *   Copyright (c) 2026 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use std::{fmt::{Display, Formatter},
          num::ParseIntError};

/// Type alias for callers that want to collect these errors as [miette::Report]s.
pub type StyleResult<T> = miette::Result<T>;

/// Which half of a color pair a parameter was meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    Foreground,
    Background,
}

impl Display for ColorChannel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorChannel::Foreground => f.write_str("fg"),
            ColorChannel::Background => f.write_str("bg"),
        }
    }
}

/// Errors from the constructors that take color codes as decimal strings, eg:
/// [crate::new_color] and [crate::new_color256]. Every other operation in this crate is
/// total.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum StyleError {
    #[error("{channel}: '{value}' is not a number")]
    #[diagnostic(
        code(term_color::invalid_number),
        help("Color codes are decimal integers, eg: \"31\" or \"208\".")
    )]
    InvalidNumber {
        channel: ColorChannel,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{channel}: {value} is not a valid color {min}-{max}")]
    #[diagnostic(
        code(term_color::out_of_range),
        help("Use RangeCheck::Permissive to pass codes through without checking.")
    )]
    OutOfRange {
        channel: ColorChannel,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{channel}: {value} is negative, SGR parameters are unsigned")]
    #[diagnostic(
        code(term_color::negative_code),
        help("Even RangeCheck::Permissive only passes through codes of 0 or more.")
    )]
    NegativeCode { channel: ColorChannel, value: i64 },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn messages() {
        let out_of_range = StyleError::OutOfRange {
            channel: ColorChannel::Foreground,
            value: 99,
            min: 30,
            max: 37,
        };
        assert_eq!(out_of_range.to_string(), "fg: 99 is not a valid color 30-37");

        let Err(source) = "x1".parse::<i64>() else {
            panic!("\"x1\" should not parse");
        };
        let invalid = StyleError::InvalidNumber {
            channel: ColorChannel::Background,
            value: "x1".into(),
            source,
        };
        assert_eq!(invalid.to_string(), "bg: 'x1' is not a number");

        let negative = StyleError::NegativeCode {
            channel: ColorChannel::Foreground,
            value: -4,
        };
        assert_eq!(
            negative.to_string(),
            "fg: -4 is negative, SGR parameters are unsigned"
        );
    }

    #[test]
    fn converts_into_miette_report() {
        fn fails() -> StyleResult<()> {
            Err(StyleError::OutOfRange {
                channel: ColorChannel::Background,
                value: 300,
                min: 0,
                max: 255,
            })?;
            Ok(())
        }
        let report = fails().unwrap_err();
        assert_eq!(report.to_string(), "bg: 300 is not a valid color 0-255");
    }
}
