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

use std::ops::RangeInclusive;

use crate::{ColorChannel, StyleError};

/// How [crate::new_color] and [crate::new_color256] treat a code that parses as a number
/// but lies outside the legal range for its channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeCheck {
    /// Reject it with [StyleError::OutOfRange].
    #[default]
    Strict,
    /// Accept any integer of 0 or more and emit it as is. Negative and non-numeric
    /// input is still rejected, since neither can be written as an SGR parameter.
    Permissive,
}

pub mod code_ranges {
    use super::RangeInclusive;

    pub const STANDARD_FG: RangeInclusive<i64> = 30..=37;
    pub const STANDARD_BG: RangeInclusive<i64> = 40..=47;
    pub const ANSI256: RangeInclusive<i64> = 0..=255;
}

/// Parse an optional decimal color code. An empty string means "not supplied" and yields
/// `Ok(None)`.
///
/// # Errors
///
/// - [StyleError::InvalidNumber] if `value` is not a decimal integer.
/// - [StyleError::OutOfRange] if `value` is outside `range` and `check` is
///   [RangeCheck::Strict].
/// - [StyleError::NegativeCode] if `value` is negative and `check` is
///   [RangeCheck::Permissive].
pub fn parse_color_code(
    channel: ColorChannel,
    value: &str,
    range: RangeInclusive<i64>,
    check: RangeCheck,
) -> Result<Option<i64>, StyleError> {
    if value.is_empty() {
        return Ok(None);
    }

    let code = value.parse::<i64>().map_err(|source| {
        // % is Display, ? is Debug.
        tracing::warn!(message = "Color code is not a number.", %channel, value);
        StyleError::InvalidNumber {
            channel,
            value: value.to_string(),
            source,
        }
    })?;

    if range.contains(&code) {
        return Ok(Some(code));
    }

    match check {
        RangeCheck::Strict => {
            tracing::warn!(message = "Color code out of range.", %channel, code, ?range);
            Err(StyleError::OutOfRange {
                channel,
                value: code,
                min: *range.start(),
                max: *range.end(),
            })
        }
        RangeCheck::Permissive if code < 0 => {
            tracing::warn!(message = "Color code is negative.", %channel, code);
            Err(StyleError::NegativeCode {
                channel,
                value: code,
            })
        }
        RangeCheck::Permissive => {
            tracing::trace!(message = "Passing out of range color code through.", %channel, code);
            Ok(Some(code))
        }
    }
}
