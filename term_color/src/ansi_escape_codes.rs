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

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>

use std::fmt::{Display, Formatter, Result};

use const_format::concatcp;
use smallvec::SmallVec;

use crate::{Modifier, NamedColor};

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";
/// Separates the parameters inside one [CSI] sequence.
pub const SGR_SEP: &str = ";";
/// Terminates an SGR sequence.
pub const SGR_END: &str = "m";

pub const FG_DEFAULT: &str = "39";
pub const BG_DEFAULT: &str = "49";
pub const RESET_ALL: &str = "0";
pub const FG_EXTENDED: &str = "38";
pub const BG_EXTENDED: &str = "48";
pub const EXTENDED_INDEXED: &str = "5";
pub const EXTENDED_RGB: &str = "2";

/// Resets both color channels: `ESC[39;49m`. This is the epilogue of the standard,
/// extended and truecolor pair styles, regardless of which channels the prologue set.
pub const RESET_COLORS: &str = concatcp!(CSI, FG_DEFAULT, SGR_SEP, BG_DEFAULT, SGR_END);

/// A single SGR attribute. Its [Display] impl writes just the parameter token(s), eg:
/// `31` or `38;5;150`, without the [CSI] prefix and [SGR_END] suffix. Use
/// [SgrSequence] to emit a complete escape sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    ResetAll,
    Modifier(Modifier),
    Foreground(NamedColor),
    Background(NamedColor),
    ForegroundDefault,
    BackgroundDefault,
    /// Holds an `i64` so that permissive validation can pass any index through.
    ForegroundAnsi256(i64),
    BackgroundAnsi256(i64),
    ForegroundRgb(u8, u8, u8),
    /// A code written as is, eg: a standard color code from [crate::new_color].
    Numeric(i64),
}

mod sgr_code_impl {
    use super::*;

    impl Display for SgrCode {
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::ResetAll                 => f.write_str(RESET_ALL),
                SgrCode::Modifier(modifier)       => write!(f, "{}", modifier.code()),
                SgrCode::Foreground(color)        => write!(f, "{}", color.fg_code()),
                SgrCode::Background(color)        => write!(f, "{}", color.bg_code()),
                SgrCode::ForegroundDefault        => f.write_str(FG_DEFAULT),
                SgrCode::BackgroundDefault        => f.write_str(BG_DEFAULT),
                SgrCode::ForegroundAnsi256(index) => write!(f, "{FG_EXTENDED};{EXTENDED_INDEXED};{index}"),
                SgrCode::BackgroundAnsi256(index) => write!(f, "{BG_EXTENDED};{EXTENDED_INDEXED};{index}"),
                SgrCode::ForegroundRgb(r, g, b)   => write!(f, "{FG_EXTENDED};{EXTENDED_RGB};{r};{g};{b}"),
                SgrCode::Numeric(code)            => write!(f, "{code}"),
            }
        }
    }
}

pub mod sgr_sizing {
    use super::*;

    /// A combination holds at most one fg, one bg and five modifiers.
    pub const MAX_SGR_PARAMS_SIZE: usize = 8;
    pub type InlineVecSgrCodes = SmallVec<[SgrCode; MAX_SGR_PARAMS_SIZE]>;
}

/// One complete escape sequence: `CSI p1;p2;... m`. An empty parameter list renders as
/// `ESC[m`, which terminals treat as reset all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SgrSequence {
    pub params: sgr_sizing::InlineVecSgrCodes,
}

mod sgr_sequence_impl {
    use super::*;

    impl SgrSequence {
        #[must_use]
        pub fn new(params: &[SgrCode]) -> Self {
            Self {
                params: SmallVec::from_slice(params),
            }
        }

        pub fn push(&mut self, code: SgrCode) { self.params.push(code); }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.params.is_empty() }
    }

    impl Display for SgrSequence {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            f.write_str(CSI)?;
            for (index, code) in self.params.iter().enumerate() {
                if index > 0 {
                    f.write_str(SGR_SEP)?;
                }
                write!(f, "{code}")?;
            }
            f.write_str(SGR_END)
        }
    }
}
