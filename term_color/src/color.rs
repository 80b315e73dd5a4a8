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
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

use strum_macros::{EnumCount, EnumIter};

/// The 8 standard terminal colors, in SGR code order. The foreground code is `30 +
/// index` and the background code is `40 + index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

pub mod named_color_ranges {
    pub const FG_MIN: u8 = 30;
    pub const FG_MAX: u8 = 37;
    pub const BG_MIN: u8 = 40;
    pub const BG_MAX: u8 = 47;
}

mod named_color_impl {
    use strum::{EnumCount, IntoEnumIterator};

    use super::{NamedColor, named_color_ranges::{BG_MIN, FG_MIN}};

    impl NamedColor {
        /// Position in the standard palette, `0..=7`.
        #[must_use]
        pub fn index(self) -> u8 { self as u8 }

        #[must_use]
        pub fn fg_code(self) -> u8 { FG_MIN + self.index() }

        #[must_use]
        pub fn bg_code(self) -> u8 { BG_MIN + self.index() }

        /// Wraps around, so any `usize` maps to a color.
        #[must_use]
        pub fn from_index(index: usize) -> Self {
            Self::iter()
                .nth(index % Self::COUNT)
                .unwrap_or(NamedColor::Black)
        }

        #[must_use]
        pub fn from_fg_code(code: u8) -> Option<Self> {
            Self::iter().find(|it| it.fg_code() == code)
        }

        #[must_use]
        pub fn from_bg_code(code: u8) -> Option<Self> {
            Self::iter().find(|it| it.bg_code() == code)
        }
    }
}

/// Text modifiers. Each one is undone by the reset all code `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum Modifier {
    Bold,
    Faint,
    Italic,
    Underline,
    Blink,
}

mod modifier_impl {
    use strum::IntoEnumIterator;

    use super::Modifier;

    impl Modifier {
        #[rustfmt::skip]
        #[must_use]
        pub fn code(self) -> u8 {
            match self {
                Modifier::Bold      => 1,
                Modifier::Faint     => 2,
                Modifier::Italic    => 3,
                Modifier::Underline => 4,
                Modifier::Blink     => 5,
            }
        }

        #[must_use]
        pub fn from_code(code: u8) -> Option<Self> { Self::iter().find(|it| it.code() == code) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self { red, green, blue } }
}
