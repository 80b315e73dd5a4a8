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

use strum::IntoEnumIterator;

use crate::{NamedColor, Style, styled};

pub mod swatch_layout {
    /// Extended palette indices 16-231 are a 6x6x6 color cube.
    pub const CUBE_SIDE: u8 = 6;
    pub const CUBE_START: u8 = 16;
    pub const GRAYSCALE_START: u8 = 232;
    pub const GRAYSCALE_END: u8 = 255;
}

/// Returns a multi line swatch of the standard, extended and grayscale colors, meant to
/// be printed to check what a terminal supports. Respects the global style flag, so with
/// styling disabled it is just the labels and the placeholder characters.
///
/// The 256 color cube is printed as 6 rows. Row `r` holds, for each of the 6 blocks, the
/// 6 colors `16 + 36 * block + 6 * r .. + 6`.
#[must_use]
pub fn terminal_self_test() -> String {
    use swatch_layout::*;

    let mut acc = String::from("Standard 8:\nFg:\t");
    for color in NamedColor::iter() {
        let style = Style::Standard {
            fg: Some(color.fg_code().into()),
            bg: None,
        };
        push_swatch(&mut acc, "#", style);
    }

    acc.push_str("\nBg:\t");
    for color in NamedColor::iter() {
        let style = Style::Standard {
            fg: None,
            bg: Some(color.bg_code().into()),
        };
        push_swatch(&mut acc, " ", style);
    }

    acc.push_str("\nStandard 16:\t");
    for index in 0..CUBE_START {
        push_swatch(&mut acc, " ", indexed_bg(index));
    }

    acc.push_str("\n256 Col:\n");
    for row in 0..CUBE_SIDE {
        for block in 0..CUBE_SIDE {
            let base = CUBE_START + block * CUBE_SIDE * CUBE_SIDE + row * CUBE_SIDE;
            for column in 0..CUBE_SIDE {
                push_swatch(&mut acc, " ", indexed_bg(base + column));
            }
        }
        acc.push('\n');
    }

    acc.push_str("Grayscales:\n");
    for index in GRAYSCALE_START..=GRAYSCALE_END {
        push_swatch(&mut acc, " ", indexed_bg(index));
    }
    acc
}

fn indexed_bg(index: u8) -> Style {
    Style::Indexed {
        fg: None,
        bg: Some(index.into()),
    }
}

fn push_swatch(acc: &mut String, text: &str, style: Style) {
    acc.push_str(&styled(text, style).to_string());
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;
    use crate::{global_style_flag, strip_sgr};

    #[serial]
    #[test]
    fn plain_layout_when_disabled() {
        global_style_flag::disable();
        let it = terminal_self_test();
        global_style_flag::enable();

        let expected_cube_row = " ".repeat(36);
        let mut expected = String::from("Standard 8:\nFg:\t########\nBg:\t        \n");
        expected.push_str(&format!("Standard 16:\t{}\n", " ".repeat(16)));
        expected.push_str("256 Col:\n");
        for _ in 0..6 {
            expected.push_str(&expected_cube_row);
            expected.push('\n');
        }
        expected.push_str("Grayscales:\n");
        expected.push_str(&" ".repeat(24));
        assert_eq!(it, expected);
    }

    #[serial]
    #[test]
    fn styled_swatch_strips_back_to_plain_layout() {
        global_style_flag::enable();
        let styled_it = terminal_self_test();
        global_style_flag::disable();
        let plain_it = terminal_self_test();
        global_style_flag::enable();

        assert_eq!(strip_sgr(&styled_it), plain_it);
    }

    #[serial]
    #[test]
    fn swatch_contents() {
        global_style_flag::enable();
        let it = terminal_self_test();
        assert!(it.starts_with("Standard 8:\nFg:\t\x1b[30;49m#\x1b[39;49m"), "{it:?}");
        assert!(it.contains("\x1b[39;47m \x1b[39;49m\nStandard 16:\t"), "{it:?}");

        let cube = it
            .split("256 Col:\n")
            .nth(1)
            .and_then(|rest| rest.split("Grayscales:").next())
            .unwrap_or_default();
        let first_row = cube.lines().next().unwrap_or_default();
        assert!(first_row.starts_with("\x1b[39;48;5;16m \x1b[39;49m"), "{first_row:?}");
        assert!(first_row.contains("\x1b[39;48;5;52m "), "{first_row:?}");
        assert!(first_row.ends_with("\x1b[39;48;5;201m \x1b[39;49m"), "{first_row:?}");
        let last_row = cube.lines().last().unwrap_or_default();
        assert!(last_row.ends_with("\x1b[39;48;5;231m \x1b[39;49m"), "{last_row:?}");

        assert!(it.ends_with("\x1b[39;48;5;255m \x1b[39;49m"), "{it:?}");
    }
}
