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

//! # term_color
//!
//! Wrap text in ANSI SGR (Select Graphic Rendition) escape sequences so that it prints
//! in color, and strip those sequences back out.
//!
//! - 8 standard colors, foreground and background: [fg_red()], [bg_blue()], etc.
//! - Modifiers: [bold()], [italic()], [underline()], [blink()].
//! - 256 color palette and 24-bit foreground: [new_color256()], [new_color_rgb()].
//! - Several attributes in one escape sequence: [new_combo()].
//! - Colors picked at random on every render: [random_fg()], [random_bg()],
//!   [random_fg_bg()].
//! - Removing escape sequences: [strip_sgr()], [strip_sgr_bytes()].
//!
//! Every constructor returns a [StyledText], which is rendered when it is printed. Use
//! [enable()] and [disable()] (or [global_style_flag::init_from_env()] to honor
//! `NO_COLOR`) to switch styling on and off for the whole process. Or pass a
//! [StyleFlag] and a [PickColor] explicitly to [StyledText::render_with].
//!
//! ```rust
//! use term_color::*;
//!
//! let ok = fg_green("ok");
//! let defcon = new_combo("1 COCKED PISTOL", &[
//!     ComboAttr::Foreground(NamedColor::Red),
//!     Modifier::Blink.into(),
//! ]);
//! println!("{ok} {defcon}");
//!
//! assert_eq!(ok.render_with(StyleFlag::Enabled, &mut thread_picker()),
//!            "\x1b[32mok\x1b[39m");
//! assert_eq!(strip_sgr(&defcon.render_with(StyleFlag::Enabled, &mut thread_picker())),
//!            "1 COCKED PISTOL");
//! ```
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>
//! - <https://no-color.org/>

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod ansi_escape_codes;
pub mod ansi_styled_text;
pub mod color;
pub mod color_code_parser;
pub mod error;
pub mod random_color;
pub mod self_test;
pub mod strip_ansi;
pub mod style;
pub mod style_flag;

// Re-export.
pub use ansi_escape_codes::*;
pub use ansi_styled_text::*;
pub use color::*;
pub use color_code_parser::*;
pub use error::*;
pub use random_color::*;
pub use self_test::*;
pub use strip_ansi::*;
pub use style::*;
pub use style_flag::{global_style_flag::{disable, enable},
                     *};
