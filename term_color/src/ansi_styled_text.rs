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

use std::fmt::{Arguments, Display, Formatter, Result};

use smallstr::SmallString;

use crate::{ColorChannel,
            ComboAttr,
            ComboStyle,
            Modifier,
            NamedColor,
            PickColor,
            RangeCheck,
            RgbColor,
            Style,
            StyleError,
            StyleFlag,
            code_ranges,
            global_style_flag,
            parse_color_code,
            strip_sgr,
            thread_picker};

/// The main struct is `StyledText`. It has two fields:
/// - `text` - the text to print. This is owned in a stack allocated buffer, which can
///   spill to the heap if it gets larger than [sizing::DEFAULT_STRING_STORAGE_SIZE].
/// - `style` - the [Style] to apply to the text.
///
/// Nothing is rendered when you create one. The escape sequences are produced when it is
/// printed (via [Display]) or when you call [Self::render] or [Self::render_with]. At
/// that point the [StyleFlag] decides whether the text gets wrapped at all, so toggling
/// [global_style_flag] after creating a value changes how it prints.
///
/// # Example usage:
///
/// ```rust
/// use term_color::*;
///
/// // Using the constructor functions.
/// let warning = fg_red("Warning!");
/// assert_eq!(warning.render_with(StyleFlag::Enabled, &mut thread_picker()),
///            "\x1b[31mWarning!\x1b[39m");
/// assert_eq!(warning.render_with(StyleFlag::Disabled, &mut thread_picker()),
///            "Warning!");
///
/// // Combine attributes into one escape sequence.
/// let loud = new_combo("LOUD", &[
///     ComboAttr::Foreground(NamedColor::Yellow),
///     Modifier::Bold.into(),
/// ]);
/// println!("{loud}");
///
/// // Codes as strings, eg: from a config file.
/// let custom = new_color256("custom", Some("208"), None)?;
/// println!("{custom}");
/// # Ok::<(), StyleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText {
    pub text: InlineString,
    pub style: Style,
}

pub mod sizing {
    // PERF: If you make this number too large, eg: more than 16, then it will slow down
    // the copying of every StyledText.
    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;
}

pub type InlineString = SmallString<[u8; sizing::DEFAULT_STRING_STORAGE_SIZE]>;

/// Easy to use constructor function, instead of creating a new [StyledText] struct
/// directly.
pub fn styled(text: impl AsRef<str>, style: impl Into<Style>) -> StyledText {
    StyledText {
        text: text.as_ref().into(),
        style: style.into(),
    }
}

mod styled_text_impl {
    use super::*;

    impl StyledText {
        /// Render with an explicit flag and random color source.
        pub fn render_with(&self, flag: StyleFlag, picker: &mut dyn PickColor) -> String {
            if !flag.is_enabled() {
                return self.text.to_string();
            }
            match self.style.sgr_pair(picker) {
                Some((prologue, epilogue)) => format!("{prologue}{}{epilogue}", self.text),
                None => self.text.to_string(),
            }
        }

        /// Render using [global_style_flag] and [thread_picker].
        #[must_use]
        pub fn render(&self) -> String {
            self.render_with(global_style_flag::get(), &mut thread_picker())
        }

        /// Render with styling on, and keep the result as a [ComposedText]. Random styles
        /// get their colors fixed at this point.
        #[must_use]
        pub fn compose(&self) -> ComposedText {
            ComposedText(self.render_with(StyleFlag::Enabled, &mut thread_picker()))
        }

        pub fn println(&self) {
            println!("{self}");
        }

        pub fn print(&self) {
            print!("{self}");
        }
    }

    impl Display for StyledText {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            if !global_style_flag::is_enabled() {
                return f.write_str(&self.text);
            }
            match self.style.sgr_pair(&mut thread_picker()) {
                Some((prologue, epilogue)) => write!(f, "{prologue}{}{epilogue}", self.text),
                None => f.write_str(&self.text),
            }
        }
    }
}

/// Wrap `bytes` in the escape sequences for `style`. The payload is copied verbatim, it
/// does not have to be UTF-8.
pub fn render_bytes_with(
    style: &Style,
    bytes: &[u8],
    flag: StyleFlag,
    picker: &mut dyn PickColor,
) -> Vec<u8> {
    if !flag.is_enabled() {
        return bytes.to_vec();
    }
    let Some((prologue, epilogue)) = style.sgr_pair(picker) else {
        return bytes.to_vec();
    };
    let prologue = prologue.to_string();
    let epilogue = epilogue.to_string();
    let mut acc = Vec::with_capacity(prologue.len() + bytes.len() + epilogue.len());
    acc.extend_from_slice(prologue.as_bytes());
    acc.extend_from_slice(bytes);
    acc.extend_from_slice(epilogue.as_bytes());
    acc
}

/// [render_bytes_with] using [global_style_flag] and [thread_picker].
#[must_use]
pub fn render_bytes(style: &Style, bytes: &[u8]) -> Vec<u8> {
    render_bytes_with(style, bytes, global_style_flag::get(), &mut thread_picker())
}

/// An already rendered string, escape sequences included. When it is printed while
/// styling is disabled, every SGR sequence is stripped out (see [strip_sgr]) and only the
/// plain text is left.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposedText(pub String);

mod composed_text_impl {
    use super::*;

    impl ComposedText {
        #[must_use]
        pub fn render_with(&self, flag: StyleFlag) -> String {
            match flag {
                StyleFlag::Enabled => self.0.clone(),
                StyleFlag::Disabled => strip_sgr(&self.0),
            }
        }

        #[must_use]
        pub fn render(&self) -> String { self.render_with(global_style_flag::get()) }

        #[must_use]
        pub fn as_str(&self) -> &str { &self.0 }
    }

    impl From<String> for ComposedText {
        fn from(value: String) -> Self { Self(value) }
    }

    impl From<&str> for ComposedText {
        fn from(value: &str) -> Self { Self(value.to_string()) }
    }

    impl Display for ComposedText {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            if global_style_flag::is_enabled() {
                f.write_str(&self.0)
            } else {
                f.write_str(&strip_sgr(&self.0))
            }
        }
    }
}

/// Generates, for each entry, a constructor `name(text) -> StyledText`, a byte variant
/// `name_bytes(&[u8]) -> Vec<u8>` and a formatted variant `name_fmt(Arguments) -> String`.
/// The last two render right away.
macro_rules! named_style_fns {
    (
        $( $name:ident => $style:expr ),* $(,)?
    ) => {
        paste::paste! {
            $(
                #[doc = concat!("Styles `text` as `", stringify!($style), "`.")]
                pub fn $name(text: impl AsRef<str>) -> StyledText { styled(text, $style) }

                #[doc = concat!("Byte variant of [", stringify!($name), "()]. Rendered now.")]
                #[must_use]
                pub fn [<$name _bytes>](bytes: &[u8]) -> Vec<u8> {
                    render_bytes(&$style, bytes)
                }

                #[doc = concat!(
                    "Formatted variant of [", stringify!($name), "()], eg: `",
                    stringify!($name), "_fmt(format_args!(\"{} items\", 3))`. Rendered now."
                )]
                #[must_use]
                pub fn [<$name _fmt>](args: Arguments<'_>) -> String {
                    $name(args.to_string()).render()
                }
            )*
        }
    };
}

named_style_fns! {
    fg_black   => Style::Foreground(NamedColor::Black),
    fg_red     => Style::Foreground(NamedColor::Red),
    fg_green   => Style::Foreground(NamedColor::Green),
    fg_yellow  => Style::Foreground(NamedColor::Yellow),
    fg_blue    => Style::Foreground(NamedColor::Blue),
    fg_magenta => Style::Foreground(NamedColor::Magenta),
    fg_cyan    => Style::Foreground(NamedColor::Cyan),
    fg_white   => Style::Foreground(NamedColor::White),
    bg_black   => Style::Background(NamedColor::Black),
    bg_red     => Style::Background(NamedColor::Red),
    bg_green   => Style::Background(NamedColor::Green),
    bg_yellow  => Style::Background(NamedColor::Yellow),
    bg_blue    => Style::Background(NamedColor::Blue),
    bg_magenta => Style::Background(NamedColor::Magenta),
    bg_cyan    => Style::Background(NamedColor::Cyan),
    bg_white   => Style::Background(NamedColor::White),
    bold       => Style::Modifier(Modifier::Bold),
    italic     => Style::Modifier(Modifier::Italic),
    underline  => Style::Modifier(Modifier::Underline),
    blink      => Style::Modifier(Modifier::Blink),
}

/// Create a [StyledText] from a [Style] and a format template. The template is filled in
/// now, the styling is applied when the result is printed.
///
/// ```
/// use term_color::{Style, NamedColor, StyleFlag, styled_format, thread_picker};
///
/// let it = styled_format!(Style::Foreground(NamedColor::Green), "{} passed", 3);
/// assert_eq!(it.render_with(StyleFlag::Disabled, &mut thread_picker()), "3 passed");
/// ```
#[macro_export]
macro_rules! styled_format {
    ($style:expr, $($arg:tt)*) => {
        $crate::styled(format!($($arg)*), $style)
    };
}

pub fn random_fg(text: impl AsRef<str>) -> StyledText { styled(text, Style::RandomForeground) }

pub fn random_bg(text: impl AsRef<str>) -> StyledText { styled(text, Style::RandomBackground) }

pub fn random_fg_bg(text: impl AsRef<str>) -> StyledText { styled(text, Style::RandomBoth) }

/// Random extended palette fg and bg, picked again on every render.
pub fn random_ansi256(text: impl AsRef<str>) -> StyledText {
    styled(text, Style::RandomAnsi256)
}

/// Standard color pair from decimal codes: `fg` in 30-37, `bg` in 40-47. `None` (or an
/// empty string) means the channel's default code. Out of range codes are rejected, see
/// [new_color_with_range_check] to pass them through instead.
///
/// # Errors
///
/// [StyleError::InvalidNumber] or [StyleError::OutOfRange]; no [StyledText] is produced.
pub fn new_color(
    text: impl AsRef<str>,
    fg: Option<&str>,
    bg: Option<&str>,
) -> std::result::Result<StyledText, StyleError> {
    new_color_with_range_check(text, fg, bg, RangeCheck::Strict)
}

/// # Errors
///
/// See [new_color]. With [RangeCheck::Permissive] only non-numeric input
/// ([StyleError::InvalidNumber]) and negative codes ([StyleError::NegativeCode]) fail.
pub fn new_color_with_range_check(
    text: impl AsRef<str>,
    fg: Option<&str>,
    bg: Option<&str>,
    check: RangeCheck,
) -> std::result::Result<StyledText, StyleError> {
    let fg = parse_optional(ColorChannel::Foreground, fg, code_ranges::STANDARD_FG, check)?;
    let bg = parse_optional(ColorChannel::Background, bg, code_ranges::STANDARD_BG, check)?;
    Ok(styled(text, Style::Standard { fg, bg }))
}

/// Extended palette pair from decimal indices in 0-255. `None` (or an empty string) means
/// the channel's default code. The reset always clears both channels.
///
/// # Errors
///
/// [StyleError::InvalidNumber] or [StyleError::OutOfRange]; no [StyledText] is produced.
pub fn new_color256(
    text: impl AsRef<str>,
    fg: Option<&str>,
    bg: Option<&str>,
) -> std::result::Result<StyledText, StyleError> {
    new_color256_with_range_check(text, fg, bg, RangeCheck::Strict)
}

/// # Errors
///
/// See [new_color256]. With [RangeCheck::Permissive] only non-numeric input
/// ([StyleError::InvalidNumber]) and negative codes ([StyleError::NegativeCode]) fail.
pub fn new_color256_with_range_check(
    text: impl AsRef<str>,
    fg: Option<&str>,
    bg: Option<&str>,
    check: RangeCheck,
) -> std::result::Result<StyledText, StyleError> {
    let fg = parse_optional(ColorChannel::Foreground, fg, code_ranges::ANSI256, check)?;
    let bg = parse_optional(ColorChannel::Background, bg, code_ranges::ANSI256, check)?;
    Ok(styled(text, Style::Indexed { fg, bg }))
}

/// 24-bit foreground color. There is no truecolor background.
pub fn new_color_rgb(text: impl AsRef<str>, red: u8, green: u8, blue: u8) -> StyledText {
    styled(text, RgbColor { red, green, blue })
}

/// See [ComboStyle] for how repeated and conflicting attributes are handled. If no
/// attribute is given the text prints as is, without any escape sequence.
pub fn new_combo(text: impl AsRef<str>, attrs: &[ComboAttr]) -> StyledText {
    styled(text, ComboStyle::new(attrs))
}

/// Like [new_combo] but takes code tokens such as `"31"` or `"1"`. Unknown tokens are
/// ignored.
pub fn new_combo_from_codes(text: impl AsRef<str>, tokens: &[&str]) -> StyledText {
    styled(text, ComboStyle::from_codes(tokens))
}

fn parse_optional(
    channel: ColorChannel,
    value: Option<&str>,
    range: std::ops::RangeInclusive<i64>,
    check: RangeCheck,
) -> std::result::Result<Option<i64>, StyleError> {
    match value {
        Some(value) => parse_color_code(channel, value, range, check),
        None => Ok(None),
    }
}
