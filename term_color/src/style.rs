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

use smallvec::SmallVec;

use crate::{Modifier, NamedColor, PickColor, RgbColor, SgrCode, SgrSequence};

/// Describes how a piece of text is styled. Rendering a style produces a prologue (the
/// escape sequence that sets the attributes) and an epilogue (the one that resets
/// exactly those attributes), see [Style::sgr_pair].
///
/// The random variants pick a new color every time they are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Style {
    Foreground(NamedColor),
    Background(NamedColor),
    Modifier(Modifier),
    /// Standard color codes (30-37, 40-47), or whatever permissive validation let through.
    /// `None` renders as the channel's default code.
    Standard { fg: Option<i64>, bg: Option<i64> },
    /// Extended palette indices (0-255). `None` renders as the channel's default code.
    Indexed { fg: Option<i64>, bg: Option<i64> },
    /// Foreground only.
    TrueColor(RgbColor),
    Combo(ComboStyle),
    RandomForeground,
    RandomBackground,
    RandomBoth,
    /// Random extended palette fg and bg.
    RandomAnsi256,
}

mod style_impl {
    use super::*;

    impl Style {
        /// Returns the `(prologue, epilogue)` pair for this style. Random styles draw
        /// their colors from `picker`. A combination with no attributes has no pair, its
        /// text is rendered bare.
        pub fn sgr_pair(
            &self,
            picker: &mut dyn PickColor,
        ) -> Option<(SgrSequence, SgrSequence)> {
            use crate::SgrCode::{BackgroundDefault as BgDefault, ForegroundDefault as FgDefault};

            let colors_reset = SgrSequence::new(&[FgDefault, BgDefault]);

            let pair = match self {
                Style::Foreground(color) => (
                    SgrSequence::new(&[SgrCode::Foreground(*color)]),
                    SgrSequence::new(&[FgDefault]),
                ),
                Style::Background(color) => (
                    SgrSequence::new(&[SgrCode::Background(*color)]),
                    SgrSequence::new(&[BgDefault]),
                ),
                Style::Modifier(modifier) => (
                    SgrSequence::new(&[SgrCode::Modifier(*modifier)]),
                    SgrSequence::new(&[SgrCode::ResetAll]),
                ),
                Style::Standard { fg, bg } => (
                    SgrSequence::new(&[
                        fg.map_or(FgDefault, SgrCode::Numeric),
                        bg.map_or(BgDefault, SgrCode::Numeric),
                    ]),
                    colors_reset,
                ),
                Style::Indexed { fg, bg } => (
                    SgrSequence::new(&[
                        fg.map_or(FgDefault, SgrCode::ForegroundAnsi256),
                        bg.map_or(BgDefault, SgrCode::BackgroundAnsi256),
                    ]),
                    colors_reset,
                ),
                Style::TrueColor(RgbColor { red, green, blue }) => (
                    SgrSequence::new(&[SgrCode::ForegroundRgb(*red, *green, *blue)]),
                    colors_reset,
                ),
                Style::Combo(combo) if combo.is_empty() => return None,
                Style::Combo(combo) => (combo.prologue(), combo.epilogue()),
                Style::RandomForeground => (
                    SgrSequence::new(&[SgrCode::Foreground(picker.pick_named_color())]),
                    SgrSequence::new(&[FgDefault]),
                ),
                Style::RandomBackground => (
                    SgrSequence::new(&[SgrCode::Background(picker.pick_named_color())]),
                    SgrSequence::new(&[BgDefault]),
                ),
                Style::RandomBoth => {
                    let fg = picker.pick_named_color();
                    let bg = picker.pick_named_color();
                    (
                        SgrSequence::new(&[SgrCode::Foreground(fg), SgrCode::Background(bg)]),
                        colors_reset,
                    )
                }
                Style::RandomAnsi256 => {
                    let fg = picker.pick_ansi256();
                    let bg = picker.pick_ansi256();
                    (
                        SgrSequence::new(&[
                            SgrCode::ForegroundAnsi256(fg.into()),
                            SgrCode::BackgroundAnsi256(bg.into()),
                        ]),
                        colors_reset,
                    )
                }
            };
            Some(pair)
        }

        /// Random styles render differently each time.
        #[must_use]
        pub fn is_random(&self) -> bool {
            matches!(
                self,
                Style::RandomForeground
                    | Style::RandomBackground
                    | Style::RandomBoth
                    | Style::RandomAnsi256
            )
        }
    }

    impl From<NamedColor> for Style {
        fn from(color: NamedColor) -> Self { Style::Foreground(color) }
    }

    impl From<Modifier> for Style {
        fn from(modifier: Modifier) -> Self { Style::Modifier(modifier) }
    }

    impl From<RgbColor> for Style {
        fn from(color: RgbColor) -> Self { Style::TrueColor(color) }
    }

    impl From<ComboStyle> for Style {
        fn from(combo: ComboStyle) -> Self { Style::Combo(combo) }
    }
}

/// One token accepted by [ComboStyle::new].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComboAttr {
    Foreground(NamedColor),
    Background(NamedColor),
    Modifier(Modifier),
}

mod combo_attr_impl {
    use super::*;

    impl ComboAttr {
        #[must_use]
        pub fn sgr_code(self) -> SgrCode {
            match self {
                ComboAttr::Foreground(color) => SgrCode::Foreground(color),
                ComboAttr::Background(color) => SgrCode::Background(color),
                ComboAttr::Modifier(modifier) => SgrCode::Modifier(modifier),
            }
        }

        /// Look up the attribute for a code token such as `"31"`, `"44"` or `"1"`. Only
        /// the exact canonical spelling matches, so `"031"` or `"+31"` yield `None`, as
        /// do reset codes and anything else unknown.
        #[must_use]
        pub fn from_code(token: &str) -> Option<Self> {
            let number = token.parse::<u8>().ok()?;
            let it = NamedColor::from_fg_code(number)
                .map(ComboAttr::Foreground)
                .or_else(|| NamedColor::from_bg_code(number).map(ComboAttr::Background))
                .or_else(|| Modifier::from_code(number).map(ComboAttr::Modifier))?;
            (it.sgr_code().to_string() == token).then_some(it)
        }
    }

    impl From<Modifier> for ComboAttr {
        fn from(modifier: Modifier) -> Self { ComboAttr::Modifier(modifier) }
    }
}

pub mod combo_sizing {
    use super::*;

    /// One fg, one bg, and each of the five modifiers once.
    pub const MAX_COMBO_ATTRS_SIZE: usize = 7;
    pub type InlineVecComboAttrs = SmallVec<[ComboAttr; MAX_COMBO_ATTRS_SIZE]>;
}

/// Several attributes rendered as a single prologue and a single epilogue.
///
/// - At most one foreground and one background color: the first one of each wins, later
///   ones are dropped.
/// - Modifiers are de-duplicated.
/// - The prologue lists the surviving attributes in the order they were first seen.
/// - The epilogue resets only what was set: `39` if there is a fg, `49` if there is a bg,
///   and `0` last if there is any modifier.
/// - With no attributes at all nothing is emitted, see [Style::sgr_pair].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboStyle {
    attrs: combo_sizing::InlineVecComboAttrs,
}

mod combo_style_impl {
    use super::*;

    impl ComboStyle {
        #[must_use]
        pub fn new(attrs: &[ComboAttr]) -> Self {
            let mut acc = Self::default();
            for attr in attrs {
                acc.push(*attr);
            }
            acc
        }

        /// Build from code tokens, eg: `&["31", "1", "44"]`. Unknown tokens are skipped.
        #[must_use]
        pub fn from_codes(tokens: &[&str]) -> Self {
            let mut acc = Self::default();
            for token in tokens {
                match ComboAttr::from_code(token) {
                    Some(attr) => {
                        acc.push(attr);
                    }
                    None => {
                        tracing::trace!(message = "Skipping unknown combo token.", token);
                    }
                }
            }
            acc
        }

        /// Add `attr` unless its channel is already taken or the modifier is already
        /// present. Returns whether it was added.
        pub fn push(&mut self, attr: ComboAttr) -> bool {
            let taken = match attr {
                ComboAttr::Foreground(_) => self.has_fg(),
                ComboAttr::Background(_) => self.has_bg(),
                ComboAttr::Modifier(_) => self.attrs.contains(&attr),
            };
            if !taken {
                self.attrs.push(attr);
            }
            !taken
        }

        #[must_use]
        pub fn attrs(&self) -> &[ComboAttr] { &self.attrs }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.attrs.is_empty() }

        #[must_use]
        pub fn has_fg(&self) -> bool {
            self.attrs
                .iter()
                .any(|it| matches!(it, ComboAttr::Foreground(_)))
        }

        #[must_use]
        pub fn has_bg(&self) -> bool {
            self.attrs
                .iter()
                .any(|it| matches!(it, ComboAttr::Background(_)))
        }

        #[must_use]
        pub fn has_modifier(&self) -> bool {
            self.attrs.iter().any(|it| matches!(it, ComboAttr::Modifier(_)))
        }

        #[must_use]
        pub fn prologue(&self) -> SgrSequence {
            let mut acc = SgrSequence::default();
            for attr in &self.attrs {
                acc.push(attr.sgr_code());
            }
            acc
        }

        #[must_use]
        pub fn epilogue(&self) -> SgrSequence {
            let mut acc = SgrSequence::default();
            if self.has_fg() {
                acc.push(SgrCode::ForegroundDefault);
            }
            if self.has_bg() {
                acc.push(SgrCode::BackgroundDefault);
            }
            if self.has_modifier() {
                acc.push(SgrCode::ResetAll);
            }
            acc
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::CyclingPicker;

    fn pair(style: &Style) -> Option<(String, String)> {
        let mut picker = CyclingPicker::new(&[NamedColor::Green, NamedColor::Blue], &[9, 200]);
        style
            .sgr_pair(&mut picker)
            .map(|(prologue, epilogue)| (prologue.to_string(), epilogue.to_string()))
    }

    #[test_case(Style::Foreground(NamedColor::Red), "\x1b[31m", "\x1b[39m")]
    #[test_case(Style::Background(NamedColor::Cyan), "\x1b[46m", "\x1b[49m")]
    #[test_case(Style::Modifier(Modifier::Italic), "\x1b[3m", "\x1b[0m")]
    #[test_case(Style::Standard { fg: Some(32), bg: None }, "\x1b[32;49m", "\x1b[39;49m")]
    #[test_case(Style::Standard { fg: None, bg: Some(41) }, "\x1b[39;41m", "\x1b[39;49m")]
    #[test_case(Style::Indexed { fg: Some(1), bg: Some(2) }, "\x1b[38;5;1;48;5;2m", "\x1b[39;49m")]
    #[test_case(Style::Indexed { fg: None, bg: Some(200) }, "\x1b[39;48;5;200m", "\x1b[39;49m")]
    #[test_case(Style::TrueColor((10, 20, 30).into()), "\x1b[38;2;10;20;30m", "\x1b[39;49m")]
    #[test_case(Style::RandomForeground, "\x1b[32m", "\x1b[39m")]
    #[test_case(Style::RandomBackground, "\x1b[42m", "\x1b[49m")]
    #[test_case(Style::RandomBoth, "\x1b[32;44m", "\x1b[39;49m")]
    #[test_case(Style::RandomAnsi256, "\x1b[38;5;9;48;5;200m", "\x1b[39;49m")]
    fn prologue_and_epilogue(style: Style, prologue: &str, epilogue: &str) {
        assert_eq!(
            pair(&style),
            Some((prologue.to_string(), epilogue.to_string()))
        );
    }

    #[test]
    fn combo_first_wins() {
        let combo = ComboStyle::new(&[
            ComboAttr::Foreground(NamedColor::Red),
            ComboAttr::Foreground(NamedColor::Green),
        ]);
        assert_eq!(combo.attrs(), &[ComboAttr::Foreground(NamedColor::Red)]);
        assert_eq!(combo.prologue().to_string(), "\x1b[31m");
        assert_eq!(combo.epilogue().to_string(), "\x1b[39m");
    }

    #[test]
    fn combo_dedupes_modifiers() {
        let combo = ComboStyle::new(&[
            Modifier::Bold.into(),
            Modifier::Bold.into(),
            Modifier::Underline.into(),
        ]);
        assert_eq!(combo.prologue().to_string(), "\x1b[1;4m");
        assert_eq!(combo.epilogue().to_string(), "\x1b[0m");
    }

    #[test]
    fn combo_keeps_first_seen_order() {
        let combo = ComboStyle::new(&[
            Modifier::Blink.into(),
            ComboAttr::Background(NamedColor::Yellow),
            ComboAttr::Foreground(NamedColor::Black),
            ComboAttr::Background(NamedColor::Red),
            Modifier::Faint.into(),
        ]);
        assert_eq!(combo.prologue().to_string(), "\x1b[5;43;30;2m");
        assert_eq!(combo.epilogue().to_string(), "\x1b[39;49;0m");
    }

    #[test_case(&["44"], "\x1b[44m", "\x1b[49m")]
    #[test_case(&["44", "1"], "\x1b[44;1m", "\x1b[49;0m")]
    #[test_case(&["36", "47"], "\x1b[36;47m", "\x1b[39;49m")]
    #[test_case(&["36", "3"], "\x1b[36;3m", "\x1b[39;0m")]
    fn combo_from_codes(tokens: &[&str], prologue: &str, epilogue: &str) {
        let combo = ComboStyle::from_codes(tokens);
        assert_eq!(combo.prologue().to_string(), prologue);
        assert_eq!(combo.epilogue().to_string(), epilogue);
    }

    #[test_case(&["hello", "0", "39", "031", "7"])]
    #[test_case(&[])]
    fn empty_combo_has_no_pair(tokens: &[&str]) {
        let combo = ComboStyle::from_codes(tokens);
        assert!(combo.is_empty());
        assert_eq!(pair(&Style::Combo(combo)), None);
        assert_eq!(pair(&ComboStyle::new(&[]).into()), None);
    }

    #[test_case("31", Some(ComboAttr::Foreground(NamedColor::Red)))]
    #[test_case("47", Some(ComboAttr::Background(NamedColor::White)))]
    #[test_case("2", Some(ComboAttr::Modifier(Modifier::Faint)))]
    #[test_case("+31", None)]
    #[test_case("031", None)]
    #[test_case("49", None)]
    #[test_case("", None)]
    fn combo_attr_from_code(token: &str, expected: Option<ComboAttr>) {
        assert_eq!(ComboAttr::from_code(token), expected);
    }

    #[test]
    fn push_reports_whether_added() {
        let mut combo = ComboStyle::default();
        assert!(combo.is_empty());
        assert!(combo.push(ComboAttr::Background(NamedColor::Blue)));
        assert!(!combo.push(ComboAttr::Background(NamedColor::Red)));
        assert!(combo.push(Modifier::Bold.into()));
        assert!(!combo.push(Modifier::Bold.into()));
    }

    #[test]
    fn random_styles() {
        assert!(Style::RandomBoth.is_random());
        assert!(!Style::Foreground(NamedColor::Red).is_random());
    }
}
