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

use std::{env,
          sync::atomic::{AtomicBool, Ordering}};

/// Whether rendering emits escape sequences. Pass one of these explicitly to
/// [crate::StyledText::render_with], or use [global_style_flag] to read and write the
/// process wide default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleFlag {
    #[default]
    Enabled,
    Disabled,
}

impl StyleFlag {
    #[must_use]
    pub fn is_enabled(self) -> bool { matches!(self, StyleFlag::Enabled) }
}

impl From<bool> for StyleFlag {
    fn from(value: bool) -> Self {
        if value {
            StyleFlag::Enabled
        } else {
            StyleFlag::Disabled
        }
    }
}

/// Global variable which holds the process wide [StyleFlag]. It starts out
/// [StyleFlag::Enabled].
///
/// The flag is read every time a [crate::StyledText] or [crate::ComposedText] is
/// rendered, not when it is created. So toggling the flag between creating a value and
/// printing it changes what gets printed.
///
/// This is meant to be configured once at startup. The storage is atomic so toggling it
/// from multiple threads is safe, but nothing orders a toggle on one thread against a
/// render on another.
///
/// # Testing support
///
/// The [serial_test](https://crates.io/crates/serial_test) crate is used to test this
/// module. In any test which calls [enable], [disable] or [set], please use the
/// `#[serial]` attribute to annotate that test. Otherwise there will be flakiness in the
/// test results (tests are run in parallel using many threads).
pub mod global_style_flag {
    use super::*;

    static STYLE_FLAG_GLOBAL: AtomicBool = AtomicBool::new(true);

    /// Turn styling on. This is the default.
    pub fn enable() { set(StyleFlag::Enabled); }

    /// Turn styling off. Renders produce plain text from now on.
    pub fn disable() { set(StyleFlag::Disabled); }

    pub fn set(value: StyleFlag) {
        let previous = STYLE_FLAG_GLOBAL.swap(value.is_enabled(), Ordering::SeqCst);
        if previous != value.is_enabled() {
            // % is Display, ? is Debug.
            tracing::debug!(message = "Style flag changed.", style_flag = ?value);
        }
    }

    #[must_use]
    pub fn get() -> StyleFlag { StyleFlag::from(is_enabled()) }

    #[must_use]
    pub fn is_enabled() -> bool { STYLE_FLAG_GLOBAL.load(Ordering::SeqCst) }

    /// Apply the user's preference from the environment. If `NO_COLOR` is set (to
    /// anything other than an empty string or `"0"`) styling is disabled. Otherwise the
    /// flag is left alone. Returns the flag in effect afterwards.
    ///
    /// More info: <https://no-color.org/>
    pub fn init_from_env() -> StyleFlag {
        if env_no_color() {
            disable();
        }
        get()
    }
}

/// Is the `NO_COLOR` environment variable set to a value that asks for no color?
#[must_use]
pub fn env_no_color() -> bool { no_color_requested(env::var("NO_COLOR").ok().as_deref()) }

fn no_color_requested(value: Option<&str>) -> bool {
    match value {
        None | Some("" | "0") => false,
        Some(_) => true,
    }
}
