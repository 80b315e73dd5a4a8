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

use rand::{Rng, rngs::ThreadRng};
use smallvec::SmallVec;
use strum::EnumCount;

use crate::NamedColor;

/// Source of colors for the random styles ([crate::Style::RandomForeground] and
/// friends). They ask for a fresh color on every render.
pub trait PickColor {
    /// One of the 8 standard colors.
    fn pick_named_color(&mut self) -> NamedColor;

    /// An index into the 256-color palette.
    fn pick_ansi256(&mut self) -> u8;
}

/// Adapts any [rand::Rng] into a [PickColor]. Not cryptographic, not reproducible
/// unless `R` is seeded.
#[derive(Debug, Clone)]
pub struct RandPicker<R>(pub R);

impl<R: Rng> PickColor for RandPicker<R> {
    fn pick_named_color(&mut self) -> NamedColor {
        NamedColor::from_index(self.0.random_range(0..NamedColor::COUNT))
    }

    fn pick_ansi256(&mut self) -> u8 { self.0.random() }
}

/// The picker used when rendering through [std::fmt::Display] or
/// [crate::StyledText::render].
#[must_use]
pub fn thread_picker() -> RandPicker<ThreadRng> { RandPicker(rand::rng()) }

/// Hands out colors from fixed lists, wrapping around when it runs out. Use this in tests
/// to get exact output from the random styles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CyclingPicker {
    pub named_colors: SmallVec<[NamedColor; 8]>,
    pub ansi256: SmallVec<[u8; 8]>,
    named_color_pos: usize,
    ansi256_pos: usize,
}

impl CyclingPicker {
    #[must_use]
    pub fn new(named_colors: &[NamedColor], ansi256: &[u8]) -> Self {
        Self {
            named_colors: SmallVec::from_slice(named_colors),
            ansi256: SmallVec::from_slice(ansi256),
            ..Default::default()
        }
    }
}

impl PickColor for CyclingPicker {
    fn pick_named_color(&mut self) -> NamedColor {
        let Some(it) = self.named_colors.get(self.named_color_pos % self.named_colors.len().max(1))
        else {
            return NamedColor::Black;
        };
        self.named_color_pos += 1;
        *it
    }

    fn pick_ansi256(&mut self) -> u8 {
        let Some(it) = self.ansi256.get(self.ansi256_pos % self.ansi256.len().max(1)) else {
            return 0;
        };
        self.ansi256_pos += 1;
        *it
    }
}
