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

//! Remove SGR escape sequences (`ESC [ <digits and ;> m`) from text, leaving every other
//! byte exactly as it was.
//!
//! An `ESC [` that is not followed by digits and `;` up to an `m` is not a sequence, and
//! is kept as literal text. Scanning resumes right after the `ESC`, so a real sequence
//! that starts inside the bogus one is still found.
//!
//! This is a single pass. Stripping the output again changes nothing, except when a
//! literal `ESC [` is directly followed by a real sequence and then by any digits and `;`
//! up to an `m`: removing the inner sequence joins the two halves into a new one, eg:
//! `"\x1b[\x1b[0mmab"` strips to `"\x1b[mab"`, and that strips to `"ab"`. Text rendered
//! by this crate from payloads without escape sequences never has this shape.

use std::ops::Range;

use smallvec::SmallVec;

const ESC: u8 = 0x1b;
const BRACKET: u8 = b'[';
const END: u8 = b'm';

/// `ESC [ m` plus one byte. If fewer bytes than this are left at the scan position, they
/// are copied through as is.
pub const MIN_SEQUENCE_SCAN_LEN: usize = 4;

type KeptSpans = SmallVec<[Range<usize>; 8]>;

/// Byte ranges of `bytes` that are not part of an SGR sequence, in order.
fn kept_spans(bytes: &[u8]) -> KeptSpans {
    let mut acc = KeptSpans::new();
    let mut span_start = 0;
    let mut index = 0;

    while index < bytes.len() {
        if bytes.len() - index < MIN_SEQUENCE_SCAN_LEN {
            break;
        }
        if bytes[index] == ESC && bytes[index + 1] == BRACKET {
            if let Some(end) = find_sequence_end(bytes, index + 2) {
                if span_start < index {
                    acc.push(span_start..index);
                }
                index = end + 1;
                span_start = index;
                continue;
            }
        }
        index += 1;
    }

    if span_start < bytes.len() {
        acc.push(span_start..bytes.len());
    }
    acc
}

/// Index of the terminating `m`, if the bytes from `start` are digits and `;` up to one.
fn find_sequence_end(bytes: &[u8], start: usize) -> Option<usize> {
    for (offset, byte) in bytes.get(start..)?.iter().enumerate() {
        match *byte {
            b'0'..=b'9' | b';' => {}
            END => return Some(start + offset),
            _ => return None,
        }
    }
    None
}

/// Remove every SGR sequence from `text`, in a single pass (see the [module
/// docs](self) for the one input shape where a second pass removes more).
///
/// ```
/// use term_color::strip_sgr;
///
/// assert_eq!(strip_sgr("\x1b[31;1mhot\x1b[39;0m"), "hot");
/// assert_eq!(strip_sgr("a \x1b[ b"), "a \x1b[ b");
/// ```
#[must_use]
pub fn strip_sgr(text: &str) -> String {
    let mut acc = String::with_capacity(text.len());
    // Span boundaries sit on ASCII bytes (`ESC` or just past `m`), so they are always
    // char boundaries.
    for span in kept_spans(text.as_bytes()) {
        acc.push_str(&text[span]);
    }
    acc
}

/// Same as [strip_sgr] for arbitrary bytes.
#[must_use]
pub fn strip_sgr_bytes(bytes: &[u8]) -> Vec<u8> {
    let mut acc = Vec::with_capacity(bytes.len());
    for span in kept_spans(bytes) {
        acc.extend_from_slice(&bytes[span]);
    }
    acc
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("", "")]
    #[test_case("plain", "plain")]
    #[test_case("\x1b[31mred\x1b[39m", "red")]
    #[test_case("\x1b[31;44;1mcombo\x1b[39;49;0m", "combo")]
    #[test_case("\x1b[38;5;150;48;5;2mindexed\x1b[39;49m", "indexed")]
    #[test_case("\x1b[38;2;1;2;3mrgb\x1b[39;49m", "rgb")]
    #[test_case("a\x1b[mb", "ab"; "empty params")]
    #[test_case("\x1b[1m\x1b[4mstacked\x1b[0m tail", "stacked tail")]
    fn strips_sequences(input: &str, expected: &str) {
        assert_eq!(strip_sgr(input), expected);
    }

    #[test_case("a\x1b[xyz", "a\x1b[xyz"; "invalid char after prefix")]
    #[test_case("\x1b[12Hcursor", "\x1b[12Hcursor"; "non sgr csi")]
    #[test_case("\x1b[12;3 unterminated", "\x1b[12;3 unterminated"; "unterminated")]
    #[test_case("\x1b[\x1b[32mgreen\x1b[39m", "\x1b[green"; "real sequence inside bogus one")]
    #[test_case("\x1b\x1b[1mx\x1b[0m", "\x1bx"; "lone escape")]
    fn keeps_literal_lookalikes(input: &str, expected: &str) {
        assert_eq!(strip_sgr(input), expected);
    }

    #[test_case("abc\x1b[m", "abc\x1b[m"; "complete but too short")]
    #[test_case("abc\x1b[", "abc\x1b["; "bare prefix")]
    #[test_case("\x1b[1", "\x1b[1"; "whole input too short")]
    #[test_case("\x1b[0m", ""; "exactly four bytes")]
    #[test_case("\x1b[0mX", "X"; "sequence then one byte")]
    fn short_remainder_is_copied(input: &str, expected: &str) {
        assert_eq!(strip_sgr(input), expected);
    }

    #[test]
    fn keeps_multibyte_text() {
        let input = "\x1b[35m→ déjà vu ✓\x1b[39m ok";
        assert_eq!(strip_sgr(input), "→ déjà vu ✓ ok");
    }

    #[test]
    fn sequence_joined_by_stripping_is_left_for_next_pass() {
        let once = strip_sgr("\x1b[\x1b[0mmab");
        assert_eq!(once, "\x1b[mab");
        assert_eq!(strip_sgr(&once), "ab");
    }

    #[test]
    fn idempotent() {
        for input in [
            "\x1b[31mred\x1b[39m",
            "a\x1b[xyz",
            "abc\x1b[m",
            "\x1b[\x1b[32mgreen\x1b[39m",
        ] {
            let once = strip_sgr(input);
            assert_eq!(strip_sgr(&once), once);
        }
    }

    #[test]
    fn bytes_keep_binary_payload() {
        let mut input = b"\x1b[1m".to_vec();
        input.extend_from_slice(&[0x00, 0xff, 0xfe, 0x1b, 0x80]);
        input.extend_from_slice(b"\x1b[0m");
        assert_eq!(strip_sgr_bytes(&input), vec![0x00, 0xff, 0xfe, 0x1b, 0x80]);
    }
}
