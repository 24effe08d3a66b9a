// ABOUTME: Defensive numeric-string parsing for logged weight and rep values
// ABOUTME: Longest-leading-prefix semantics with zero fallbacks, never an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Milon Fitness

//! Defensive parsing of client-entered numeric strings
//!
//! Logged weights and reps arrive as free-form strings. Parsing takes the
//! longest leading numeric prefix after skipping whitespace, so `"80kg"`
//! reads as 80 and `"12,5"` as 12 (the comma ends the prefix). A string
//! with no usable prefix yields `None`; the `_or_zero` variants substitute
//! 0, the universal fallback for volume and history aggregation.

/// Parse a decimal weight from the longest leading numeric prefix
///
/// Accepts an optional sign, integer digits, and a fractional part.
/// Returns `None` when no digits are present.
#[must_use]
pub fn parse_weight(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let mut digits = 0;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
        digits += 1;
    }

    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
            digits += 1;
        }
    }

    if digits == 0 {
        return None;
    }
    s[..end].parse().ok()
}

/// Parse a weight, substituting 0 for anything unparseable
#[must_use]
pub fn parse_weight_or_zero(raw: &str) -> f64 {
    parse_weight(raw).unwrap_or(0.0)
}

/// Parse an integer rep count from the longest leading digit prefix
///
/// Accepts an optional sign. A fractional part is truncated at the dot.
/// Returns `None` when no digits are present.
#[must_use]
pub fn parse_reps(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }

    if end == start {
        return None;
    }
    s[..end].parse().ok()
}

/// Parse a rep count, substituting 0 for anything unparseable
#[must_use]
pub fn parse_reps_or_zero(raw: &str) -> i64 {
    parse_reps(raw).unwrap_or(0)
}
