//! Unit parser — free-text size strings to GiB.
//!
//! Collectors report physical device sizes as display strings ("100 GB",
//! "500.11 MB", "2 TB"). [`parse_size_gib`] converts them to a single unit so
//! they can be summed; anything unparseable contributes 0.0 rather than
//! failing the whole document.

use regex::Regex;
use std::sync::LazyLock;

/// `<number><optional whitespace><unit>`, anchored at the start of the
/// trimmed input. Units are case-sensitive; collectors emit them uppercase.
static SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)\s*(MB|GB|TB)").expect("size regex must compile")
});

/// Parse a size string and convert it to GiB.
///
/// MB divides by 1024, TB multiplies by 1024, GB passes through. Empty,
/// garbled, or non-matching input yields 0.0 — never an error.
pub fn parse_size_gib(input: &str) -> f64 {
    let Some(caps) = SIZE_RE.captures(input.trim()) else {
        return 0.0;
    };
    // Both captures are guaranteed by the pattern; the number capture is all
    // digits with at most one dot, so it always parses.
    let value: f64 = caps[1].parse().unwrap_or(0.0);
    match &caps[2] {
        "MB" => value / 1024.0,
        "TB" => value * 1024.0,
        _ => value,
    }
}
