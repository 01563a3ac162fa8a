//! # Offset Module - *Typed UTC Offset Value*
//!
//! Defines the parsed, whole-minute form of the catalog's `±HH:MM` offset
//! strings.
//!
//! The catalog itself stores offsets as canonical strings, matching the
//! upstream interchange shape. `UtcOffset` is the typed backbone behind
//! those strings: fallible parsing, range validation against the catalog
//! window, minute arithmetic for sorting and filtering, and canonical
//! rendering back to the `±HH:MM` form.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::enums::error::MinizoneError;

/// Lowest offset carried by the catalog, in minutes east of UTC (`-11:00`).
pub const MIN_OFFSET_MINUTES: i16 = -660;

/// Highest offset carried by the catalog, in minutes east of UTC (`+14:00`).
pub const MAX_OFFSET_MINUTES: i16 = 840;

/// # UtcOffset
///
/// Whole-minute signed offset from Coordinated Universal Time.
///
/// ## Purpose
/// - Parsed counterpart of the catalog's canonical `±HH:MM` strings.
/// - Sorting and filtering key: ordering is by minutes east of UTC, so a
///   sequence sorted by `UtcOffset` matches the catalog's table order.
///
/// ## Behaviour
/// - Construction is checked: both `FromStr` and [`UtcOffset::from_minutes`]
///   reject values outside `[-11:00, +14:00]`.
/// - `Display` renders the canonical zero-padded form, `+00:00` for UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcOffset {
    minutes: i16,
}

impl UtcOffset {
    /// The zero offset, rendered as `+00:00`.
    pub const UTC: UtcOffset = UtcOffset { minutes: 0 };

    /// Constructs an offset from minutes east of UTC, rejecting values
    /// outside the catalog window.
    pub fn from_minutes(minutes: i16) -> Result<Self, MinizoneError> {
        if !(MIN_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes) {
            return Err(MinizoneError::OffsetOutOfRange {
                value: canonical(minutes),
                minutes,
            });
        }
        Ok(UtcOffset { minutes })
    }

    /// Total minutes east of UTC, in `[-660, +840]`.
    pub const fn total_minutes(self) -> i16 {
        self.minutes
    }

    /// Whole hours east of UTC, truncated towards zero.
    pub const fn whole_hours(self) -> i8 {
        (self.minutes / 60) as i8
    }

    /// Minutes past the whole hour, always non-negative (`30` for both
    /// `+05:30` and `-09:30`-style offsets).
    pub const fn minutes_past_hour(self) -> u8 {
        (self.minutes % 60).unsigned_abs() as u8
    }
}

impl FromStr for UtcOffset {
    type Err = MinizoneError;

    /// Parses the strict canonical form: a sign, two hour digits, `:`,
    /// two minute digits. Shorthand such as `+5:30` or `0530` is rejected
    /// so that parse-then-render is the identity on catalog data.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 6 {
            return Err(malformed(s, "expected exactly six characters, '+HH:MM'"));
        }
        let sign: i16 = match bytes[0] {
            b'+' => 1,
            b'-' => -1,
            _ => return Err(malformed(s, "missing leading '+' or '-' sign")),
        };
        if bytes[3] != b':' {
            return Err(malformed(s, "missing ':' separator"));
        }
        let hours = two_digits(bytes[1], bytes[2])
            .ok_or_else(|| malformed(s, "hours are not two digits"))?;
        let minutes = two_digits(bytes[4], bytes[5])
            .ok_or_else(|| malformed(s, "minutes are not two digits"))?;
        if minutes >= 60 {
            return Err(malformed(s, "minutes must be below 60"));
        }
        let total = sign * (hours * 60 + minutes);
        if !(MIN_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&total) {
            return Err(MinizoneError::OffsetOutOfRange {
                value: s.to_string(),
                minutes: total,
            });
        }
        Ok(UtcOffset { minutes: total })
    }
}

impl Display for UtcOffset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&canonical(self.minutes))
    }
}

fn two_digits(hi: u8, lo: u8) -> Option<i16> {
    if hi.is_ascii_digit() && lo.is_ascii_digit() {
        Some(i16::from(hi - b'0') * 10 + i16::from(lo - b'0'))
    } else {
        None
    }
}

fn canonical(minutes: i16) -> String {
    let sign = if minutes < 0 { '-' } else { '+' };
    format!("{}{:02}:{:02}", sign, (minutes / 60).abs(), (minutes % 60).abs())
}

fn malformed(value: &str, message: &str) -> MinizoneError {
    MinizoneError::MalformedOffset {
        value: value.to_string(),
        message: Some(message.to_string()),
    }
}
