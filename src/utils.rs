//! # Utilities - *Label Formatting Helpers*
//!
//! The formatting rules behind the catalog's two label columns. The tables
//! themselves are literals, so these helpers exist for consumers composing
//! rows in the catalog's style and for the validation suite, which checks
//! every shipped label against them.

use crate::structs::offset::UtcOffset;

/// Builds the readable `(GMT±HH:MM) <Name>` label for an offset and name.
pub fn offset_label(offset: UtcOffset, name: &str) -> String {
    format!("(GMT{}) {}", offset, name)
}

/// Builds the compact label form: `GMT` for the zero offset, the unpadded
/// signed hour otherwise, with minutes kept only when non-zero
/// (`GMT-9`, `GMT+5:30`).
pub fn short_offset_label(offset: UtcOffset) -> String {
    if offset == UtcOffset::UTC {
        return "GMT".to_string();
    }
    let sign = if offset.total_minutes() < 0 { '-' } else { '+' };
    let hours = offset.whole_hours().abs();
    let minutes = offset.minutes_past_hour();
    if minutes == 0 {
        format!("GMT{}{}", sign, hours)
    } else {
        format!("GMT{}{}:{:02}", sign, hours, minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_label() {
        let offset: UtcOffset = "+05:30".parse().unwrap();
        assert_eq!(offset_label(offset, "India Standard Time"), "(GMT+05:30) India Standard Time");
        assert_eq!(offset_label(UtcOffset::UTC, "London"), "(GMT+00:00) London");
    }

    #[test]
    fn test_short_offset_label() {
        assert_eq!(short_offset_label(UtcOffset::UTC), "GMT");
        assert_eq!(short_offset_label("-09:00".parse().unwrap()), "GMT-9");
        assert_eq!(short_offset_label("-11:00".parse().unwrap()), "GMT-11");
        assert_eq!(short_offset_label("+05:30".parse().unwrap()), "GMT+5:30");
        assert_eq!(short_offset_label("+14:00".parse().unwrap()), "GMT+14");
    }
}
