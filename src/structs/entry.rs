//! # Entry Module - *Catalog Record Shapes*
//!
//! Defines the two record shapes the catalog exports.
//!
//! The full list and the minimal set deliberately carry distinct shapes
//! rather than one unified schema: only full-list rows include the compact
//! `short_label` form. Both shapes store `'static` string slices, matching
//! the upstream interchange fields (`offset`, `label`, `shortLabel`,
//! `tzCode`).

use std::fmt::{Display, Formatter};

use crate::structs::offset::UtcOffset;

/// # TimezoneEntry
///
/// One curated suggestion in the full catalog.
///
/// ## Fields
/// - `offset`: canonical signed `HH:MM` UTC offset, `-11:00`..`+14:00`.
/// - `label`: readable label combining offset and place name, in the
///   `(GMT±HH:MM) <Name>` form.
/// - `short_label`: compact form such as `GMT+5:30`, `GMT` for the zero
///   offset.
/// - `tz_code`: canonical IANA tz identifier - the stable machine key.
///
/// ## Notes
/// - Rows are `Copy` and compare by value; the catalog guarantees `tz_code`
///   uniqueness within the full list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "camelCase"))]
pub struct TimezoneEntry {
    pub offset: &'static str,
    pub label: &'static str,
    pub short_label: &'static str,
    pub tz_code: &'static str,
}

/// # MinimalTimezoneEntry
///
/// The representative row for one distinct UTC offset.
///
/// Same shape as [`TimezoneEntry`] minus `short_label`; every minimal row's
/// `(offset, label, tz_code)` triple also appears in the full list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "camelCase"))]
pub struct MinimalTimezoneEntry {
    pub offset: &'static str,
    pub label: &'static str,
    pub tz_code: &'static str,
}

impl TimezoneEntry {
    /// Constructs a catalog row.
    pub const fn new(
        offset: &'static str,
        label: &'static str,
        short_label: &'static str,
        tz_code: &'static str,
    ) -> Self {
        TimezoneEntry {
            offset,
            label,
            short_label,
            tz_code,
        }
    }

    /// Parsed form of `offset`.
    ///
    /// Catalog rows are fixed literals whose offsets the validation suite
    /// checks exhaustively, so the parse cannot fail for shipped data.
    /// Panics if called on a hand-built row with a non-canonical offset.
    pub fn utc_offset(&self) -> UtcOffset {
        self.offset.parse().expect("catalog offset strings are canonical")
    }
}

impl MinimalTimezoneEntry {
    /// Constructs a representative row.
    pub const fn new(offset: &'static str, label: &'static str, tz_code: &'static str) -> Self {
        MinimalTimezoneEntry {
            offset,
            label,
            tz_code,
        }
    }

    /// Parsed form of `offset`. Same contract as
    /// [`TimezoneEntry::utc_offset`].
    pub fn utc_offset(&self) -> UtcOffset {
        self.offset.parse().expect("catalog offset strings are canonical")
    }
}

impl Display for TimezoneEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label)
    }
}

impl Display for MinimalTimezoneEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_offset_parses() {
        let entry = TimezoneEntry::new("+05:30", "(GMT+05:30) India Standard Time", "GMT+5:30", "Asia/Calcutta");
        assert_eq!(entry.utc_offset().total_minutes(), 330);
        assert_eq!(entry.to_string(), "(GMT+05:30) India Standard Time");
    }

    #[test]
    fn test_minimal_entry_offset_parses() {
        let entry = MinimalTimezoneEntry::new("-10:00", "(GMT-10:00) Hawaii Time", "Pacific/Honolulu");
        assert_eq!(entry.utc_offset().total_minutes(), -600);
        assert_eq!(entry.to_string(), "(GMT-10:00) Hawaii Time");
    }

    #[test]
    #[should_panic(expected = "canonical")]
    fn test_hand_built_row_with_bad_offset_panics() {
        TimezoneEntry::new("5:30", "bad", "bad", "Bad/Row").utc_offset();
    }
}
