//! Integration tests for the catalog's data invariants.
//!
//! The tables are fixed literals, so authoring mistakes (malformed offsets,
//! duplicate keys, broken ordering) are correctness defects this suite
//! exists to catch.

use std::collections::BTreeSet;

use minizone::utils::{offset_label, short_offset_label};
use minizone::{FULL_TIMEZONE_LIST, MINIMAL_TIMEZONE_SET, UtcOffset, get_by_tz_code, iter};

#[test]
fn test_full_offsets_are_canonical_and_in_range() {
    for entry in FULL_TIMEZONE_LIST {
        let parsed: UtcOffset = entry
            .offset
            .parse()
            .unwrap_or_else(|e| panic!("{}: {}", entry.tz_code, e));
        assert!((-660..=840).contains(&parsed.total_minutes()), "{}", entry.tz_code);
        // Strict parse plus render-identity pins the '+HH:MM' pattern.
        assert_eq!(parsed.to_string(), entry.offset);
    }
}

#[test]
fn test_tz_codes_are_area_location_shaped() {
    for entry in FULL_TIMEZONE_LIST {
        let segments: Vec<&str> = entry.tz_code.split('/').collect();
        assert!(
            (2..=3).contains(&segments.len()),
            "unexpected tz code shape: {}",
            entry.tz_code
        );
        for segment in segments {
            assert!(!segment.is_empty(), "empty segment in {}", entry.tz_code);
            assert!(
                segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
                "unexpected character in {}",
                entry.tz_code
            );
        }
    }
}

#[test]
fn test_full_list_is_sorted_ascending_by_offset() {
    let minutes: Vec<i16> = FULL_TIMEZONE_LIST
        .iter()
        .map(|entry| entry.utc_offset().total_minutes())
        .collect();
    let mut sorted = minutes.clone();
    sorted.sort_unstable();
    assert_eq!(minutes, sorted);
}

#[test]
fn test_minimal_set_is_sorted_ascending_by_offset() {
    let minutes: Vec<i16> = MINIMAL_TIMEZONE_SET
        .iter()
        .map(|entry| entry.utc_offset().total_minutes())
        .collect();
    let mut sorted = minutes.clone();
    sorted.sort_unstable();
    assert_eq!(minutes, sorted);
}

#[test]
fn test_minimal_offsets_equal_distinct_full_offsets() {
    let full: BTreeSet<&str> = FULL_TIMEZONE_LIST.iter().map(|entry| entry.offset).collect();
    let minimal: BTreeSet<&str> = MINIMAL_TIMEZONE_SET.iter().map(|entry| entry.offset).collect();
    assert_eq!(full, minimal);
    // One row per distinct offset, so lengths match the distinct count too.
    assert_eq!(MINIMAL_TIMEZONE_SET.len(), full.len());
}

#[test]
fn test_minimal_offsets_appear_exactly_once() {
    let mut seen = BTreeSet::new();
    for entry in MINIMAL_TIMEZONE_SET {
        assert!(seen.insert(entry.offset), "duplicated offset {}", entry.offset);
    }
}

#[test]
fn test_tz_codes_unique_within_each_list() {
    let full: BTreeSet<&str> = FULL_TIMEZONE_LIST.iter().map(|entry| entry.tz_code).collect();
    assert_eq!(full.len(), FULL_TIMEZONE_LIST.len());
    let minimal: BTreeSet<&str> = MINIMAL_TIMEZONE_SET.iter().map(|entry| entry.tz_code).collect();
    assert_eq!(minimal.len(), MINIMAL_TIMEZONE_SET.len());
}

#[test]
fn test_every_minimal_row_is_drawn_from_the_full_list() {
    for minimal in MINIMAL_TIMEZONE_SET {
        assert!(
            FULL_TIMEZONE_LIST.iter().any(|full| {
                full.offset == minimal.offset
                    && full.label == minimal.label
                    && full.tz_code == minimal.tz_code
            }),
            "minimal row {} has no full-list counterpart",
            minimal.tz_code
        );
    }
}

#[test]
fn test_labels_follow_the_formatting_rules() {
    for entry in FULL_TIMEZONE_LIST {
        let offset = entry.utc_offset();
        let prefix = format!("(GMT{}) ", offset);
        let name = entry
            .label
            .strip_prefix(&prefix)
            .unwrap_or_else(|| panic!("label '{}' does not open with '{}'", entry.label, prefix));
        assert!(!name.is_empty(), "{} has no descriptive name", entry.tz_code);
        assert_eq!(entry.label, offset_label(offset, name));
        assert_eq!(entry.short_label, short_offset_label(offset), "{}", entry.tz_code);
    }
}

#[test]
fn test_india_standard_time_row() {
    let entry = get_by_tz_code("Asia/Calcutta").unwrap();
    assert_eq!(entry.offset, "+05:30");
    assert!(entry.label.contains("India Standard Time"));
}

#[test]
fn test_exactly_one_minimal_row_at_minus_ten() {
    let rows: Vec<_> = MINIMAL_TIMEZONE_SET
        .iter()
        .filter(|entry| entry.offset == "-10:00")
        .collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tz_code, "Pacific/Honolulu");
}

#[test]
fn test_every_row_resolves_by_its_key() {
    for entry in iter() {
        let found = get_by_tz_code(entry.tz_code)
            .unwrap_or_else(|| panic!("{} did not resolve", entry.tz_code));
        assert_eq!(found, entry);
    }
}
