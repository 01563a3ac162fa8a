//! Round-trip tests for the serde interchange shape.

#![cfg(feature = "serde")]

use minizone::{FULL_TIMEZONE_LIST, MINIMAL_TIMEZONE_SET};
use serde::Deserialize;

// Owned mirrors of the two record shapes; the catalog types hold 'static
// slices so deserialisation lands here instead.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct OwnedEntry {
    offset: String,
    label: String,
    short_label: String,
    tz_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct OwnedMinimalEntry {
    offset: String,
    label: String,
    tz_code: String,
}

#[test]
fn test_full_list_round_trips_field_for_field() {
    let json = serde_json::to_string(FULL_TIMEZONE_LIST).unwrap();
    let parsed: Vec<OwnedEntry> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), FULL_TIMEZONE_LIST.len());
    for (entry, owned) in FULL_TIMEZONE_LIST.iter().zip(&parsed) {
        assert_eq!(entry.offset, owned.offset);
        assert_eq!(entry.label, owned.label);
        assert_eq!(entry.short_label, owned.short_label);
        assert_eq!(entry.tz_code, owned.tz_code);
    }
}

#[test]
fn test_minimal_set_round_trips_field_for_field() {
    let json = serde_json::to_string(MINIMAL_TIMEZONE_SET).unwrap();
    let parsed: Vec<OwnedMinimalEntry> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), MINIMAL_TIMEZONE_SET.len());
    for (entry, owned) in MINIMAL_TIMEZONE_SET.iter().zip(&parsed) {
        assert_eq!(entry.offset, owned.offset);
        assert_eq!(entry.label, owned.label);
        assert_eq!(entry.tz_code, owned.tz_code);
    }
}

#[test]
fn test_interchange_field_names_are_upstream_camel_case() {
    let value = serde_json::to_value(FULL_TIMEZONE_LIST[0]).unwrap();
    let object = value.as_object().unwrap();
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["label", "offset", "shortLabel", "tzCode"]);

    let value = serde_json::to_value(MINIMAL_TIMEZONE_SET[0]).unwrap();
    let object = value.as_object().unwrap();
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["label", "offset", "tzCode"]);
}
