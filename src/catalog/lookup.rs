//! # Lookup Module - *Catalog Access Helpers*
//!
//! Thin read-side helpers over the two constant tables: accessor functions
//! mirroring the upstream exports, iteration, exact lookup by tz code,
//! substring search, and offset filtering.
//!
//! The tables are small, so every helper is a plain scan by default. The
//! `fast_lookup` feature swaps the tz-code lookup onto a compile-time
//! perfect-hash index for hot paths.

use crate::catalog::full::FULL_TIMEZONE_LIST;
use crate::catalog::minimal::MINIMAL_TIMEZONE_SET;
use crate::structs::entry::{MinimalTimezoneEntry, TimezoneEntry};
use crate::structs::offset::UtcOffset;

/// Returns the complete catalog: every curated suggestion, ascending by
/// offset, with `short_label` on each row.
pub const fn full_list() -> &'static [TimezoneEntry] {
    FULL_TIMEZONE_LIST
}

/// Returns the reduced catalog: one representative per distinct offset,
/// ascending.
pub const fn minimal_list() -> &'static [MinimalTimezoneEntry] {
    MINIMAL_TIMEZONE_SET
}

/// Iterates over the full catalog in table order.
pub fn iter() -> impl Iterator<Item = &'static TimezoneEntry> {
    FULL_TIMEZONE_LIST.iter()
}

/// Exact lookup on the machine key, e.g. `"Europe/Berlin"`.
#[cfg(not(feature = "fast_lookup"))]
pub fn get_by_tz_code(code: &str) -> Option<&'static TimezoneEntry> {
    FULL_TIMEZONE_LIST.iter().find(|entry| entry.tz_code == code)
}

/// Exact lookup on the machine key, e.g. `"Europe/Berlin"`, backed by the
/// compile-time index.
#[cfg(feature = "fast_lookup")]
pub fn get_by_tz_code(code: &str) -> Option<&'static TimezoneEntry> {
    TZ_CODE_INDEX.get(code).map(|&row| &FULL_TIMEZONE_LIST[row])
}

/// Case-sensitive substring search over labels and tz codes.
///
/// `"Eastern Time"` matches the US, Australian and Tasmanian rows;
/// `"Argentina"` matches on the tz code even though the label only says
/// Buenos Aires.
pub fn find_by_name(fragment: &str) -> Vec<&'static TimezoneEntry> {
    FULL_TIMEZONE_LIST
        .iter()
        .filter(|entry| entry.label.contains(fragment) || entry.tz_code.contains(fragment))
        .collect()
}

/// All full-list suggestions sharing an offset, in table order.
pub fn entries_at_offset(offset: UtcOffset) -> impl Iterator<Item = &'static TimezoneEntry> {
    FULL_TIMEZONE_LIST.iter().filter(move |entry| entry.utc_offset() == offset)
}

/// The minimal-set representative for an offset, if the catalog covers it.
pub fn minimal_for_offset(offset: UtcOffset) -> Option<&'static MinimalTimezoneEntry> {
    MINIMAL_TIMEZONE_SET.iter().find(|entry| entry.utc_offset() == offset)
}

/// Row index of each full-list entry, keyed by tz code.
#[cfg(feature = "fast_lookup")]
static TZ_CODE_INDEX: phf::Map<&'static str, usize> = phf::phf_map! {
    "Pacific/Pago_Pago" => 0,
    "Pacific/Niue" => 1,
    "Pacific/Midway" => 2,
    "Pacific/Honolulu" => 3,
    "Pacific/Tahiti" => 4,
    "Pacific/Rarotonga" => 5,
    "America/Anchorage" => 6,
    "Pacific/Gambier" => 7,
    "America/Los_Angeles" => 8,
    "America/Tijuana" => 9,
    "America/Vancouver" => 10,
    "Pacific/Pitcairn" => 11,
    "America/Denver" => 12,
    "America/Phoenix" => 13,
    "America/Mazatlan" => 14,
    "America/Hermosillo" => 15,
    "America/Chicago" => 16,
    "America/Mexico_City" => 17,
    "America/Regina" => 18,
    "America/Guatemala" => 19,
    "America/Costa_Rica" => 20,
    "Pacific/Galapagos" => 21,
    "America/New_York" => 22,
    "America/Bogota" => 23,
    "America/Lima" => 24,
    "America/Jamaica" => 25,
    "America/Havana" => 26,
    "America/Halifax" => 27,
    "America/Caracas" => 28,
    "America/Santiago" => 29,
    "America/La_Paz" => 30,
    "America/Puerto_Rico" => 31,
    "Atlantic/Bermuda" => 32,
    "America/Argentina/Buenos_Aires" => 33,
    "America/Montevideo" => 34,
    "America/Cayenne" => 35,
    "America/Godthab" => 36,
    "Atlantic/Stanley" => 37,
    "America/Sao_Paulo" => 38,
    "Atlantic/South_Georgia" => 39,
    "America/Noronha" => 40,
    "Atlantic/Azores" => 41,
    "Atlantic/Cape_Verde" => 42,
    "America/Scoresbysund" => 43,
    "Europe/London" => 44,
    "Europe/Dublin" => 45,
    "Europe/Lisbon" => 46,
    "Atlantic/Reykjavik" => 47,
    "Africa/Casablanca" => 48,
    "Africa/Accra" => 49,
    "Europe/Berlin" => 50,
    "Europe/Paris" => 51,
    "Europe/Amsterdam" => 52,
    "Europe/Brussels" => 53,
    "Europe/Madrid" => 54,
    "Europe/Rome" => 55,
    "Europe/Stockholm" => 56,
    "Europe/Vienna" => 57,
    "Europe/Warsaw" => 58,
    "Europe/Budapest" => 59,
    "Africa/Lagos" => 60,
    "Africa/Algiers" => 61,
    "Europe/Helsinki" => 62,
    "Europe/Athens" => 63,
    "Europe/Bucharest" => 64,
    "Europe/Kiev" => 65,
    "Europe/Riga" => 66,
    "Asia/Jerusalem" => 67,
    "Africa/Cairo" => 68,
    "Africa/Johannesburg" => 69,
    "Europe/Istanbul" => 70,
    "Europe/Moscow" => 71,
    "Europe/Minsk" => 72,
    "Asia/Riyadh" => 73,
    "Asia/Baghdad" => 74,
    "Africa/Nairobi" => 75,
    "Asia/Dubai" => 76,
    "Asia/Baku" => 77,
    "Asia/Tbilisi" => 78,
    "Asia/Yerevan" => 79,
    "Indian/Mauritius" => 80,
    "Asia/Kabul" => 81,
    "Indian/Maldives" => 82,
    "Asia/Karachi" => 83,
    "Asia/Tashkent" => 84,
    "Asia/Yekaterinburg" => 85,
    "Asia/Calcutta" => 86,
    "Asia/Colombo" => 87,
    "Asia/Kathmandu" => 88,
    "Asia/Dhaka" => 89,
    "Asia/Almaty" => 90,
    "Asia/Omsk" => 91,
    "Indian/Cocos" => 92,
    "Asia/Rangoon" => 93,
    "Asia/Bangkok" => 94,
    "Asia/Jakarta" => 95,
    "Asia/Saigon" => 96,
    "Asia/Krasnoyarsk" => 97,
    "Asia/Hong_Kong" => 98,
    "Asia/Shanghai" => 99,
    "Asia/Singapore" => 100,
    "Asia/Taipei" => 101,
    "Asia/Kuala_Lumpur" => 102,
    "Asia/Manila" => 103,
    "Australia/Perth" => 104,
    "Asia/Irkutsk" => 105,
    "Asia/Pyongyang" => 106,
    "Asia/Tokyo" => 107,
    "Asia/Seoul" => 108,
    "Asia/Yakutsk" => 109,
    "Australia/Darwin" => 110,
    "Australia/Brisbane" => 111,
    "Pacific/Guam" => 112,
    "Pacific/Port_Moresby" => 113,
    "Asia/Vladivostok" => 114,
    "Australia/Adelaide" => 115,
    "Australia/Sydney" => 116,
    "Australia/Hobart" => 117,
    "Pacific/Guadalcanal" => 118,
    "Pacific/Noumea" => 119,
    "Asia/Magadan" => 120,
    "Pacific/Nauru" => 121,
    "Pacific/Fiji" => 122,
    "Pacific/Majuro" => 123,
    "Pacific/Tarawa" => 124,
    "Pacific/Funafuti" => 125,
    "Asia/Kamchatka" => 126,
    "Pacific/Auckland" => 127,
    "Pacific/Apia" => 128,
    "Pacific/Fakaofo" => 129,
    "Pacific/Tongatapu" => 130,
    "Pacific/Kiritimati" => 131,
};
