//! # Minimal Catalog Module - *One Favourite Per Offset*
//!
//! The reduced table: exactly one representative row for every distinct UTC
//! offset in the full list, ascending by offset. The favourites skew towards
//! a western audience, but every offset is covered.

use crate::structs::entry::MinimalTimezoneEntry;

/// One representative per distinct UTC offset, ascending.
///
/// Each row's `(offset, label, tz_code)` triple also appears in the full
/// list; no offset is dropped and none is duplicated.
pub const MINIMAL_TIMEZONE_SET: &[MinimalTimezoneEntry] = &[
    MinimalTimezoneEntry::new("-11:00", "(GMT-11:00) Pago Pago", "Pacific/Pago_Pago"),
    MinimalTimezoneEntry::new("-10:00", "(GMT-10:00) Hawaii Time", "Pacific/Honolulu"),
    MinimalTimezoneEntry::new("-09:00", "(GMT-09:00) Alaska Time", "America/Anchorage"),
    MinimalTimezoneEntry::new("-08:00", "(GMT-08:00) Pacific Time", "America/Los_Angeles"),
    MinimalTimezoneEntry::new("-07:00", "(GMT-07:00) Mountain Time", "America/Denver"),
    MinimalTimezoneEntry::new("-06:00", "(GMT-06:00) Central Time", "America/Chicago"),
    MinimalTimezoneEntry::new("-05:00", "(GMT-05:00) Eastern Time", "America/New_York"),
    MinimalTimezoneEntry::new("-04:00", "(GMT-04:00) Atlantic Time - Halifax", "America/Halifax"),
    MinimalTimezoneEntry::new("-03:00", "(GMT-03:00) Buenos Aires", "America/Argentina/Buenos_Aires"),
    MinimalTimezoneEntry::new("-02:00", "(GMT-02:00) Sao Paulo", "America/Sao_Paulo"),
    MinimalTimezoneEntry::new("-01:00", "(GMT-01:00) Azores", "Atlantic/Azores"),
    MinimalTimezoneEntry::new("+00:00", "(GMT+00:00) London", "Europe/London"),
    MinimalTimezoneEntry::new("+01:00", "(GMT+01:00) Berlin", "Europe/Berlin"),
    MinimalTimezoneEntry::new("+02:00", "(GMT+02:00) Helsinki", "Europe/Helsinki"),
    MinimalTimezoneEntry::new("+03:00", "(GMT+03:00) Istanbul", "Europe/Istanbul"),
    MinimalTimezoneEntry::new("+04:00", "(GMT+04:00) Dubai", "Asia/Dubai"),
    MinimalTimezoneEntry::new("+04:30", "(GMT+04:30) Kabul", "Asia/Kabul"),
    MinimalTimezoneEntry::new("+05:00", "(GMT+05:00) Maldives", "Indian/Maldives"),
    MinimalTimezoneEntry::new("+05:30", "(GMT+05:30) India Standard Time", "Asia/Calcutta"),
    MinimalTimezoneEntry::new("+05:45", "(GMT+05:45) Kathmandu", "Asia/Kathmandu"),
    MinimalTimezoneEntry::new("+06:00", "(GMT+06:00) Dhaka", "Asia/Dhaka"),
    MinimalTimezoneEntry::new("+06:30", "(GMT+06:30) Cocos", "Indian/Cocos"),
    MinimalTimezoneEntry::new("+07:00", "(GMT+07:00) Bangkok", "Asia/Bangkok"),
    MinimalTimezoneEntry::new("+08:00", "(GMT+08:00) Hong Kong", "Asia/Hong_Kong"),
    MinimalTimezoneEntry::new("+08:30", "(GMT+08:30) Pyongyang", "Asia/Pyongyang"),
    MinimalTimezoneEntry::new("+09:00", "(GMT+09:00) Tokyo", "Asia/Tokyo"),
    MinimalTimezoneEntry::new("+09:30", "(GMT+09:30) Central Time - Darwin", "Australia/Darwin"),
    MinimalTimezoneEntry::new("+10:00", "(GMT+10:00) Eastern Time - Brisbane", "Australia/Brisbane"),
    MinimalTimezoneEntry::new("+10:30", "(GMT+10:30) Central Time - Adelaide", "Australia/Adelaide"),
    MinimalTimezoneEntry::new("+11:00", "(GMT+11:00) Eastern Time - Melbourne, Sydney", "Australia/Sydney"),
    MinimalTimezoneEntry::new("+12:00", "(GMT+12:00) Nauru", "Pacific/Nauru"),
    MinimalTimezoneEntry::new("+13:00", "(GMT+13:00) Auckland", "Pacific/Auckland"),
    MinimalTimezoneEntry::new("+14:00", "(GMT+14:00) Kiritimati", "Pacific/Kiritimati"),
];
