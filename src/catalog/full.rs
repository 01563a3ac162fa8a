//! # Full Catalog Module - *Every Curated Suggestion*
//!
//! The complete table: multiple named suggestions per UTC offset, ascending
//! by offset, each row carrying the compact `short_label` form alongside the
//! readable label and the IANA tz identifier.

use crate::structs::entry::TimezoneEntry;

/// Every curated suggestion, ascending by UTC offset.
///
/// Multiple rows share an offset; `tz_code` is unique across the table and
/// is the stable machine key. The sub-order among rows sharing an offset
/// puts the minimal-set favourite first, then roughly west-to-east
/// conventions, but consumers should not rely on it.
pub const FULL_TIMEZONE_LIST: &[TimezoneEntry] = &[
    TimezoneEntry::new("-11:00", "(GMT-11:00) Pago Pago", "GMT-11", "Pacific/Pago_Pago"),
    TimezoneEntry::new("-11:00", "(GMT-11:00) Niue", "GMT-11", "Pacific/Niue"),
    TimezoneEntry::new("-11:00", "(GMT-11:00) Midway", "GMT-11", "Pacific/Midway"),
    TimezoneEntry::new("-10:00", "(GMT-10:00) Hawaii Time", "GMT-10", "Pacific/Honolulu"),
    TimezoneEntry::new("-10:00", "(GMT-10:00) Tahiti", "GMT-10", "Pacific/Tahiti"),
    TimezoneEntry::new("-10:00", "(GMT-10:00) Rarotonga", "GMT-10", "Pacific/Rarotonga"),
    TimezoneEntry::new("-09:00", "(GMT-09:00) Alaska Time", "GMT-9", "America/Anchorage"),
    TimezoneEntry::new("-09:00", "(GMT-09:00) Gambier", "GMT-9", "Pacific/Gambier"),
    TimezoneEntry::new("-08:00", "(GMT-08:00) Pacific Time", "GMT-8", "America/Los_Angeles"),
    TimezoneEntry::new("-08:00", "(GMT-08:00) Pacific Time - Tijuana", "GMT-8", "America/Tijuana"),
    TimezoneEntry::new("-08:00", "(GMT-08:00) Pacific Time - Vancouver", "GMT-8", "America/Vancouver"),
    TimezoneEntry::new("-08:00", "(GMT-08:00) Pitcairn", "GMT-8", "Pacific/Pitcairn"),
    TimezoneEntry::new("-07:00", "(GMT-07:00) Mountain Time", "GMT-7", "America/Denver"),
    TimezoneEntry::new("-07:00", "(GMT-07:00) Mountain Time - Arizona", "GMT-7", "America/Phoenix"),
    TimezoneEntry::new("-07:00", "(GMT-07:00) Mountain Time - Chihuahua, Mazatlan", "GMT-7", "America/Mazatlan"),
    TimezoneEntry::new("-07:00", "(GMT-07:00) Mountain Time - Hermosillo", "GMT-7", "America/Hermosillo"),
    TimezoneEntry::new("-06:00", "(GMT-06:00) Central Time", "GMT-6", "America/Chicago"),
    TimezoneEntry::new("-06:00", "(GMT-06:00) Central Time - Mexico City", "GMT-6", "America/Mexico_City"),
    TimezoneEntry::new("-06:00", "(GMT-06:00) Central Time - Regina", "GMT-6", "America/Regina"),
    TimezoneEntry::new("-06:00", "(GMT-06:00) Guatemala", "GMT-6", "America/Guatemala"),
    TimezoneEntry::new("-06:00", "(GMT-06:00) Costa Rica", "GMT-6", "America/Costa_Rica"),
    TimezoneEntry::new("-06:00", "(GMT-06:00) Galapagos", "GMT-6", "Pacific/Galapagos"),
    TimezoneEntry::new("-05:00", "(GMT-05:00) Eastern Time", "GMT-5", "America/New_York"),
    TimezoneEntry::new("-05:00", "(GMT-05:00) Bogota", "GMT-5", "America/Bogota"),
    TimezoneEntry::new("-05:00", "(GMT-05:00) Lima", "GMT-5", "America/Lima"),
    TimezoneEntry::new("-05:00", "(GMT-05:00) Jamaica", "GMT-5", "America/Jamaica"),
    TimezoneEntry::new("-05:00", "(GMT-05:00) Havana", "GMT-5", "America/Havana"),
    TimezoneEntry::new("-04:00", "(GMT-04:00) Atlantic Time - Halifax", "GMT-4", "America/Halifax"),
    TimezoneEntry::new("-04:00", "(GMT-04:00) Caracas", "GMT-4", "America/Caracas"),
    TimezoneEntry::new("-04:00", "(GMT-04:00) Santiago", "GMT-4", "America/Santiago"),
    TimezoneEntry::new("-04:00", "(GMT-04:00) La Paz", "GMT-4", "America/La_Paz"),
    TimezoneEntry::new("-04:00", "(GMT-04:00) Puerto Rico", "GMT-4", "America/Puerto_Rico"),
    TimezoneEntry::new("-04:00", "(GMT-04:00) Bermuda", "GMT-4", "Atlantic/Bermuda"),
    TimezoneEntry::new("-03:00", "(GMT-03:00) Buenos Aires", "GMT-3", "America/Argentina/Buenos_Aires"),
    TimezoneEntry::new("-03:00", "(GMT-03:00) Montevideo", "GMT-3", "America/Montevideo"),
    TimezoneEntry::new("-03:00", "(GMT-03:00) Cayenne", "GMT-3", "America/Cayenne"),
    TimezoneEntry::new("-03:00", "(GMT-03:00) Godthab", "GMT-3", "America/Godthab"),
    TimezoneEntry::new("-03:00", "(GMT-03:00) Stanley", "GMT-3", "Atlantic/Stanley"),
    TimezoneEntry::new("-02:00", "(GMT-02:00) Sao Paulo", "GMT-2", "America/Sao_Paulo"),
    TimezoneEntry::new("-02:00", "(GMT-02:00) South Georgia", "GMT-2", "Atlantic/South_Georgia"),
    TimezoneEntry::new("-02:00", "(GMT-02:00) Noronha", "GMT-2", "America/Noronha"),
    TimezoneEntry::new("-01:00", "(GMT-01:00) Azores", "GMT-1", "Atlantic/Azores"),
    TimezoneEntry::new("-01:00", "(GMT-01:00) Cape Verde", "GMT-1", "Atlantic/Cape_Verde"),
    TimezoneEntry::new("-01:00", "(GMT-01:00) Scoresbysund", "GMT-1", "America/Scoresbysund"),
    TimezoneEntry::new("+00:00", "(GMT+00:00) London", "GMT", "Europe/London"),
    TimezoneEntry::new("+00:00", "(GMT+00:00) Dublin", "GMT", "Europe/Dublin"),
    TimezoneEntry::new("+00:00", "(GMT+00:00) Lisbon", "GMT", "Europe/Lisbon"),
    TimezoneEntry::new("+00:00", "(GMT+00:00) Reykjavik", "GMT", "Atlantic/Reykjavik"),
    TimezoneEntry::new("+00:00", "(GMT+00:00) Casablanca", "GMT", "Africa/Casablanca"),
    TimezoneEntry::new("+00:00", "(GMT+00:00) Accra", "GMT", "Africa/Accra"),
    TimezoneEntry::new("+01:00", "(GMT+01:00) Berlin", "GMT+1", "Europe/Berlin"),
    TimezoneEntry::new("+01:00", "(GMT+01:00) Paris", "GMT+1", "Europe/Paris"),
    TimezoneEntry::new("+01:00", "(GMT+01:00) Amsterdam", "GMT+1", "Europe/Amsterdam"),
    TimezoneEntry::new("+01:00", "(GMT+01:00) Brussels", "GMT+1", "Europe/Brussels"),
    TimezoneEntry::new("+01:00", "(GMT+01:00) Madrid", "GMT+1", "Europe/Madrid"),
    TimezoneEntry::new("+01:00", "(GMT+01:00) Rome", "GMT+1", "Europe/Rome"),
    TimezoneEntry::new("+01:00", "(GMT+01:00) Stockholm", "GMT+1", "Europe/Stockholm"),
    TimezoneEntry::new("+01:00", "(GMT+01:00) Vienna", "GMT+1", "Europe/Vienna"),
    TimezoneEntry::new("+01:00", "(GMT+01:00) Warsaw", "GMT+1", "Europe/Warsaw"),
    TimezoneEntry::new("+01:00", "(GMT+01:00) Budapest", "GMT+1", "Europe/Budapest"),
    TimezoneEntry::new("+01:00", "(GMT+01:00) Lagos", "GMT+1", "Africa/Lagos"),
    TimezoneEntry::new("+01:00", "(GMT+01:00) Algiers", "GMT+1", "Africa/Algiers"),
    TimezoneEntry::new("+02:00", "(GMT+02:00) Helsinki", "GMT+2", "Europe/Helsinki"),
    TimezoneEntry::new("+02:00", "(GMT+02:00) Athens", "GMT+2", "Europe/Athens"),
    TimezoneEntry::new("+02:00", "(GMT+02:00) Bucharest", "GMT+2", "Europe/Bucharest"),
    TimezoneEntry::new("+02:00", "(GMT+02:00) Kiev", "GMT+2", "Europe/Kiev"),
    TimezoneEntry::new("+02:00", "(GMT+02:00) Riga", "GMT+2", "Europe/Riga"),
    TimezoneEntry::new("+02:00", "(GMT+02:00) Jerusalem", "GMT+2", "Asia/Jerusalem"),
    TimezoneEntry::new("+02:00", "(GMT+02:00) Cairo", "GMT+2", "Africa/Cairo"),
    TimezoneEntry::new("+02:00", "(GMT+02:00) Johannesburg", "GMT+2", "Africa/Johannesburg"),
    TimezoneEntry::new("+03:00", "(GMT+03:00) Istanbul", "GMT+3", "Europe/Istanbul"),
    TimezoneEntry::new("+03:00", "(GMT+03:00) Moscow", "GMT+3", "Europe/Moscow"),
    TimezoneEntry::new("+03:00", "(GMT+03:00) Minsk", "GMT+3", "Europe/Minsk"),
    TimezoneEntry::new("+03:00", "(GMT+03:00) Riyadh", "GMT+3", "Asia/Riyadh"),
    TimezoneEntry::new("+03:00", "(GMT+03:00) Baghdad", "GMT+3", "Asia/Baghdad"),
    TimezoneEntry::new("+03:00", "(GMT+03:00) Nairobi", "GMT+3", "Africa/Nairobi"),
    TimezoneEntry::new("+04:00", "(GMT+04:00) Dubai", "GMT+4", "Asia/Dubai"),
    TimezoneEntry::new("+04:00", "(GMT+04:00) Baku", "GMT+4", "Asia/Baku"),
    TimezoneEntry::new("+04:00", "(GMT+04:00) Tbilisi", "GMT+4", "Asia/Tbilisi"),
    TimezoneEntry::new("+04:00", "(GMT+04:00) Yerevan", "GMT+4", "Asia/Yerevan"),
    TimezoneEntry::new("+04:00", "(GMT+04:00) Mauritius", "GMT+4", "Indian/Mauritius"),
    TimezoneEntry::new("+04:30", "(GMT+04:30) Kabul", "GMT+4:30", "Asia/Kabul"),
    TimezoneEntry::new("+05:00", "(GMT+05:00) Maldives", "GMT+5", "Indian/Maldives"),
    TimezoneEntry::new("+05:00", "(GMT+05:00) Karachi", "GMT+5", "Asia/Karachi"),
    TimezoneEntry::new("+05:00", "(GMT+05:00) Tashkent", "GMT+5", "Asia/Tashkent"),
    TimezoneEntry::new("+05:00", "(GMT+05:00) Yekaterinburg", "GMT+5", "Asia/Yekaterinburg"),
    TimezoneEntry::new("+05:30", "(GMT+05:30) India Standard Time", "GMT+5:30", "Asia/Calcutta"),
    TimezoneEntry::new("+05:30", "(GMT+05:30) Colombo", "GMT+5:30", "Asia/Colombo"),
    TimezoneEntry::new("+05:45", "(GMT+05:45) Kathmandu", "GMT+5:45", "Asia/Kathmandu"),
    TimezoneEntry::new("+06:00", "(GMT+06:00) Dhaka", "GMT+6", "Asia/Dhaka"),
    TimezoneEntry::new("+06:00", "(GMT+06:00) Almaty", "GMT+6", "Asia/Almaty"),
    TimezoneEntry::new("+06:00", "(GMT+06:00) Omsk", "GMT+6", "Asia/Omsk"),
    TimezoneEntry::new("+06:30", "(GMT+06:30) Cocos", "GMT+6:30", "Indian/Cocos"),
    TimezoneEntry::new("+06:30", "(GMT+06:30) Rangoon", "GMT+6:30", "Asia/Rangoon"),
    TimezoneEntry::new("+07:00", "(GMT+07:00) Bangkok", "GMT+7", "Asia/Bangkok"),
    TimezoneEntry::new("+07:00", "(GMT+07:00) Jakarta", "GMT+7", "Asia/Jakarta"),
    TimezoneEntry::new("+07:00", "(GMT+07:00) Ho Chi Minh City", "GMT+7", "Asia/Saigon"),
    TimezoneEntry::new("+07:00", "(GMT+07:00) Krasnoyarsk", "GMT+7", "Asia/Krasnoyarsk"),
    TimezoneEntry::new("+08:00", "(GMT+08:00) Hong Kong", "GMT+8", "Asia/Hong_Kong"),
    TimezoneEntry::new("+08:00", "(GMT+08:00) China Time - Beijing", "GMT+8", "Asia/Shanghai"),
    TimezoneEntry::new("+08:00", "(GMT+08:00) Singapore", "GMT+8", "Asia/Singapore"),
    TimezoneEntry::new("+08:00", "(GMT+08:00) Taipei", "GMT+8", "Asia/Taipei"),
    TimezoneEntry::new("+08:00", "(GMT+08:00) Kuala Lumpur", "GMT+8", "Asia/Kuala_Lumpur"),
    TimezoneEntry::new("+08:00", "(GMT+08:00) Manila", "GMT+8", "Asia/Manila"),
    TimezoneEntry::new("+08:00", "(GMT+08:00) Western Time - Perth", "GMT+8", "Australia/Perth"),
    TimezoneEntry::new("+08:00", "(GMT+08:00) Irkutsk", "GMT+8", "Asia/Irkutsk"),
    TimezoneEntry::new("+08:30", "(GMT+08:30) Pyongyang", "GMT+8:30", "Asia/Pyongyang"),
    TimezoneEntry::new("+09:00", "(GMT+09:00) Tokyo", "GMT+9", "Asia/Tokyo"),
    TimezoneEntry::new("+09:00", "(GMT+09:00) Seoul", "GMT+9", "Asia/Seoul"),
    TimezoneEntry::new("+09:00", "(GMT+09:00) Yakutsk", "GMT+9", "Asia/Yakutsk"),
    TimezoneEntry::new("+09:30", "(GMT+09:30) Central Time - Darwin", "GMT+9:30", "Australia/Darwin"),
    TimezoneEntry::new("+10:00", "(GMT+10:00) Eastern Time - Brisbane", "GMT+10", "Australia/Brisbane"),
    TimezoneEntry::new("+10:00", "(GMT+10:00) Guam", "GMT+10", "Pacific/Guam"),
    TimezoneEntry::new("+10:00", "(GMT+10:00) Port Moresby", "GMT+10", "Pacific/Port_Moresby"),
    TimezoneEntry::new("+10:00", "(GMT+10:00) Vladivostok", "GMT+10", "Asia/Vladivostok"),
    TimezoneEntry::new("+10:30", "(GMT+10:30) Central Time - Adelaide", "GMT+10:30", "Australia/Adelaide"),
    TimezoneEntry::new("+11:00", "(GMT+11:00) Eastern Time - Melbourne, Sydney", "GMT+11", "Australia/Sydney"),
    TimezoneEntry::new("+11:00", "(GMT+11:00) Eastern Time - Hobart", "GMT+11", "Australia/Hobart"),
    TimezoneEntry::new("+11:00", "(GMT+11:00) Guadalcanal", "GMT+11", "Pacific/Guadalcanal"),
    TimezoneEntry::new("+11:00", "(GMT+11:00) Noumea", "GMT+11", "Pacific/Noumea"),
    TimezoneEntry::new("+11:00", "(GMT+11:00) Magadan", "GMT+11", "Asia/Magadan"),
    TimezoneEntry::new("+12:00", "(GMT+12:00) Nauru", "GMT+12", "Pacific/Nauru"),
    TimezoneEntry::new("+12:00", "(GMT+12:00) Fiji", "GMT+12", "Pacific/Fiji"),
    TimezoneEntry::new("+12:00", "(GMT+12:00) Majuro", "GMT+12", "Pacific/Majuro"),
    TimezoneEntry::new("+12:00", "(GMT+12:00) Tarawa", "GMT+12", "Pacific/Tarawa"),
    TimezoneEntry::new("+12:00", "(GMT+12:00) Funafuti", "GMT+12", "Pacific/Funafuti"),
    TimezoneEntry::new("+12:00", "(GMT+12:00) Kamchatka", "GMT+12", "Asia/Kamchatka"),
    TimezoneEntry::new("+13:00", "(GMT+13:00) Auckland", "GMT+13", "Pacific/Auckland"),
    TimezoneEntry::new("+13:00", "(GMT+13:00) Apia", "GMT+13", "Pacific/Apia"),
    TimezoneEntry::new("+13:00", "(GMT+13:00) Fakaofo", "GMT+13", "Pacific/Fakaofo"),
    TimezoneEntry::new("+13:00", "(GMT+13:00) Tongatapu", "GMT+13", "Pacific/Tongatapu"),
    TimezoneEntry::new("+14:00", "(GMT+14:00) Kiritimati", "GMT+14", "Pacific/Kiritimati"),
];
