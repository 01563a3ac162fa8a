//! # **Minizone** - *Compact Timezone Picker Catalog*
//!
//! A static, hand-curated catalog mapping UTC offsets to readable labels and
//! IANA tz identifiers, based on the conventional options found in timezone
//! dropdowns. It does not follow any complete data set, but every identifier
//! follows the tz format:
//! <https://en.wikipedia.org/wiki/List_of_tz_database_time_zones>.
//!
//! Two constant tables make up the entire catalog:
//! - [`FULL_TIMEZONE_LIST`] carries every curated suggestion, with multiple
//!   options per UTC offset and a compact `short_label` on each row.
//! - [`MINIMAL_TIMEZONE_SET`] carries one favourite per distinct offset.
//!   This is mostly targeted at small, western-focused apps - but every UTC
//!   offset is included.
//!
//! Both tables are ordered ascending by offset and are immutable `'static`
//! data, so they can be read from any thread without synchronisation.
//!
//! ## Example
//! ```rust
//! use minizone::{get_by_tz_code, minimal_list};
//!
//! for entry in minimal_list() {
//!     println!("{} -> {}", entry.tz_code, entry.label);
//! }
//!
//! let berlin = get_by_tz_code("Europe/Berlin").unwrap();
//! assert_eq!(berlin.offset, "+01:00");
//! ```

pub mod enums {
    pub mod error;
}

pub mod structs {
    pub mod entry;
    pub mod offset;
}

pub mod catalog {
    pub mod full;
    pub mod lookup;
    pub mod minimal;
}

pub mod utils;
#[cfg(feature = "time")]
pub mod conversions;

pub use catalog::full::FULL_TIMEZONE_LIST;
pub use catalog::lookup::{
    entries_at_offset, find_by_name, full_list, get_by_tz_code, iter, minimal_for_offset,
    minimal_list,
};
pub use catalog::minimal::MINIMAL_TIMEZONE_SET;
pub use enums::error::MinizoneError;
pub use structs::entry::{MinimalTimezoneEntry, TimezoneEntry};
pub use structs::offset::UtcOffset;
