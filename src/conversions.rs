//! # Conversions Module - *`time` Ecosystem Bridge*
//!
//! Feature-gated conversions between the catalog's [`UtcOffset`] and
//! `time::UtcOffset`, for consumers living in the `time` ecosystem.

use crate::enums::error::MinizoneError;
use crate::structs::offset::UtcOffset;

impl TryFrom<UtcOffset> for time::UtcOffset {
    type Error = time::error::ComponentRange;

    /// Whole-minute conversion. Catalog offsets sit well inside `time`'s
    /// supported range, but the `time` constructor is fallible so the
    /// signature stays honest.
    fn try_from(offset: UtcOffset) -> Result<Self, Self::Error> {
        time::UtcOffset::from_whole_seconds(i32::from(offset.total_minutes()) * 60)
    }
}

impl TryFrom<time::UtcOffset> for UtcOffset {
    type Error = MinizoneError;

    /// Accepts whole-minute offsets inside the catalog window; sub-minute
    /// offsets and anything outside `[-11:00, +14:00]` are rejected.
    fn try_from(offset: time::UtcOffset) -> Result<Self, Self::Error> {
        let seconds = offset.whole_seconds();
        if seconds % 60 != 0 {
            return Err(MinizoneError::MalformedOffset {
                value: offset.to_string(),
                message: Some("sub-minute offsets are not representable".to_string()),
            });
        }
        // `time` offsets are bounded to ±26 hours, so the minute count
        // always fits an i16; range validation happens in `from_minutes`.
        UtcOffset::from_minutes((seconds / 60) as i16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_time() {
        let original: UtcOffset = "+05:30".parse().unwrap();
        let bridged = time::UtcOffset::try_from(original).unwrap();
        assert_eq!(bridged.whole_hours(), 5);
        assert_eq!(UtcOffset::try_from(bridged).unwrap(), original);
    }

    #[test]
    fn test_rejects_sub_minute_offsets() {
        let odd = time::UtcOffset::from_hms(0, 0, 30).unwrap();
        assert!(matches!(
            UtcOffset::try_from(odd),
            Err(MinizoneError::MalformedOffset { .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_window_offsets() {
        let far_west = time::UtcOffset::from_hms(-12, 0, 0).unwrap();
        assert!(matches!(
            UtcOffset::try_from(far_west),
            Err(MinizoneError::OffsetOutOfRange { .. })
        ));
    }
}
