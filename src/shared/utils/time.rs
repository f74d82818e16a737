//! All timestamps in the core are pinned to JST (UTC+9).

use chrono::{DateTime, FixedOffset, Utc};

const JST_OFFSET_SECS: i32 = 9 * 3600;

pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECS).expect("UTC+9 is a valid fixed offset")
}

/// Current time in JST.
pub fn now_jst() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&jst())
}

/// Normalizes an arbitrary-offset datetime to JST without changing the
/// instant it denotes.
pub fn to_jst(value: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    value.with_timezone(&jst())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn now_is_reported_in_jst() {
        assert_eq!(now_jst().offset(), &jst());
    }

    #[test]
    fn to_jst_keeps_the_instant() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let original = utc.with_ymd_and_hms(2024, 3, 1, 15, 0, 0).unwrap();
        let normalized = to_jst(original);

        assert_eq!(normalized.offset(), &jst());
        assert_eq!(normalized, original);
        assert_eq!(normalized.naive_local().to_string(), "2024-03-02 00:00:00");
    }
}
