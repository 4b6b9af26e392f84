use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

/// Check whether two half-open intervals [start1, end1) and [start2, end2) overlap.
/// Touching endpoints do not count as an overlap.
pub fn intervals_overlap(
    start1: DateTime<Utc>,
    end1: DateTime<Utc>,
    start2: DateTime<Utc>,
    end2: DateTime<Utc>,
) -> bool {
    start1 < end2 && start2 < end1
}

/// Expand an interval by `minutes` on both ends.
pub fn pad_interval(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    minutes: i32,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let padding = Duration::minutes(minutes as i64);
    (start - padding, end + padding)
}

/// Resolve a wall-clock time on `date` in `timezone` to an absolute instant.
///
/// Ambiguous local times (DST fold) resolve to the earlier instant. Local
/// times that do not exist in the zone (DST gap) resolve to `None`.
pub fn local_datetime_to_utc(date: NaiveDate, time: NaiveTime, timezone: Tz) -> Option<DateTime<Utc>> {
    timezone
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

/// Day-of-week index for a date: 0 = Sunday through 6 = Saturday.
pub fn day_of_week_index(date: NaiveDate) -> usize {
    match date.weekday() {
        Weekday::Sun => 0,
        Weekday::Mon => 1,
        Weekday::Tue => 2,
        Weekday::Wed => 3,
        Weekday::Thu => 4,
        Weekday::Fri => 5,
        Weekday::Sat => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::New_York;
    use chrono_tz::Europe::Paris;
    use chrono_tz::UTC;

    fn utc(h: u32, m: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn test_overlapping_intervals() {
        assert!(intervals_overlap(utc(9, 0), utc(10, 0), utc(9, 30), utc(10, 30)));
        assert!(intervals_overlap(utc(9, 0), utc(10, 0), utc(9, 15), utc(9, 45)));
    }

    #[test]
    fn test_touching_endpoints_do_not_overlap() {
        assert!(!intervals_overlap(utc(9, 0), utc(10, 0), utc(10, 0), utc(11, 0)));
        assert!(!intervals_overlap(utc(10, 0), utc(11, 0), utc(9, 0), utc(10, 0)));
    }

    #[test]
    fn test_disjoint_intervals_do_not_overlap() {
        assert!(!intervals_overlap(utc(9, 0), utc(9, 30), utc(11, 0), utc(11, 30)));
    }

    #[test]
    fn test_pad_interval_expands_both_ends() {
        let (start, end) = pad_interval(utc(10, 0), utc(10, 30), 15);
        assert_eq!(start, utc(9, 45));
        assert_eq!(end, utc(10, 45));
    }

    #[test]
    fn test_pad_interval_zero_is_identity() {
        let (start, end) = pad_interval(utc(10, 0), utc(10, 30), 0);
        assert_eq!(start, utc(10, 0));
        assert_eq!(end, utc(10, 30));
    }

    #[test]
    fn test_local_datetime_to_utc_offsets_by_zone() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();

        let in_utc = local_datetime_to_utc(date, nine, UTC).unwrap();
        assert_eq!(in_utc, utc(9, 0));

        // Paris is UTC+2 in June
        let in_paris = local_datetime_to_utc(date, nine, Paris).unwrap();
        assert_eq!(in_paris, utc(7, 0));
    }

    #[test]
    fn test_local_datetime_in_dst_gap_is_none() {
        // 2:30 AM on the US spring-forward date does not exist
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let gap = NaiveTime::from_hms_opt(2, 30, 0).unwrap();
        assert_eq!(local_datetime_to_utc(date, gap, New_York), None);
    }

    #[test]
    fn test_day_of_week_index() {
        // 2025-06-08 is a Sunday
        assert_eq!(day_of_week_index(NaiveDate::from_ymd_opt(2025, 6, 8).unwrap()), 0);
        assert_eq!(day_of_week_index(NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()), 2);
        assert_eq!(day_of_week_index(NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()), 6);
    }
}
