use chrono::{DateTime, TimeZone, Utc};
use log::warn;

use crate::config;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Days/hours/minutes/seconds left until an instant. Every field pins to zero
/// once the instant has passed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeRemaining {
    pub fn from_secs(delta: u64) -> Self {
        Self {
            days: delta / SECS_PER_DAY,
            hours: (delta / SECS_PER_HOUR) % 24,
            minutes: (delta / SECS_PER_MINUTE) % 60,
            seconds: delta % 60,
        }
    }

    pub fn total_secs(&self) -> u64 {
        self.days * SECS_PER_DAY
            + self.hours * SECS_PER_HOUR
            + self.minutes * SECS_PER_MINUTE
            + self.seconds
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

pub fn compute_remaining(target: DateTime<Utc>, now: DateTime<Utc>) -> TimeRemaining {
    if target <= now {
        return TimeRemaining::default();
    }
    // num_seconds truncates toward zero, and the delta is positive here
    let delta = (target - now).num_seconds().max(0) as u64;
    TimeRemaining::from_secs(delta)
}

/// The moment the event starts, as a UTC instant.
pub fn event_start() -> DateTime<Utc> {
    let (year, month, day, hour, minute) = config::EVENT_START_LOCAL;
    match config::VENUE_TIMEZONE
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
    {
        Some(start) => start.with_timezone(&Utc),
        None => {
            // Only reachable if the constant lands in a DST gap or overlap
            warn!("Event start is ambiguous in {:?}, falling back to UTC", config::VENUE_TIMEZONE);
            Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
                .earliest()
                .unwrap_or_else(Utc::now)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn past_target_is_all_zero() {
        let now = instant();
        assert!(compute_remaining(now, now).is_zero());
        assert!(compute_remaining(now - Duration::seconds(1), now).is_zero());
        assert!(compute_remaining(now - Duration::days(400), now).is_zero());
    }

    #[test]
    fn one_of_each_unit() {
        let now = instant();
        let target = now + Duration::seconds(90061);
        assert_eq!(
            compute_remaining(target, now),
            TimeRemaining { days: 1, hours: 1, minutes: 1, seconds: 1 }
        );
    }

    #[test]
    fn sub_second_remainder_is_truncated() {
        let now = instant();
        let target = now + Duration::milliseconds(59_999);
        assert_eq!(
            compute_remaining(target, now),
            TimeRemaining { days: 0, hours: 0, minutes: 0, seconds: 59 }
        );

        let almost_there = now + Duration::milliseconds(400);
        assert!(compute_remaining(almost_there, now).is_zero());
    }

    #[test]
    fn fields_stay_in_range_and_sum_back() {
        let now = instant();
        for delta in [1u64, 59, 60, 3599, 3600, 86_399, 86_400, 1_000_000, 31_622_399] {
            let left = compute_remaining(now + Duration::seconds(delta as i64), now);
            assert!(left.hours < 24, "hours out of range for {delta}");
            assert!(left.minutes < 60, "minutes out of range for {delta}");
            assert!(left.seconds < 60, "seconds out of range for {delta}");
            assert_eq!(left.total_secs(), delta);
        }
    }

    #[test]
    fn event_starts_at_nine_in_bangalore() {
        let expected = Utc.with_ymd_and_hms(2025, 9, 27, 3, 30, 0).unwrap();
        assert_eq!(event_start(), expected);
    }
}
