//! World clock for the Dungeon action core.
//!
//! The clock is the single source of truth for simulated time. It stores a
//! calendar date-time and derives the part of the day from it on demand;
//! the part of the day is never stored independently.
//!
//! Only the [`TimeGate`](crate::gate::TimeGate) calls [`WorldClock::advance`].

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use dungeon_types::PartOfDay;

/// Seconds in one simulated hour.
pub const SECONDS_PER_HOUR: u64 = 3600;

/// Errors that can occur during clock operations.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// A caller asked to advance time by zero seconds.
    #[error("time advancement must be at least one second")]
    ZeroDuration,

    /// The date would leave the range `chrono` can represent.
    #[error("clock overflow: cannot advance {seconds} seconds past {now}")]
    Overflow {
        /// The time before the failed advance.
        now: NaiveDateTime,
        /// The requested advance.
        seconds: u64,
    },
}

/// Simulated calendar time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldClock {
    /// Current world time.
    now: NaiveDateTime,
}

impl WorldClock {
    /// A clock reading `start`.
    pub const fn new(start: NaiveDateTime) -> Self {
        Self { now: start }
    }

    /// Current world time.
    pub const fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// The part of the day the clock is in.
    pub fn part_of_day(&self) -> PartOfDay {
        PartOfDay::from_hour(self.now.hour())
    }

    /// Move forward by `seconds`. Returns the new time.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::ZeroDuration`] for a zero advance and
    /// [`ClockError::Overflow`] if the result is not representable.
    pub fn advance(&mut self, seconds: u64) -> Result<NaiveDateTime, ClockError> {
        if seconds == 0 {
            return Err(ClockError::ZeroDuration);
        }
        let overflow = ClockError::Overflow {
            now: self.now,
            seconds,
        };
        let delta = i64::try_from(seconds)
            .ok()
            .and_then(TimeDelta::try_seconds);
        let Some(delta) = delta else {
            return Err(overflow);
        };
        self.now = self.now.checked_add_signed(delta).ok_or(overflow)?;
        Ok(self.now)
    }

    /// Seconds until the next start of `part`, strictly after now.
    ///
    /// Standing exactly at the start of `part` yields a full day.
    pub fn seconds_to_next(&self, part: PartOfDay) -> u64 {
        seconds_to_next(self.now, part)
    }
}

/// Seconds from `now` until the next start of `part`, strictly after `now`.
pub fn seconds_to_next(now: NaiveDateTime, part: PartOfDay) -> u64 {
    let start = NaiveTime::from_hms_opt(part.start_hour(), 0, 0).unwrap_or(NaiveTime::MIN);
    let today = now.date().and_time(start);
    let target = if today > now {
        Some(today)
    } else {
        now.date().succ_opt().map(|tomorrow| tomorrow.and_time(start))
    };
    target
        .and_then(|target| u64::try_from(target.signed_duration_since(now).num_seconds()).ok())
        .unwrap_or(0)
}

/// Calendar date used when no start date is configured.
pub fn default_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2055, 6, 2)
        .and_then(|date| date.and_hms_opt(6, 0, 0))
        .unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2055, 6, 2)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn advance_moves_forward_exactly() {
        let mut clock = WorldClock::new(at(6, 0));
        let before = clock.now();
        let after = clock.advance(90).unwrap();
        assert_eq!(after.signed_duration_since(before).num_seconds(), 90);
        assert_eq!(clock.now(), after);
    }

    #[test]
    fn zero_advance_is_rejected() {
        let mut clock = WorldClock::new(at(6, 0));
        assert!(matches!(clock.advance(0), Err(ClockError::ZeroDuration)));
        assert_eq!(clock.now(), at(6, 0));
    }

    #[test]
    fn huge_advance_overflows_without_moving() {
        let mut clock = WorldClock::new(at(6, 0));
        assert!(matches!(clock.advance(u64::MAX), Err(ClockError::Overflow { .. })));
        assert_eq!(clock.now(), at(6, 0));
    }

    #[test]
    fn part_of_day_follows_the_hour() {
        let mut clock = WorldClock::new(at(4, 59));
        assert_eq!(clock.part_of_day(), PartOfDay::Night);
        clock.advance(60).unwrap();
        assert_eq!(clock.part_of_day(), PartOfDay::Dawn);
    }

    #[test]
    fn seconds_to_next_dawn() {
        assert_eq!(seconds_to_next(at(0, 0), PartOfDay::Dawn), 18_000);
        assert_eq!(seconds_to_next(at(19, 0), PartOfDay::Dawn), 36_000);
        assert_eq!(seconds_to_next(at(5, 0), PartOfDay::Dawn), 86_400);
        assert_eq!(seconds_to_next(at(23, 30), PartOfDay::Midnight), 1_800);
    }
}
