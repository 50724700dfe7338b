//! # Tariff Module
//!
//! Converts an entry/exit interval into a cost under the facility's
//! piecewise hourly tariff.
//!
//! ## How Billing Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Segment Walk (Tue 15:30 - 17:30)                    │
//! │                                                                         │
//! │  15:30        16:00              17:00              17:30               │
//! │    │────────────│──────────────────│──────────────────│                │
//! │    │  segment 1 │     segment 2    │     segment 3    │                │
//! │    │  day rate  │   evening rate   │   evening rate   │                │
//! │    │  30 min →  │   60 min →       │   30 min →       │                │
//! │    │  1 billed  │   1 billed hour  │   1 billed hour  │                │
//! │    │  hour      │                  │                  │                │
//! │    │  10.00 zł  │   14.00 zł       │   14.00 zł       │  = 38.00 zł   │
//! │                                                                         │
//! │  Each hour-aligned segment is INDEPENDENTLY rounded up to a full       │
//! │  billed hour and priced at its own rate. A stay spanning a rate        │
//! │  change pays the new rate for the entire started hour - the charge     │
//! │  is never pro-rated by the minute.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rate Selection (per segment start)
//! 1. Saturday or Sunday → weekend rate, unconditionally
//! 2. Hour-of-day in [8, 16) → day rate
//! 3. Otherwise → evening rate
//!
//! All timestamps are naive wall-clock values in the facility's single
//! local calendar. No timezone conversion happens anywhere.

use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Default Rates
// =============================================================================

/// Default weekday daytime rate (08:00-16:00), per billed hour.
pub const DEFAULT_DAY_RATE: Money = Money::from_zloty(10);

/// Default weekday evening/night rate, per billed hour.
pub const DEFAULT_EVENING_RATE: Money = Money::from_zloty(14);

/// Default weekend rate, per billed hour, any hour of day.
pub const DEFAULT_WEEKEND_RATE: Money = Money::from_zloty(16);

/// First hour-of-day billed at the day rate (inclusive).
const DAY_RATE_FROM_HOUR: u32 = 8;

/// First hour-of-day no longer billed at the day rate (exclusive bound).
const DAY_RATE_UNTIL_HOUR: u32 = 16;

// =============================================================================
// Tariff
// =============================================================================

/// The facility's hourly price list.
///
/// Rates are configuration, not hard-coded business meaning: a deployment
/// can load different values and every calculation goes through the same
/// segment walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    /// Weekday rate for segments starting between 08:00 and 15:59.
    pub day: Money,
    /// Weekday rate for all other segment starts.
    pub evening: Money,
    /// Saturday/Sunday rate, overrides both of the above.
    pub weekend: Money,
}

impl Default for Tariff {
    fn default() -> Self {
        Tariff {
            day: DEFAULT_DAY_RATE,
            evening: DEFAULT_EVENING_RATE,
            weekend: DEFAULT_WEEKEND_RATE,
        }
    }
}

impl Tariff {
    /// Creates a tariff with explicit rates.
    pub const fn new(day: Money, evening: Money, weekend: Money) -> Self {
        Tariff {
            day,
            evening,
            weekend,
        }
    }

    /// Computes the cost of a stay from `entry` to `exit`.
    ///
    /// ## Algorithm
    /// Walks the interval in hour-aligned segments starting at `entry`.
    /// Each segment ends at the earlier of the next wall-clock hour
    /// boundary and `exit`, is billed at the rate in force at its start,
    /// and any partial segment is rounded up to a full billed hour.
    ///
    /// ## Errors
    /// `CoreError::InvalidInterval` if `exit <= entry`.
    ///
    /// ## Example
    /// ```rust
    /// use aquapass_core::tariff::Tariff;
    /// use chrono::NaiveDate;
    ///
    /// let entry = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap().and_hms_opt(10, 0, 0).unwrap();
    /// let exit = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap().and_hms_opt(11, 0, 0).unwrap();
    ///
    /// // One weekday daytime hour at the default tariff
    /// let cost = Tariff::default().cost(entry, exit).unwrap();
    /// assert_eq!(cost.cents(), 1000);
    /// ```
    pub fn cost(&self, entry: NaiveDateTime, exit: NaiveDateTime) -> CoreResult<Money> {
        if exit <= entry {
            return Err(CoreError::InvalidInterval { entry, exit });
        }

        let mut total = Money::zero();
        let mut current = entry;

        while current < exit {
            let rate = self.rate_at(current);
            let segment_end = next_hour_boundary(current).min(exit);

            total += rate * billed_hours(current, segment_end);
            current = segment_end;
        }

        Ok(total)
    }

    /// Returns the rate in force at a given wall-clock instant.
    ///
    /// Weekend takes precedence over the hour-of-day bands: a Saturday
    /// noon segment bills the weekend rate, not the day rate.
    pub fn rate_at(&self, at: NaiveDateTime) -> Money {
        if is_weekend(at) {
            self.weekend
        } else if (DAY_RATE_FROM_HOUR..DAY_RATE_UNTIL_HOUR).contains(&at.hour()) {
            self.day
        } else {
            self.evening
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Whether the calendar day of `at` is Saturday or Sunday.
fn is_weekend(at: NaiveDateTime) -> bool {
    matches!(at.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns the next wall-clock hour boundary strictly after `at`.
///
/// `10:17:30` → `11:00:00`, and an exact boundary advances a full hour:
/// `10:00:00` → `11:00:00`. Wall-clock timestamps carry fractional
/// seconds; those are consumed too, so the boundary lands exactly on
/// `:00:00.0` and a rate change inside the entry's sub-second fraction
/// is never skipped.
fn next_hour_boundary(at: NaiveDateTime) -> NaiveDateTime {
    let into_hour = TimeDelta::seconds(i64::from(at.minute()) * 60 + i64::from(at.second()))
        + TimeDelta::nanoseconds(i64::from(at.nanosecond()));
    at + (TimeDelta::hours(1) - into_hour)
}

/// Number of billed hours for an interval: any partial hour counts as a
/// full hour, exact whole hours bill exactly. A sub-second remainder is
/// a started hour like any other partial one.
///
/// Used both per segment inside the tariff walk and for the "stay length"
/// line on the visit summary.
pub fn billed_hours(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    let stay = (to - from).max(TimeDelta::zero());
    let seconds = stay.num_seconds();
    let started_hour = seconds % 3600 > 0 || stay.subsec_nanos() > 0;
    seconds / 3600 + i64::from(started_hour)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    // 2025-01-07 is a Tuesday, 2025-01-11 a Saturday.

    #[test]
    fn test_one_weekday_day_hour() {
        let cost = Tariff::default()
            .cost(dt(2025, 1, 7, 10, 0), dt(2025, 1, 7, 11, 0))
            .unwrap();
        assert_eq!(cost, Money::from_zloty(10));
    }

    #[test]
    fn test_one_weekday_evening_hour() {
        let cost = Tariff::default()
            .cost(dt(2025, 1, 7, 18, 0), dt(2025, 1, 7, 19, 0))
            .unwrap();
        assert_eq!(cost, Money::from_zloty(14));
    }

    #[test]
    fn test_one_weekend_hour_overrides_day_band() {
        // Saturday noon is inside the [8,16) band, but weekend wins.
        let cost = Tariff::default()
            .cost(dt(2025, 1, 11, 12, 0), dt(2025, 1, 11, 13, 0))
            .unwrap();
        assert_eq!(cost, Money::from_zloty(16));
    }

    #[test]
    fn test_rate_boundary_crossing_bills_started_hours() {
        // 15:30-16:00 day (rounded up)       = 10 zł
        // 16:00-17:00 evening                = 14 zł
        // 17:00-17:30 evening (rounded up)   = 14 zł
        let cost = Tariff::default()
            .cost(dt(2025, 1, 7, 15, 30), dt(2025, 1, 7, 17, 30))
            .unwrap();
        assert_eq!(cost, Money::from_zloty(38));
    }

    #[test]
    fn test_overnight_same_rate() {
        // 23:00-00:00 evening = 14 zł, 00:00-01:00 evening = 14 zł
        let cost = Tariff::default()
            .cost(dt(2025, 1, 7, 23, 0), dt(2025, 1, 8, 1, 0))
            .unwrap();
        assert_eq!(cost, Money::from_zloty(28));
    }

    #[test]
    fn test_friday_night_into_saturday() {
        // 23:00-00:00 Friday evening = 14 zł
        // 00:00-01:00 Saturday       = 16 zł (weekend overrides evening)
        let cost = Tariff::default()
            .cost(dt(2025, 1, 10, 23, 0), dt(2025, 1, 11, 1, 0))
            .unwrap();
        assert_eq!(cost, Money::from_zloty(30));
    }

    #[test]
    fn test_partial_first_hour_rounds_up() {
        // A 10-minute dip still bills one full day hour.
        let cost = Tariff::default()
            .cost(dt(2025, 1, 7, 10, 20), dt(2025, 1, 7, 10, 30))
            .unwrap();
        assert_eq!(cost, Money::from_zloty(10));
    }

    #[test]
    fn test_empty_interval_rejected() {
        let at = dt(2025, 1, 7, 10, 0);
        let err = Tariff::default().cost(at, at).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInterval { .. }));
    }

    #[test]
    fn test_reversed_interval_rejected() {
        let err = Tariff::default()
            .cost(dt(2025, 1, 7, 11, 0), dt(2025, 1, 7, 10, 0))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidInterval { .. }));
    }

    #[test]
    fn test_custom_rates_flow_through_walk() {
        let tariff = Tariff::new(
            Money::from_zloty(5),
            Money::from_zloty(7),
            Money::from_zloty(9),
        );
        // Tue 15:30-17:30 → 5 + 7 + 7
        let cost = tariff
            .cost(dt(2025, 1, 7, 15, 30), dt(2025, 1, 7, 17, 30))
            .unwrap();
        assert_eq!(cost, Money::from_zloty(19));
    }

    #[test]
    fn test_subsecond_entry_still_crosses_rate_change() {
        // A terminal clock hands out fractional seconds. The first
        // segment must still end at 16:00:00 sharp, and the 0.2 s
        // spill into the evening band is a started evening hour.
        let entry = NaiveDate::from_ymd_opt(2025, 1, 7)
            .unwrap()
            .and_hms_nano_opt(15, 0, 0, 500_000_000)
            .unwrap();
        let exit = NaiveDate::from_ymd_opt(2025, 1, 7)
            .unwrap()
            .and_hms_nano_opt(16, 0, 0, 200_000_000)
            .unwrap();

        let cost = Tariff::default().cost(entry, exit).unwrap();
        assert_eq!(cost, Money::from_zloty(10 + 14));
    }

    #[test]
    fn test_next_hour_boundary() {
        assert_eq!(
            next_hour_boundary(dt(2025, 1, 7, 10, 17)),
            dt(2025, 1, 7, 11, 0)
        );
        // Exact boundary advances a full hour, matching the walk's
        // expectation that every segment has positive length.
        assert_eq!(
            next_hour_boundary(dt(2025, 1, 7, 10, 0)),
            dt(2025, 1, 7, 11, 0)
        );
        assert_eq!(
            next_hour_boundary(dt(2025, 1, 7, 23, 59)),
            dt(2025, 1, 8, 0, 0)
        );
        // Fractional seconds are consumed; the boundary is exact.
        assert_eq!(
            next_hour_boundary(
                NaiveDate::from_ymd_opt(2025, 1, 7)
                    .unwrap()
                    .and_hms_nano_opt(10, 0, 0, 500_000_000)
                    .unwrap()
            ),
            dt(2025, 1, 7, 11, 0)
        );
    }

    #[test]
    fn test_billed_hours() {
        assert_eq!(billed_hours(dt(2025, 1, 7, 10, 0), dt(2025, 1, 7, 11, 0)), 1);
        assert_eq!(billed_hours(dt(2025, 1, 7, 10, 0), dt(2025, 1, 7, 11, 1)), 2);
        assert_eq!(billed_hours(dt(2025, 1, 7, 10, 0), dt(2025, 1, 7, 13, 0)), 3);
        assert_eq!(billed_hours(dt(2025, 1, 7, 10, 0), dt(2025, 1, 7, 10, 0)), 0);

        // A half-second overhang past a whole hour starts the next one.
        let half_past_eleven = NaiveDate::from_ymd_opt(2025, 1, 7)
            .unwrap()
            .and_hms_nano_opt(11, 0, 0, 500_000_000)
            .unwrap();
        assert_eq!(billed_hours(dt(2025, 1, 7, 10, 0), half_past_eleven), 2);
    }
}
