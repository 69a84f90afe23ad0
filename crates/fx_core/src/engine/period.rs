//! Yun period resolution.
//!
//! The 180-year cycle runs 1864..=2043, nine periods of 20 years each.
//! Dates before the cycle clamp to period 1, dates after it to period 9.

use chrono::{Datelike, NaiveDate};

use crate::models::Period;

/// First year of period 1 (lower Yuan of the reference cycle).
pub const CYCLE_START_YEAR: i32 = 1864;

/// Last year covered before clamping to period 9.
pub const CYCLE_END_YEAR: i32 = 2043;

/// Years per period.
pub const PERIOD_YEARS: i32 = 20;

/// Days on either side of a switch year's Jan 1 that count as boundary-ambiguous.
const BOUNDARY_WINDOW_DAYS: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodResolution {
    pub period: Period,
    /// Date sits within the switch window at the start of a period year.
    pub is_boundary: bool,
}

/// Maps a calendar date onto its Yun period.
///
/// Boundary flagging covers 15 days on either side of the Jan 1 that opens
/// a switch year: early January of the switch year itself, and the trailing
/// days of December just before it. The resolved period is always the one
/// the date's own year falls in; the flag only signals that the adjacent
/// period was a defensible reading.
pub fn resolve_period(date: NaiveDate) -> PeriodResolution {
    let year = date.year();

    let period = if year < CYCLE_START_YEAR {
        1
    } else if year > CYCLE_END_YEAR {
        9
    } else {
        ((year - CYCLE_START_YEAR) / PERIOD_YEARS + 1) as Period
    };

    let is_switch_year = year >= CYCLE_START_YEAR && (year - CYCLE_START_YEAR) % PERIOD_YEARS == 0;
    let opens_switch_year = is_switch_year && date.ordinal() <= BOUNDARY_WINDOW_DAYS + 1;

    let next_is_switch =
        year + 1 >= CYCLE_START_YEAR && (year + 1 - CYCLE_START_YEAR) % PERIOD_YEARS == 0;
    let closes_into_switch = next_is_switch
        && NaiveDate::from_ymd_opt(year + 1, 1, 1)
            .map_or(false, |next_jan1| {
                (next_jan1 - date).num_days() <= i64::from(BOUNDARY_WINDOW_DAYS)
            });

    PeriodResolution {
        period,
        is_boundary: opens_switch_year || closes_into_switch,
    }
}
