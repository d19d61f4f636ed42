use chrono::{Datelike, Month, NaiveDate};
use num_traits::FromPrimitive;
use std::error;
use std::fmt;

pub const MONTHS_PER_YEAR: u32 = 12;
pub const MONTHS_PER_QUARTER: u32 = 4;
pub const QUARTERS_PER_YEAR: u32 = 3;
pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    InvalidMonthIndex(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidMonthIndex(index) => {
                write!(f, "month index out of range (0..12): {}", index)
            }
        }
    }
}

impl error::Error for Error {}

/// Geometry of a single month grid. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthLayout {
    /// Number of days in the month, 28..=31.
    pub days_in_month: u32,
    /// Weekday of day 1, with 0 = Sunday .. 6 = Saturday.
    pub start_day: u32,
}

pub fn days_of_month(month: &Month, year: i32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month.number_from_month(), 1).unwrap();
    let next = if month.number_from_month() == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month.number_from_month() + 1, 1)
    }
    .unwrap();

    next.signed_duration_since(first).num_days() as u32
}

/// Layout of the month with the given zero-based index in `year`.
pub fn month_layout(year: i32, month_index: u32) -> Result<MonthLayout, Error> {
    if month_index >= MONTHS_PER_YEAR {
        return Err(Error::InvalidMonthIndex(month_index));
    }

    let month = Month::from_u32(month_index + 1).unwrap();
    let first = NaiveDate::from_ymd_opt(year, month_index + 1, 1).unwrap();

    Ok(MonthLayout {
        days_in_month: days_of_month(&month, year),
        start_day: first.weekday().num_days_from_sunday(),
    })
}

/// Lay the days of a month into 7-wide week rows. The first row is padded
/// with `start_day` empty slots, the last row is filled up to length 7.
pub fn build_week_rows(layout: &MonthLayout) -> Vec<[Option<u32>; DAYS_PER_WEEK]> {
    let mut weeks = Vec::with_capacity(6);
    let mut current = [None; DAYS_PER_WEEK];
    let mut slot = layout.start_day as usize;

    for day in 1..=layout.days_in_month {
        current[slot] = Some(day);
        slot += 1;
        if slot == DAYS_PER_WEEK {
            weeks.push(current);
            current = [None; DAYS_PER_WEEK];
            slot = 0;
        }
    }

    if slot > 0 {
        weeks.push(current);
    }

    weeks
}

/// Zero-based quarter containing the given month index.
pub fn quarter_of_month(month_index: u32) -> u32 {
    month_index / MONTHS_PER_QUARTER
}

/// Zero-based month indices covered by the given quarter.
pub fn months_of_quarter(quarter: u32) -> impl Iterator<Item = u32> {
    let first = quarter * MONTHS_PER_QUARTER;
    first..first + MONTHS_PER_QUARTER
}

pub fn quarter_title(quarter: u32) -> &'static str {
    match quarter {
        0 => "Q1: January - April",
        1 => "Q2: May - August",
        _ => "Q3: September - December",
    }
}

pub fn month_name(month_index: u32) -> &'static str {
    match Month::from_u32(month_index + 1) {
        Some(Month::January) => "January",
        Some(Month::February) => "February",
        Some(Month::March) => "March",
        Some(Month::April) => "April",
        Some(Month::May) => "May",
        Some(Month::June) => "June",
        Some(Month::July) => "July",
        Some(Month::August) => "August",
        Some(Month::September) => "September",
        Some(Month::October) => "October",
        Some(Month::November) => "November",
        _ => "December",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lengths_follow_gregorian_rules() {
        // 2026 is a common year.
        assert_eq!(month_layout(2026, 1).unwrap().days_in_month, 28);
        // 2024 is a leap year.
        assert_eq!(month_layout(2024, 1).unwrap().days_in_month, 29);
        // Century rule: 1900 is not a leap year, 2000 is.
        assert_eq!(month_layout(1900, 1).unwrap().days_in_month, 28);
        assert_eq!(month_layout(2000, 1).unwrap().days_in_month, 29);

        assert_eq!(month_layout(2026, 0).unwrap().days_in_month, 31);
        assert_eq!(month_layout(2026, 3).unwrap().days_in_month, 30);
        assert_eq!(month_layout(2026, 11).unwrap().days_in_month, 31);
    }

    #[test]
    fn january_2026_starts_on_a_thursday() {
        let layout = month_layout(2026, 0).unwrap();
        assert_eq!(layout.start_day, 4);
    }

    #[test]
    fn out_of_range_month_index_is_rejected() {
        assert_eq!(month_layout(2026, 12), Err(Error::InvalidMonthIndex(12)));
        assert_eq!(
            month_layout(2026, u32::MAX),
            Err(Error::InvalidMonthIndex(u32::MAX))
        );
    }

    #[test]
    fn week_rows_are_padded_to_seven() {
        for month_index in 0..MONTHS_PER_YEAR {
            let layout = month_layout(2026, month_index).unwrap();
            let rows = build_week_rows(&layout);

            let leading = rows[0].iter().take_while(|slot| slot.is_none()).count();
            assert_eq!(leading as u32, layout.start_day);

            let days: Vec<u32> = rows.iter().flatten().filter_map(|slot| *slot).collect();
            assert_eq!(days.len() as u32, layout.days_in_month);
            assert!(days.windows(2).all(|w| w[1] == w[0] + 1));
            assert_eq!(days.first(), Some(&1));
        }
    }

    #[test]
    fn quarters_partition_the_year() {
        assert_eq!(quarter_of_month(0), 0);
        assert_eq!(quarter_of_month(3), 0);
        assert_eq!(quarter_of_month(4), 1);
        assert_eq!(quarter_of_month(11), 2);

        let months: Vec<u32> = (0..QUARTERS_PER_YEAR).flat_map(months_of_quarter).collect();
        assert_eq!(months, (0..MONTHS_PER_YEAR).collect::<Vec<u32>>());
    }
}
