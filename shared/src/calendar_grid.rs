//! Calendar grid model for the daily statistics view.
//!
//! The grid covers every week that intersects the focus month, Sunday first,
//! so it always has a whole number of 7-day rows and includes trailing days
//! of the previous month and leading days of the next one.

use std::collections::HashMap;

use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::date_format::ToCanonicalDate;
use crate::spending_tier::{SpendingTier, TierThresholds};
use crate::DailyStatisticRecord;

/// Month/year currently shown by the calendar
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarFocusDate {
    pub month: u32,
    pub year: i32,
}

impl Default for CalendarFocusDate {
    fn default() -> Self {
        Self::containing(Local::now().date_naive())
    }
}

impl CalendarFocusDate {
    /// Focus on the month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            year: date.year(),
        }
    }

    pub fn previous(&self) -> Self {
        if self.month <= 1 {
            Self { month: 12, year: self.year - 1 }
        } else {
            Self { month: self.month - 1, year: self.year }
        }
    }

    pub fn next(&self) -> Self {
        if self.month >= 12 {
            Self { month: 1, year: self.year + 1 }
        } else {
            Self { month: self.month + 1, year: self.year }
        }
    }

    /// First day of the month, `None` for an out-of-range month
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Last day of the month, `None` for an out-of-range month
    pub fn last_day(&self) -> Option<NaiveDate> {
        self.first_day()
            .and_then(|_| self.next().first_day())
            .and_then(|next_month| next_month.pred_opt())
    }
}

/// Spending recorded for one day
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DayTotals {
    pub total_amount: f64,
    /// Target of the first record seen for the day
    pub target_amount: f64,
}

impl DayTotals {
    /// Bucket records by canonical date in a single pass.
    ///
    /// Records whose date does not canonicalise still get a bucket, keyed by
    /// the raw value, which no calendar day will ever look up.
    pub fn by_date(records: &[DailyStatisticRecord]) -> HashMap<String, DayTotals> {
        let mut totals: HashMap<String, DayTotals> = HashMap::new();
        for record in records {
            totals
                .entry(record.date.canonical_date())
                .and_modify(|day| day.total_amount += record.amount)
                .or_insert(DayTotals {
                    total_amount: record.amount,
                    target_amount: record.target_amount,
                });
        }
        totals
    }
}

/// A single day in the grid
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub day: u32,
    pub is_today: bool,
    pub is_selected: bool,
    /// Day belongs to the previous or next month
    pub is_outside_month: bool,
    pub totals: DayTotals,
    /// Coin to show, only when the day has a positive target
    pub tier: Option<SpendingTier>,
}

impl CalendarCell {
    pub fn css_class(&self) -> String {
        let mut class = String::from("calendar-day");
        if self.is_today {
            class.push_str(" today");
        }
        if self.is_selected {
            class.push_str(" selected");
        }
        if self.is_outside_month {
            class.push_str(" outside-month");
        }
        class
    }
}

/// Seven consecutive days, Sunday through Saturday
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarWeek {
    pub days: Vec<CalendarCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarGrid {
    pub focus: CalendarFocusDate,
    pub weeks: Vec<CalendarWeek>,
}

impl CalendarGrid {
    /// Build the grid for `focus`, annotating each day from `records`.
    pub fn build(
        focus: CalendarFocusDate,
        records: &[DailyStatisticRecord],
        selected: NaiveDate,
        today: NaiveDate,
        thresholds: &TierThresholds,
    ) -> Self {
        let (Some(month_start), Some(month_end)) = (focus.first_day(), focus.last_day()) else {
            return Self { focus, weeks: Vec::new() };
        };

        let grid_start = start_of_week(month_start);
        let grid_end = end_of_week(month_end);
        let totals_by_date = DayTotals::by_date(records);

        let mut weeks = Vec::new();
        let mut days = Vec::with_capacity(7);
        for date in grid_start.iter_days().take_while(|d| *d <= grid_end) {
            let totals = totals_by_date
                .get(&date.canonical_date())
                .copied()
                .unwrap_or_default();

            days.push(CalendarCell {
                date,
                day: date.day(),
                is_today: date == today,
                is_selected: date == selected,
                is_outside_month: date.month() != focus.month,
                totals,
                tier: thresholds.classify(totals.total_amount, totals.target_amount),
            });

            if days.len() == 7 {
                weeks.push(CalendarWeek { days: std::mem::take(&mut days) });
            }
        }

        Self { focus, weeks }
    }

    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }

    pub fn cell_count(&self) -> usize {
        self.weeks.iter().map(|week| week.days.len()).sum()
    }
}

/// Sunday on or before `date`
fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday();
    date.checked_sub_days(Days::new(offset as u64)).unwrap_or(date)
}

/// Saturday on or after `date`
fn end_of_week(date: NaiveDate) -> NaiveDate {
    let offset = 6 - date.weekday().num_days_from_sunday();
    date.checked_add_days(Days::new(offset as u64)).unwrap_or(date)
}
