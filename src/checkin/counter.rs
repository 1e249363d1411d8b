//! Lazily reset daily occupancy counter
//!
//! A lesson's counter is only meaningful for the day it was last touched.
//! There is no midnight job: the first admitted check-in of a new day sees a
//! stale date and starts over at 1. Occupancy never decreases within a day,
//! since there is no check-out.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stored `(count, date)` pair of a lesson's occupancy counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    pub count: i32,
    pub date: Option<NaiveDate>,
}

impl CounterState {
    /// A counter that has never recorded a check-in
    pub const EMPTY: CounterState = CounterState { count: 0, date: None };

    pub fn new(count: i32, date: Option<NaiveDate>) -> Self {
        Self { count, date }
    }

    /// Whether the stored count belongs to a day other than `today`
    pub fn is_stale(&self, today: NaiveDate) -> bool {
        self.date != Some(today)
    }

    /// State after one admitted check-in on `today`
    pub fn advance(self, today: NaiveDate) -> CounterState {
        if self.is_stale(today) {
            return CounterState {
                count: 1,
                date: Some(today),
            };
        }

        CounterState {
            count: self.count.max(0).saturating_add(1),
            date: Some(today),
        }
    }
}

impl Default for CounterState {
    fn default() -> Self {
        Self::EMPTY
    }
}
