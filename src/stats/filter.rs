use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use itertools::Itertools;

use crate::error::{Result, StatsError};
use crate::model::MatchGroup;

/// An inclusive window of finish times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start > end {
            return Err(StatsError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Whole UTC days from the start of `first` to the last instant of `last`.
    pub fn from_days(first: NaiveDate, last: NaiveDate) -> Result<Self> {
        let start = first.and_time(NaiveTime::MIN).and_utc();
        let end = last
            .and_time(NaiveTime::MIN)
            .and_utc()
            .checked_add_signed(TimeDelta::days(1) - TimeDelta::nanoseconds(1))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self::new(start, end)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Undated matches never fall inside a range.
    pub fn contains(&self, at: Option<DateTime<Utc>>) -> bool {
        at.is_some_and(|at| self.start <= at && at <= self.end)
    }
}

/// Keep only the groups that finished inside `range`, preserving order.
pub fn filter_by_date_range(matches: &[MatchGroup], range: &DateRange) -> Vec<MatchGroup> {
    matches
        .iter()
        .filter(|g| range.contains(g.finished_at()))
        .cloned()
        .collect_vec()
}

/// One page of a longer list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page number.
    pub page: usize,
    pub total_pages: usize,
    /// Index of `items[0]` in the full list.
    pub first_index: usize,
}

/// Slice out page `page` (1-based) of `records_per_page` items.
///
/// Page numbers below 1 are treated as 1 and a page size of 0 as 1. Pages
/// past the end are empty.
pub fn paginate<T>(items: &[T], records_per_page: usize, page: usize) -> Page<'_, T> {
    let per_page = records_per_page.max(1);
    let page = page.max(1);
    let total_pages = items.len().div_ceil(per_page);
    let first_index = (page - 1).saturating_mul(per_page);
    let start = first_index.min(items.len());
    let end = first_index.saturating_add(per_page).min(items.len());
    Page {
        items: &items[start..end],
        page,
        total_pages,
        first_index,
    }
}
