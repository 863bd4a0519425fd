use std::collections::HashSet;

use serde::Serialize;

use crate::models::{ProjectRecord, Status};

/// Headline numbers shown in the metric tiles.
///
/// Duration statistics run over raw rows, so a project split across several
/// rows is weighted by its row count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_projects: usize,
    pub delayed_rows: usize,
    pub average_duration: Option<f64>,
    pub median_duration: Option<f64>,
}

impl Summary {
    pub fn from_records(records: &[ProjectRecord]) -> Self {
        let total_projects = records
            .iter()
            .map(|record| record.title.as_str())
            .collect::<HashSet<_>>()
            .len();

        let delayed_rows = records
            .iter()
            .filter(|record| record.status == Status::Delayed)
            .count();

        let durations: Vec<f64> = records.iter().map(|record| record.duration).collect();

        Self {
            total_projects,
            delayed_rows,
            average_duration: mean(&durations),
            median_duration: median(&durations),
        }
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Inclusive range of calendar years touched by any start or end date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearSpan {
    pub first: i32,
    pub last: i32,
}

impl YearSpan {
    pub fn new(first: i32, last: i32) -> Self {
        Self {
            first: first.min(last),
            last: first.max(last),
        }
    }

    /// `None` when there are no records to span
    pub fn from_records(records: &[ProjectRecord]) -> Option<Self> {
        Self::from_records_iter(records)
    }

    pub fn from_records_iter<'a>(
        records: impl IntoIterator<Item = &'a ProjectRecord>,
    ) -> Option<Self> {
        let years = records
            .into_iter()
            .flat_map(|record| [record.start_year(), record.end_year()]);

        years.fold(None, |span, year| match span {
            None => Some(Self::new(year, year)),
            Some(Self { first, last }) => Some(Self::new(first.min(year), last.max(year))),
        })
    }

    /// Restrict `range` to this span, keeping it ordered
    pub fn clamp(&self, range: YearSpan) -> YearSpan {
        let first = range.first.clamp(self.first, self.last);
        let last = range.last.clamp(self.first, self.last);
        YearSpan::new(first, last)
    }

    pub fn label(&self) -> String {
        format!("{}-{}", self.first, self.last)
    }
}
