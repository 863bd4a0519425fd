use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::summary::YearSpan;
use crate::models::{Priority, ProjectRecord, Status};

/// Three-way status radio on the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum StatusFilter {
    #[default]
    All,
    Ongoing,
    Completed,
}

impl StatusFilter {
    pub const OPTIONS: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Ongoing,
        StatusFilter::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Ongoing => "Ongoing",
            StatusFilter::Completed => "Completed",
        }
    }

    /// "Ongoing" also covers delayed projects
    pub fn admits(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Ongoing => status.is_open(),
            StatusFilter::Completed => status == Status::Completed,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Ongoing,
            StatusFilter::Ongoing => StatusFilter::Completed,
            StatusFilter::Completed => StatusFilter::All,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Completed,
            StatusFilter::Ongoing => StatusFilter::All,
            StatusFilter::Completed => StatusFilter::Ongoing,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current values of the timeline controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub status: StatusFilter,
    /// `None` selects the full slider bounds
    pub years: Option<YearSpan>,
    pub priorities: BTreeSet<Priority>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            years: None,
            priorities: Priority::ALL.into_iter().collect(),
        }
    }
}

impl FilterState {
    /// Changing the status moves the slider bounds, so the chosen range is dropped
    pub fn set_status(&mut self, status: StatusFilter) {
        if self.status != status {
            self.status = status;
            self.years = None;
        }
    }

    pub fn toggle_priority(&mut self, priority: Priority) {
        if !self.priorities.remove(&priority) {
            self.priorities.insert(priority);
        }
    }
}

/// Result of running the filter chain over the full table
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    pub rows: Vec<ProjectRecord>,
    /// Year span of the status-filtered rows, `None` when nothing survives the status filter
    pub bounds: Option<YearSpan>,
    /// Range actually applied, clamped to `bounds`
    pub years: Option<YearSpan>,
}

/// Status first, then slider bounds from what is left, then year range, then priority
pub fn apply(records: &[ProjectRecord], filter: &FilterState) -> FilteredView {
    let by_status: Vec<&ProjectRecord> = records
        .iter()
        .filter(|record| filter.status.admits(record.status))
        .collect();

    let bounds = YearSpan::from_records_iter(by_status.iter().copied());
    let years = bounds.map(|bounds| match filter.years {
        Some(range) => bounds.clamp(range),
        None => bounds,
    });

    let rows = by_status
        .into_iter()
        .filter(|record| match years {
            Some(range) => record.start_year() >= range.first && record.end_year() <= range.last,
            None => false,
        })
        .filter(|record| filter.priorities.contains(&record.priority))
        .cloned()
        .collect();

    FilteredView {
        rows,
        bounds,
        years,
    }
}
