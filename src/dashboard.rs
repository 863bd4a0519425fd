use tracing::debug;

use crate::analytics::{FilterState, StatusFilter, YearSpan};
use crate::charts::{Overview, Timeline};
use crate::models::{Priority, ProjectRecord};

/// Which end of the year slider the arrow keys move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearHandle {
    First,
    Last,
}

/// Loaded table plus everything derived from it.
///
/// The overview never changes after construction. Control changes go through
/// the setters below, which rebuild only the timeline.
pub struct DashboardState {
    records: Vec<ProjectRecord>,
    overview: Overview,
    filter: FilterState,
    timeline: Timeline,
}

impl DashboardState {
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        let overview = Overview::build(&records);
        let filter = FilterState::default();
        let timeline = Timeline::build(&records, &filter);

        Self {
            records,
            overview,
            filter,
            timeline,
        }
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn overview(&self) -> &Overview {
        &self.overview
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.filter.set_status(status);
        self.refresh();
    }

    pub fn toggle_priority(&mut self, priority: Priority) {
        self.filter.toggle_priority(priority);
        self.refresh();
    }

    /// Move one slider handle by `delta` years. Ignored while the slider has no bounds.
    pub fn shift_year(&mut self, handle: YearHandle, delta: i32) {
        let (Some(bounds), Some(current)) = (self.timeline.years.bounds, self.timeline.years.value)
        else {
            return;
        };

        let range = match handle {
            YearHandle::First => {
                let first = (current.first + delta).clamp(bounds.first, current.last);
                YearSpan::new(first, current.last)
            }
            YearHandle::Last => {
                let last = (current.last + delta).clamp(current.first, bounds.last);
                YearSpan::new(current.first, last)
            }
        };

        if range != current {
            self.filter.years = Some(range);
            self.refresh();
        }
    }

    fn refresh(&mut self) {
        self.timeline = Timeline::build(&self.records, &self.filter);
        debug!(
            status = %self.filter.status,
            years = ?self.timeline.years.value,
            rows = self.timeline.gantt.bars.len(),
            "timeline rebuilt"
        );
    }
}
