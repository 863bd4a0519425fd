use serde::Serialize;

use super::model::{
    with_span, GanttBar, GanttChart, MultiSelectControl, RadioControl, RangeControl,
};
use crate::analytics::{filter, groups, FilterState, StatusFilter, YearSpan};
use crate::models::{Priority, ProjectRecord};

/// Timeline tab for one set of filter values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    pub status: RadioControl,
    pub years: RangeControl,
    pub priorities: MultiSelectControl,
    pub gantt: GanttChart,
}

impl Timeline {
    pub fn build(records: &[ProjectRecord], state: &FilterState) -> Self {
        let view = filter::apply(records, state);

        let status = RadioControl {
            label: "Project Status",
            options: StatusFilter::OPTIONS.iter().map(|option| option.label()).collect(),
            selected: StatusFilter::OPTIONS
                .iter()
                .position(|option| *option == state.status)
                .unwrap_or_default(),
        };

        let priorities = MultiSelectControl {
            label: "Select Priority",
            options: Priority::ALL.iter().map(|priority| priority.as_str()).collect(),
            selected: Priority::ALL
                .iter()
                .map(|priority| state.priorities.contains(priority))
                .collect(),
        };

        Self {
            status,
            years: RangeControl {
                label: "Select Year Range",
                bounds: view.bounds,
                value: view.years,
            },
            priorities,
            gantt: gantt(&view.rows, state.status, view.years),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.gantt.bars.is_empty()
    }
}

/// One bar per project that survived the filters, using its first remaining row
fn gantt(rows: &[ProjectRecord], status: StatusFilter, years: Option<YearSpan>) -> GanttChart {
    let mut bars: Vec<GanttBar> = groups::per_project(rows)
        .into_iter()
        .map(|project| GanttBar {
            title: project.title,
            start: project.start,
            end: project.end,
            status: project.status,
        })
        .collect();
    bars.sort_by_key(|bar| bar.start);

    GanttChart {
        title: with_span(&format!("Gantt Chart of {status} Projects"), years),
        bars,
    }
}
