use chrono::NaiveDate;
use serde::Serialize;

use crate::analytics::YearSpan;
use crate::models::Status;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricTile {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub label: String,
    pub count: usize,
}

/// Ring chart of category shares, labelled with counts inside and categories outside
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutChart {
    pub title: String,
    pub field: &'static str,
    pub slices: Vec<Slice>,
}

impl DonutChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|slice| slice.count).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScatterPoint {
    pub assigned_to: String,
    pub component: String,
    pub count: usize,
}

/// Bubble matrix with one categorical axis per dimension, sized by count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterMatrix {
    pub title: String,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub x_order: Vec<String>,
    pub y_order: Vec<String>,
    pub points: Vec<ScatterPoint>,
}

impl ScatterMatrix {
    pub fn max_count(&self) -> usize {
        self.points.iter().map(|point| point.count).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarPoint {
    pub label: String,
    pub count: usize,
}

/// Bars are kept in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub axis_title: &'static str,
    pub bars: Vec<BarPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GanttBar {
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub status: Status,
}

/// Time-range bars, one per project, ordered by start date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GanttChart {
    pub title: String,
    pub bars: Vec<GanttBar>,
}

impl GanttChart {
    /// Earliest start and latest end over all bars
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.bars.iter().map(|bar| bar.start).min()?;
        let last = self.bars.iter().map(|bar| bar.end).max()?;
        Some((first, last))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadioControl {
    pub label: &'static str,
    pub options: Vec<&'static str>,
    pub selected: usize,
}

/// Year slider; `bounds` is `None` when there is nothing to select from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeControl {
    pub label: &'static str,
    pub bounds: Option<YearSpan>,
    pub value: Option<YearSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiSelectControl {
    pub label: &'static str,
    pub options: Vec<&'static str>,
    pub selected: Vec<bool>,
}

/// Append the year span to a chart title when there is one
pub fn with_span(title: &str, span: Option<YearSpan>) -> String {
    match span {
        Some(span) => format!("{title} ({})", span.label()),
        None => title.to_owned(),
    }
}
