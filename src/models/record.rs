use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::{Priority, Status};

/// One CSV row. A project may span several rows, one per component or assignee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRecord {
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub status: Status,
    pub priority: Priority,
    pub duration: f64,
    pub assigned_to: String,
    pub component: String,
}

impl ProjectRecord {
    pub fn start_year(&self) -> i32 {
        self.start.year()
    }

    pub fn end_year(&self) -> i32 {
        self.end.year()
    }
}

/// First-seen attributes of a project, one per distinct title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub status: Status,
    pub priority: Priority,
}

impl From<&ProjectRecord> for ProjectSummary {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            title: record.title.clone(),
            start: record.start,
            end: record.end,
            status: record.status,
            priority: record.priority,
        }
    }
}
