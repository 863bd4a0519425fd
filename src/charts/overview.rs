use serde::Serialize;

use super::model::{
    with_span, BarChart, BarPoint, DonutChart, MetricTile, ScatterMatrix, ScatterPoint, Slice,
};
use crate::analytics::groups::{self, Count};
use crate::analytics::{Summary, YearSpan};
use crate::models::ProjectRecord;

/// Everything on the overview tab, derived once from the full table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub summary: Summary,
    pub span: Option<YearSpan>,
    pub tiles: Vec<MetricTile>,
    pub priority: DonutChart,
    pub status: DonutChart,
    pub assignments: ScatterMatrix,
    pub by_assignee: BarChart,
    pub by_component: BarChart,
}

impl Overview {
    pub fn build(records: &[ProjectRecord]) -> Self {
        let summary = Summary::from_records(records);
        let span = YearSpan::from_records(records);
        let projects = groups::per_project(records);

        let priority = DonutChart {
            title: with_span("Projects Distribution by Priority", span),
            field: "Priority",
            slices: slices(groups::priority_counts(&projects)),
        };
        let status = DonutChart {
            title: with_span("Projects Distribution by Status", span),
            field: "Status",
            slices: slices(groups::status_counts(&projects)),
        };

        let assignee_counts = groups::assignee_counts(records);
        let component_counts = groups::component_counts(records);
        let assignee_order = groups::sort_order(&assignee_counts);
        let component_order = groups::sort_order(&component_counts);

        let assignments = ScatterMatrix {
            title: with_span(
                "Distribution of Projects by Responsible Individuals and Project Components",
                span,
            ),
            x_title: "Responsible",
            y_title: "Project Components",
            points: groups::assignment_counts(records)
                .into_iter()
                .map(|assignment| ScatterPoint {
                    assigned_to: assignment.assigned_to,
                    component: assignment.component,
                    count: assignment.count,
                })
                .collect(),
            x_order: assignee_order.clone(),
            y_order: component_order.clone(),
        };

        Self {
            tiles: metric_tiles(&summary),
            summary,
            span,
            priority,
            status,
            assignments,
            by_assignee: BarChart {
                axis_title: "Responsible",
                bars: ordered_bars(&assignee_counts, &assignee_order),
            },
            by_component: BarChart {
                axis_title: "Project Components",
                bars: ordered_bars(&component_counts, &component_order),
            },
        }
    }
}

pub fn metric_tiles(summary: &Summary) -> Vec<MetricTile> {
    vec![
        MetricTile {
            label: "Total Projects",
            value: summary.total_projects.to_string(),
        },
        MetricTile {
            label: "Delayed Projects",
            value: summary.delayed_rows.to_string(),
        },
        MetricTile {
            label: "Average Duration",
            value: days(summary.average_duration),
        },
        MetricTile {
            label: "Median Duration",
            value: days(summary.median_duration),
        },
    ]
}

/// Whole days, truncated toward zero
fn days(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{} days", value.trunc() as i64),
        None => "n/a".to_owned(),
    }
}

fn slices<K: ToString>(counts: Vec<Count<K>>) -> Vec<Slice> {
    counts
        .into_iter()
        .map(|count| Slice {
            label: count.key.to_string(),
            count: count.count,
        })
        .collect()
}

fn ordered_bars(counts: &[Count<String>], order: &[String]) -> Vec<BarPoint> {
    order
        .iter()
        .filter_map(|label| {
            counts.iter().find(|count| &count.key == label).map(|count| BarPoint {
                label: label.clone(),
                count: count.count,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{assigned, record};
    use crate::models::{Priority, Status};

    #[test]
    fn titles_carry_full_year_span() {
        let records = vec![
            record("A", "2019-01-01", "2020-01-01", Status::Ongoing, Priority::High, 10.0),
            record("B", "2021-01-01", "2023-01-01", Status::Delayed, Priority::Low, 20.0),
        ];

        let overview = Overview::build(&records);

        assert_eq!(overview.priority.title, "Projects Distribution by Priority (2019-2023)");
        assert_eq!(overview.status.title, "Projects Distribution by Status (2019-2023)");
        assert!(overview.assignments.title.ends_with("(2019-2023)"));
    }

    #[test]
    fn metric_tiles_format_whole_days() {
        let records = vec![
            record("A", "2020-01-01", "2020-01-11", Status::Ongoing, Priority::High, 10.0),
            record("B", "2020-01-01", "2020-01-11", Status::Delayed, Priority::High, 15.0),
        ];

        let tiles = Overview::build(&records).tiles;

        let values: Vec<&str> = tiles.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, ["2", "1", "12 days", "12 days"]);
    }

    #[test]
    fn empty_table_builds_empty_overview() {
        let overview = Overview::build(&[]);

        assert_eq!(overview.span, None);
        assert_eq!(overview.priority.title, "Projects Distribution by Priority");
        assert_eq!(overview.priority.total(), 0);
        assert_eq!(overview.tiles[2].value, "n/a");
        assert!(overview.by_assignee.bars.is_empty());
    }

    #[test]
    fn bars_follow_descending_order() {
        let records = vec![
            assigned("A", "Zed", "Docs", Status::Ongoing, Priority::High),
            assigned("B", "Zed", "Api", Status::Ongoing, Priority::High),
            assigned("C", "Amy", "Api", Status::Ongoing, Priority::High),
        ];

        let overview = Overview::build(&records);

        let labels: Vec<&str> = overview.by_assignee.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Zed", "Amy"]);
        assert_eq!(overview.assignments.y_order, ["Api", "Docs"]);
        assert_eq!(overview.assignments.max_count(), 1);
    }
}
