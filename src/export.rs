use std::fmt::{self, Write};
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::charts::{DonutChart, Overview, Timeline};
use crate::dashboard::DashboardState;
use crate::error::{DashError, Result};

#[derive(Serialize)]
struct ChartExport<'a> {
    overview: &'a Overview,
    timeline: &'a Timeline,
}

/// Chart descriptions for the current dashboard state as pretty JSON
pub fn to_json(state: &DashboardState) -> Result<String> {
    let export = ChartExport {
        overview: state.overview(),
        timeline: state.timeline(),
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

pub fn write_json(state: &DashboardState, path: &Path) -> Result<()> {
    let json = to_json(state)?;
    fs::write(path, json).map_err(|source| DashError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), "chart descriptions exported");
    Ok(())
}

/// Plain-text report of the metric tiles and distributions
pub fn summary_text(overview: &Overview) -> String {
    let mut out = String::new();
    // Writing into a String never fails
    write_summary(&mut out, overview).ok();
    out
}

fn write_summary(out: &mut impl Write, overview: &Overview) -> fmt::Result {
    writeln!(out, "Project Management Dashboard")?;
    for tile in &overview.tiles {
        writeln!(out, "  {:<18}{}", tile.label, tile.value)?;
    }

    for chart in [&overview.priority, &overview.status] {
        write_distribution(out, chart)?;
    }

    for chart in [&overview.by_assignee, &overview.by_component] {
        writeln!(out)?;
        writeln!(out, "Projects by {}", chart.axis_title)?;
        for bar in &chart.bars {
            writeln!(out, "  {:<18}{}", bar.label, bar.count)?;
        }
    }

    Ok(())
}

fn write_distribution(out: &mut impl Write, chart: &DonutChart) -> fmt::Result {
    let total = chart.total();

    writeln!(out)?;
    writeln!(out, "{}", chart.title)?;
    for slice in &chart.slices {
        let share = if total == 0 {
            0.0
        } else {
            slice.count as f64 * 100.0 / total as f64
        };
        writeln!(out, "  {:<18}{:>4}  {:>5.1}%", slice.label, slice.count, share)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::record;
    use crate::models::{Priority, Status};

    fn state() -> DashboardState {
        DashboardState::new(vec![
            record("A", "2020-01-01", "2020-01-11", Status::Ongoing, Priority::High, 10.0),
            record("B", "2020-02-01", "2021-02-21", Status::Completed, Priority::Low, 20.0),
        ])
    }

    #[test]
    fn json_has_overview_and_timeline() {
        let json = to_json(&state()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["overview"]["summary"]["total_projects"], 2);
        assert_eq!(value["overview"]["priority"]["field"], "Priority");
        assert_eq!(value["timeline"]["gantt"]["bars"][0]["title"], "A");
        assert_eq!(value["timeline"]["gantt"]["bars"][1]["start"], "2020-02-01");
        assert_eq!(value["timeline"]["years"]["bounds"]["first"], 2020);
    }

    #[test]
    fn summary_lists_tiles_and_shares() {
        let text = summary_text(state().overview());

        assert!(text.contains("Total Projects    2"));
        assert!(text.contains("Average Duration  15 days"));
        assert!(text.contains("Projects Distribution by Status (2020-2021)"));
        assert!(text.contains(" 50.0%"));
    }

    #[test]
    fn summary_lists_bar_sections_in_order() {
        let text = summary_text(state().overview());

        let assignees = text.find("Projects by Responsible\n  Ana               2\n").unwrap();
        let components = text
            .find("Projects by Project Components\n  Backend           2\n")
            .unwrap();
        assert!(text.starts_with("Project Management Dashboard\n"));
        assert!(assignees < components);
        assert!(text.ends_with("Backend           2\n"));
    }
}
