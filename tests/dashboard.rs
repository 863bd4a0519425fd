use std::collections::BTreeSet;
use std::io::Write;

use pm_dash::analytics::{filter, FilterState, StatusFilter, YearSpan};
use pm_dash::data::load_records;
use pm_dash::models::{Priority, Status};
use pm_dash::{export, DashError, DashboardState};
use tempfile::NamedTempFile;

const CSV: &str = "\
ProjectTitle,Start,End,Status,Priority,Duration,AssignedTo,ProjectComponents
Portal,2021-02-01,2021-09-30,Completed,High,241,Alice,Frontend
Portal,2021-02-01,2021-09-30,Completed,High,241,Brian,Backend
Billing,2022-01-10,2023-03-31,Delayed,High,445,Chen,Backend
Mobile,2022-05-02,2023-01-15,Ongoing,Medium,258,Dana,Mobile
Warehouse,2020-06-01,2021-05-28,Completed,Medium,361,Chen,Database
Audit,2023-01-09,2023-04-14,Completed,Low,95,Evan,Infrastructure
";

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn loads_and_summarises_csv() {
    let file = csv_file(CSV);

    let records = load_records(file.path(), 200).await.unwrap();
    let dashboard = DashboardState::new(records);
    let overview = dashboard.overview();

    assert_eq!(dashboard.records().len(), 6);
    assert_eq!(overview.summary.total_projects, 5);
    assert_eq!(overview.summary.delayed_rows, 1);
    assert_eq!(overview.span, Some(YearSpan::new(2020, 2023)));
    assert_eq!(overview.tiles[0].value, "5");
    assert_eq!(overview.priority.total(), 5);
}

#[tokio::test]
async fn row_cap_limits_loaded_rows() {
    let file = csv_file(CSV);

    let records = load_records(file.path(), 3).await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[2].title, "Billing");
}

#[tokio::test]
async fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    let err = load_records(&path, 200).await.unwrap_err();

    match err {
        DashError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[tokio::test]
async fn completed_with_priority_subset() {
    let file = csv_file(CSV);
    let records = load_records(file.path(), 200).await.unwrap();

    let chosen: BTreeSet<Priority> = [Priority::High, Priority::Low].into_iter().collect();
    let state = FilterState {
        status: StatusFilter::Completed,
        years: None,
        priorities: chosen.clone(),
    };

    let view = filter::apply(&records, &state);

    assert!(!view.rows.is_empty());
    for row in &view.rows {
        assert_eq!(row.status, Status::Completed);
        assert!(chosen.contains(&row.priority));
    }
}

#[tokio::test]
async fn gantt_has_one_bar_per_project() {
    let file = csv_file(CSV);
    let records = load_records(file.path(), 200).await.unwrap();
    let dashboard = DashboardState::new(records);

    let bars = &dashboard.timeline().gantt.bars;

    assert_eq!(bars.len(), dashboard.overview().summary.total_projects);
    assert_eq!(bars.iter().filter(|bar| bar.title == "Portal").count(), 1);
    assert!(bars.windows(2).all(|pair| pair[0].start <= pair[1].start));
}

#[tokio::test]
async fn export_writes_chart_json() {
    let file = csv_file(CSV);
    let records = load_records(file.path(), 200).await.unwrap();
    let dashboard = DashboardState::new(records);
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("charts.json");

    export::write_json(&dashboard, &out).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(
        json["overview"]["status"]["title"],
        "Projects Distribution by Status (2020-2023)"
    );
    // Portal spans two rows but is drawn once
    assert_eq!(json["timeline"]["gantt"]["bars"].as_array().unwrap().len(), 5);
    assert_eq!(json["timeline"]["gantt"]["bars"][0]["title"], "Warehouse");
}
