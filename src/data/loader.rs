use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use tokio::fs;
use tracing::{debug, info};

use crate::error::{DashError, Result};
use crate::models::{Priority, ProjectRecord, Status};

const TITLE: &str = "ProjectTitle";
const START: &str = "Start";
const END: &str = "End";
const STATUS: &str = "Status";
const PRIORITY: &str = "Priority";
const DURATION: &str = "Duration";
const ASSIGNED_TO: &str = "AssignedTo";
const COMPONENTS: &str = "ProjectComponents";

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Header positions of the columns a record is built from
struct Columns {
    title: usize,
    start: usize,
    end: usize,
    status: usize,
    priority: usize,
    duration: usize,
    assigned_to: usize,
    component: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or(DashError::MissingColumn(name))
        };

        Ok(Self {
            title: find(TITLE)?,
            start: find(START)?,
            end: find(END)?,
            status: find(STATUS)?,
            priority: find(PRIORITY)?,
            duration: find(DURATION)?,
            assigned_to: find(ASSIGNED_TO)?,
            component: find(COMPONENTS)?,
        })
    }
}

/// Read up to `row_limit` project records from the CSV file at `path`
pub async fn load_records(path: &Path, row_limit: usize) -> Result<Vec<ProjectRecord>> {
    info!(path = %path.display(), row_limit, "loading project records");

    let bytes = fs::read(path).await.map_err(|source| DashError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_records(bytes.as_slice(), row_limit)?;
    info!(rows = records.len(), "project records loaded");

    Ok(records)
}

/// Parse project records from any CSV source. The first malformed row fails the whole parse.
pub fn parse_records<R: Read>(source: R, row_limit: usize) -> Result<Vec<ProjectRecord>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(source);

    let columns = Columns::locate(reader.headers()?)?;
    let mut records = Vec::new();

    for (index, result) in reader.records().take(row_limit).enumerate() {
        let row = result?;
        // header is line 1
        let line = index + 2;
        records.push(parse_row(&row, &columns, line)?);
    }

    debug!(parsed = records.len(), "csv rows parsed");
    Ok(records)
}

fn parse_row(row: &StringRecord, columns: &Columns, line: usize) -> Result<ProjectRecord> {
    let field = |index: usize| row.get(index).unwrap_or_default();

    let status_raw = field(columns.status);
    let status = status_raw
        .parse::<Status>()
        .map_err(|_| DashError::UnknownStatus {
            row: line,
            value: status_raw.to_owned(),
        })?;

    let priority_raw = field(columns.priority);
    let priority = priority_raw
        .parse::<Priority>()
        .map_err(|_| DashError::UnknownPriority {
            row: line,
            value: priority_raw.to_owned(),
        })?;

    let duration_raw = field(columns.duration);
    let duration = duration_raw
        .parse::<f64>()
        .map_err(|_| DashError::InvalidNumber {
            row: line,
            column: DURATION,
            value: duration_raw.to_owned(),
        })?;

    Ok(ProjectRecord {
        title: field(columns.title).to_owned(),
        start: parse_date(field(columns.start), START, line)?,
        end: parse_date(field(columns.end), END, line)?,
        status,
        priority,
        duration,
        assigned_to: field(columns.assigned_to).to_owned(),
        component: field(columns.component).to_owned(),
    })
}

fn parse_date(value: &str, column: &'static str, line: usize) -> Result<NaiveDate> {
    let date = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|datetime| datetime.date())
        });

    date.ok_or_else(|| DashError::InvalidDate {
        row: line,
        column,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "ProjectTitle,Start,End,Status,Priority,Duration,AssignedTo,ProjectComponents\n";

    #[test]
    fn parses_rows_in_any_column_order() {
        let csv = "Priority,ProjectTitle,Extra,Start,End,Status,Duration,AssignedTo,ProjectComponents\n\
                   High,Apollo,x,2021-01-04,2021-03-01,Ongoing,56,Ana,Backend\n";

        let records = parse_records(csv.as_bytes(), 200).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Apollo");
        assert_eq!(records[0].priority, Priority::High);
        assert_eq!(records[0].start, NaiveDate::from_ymd_opt(2021, 1, 4).unwrap());
        assert_eq!(records[0].duration, 56.0);
    }

    #[test]
    fn stops_at_row_limit() {
        let mut csv = HEADER.to_owned();
        for i in 0..10 {
            csv.push_str(&format!(
                "P{i},2020-01-01,2020-02-01,Completed,Low,31,Bo,Docs\n"
            ));
        }

        let records = parse_records(csv.as_bytes(), 4).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[3].title, "P3");
    }

    #[test]
    fn accepts_several_date_layouts() {
        for value in ["2022-06-15", "2022/06/15", "06/15/2022", "2022-06-15 08:30:00", "2022-06-15T08:30:00"] {
            let date = parse_date(value, START, 2).unwrap();
            assert_eq!(date, NaiveDate::from_ymd_opt(2022, 6, 15).unwrap(), "{value}");
        }
    }

    #[test]
    fn rejects_unparsable_date_with_location() {
        let csv = format!("{HEADER}Apollo,2021-01-04,soon,Ongoing,High,5,Ana,Backend\n");

        match parse_records(csv.as_bytes(), 200) {
            Err(DashError::InvalidDate { row, column, value }) => {
                assert_eq!(row, 2);
                assert_eq!(column, END);
                assert_eq!(value, "soon");
            }
            other => panic!("expected invalid date, got {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_column() {
        let csv = "ProjectTitle,Start,End,Status,Priority,Duration,AssignedTo\n";
        assert!(matches!(
            parse_records(csv.as_bytes(), 200),
            Err(DashError::MissingColumn("ProjectComponents"))
        ));
    }

    #[test]
    fn rejects_unknown_status() {
        let csv = format!("{HEADER}Apollo,2021-01-04,2021-02-04,Paused,High,5,Ana,Backend\n");
        assert!(matches!(
            parse_records(csv.as_bytes(), 200),
            Err(DashError::UnknownStatus { row: 2, .. })
        ));
    }

    #[test]
    fn rejects_unknown_priority() {
        let csv = format!("{HEADER}Apollo,2021-01-04,2021-02-04,Ongoing,Urgent,5,Ana,Backend\n");
        assert!(matches!(
            parse_records(csv.as_bytes(), 200),
            Err(DashError::UnknownPriority { row: 2, .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_duration() {
        let csv = format!("{HEADER}Apollo,2021-01-04,2021-02-04,Ongoing,High,long,Ana,Backend\n");
        assert!(matches!(
            parse_records(csv.as_bytes(), 200),
            Err(DashError::InvalidNumber { column: DURATION, .. })
        ));
    }
}
