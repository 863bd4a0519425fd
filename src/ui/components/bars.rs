use chrono::{Datelike, NaiveDate};
use tui::{
    style::{Color, Style},
    text::{Span, Spans},
};

use crate::charts::{BarPoint, GanttChart};
use crate::ui::theme;

const MAX_LABEL: usize = 24;
const BLOCK: &str = "█";

/// One line per Gantt bar with the title in a left column, plus a year axis at the bottom
pub fn gantt_lines(chart: &GanttChart, width: usize) -> Vec<Spans<'static>> {
    let Some((first, last)) = chart.date_range() else {
        return Vec::new();
    };

    let label_width = label_column(chart.bars.iter().map(|bar| bar.title.as_str()));
    let track = width.saturating_sub(label_width + 1).max(1);
    let total_days = (last - first).num_days().max(1);

    let mut lines: Vec<Spans<'static>> = chart
        .bars
        .iter()
        .map(|bar| {
            let from = scale(bar.start, first, total_days, track);
            let to = scale(bar.end, first, total_days, track).max(from);
            Spans::from(vec![
                Span::raw(pad(&bar.title, label_width)),
                Span::raw(" ".repeat(from + 1)),
                Span::styled(
                    BLOCK.repeat(to - from + 1),
                    Style::default().fg(theme::status_color(bar.status)),
                ),
            ])
        })
        .collect();

    lines.push(Spans::from(vec![
        Span::raw(" ".repeat(label_width + 1)),
        Span::styled(year_axis(first, last, track), Style::default().fg(Color::Gray)),
    ]));

    lines
}

/// Horizontal bars scaled to the largest count, labelled on the left and valued on the right
pub fn hbar_lines(bars: &[BarPoint], width: usize, color: Color) -> Vec<Spans<'static>> {
    let max = bars.iter().map(|bar| bar.count).max().unwrap_or(0).max(1);
    let label_width = label_column(bars.iter().map(|bar| bar.label.as_str()));
    // label, gap, bar, gap, up to 4 digits
    let track = width.saturating_sub(label_width + 6).max(1);

    bars.iter()
        .map(|bar| {
            let length = (bar.count * track).div_ceil(max);
            Spans::from(vec![
                Span::raw(pad(&bar.label, label_width)),
                Span::raw(" "),
                Span::styled("■".repeat(length), Style::default().fg(color)),
                Span::raw(format!(" {}", bar.count)),
            ])
        })
        .collect()
}

fn label_column<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_LABEL)
}

fn pad(label: &str, width: usize) -> String {
    let truncated: String = label.chars().take(width).collect();
    format!("{truncated:<width$}")
}

fn scale(date: NaiveDate, first: NaiveDate, total_days: i64, track: usize) -> usize {
    let offset = (date - first).num_days().clamp(0, total_days);
    (offset as usize * (track - 1)) / total_days as usize
}

/// Year labels placed at the column of each January 1st that fits
fn year_axis(first: NaiveDate, last: NaiveDate, track: usize) -> String {
    let total_days = (last - first).num_days().max(1);
    let mut axis = vec![' '; track];

    for year in first.year()..=last.year() {
        let Some(jan_first) = NaiveDate::from_ymd_opt(year, 1, 1) else {
            continue;
        };
        let column = scale(jan_first.max(first), first, total_days, track);
        let label: Vec<char> = year.to_string().chars().collect();

        let fits = column + label.len() <= track
            && axis[column..column + label.len()].iter().all(|c| *c == ' ')
            && (column == 0 || axis[column - 1] == ' ');
        if fits {
            axis[column..column + label.len()].copy_from_slice(&label);
        }
    }

    axis.into_iter().collect()
}
