use std::f64::consts::{FRAC_PI_2, TAU};

use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Points},
        BarChart, Block, Borders, Paragraph,
    },
    Frame,
};

use crate::charts::{BarChart as BarDescription, DonutChart, Overview, ScatterMatrix};
use crate::ui::components::bars::hbar_lines;
use crate::ui::theme;

const INNER_RADIUS: f64 = 30.0 / 85.0;
const OUTER_RADIUS: f64 = 1.0;
const COUNT_RADIUS: f64 = 60.0 / 85.0;
const LABEL_RADIUS: f64 = 1.25;

pub fn render_overview<B: Backend>(frame: &mut Frame<B>, area: Rect, overview: &Overview) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)].as_ref())
        .split(area);

    let donuts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(columns[0]);
    render_donut(frame, donuts[0], &overview.priority);
    render_donut(frame, donuts[1], &overview.status);

    let composite = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)].as_ref())
        .split(columns[1]);
    let stacked = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)].as_ref())
        .split(composite[0]);

    render_scatter(frame, stacked[0], &overview.assignments);
    render_assignee_bars(frame, stacked[1], &overview.by_assignee);
    render_component_bars(frame, composite[1], &overview.by_component);
}

/// Start and end angle of each slice, clockwise from twelve o'clock
pub fn slice_angles(counts: &[usize]) -> Vec<(f64, f64)> {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = FRAC_PI_2;
    counts
        .iter()
        .map(|count| {
            let sweep = TAU * *count as f64 / total as f64;
            let span = (start, start - sweep);
            start -= sweep;
            span
        })
        .collect()
}

fn ring_points(from: f64, to: f64) -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    let radial_steps = 12;
    let angular_steps = (((from - to).abs() / TAU) * 360.0).ceil().max(1.0) as usize;

    for r in 0..=radial_steps {
        let radius = INNER_RADIUS + (OUTER_RADIUS - INNER_RADIUS) * r as f64 / radial_steps as f64;
        for a in 0..=angular_steps {
            let angle = from + (to - from) * a as f64 / angular_steps as f64;
            points.push((radius * angle.cos(), radius * angle.sin()));
        }
    }

    points
}

fn render_donut<B: Backend>(frame: &mut Frame<B>, area: Rect, chart: &DonutChart) {
    let block = Block::default().title(chart.title.as_str()).borders(Borders::ALL);

    if chart.total() == 0 {
        frame.render_widget(empty_state("No projects").block(block), area);
        return;
    }

    let counts: Vec<usize> = chart.slices.iter().map(|slice| slice.count).collect();
    let angles = slice_angles(&counts);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([-1.6, 1.6])
        .y_bounds([-1.4, 1.4])
        .paint(|ctx| {
            for (index, (from, to)) in angles.iter().enumerate() {
                let coords = ring_points(*from, *to);
                ctx.draw(&Points {
                    coords: &coords,
                    color: theme::palette(index),
                });
            }
            ctx.layer();

            for (slice, (from, to)) in chart.slices.iter().zip(angles.iter()) {
                let middle = (from + to) / 2.0;
                ctx.print(
                    COUNT_RADIUS * middle.cos(),
                    COUNT_RADIUS * middle.sin(),
                    Span::styled(
                        slice.count.to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                );
                ctx.print(
                    LABEL_RADIUS * middle.cos(),
                    LABEL_RADIUS * middle.sin(),
                    Span::styled(
                        slice.label.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });

    frame.render_widget(canvas, area);
}

fn render_scatter<B: Backend>(frame: &mut Frame<B>, area: Rect, chart: &ScatterMatrix) {
    let block = Block::default().title(chart.title.as_str()).borders(Borders::ALL);

    if chart.points.is_empty() {
        frame.render_widget(empty_state("No assignments").block(block), area);
        return;
    }

    let x_len = chart.x_order.len() as f64;
    let y_len = chart.y_order.len() as f64;
    let max_count = chart.max_count().max(1) as f64;
    // left margin holds the component labels
    let margin = 2.0;

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([-margin, x_len + 0.5])
        .y_bounds([-0.5, y_len + 0.5])
        .paint(|ctx| {
            for point in &chart.points {
                let (Some(x), Some(y)) = (
                    chart.x_order.iter().position(|label| *label == point.assigned_to),
                    chart.y_order.iter().position(|label| *label == point.component),
                ) else {
                    continue;
                };

                let radius = 0.1 + 0.3 * point.count as f64 / max_count;
                let coords = bubble(x as f64 + 0.5, y_len - y as f64 - 0.5, radius);
                ctx.draw(&Points {
                    coords: &coords,
                    color: theme::palette(0),
                });
            }
            ctx.layer();

            for (row, label) in chart.y_order.iter().enumerate() {
                ctx.print(
                    -margin,
                    y_len - row as f64 - 0.5,
                    Span::styled(label.clone(), Style::default().fg(theme::MUTED)),
                );
            }
        });

    frame.render_widget(canvas, area);
}

fn bubble(cx: f64, cy: f64, radius: f64) -> Vec<(f64, f64)> {
    let mut coords = Vec::new();
    for ring in 1..=4 {
        let r = radius * ring as f64 / 4.0;
        for step in 0..48 {
            let angle = TAU * step as f64 / 48.0;
            coords.push((cx + r * angle.cos(), cy + r * angle.sin()));
        }
    }
    coords
}

fn render_assignee_bars<B: Backend>(frame: &mut Frame<B>, area: Rect, chart: &BarDescription) {
    let block = Block::default().title(chart.axis_title).borders(Borders::ALL);

    let data: Vec<(&str, u64)> = chart
        .bars
        .iter()
        .map(|bar| (bar.label.as_str(), bar.count as u64))
        .collect();

    let bar_width = if data.is_empty() {
        1
    } else {
        let inner = area.width.saturating_sub(2) as usize;
        (inner / data.len()).saturating_sub(1).clamp(1, 9) as u16
    };

    let bars = BarChart::default()
        .block(block)
        .data(&data)
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme::palette(0)))
        .value_style(Style::default().fg(Color::Black).bg(theme::palette(0)))
        .label_style(Style::default().fg(theme::MUTED));

    frame.render_widget(bars, area);
}

fn render_component_bars<B: Backend>(frame: &mut Frame<B>, area: Rect, chart: &BarDescription) {
    let block = Block::default().title(chart.axis_title).borders(Borders::ALL);
    let width = area.width.saturating_sub(2) as usize;

    let lines = hbar_lines(&chart.bars, width, theme::palette(1));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn empty_state(message: &str) -> Paragraph<'_> {
    Paragraph::new(Span::styled(
        message,
        Style::default().fg(theme::MUTED).add_modifier(Modifier::ITALIC),
    ))
}
