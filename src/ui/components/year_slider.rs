use tui::{
    backend::Backend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::analytics::YearSpan;
use crate::charts::RangeControl;
use crate::dashboard::YearHandle;
use crate::ui::theme;

const HANDLE: &str = "●";

pub fn render_year_slider<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    control: &RangeControl,
    active: YearHandle,
    focused: bool,
) {
    let block = Block::default()
        .title(control.label)
        .borders(Borders::ALL)
        .border_style(theme::focused_border(focused));

    let lines = match (control.bounds, control.value) {
        (Some(bounds), Some(value)) => {
            let width = area.width.saturating_sub(2) as usize;
            vec![
                value_line(value, active, focused),
                track_line(bounds, value, width),
                bounds_line(bounds, width),
            ]
        }
        _ => vec![Spans::from(Span::styled(
            "no data",
            Style::default().fg(theme::MUTED).add_modifier(Modifier::ITALIC),
        ))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn value_line(value: YearSpan, active: YearHandle, focused: bool) -> Spans<'static> {
    let style_for = |handle: YearHandle| {
        if focused && handle == active {
            theme::highlight()
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        }
    };

    Spans::from(vec![
        Span::styled(value.first.to_string(), style_for(YearHandle::First)),
        Span::raw(" - "),
        Span::styled(value.last.to_string(), style_for(YearHandle::Last)),
    ])
}

fn track_line(bounds: YearSpan, value: YearSpan, width: usize) -> Spans<'static> {
    if width < 2 {
        return Spans::from(Vec::<Span>::new());
    }

    let first = track_position(bounds, value.first, width);
    let last = track_position(bounds, value.last, width);

    let mut spans = Vec::new();
    spans.push(Span::styled("─".repeat(first), Style::default().fg(theme::MUTED)));
    spans.push(Span::styled(HANDLE, Style::default().fg(theme::ACCENT)));
    if last > first {
        spans.push(Span::styled(
            "━".repeat(last - first - 1),
            Style::default().fg(theme::ACCENT),
        ));
        spans.push(Span::styled(HANDLE, Style::default().fg(theme::ACCENT)));
    }
    spans.push(Span::styled(
        "─".repeat(width.saturating_sub(last + 1)),
        Style::default().fg(theme::MUTED),
    ));

    Spans::from(spans)
}

fn bounds_line(bounds: YearSpan, width: usize) -> Spans<'static> {
    let first = bounds.first.to_string();
    let last = bounds.last.to_string();
    let gap = width.saturating_sub(first.len() + last.len());

    Spans::from(vec![
        Span::styled(first, Style::default().fg(Color::Gray)),
        Span::raw(" ".repeat(gap)),
        Span::styled(last, Style::default().fg(Color::Gray)),
    ])
}

/// Column of `year` on a track `width` cells wide
pub fn track_position(bounds: YearSpan, year: i32, width: usize) -> usize {
    let steps = (bounds.last - bounds.first) as usize;
    if steps == 0 || width < 2 {
        return 0;
    }

    let offset = (year.clamp(bounds.first, bounds.last) - bounds.first) as usize;
    offset * (width - 1) / steps
}
