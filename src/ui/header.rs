use tui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::charts::MetricTile;
use crate::ui::theme;

pub const PAGE_TITLE: &str = "Project Management Dashboard";

/// Page title on the first line, one bordered tile per metric below it
pub fn render_header<B: Backend>(frame: &mut Frame<B>, area: Rect, tiles: &[MetricTile]) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(4)].as_ref())
        .split(area);

    let title = Paragraph::new(Span::styled(PAGE_TITLE, theme::title_style()));
    frame.render_widget(title, rows[0]);

    if tiles.is_empty() {
        return;
    }

    let share = 100 / tiles.len() as u16;
    let constraints: Vec<Constraint> = tiles
        .iter()
        .map(|_| Constraint::Percentage(share))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(rows[1]);

    for (tile, column) in tiles.iter().zip(columns.iter()) {
        let body = Paragraph::new(vec![Spans::from(Span::styled(
            tile.value.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(Span::styled(tile.label, Style::default().fg(theme::MUTED)))
                .borders(Borders::ALL),
        );
        frame.render_widget(body, *column);
    }
}
