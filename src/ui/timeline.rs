use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::charts::{MultiSelectControl, RadioControl, Timeline};
use crate::dashboard::YearHandle;
use crate::ui::components::{bars::gantt_lines, year_slider::render_year_slider};
use crate::ui::theme;
use crate::ui::{AppState, Control};

pub fn render_timeline<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &AppState) {
    let timeline = state.dashboard.timeline();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)].as_ref())
        .split(area);

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage(18),
                Constraint::Percentage(57),
                Constraint::Percentage(25),
            ]
            .as_ref(),
        )
        .split(rows[0]);

    render_radio(frame, controls[0], &timeline.status, state.focus == Control::Status);
    render_year_slider(
        frame,
        controls[1],
        &timeline.years,
        state.handle,
        state.focus == Control::Years,
    );
    render_multiselect(
        frame,
        controls[2],
        &timeline.priorities,
        state.priority_cursor,
        state.focus == Control::Priority,
    );

    render_gantt(frame, rows[1], timeline, state.gantt_scroll);
}

fn render_radio<B: Backend>(frame: &mut Frame<B>, area: Rect, control: &RadioControl, focused: bool) {
    let lines: Vec<Spans> = control
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let marker = if index == control.selected { "(•) " } else { "( ) " };
            let style = if index == control.selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Spans::from(Span::styled(format!("{marker}{option}"), style))
        })
        .collect();

    let block = Block::default()
        .title(control.label)
        .borders(Borders::ALL)
        .border_style(theme::focused_border(focused));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_multiselect<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    control: &MultiSelectControl,
    cursor: usize,
    focused: bool,
) {
    let lines: Vec<Spans> = control
        .options
        .iter()
        .zip(control.selected.iter())
        .enumerate()
        .map(|(index, (option, selected))| {
            let marker = if *selected { "[x] " } else { "[ ] " };
            let style = if focused && index == cursor {
                theme::highlight()
            } else {
                Style::default()
            };
            Spans::from(Span::styled(format!("{marker}{option}"), style))
        })
        .collect();

    let block = Block::default()
        .title(control.label)
        .borders(Borders::ALL)
        .border_style(theme::focused_border(focused));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_gantt<B: Backend>(frame: &mut Frame<B>, area: Rect, timeline: &Timeline, scroll: u16) {
    let block = Block::default()
        .title(Span::styled(timeline.gantt.title.as_str(), theme::title_style()))
        .borders(Borders::ALL);

    if timeline.is_empty() {
        let message = Paragraph::new(Span::styled(
            "No projects match the current filters",
            Style::default().fg(theme::MUTED).add_modifier(Modifier::ITALIC),
        ))
        .block(block);
        frame.render_widget(message, area);
        return;
    }

    let width = area.width.saturating_sub(2) as usize;
    let lines = gantt_lines(&timeline.gantt, width);
    frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}

/// Help text for the timeline footer
pub fn key_hints(focus: Control, handle: YearHandle) -> String {
    let specific = match focus {
        Control::Status => "<←/→> Change status".to_owned(),
        Control::Years => {
            let handle = match handle {
                YearHandle::First => "start",
                YearHandle::Last => "end",
            };
            format!("<←/→> Move {handle} year | <Space> Switch handle")
        }
        Control::Priority => "<←/→> Move | <Space> Toggle priority".to_owned(),
    };
    format!("<↑/↓> Focus | {specific} | <PgUp/PgDn> Scroll | <Tab> Overview | <q> Quit")
}
