pub mod components;
mod header;
mod overview;
pub mod theme;
mod timeline;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::Spans,
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::analytics::StatusFilter;
use crate::dashboard::{DashboardState, YearHandle};
use crate::models::Priority;

pub use header::PAGE_TITLE;

const GANTT_PAGE: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Timeline,
}

impl Tab {
    const TITLES: [&'static str; 2] = ["Overview", "Timeline"];

    fn index(&self) -> usize {
        match self {
            Tab::Overview => 0,
            Tab::Timeline => 1,
        }
    }

    fn toggle(&self) -> Self {
        match self {
            Tab::Overview => Tab::Timeline,
            Tab::Timeline => Tab::Overview,
        }
    }
}

/// Timeline control that receives arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Status,
    Years,
    Priority,
}

impl Control {
    fn next(&self) -> Self {
        match self {
            Control::Status => Control::Years,
            Control::Years => Control::Priority,
            Control::Priority => Control::Status,
        }
    }

    fn previous(&self) -> Self {
        match self {
            Control::Status => Control::Priority,
            Control::Years => Control::Status,
            Control::Priority => Control::Years,
        }
    }
}

pub enum DashboardAction {
    Quit,
}

// Represents the state of the dashboard screen
pub struct AppState {
    pub dashboard: DashboardState,
    pub tab: Tab,
    pub focus: Control,
    pub handle: YearHandle,
    pub priority_cursor: usize,
    pub gantt_scroll: u16,
}

impl AppState {
    pub fn new(dashboard: DashboardState) -> Self {
        Self {
            dashboard,
            tab: Tab::Overview,
            focus: Control::Status,
            handle: YearHandle::First,
            priority_cursor: 0,
            gantt_scroll: 0,
        }
    }

    fn step(&mut self, forward: bool) {
        match self.focus {
            Control::Status => {
                let current = self.dashboard.filter().status;
                let status = if forward { current.next() } else { current.previous() };
                self.set_status(status);
            }
            Control::Years => {
                let delta = if forward { 1 } else { -1 };
                self.dashboard.shift_year(self.handle, delta);
                self.gantt_scroll = 0;
            }
            Control::Priority => {
                let count = Priority::ALL.len();
                self.priority_cursor = if forward {
                    (self.priority_cursor + 1) % count
                } else {
                    (self.priority_cursor + count - 1) % count
                };
            }
        }
    }

    fn set_status(&mut self, status: StatusFilter) {
        self.dashboard.set_status(status);
        self.handle = YearHandle::First;
        self.gantt_scroll = 0;
    }

    fn activate(&mut self) {
        match self.focus {
            Control::Status => {}
            Control::Years => {
                self.handle = match self.handle {
                    YearHandle::First => YearHandle::Last,
                    YearHandle::Last => YearHandle::First,
                };
            }
            Control::Priority => {
                if let Some(priority) = Priority::ALL.get(self.priority_cursor) {
                    self.dashboard.toggle_priority(*priority);
                    self.gantt_scroll = 0;
                }
            }
        }
    }

    fn scroll_gantt(&mut self, down: bool) {
        let rows = self.dashboard.timeline().gantt.bars.len() as u16;
        self.gantt_scroll = if down {
            (self.gantt_scroll + GANTT_PAGE).min(rows.saturating_sub(1))
        } else {
            self.gantt_scroll.saturating_sub(GANTT_PAGE)
        };
    }
}

pub fn render_dashboard<B: Backend>(frame: &mut Frame<B>, state: &AppState) {
    let size = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(2),
            ]
            .as_ref(),
        )
        .split(size);

    header::render_header(frame, chunks[0], &state.dashboard.overview().tiles);

    let titles: Vec<Spans> = Tab::TITLES.iter().map(|title| Spans::from(*title)).collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(state.tab.index())
        .highlight_style(theme::highlight());
    frame.render_widget(tabs, chunks[1]);

    let hints = match state.tab {
        Tab::Overview => {
            overview::render_overview(frame, chunks[2], state.dashboard.overview());
            "<Tab> Timeline | <q> Quit".to_owned()
        }
        Tab::Timeline => {
            timeline::render_timeline(frame, chunks[2], state);
            timeline::key_hints(state.focus, state.handle)
        }
    };

    let footer = Paragraph::new(hints)
        .block(Block::default().borders(Borders::TOP))
        .style(Style::default().fg(theme::MUTED));
    frame.render_widget(footer, chunks[3]);
}

pub fn handle_input(state: &mut AppState) -> Result<Option<DashboardAction>> {
    if let Event::Key(key) = event::read()? {
        return Ok(handle_key(state, key));
    }
    Ok(None)
}

pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Option<DashboardAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(DashboardAction::Quit),
        KeyCode::Tab | KeyCode::BackTab => state.tab = state.tab.toggle(),
        _ if state.tab == Tab::Overview => {}
        KeyCode::Up => state.focus = state.focus.previous(),
        KeyCode::Down => state.focus = state.focus.next(),
        KeyCode::Left => state.step(false),
        KeyCode::Right => state.step(true),
        KeyCode::Char(' ') | KeyCode::Enter => state.activate(),
        KeyCode::PageDown => state.scroll_gantt(true),
        KeyCode::PageUp => state.scroll_gantt(false),
        _ => {}
    }

    None
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use tui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::analytics::test_support::record;
    use crate::analytics::YearSpan;
    use crate::models::Status;

    fn press(state: &mut AppState, code: KeyCode) -> Option<DashboardAction> {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> AppState {
        AppState::new(DashboardState::new(vec![
            record("Apollo", "2019-01-01", "2020-06-01", Status::Completed, Priority::High, 10.0),
            record("Borealis", "2020-01-01", "2022-06-01", Status::Delayed, Priority::Low, 20.0),
            record("Cygnus", "2021-03-01", "2021-09-01", Status::Ongoing, Priority::Medium, 30.0),
        ]))
    }

    fn screen_text(state: &AppState) -> String {
        let backend = TestBackend::new(140, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(&buffer.get(x, y).symbol);
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn quit_keys_end_the_session() {
        let mut state = app();
        assert!(matches!(press(&mut state, KeyCode::Char('q')), Some(DashboardAction::Quit)));
        assert!(matches!(press(&mut state, KeyCode::Esc), Some(DashboardAction::Quit)));
    }

    #[test]
    fn arrows_are_ignored_on_overview() {
        let mut state = app();
        press(&mut state, KeyCode::Right);
        assert_eq!(state.dashboard.filter().status, StatusFilter::All);
    }

    #[test]
    fn status_radio_cycles_with_arrows() {
        let mut state = app();
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.tab, Tab::Timeline);

        press(&mut state, KeyCode::Right);
        assert_eq!(state.dashboard.filter().status, StatusFilter::Ongoing);
        press(&mut state, KeyCode::Left);
        press(&mut state, KeyCode::Left);
        assert_eq!(state.dashboard.filter().status, StatusFilter::Completed);
    }

    #[test]
    fn year_handles_move_and_switch() {
        let mut state = app();
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Down);
        assert_eq!(state.focus, Control::Years);

        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Char(' '));
        press(&mut state, KeyCode::Left);

        assert_eq!(
            state.dashboard.timeline().years.value,
            Some(YearSpan::new(2020, 2021))
        );
    }

    #[test]
    fn priority_toggle_uses_cursor() {
        let mut state = app();
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Up);
        assert_eq!(state.focus, Control::Priority);

        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Char(' '));

        assert!(!state.dashboard.filter().priorities.contains(&Priority::Medium));
        assert_eq!(state.dashboard.timeline().gantt.bars.len(), 2);
    }

    #[test]
    fn overview_renders_title_and_tiles() {
        let text = screen_text(&app());

        assert!(text.contains(PAGE_TITLE));
        assert!(text.contains("Total Projects"));
        assert!(text.contains("20 days"));
        assert!(text.contains("Overview"));
    }

    #[test]
    fn timeline_renders_empty_state() {
        let mut state = app();
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Up);
        for _ in 0..3 {
            press(&mut state, KeyCode::Char(' '));
            press(&mut state, KeyCode::Right);
        }

        let text = screen_text(&state);

        assert!(text.contains("No projects match the current filters"));
        assert!(text.contains("Gantt Chart of All Projects (2019-2022)"));
    }
}
