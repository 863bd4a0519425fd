use tui::style::{Color, Modifier, Style};

use crate::models::Status;

pub const ACCENT: Color = Color::Rgb(0x06, 0x5f, 0x46);
pub const MUTED: Color = Color::Rgb(0xa5, 0xb3, 0xad);
pub const ORANGE: Color = Color::Rgb(0xff, 0xa5, 0x00);

/// Categorical colors for donut slices and scatter points
pub const PALETTE: [Color; 6] = [
    Color::Rgb(0x59, 0x9e, 0xf5),
    Color::Rgb(0x6b, 0xd9, 0x87),
    Color::Rgb(0xf2, 0xab, 0x4a),
    Color::Rgb(0xe3, 0x66, 0x66),
    Color::Rgb(0xba, 0x8a, 0xf5),
    Color::Rgb(0x59, 0xd9, 0xd4),
];

pub fn palette(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

pub fn status_color(status: Status) -> Color {
    match status {
        Status::Delayed => Color::Red,
        Status::Ongoing => ORANGE,
        Status::Completed => Color::Green,
    }
}

pub fn title_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

pub fn focused_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn highlight() -> Style {
    Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}
