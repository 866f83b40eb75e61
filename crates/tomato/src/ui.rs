//! UI rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tomato_core::{Interval, Phase};

use crate::app::App;

// Pomodoro palette: work green, short-break pink, long-break red.
const GREEN: Color = Color::Rgb(0x9b, 0xde, 0xac);
const PINK: Color = Color::Rgb(0xe2, 0x97, 0x9c);
const RED: Color = Color::Rgb(0xe7, 0x30, 0x5b);
const CREAM: Color = Color::Rgb(0xf7, 0xf5, 0xdd);

/// Main draw function
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Countdown
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_countdown(f, app, chunks[1]);
    draw_footer(f, chunks[2]);
}

/// Colour for the current phase's label and border.
fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Idle => GREEN,
        Phase::Counting { interval, .. } => match interval {
            Interval::Work => GREEN,
            Interval::ShortBreak => PINK,
            Interval::LongBreak => RED,
        },
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let color = phase_color(app.scheduler.phase());

    let header = Paragraph::new(Line::from(Span::styled(
        app.scheduler.label(),
        Style::default().fg(color).bold(),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" tomato ")
            .title_style(Style::default().fg(CREAM))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    f.render_widget(header, area);
}

fn draw_countdown(f: &mut Frame, app: &App, area: Rect) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(1), // Clock
            Constraint::Length(1),
            Constraint::Length(1), // Checkmarks
            Constraint::Min(0),
        ])
        .split(area);

    let clock = Paragraph::new(app.scheduler.clock())
        .style(Style::default().fg(Color::White).bold())
        .alignment(Alignment::Center);
    f.render_widget(clock, sections[1]);

    let checkmarks = Paragraph::new(app.scheduler.checkmarks())
        .style(Style::default().fg(GREEN))
        .alignment(Alignment::Center);
    f.render_widget(checkmarks, sections[3]);
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let help = Line::from(vec![
        Span::styled(" s", Style::default().fg(Color::Cyan).bold()),
        Span::raw(" start  "),
        Span::styled("r", Style::default().fg(Color::Cyan).bold()),
        Span::raw(" reset  "),
        Span::styled("q", Style::default().fg(Color::Cyan).bold()),
        Span::raw(" quit"),
    ]);

    let footer = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, area);
}
