use crate::app::{AppState, Investment};
use crate::tui::list::truncate;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub const TITLE: &str = "Confirm removal";
pub const MESSAGE: &str = "Remove this investment?";

pub fn render(f: &mut Frame, state: &AppState, target: &Investment) {
    let area = f.area();

    let width = 44u16.min(area.width);
    let height = 7u16.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay_area = Rect::new(x, y, width, height);

    f.render_widget(Clear, overlay_area);

    let hints = Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" remove   ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" cancel ", Style::default().fg(Color::DarkGray)),
    ]);

    let block = Block::default()
        .title(format!(" {TITLE} "))
        .title_bottom(hints.centered())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    let value = state.format_value(target.value);
    let name_max = (width as usize).saturating_sub(value.len() + 5);
    let subject = Line::from(vec![
        Span::styled(
            truncate(&target.name, name_max),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" ({value})"), Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(MESSAGE, Style::default().fg(Color::White))),
        subject,
    ])
    .block(block)
    .centered();
    f.render_widget(paragraph, overlay_area);
}
