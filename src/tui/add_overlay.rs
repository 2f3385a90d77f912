use crate::form::{AddForm, FormField};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub const TITLE: &str = "New investment";

pub fn render(f: &mut Frame, form: &AddForm, currency: &str) {
    let area = f.area();

    let width = 50u16.min(area.width);
    let height = 8u16.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay_area = Rect::new(x, y, width, height);

    f.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(format!(" {TITLE} "))
        .title_bottom(Line::from(" Tab switch · Enter save · Esc cancel ").centered())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let value_text = if form.value.is_empty() {
        String::new()
    } else {
        format!("{currency}{}", form.value)
    };

    let mut lines = vec![
        Line::from(""),
        field_line("Name", &form.name, form.focus == FormField::Name),
        field_line("Value", &value_text, form.focus == FormField::Value),
        Line::from(""),
    ];
    if let Some(err) = &form.error {
        lines.push(Line::from(Span::styled(
            format!(" {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    f.render_widget(Paragraph::new(lines).block(block), overlay_area);
}

fn field_line(label: &str, text: &str, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut spans = vec![
        Span::styled(format!(" {label:<7}"), label_style),
        Span::styled(text.to_string(), Style::default().fg(Color::White)),
    ];
    if focused {
        spans.push(Span::styled(
            "▏",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    Line::from(spans)
}
