use crate::app::{AppState, Investment, QUICK_SELECT_MAX};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

pub const EMPTY_PLACEHOLDER: &str = "No investments found";

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    if state.investments.is_empty() {
        let para = Paragraph::new(EMPTY_PLACEHOLDER)
            .style(Style::default().fg(Color::DarkGray))
            .centered()
            .block(Block::default().borders(Borders::NONE));
        let y = area.y + area.height / 2;
        f.render_widget(para, Rect::new(area.x, y, area.width, 1u16.min(area.height)));
        return;
    }

    let visible_height = area.height as usize;
    let scroll_offset = if state.cursor >= visible_height {
        state.cursor - visible_height + 1
    } else {
        0
    };
    let inner_width = area.width.saturating_sub(1) as usize;

    let lines: Vec<Line> = state
        .investments
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|(i, item)| {
            let value = state.format_value(item.value);
            render_row(item, &value, i, i == state.cursor, inner_width)
        })
        .collect();

    let list = Paragraph::new(lines).block(Block::default().borders(Borders::NONE));
    f.render_widget(list, area);
}

fn render_row(
    item: &Investment,
    value: &str,
    idx: usize,
    is_selected: bool,
    max_width: usize,
) -> Line<'static> {
    let marker = if is_selected { "▸" } else { " " };
    let idx_label = if idx < QUICK_SELECT_MAX {
        format!("{}", idx + 1)
    } else {
        " ".to_string()
    };
    let prefix = format!("{marker}{idx_label} ");

    let prefix_width = UnicodeWidthStr::width(prefix.as_str());
    let value_width = UnicodeWidthStr::width(value);
    let name_max = max_width.saturating_sub(prefix_width + value_width + 1);
    let name = truncate(&item.name, name_max);
    let pad = max_width.saturating_sub(prefix_width + UnicodeWidthStr::width(name.as_str()) + value_width);

    let name_style = if is_selected {
        Style::default()
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    Line::from(vec![
        Span::styled(prefix, Style::default().fg(Color::Cyan)),
        Span::styled(name, name_style),
        Span::raw(" ".repeat(pad.max(1))),
        Span::styled(value.to_string(), Style::default().fg(Color::Green)),
    ])
}

pub fn truncate(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        s.to_string()
    } else if max_width == 0 {
        String::new()
    } else {
        let mut result = String::new();
        let mut width = 0;
        for c in s.chars() {
            let cw = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if width + cw + 1 > max_width {
                result.push('…');
                break;
            }
            result.push(c);
            width += cw;
        }
        result
    }
}
