//! Input bar: description prompt and cursor; dimmed while generating.

use ratatui::{
    layout::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::colors;

const PROMPT: &str = " ▸ ";
const PLACEHOLDER: &str = "Describe a vibe (e.g. 'Scandinavian forest morning' or 'Cyberpunk neon')";

pub fn render(
    f: &mut Frame,
    buffer: &str,
    cursor_pos: usize,
    loading: bool,
    area: ratatui::prelude::Rect,
) {
    let text_style = if loading {
        Style::default().fg(colors::MUTED)
    } else {
        Style::default().fg(colors::TEXT)
    };
    let body = if buffer.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(colors::MUTED))
    } else {
        Span::styled(buffer, text_style)
    };
    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD)),
        body,
    ]);
    let block = Block::default()
        .style(Style::default().bg(colors::ELEVATED))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER))
        .border_type(BorderType::Plain);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(line), inner);

    if loading {
        return;
    }
    let prompt_width = PROMPT.chars().count() as u16;
    let typed = buffer.get(..cursor_pos).map(|s| s.chars().count()).unwrap_or(0) as u16;
    let x = (inner.x + prompt_width + typed).min(inner.x + inner.width.saturating_sub(1));
    f.set_cursor_position(Position { x, y: inner.y });
}
