//! Export panel: Tailwind config and CSS variables for the current palette.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::ExportSnippets;
use crate::ui::theme::colors;

fn snippet<'a>(title: &'a str, hint: &'a str, body: &'a str) -> Paragraph<'a> {
    let mut lines = vec![Line::from(vec![
        Span::styled(title, Style::default().fg(colors::ACCENT_SOFT).add_modifier(Modifier::BOLD)),
        Span::styled(hint, Style::default().fg(colors::MUTED)),
    ])];
    lines.extend(
        body.lines()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(colors::TEXT_DIM)))),
    );
    Paragraph::new(lines).style(Style::default().bg(colors::CODE_BG))
}

pub fn render(f: &mut Frame, exports: &ExportSnippets, area: ratatui::prelude::Rect) {
    let block = Block::default()
        .title("  Export  ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::CODE_BG));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(8)])
        .split(inner);

    f.render_widget(snippet("Tailwind Config", "  /copy tailwind", &exports.tailwind), halves[0]);
    f.render_widget(snippet("CSS Variables", "  /copy css", &exports.css), halves[1]);
}
