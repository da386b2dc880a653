//! Command palette: slash commands with accent bar selection.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::state::CommandPaletteState;
use crate::ui::theme::colors;

pub fn render(f: &mut Frame, menu: &CommandPaletteState, area: ratatui::prelude::Rect) {
    if !menu.visible || menu.filtered.is_empty() {
        return;
    }
    f.render_widget(Clear, area);
    let block = Block::default()
        .title("  Commands  ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::ELEVATED));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let take = inner.height as usize;
    // Keep the selection visible when the list is longer than the box.
    let skip = menu.selected_index.saturating_sub(take.saturating_sub(1));
    let lines: Vec<Line> = menu
        .filtered
        .iter()
        .enumerate()
        .skip(skip)
        .take(take)
        .filter_map(|(i, &idx)| menu.commands.get(idx).map(|cmd| (i, cmd)))
        .map(|(i, cmd)| {
            let selected = i == menu.selected_index;
            Line::from(vec![
                Span::styled(if selected { "▎ " } else { "  " }, Style::default().fg(colors::ACCENT)),
                Span::styled(
                    format!("{:<16}", cmd.name),
                    if selected {
                        Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(colors::TEXT_DIM)
                    },
                ),
                Span::styled(
                    cmd.description.as_str(),
                    Style::default().fg(if selected { colors::TEXT_DIM } else { colors::MUTED }),
                ),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}
