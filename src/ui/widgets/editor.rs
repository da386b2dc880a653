//! Role editor: swatch, hex value and usage for each of the five roles.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::palette::{is_hex_color, ColorRole, Palette};
use crate::ui::theme::{colors, palette_color};

const LABEL_WIDTH: usize = 11;
const VALUE_WIDTH: usize = 9;

pub fn render(
    f: &mut Frame,
    palette: &Palette,
    selected: ColorRole,
    area: ratatui::prelude::Rect,
) {
    let block = Block::default()
        .title("  Palette  ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::BG));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines: Vec<Line> = ColorRole::ALL
        .iter()
        .map(|&role| {
            let value = palette.get(role);
            let is_selected = role == selected;
            let value_style = if is_hex_color(value) {
                Style::default().fg(colors::TEXT)
            } else {
                Style::default().fg(colors::ERROR)
            };
            Line::from(vec![
                Span::styled(
                    if is_selected { "▎" } else { " " },
                    Style::default().fg(colors::ACCENT),
                ),
                Span::styled("    ", Style::default().bg(palette_color(value))),
                Span::raw(" "),
                Span::styled(
                    format!("{:<width$}", role.label(), width = LABEL_WIDTH),
                    if is_selected {
                        Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(colors::TEXT_DIM)
                    },
                ),
                Span::styled(format!("{:<width$}", value, width = VALUE_WIDTH), value_style),
                Span::styled(role.description(), Style::default().fg(colors::MUTED)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}
