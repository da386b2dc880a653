//! Status bar: spinner while generating, otherwise the latest notice.

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::{Notice, NoticeKind};
use crate::ui::theme::colors;

const HINTS: &str = " Tab role  / commands  ↑↓ history  Esc dismiss  q quit ";

pub fn render(
    f: &mut Frame,
    area: ratatui::prelude::Rect,
    loading: bool,
    spinner_char: char,
    notice: Option<&Notice>,
) {
    let (left, left_color) = match (loading, notice) {
        (true, _) => (format!(" {} Generating…", spinner_char), colors::ACCENT),
        (false, Some(n)) if n.kind == NoticeKind::Error => (format!(" ✗ {}", n.text), colors::ERROR),
        (false, Some(n)) => (format!(" {}", n.text), colors::TEXT_DIM),
        (false, None) => (" Ready".to_string(), colors::MUTED),
    };
    let width = area.width as usize;
    let right_len = HINTS.chars().count();
    let left_len = left.chars().count();
    // Drop the hints before clipping the message.
    let right = if left_len + right_len <= width { HINTS } else { "" };
    let pad = width.saturating_sub(left_len + right.chars().count());
    let line = Line::from(vec![
        Span::styled(left, Style::default().fg(left_color)),
        Span::raw(" ".repeat(pad)),
        Span::styled(right, Style::default().fg(colors::MUTED)),
    ]);
    let para = Paragraph::new(line).style(Style::default().bg(colors::ELEVATED));
    f.render_widget(para, area);
}
