//! Header banner: app title, version and the active generation source.

use ratatui::{
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::styles;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const TITLE: &str = "◆ Chroma ";
const SUBTITLE: &str = "Sophisticate";

/// Truncate to `max_chars` from the end with ellipsis. Single pass over chars.
fn truncate_end(s: &str, max_chars: usize) -> String {
    let count = s.chars().count();
    if count <= max_chars {
        return s.to_string();
    }
    let take = max_chars.saturating_sub(1);
    let skip = count.saturating_sub(take);
    format!("…{}", s.chars().skip(skip).collect::<String>())
}

pub fn render(f: &mut Frame, area: ratatui::prelude::Rect, source: &str) {
    let total = area.width as usize;
    let dash_count = total.saturating_sub(2);
    // Between "│ " and " │".
    let inner = total.saturating_sub(4);

    let version = format!(" (v{VERSION})");
    let left_len = TITLE.chars().count() + SUBTITLE.chars().count() + version.chars().count();
    let powered_max = inner.saturating_sub(left_len + 1);
    let powered = truncate_end(&format!("Powered by {source}"), powered_max);
    let pad = inner.saturating_sub(left_len + powered.chars().count());

    let border = styles::border();
    let lines = vec![
        Line::from(Span::styled(format!("╭{}╮", "─".repeat(dash_count)), border)),
        Line::from(vec![
            Span::styled("│ ", border),
            Span::styled(TITLE, styles::accent_bold()),
            Span::styled(SUBTITLE, styles::title()),
            Span::styled(version, styles::text_dim()),
            Span::raw(" ".repeat(pad)),
            Span::styled(powered, styles::muted()),
            Span::styled(" │", border),
        ]),
        Line::from(Span::styled(format!("╰{}╯", "─".repeat(dash_count)), border)),
    ];

    let para = Paragraph::new(lines).style(styles::elevated_bg());
    f.render_widget(para, area);
}
