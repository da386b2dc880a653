//! Live previews: marketing hero, mobile banking app, components showcase.
//!
//! Each preview only reads the palette; colors that fail to parse render
//! with the neutral fallback.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::palette::Palette;
use crate::ui::theme::{colors, palette_color, readable_on};

/// Resolved terminal colors for one render pass.
struct Swatches {
    primary: Color,
    secondary: Color,
    accent: Color,
    background: Color,
    surface: Color,
    on_primary: Color,
    on_accent: Color,
}

impl Swatches {
    fn resolve(palette: &Palette) -> Self {
        Self {
            primary: palette_color(&palette.primary),
            secondary: palette_color(&palette.secondary),
            accent: palette_color(&palette.accent),
            background: palette_color(&palette.background),
            surface: palette_color(&palette.surface),
            on_primary: readable_on(&palette.primary),
            on_accent: readable_on(&palette.accent),
        }
    }
}

fn frame_block(title: &str, bg: Color) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(Style::default().fg(colors::MUTED))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(bg))
}

fn button(label: &str, fg: Color, bg: Color) -> Span<'static> {
    Span::styled(
        format!(" {label} "),
        Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
    )
}

pub fn render_hero(f: &mut Frame, palette: &Palette, area: Rect) {
    let s = Swatches::resolve(palette);
    let block = frame_block(" Hero ", s.background);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let on_bg = Style::default().bg(s.background);
    let lines = vec![
        Line::from(vec![
            Span::styled("■ Lumen", on_bg.fg(s.primary).add_modifier(Modifier::BOLD)),
            Span::styled("    Product  Pricing  Docs", on_bg.fg(s.secondary)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Design systems that feel inevitable.",
            on_bg.fg(s.primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Ship consistent interfaces with a palette your whole team trusts.",
            on_bg.fg(s.secondary),
        )),
        Line::from(""),
        Line::from(vec![
            button("Get started", s.on_accent, s.accent),
            Span::styled("  ", on_bg),
            button("Learn more", s.primary, s.surface),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" ✓ 99.9% uptime ", Style::default().fg(s.secondary).bg(s.surface)),
            Span::styled(" ", on_bg),
            Span::styled(" ★ 4.9 rating ", Style::default().fg(s.secondary).bg(s.surface)),
        ]),
    ];
    let para = Paragraph::new(lines).style(on_bg).wrap(Wrap { trim: false });
    f.render_widget(para, inner);
}

pub fn render_mobile(f: &mut Frame, palette: &Palette, area: Rect) {
    let s = Swatches::resolve(palette);
    let block = frame_block(" Mobile ", s.background);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let on_bg = Style::default().bg(s.background);
    let card = Style::default().bg(s.primary).fg(s.on_primary);
    let row = Style::default().bg(s.surface).fg(s.secondary);
    let width = inner.width as usize;
    let pad = |text: &str| format!("{text:<width$}");

    let lines = vec![
        Line::from(Span::styled("Good morning, Alex", on_bg.fg(s.primary).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(pad(" Total balance"), card)),
        Line::from(Span::styled(pad(" $12,480.22"), card.add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(vec![
            button("Send", s.on_accent, s.accent),
            Span::styled(" ", on_bg),
            button("Pay", s.on_accent, s.accent),
            Span::styled(" ", on_bg),
            button("Top up", s.primary, s.surface),
        ]),
        Line::from(""),
        Line::from(Span::styled(pad(" Coffee Roasters      -$4.50"), row)),
        Line::from(Span::styled(pad(" Salary            +$3,200.00"), row)),
        Line::from(Span::styled(pad(" Grocery Market      -$62.18"), row)),
    ];
    let para = Paragraph::new(lines).style(on_bg);
    f.render_widget(para, inner);
}

pub fn render_components(f: &mut Frame, palette: &Palette, area: Rect) {
    let s = Swatches::resolve(palette);
    let block = frame_block(" Components ", s.surface);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let on_surface = Style::default().bg(s.surface);
    let bar_width = (inner.width as usize).saturating_sub(2).min(24);
    let filled = bar_width * 2 / 3;

    let lines = vec![
        Line::from(vec![
            button("Primary", s.on_primary, s.primary),
            Span::styled(" ", on_surface),
            button("Secondary", readable_on(&palette.secondary), s.secondary),
            Span::styled(" ", on_surface),
            button("Accent", s.on_accent, s.accent),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Badge ", on_surface.fg(s.secondary)),
            Span::styled(" NEW ", Style::default().fg(s.on_accent).bg(s.accent)),
            Span::styled("  Toggle ", on_surface.fg(s.secondary)),
            Span::styled(" ●━━ ", Style::default().fg(s.accent).bg(s.background)),
        ]),
        Line::from(""),
        Line::from(Span::styled("Email address", on_surface.fg(s.primary).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(
            format!(" {:<width$}", "you@example.com", width = bar_width.saturating_sub(1)),
            Style::default().fg(s.secondary).bg(s.background),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("━".repeat(filled), on_surface.fg(s.accent)),
            Span::styled("━".repeat(bar_width - filled), on_surface.fg(s.secondary)),
        ]),
    ];
    let para = Paragraph::new(lines).style(on_surface);
    f.render_widget(para, inner);
}
