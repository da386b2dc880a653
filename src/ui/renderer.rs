//! Full-screen render: header, editor, exports, previews, input, status, palette overlay.

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::app::App;
use crate::ui::layout;
use crate::ui::theme::{colors, SPINNER};
use crate::ui::widgets::{
    render_components, render_editor, render_export, render_header, render_hero, render_input,
    render_mobile, render_palette, render_status,
};

pub fn render(f: &mut Frame, app: &App, tick: usize) {
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(colors::BG)), area);
    let regions = layout::compute(area);

    let spinner_char = SPINNER[tick % SPINNER.len()];
    let palette = app.state.palette.current();
    let loading = app.state.loading();

    render_header(f, regions.header, app.source_name());
    render_editor(f, palette, app.state.selected_role, regions.editor);
    render_export(f, &app.exports(), regions.exports);
    render_hero(f, palette, regions.hero);
    render_mobile(f, palette, regions.mobile);
    render_components(f, palette, regions.components);
    render_input(
        f,
        app.state.input_buffer(),
        app.state.input_cursor(),
        loading,
        regions.input,
    );
    render_status(f, regions.status, loading, spinner_char, app.state.notice.as_ref());

    if app.state.command_palette.visible {
        let overlay = layout::palette_overlay_rect(area, regions.input);
        render_palette(f, &app.state.command_palette, overlay);
    }
}
