//! TUI widgets: header, role editor, previews, export, input, status, command palette.

mod editor;
mod export;
mod header;
mod input;
mod palette;
mod previews;
mod status;

pub use editor::render as render_editor;
pub use export::render as render_export;
pub use header::render as render_header;
pub use input::render as render_input;
pub use palette::render as render_palette;
pub use previews::{render_components, render_hero, render_mobile};
pub use status::render as render_status;
