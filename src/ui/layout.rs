//! Two-column layout: editor and exports on the left, previews on the right.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{
    EDITOR_HEIGHT, HEADER_HEIGHT, INPUT_HEIGHT, LEFT_COLUMN_PCT, MIN_BODY_LINES,
    PALETTE_MAX_HEIGHT, STATUS_HEIGHT,
};

#[derive(Clone, Debug)]
pub struct LayoutRegions {
    pub header: Rect,
    pub editor: Rect,
    pub exports: Rect,
    pub hero: Rect,
    pub mobile: Rect,
    pub components: Rect,
    pub input: Rect,
    pub status: Rect,
}

/// Returns the rect for the command palette overlay just above the input bar.
#[inline]
pub fn palette_overlay_rect(area: Rect, input: Rect) -> Rect {
    let max_h = input.y.saturating_sub(area.y).min(PALETTE_MAX_HEIGHT);
    Rect {
        x: area.x,
        y: input.y.saturating_sub(max_h),
        width: area.width,
        height: max_h,
    }
}

pub fn compute(area: Rect) -> LayoutRegions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(MIN_BODY_LINES),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(LEFT_COLUMN_PCT),
            Constraint::Percentage(100 - LEFT_COLUMN_PCT),
        ])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(EDITOR_HEIGHT), Constraint::Min(0)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(right[1]);

    LayoutRegions {
        header: rows[0],
        editor: left[0],
        exports: left[1],
        hero: right[0],
        mobile: bottom[0],
        components: bottom[1],
        input: rows[2],
        status: rows[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_fit_inside_area() {
        let area = Rect::new(0, 0, 120, 40);
        let r = compute(area);
        for rect in [r.header, r.editor, r.exports, r.hero, r.mobile, r.components, r.input, r.status] {
            assert!(rect.right() <= area.right() && rect.bottom() <= area.bottom());
        }
        assert_eq!(r.status.bottom(), area.bottom());
        assert!(r.editor.x < r.hero.x);
    }

    #[test]
    fn overlay_sits_above_input() {
        let area = Rect::new(0, 0, 80, 30);
        let r = compute(area);
        let overlay = palette_overlay_rect(area, r.input);
        assert_eq!(overlay.bottom(), r.input.y);
        assert!(overlay.height <= PALETTE_MAX_HEIGHT);
    }
}
