use ratatui::layout::{Constraint, Flex};
use ratatui::prelude::{Layout, Rect};
use ratatui::widgets::{Block, Borders};

/// Area inside a bordered block drawn over `area`.
pub(super) fn inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Popup of `width` x `height` cells centered in `r`, clamped to fit.
pub(super) fn centered_box(width: u16, height: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(r.height))])
        .flex(Flex::Center)
        .areas(r);
    let [area] = Layout::horizontal([Constraint::Length(width.min(r.width))])
        .flex(Flex::Center)
        .areas(row);
    area
}
