//! Offscreen compositing.
//!
//! Sections and cards are rendered into their own [`Buffer`] at their full
//! size, then copied onto the frame at a (possibly negative) row offset.
//! Anything outside `clip` is dropped, which is how partially scrolled
//! blocks are cut at the page edges.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    widgets::Widget,
};

use crate::core::reveal::RevealStyle;

/// Below this opacity a revealing block is not drawn at all.
const HIDDEN_BELOW: f64 = 0.05;

/// Render `widget` into a fresh buffer of `width x height`.
pub fn offscreen(widget: impl Widget, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    buf
}

/// Copy `src` onto `dst` with its top-left corner at `(x, y)`, clipped to
/// `clip`.  `y` may be negative or past the bottom.
pub fn blit(src: &Buffer, dst: &mut Buffer, clip: Rect, x: i32, y: i32, dim: bool) {
    let src_area = src.area;
    for row in 0..src_area.height {
        let dy = y + i32::from(row);
        if dy < i32::from(clip.top()) || dy >= i32::from(clip.bottom()) {
            continue;
        }
        for col in 0..src_area.width {
            let dx = x + i32::from(col);
            if dx < i32::from(clip.left()) {
                continue;
            }
            if dx >= i32::from(clip.right()) {
                break;
            }
            let (Some(cell), Some(target)) = (
                src.cell((src_area.x + col, src_area.y + row)),
                dst.cell_mut((dx as u16, dy as u16)),
            ) else {
                continue;
            };
            *target = cell.clone();
            if dim {
                let style = target.style().add_modifier(Modifier::DIM);
                target.set_style(style);
            }
        }
    }
}

/// [`blit`] a revealing block: shifted down by the remaining rise, dimmed
/// while fading in, skipped while still hidden.
pub fn blit_revealed(
    src: &Buffer,
    dst: &mut Buffer,
    clip: Rect,
    x: i32,
    y: i32,
    style: RevealStyle,
) {
    if style.opacity < HIDDEN_BELOW {
        return;
    }
    let rise = style.offset_rows.round() as i32;
    blit(src, dst, clip, x, y + rise, style.opacity < 1.0);
}
