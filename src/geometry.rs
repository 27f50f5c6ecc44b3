//! Grid geometry: linear-index arithmetic and the grid-resize transform.
//!
//! Cells are addressed by a single linear index `y * width + x`. A symbol's
//! footprint is the rectangle spanned by its two corner indices, given in
//! either order.

use serde::Serialize;

use crate::error::ParseError;
use crate::limits;
use crate::parser::parse;
use crate::serialize::stringify;
use crate::types::UniCompSpec;

/// A normalized rectangle in cell coordinates (`x1 <= x2`, `y1 <= y2`,
/// inclusive corners).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
    pub width: usize,
    pub height: usize,
}

/// A rectangle as origin plus extent, the form drag/resize surfaces use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellRect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

/// Split a linear index into `(x, y)` for the given grid width.
pub fn linear_to_coords(index: usize, width: usize) -> (usize, usize) {
    debug_assert!(width > 0);
    (index % width, index / width)
}

/// Normalize two arbitrary corner indices into a [`Rect`]. Corner order is
/// irrelevant: `rect_between(a, b, w) == rect_between(b, a, w)`.
pub fn rect_between(start: usize, end: usize, width: usize) -> Rect {
    let (sx, sy) = linear_to_coords(start, width);
    let (ex, ey) = linear_to_coords(end, width);

    let x1 = sx.min(ex);
    let x2 = sx.max(ex);
    let y1 = sy.min(ey);
    let y2 = sy.max(ey);

    Rect {
        x1,
        y1,
        x2,
        y2,
        width: x2 - x1 + 1,
        height: y2 - y1 + 1,
    }
}

/// Convert a symbol's corner indices into origin-plus-extent form.
/// Inverse of [`coords_to_symbol_indices`] for rectangles inside the grid.
pub fn symbol_to_coords(start: usize, end: usize, width: usize) -> CellRect {
    let rect = rect_between(start, end, width);
    CellRect {
        x: rect.x1,
        y: rect.y1,
        w: rect.width,
        h: rect.height,
    }
}

/// Convert origin-plus-extent back into `(start, end)` corner indices.
pub fn coords_to_symbol_indices(coords: CellRect, width: usize) -> (usize, usize) {
    debug_assert!(coords.w > 0 && coords.h > 0);
    let start = coords.y * width + coords.x;
    let end = (coords.y + coords.h - 1) * width + (coords.x + coords.w - 1);
    (start, end)
}

/// Re-target a rule onto a grid of different dimensions.
///
/// The rule is parsed, each symbol's corners are decomposed under the old
/// width, each coordinate is independently clamped into the new bounds,
/// indices are recomputed under the new width, and the result is
/// re-serialized. The policy is clamp, never reject: a symbol fully
/// outside the new bounds collapses to a single clamped cell instead of
/// being dropped, so it stays visible and editable.
pub fn resize_grid(rule: &str, new_width: usize, new_height: usize) -> Result<String, ParseError> {
    for (label, value) in [("width", new_width), ("height", new_height)] {
        if !(limits::MIN_GRID_SIZE..=limits::MAX_GRID_SIZE).contains(&value) {
            return Err(ParseError::limit(
                format!(
                    "grid {} must be between {} and {}, got {}",
                    label,
                    limits::MIN_GRID_SIZE,
                    limits::MAX_GRID_SIZE,
                    value
                ),
                None,
            ));
        }
    }

    let spec = parse(rule)?;
    let old_width = spec.grid_width;

    let mut resized = UniCompSpec::new(new_width, new_height);
    resized.name = spec.name.clone();
    resized.id = spec.id.clone();
    resized.class_name = spec.class_name.clone();

    for mut symbol in spec.symbols {
        let (sx, sy) = linear_to_coords(symbol.start, old_width);
        let (ex, ey) = linear_to_coords(symbol.end, old_width);

        let sx = sx.min(new_width - 1);
        let sy = sy.min(new_height - 1);
        let ex = ex.min(new_width - 1);
        let ey = ey.min(new_height - 1);

        symbol.start = sy * new_width + sx;
        symbol.end = ey * new_width + ex;
        resized.symbols.push(symbol);
    }

    let text = stringify(&resized);
    Ok(text)
}
