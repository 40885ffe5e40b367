use rayon::prelude::*;

use crate::grid::Grid;

/// Fully transparent, used for empty slots by default.
pub const EMPTY_RGBA: [u8; 4] = [0, 0, 0, 0];

/// Grid dimensions as image dimensions, `None` if either exceeds `u32`.
pub fn image_size<E>(grid: &Grid<E>) -> Option<(u32, u32)> {
    let w = u32::try_from(grid.width()).ok()?;
    let h = u32::try_from(grid.height()).ok()?;
    Some((w, h))
}

/// One text line per row, top row first.
pub fn render_ascii<E>(grid: &Grid<E>, glyph: impl Fn(Option<&E>) -> char) -> String {
    let w = grid.width();
    let mut out = String::with_capacity((w + 1) * grid.height());
    for (x, _, cell) in grid.cells() {
        out.push(glyph(cell));
        if x + 1 == w {
            out.push('\n');
        }
    }
    out
}

/// Row-major RGBA buffer, `width * height * 4` bytes.
pub fn render_rgba<E, F>(grid: &Grid<E>, color: F) -> Vec<u8>
where
    E: Sync,
    F: Fn(Option<&E>) -> [u8; 4] + Sync,
{
    let w = grid.width();
    let mut rgba = vec![0u8; grid.capacity() * 4];
    if rgba.is_empty() {
        return rgba;
    }

    rgba.par_chunks_mut(w * 4)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..w {
                let out = &mut row[x * 4..x * 4 + 4];
                out.copy_from_slice(&color(grid.get(x as i64, y as i64)));
            }
        });

    rgba
}
