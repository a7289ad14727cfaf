//! Grid: A cell raster that strokes segments.
//!
//! One surface unit maps to one cell. A cell is painted when its center lies
//! inside the stroke rectangle (butt caps, no anti-aliasing). Everything outside
//! the grid is clipped away.

use std::ops::Range;

use super::DrawingSurface;
use crate::color::Rgba;
use crate::layout::Point;

/// A grid of colored cells, stored row-major: `index = y * width + x`.
///
/// Empty cells hold [`Rgba::TRANSPARENT`].
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Rgba>,
    /// Width in cells.
    width: u16,
    /// Height in cells.
    height: u16,
}

impl Grid {
    /// Create a new grid with every cell empty.
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "Grid dimensions must be non-zero");
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![Rgba::TRANSPARENT; size],
            width,
            height,
        }
    }

    /// Get the grid width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the grid height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the grid is empty (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Get the color at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<Rgba> {
        self.index_of(x, y).map(|i| self.cells[i])
    }

    /// Set the color at (x, y).
    ///
    /// Returns `false` if coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, color: Rgba) -> bool {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = color;
            true
        } else {
            false
        }
    }

    /// Fill a rectangular region, clipped to the grid.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: Rgba) {
        let rows = y..y.saturating_add(height).min(self.height);
        let cols = x..x.saturating_add(width).min(self.width);
        for row in rows {
            for col in cols.clone() {
                if let Some(idx) = self.index_of(col, row) {
                    self.cells[idx] = color;
                }
            }
        }
    }

    /// Reset every cell to transparent.
    pub fn clear(&mut self) {
        self.cells.fill(Rgba::TRANSPARENT);
    }

    /// Count cells that are not transparent.
    pub fn painted(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_transparent()).count()
    }

    /// Get an iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgba]> {
        self.cells.chunks(self.width as usize)
    }

    /// Render as text, `#` for painted cells and `.` for empty ones.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.len() + self.height as usize);
        for row in self.rows() {
            out.extend(row.iter().map(|c| if c.is_transparent() { '.' } else { '#' }));
            out.push('\n');
        }
        out
    }

    /// Cells whose centers fall in `[min, max]` along one axis.
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    fn cell_span(min: f32, max: f32, limit: u16) -> Range<u16> {
        let lo = (min - 0.5).ceil().max(0.0);
        let hi = ((max - 0.5).floor() + 1.0).min(f32::from(limit));
        if hi <= lo {
            return 0..0;
        }
        (lo as u16)..(hi as u16)
    }
}

impl DrawingSurface for Grid {
    fn draw_segment(&mut self, start: Point, end: Point, thickness: f32, color: Rgba) {
        let finite = [start.x, start.y, end.x, end.y, thickness]
            .iter()
            .all(|v| v.is_finite());
        if !finite || thickness <= 0.0 || color.is_transparent() {
            return;
        }

        let d = end - start;
        let len = d.x.hypot(d.y);
        if len <= 0.0 {
            return;
        }
        let (ux, uy) = (d.x / len, d.y / len);
        let half = thickness / 2.0;

        let cols = Self::cell_span(start.x.min(end.x) - half, start.x.max(end.x) + half, self.width);
        let rows = Self::cell_span(start.y.min(end.y) - half, start.y.max(end.y) + half, self.height);

        for row in rows {
            for col in cols.clone() {
                let cx = f32::from(col) + 0.5 - start.x;
                let cy = f32::from(row) + 0.5 - start.y;
                let along = cx.mul_add(ux, cy * uy);
                let across = cx.mul_add(uy, -(cy * ux)).abs();
                if (0.0..len).contains(&along) && across <= half {
                    self.set(col, row, color);
                }
            }
        }
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("painted", &self.painted())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_new() {
        let grid = Grid::new(20, 4);
        assert_eq!(grid.width(), 20);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.len(), 80);
        assert_eq!(grid.painted(), 0);
    }

    #[test]
    #[should_panic]
    fn test_grid_zero_height() {
        Grid::new(10, 0);
    }

    #[test]
    fn test_grid_bounds() {
        let mut grid = Grid::new(8, 2);
        assert!(grid.set(7, 1, Rgba::WHITE));
        assert!(!grid.set(8, 1, Rgba::WHITE));
        assert_eq!(grid.get(7, 1), Some(Rgba::WHITE));
        assert!(grid.get(7, 2).is_none());
    }

    #[test]
    fn test_grid_fill_rect_clips() {
        let mut grid = Grid::new(5, 3);
        grid.fill_rect(3, 1, 10, 10, Rgba::BLACK);
        assert_eq!(grid.painted(), 4);
        grid.clear();
        assert_eq!(grid.painted(), 0);
    }

    #[test]
    fn test_horizontal_stroke() {
        let mut grid = Grid::new(6, 3);
        grid.draw_segment(Point::new(1.0, 1.0), Point::new(5.0, 1.0), 2.0, Rgba::MID_GRAY);
        assert_eq!(grid.to_ascii(), ".####.\n.####.\n......\n");
    }

    #[test]
    fn test_vertical_stroke() {
        let mut grid = Grid::new(3, 5);
        grid.draw_segment(Point::new(1.0, 0.0), Point::new(1.0, 4.0), 2.0, Rgba::MID_GRAY);
        assert_eq!(grid.to_ascii(), "##.\n##.\n##.\n##.\n...\n");
    }

    #[test]
    fn test_stroke_clipped_to_bounds() {
        let mut grid = Grid::new(4, 2);
        grid.draw_segment(Point::new(-3.0, 1.0), Point::new(30.0, 1.0), 2.0, Rgba::WHITE);
        assert_eq!(grid.painted(), 8);
    }

    #[test]
    fn test_degenerate_strokes_ignored() {
        let mut grid = Grid::new(4, 4);
        grid.draw_segment(Point::new(1.0, 1.0), Point::new(1.0, 1.0), 2.0, Rgba::WHITE);
        grid.draw_segment(Point::ZERO, Point::new(4.0, 0.0), 0.0, Rgba::WHITE);
        grid.draw_segment(Point::ZERO, Point::new(f32::NAN, 0.0), 2.0, Rgba::WHITE);
        grid.draw_segment(Point::ZERO, Point::new(4.0, 0.0), 2.0, Rgba::TRANSPARENT);
        assert_eq!(grid.painted(), 0);
    }

    #[test]
    fn test_diagonal_stroke() {
        let mut grid = Grid::new(4, 4);
        grid.draw_segment(Point::ZERO, Point::new(4.0, 4.0), 1.0, Rgba::WHITE);
        assert_eq!(grid.to_ascii(), "#...\n.#..\n..#.\n...#\n");
    }
}
