//! `OutputBuffer`: Single-syscall output buffer for terminal commands.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal::{Clear, ClearType},
};

use crate::color::Rgba;
use crate::surface::Grid;

/// Pre-allocated buffer for queued terminal commands.
///
/// All output is accumulated here, then flushed in a single `write()` call
/// to prevent terminal flickering.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical terminal (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Clear the entire screen.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.data, Clear(ClearType::All))
    }

    /// Hide cursor.
    pub fn cursor_hide(&mut self) -> io::Result<()> {
        queue!(self.data, Hide)
    }

    /// Show cursor.
    pub fn cursor_show(&mut self) -> io::Result<()> {
        queue!(self.data, Show)
    }

    /// Queue `grid` with its top-left corner at terminal cell (x, y).
    ///
    /// Painted cells become spaces on their color; empty cells are written as
    /// plain spaces. Alpha is ignored.
    pub fn draw_grid(&mut self, grid: &Grid, x: u16, y: u16) -> io::Result<()> {
        for (row, cells) in (0..grid.height()).zip(grid.rows()) {
            queue!(self.data, MoveTo(x, y.saturating_add(row)))?;

            let mut current: Option<Rgba> = None;
            for &cell in cells {
                let wanted = (!cell.is_transparent()).then_some(cell);
                if wanted != current {
                    match wanted {
                        Some(c) => queue!(self.data, SetBackgroundColor(to_color(c)))?,
                        None => queue!(self.data, ResetColor)?,
                    }
                    current = wanted;
                }
                queue!(self.data, Print(' '))?;
            }

            if current.is_some() {
                queue!(self.data, ResetColor)?;
            }
        }
        Ok(())
    }

    /// Flush to a writer in a single call.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

const fn to_color(c: Rgba) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(out: &OutputBuffer) -> String {
        String::from_utf8(out.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn test_empty_grid_is_plain_spaces() {
        let grid = Grid::new(3, 1);
        let mut out = OutputBuffer::new();
        out.draw_grid(&grid, 0, 0).unwrap();

        let s = text(&out);
        assert!(s.ends_with("   "));
        assert!(!s.contains("48;2"));
    }

    #[test]
    fn test_color_runs_are_coalesced() {
        let mut grid = Grid::new(6, 1);
        grid.fill_rect(0, 0, 2, 1, Rgba::from_rgb(0x0A0B0C));
        grid.fill_rect(4, 0, 2, 1, Rgba::from_rgb(0x0A0B0C));

        let mut out = OutputBuffer::new();
        out.draw_grid(&grid, 2, 5).unwrap();

        let s = text(&out);
        assert_eq!(s.matches("48;2;10;11;12").count(), 2);
        assert!(s.starts_with("\x1b[6;3H"));
        assert_eq!(s.matches(' ').count(), 6);
    }

    #[test]
    fn test_clear_and_flush() {
        let mut out = OutputBuffer::new();
        out.cursor_hide().unwrap();
        assert!(!out.is_empty());

        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, out.as_bytes());

        out.clear();
        assert_eq!(out.len(), 0);
    }
}
