//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences, and the
//! half-block encoder that turns a canvas into terminal cells.

use crate::surface::{Canvas, Rgb};
use std::io::Write;

/// Upper half block: foreground paints the top pixel, background the bottom.
const HALF_BLOCK: &str = "\u{2580}";

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// A whole frame is accumulated here, then flushed with one `write()` so the
/// terminal never shows half a frame.
#[derive(Debug, Clone)]
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

    /// Create a buffer sized for a small frame (64KB).
    pub fn new() -> Self {
        Self::with_capacity(64 * 1024)
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
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Move cursor to the 0-indexed cell (x, y).
    #[inline]
    pub fn cursor_move(&mut self, x: u16, y: u16) {
        // Writes into a Vec cannot fail.
        let _ = write!(self.data, "\x1b[{};{}H", u32::from(y) + 1, u32::from(x) + 1);
    }

    /// Set foreground color (true color).
    #[inline]
    pub fn set_fg(&mut self, color: Rgb) {
        let _ = write!(self.data, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b);
    }

    /// Set background color (true color).
    #[inline]
    pub fn set_bg(&mut self, color: Rgb) {
        let _ = write!(self.data, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b);
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Flush to a writer in a single call.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode `canvas` into `out`, two pixel rows per terminal row.
///
/// A terminal of `cols x rows` cells wants a canvas `cols` wide and
/// `2 * rows` tall. Colors are only re-emitted when they change.
pub fn encode_canvas(canvas: &Canvas, out: &mut OutputBuffer) {
    let width = canvas.width();
    let rows = canvas.height() / 2;
    let mut fg = None;
    let mut bg = None;

    for row in 0..rows {
        out.cursor_move(0, row);
        let top_y = i32::from(row) * 2;
        for col in 0..width {
            let x = i32::from(col);
            let top = canvas.get(x, top_y).unwrap_or(Rgb::BLACK);
            let bottom = canvas.get(x, top_y + 1).unwrap_or(Rgb::BLACK);
            if fg != Some(top) {
                out.set_fg(top);
                fg = Some(top);
            }
            if bg != Some(bottom) {
                out.set_bg(bottom);
                bg = Some(bottom);
            }
            out.write_str(HALF_BLOCK);
        }
    }
    out.reset_attrs();
}
