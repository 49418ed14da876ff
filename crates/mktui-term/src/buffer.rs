#![forbid(unsafe_code)]

//! Styled cell grid with row-level diffing.
//!
//! One cell holds one scalar plus a style. Wide graphemes occupy their
//! display width: the scalar lands in the first cell and the following
//! cell is padded with a space so row text stays column-accurate.
//! Multi-scalar graphemes are reduced to their first scalar; the demo's
//! content is plain text and the presenter stays trivial for it.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::geometry::Rect;
use crate::style::Style;

/// A single screen cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

/// A width × height grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(usize::from(y) * usize::from(self.width) + usize::from(x))
        } else {
            None
        }
    }

    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Write a single cell. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Cell { ch, style };
        }
    }

    /// Write `text` starting at `(x, y)`, clipped to `max_x` and the
    /// buffer edge. Returns the column after the last cell written, so
    /// callers can continue a run of spans.
    pub fn set_string(&mut self, x: u16, y: u16, text: &str, style: Style, max_x: u16) -> u16 {
        let limit = max_x.min(self.width);
        let mut x = x;
        for grapheme in text.graphemes(true) {
            let width = grapheme.width().max(1) as u16;
            if x >= limit || x.saturating_add(width) > limit {
                break;
            }
            let ch = grapheme.chars().next().unwrap_or(' ');
            self.set(x, y, ch, style);
            for pad in 1..width {
                self.set(x + pad, y, ' ', style);
            }
            x += width;
        }
        x
    }

    /// Fill an area with one character.
    pub fn fill(&mut self, area: Rect, ch: char, style: Style) {
        for y in area.y..area.bottom().min(self.height) {
            for x in area.x..area.right().min(self.width) {
                self.set(x, y, ch, style);
            }
        }
    }

    /// Restyle an area without touching its characters.
    pub fn set_style(&mut self, area: Rect, style: Style) {
        for y in area.y..area.bottom().min(self.height) {
            for x in area.x..area.right().min(self.width) {
                if let Some(i) = self.index(x, y) {
                    self.cells[i].style = style;
                }
            }
        }
    }

    /// One row of cells.
    #[must_use]
    pub fn row(&self, y: u16) -> &[Cell] {
        match self.index(0, y) {
            Some(start) => &self.cells[start..start + usize::from(self.width)],
            None => &[],
        }
    }

    /// The characters of one row, continuation padding included.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|cell| cell.ch).collect()
    }

    /// Rows that differ from `prev`. A size mismatch dirties every row.
    #[must_use]
    pub fn diff_rows(&self, prev: &Buffer) -> Vec<u16> {
        if self.width != prev.width || self.height != prev.height {
            return (0..self.height).collect();
        }
        (0..self.height)
            .filter(|&y| self.row(y) != prev.row(y))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn set_string_writes_and_returns_next_column() {
        let mut buffer = Buffer::new(10, 1);
        let next = buffer.set_string(2, 0, "abc", Style::default(), 10);
        assert_eq!(next, 5);
        assert_eq!(buffer.row_text(0), "  abc     ");
    }

    #[test]
    fn set_string_clips_at_limit() {
        let mut buffer = Buffer::new(10, 1);
        let next = buffer.set_string(0, 0, "abcdef", Style::default(), 4);
        assert_eq!(next, 4);
        assert_eq!(buffer.row_text(0), "abcd      ");
    }

    #[test]
    fn set_string_clips_at_buffer_edge() {
        let mut buffer = Buffer::new(4, 1);
        buffer.set_string(0, 0, "abcdef", Style::default(), 10);
        assert_eq!(buffer.row_text(0), "abcd");
    }

    #[test]
    fn wide_grapheme_pads_its_second_column() {
        let mut buffer = Buffer::new(6, 1);
        let next = buffer.set_string(0, 0, "日x", Style::default(), 6);
        assert_eq!(next, 3);
        assert_eq!(buffer.get(0, 0).map(|c| c.ch), Some('日'));
        assert_eq!(buffer.get(1, 0).map(|c| c.ch), Some(' '));
        assert_eq!(buffer.get(2, 0).map(|c| c.ch), Some('x'));
    }

    #[test]
    fn wide_grapheme_does_not_straddle_the_limit() {
        let mut buffer = Buffer::new(6, 1);
        let next = buffer.set_string(0, 0, "a日", Style::default(), 2);
        // The wide glyph needs columns 1..3 but the limit is 2.
        assert_eq!(next, 1);
        assert_eq!(buffer.row_text(0), "a     ");
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut buffer = Buffer::new(2, 2);
        buffer.set(5, 5, 'x', Style::default());
        assert_eq!(buffer.row_text(0), "  ");
    }

    #[test]
    fn diff_rows_reports_only_changed_rows() {
        let mut prev = Buffer::new(4, 3);
        prev.set_string(0, 1, "old", Style::default(), 4);
        let mut next = prev.clone();
        assert!(next.diff_rows(&prev).is_empty());

        next.set_string(0, 1, "new", Style::default(), 4);
        next.set(0, 2, '!', Style::default());
        assert_eq!(next.diff_rows(&prev), vec![1, 2]);
    }

    #[test]
    fn style_only_change_is_a_diff() {
        let prev = Buffer::new(3, 1);
        let mut next = prev.clone();
        next.set_style(Rect::new(0, 0, 3, 1), Style::new().fg(Color::Red));
        assert_eq!(next.diff_rows(&prev), vec![0]);
    }

    #[test]
    fn size_mismatch_dirties_everything() {
        let prev = Buffer::new(3, 2);
        let next = Buffer::new(4, 2);
        assert_eq!(next.diff_rows(&prev), vec![0, 1]);
    }

    #[test]
    fn fill_respects_area() {
        let mut buffer = Buffer::new(4, 2);
        buffer.fill(Rect::new(1, 0, 2, 2), '#', Style::default());
        assert_eq!(buffer.row_text(0), " ## ");
        assert_eq!(buffer.row_text(1), " ## ");
    }
}
