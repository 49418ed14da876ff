#![forbid(unsafe_code)]

//! One render pass worth of output.

use crate::buffer::Buffer;
use crate::geometry::Rect;

/// The target of a single `view` call. Widgets draw into `buffer`; the
/// runtime presents it and keeps it for diffing against the next frame.
#[derive(Debug, Clone)]
pub struct Frame {
    pub buffer: Buffer,
}

impl Frame {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
        }
    }

    /// The full drawable area.
    #[must_use]
    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.buffer.width(), self.buffer.height())
    }
}
