//! Positioned text fragments handed over by the document parser.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};

/// One fragment of rendered text.
///
/// `x` is the span's own left edge; `y` is the top of the line that contains
/// it, so every span of one rendered line shares the same `y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    /// Raw text as the parser reported it
    pub text: String,
    /// Horizontal origin
    pub x: f32,
    /// Vertical origin of the containing line
    pub y: f32,
}

impl TextSpan {
    /// Create a span at an explicit origin.
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }

    /// Create a span from its bounding box (origin = top-left corner).
    pub fn from_bbox(text: impl Into<String>, bbox: &Rect) -> Self {
        let origin = bbox.origin();
        Self::new(text, origin.x, origin.y)
    }

    /// The span origin.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
