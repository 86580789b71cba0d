//! Geometry primitives.

/// Axis-aligned rectangle in toolkit coordinates.
///
/// The default rectangle is empty; it is the documented fallback for
/// `keyboard_rect()` when no text-input session exists yet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// A rectangle with no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
