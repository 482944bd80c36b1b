use serde::{Deserialize, Serialize};

/// A screen coordinate, top-left origin, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Margin kept from the left and top viewport edges.
const EDGE_MARGIN: f64 = 60.0;
/// Margin kept from the bottom edge.
const BOTTOM_MARGIN: f64 = 80.0;
/// Widest marker we place; the right edge insets by this much so an
/// anchored marker stays fully on screen.
const MARKER_WIDTH: f64 = 100.0;

/// The sub-rectangle of the viewport in which markers are fully visible.
///
/// Recomputed from current viewport dimensions on every placement pass —
/// never persisted, so window resizes are picked up for free.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafeZone {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl SafeZone {
    /// Compute the zone for a viewport of `width × height` pixels.
    ///
    /// On viewports too small for the margins the zone collapses toward the
    /// top-left corner instead of inverting, keeping clamping total.
    pub fn from_viewport(width: u32, height: u32) -> Self {
        let right = (f64::from(width) - MARKER_WIDTH).max(EDGE_MARGIN);
        let bottom = (f64::from(height) - BOTTOM_MARGIN).max(EDGE_MARGIN);
        Self {
            left: EDGE_MARGIN,
            top: EDGE_MARGIN,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Whether a point lies inside the zone (edges inclusive).
    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position.x >= self.left
            && position.x <= self.right
            && position.y >= self.top
            && position.y <= self.bottom
    }

    /// Clamp a point into the zone.
    #[inline]
    pub fn clamp(&self, position: Position) -> Position {
        Position {
            x: position.x.clamp(self.left, self.right),
            y: position.y.clamp(self.top, self.bottom),
        }
    }

    /// The four corners, in fallback-placement order:
    /// top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Position; 4] {
        [
            Position::new(self.left, self.top),
            Position::new(self.right, self.top),
            Position::new(self.right, self.bottom),
            Position::new(self.left, self.bottom),
        ]
    }
}
