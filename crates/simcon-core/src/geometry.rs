#![forbid(unsafe_code)]

//! Pixel geometry primitives.
//!
//! Screen coordinates are signed pixels, 0-indexed, origin at the
//! top-left of the window. Rectangles are stored as corner pairs
//! because the console draw pass works in corners (panel bounds,
//! separator lines) rather than extents.

use std::ops::{Add, Sub};

/// A point on screen, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenCoords {
    /// Horizontal position in pixels.
    pub x: i32,
    /// Vertical position in pixels.
    pub y: i32,
}

impl ScreenCoords {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for ScreenCoords {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for ScreenCoords {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned rectangle, stored as inclusive corner pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenRect {
    /// Top-left corner (inclusive).
    pub top_left: ScreenCoords,
    /// Bottom-right corner (inclusive).
    pub bottom_right: ScreenCoords,
}

impl ScreenRect {
    /// Create a rectangle from its two corners.
    #[inline]
    pub const fn new(top_left: ScreenCoords, bottom_right: ScreenCoords) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Width in pixels.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.bottom_right.x - self.top_left.x
    }

    /// Height in pixels.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.bottom_right.y - self.top_left.y
    }

    /// Check if the rectangle covers no pixels.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// A 1px-tall horizontal span between two x positions at `y`.
    #[inline]
    pub const fn hline(x0: i32, x1: i32, y: i32) -> Self {
        Self::new(ScreenCoords::new(x0, y), ScreenCoords::new(x1, y))
    }
}
