#![forbid(unsafe_code)]

//! Geometric primitives for hover classification.
//!
//! Coordinates are integer cells (0-indexed, origin at top-left). Hosts that
//! work in fractional pixels quantize before handing geometry to the core,
//! which keeps midpoint decisions exact.

/// Layout direction of a container's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Orientation {
    /// Items stack top to bottom; edges are `top`/`bottom`.
    #[default]
    Vertical,
    /// Items flow left to right; edges are `left`/`right`.
    Horizontal,
}

/// A pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Coordinate along the main axis of `orientation`.
    #[inline]
    pub const fn along(self, orientation: Orientation) -> u16 {
        match orientation {
            Orientation::Vertical => self.y,
            Orientation::Horizontal => self.x,
        }
    }
}

/// A bounding box for a hovered row or container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Leading coordinate along the main axis of `orientation`.
    #[inline]
    pub const fn start(&self, orientation: Orientation) -> u16 {
        match orientation {
            Orientation::Vertical => self.y,
            Orientation::Horizontal => self.x,
        }
    }

    /// Size along the main axis of `orientation`.
    #[inline]
    pub const fn extent(&self, orientation: Orientation) -> u16 {
        match orientation {
            Orientation::Vertical => self.height,
            Orientation::Horizontal => self.width,
        }
    }

    /// Offset of `point` from the leading edge along `orientation`.
    ///
    /// Saturates at zero for points before the leading edge; points past the
    /// trailing edge yield offsets `>= extent`.
    #[inline]
    pub const fn offset_of(&self, point: Point, orientation: Orientation) -> u16 {
        point
            .along(orientation)
            .saturating_sub(self.start(orientation))
    }
}
