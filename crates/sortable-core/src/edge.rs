#![forbid(unsafe_code)]

//! Insertion edges.
//!
//! An [`Edge`] names the side of a hovered row the pointer is closest to,
//! which decides insert-before versus insert-after.
//!
//! # Invariants
//!
//! 1. Vertical containers only produce `Top`/`Bottom`; horizontal containers
//!    only produce `Left`/`Right`.
//! 2. The exact midpoint of a row resolves to the after edge. The comparison
//!    is done in integers (`offset * 2 >= extent`), so identical input always
//!    yields the same edge.
//! 3. A zero-extent row resolves to the after edge.

use std::fmt;

use crate::geometry::{Orientation, Point, Rect};

/// Side of a target row the pointer is closest to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// The insert-before edge for `orientation`.
    #[must_use]
    pub const fn before(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Vertical => Self::Top,
            Orientation::Horizontal => Self::Left,
        }
    }

    /// The insert-after edge for `orientation`.
    #[must_use]
    pub const fn after(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Vertical => Self::Bottom,
            Orientation::Horizontal => Self::Right,
        }
    }

    /// Returns true for `Bottom` and `Right`.
    #[must_use]
    pub const fn is_after(self) -> bool {
        matches!(self, Self::Bottom | Self::Right)
    }

    /// Orientation this edge belongs to.
    #[must_use]
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::Top | Self::Bottom => Orientation::Vertical,
            Self::Left | Self::Right => Orientation::Horizontal,
        }
    }

    /// The edge on the other side of the same row.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Classify an offset within a row of the given extent.
    ///
    /// The first half maps to the before edge; the midpoint and everything
    /// after it map to the after edge.
    #[must_use]
    pub const fn from_offset(orientation: Orientation, offset: u16, extent: u16) -> Self {
        if offset as u32 * 2 >= extent as u32 {
            Self::after(orientation)
        } else {
            Self::before(orientation)
        }
    }

    /// Closest edge of `bounds` to `pointer` along `orientation`.
    #[must_use]
    pub const fn closest(orientation: Orientation, pointer: Point, bounds: Rect) -> Self {
        Self::from_offset(
            orientation,
            bounds.offset_of(pointer, orientation),
            bounds.extent(orientation),
        )
    }

    /// Lowercase name, matching the host-side edge vocabulary.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
