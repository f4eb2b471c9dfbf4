#![forbid(unsafe_code)]

//! Sortable public facade crate.
//!
//! Re-exports the board, its drag session, and the host input types, and
//! offers a prelude for hosts that only wire events in and read contents
//! out.
//!
//! ```
//! use sortable::prelude::*;
//!
//! let mut board = Board::default();
//! board.add_container("todo", [Item::new("a", "Write"), Item::new("b", "Test")])?;
//! board.add_container("done", Vec::new())?;
//!
//! let mut seq = InputSequencer::new();
//! board.handle(&seq.drag_start("a"))?;
//! let done = HoveredElement::container("done", Rect::new(20, 0, 20, 10));
//! board.handle(&seq.drop_at(Point::new(25, 3), Some(done)))?;
//!
//! assert_eq!(board.container(&"done".into())?.len(), 1);
//! # Ok::<(), sortable::Error>(())
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use sortable_core::{
    CancelReason, ContainerId, DragInputError, DragInputEvent, DragInputKind, Edge,
    HoveredElement, InputSequencer, ItemId, Orientation, Point, Rect,
};

#[cfg(feature = "tracing-json")]
pub use sortable_core::logging::init_json_subscriber;

// --- Board re-exports ------------------------------------------------------

pub use sortable_board::{
    Board, BoardChange, BoardConfig, BoardSnapshot, Container, ContainerRegistry, DragEffect,
    DragSession, DragSessionController, DragTransition, DropRejection, DropTarget, Highlight,
    HighlightStateManager, Item, ItemLocation, NoopReason, RegistryError, ReorderError,
    ReorderPlan, SessionState, SharedBoard, SubscriptionId, compute_reorder,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for sortable hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Container lookup or registration failed.
    Registry(RegistryError),
    /// A reorder could not be planned.
    Reorder(ReorderError),
    /// A host event was malformed.
    Input(DragInputError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registry(err) => write!(f, "{err}"),
            Self::Reorder(err) => write!(f, "{err}"),
            Self::Input(err) => write!(f, "invalid input event: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Registry(err) => Some(err),
            Self::Reorder(err) => Some(err),
            Self::Input(err) => Some(err),
        }
    }
}

impl From<RegistryError> for Error {
    fn from(err: RegistryError) -> Self {
        Self::Registry(err)
    }
}

impl From<ReorderError> for Error {
    fn from(err: ReorderError) -> Self {
        Self::Reorder(err)
    }
}

impl From<DragInputError> for Error {
    fn from(err: DragInputError) -> Self {
        Self::Input(err)
    }
}

/// Standard result type for sortable APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Board, BoardChange, BoardConfig, CancelReason, ContainerId, DragEffect, Edge, Error,
        HoveredElement, InputSequencer, Item, ItemId, Orientation, Point, Rect, Result,
        SharedBoard,
    };

    pub use crate::{board, core};
}

pub use sortable_board as board;
pub use sortable_core as core;
