#![forbid(unsafe_code)]

//! Core: item and container ids, pointer geometry, insertion edges, and the
//! host input events that drive a drag-and-drop session.

pub mod edge;
pub mod event;
pub mod geometry;
pub mod ids;
pub mod logging;

pub use edge::Edge;
pub use event::{
    CancelReason, DragInputError, DragInputEvent, DragInputKind, HoveredElement, InputSequencer,
};
pub use geometry::{Orientation, Point, Rect};
pub use ids::{ContainerId, ItemId};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, trace, warn};
