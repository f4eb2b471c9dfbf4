#![forbid(unsafe_code)]

//! Board: ordered containers and the drag session that reorders them.
//!
//! Leaves first:
//!
//! - [`registry`]: ordered item sequences per container.
//! - [`edge_detector`]: pointer + hovered geometry to [`DropTarget`].
//! - [`reorder`]: pure computation of new container contents.
//! - [`highlight`]: the single active drop-location highlight.
//! - [`session`]: the drag session state machine.
//! - [`board`]: host-facing aggregate with change subscriptions.

pub mod board;
pub mod config;
pub mod edge_detector;
pub mod highlight;
pub mod model;
pub mod registry;
pub mod reorder;
pub mod session;
pub mod shared;

pub use board::{Board, BoardChange, BoardSnapshot, SubscriptionId};
pub use config::BoardConfig;
pub use edge_detector::DropTarget;
pub use highlight::{Highlight, HighlightStateManager};
pub use model::{Container, Item, ItemLocation};
pub use registry::{ContainerRegistry, RegistryError};
pub use reorder::{ReorderError, ReorderPlan, compute_reorder};
pub use session::{
    DragEffect, DragSession, DragSessionController, DragTransition, DropRejection, NoopReason,
    SessionState,
};
pub use shared::SharedBoard;
