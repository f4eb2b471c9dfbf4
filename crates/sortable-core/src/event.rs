#![forbid(unsafe_code)]

//! Host input events for a drag-and-drop session.
//!
//! The host owns hit testing: every pointer event carries a
//! [`HoveredElement`] describing what lies under the pointer (a container
//! background or one of its item rows) so the core never queries a live
//! render tree.
//!
//! # Ordering
//!
//! Events carry a non-zero, strictly increasing `sequence`. Consumers apply
//! them in sequence order and ignore anything that arrives late, so a drop is
//! never evaluated against a stale hover.

use std::fmt;

use crate::geometry::{Point, Rect};
use crate::ids::{ContainerId, ItemId};

/// Descriptor of the element under the pointer, supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoveredElement {
    /// Container the element belongs to.
    pub container: ContainerId,
    /// Item row under the pointer, or `None` for the container background.
    pub item: Option<ItemId>,
    /// Bounding box of the row (or of the container for backgrounds).
    pub bounds: Rect,
}

impl HoveredElement {
    /// The background of `container` (drops here append).
    #[must_use]
    pub fn container(container: impl Into<ContainerId>, bounds: Rect) -> Self {
        Self {
            container: container.into(),
            item: None,
            bounds,
        }
    }

    /// An item row inside `container`.
    #[must_use]
    pub fn item(container: impl Into<ContainerId>, item: impl Into<ItemId>, bounds: Rect) -> Self {
        Self {
            container: container.into(),
            item: Some(item.into()),
            bounds,
        }
    }
}

/// Why a drag ended without a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CancelReason {
    EscapeKey,
    PointerCaptureLost,
    LeftDocument,
    FocusLost,
    Programmatic,
}

impl CancelReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EscapeKey => "escape_key",
            Self::PointerCaptureLost => "pointer_capture_lost",
            Self::LeftDocument => "left_document",
            Self::FocusLost => "focus_lost",
            Self::Programmatic => "programmatic",
        }
    }
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a host input event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "event", rename_all = "snake_case")
)]
pub enum DragInputKind {
    /// The user picked up `item`.
    DragStart { item: ItemId },
    /// The pointer moved while dragging. `hovered` is `None` when nothing is
    /// under the pointer.
    DragOver {
        pointer: Point,
        hovered: Option<HoveredElement>,
    },
    /// The user released the item.
    Drop {
        pointer: Point,
        hovered: Option<HoveredElement>,
    },
    /// The pointer left `container`; the gesture continues elsewhere.
    DragLeave { container: ContainerId },
    /// The gesture ended without a drop.
    DragCancel { reason: CancelReason },
}

impl DragInputKind {
    /// Short name for logs and diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DragStart { .. } => "drag_start",
            Self::DragOver { .. } => "drag_over",
            Self::Drop { .. } => "drop",
            Self::DragLeave { .. } => "drag_leave",
            Self::DragCancel { .. } => "drag_cancel",
        }
    }
}

/// A sequenced host input event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragInputEvent {
    pub sequence: u64,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: DragInputKind,
}

impl DragInputEvent {
    /// Build an event with an explicit sequence number.
    #[must_use]
    pub fn new(sequence: u64, kind: DragInputKind) -> Self {
        Self { sequence, kind }
    }

    /// Validate invariants required before the event reaches a session.
    pub fn validate(&self) -> Result<(), DragInputError> {
        if self.sequence == 0 {
            return Err(DragInputError::ZeroSequence);
        }
        match &self.kind {
            DragInputKind::DragStart { item } => {
                if item.is_empty() {
                    return Err(DragInputError::EmptyItemId);
                }
            }
            DragInputKind::DragOver { hovered, .. } | DragInputKind::Drop { hovered, .. } => {
                if let Some(hovered) = hovered {
                    if hovered.container.is_empty() {
                        return Err(DragInputError::EmptyContainerId);
                    }
                    if hovered.item.as_ref().is_some_and(ItemId::is_empty) {
                        return Err(DragInputError::EmptyItemId);
                    }
                }
            }
            DragInputKind::DragLeave { container } => {
                if container.is_empty() {
                    return Err(DragInputError::EmptyContainerId);
                }
            }
            DragInputKind::DragCancel { .. } => {}
        }
        Ok(())
    }
}

/// Validation failures for host input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragInputError {
    ZeroSequence,
    EmptyItemId,
    EmptyContainerId,
}

impl fmt::Display for DragInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSequence => write!(f, "drag input event sequence must be non-zero"),
            Self::EmptyItemId => write!(f, "drag input event carries an empty item id"),
            Self::EmptyContainerId => {
                write!(f, "drag input event carries an empty container id")
            }
        }
    }
}

impl std::error::Error for DragInputError {}

/// Hands out strictly increasing sequence numbers for host adapters.
#[derive(Debug, Clone, Default)]
pub struct InputSequencer {
    last: u64,
}

impl InputSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last sequence number handed out (0 before the first event).
    #[must_use]
    pub const fn last(&self) -> u64 {
        self.last
    }

    /// Wrap `kind` with the next sequence number.
    pub fn next(&mut self, kind: DragInputKind) -> DragInputEvent {
        self.last = self.last.saturating_add(1);
        DragInputEvent::new(self.last, kind)
    }

    pub fn drag_start(&mut self, item: impl Into<ItemId>) -> DragInputEvent {
        self.next(DragInputKind::DragStart { item: item.into() })
    }

    pub fn drag_over(&mut self, pointer: Point, hovered: Option<HoveredElement>) -> DragInputEvent {
        self.next(DragInputKind::DragOver { pointer, hovered })
    }

    pub fn drop_at(&mut self, pointer: Point, hovered: Option<HoveredElement>) -> DragInputEvent {
        self.next(DragInputKind::Drop { pointer, hovered })
    }

    pub fn drag_leave(&mut self, container: impl Into<ContainerId>) -> DragInputEvent {
        self.next(DragInputKind::DragLeave {
            container: container.into(),
        })
    }

    pub fn cancel(&mut self, reason: CancelReason) -> DragInputEvent {
        self.next(DragInputKind::DragCancel { reason })
    }
}
