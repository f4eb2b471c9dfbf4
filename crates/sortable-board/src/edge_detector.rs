#![forbid(unsafe_code)]

//! Hover classification.
//!
//! Turns a pointer position plus the host's [`HoveredElement`] into a
//! [`DropTarget`]: which container, which row (if any), and which edge of
//! that row the dragged item would land against.
//!
//! | Hovered element | Result |
//! |-----------------|--------|
//! | nothing | [`DropTarget::none`] |
//! | unregistered container | [`DropTarget::none`] |
//! | container background | container, no row, no edge (append) |
//! | item row | container, row, closest edge along the container's axis |

use sortable_core::{ContainerId, Edge, HoveredElement, ItemId, Orientation, Point};

use crate::registry::ContainerRegistry;

/// Where a drop would land.
///
/// `container == None` means there is no valid target under the pointer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropTarget {
    pub container: Option<ContainerId>,
    /// Row the edge is relative to; `None` appends to the container.
    pub target_item: Option<ItemId>,
    pub edge: Option<Edge>,
}

impl DropTarget {
    /// No valid target.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            container: None,
            target_item: None,
            edge: None,
        }
    }

    /// The background of `container`.
    #[must_use]
    pub fn container(container: impl Into<ContainerId>) -> Self {
        Self {
            container: Some(container.into()),
            target_item: None,
            edge: None,
        }
    }

    /// An edge of a row inside `container`.
    #[must_use]
    pub fn item(container: impl Into<ContainerId>, item: impl Into<ItemId>, edge: Edge) -> Self {
        Self {
            container: Some(container.into()),
            target_item: Some(item.into()),
            edge: Some(edge),
        }
    }

    /// Returns true when a container is under the pointer.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.container.is_some()
    }
}

/// Classify `hovered` geometrically for a container laid out along
/// `orientation`. Does not consult any registry.
#[must_use]
pub fn classify(pointer: Point, hovered: Option<&HoveredElement>, orientation: Orientation) -> DropTarget {
    let Some(hovered) = hovered else {
        return DropTarget::none();
    };
    match &hovered.item {
        None => DropTarget::container(hovered.container.clone()),
        Some(item) => DropTarget::item(
            hovered.container.clone(),
            item.clone(),
            Edge::closest(orientation, pointer, hovered.bounds),
        ),
    }
}

/// Classify `hovered` using the orientation registered for its container.
///
/// Elements outside any registered container yield [`DropTarget::none`].
#[must_use]
pub fn detect(
    pointer: Point,
    hovered: Option<&HoveredElement>,
    registry: &ContainerRegistry,
) -> DropTarget {
    let Some(hovered) = hovered else {
        return DropTarget::none();
    };
    let Some(orientation) = registry.orientation_of(&hovered.container) else {
        sortable_core::trace!(container = %hovered.container, "hover over unregistered container");
        return DropTarget::none();
    };
    let target = classify(pointer, Some(hovered), orientation);
    sortable_core::trace!(
        container = %hovered.container,
        item = ?target.target_item,
        edge = ?target.edge,
        x = pointer.x,
        y = pointer.y,
        "hover classified"
    );
    target
}
