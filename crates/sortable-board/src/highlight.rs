#![forbid(unsafe_code)]

//! Transient drop-location feedback.
//!
//! At most one [`Highlight`] exists board-wide. Each hover overwrites it, and
//! drop, leave, and cancel clear it.

use sortable_core::{ContainerId, Edge, ItemId};

use crate::edge_detector::DropTarget;
use crate::registry::ContainerRegistry;

/// The highlighted drop location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Highlight {
    pub container: ContainerId,
    /// `None` when hovering the container background.
    pub edge: Option<Edge>,
    /// Row the edge indicator is drawn against.
    pub target_item: Option<ItemId>,
}

/// Derives the single active [`Highlight`] from hover events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightStateManager {
    current: Option<Highlight>,
    clear_on_invalid: bool,
}

impl Default for HighlightStateManager {
    fn default() -> Self {
        Self::new(true)
    }
}

impl HighlightStateManager {
    /// `clear_on_invalid` decides whether hovering outside every registered
    /// container clears the highlight or keeps the last one.
    #[must_use]
    pub fn new(clear_on_invalid: bool) -> Self {
        Self {
            current: None,
            clear_on_invalid,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Highlight> {
        self.current.as_ref()
    }

    /// Returns true when `container` is the highlighted one.
    #[must_use]
    pub fn is_highlighted(&self, container: &ContainerId) -> bool {
        self.current
            .as_ref()
            .is_some_and(|highlight| &highlight.container == container)
    }

    /// Apply a hover result. Returns true if the highlight changed.
    pub fn on_drag_over(&mut self, target: &DropTarget, registry: &ContainerRegistry) -> bool {
        let next = match &target.container {
            Some(container) if registry.contains_container(container) => Some(Highlight {
                container: container.clone(),
                edge: target.edge,
                target_item: target.target_item.clone(),
            }),
            _ if self.clear_on_invalid => None,
            _ => return false,
        };
        self.replace(next)
    }

    /// Clear on drop, leave, or cancel. Returns true if a highlight was shown.
    pub fn clear(&mut self) -> bool {
        self.current.take().is_some()
    }

    fn replace(&mut self, next: Option<Highlight>) -> bool {
        if self.current == next {
            return false;
        }
        self.current = next;
        true
    }
}
