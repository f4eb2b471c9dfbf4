#![forbid(unsafe_code)]

//! Reorder computation.
//!
//! Pure functions from (source position, drop target) to new container
//! contents. Nothing here touches the registry; callers commit the resulting
//! [`ReorderPlan`].
//!
//! # Invariants
//!
//! 1. Conservation: the items of the output sequences are exactly the items
//!    of the input sequences.
//! 2. Only the moved item changes position relative to the others; the
//!    remaining order of both containers is preserved.
//! 3. Dropping an item where it already sits yields [`ReorderPlan::Unchanged`]
//!    so no downstream update fires.

use std::fmt;

use sortable_core::{ContainerId, Edge, ItemId};

use crate::model::{Container, Item, ItemLocation};
use crate::registry::{ContainerRegistry, RegistryError};

/// Outcome of a reorder computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderPlan {
    /// The drop lands where the item already is.
    Unchanged,
    /// Move within one container.
    Within {
        container: ContainerId,
        items: Vec<Item>,
        from: usize,
        to: usize,
    },
    /// Move from one container to another.
    Across {
        source: ContainerId,
        source_items: Vec<Item>,
        target: ContainerId,
        target_items: Vec<Item>,
        from: usize,
        to: usize,
    },
}

impl ReorderPlan {
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// Containers whose contents this plan replaces.
    #[must_use]
    pub fn affected_containers(&self) -> Vec<&ContainerId> {
        match self {
            Self::Unchanged => Vec::new(),
            Self::Within { container, .. } => vec![container],
            Self::Across { source, target, .. } => vec![source, target],
        }
    }

    /// Source and final location of the moved item.
    #[must_use]
    pub fn locations(&self) -> Option<(ItemLocation, ItemLocation)> {
        match self {
            Self::Unchanged => None,
            Self::Within {
                container, from, to, ..
            } => Some((
                ItemLocation::new(container.clone(), *from),
                ItemLocation::new(container.clone(), *to),
            )),
            Self::Across {
                source,
                target,
                from,
                to,
                ..
            } => Some((
                ItemLocation::new(source.clone(), *from),
                ItemLocation::new(target.clone(), *to),
            )),
        }
    }

    /// Write the plan into `registry`.
    ///
    /// Every affected container is checked before anything is written, so a
    /// failed commit leaves the registry untouched.
    pub fn commit(self, registry: &mut ContainerRegistry) -> Result<(), RegistryError> {
        for id in self.affected_containers() {
            registry.get_container(id)?;
        }
        match self {
            Self::Unchanged => Ok(()),
            Self::Within {
                container, items, ..
            } => registry.set_container(&container, items),
            Self::Across {
                source,
                source_items,
                target,
                target_items,
                ..
            } => {
                registry.set_container(&source, source_items)?;
                registry.set_container(&target, target_items)
            }
        }
    }
}

/// Reorder computation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderError {
    SourceIndexOutOfRange { index: usize, len: usize },
    TargetItemNotFound { container: ContainerId, item: ItemId },
}

impl fmt::Display for ReorderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceIndexOutOfRange { index, len } => {
                write!(f, "source index {index} out of range for {len} items")
            }
            Self::TargetItemNotFound { container, item } => {
                write!(f, "target item '{item}' not found in container '{container}'")
            }
        }
    }
}

impl std::error::Error for ReorderError {}

/// Move the element at `start` so it ends up at index `finish`.
///
/// `finish` is the final index in the returned list and is clamped to the
/// last position.
#[must_use]
pub fn reorder<T: Clone>(list: &[T], start: usize, finish: usize) -> Vec<T> {
    let mut result = list.to_vec();
    if start >= result.len() {
        return result;
    }
    let moved = result.remove(start);
    let finish = finish.min(result.len());
    result.insert(finish, moved);
    result
}

/// Index in `target` before which the dropped item is inserted, counted
/// before the item is removed from its source.
///
/// Without a target row this is `target.len()` (append). With a row it is
/// the row's index, plus one for an after edge.
pub fn resolve_finish_index(
    target: &Container,
    target_item: Option<&ItemId>,
    edge: Option<Edge>,
) -> Result<usize, ReorderError> {
    let Some(item) = target_item else {
        return Ok(target.len());
    };
    let index = target
        .position(item)
        .ok_or_else(|| ReorderError::TargetItemNotFound {
            container: target.id().clone(),
            item: item.clone(),
        })?;
    Ok(match edge {
        Some(edge) if edge.is_after() => index + 1,
        _ => index,
    })
}

/// Compute new contents for moving `source.items()[source_index]` to the
/// drop target `(target, target_item, edge)`.
///
/// `source` and `target` are the same container when their ids match.
pub fn compute_reorder(
    source: &Container,
    source_index: usize,
    target: &Container,
    target_item: Option<&ItemId>,
    edge: Option<Edge>,
) -> Result<ReorderPlan, ReorderError> {
    if source_index >= source.len() {
        return Err(ReorderError::SourceIndexOutOfRange {
            index: source_index,
            len: source.len(),
        });
    }
    let finish_index = resolve_finish_index(target, target_item, edge)?;

    if source.id() == target.id() {
        // Inserting directly before or after itself leaves the order intact.
        if finish_index == source_index || finish_index == source_index + 1 {
            return Ok(ReorderPlan::Unchanged);
        }
        let to = if finish_index > source_index {
            finish_index - 1
        } else {
            finish_index
        };
        return Ok(ReorderPlan::Within {
            container: source.id().clone(),
            items: reorder(source.items(), source_index, to),
            from: source_index,
            to,
        });
    }

    let mut source_items = source.items().to_vec();
    let moved = source_items.remove(source_index);
    let to = finish_index.min(target.len());
    let mut target_items = Vec::with_capacity(target.len() + 1);
    target_items.extend_from_slice(&target.items()[..to]);
    target_items.push(moved);
    target_items.extend_from_slice(&target.items()[to..]);

    Ok(ReorderPlan::Across {
        source: source.id().clone(),
        source_items,
        target: target.id().clone(),
        target_items,
        from: source_index,
        to,
    })
}
