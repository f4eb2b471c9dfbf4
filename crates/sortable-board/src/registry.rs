#![forbid(unsafe_code)]

//! Ordered item sequences per container.
//!
//! The registry is plain storage: lookups and wholesale replacement. It does
//! not re-validate sequences handed to [`ContainerRegistry::set_container`];
//! the reorder engine produces conserving results and callers replacing
//! contents directly guarantee cross-container id uniqueness themselves.
//! [`ContainerRegistry::validate`] checks the invariant on demand.

use std::collections::HashMap;
use std::fmt;

use sortable_core::{ContainerId, ItemId, Orientation};

use crate::model::{Container, Item, ItemLocation};

/// Containers in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerRegistry {
    containers: Vec<Container>,
}

impl ContainerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a container.
    ///
    /// Rejects a container id that is already registered and any item id that
    /// already appears on the board (or twice in `container`).
    pub fn register(&mut self, container: Container) -> Result<(), RegistryError> {
        if self.contains_container(container.id()) {
            return Err(RegistryError::DuplicateContainer {
                container: container.id().clone(),
            });
        }
        for (index, item) in container.items().iter().enumerate() {
            if let Some(existing) = self.locate_item(item.id()) {
                return Err(RegistryError::DuplicateItem {
                    item: item.id().clone(),
                    container: existing.container,
                });
            }
            if container.items()[..index]
                .iter()
                .any(|earlier| earlier.id() == item.id())
            {
                return Err(RegistryError::DuplicateItem {
                    item: item.id().clone(),
                    container: container.id().clone(),
                });
            }
        }
        self.containers.push(container);
        Ok(())
    }

    /// Look up a container by id.
    pub fn get_container(&self, id: &ContainerId) -> Result<&Container, RegistryError> {
        self.containers
            .iter()
            .find(|container| container.id() == id)
            .ok_or_else(|| RegistryError::ContainerNotFound {
                container: id.clone(),
            })
    }

    /// Replace a container's sequence wholesale.
    pub fn set_container(&mut self, id: &ContainerId, items: Vec<Item>) -> Result<(), RegistryError> {
        let container = self
            .containers
            .iter_mut()
            .find(|container| container.id() == id)
            .ok_or_else(|| RegistryError::ContainerNotFound {
                container: id.clone(),
            })?;
        container.replace_items(items);
        Ok(())
    }

    /// Find the container and index holding `item`.
    #[must_use]
    pub fn locate_item(&self, item: &ItemId) -> Option<ItemLocation> {
        self.containers.iter().find_map(|container| {
            container
                .position(item)
                .map(|index| ItemLocation::new(container.id().clone(), index))
        })
    }

    #[must_use]
    pub fn contains_container(&self, id: &ContainerId) -> bool {
        self.containers.iter().any(|container| container.id() == id)
    }

    /// Orientation of a registered container.
    #[must_use]
    pub fn orientation_of(&self, id: &ContainerId) -> Option<Orientation> {
        self.get_container(id).ok().map(Container::orientation)
    }

    /// Containers in registration order.
    pub fn containers(&self) -> impl Iterator<Item = &Container> {
        self.containers.iter()
    }

    /// Number of registered containers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Total number of items across all containers.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.containers.iter().map(Container::len).sum()
    }

    /// Check that every item id appears exactly once across the board.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut seen: HashMap<&ItemId, &ContainerId> = HashMap::with_capacity(self.item_count());
        for container in &self.containers {
            for id in container.item_ids() {
                if let Some(first) = seen.insert(id, container.id()) {
                    return Err(RegistryError::DuplicateItem {
                        item: id.clone(),
                        container: first.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Registry lookup and registration failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    ContainerNotFound { container: ContainerId },
    DuplicateContainer { container: ContainerId },
    /// `item` is already present in `container`.
    DuplicateItem { item: ItemId, container: ContainerId },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContainerNotFound { container } => {
                write!(f, "container '{container}' is not registered")
            }
            Self::DuplicateContainer { container } => {
                write!(f, "container '{container}' is already registered")
            }
            Self::DuplicateItem { item, container } => {
                write!(f, "item '{item}' already present in container '{container}'")
            }
        }
    }
}

impl std::error::Error for RegistryError {}
