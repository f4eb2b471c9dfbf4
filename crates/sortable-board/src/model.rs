#![forbid(unsafe_code)]

//! Items and containers.

use sortable_core::{ContainerId, ItemId, Orientation};

/// A draggable item. Identity is `id`; items are never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    id: ItemId,
    label: String,
}

impl Item {
    #[must_use]
    pub fn new(id: impl Into<ItemId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// An ordered collection of items (a column or a row).
///
/// The sequence is only replaced through
/// [`ContainerRegistry::set_container`](crate::registry::ContainerRegistry::set_container).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Container {
    id: ContainerId,
    orientation: Orientation,
    items: Vec<Item>,
}

impl Container {
    /// An empty vertical container.
    #[must_use]
    pub fn new(id: impl Into<ContainerId>) -> Self {
        Self {
            id: id.into(),
            orientation: Orientation::Vertical,
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    #[must_use]
    pub fn id(&self) -> &ContainerId {
        &self.id
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of `item` within this container.
    #[must_use]
    pub fn position(&self, item: &ItemId) -> Option<usize> {
        self.items.iter().position(|candidate| candidate.id() == item)
    }

    #[must_use]
    pub fn contains_item(&self, item: &ItemId) -> bool {
        self.position(item).is_some()
    }

    /// Item ids in order.
    pub fn item_ids(&self) -> impl Iterator<Item = &ItemId> {
        self.items.iter().map(Item::id)
    }

    pub(crate) fn replace_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }
}

/// Where an item currently sits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemLocation {
    pub container: ContainerId,
    pub index: usize,
}

impl ItemLocation {
    #[must_use]
    pub fn new(container: impl Into<ContainerId>, index: usize) -> Self {
        Self {
            container: container.into(),
            index,
        }
    }
}
