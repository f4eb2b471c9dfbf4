#![forbid(unsafe_code)]

//! Host-facing board: registry, session controller, and change subscribers.
//!
//! The host registers containers once, forwards every pointer event through
//! [`Board::handle`], and renders from [`Board::containers`] /
//! [`Board::highlight`] (or a [`BoardSnapshot`]). Subscribers are notified
//! after each committed change and never for a drop that moved nothing.

use std::collections::VecDeque;
use std::fmt;

use sortable_core::{ContainerId, DragInputError, DragInputEvent, ItemId};

use crate::config::BoardConfig;
use crate::highlight::Highlight;
use crate::model::{Container, Item, ItemLocation};
use crate::registry::{ContainerRegistry, RegistryError};
use crate::session::{DragEffect, DragSession, DragSessionController, DragTransition};

/// Handle returned by [`Board::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// A committed change to container contents.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "change", rename_all = "snake_case")
)]
pub enum BoardChange {
    /// A drop moved `item`.
    Moved {
        transition_id: u64,
        item: ItemId,
        from: ItemLocation,
        to: ItemLocation,
    },
    /// The host replaced a container's contents directly.
    Replaced { container: ContainerId },
}

impl BoardChange {
    /// Containers whose contents changed.
    #[must_use]
    pub fn containers(&self) -> Vec<&ContainerId> {
        match self {
            Self::Moved { from, to, .. } if from.container == to.container => vec![&from.container],
            Self::Moved { from, to, .. } => vec![&from.container, &to.container],
            Self::Replaced { container } => vec![container],
        }
    }
}

/// Read-only copy of everything a host needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    pub containers: Vec<Container>,
    pub highlight: Option<Highlight>,
    pub dragging: Option<ItemId>,
}

type Subscriber = Box<dyn FnMut(&BoardChange) + Send>;

/// Containers plus the drag session that reorders them.
pub struct Board {
    config: BoardConfig,
    registry: ContainerRegistry,
    controller: DragSessionController,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    transitions: VecDeque<DragTransition>,
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .field("controller", &self.controller)
            .field("subscribers", &self.subscribers.len())
            .field("transitions", &self.transitions.len())
            .finish()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl Board {
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        let controller = DragSessionController::new(&config);
        Self {
            transitions: VecDeque::with_capacity(config.transition_log_capacity),
            config,
            registry: ContainerRegistry::new(),
            controller,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Register a fully specified container.
    pub fn register(&mut self, container: Container) -> Result<(), RegistryError> {
        sortable_core::debug!(
            container = %container.id(),
            items = container.len(),
            "registering container"
        );
        self.registry.register(container)
    }

    /// Register a container with the configured default orientation.
    pub fn add_container(
        &mut self,
        id: impl Into<ContainerId>,
        items: impl IntoIterator<Item = Item>,
    ) -> Result<(), RegistryError> {
        let container = Container::new(id)
            .with_orientation(self.config.default_orientation)
            .with_items(items);
        self.register(container)
    }

    /// Replace a container's contents from the host side.
    ///
    /// The caller guarantees item ids stay unique across the board. Allowed
    /// mid-drag: the pending drop re-locates the dragged item when it lands.
    pub fn set_container(&mut self, id: &ContainerId, items: Vec<Item>) -> Result<(), RegistryError> {
        self.registry.set_container(id, items)?;
        self.notify(&BoardChange::Replaced {
            container: id.clone(),
        });
        Ok(())
    }

    /// Apply one host input event.
    pub fn handle(&mut self, event: &DragInputEvent) -> Result<DragTransition, DragInputError> {
        let transition = self.controller.apply(&mut self.registry, event)?;
        if let DragEffect::Committed { item, from, to } = &transition.effect {
            self.notify(&BoardChange::Moved {
                transition_id: transition.transition_id,
                item: item.clone(),
                from: from.clone(),
                to: to.clone(),
            });
        }
        self.record(&transition);
        Ok(transition)
    }

    /// Call `callback` after every committed change.
    pub fn subscribe(&mut self, callback: impl FnMut(&BoardChange) + Send + 'static) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn containers(&self) -> impl Iterator<Item = &Container> {
        self.registry.containers()
    }

    pub fn container(&self, id: &ContainerId) -> Result<&Container, RegistryError> {
        self.registry.get_container(id)
    }

    #[must_use]
    pub fn registry(&self) -> &ContainerRegistry {
        &self.registry
    }

    #[must_use]
    pub fn highlight(&self) -> Option<&Highlight> {
        self.controller.highlight()
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.controller.session()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// Most recent transitions, oldest first.
    pub fn recent_transitions(&self) -> impl Iterator<Item = &DragTransition> {
        self.transitions.iter()
    }

    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            containers: self.registry.containers().cloned().collect(),
            highlight: self.controller.highlight().cloned(),
            dragging: self.controller.session().map(|s| s.source_item.clone()),
        }
    }

    fn notify(&mut self, change: &BoardChange) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(change);
        }
    }

    fn record(&mut self, transition: &DragTransition) {
        let capacity = self.config.transition_log_capacity;
        if capacity == 0 {
            return;
        }
        while self.transitions.len() >= capacity {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition.clone());
    }
}
