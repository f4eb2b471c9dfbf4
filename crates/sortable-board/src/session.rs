#![forbid(unsafe_code)]

//! Drag session state machine.
//!
//! ```text
//! Idle --DragStart--> Dragging --DragOver/DragLeave--> Dragging
//!                        |
//!                        +--Drop / DragCancel--> Idle
//! ```
//!
//! The controller owns only session bookkeeping (the dragged item and where
//! it came from) plus the highlight. Container contents are read from the
//! [`ContainerRegistry`] at the moment each event is applied, never from a
//! snapshot captured when the drag began.
//!
//! # Invariants
//!
//! 1. At most one session is active; a `DragStart` while dragging is a noop.
//! 2. `Drop` and `DragCancel` always return to `Idle` and clear the highlight,
//!    whether or not anything moved.
//! 3. The registry is written only by a successful `Drop`.
//! 4. While dragging, events with a sequence not greater than the last
//!    applied one are ignored, so a drop is never evaluated behind a stale
//!    hover. `DragCancel` is exempt, and a `DragStart` while idle is always
//!    accepted, so a second event source can never orphan a session.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Effect |
//! |---------|-------|--------|
//! | Unknown item at drag start | Host sent a stale id | `Noop { SourceItemNotFound }`, stays `Idle` |
//! | Nothing under the pointer at drop | Pointer left the document | `DropRejected { NoTarget }` |
//! | Target row vanished | Contents replaced mid-drag | `DropRejected { TargetItemMissing }` |
//! | Source item vanished | Contents replaced mid-drag | `DropRejected { SourceItemMissing }` |

use std::fmt;

use sortable_core::{
    CancelReason, ContainerId, DragInputError, DragInputEvent, DragInputKind, HoveredElement,
    ItemId, Point,
};

use crate::config::BoardConfig;
use crate::edge_detector::{self, DropTarget};
use crate::highlight::{Highlight, HighlightStateManager};
use crate::model::ItemLocation;
use crate::registry::{ContainerRegistry, RegistryError};
use crate::reorder::{self, ReorderError, ReorderPlan};

/// Bookkeeping for one drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragSession {
    pub source_item: ItemId,
    pub source_container: ContainerId,
    pub started_sequence: u64,
}

/// Controller lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "state", rename_all = "snake_case")
)]
pub enum SessionState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl SessionState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }
}

/// Why an event was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum NoopReason {
    IdleWithoutActiveDrag,
    ActiveDragAlreadyInProgress,
    SourceItemNotFound,
    StaleSequence,
}

/// Why a drop ended the session without moving anything.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "rejection", rename_all = "snake_case")
)]
pub enum DropRejection {
    NoTarget,
    UnknownContainer { container: ContainerId },
    SourceItemMissing,
    TargetItemMissing { item: ItemId },
}

impl fmt::Display for DropRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTarget => write!(f, "no drop target under pointer"),
            Self::UnknownContainer { container } => {
                write!(f, "container '{container}' is not registered")
            }
            Self::SourceItemMissing => write!(f, "dragged item is no longer on the board"),
            Self::TargetItemMissing { item } => {
                write!(f, "target item '{item}' is no longer in its container")
            }
        }
    }
}

/// Effect of one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "effect", rename_all = "snake_case")
)]
pub enum DragEffect {
    Started {
        item: ItemId,
        location: ItemLocation,
    },
    Hovered {
        target: DropTarget,
        highlight_changed: bool,
    },
    Left {
        container: ContainerId,
        highlight_changed: bool,
    },
    Committed {
        item: ItemId,
        from: ItemLocation,
        to: ItemLocation,
    },
    DropUnchanged {
        item: ItemId,
    },
    DropRejected {
        item: ItemId,
        reason: DropRejection,
    },
    Canceled {
        item: ItemId,
        reason: CancelReason,
    },
    Noop {
        reason: NoopReason,
    },
}

impl DragEffect {
    /// Returns true when the registry was written.
    #[must_use]
    pub fn is_commit(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }

    #[must_use]
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::Noop { .. })
    }
}

/// One state-machine step with deterministic diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragTransition {
    pub transition_id: u64,
    pub sequence: u64,
    pub from: SessionState,
    pub to: SessionState,
    pub effect: DragEffect,
}

/// Drives drag sessions from host input events.
#[derive(Debug, Clone)]
pub struct DragSessionController {
    state: SessionState,
    highlight: HighlightStateManager,
    last_sequence: u64,
    transition_counter: u64,
}

impl Default for DragSessionController {
    fn default() -> Self {
        Self::new(&BoardConfig::default())
    }
}

impl DragSessionController {
    #[must_use]
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            state: SessionState::Idle,
            highlight: HighlightStateManager::new(config.clear_highlight_on_invalid_hover),
            last_sequence: 0,
            transition_counter: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.state.session()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    #[must_use]
    pub fn highlight(&self) -> Option<&Highlight> {
        self.highlight.current()
    }

    /// Sequence number of the last applied event (0 before the first).
    #[must_use]
    pub const fn last_sequence(&self) -> u64 {
        self.last_sequence
    }

    /// Apply one host event.
    ///
    /// Only malformed events are errors; everything else that goes wrong
    /// inside a gesture is reported through the transition's effect and
    /// leaves the registry unchanged.
    pub fn apply(
        &mut self,
        registry: &mut ContainerRegistry,
        event: &DragInputEvent,
    ) -> Result<DragTransition, DragInputError> {
        event.validate()?;

        let from = self.state.clone();
        let effect = if self.is_stale(event) {
            DragEffect::Noop {
                reason: NoopReason::StaleSequence,
            }
        } else {
            self.last_sequence = event.sequence;
            self.step(registry, event)
        };
        self.transition_counter = self.transition_counter.saturating_add(1);

        let transition = DragTransition {
            transition_id: self.transition_counter,
            sequence: event.sequence,
            from,
            to: self.state.clone(),
            effect,
        };
        sortable_core::debug!(
            transition_id = transition.transition_id,
            sequence = transition.sequence,
            event = event.kind.name(),
            effect = ?transition.effect,
            dragging = transition.to.is_dragging(),
            "drag transition"
        );
        Ok(transition)
    }

    /// Ordering only binds events inside one session. A cancel always ends
    /// the session and a start while idle always opens one, whatever source
    /// numbered them.
    fn is_stale(&self, event: &DragInputEvent) -> bool {
        match (&self.state, &event.kind) {
            (SessionState::Idle, _) | (SessionState::Dragging(_), DragInputKind::DragCancel { .. }) => {
                false
            }
            (SessionState::Dragging(_), _) => event.sequence <= self.last_sequence,
        }
    }

    fn step(&mut self, registry: &mut ContainerRegistry, event: &DragInputEvent) -> DragEffect {
        let state = std::mem::take(&mut self.state);
        match (state, &event.kind) {
            (SessionState::Idle, DragInputKind::DragStart { item }) => {
                self.start(registry, item, event.sequence)
            }
            (SessionState::Idle, _) => DragEffect::Noop {
                reason: NoopReason::IdleWithoutActiveDrag,
            },
            (SessionState::Dragging(session), DragInputKind::DragStart { .. }) => {
                self.state = SessionState::Dragging(session);
                DragEffect::Noop {
                    reason: NoopReason::ActiveDragAlreadyInProgress,
                }
            }
            (SessionState::Dragging(session), DragInputKind::DragOver { pointer, hovered }) => {
                let target = edge_detector::detect(*pointer, hovered.as_ref(), registry);
                let highlight_changed = self.highlight.on_drag_over(&target, registry);
                self.state = SessionState::Dragging(session);
                DragEffect::Hovered {
                    target,
                    highlight_changed,
                }
            }
            (SessionState::Dragging(session), DragInputKind::DragLeave { container }) => {
                let highlight_changed = self.highlight.clear();
                self.state = SessionState::Dragging(session);
                DragEffect::Left {
                    container: container.clone(),
                    highlight_changed,
                }
            }
            (SessionState::Dragging(session), DragInputKind::Drop { pointer, hovered }) => {
                self.highlight.clear();
                drop_session(registry, session, *pointer, hovered.as_ref())
            }
            (SessionState::Dragging(session), DragInputKind::DragCancel { reason }) => {
                self.highlight.clear();
                sortable_core::debug!(item = %session.source_item, reason = %reason, "drag canceled");
                DragEffect::Canceled {
                    item: session.source_item,
                    reason: *reason,
                }
            }
        }
    }

    fn start(&mut self, registry: &ContainerRegistry, item: &ItemId, sequence: u64) -> DragEffect {
        let Some(location) = registry.locate_item(item) else {
            sortable_core::debug!(item = %item, "drag start for unknown item ignored");
            return DragEffect::Noop {
                reason: NoopReason::SourceItemNotFound,
            };
        };
        self.highlight.clear();
        self.state = SessionState::Dragging(DragSession {
            source_item: item.clone(),
            source_container: location.container.clone(),
            started_sequence: sequence,
        });
        DragEffect::Started {
            item: item.clone(),
            location,
        }
    }
}

/// Resolve and commit a drop for `session`. The session is consumed; the
/// caller has already returned the controller to `Idle`.
fn drop_session(
    registry: &mut ContainerRegistry,
    session: DragSession,
    pointer: Point,
    hovered: Option<&HoveredElement>,
) -> DragEffect {
    let item = session.source_item;
    let target = edge_detector::detect(pointer, hovered, registry);
    let Some(container) = target.container.as_ref() else {
        return reject(item, DropRejection::NoTarget);
    };
    // Re-locate at drop time: contents may have been replaced mid-drag.
    let Some(source_location) = registry.locate_item(&item) else {
        return reject(item, DropRejection::SourceItemMissing);
    };

    let planned = match (
        registry.get_container(&source_location.container),
        registry.get_container(container),
    ) {
        (Ok(source), Ok(destination)) => reorder::compute_reorder(
            source,
            source_location.index,
            destination,
            target.target_item.as_ref(),
            target.edge,
        ),
        (_, Err(_)) => {
            return reject(
                item,
                DropRejection::UnknownContainer {
                    container: container.clone(),
                },
            );
        }
        (Err(_), Ok(_)) => return reject(item, DropRejection::SourceItemMissing),
    };

    let plan = match planned {
        Ok(ReorderPlan::Unchanged) => {
            sortable_core::debug!(item = %item, "drop onto current position");
            return DragEffect::DropUnchanged { item };
        }
        Ok(plan) => plan,
        Err(ReorderError::TargetItemNotFound { item: missing, .. }) => {
            return reject(item, DropRejection::TargetItemMissing { item: missing });
        }
        Err(ReorderError::SourceIndexOutOfRange { .. }) => {
            return reject(item, DropRejection::SourceItemMissing);
        }
    };

    let Some((from, to)) = plan.locations() else {
        return DragEffect::DropUnchanged { item };
    };
    match plan.commit(registry) {
        Ok(()) => {
            sortable_core::debug!(
                item = %item,
                from_container = %from.container,
                from_index = from.index,
                to_container = %to.container,
                to_index = to.index,
                "drop committed"
            );
            DragEffect::Committed { item, from, to }
        }
        Err(RegistryError::ContainerNotFound { container }) => {
            reject(item, DropRejection::UnknownContainer { container })
        }
        Err(RegistryError::DuplicateContainer { .. } | RegistryError::DuplicateItem { .. }) => {
            reject(item, DropRejection::SourceItemMissing)
        }
    }
}

fn reject(item: ItemId, reason: DropRejection) -> DragEffect {
    sortable_core::warn!(item = %item, reason = %reason, "drop rejected");
    DragEffect::DropRejected { item, reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Container, Item};
    use sortable_core::{Edge, InputSequencer, Rect};

    const ROW_HEIGHT: u16 = 2;

    fn column(id: &str, items: &[&str]) -> Container {
        Container::new(id).with_items(items.iter().map(|i| Item::new(*i, format!("Item {i}"))))
    }

    fn registry() -> ContainerRegistry {
        let mut reg = ContainerRegistry::new();
        reg.register(column("left", &["i1", "i2"])).unwrap();
        reg.register(column("right", &["i3", "i4"])).unwrap();
        reg.register(column("empty", &[])).unwrap();
        reg
    }

    /// Row `index` of a column laid out at x = 0, rows of `ROW_HEIGHT` cells.
    fn row(container: &str, item: &str, index: u16) -> HoveredElement {
        HoveredElement::item(container, item, Rect::new(0, index * ROW_HEIGHT, 20, ROW_HEIGHT))
    }

    fn upper_half(index: u16) -> Point {
        Point::new(1, index * ROW_HEIGHT)
    }

    fn lower_half(index: u16) -> Point {
        Point::new(1, index * ROW_HEIGHT + 1)
    }

    fn ids(reg: &ContainerRegistry, container: &str) -> Vec<String> {
        reg.get_container(&container.into())
            .unwrap()
            .item_ids()
            .map(ToString::to_string)
            .collect()
    }

    struct Harness {
        reg: ContainerRegistry,
        ctl: DragSessionController,
        seq: InputSequencer,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                reg: registry(),
                ctl: DragSessionController::default(),
                seq: InputSequencer::new(),
            }
        }

        fn apply(&mut self, event: DragInputEvent) -> DragTransition {
            self.ctl.apply(&mut self.reg, &event).unwrap()
        }

        fn start(&mut self, item: &str) -> DragTransition {
            let e = self.seq.drag_start(item);
            self.apply(e)
        }

        fn over(&mut self, pointer: Point, hovered: Option<HoveredElement>) -> DragTransition {
            let e = self.seq.drag_over(pointer, hovered);
            self.apply(e)
        }

        fn drop_at(&mut self, pointer: Point, hovered: Option<HoveredElement>) -> DragTransition {
            let e = self.seq.drop_at(pointer, hovered);
            self.apply(e)
        }
    }

    #[test]
    fn drag_start_records_session() {
        let mut h = Harness::new();
        let t = h.start("i3");
        assert_eq!(t.from, SessionState::Idle);
        assert_eq!(
            t.effect,
            DragEffect::Started {
                item: "i3".into(),
                location: ItemLocation::new("right", 0),
            }
        );
        let session = h.ctl.session().unwrap();
        assert_eq!(session.source_item, "i3");
        assert_eq!(session.source_container, "right");
        assert_eq!(session.started_sequence, 1);
    }

    #[test]
    fn drag_start_unknown_item_stays_idle() {
        let mut h = Harness::new();
        let t = h.start("ghost");
        assert_eq!(
            t.effect,
            DragEffect::Noop {
                reason: NoopReason::SourceItemNotFound
            }
        );
        assert!(!h.ctl.is_dragging());
    }

    #[test]
    fn second_drag_start_is_rejected() {
        let mut h = Harness::new();
        h.start("i1");
        let t = h.start("i2");
        assert_eq!(
            t.effect,
            DragEffect::Noop {
                reason: NoopReason::ActiveDragAlreadyInProgress
            }
        );
        assert_eq!(h.ctl.session().unwrap().source_item, "i1");
    }

    #[test]
    fn events_without_session_are_noops() {
        let mut h = Harness::new();
        let t = h.over(upper_half(0), Some(row("left", "i1", 0)));
        assert!(t.effect.is_noop());
        assert!(h.ctl.highlight().is_none());
        let t = h.drop_at(upper_half(0), Some(row("left", "i1", 0)));
        assert!(t.effect.is_noop());
        assert_eq!(ids(&h.reg, "left"), vec!["i1", "i2"]);
    }

    #[test]
    fn hover_updates_highlight_without_commit() {
        let mut h = Harness::new();
        h.start("i1");
        let t = h.over(lower_half(1), Some(row("right", "i4", 1)));
        assert_eq!(
            t.effect,
            DragEffect::Hovered {
                target: DropTarget::item("right", "i4", Edge::Bottom),
                highlight_changed: true,
            }
        );
        assert_eq!(
            h.ctl.highlight(),
            Some(&Highlight {
                container: "right".into(),
                edge: Some(Edge::Bottom),
                target_item: Some("i4".into()),
            })
        );
        assert_eq!(ids(&h.reg, "right"), vec!["i3", "i4"]);
        assert!(h.ctl.is_dragging());
    }

    #[test]
    fn scenario_cross_container_top_edge() {
        let mut h = Harness::new();
        h.start("i1");
        let t = h.drop_at(upper_half(1), Some(row("right", "i4", 1)));
        assert_eq!(
            t.effect,
            DragEffect::Committed {
                item: "i1".into(),
                from: ItemLocation::new("left", 0),
                to: ItemLocation::new("right", 1),
            }
        );
        assert_eq!(ids(&h.reg, "left"), vec!["i2"]);
        assert_eq!(ids(&h.reg, "right"), vec!["i3", "i1", "i4"]);
        assert_eq!(t.to, SessionState::Idle);
    }

    #[test]
    fn scenario_cross_container_bottom_edge() {
        let mut h = Harness::new();
        h.start("i1");
        h.drop_at(lower_half(1), Some(row("right", "i4", 1)));
        assert_eq!(ids(&h.reg, "left"), vec!["i2"]);
        assert_eq!(ids(&h.reg, "right"), vec!["i3", "i4", "i1"]);
    }

    #[test]
    fn scenario_same_container_forward() {
        let mut h = Harness::new();
        h.reg
            .set_container(
                &"left".into(),
                vec![Item::new("i1", "1"), Item::new("i2", "2"), Item::new("i5", "5")],
            )
            .unwrap();
        h.start("i1");
        h.drop_at(lower_half(2), Some(row("left", "i5", 2)));
        assert_eq!(ids(&h.reg, "left"), vec!["i2", "i5", "i1"]);
    }

    #[test]
    fn scenario_drop_on_self_is_unchanged() {
        let mut h = Harness::new();
        h.start("i1");
        h.over(upper_half(0), Some(row("left", "i1", 0)));
        let before = h.reg.clone();
        let t = h.drop_at(upper_half(0), Some(row("left", "i1", 0)));
        assert_eq!(t.effect, DragEffect::DropUnchanged { item: "i1".into() });
        assert!(!t.effect.is_commit());
        assert_eq!(h.reg, before);
        assert!(h.ctl.highlight().is_none());
    }

    #[test]
    fn scenario_drop_into_empty_container() {
        let mut h = Harness::new();
        h.start("i1");
        let t = h.drop_at(
            Point::new(3, 3),
            Some(HoveredElement::container("empty", Rect::new(0, 0, 20, 10))),
        );
        assert!(t.effect.is_commit());
        assert_eq!(ids(&h.reg, "empty"), vec!["i1"]);
        assert_eq!(ids(&h.reg, "left"), vec!["i2"]);
    }

    #[test]
    fn drop_outside_document_is_cancel() {
        let mut h = Harness::new();
        h.start("i2");
        h.over(upper_half(0), Some(row("right", "i3", 0)));
        let t = h.drop_at(Point::new(0, 0), None);
        assert_eq!(
            t.effect,
            DragEffect::DropRejected {
                item: "i2".into(),
                reason: DropRejection::NoTarget,
            }
        );
        assert!(!h.ctl.is_dragging());
        assert!(h.ctl.highlight().is_none());
        assert_eq!(ids(&h.reg, "left"), vec!["i1", "i2"]);
    }

    #[test]
    fn drop_on_unregistered_container_is_rejected() {
        let mut h = Harness::new();
        h.start("i2");
        let t = h.drop_at(
            Point::new(0, 0),
            Some(HoveredElement::container("sidebar", Rect::new(0, 0, 5, 5))),
        );
        // Unregistered geometry classifies as no target.
        assert_eq!(
            t.effect,
            DragEffect::DropRejected {
                item: "i2".into(),
                reason: DropRejection::NoTarget,
            }
        );
    }

    #[test]
    fn drop_on_vanished_target_row_is_rejected() {
        let mut h = Harness::new();
        h.start("i1");
        h.reg
            .set_container(&"right".into(), vec![Item::new("i3", "3")])
            .unwrap();
        let t = h.drop_at(upper_half(1), Some(row("right", "i4", 1)));
        assert_eq!(
            t.effect,
            DragEffect::DropRejected {
                item: "i1".into(),
                reason: DropRejection::TargetItemMissing { item: "i4".into() },
            }
        );
        assert_eq!(ids(&h.reg, "left"), vec!["i1", "i2"]);
    }

    #[test]
    fn drop_reads_current_contents_not_start_snapshot() {
        let mut h = Harness::new();
        h.start("i1");
        // Host reshuffles the source column mid-drag.
        h.reg
            .set_container(&"left".into(), vec![Item::new("i2", "2"), Item::new("i1", "1")])
            .unwrap();
        h.drop_at(upper_half(0), Some(row("right", "i3", 0)));
        assert_eq!(ids(&h.reg, "left"), vec!["i2"]);
        assert_eq!(ids(&h.reg, "right"), vec!["i1", "i3", "i4"]);
    }

    #[test]
    fn drop_after_source_removed_is_rejected() {
        let mut h = Harness::new();
        h.start("i1");
        h.reg
            .set_container(&"left".into(), vec![Item::new("i2", "2")])
            .unwrap();
        let t = h.drop_at(upper_half(0), Some(row("right", "i3", 0)));
        assert_eq!(
            t.effect,
            DragEffect::DropRejected {
                item: "i1".into(),
                reason: DropRejection::SourceItemMissing,
            }
        );
    }

    #[test]
    fn leave_clears_highlight_and_keeps_session() {
        let mut h = Harness::new();
        h.start("i1");
        h.over(upper_half(0), Some(row("right", "i3", 0)));
        let e = h.seq.drag_leave("right");
        let t = h.apply(e);
        assert_eq!(
            t.effect,
            DragEffect::Left {
                container: "right".into(),
                highlight_changed: true,
            }
        );
        assert!(h.ctl.highlight().is_none());
        assert!(h.ctl.is_dragging());
    }

    #[test]
    fn cancel_returns_to_idle_for_every_reason() {
        for reason in [
            CancelReason::EscapeKey,
            CancelReason::PointerCaptureLost,
            CancelReason::LeftDocument,
            CancelReason::FocusLost,
            CancelReason::Programmatic,
        ] {
            let mut h = Harness::new();
            h.start("i1");
            h.over(upper_half(0), Some(row("left", "i2", 0)));
            let e = h.seq.cancel(reason);
            let t = h.apply(e);
            assert_eq!(
                t.effect,
                DragEffect::Canceled {
                    item: "i1".into(),
                    reason,
                }
            );
            assert!(!h.ctl.is_dragging());
            assert!(h.ctl.highlight().is_none());
            // A new drag can start afterwards.
            assert!(matches!(h.start("i2").effect, DragEffect::Started { .. }));
        }
    }

    #[test]
    fn stale_sequence_is_ignored() {
        let mut h = Harness::new();
        h.start("i1");
        let late_over = DragInputEvent::new(
            1,
            DragInputKind::DragOver {
                pointer: upper_half(0),
                hovered: Some(row("right", "i3", 0)),
            },
        );
        let t = h.apply(late_over);
        assert_eq!(
            t.effect,
            DragEffect::Noop {
                reason: NoopReason::StaleSequence
            }
        );
        assert!(h.ctl.highlight().is_none());
        assert_eq!(h.ctl.last_sequence(), 1);
    }

    #[test]
    fn cancel_from_another_source_ends_session() {
        let mut h = Harness::new();
        for _ in 0..4 {
            h.seq.drag_leave("left");
        }
        let t = h.start("i1");
        assert_eq!(t.sequence, 5);

        // A second adapter numbers its events from 1.
        let mut other = InputSequencer::new();
        let stale_over = other.drag_over(upper_half(0), Some(row("right", "i3", 0)));
        assert_eq!(
            h.apply(stale_over).effect,
            DragEffect::Noop {
                reason: NoopReason::StaleSequence
            }
        );
        let t = h.apply(other.cancel(CancelReason::PointerCaptureLost));
        assert_eq!(
            t.effect,
            DragEffect::Canceled {
                item: "i1".into(),
                reason: CancelReason::PointerCaptureLost,
            }
        );
        assert!(!h.ctl.is_dragging());

        let t = h.apply(other.drag_start("i2"));
        assert!(matches!(t.effect, DragEffect::Started { .. }));
        assert_eq!(h.ctl.session().unwrap().started_sequence, 3);
    }

    #[test]
    fn malformed_event_is_an_error() {
        let mut h = Harness::new();
        let err = h
            .ctl
            .apply(&mut h.reg, &DragInputEvent::new(0, DragInputKind::DragStart { item: "i1".into() }))
            .unwrap_err();
        assert_eq!(err, DragInputError::ZeroSequence);
        assert!(!h.ctl.is_dragging());
    }

    #[test]
    fn transition_ids_increase() {
        let mut h = Harness::new();
        let a = h.start("i1");
        let b = h.over(upper_half(0), None);
        let c = h.drop_at(upper_half(0), None);
        assert_eq!(
            (a.transition_id, b.transition_id, c.transition_id),
            (1, 2, 3)
        );
        assert!(b.from.is_dragging() && b.to.is_dragging());
        assert!(c.from.is_dragging() && !c.to.is_dragging());
    }

    #[test]
    fn drop_rejection_messages() {
        assert_eq!(DropRejection::NoTarget.to_string(), "no drop target under pointer");
        assert_eq!(
            DropRejection::TargetItemMissing { item: "i9".into() }.to_string(),
            "target item 'i9' is no longer in its container"
        );
    }
}
