#![forbid(unsafe_code)]

//! Thread-safe board handle.
//!
//! Every call takes one lock around the whole operation, so a drop (reorder
//! computation plus commit plus subscriber notification) is never interleaved
//! with another event. Subscriber callbacks run while the lock is held and
//! must not call back into the same [`SharedBoard`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use sortable_core::{DragInputError, DragInputEvent};

use crate::board::{Board, BoardSnapshot};
use crate::session::DragTransition;

/// Cloneable handle to a board shared between threads.
#[derive(Debug, Clone, Default)]
pub struct SharedBoard {
    inner: Arc<Mutex<Board>>,
}

impl SharedBoard {
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            inner: Arc::new(Mutex::new(board)),
        }
    }

    /// Apply one host input event under the board lock.
    pub fn handle(&self, event: &DragInputEvent) -> Result<DragTransition, DragInputError> {
        self.lock().handle(event)
    }

    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.lock().snapshot()
    }

    /// Run `f` with exclusive access to the board.
    pub fn with<R>(&self, f: impl FnOnce(&mut Board) -> R) -> R {
        f(&mut self.lock())
    }

    // A panic inside a subscriber poisons the mutex; the board itself is
    // still consistent because commits finish before subscribers run.
    fn lock(&self) -> MutexGuard<'_, Board> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;
    use crate::session::DragEffect;
    use sortable_core::{CancelReason, HoveredElement, InputSequencer, Point, Rect};
    use std::thread;

    #[test]
    fn events_from_another_thread_are_serialized() {
        let shared = SharedBoard::default();
        shared.with(|board| {
            board
                .add_container("left", [Item::new("i1", "1"), Item::new("i2", "2")])
                .unwrap();
            board.add_container("right", Vec::new()).unwrap();
        });

        let worker = shared.clone();
        let handle = thread::spawn(move || {
            let mut seq = InputSequencer::new();
            worker.handle(&seq.drag_start("i2")).unwrap();
            worker
                .handle(&seq.drop_at(
                    Point::new(1, 1),
                    Some(HoveredElement::container("right", Rect::new(0, 0, 10, 10))),
                ))
                .unwrap()
        });
        let transition = handle.join().unwrap();
        assert!(transition.effect.is_commit());

        let snap = shared.snapshot();
        assert_eq!(snap.containers[0].len(), 1);
        assert_eq!(snap.containers[1].items()[0].id().as_str(), "i2");
        assert!(snap.dragging.is_none());
    }

    #[test]
    fn cancel_from_a_fresh_sequencer_releases_the_drag() {
        let shared = SharedBoard::default();
        shared.with(|board| {
            board
                .add_container("left", [Item::new("i1", "1"), Item::new("i2", "2")])
                .unwrap();
        });

        let mut pointer_seq = InputSequencer::new();
        for _ in 0..4 {
            pointer_seq.drag_leave("left");
        }
        shared.handle(&pointer_seq.drag_start("i1")).unwrap();
        assert!(shared.with(|board| board.is_dragging()));

        let worker = shared.clone();
        let canceled = thread::spawn(move || {
            let mut window_seq = InputSequencer::new();
            let cancel = worker
                .handle(&window_seq.cancel(CancelReason::PointerCaptureLost))
                .unwrap();
            let restart = worker.handle(&window_seq.drag_start("i2")).unwrap();
            (cancel, restart)
        });
        let (cancel, restart) = canceled.join().unwrap();

        assert!(matches!(cancel.effect, DragEffect::Canceled { .. }));
        assert!(matches!(restart.effect, DragEffect::Started { .. }));
        assert_eq!(shared.snapshot().dragging, Some("i2".into()));
    }
}
