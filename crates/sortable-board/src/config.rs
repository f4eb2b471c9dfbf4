#![forbid(unsafe_code)]

//! Board configuration.

use sortable_core::Orientation;

/// Default number of transitions retained for diagnostics.
pub const DEFAULT_TRANSITION_LOG_CAPACITY: usize = 64;

/// Configuration for a [`Board`](crate::board::Board).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// Orientation for containers added via
    /// [`Board::add_container`](crate::board::Board::add_container)
    /// (default: vertical).
    pub default_orientation: Orientation,
    /// Whether hovering outside every registered container clears the
    /// highlight (default: true).
    pub clear_highlight_on_invalid_hover: bool,
    /// Number of recent transitions kept for diagnostics (default: 64).
    /// Zero disables the log.
    pub transition_log_capacity: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_orientation: Orientation::Vertical,
            clear_highlight_on_invalid_hover: true,
            transition_log_capacity: DEFAULT_TRANSITION_LOG_CAPACITY,
        }
    }
}

impl BoardConfig {
    /// Lay out new containers horizontally.
    #[must_use]
    pub fn horizontal(mut self) -> Self {
        self.default_orientation = Orientation::Horizontal;
        self
    }

    /// Keep the last highlight when the pointer leaves every container.
    #[must_use]
    pub fn keep_highlight_on_invalid_hover(mut self) -> Self {
        self.clear_highlight_on_invalid_hover = false;
        self
    }

    /// Set how many transitions to retain.
    #[must_use]
    pub fn with_transition_log(mut self, capacity: usize) -> Self {
        self.transition_log_capacity = capacity;
        self
    }
}
