//! Mode type
//!
//! The single global flag gating which controller operations are legal.

use core::fmt;

use super::transition::{Operation, TRANSITIONS};

/// Controller mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Listing tours and showing tour details
    #[default]
    Browse,
    /// Authoring a new tour
    Create,
    /// Walking a selected tour
    Follow,
}

impl Mode {
    /// Mode after `operation` succeeds in this mode
    ///
    /// Returns `None` if the operation is not legal in this mode.
    pub fn transition(self, operation: Operation) -> Option<Mode> {
        TRANSITIONS
            .iter()
            .find(|(from, op, _)| *from == self && *op == operation)
            .map(|(_, _, to)| *to)
    }

    /// Check if `operation` is legal in this mode
    pub fn permits(self, operation: Operation) -> bool {
        self.transition(operation).is_some()
    }

    /// Get mode name for logging
    pub fn name(self) -> &'static str {
        match self {
            Mode::Browse => "Browse",
            Mode::Create => "Create",
            Mode::Follow => "Follow",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
