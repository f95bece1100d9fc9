//! Command Error Types
//!
//! Defines the failure type returned by every controller command. Failures
//! are never fatal: the command is rejected and the controller state is left
//! as it was, except where a variant documents otherwise.

use alloc::string::String;
use core::fmt;

use crate::mode::{Mode, Operation};

/// Result of a controller command
pub type Status = Result<(), TourGuideError>;

/// Errors that can occur when issuing a controller command
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TourGuideError {
    /// Command is not legal in the current mode
    #[error("Cannot {operation} while in {mode} mode")]
    ModeViolation {
        /// Rejected operation
        operation: Operation,
        /// Mode the controller was in
        mode: Mode,
    },

    /// A stored tour already uses this id
    #[error("Tour with id {0:?} already exists")]
    DuplicateTour(String),

    /// No tour is being authored
    #[error("No tour under construction")]
    NoTourUnderConstruction,

    /// A leg is already waiting for its waypoint
    #[error("Cannot add two legs in a row")]
    ConsecutiveLegs,

    /// Tour cannot be finished with a dangling leg
    #[error("Cannot end a tour with {legs} legs and {waypoints} waypoints")]
    LegWaypointMismatch {
        /// Legs in the draft
        legs: usize,
        /// Waypoints in the draft
        waypoints: usize,
    },

    /// Tour has no waypoints; the draft was discarded
    #[error("Tour {0:?} has no waypoints and was discarded")]
    EmptyTour(String),

    /// New waypoint is within the minimum separation of an existing one
    #[error("Waypoint is {distance:.1} m from an existing waypoint (minimum {separation:.1} m)")]
    WaypointTooClose {
        /// Distance to the nearest offending waypoint
        distance: f64,
        /// Configured minimum separation
        separation: f64,
    },

    /// No location has been reported for the waypoint
    #[error("No location set for the new waypoint")]
    MissingLocation,

    /// No stored tour has this id
    #[error("No tour with id {0:?}")]
    TourNotFound(String),
}

impl TourGuideError {
    /// Failure category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TourGuideError::ModeViolation { .. } => ErrorKind::ModeViolation,
            TourGuideError::DuplicateTour(_) => ErrorKind::DuplicateIdentity,
            TourGuideError::NoTourUnderConstruction
            | TourGuideError::ConsecutiveLegs
            | TourGuideError::LegWaypointMismatch { .. }
            | TourGuideError::EmptyTour(_)
            | TourGuideError::MissingLocation => ErrorKind::Structural,
            TourGuideError::WaypointTooClose { .. } => ErrorKind::Proximity,
            TourGuideError::TourNotFound(_) => ErrorKind::Lookup,
        }
    }

    /// Check if the command was rejected only because of the current mode
    pub fn is_mode_violation(&self) -> bool {
        self.kind() == ErrorKind::ModeViolation
    }
}

/// Command failure categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation invoked outside the mode it requires
    ModeViolation,
    /// Tour id already taken
    DuplicateIdentity,
    /// Tour structure rule broken
    Structural,
    /// Waypoint placed too close to another
    Proximity,
    /// Unknown tour id
    Lookup,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ModeViolation => write!(f, "Mode violation"),
            ErrorKind::DuplicateIdentity => write!(f, "Duplicate identity"),
            ErrorKind::Structural => write!(f, "Structural violation"),
            ErrorKind::Proximity => write!(f, "Proximity violation"),
            ErrorKind::Lookup => write!(f, "Lookup failure"),
        }
    }
}
