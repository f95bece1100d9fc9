//! Operation transition table

use core::fmt;

use super::Mode;

/// Mode-gated controller operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Begin authoring a tour
    StartNewTour,
    /// Place a waypoint at the pending location
    AddWaypoint,
    /// Open the leg leading to the next waypoint
    AddLeg,
    /// Finish authoring
    EndNewTour,
    /// Show one tour's details
    ShowTourDetails,
    /// Show the list of tours
    ShowToursOverview,
    /// Start walking a tour
    FollowTour,
    /// Stop walking the selected tour
    EndSelectedTour,
    /// Location update from the host
    SetLocation,
}

impl Operation {
    /// Get operation name for logging
    pub fn name(self) -> &'static str {
        match self {
            Operation::StartNewTour => "startNewTour",
            Operation::AddWaypoint => "addWaypoint",
            Operation::AddLeg => "addLeg",
            Operation::EndNewTour => "endNewTour",
            Operation::ShowTourDetails => "showTourDetails",
            Operation::ShowToursOverview => "showToursOverview",
            Operation::FollowTour => "followTour",
            Operation::EndSelectedTour => "endSelectedTour",
            Operation::SetLocation => "setLocation",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::StartNewTour => write!(f, "start a new tour"),
            Operation::AddWaypoint => write!(f, "add a waypoint"),
            Operation::AddLeg => write!(f, "add a leg"),
            Operation::EndNewTour => write!(f, "end the new tour"),
            Operation::ShowTourDetails => write!(f, "show tour details"),
            Operation::ShowToursOverview => write!(f, "show the tours overview"),
            Operation::FollowTour => write!(f, "follow a tour"),
            Operation::EndSelectedTour => write!(f, "end the selected tour"),
            Operation::SetLocation => write!(f, "set the location"),
        }
    }
}

/// Legal (mode, operation) pairs and the mode a success leaves behind
///
/// Any pair not listed is rejected without touching controller state.
pub const TRANSITIONS: [(Mode, Operation, Mode); 10] = [
    (Mode::Browse, Operation::StartNewTour, Mode::Create),
    (Mode::Browse, Operation::ShowTourDetails, Mode::Browse),
    (Mode::Browse, Operation::ShowToursOverview, Mode::Browse),
    (Mode::Browse, Operation::FollowTour, Mode::Follow),
    (Mode::Create, Operation::AddWaypoint, Mode::Create),
    (Mode::Create, Operation::AddLeg, Mode::Create),
    (Mode::Create, Operation::EndNewTour, Mode::Browse),
    (Mode::Create, Operation::SetLocation, Mode::Create),
    (Mode::Follow, Operation::EndSelectedTour, Mode::Browse),
    (Mode::Follow, Operation::SetLocation, Mode::Follow),
];
