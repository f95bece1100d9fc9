//! Follow Mode Progression
//!
//! Turns the walker's reported location into the chunks describing where
//! they are on the followed tour.
//!
//! # Algorithm
//!
//! 1. Proximity scan: the first waypoint in tour order within the waypoint
//!    radius is the detected waypoint. Earliest index wins even if a later
//!    waypoint is closer.
//! 2. Nothing detected: header, then the leg and bearing toward the next
//!    expected waypoint (nothing at all once the tour is complete).
//! 3. Detected waypoint is the expected one: the stage advances, then
//!    header, the waypoint, and (unless that was the last waypoint) the leg
//!    and bearing toward the new expected waypoint.
//! 4. Detected waypoint is another one (backtracked or skipped ahead): the
//!    stage stays, then header, the detected waypoint, and the leg and
//!    bearing toward the expected waypoint when the tour is not complete.

mod progression;
mod stage;

pub use progression::{detect_waypoint, TourFollower};
pub use stage::Stage;
