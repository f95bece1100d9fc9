//! Controller trait definition
//!
//! Command/query interface between the presentation layer and the core.

use crate::error::Status;
use crate::output::Chunk;
use crate::tour::Annotation;

/// Tour guide controller trait
///
/// Every command either succeeds or fails with a described
/// [`TourGuideError`](crate::TourGuideError). A failed command leaves the
/// controller as it was, except for [`Controller::end_new_tour`] on a tour
/// without waypoints, which discards the tour.
///
/// # Output
///
/// Commands that produce output replace the whole buffer returned by
/// [`Controller::output`]; nothing is appended across calls.
pub trait Controller {
    /// Begin authoring a tour (Browse -> Create)
    ///
    /// Fails if a stored tour already uses `id`.
    fn start_new_tour(&mut self, id: &str, title: &str, annotation: Annotation) -> Status;

    /// Place a waypoint at the last location reported in Create mode
    fn add_waypoint(&mut self, annotation: Annotation) -> Status;

    /// Open the leg leading to the next waypoint
    fn add_leg(&mut self, annotation: Annotation) -> Status;

    /// Finish authoring (Create -> Browse)
    fn end_new_tour(&mut self) -> Status;

    /// Show details of a stored tour
    fn show_tour_details(&mut self, id: &str) -> Status;

    /// Show the list of stored tours
    fn show_tours_overview(&mut self) -> Status;

    /// Start walking a stored tour (Browse -> Follow)
    fn follow_tour(&mut self, id: &str) -> Status;

    /// Stop walking the selected tour (Follow -> Browse)
    fn end_selected_tour(&mut self) -> Status;

    /// Report the walker's position in metres east and north of the origin
    ///
    /// Never fails; ignored outside Create and Follow.
    fn set_location(&mut self, easting: f64, northing: f64);

    /// Current output buffer
    fn output(&self) -> &[Chunk];
}
