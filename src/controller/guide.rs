//! TourGuide controller state

use alloc::string::String;
use alloc::vec::Vec;

use super::Controller;
use crate::error::{Status, TourGuideError};
use crate::follow::{Stage, TourFollower};
use crate::mode::{Mode, Operation};
use crate::navigation::Displacement;
use crate::output::{Chunk, OutputBuffer, Overview};
use crate::parameters::TourGuideParams;
use crate::tour::{Annotation, Tour};

/// Tour guide controller
///
/// Owns everything the device knows: the stored tours, the tour being
/// authored, the follow progress and the output buffer. Constructed once
/// with its thresholds and driven through the [`Controller`] trait.
#[derive(Debug)]
pub struct TourGuide {
    params: TourGuideParams,
    mode: Mode,
    /// Finished tours in the order they were ended
    tours: Vec<Tour>,
    /// Tour under construction (Create mode)
    draft: Option<Tour>,
    /// Last location reported in Create mode
    pending_location: Option<Displacement>,
    /// Selected tour snapshot and stage (Follow mode)
    follower: Option<TourFollower>,
    /// (id, title) of every tour started and not discarded
    overview: Overview,
    output: OutputBuffer,
}

impl TourGuide {
    /// Create a controller with the given waypoint radius and separation
    /// (metres)
    pub fn new(waypoint_radius: f64, waypoint_separation: f64) -> Self {
        Self::with_params(&TourGuideParams::new(waypoint_radius, waypoint_separation))
    }

    /// Create a controller from loaded parameters
    ///
    /// Out-of-range thresholds are replaced by the defaults.
    pub fn with_params(params: &TourGuideParams) -> Self {
        let params = if params.is_valid() {
            *params
        } else {
            crate::log_warn!(
                "Invalid thresholds (radius {} m, separation {} m), using defaults",
                params.waypoint_radius,
                params.waypoint_separation
            );
            TourGuideParams::default()
        };

        crate::log_info!(
            "Tour guide started (radius {} m, separation {} m)",
            params.waypoint_radius,
            params.waypoint_separation
        );

        let mut output = OutputBuffer::new();
        let _ = output.push(Chunk::BrowseOverview(Overview::new()));

        Self {
            params,
            mode: Mode::default(),
            tours: Vec::new(),
            draft: None,
            pending_location: None,
            follower: None,
            overview: Overview::new(),
            output,
        }
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Thresholds fixed at construction
    pub fn params(&self) -> &TourGuideParams {
        &self.params
    }

    /// Finished tours
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    /// Tour being authored, if in Create mode
    pub fn tour_under_construction(&self) -> Option<&Tour> {
        self.draft.as_ref()
    }

    /// Follow progress, if in Follow mode
    pub fn stage(&self) -> Option<Stage> {
        self.follower.as_ref().map(TourFollower::stage)
    }

    /// Snapshot of the tours overview
    pub fn overview(&self) -> Overview {
        self.overview.clone()
    }

    fn find_tour(&self, id: &str) -> Result<&Tour, TourGuideError> {
        self.tours
            .iter()
            .find(|tour| tour.id() == id)
            .ok_or_else(|| TourGuideError::TourNotFound(String::from(id)))
    }

    /// Run one mode-gated command
    ///
    /// `command` receives the mode a success leads to and is responsible
    /// for entering it.
    fn run<F>(&mut self, operation: Operation, command: F) -> Status
    where
        F: FnOnce(&mut Self, Mode) -> Status,
    {
        crate::log_debug!("{} in {} mode", operation.name(), self.mode);

        let Some(next) = self.mode.transition(operation) else {
            let err = TourGuideError::ModeViolation {
                operation,
                mode: self.mode,
            };
            crate::log_warn!("{} rejected: {}", operation.name(), err);
            return Err(err);
        };

        let result = command(self, next);
        if let Err(err) = &result {
            crate::log_warn!("{} rejected: {}", operation.name(), err);
        }
        result
    }

    fn enter(&mut self, next: Mode) {
        if next != self.mode {
            crate::log_info!("Mode transition: {} -> {}", self.mode, next);
            self.mode = next;
        }
    }

    fn emit(&mut self, chunk: Chunk) {
        self.output.clear();
        let _ = self.output.push(chunk);
    }

    fn emit_create_header(&mut self) {
        if let Some(draft) = &self.draft {
            let header =
                Chunk::create_header(draft.title(), draft.leg_count(), draft.waypoint_count());
            self.emit(header);
        }
    }

    /// Replace the output with the overview, unless no tours are stored
    fn emit_overview(&mut self) {
        if self.tours.is_empty() {
            return;
        }
        let overview = Chunk::BrowseOverview(self.overview.clone());
        self.emit(overview);
    }
}

impl Default for TourGuide {
    fn default() -> Self {
        Self::with_params(&TourGuideParams::default())
    }
}

impl Controller for TourGuide {
    fn start_new_tour(&mut self, id: &str, title: &str, annotation: Annotation) -> Status {
        self.run(Operation::StartNewTour, |guide, next| {
            if guide.tours.iter().any(|tour| tour.id() == id) {
                return Err(TourGuideError::DuplicateTour(String::from(id)));
            }

            guide.draft = Some(Tour::new(id, title, annotation));
            guide.pending_location = None;
            guide.overview.add(id, title);
            guide.enter(next);
            guide.emit_create_header();
            Ok(())
        })
    }

    fn add_waypoint(&mut self, annotation: Annotation) -> Status {
        self.run(Operation::AddWaypoint, |guide, next| {
            let separation = guide.params.waypoint_separation;
            let draft = guide
                .draft
                .as_mut()
                .ok_or(TourGuideError::NoTourUnderConstruction)?;
            let location = guide
                .pending_location
                .ok_or(TourGuideError::MissingLocation)?;
            draft.check_separation(&location, separation)?;

            draft.add_waypoint(annotation, location);
            crate::log_debug!(
                "Waypoint {} placed at ({}, {})",
                draft.waypoint_count(),
                location.east(),
                location.north()
            );
            guide.enter(next);
            guide.emit_create_header();
            Ok(())
        })
    }

    fn add_leg(&mut self, annotation: Annotation) -> Status {
        self.run(Operation::AddLeg, |guide, next| {
            guide
                .draft
                .as_mut()
                .ok_or(TourGuideError::NoTourUnderConstruction)?
                .add_leg(annotation)?;
            guide.enter(next);
            guide.emit_create_header();
            Ok(())
        })
    }

    fn end_new_tour(&mut self) -> Status {
        self.run(Operation::EndNewTour, |guide, next| {
            let draft = guide
                .draft
                .as_ref()
                .ok_or(TourGuideError::NoTourUnderConstruction)?;
            if draft.has_pending_leg() {
                return Err(TourGuideError::LegWaypointMismatch {
                    legs: draft.leg_count(),
                    waypoints: draft.waypoint_count(),
                });
            }

            let Some(tour) = guide.draft.take() else {
                return Err(TourGuideError::NoTourUnderConstruction);
            };
            guide.pending_location = None;
            guide.enter(next);

            // Legs match waypoints here, so only an empty tour is incomplete
            if !tour.is_complete() {
                guide.overview.remove(tour.id());
                guide.emit_overview();
                return Err(TourGuideError::EmptyTour(String::from(tour.id())));
            }

            crate::log_info!(
                "Tour {} stored with {} waypoints",
                tour.id(),
                tour.waypoint_count()
            );
            guide.tours.push(tour);
            guide.emit_overview();
            Ok(())
        })
    }

    fn show_tour_details(&mut self, id: &str) -> Status {
        self.run(Operation::ShowTourDetails, |guide, next| {
            let tour = guide.find_tour(id)?;
            let details = Chunk::browse_details(tour.id(), tour.title(), tour.annotation().clone());
            guide.enter(next);
            guide.emit(details);
            Ok(())
        })
    }

    fn show_tours_overview(&mut self) -> Status {
        self.run(Operation::ShowToursOverview, |guide, next| {
            guide.enter(next);
            guide.emit_overview();
            Ok(())
        })
    }

    fn follow_tour(&mut self, id: &str) -> Status {
        self.run(Operation::FollowTour, |guide, next| {
            let tour = guide.find_tour(id)?.clone();
            guide.follower = Some(TourFollower::new(tour));
            guide.enter(next);
            Ok(())
        })
    }

    fn end_selected_tour(&mut self) -> Status {
        self.run(Operation::EndSelectedTour, |guide, next| {
            guide.follower = None;
            guide.enter(next);
            guide.output.clear();
            guide.emit_overview();
            Ok(())
        })
    }

    fn set_location(&mut self, easting: f64, northing: f64) {
        let location = Displacement::new(easting, northing);
        crate::log_trace!("Location ({}, {}) in {} mode", easting, northing, self.mode);

        if !self.mode.permits(Operation::SetLocation) {
            return;
        }
        if !location.is_finite() {
            crate::log_warn!("Ignoring non-finite location ({}, {})", easting, northing);
            return;
        }

        match self.mode {
            Mode::Create => self.pending_location = Some(location),
            Mode::Follow => {
                let radius = self.params.waypoint_radius;
                let update = self
                    .follower
                    .as_mut()
                    .and_then(|follower| follower.update(&location, radius));
                if let Some(chunks) = update {
                    self.output = chunks;
                }
            }
            Mode::Browse => {}
        }
    }

    fn output(&self) -> &[Chunk] {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn ann(text: &str) -> Annotation {
        Annotation::new(text)
    }

    fn empty_overview() -> [Chunk; 1] {
        [Chunk::BrowseOverview(Overview::new())]
    }

    #[test]
    fn test_initial_state() {
        let guide = TourGuide::new(10.0, 25.0);
        assert_eq!(guide.mode(), Mode::Browse);
        assert!(guide.tours().is_empty());
        assert!(guide.stage().is_none());
        assert_eq!(guide.output(), &empty_overview());
    }

    #[test]
    fn test_default_uses_default_params() {
        let guide = TourGuide::default();
        assert_eq!(guide.params(), &TourGuideParams::default());
    }

    #[test]
    fn test_invalid_params_fall_back_to_defaults() {
        let guide = TourGuide::new(-1.0, f64::NAN);
        assert_eq!(guide.params(), &TourGuideParams::default());

        let guide = TourGuide::new(5.0, 0.0);
        assert_eq!(guide.params(), &TourGuideParams::new(5.0, 0.0));
    }

    #[test]
    fn test_non_finite_location_ignored_while_following() {
        let mut guide = TourGuide::new(10.0, 25.0);
        guide.start_new_tour("T1", "Leith", ann("")).unwrap();
        guide.set_location(0.0, 100.0);
        guide.add_waypoint(ann("Shore")).unwrap();
        guide.end_new_tour().unwrap();
        guide.follow_tour("T1").unwrap();
        guide.set_location(0.0, 0.0);
        let before = guide.output().to_vec();

        guide.set_location(f64::NAN, f64::NAN);
        guide.set_location(f64::INFINITY, 0.0);

        assert_eq!(guide.stage(), Some(Stage::new()));
        assert_eq!(guide.output(), before.as_slice());
    }

    #[test]
    fn test_non_finite_location_not_used_for_waypoint() {
        let mut guide = TourGuide::new(10.0, 25.0);
        guide.start_new_tour("T1", "Leith", ann("")).unwrap();
        guide.set_location(f64::NAN, 0.0);

        assert_eq!(
            guide.add_waypoint(ann("A")),
            Err(TourGuideError::MissingLocation)
        );
    }

    #[test]
    fn test_mode_violation_leaves_state() {
        let mut guide = TourGuide::new(10.0, 25.0);

        let err = guide.add_leg(ann("Royal Mile")).unwrap_err();
        assert_eq!(
            err,
            TourGuideError::ModeViolation {
                operation: Operation::AddLeg,
                mode: Mode::Browse,
            }
        );
        assert_eq!(guide.mode(), Mode::Browse);
        assert_eq!(guide.output(), &empty_overview());

        assert!(guide.end_selected_tour().unwrap_err().is_mode_violation());
        assert!(guide.end_new_tour().unwrap_err().is_mode_violation());
    }

    #[test]
    fn test_create_mode_rejects_browse_commands() {
        let mut guide = TourGuide::new(10.0, 25.0);
        guide.start_new_tour("T1", "Leith", ann("")).unwrap();

        assert!(guide.show_tours_overview().unwrap_err().is_mode_violation());
        assert!(guide.follow_tour("T1").unwrap_err().is_mode_violation());
        assert!(guide
            .start_new_tour("T2", "Other", ann(""))
            .unwrap_err()
            .is_mode_violation());
        assert_eq!(guide.output(), &[Chunk::create_header("Leith", 0, 0)]);
    }

    #[test]
    fn test_start_new_tour_emits_header() {
        let mut guide = TourGuide::new(10.0, 25.0);
        guide.start_new_tour("T1", "Leith", ann("Docks")).unwrap();

        assert_eq!(guide.mode(), Mode::Create);
        assert_eq!(guide.output(), &[Chunk::create_header("Leith", 0, 0)]);
        assert_eq!(guide.tour_under_construction().map(Tour::id), Some("T1"));
        // Draft is not stored until it is finished
        assert!(guide.tours().is_empty());
    }

    #[test]
    fn test_add_waypoint_without_location() {
        let mut guide = TourGuide::new(10.0, 25.0);
        guide.start_new_tour("T1", "Leith", ann("")).unwrap();

        let err = guide.add_waypoint(ann("Shore")).unwrap_err();
        assert_eq!(err, TourGuideError::MissingLocation);
        assert_eq!(err.kind(), ErrorKind::Structural);
        assert_eq!(guide.output(), &[Chunk::create_header("Leith", 0, 0)]);
    }

    #[test]
    fn test_pending_location_persists_between_waypoints() {
        let mut guide = TourGuide::new(10.0, 0.0);
        guide.start_new_tour("T1", "Leith", ann("")).unwrap();
        guide.set_location(0.0, 0.0);
        guide.add_waypoint(ann("A")).unwrap();
        guide.add_waypoint(ann("B")).unwrap();

        assert_eq!(guide.output(), &[Chunk::create_header("Leith", 2, 2)]);
    }

    #[test]
    fn test_consecutive_legs_rejected() {
        let mut guide = TourGuide::new(10.0, 25.0);
        guide.start_new_tour("T1", "Leith", ann("")).unwrap();
        guide.add_leg(ann("First")).unwrap();
        assert_eq!(guide.output(), &[Chunk::create_header("Leith", 1, 0)]);

        assert_eq!(
            guide.add_leg(ann("Second")),
            Err(TourGuideError::ConsecutiveLegs)
        );
        assert_eq!(guide.output(), &[Chunk::create_header("Leith", 1, 0)]);
    }

    #[test]
    fn test_end_with_pending_leg_stays_in_create() {
        let mut guide = TourGuide::new(10.0, 25.0);
        guide.start_new_tour("T1", "Leith", ann("")).unwrap();
        guide.set_location(0.0, 0.0);
        guide.add_waypoint(ann("A")).unwrap();
        guide.add_leg(ann("Onwards")).unwrap();

        assert_eq!(
            guide.end_new_tour(),
            Err(TourGuideError::LegWaypointMismatch {
                legs: 2,
                waypoints: 1
            })
        );
        assert_eq!(guide.mode(), Mode::Create);
        assert!(guide.tour_under_construction().is_some());
    }

    #[test]
    fn test_end_empty_tour_discards_it() {
        let mut guide = TourGuide::new(10.0, 25.0);
        guide.start_new_tour("T1", "Leith", ann("")).unwrap();

        assert_eq!(
            guide.end_new_tour(),
            Err(TourGuideError::EmptyTour(String::from("T1")))
        );
        assert_eq!(guide.mode(), Mode::Browse);
        assert!(guide.tours().is_empty());
        assert!(guide.overview().is_empty());
        // Nothing stored to list, so the last header stays
        assert_eq!(guide.output(), &[Chunk::create_header("Leith", 0, 0)]);

        // Id is free again
        guide.start_new_tour("T1", "Leith", ann("")).unwrap();
    }

    #[test]
    fn test_set_location_ignored_in_browse() {
        let mut guide = TourGuide::new(10.0, 25.0);
        guide.set_location(100.0, 100.0);

        assert_eq!(guide.mode(), Mode::Browse);
        assert_eq!(guide.output(), &empty_overview());

        // Location reported before the tour started is not used
        guide.start_new_tour("T1", "Leith", ann("")).unwrap();
        assert_eq!(
            guide.add_waypoint(ann("A")),
            Err(TourGuideError::MissingLocation)
        );
    }

    #[test]
    fn test_follow_and_end_selected_tour() {
        let mut guide = TourGuide::new(10.0, 25.0);
        guide.start_new_tour("T1", "Leith", ann("")).unwrap();
        guide.set_location(0.0, 100.0);
        guide.add_waypoint(ann("Shore")).unwrap();
        guide.end_new_tour().unwrap();
        let overview = [Chunk::BrowseOverview(Overview::new().with("T1", "Leith"))];
        assert_eq!(guide.output(), &overview);

        guide.follow_tour("T1").unwrap();
        assert_eq!(guide.mode(), Mode::Follow);
        assert_eq!(guide.stage(), Some(Stage::new()));
        // Output waits for the first location
        assert_eq!(guide.output(), &overview);

        guide.set_location(0.0, 0.0);
        assert_eq!(
            guide.output(),
            &[
                Chunk::follow_header("Leith", 0, 1),
                Chunk::follow_leg(Annotation::default()),
                Chunk::follow_bearing(0.0, 100.0),
            ]
        );

        guide.end_selected_tour().unwrap();
        assert_eq!(guide.mode(), Mode::Browse);
        assert!(guide.stage().is_none());
        assert_eq!(guide.output(), &overview);
    }

    #[test]
    fn test_unknown_tour_lookups() {
        let mut guide = TourGuide::new(10.0, 25.0);

        let err = guide.follow_tour("T9").unwrap_err();
        assert_eq!(err, TourGuideError::TourNotFound(String::from("T9")));
        assert_eq!(err.kind(), ErrorKind::Lookup);
        assert_eq!(guide.mode(), Mode::Browse);

        assert_eq!(
            guide.show_tour_details("T9").unwrap_err().kind(),
            ErrorKind::Lookup
        );
    }

    #[test]
    fn test_usable_through_trait_object() {
        let mut guide = TourGuide::new(10.0, 25.0);
        let controller: &mut dyn Controller = &mut guide;

        controller.start_new_tour("T1", "Leith", ann("")).unwrap();
        assert_eq!(controller.output(), &[Chunk::create_header("Leith", 0, 0)]);
    }
}
