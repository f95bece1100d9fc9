//! Tour Entities
//!
//! Pure data structures for authored tours.
//!
//! # Tour Structure
//!
//! - Ordered waypoints, each with an annotation and a location
//! - Ordered legs; leg `i` leads up to waypoint `i`, so the first leg runs
//!   from the tour start to the first waypoint
//! - While authoring, `legs == waypoints` or `legs == waypoints + 1` (one leg
//!   opened and waiting for its waypoint)
//! - A finished tour has `legs == waypoints >= 1`
//!
//! # Note
//!
//! This module only enforces the structural rules of a single tour. Mode
//! gating and uniqueness of ids across tours belong to the controller.

mod annotation;

pub use annotation::Annotation;

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::TourGuideError;
use crate::navigation::Displacement;

/// Tour waypoint
///
/// A point of interest on a tour, with the text presented on arrival.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    annotation: Annotation,
    location: Displacement,
}

impl Waypoint {
    /// Create a new waypoint at `location`
    pub fn new(annotation: Annotation, location: Displacement) -> Self {
        Self {
            annotation,
            location,
        }
    }

    /// Text presented when the walker reaches this waypoint
    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    /// Waypoint position relative to the reference point
    pub fn location(&self) -> Displacement {
        self.location
    }
}

/// Tour leg
///
/// The stretch of walk leading up to a waypoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Leg {
    annotation: Annotation,
}

impl Leg {
    /// Create a new leg
    pub fn new(annotation: Annotation) -> Self {
        Self { annotation }
    }

    /// Text presented while walking this leg
    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }
}

/// Authored tour
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    id: String,
    title: String,
    annotation: Annotation,
    waypoints: Vec<Waypoint>,
    legs: Vec<Leg>,
}

impl Tour {
    /// Create a new empty tour
    pub fn new(id: impl Into<String>, title: impl Into<String>, annotation: Annotation) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            annotation,
            waypoints: Vec::new(),
            legs: Vec::new(),
        }
    }

    /// Tour id (unique among stored tours)
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Tour title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Tour description
    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    /// All waypoints in walking order
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// All legs in walking order
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Get a waypoint by index
    pub fn waypoint(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    /// Get a leg by index
    pub fn leg(&self, index: usize) -> Option<&Leg> {
        self.legs.get(index)
    }

    /// Number of waypoints
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Number of legs
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Check if a leg has been opened and is waiting for its waypoint
    pub fn has_pending_leg(&self) -> bool {
        self.legs.len() != self.waypoints.len()
    }

    /// Check if the tour satisfies the finished-tour structure
    pub fn is_complete(&self) -> bool {
        !self.has_pending_leg() && !self.waypoints.is_empty()
    }

    /// Open the leg leading to the next waypoint
    ///
    /// Returns `Err(ConsecutiveLegs)` if a leg is already pending.
    pub fn add_leg(&mut self, annotation: Annotation) -> Result<(), TourGuideError> {
        if self.has_pending_leg() {
            return Err(TourGuideError::ConsecutiveLegs);
        }
        self.legs.push(Leg::new(annotation));
        Ok(())
    }

    /// Check that `location` keeps at least `separation` from every waypoint
    ///
    /// Returns `Err(WaypointTooClose)` for the first waypoint, in tour order,
    /// strictly closer than `separation`.
    pub fn check_separation(
        &self,
        location: &Displacement,
        separation: f64,
    ) -> Result<(), TourGuideError> {
        for waypoint in &self.waypoints {
            let distance = waypoint.location.distance_to(location);
            if distance < separation {
                return Err(TourGuideError::WaypointTooClose {
                    distance,
                    separation,
                });
            }
        }
        Ok(())
    }

    /// Append a waypoint
    ///
    /// If no leg is pending, a leg with the default annotation is opened
    /// first so every waypoint has the leg leading to it. Separation is the
    /// caller's check (see [`Tour::check_separation`]).
    pub fn add_waypoint(&mut self, annotation: Annotation, location: Displacement) {
        if !self.has_pending_leg() {
            self.legs.push(Leg::default());
        }
        self.waypoints.push(Waypoint::new(annotation, location));
    }
}
