//! Waypoint detection and stage advancement

use super::Stage;
use crate::navigation::Displacement;
use crate::output::{Chunk, OutputBuffer};
use crate::tour::Tour;

/// Find the waypoint the walker is at
///
/// Scans waypoints in tour order and returns the index of the first one
/// within `radius` (inclusive) of `location`, or `None`.
pub fn detect_waypoint(tour: &Tour, location: &Displacement, radius: f64) -> Option<usize> {
    tour.waypoints()
        .iter()
        .position(|waypoint| location.distance_to(&waypoint.location()) <= radius)
}

/// Walker's progress through one tour
///
/// Holds its own copy of the tour, so the stored tour can change without
/// affecting a walk in progress.
#[derive(Debug, Clone)]
pub struct TourFollower {
    tour: Tour,
    stage: Stage,
}

impl TourFollower {
    /// Start following `tour` from its first waypoint
    pub fn new(tour: Tour) -> Self {
        Self {
            tour,
            stage: Stage::new(),
        }
    }

    /// Tour being followed
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Current stage
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Process a location update
    ///
    /// # Arguments
    ///
    /// * `location` - Walker's position
    /// * `radius` - Waypoint detection radius
    ///
    /// # Returns
    ///
    /// Chunks to show, or `None` if the output should stay as it is (tour
    /// complete and no waypoint nearby).
    pub fn update(&mut self, location: &Displacement, radius: f64) -> Option<OutputBuffer> {
        let total = self.tour.waypoint_count();
        let mut chunks = OutputBuffer::new();

        match detect_waypoint(&self.tour, location, radius) {
            None => {
                if self.stage.is_complete(total) {
                    return None;
                }
                let _ = chunks.push(self.header());
                self.push_guidance(&mut chunks, location);
            }
            Some(detected) => {
                if detected == self.stage.number() {
                    self.stage.advance();
                    crate::log_debug!(
                        "Reached waypoint {} of {}; stage now {}",
                        detected,
                        total,
                        self.stage.number()
                    );
                } else {
                    crate::log_debug!(
                        "Near waypoint {} while expecting {}",
                        detected,
                        self.stage.number()
                    );
                }

                let _ = chunks.push(self.header());
                if let Some(waypoint) = self.tour.waypoint(detected) {
                    let _ = chunks.push(Chunk::follow_waypoint(waypoint.annotation().clone()));
                }
                if !self.stage.is_complete(total) {
                    self.push_guidance(&mut chunks, location);
                }
            }
        }

        Some(chunks)
    }

    fn header(&self) -> Chunk {
        Chunk::follow_header(
            self.tour.title(),
            self.stage.number(),
            self.tour.waypoint_count(),
        )
    }

    /// Leg and bearing toward the expected waypoint
    fn push_guidance(&self, chunks: &mut OutputBuffer, location: &Displacement) {
        let next = self.stage.number();
        let (Some(leg), Some(target)) = (self.tour.leg(next), self.tour.waypoint(next)) else {
            return;
        };

        let heading = location.towards(&target.location());
        let _ = chunks.push(Chunk::follow_leg(leg.annotation().clone()));
        let _ = chunks.push(Chunk::follow_bearing(heading.bearing(), heading.distance()));
    }
}
