//! Chunk output items

use alloc::string::String;
use core::fmt;

use libm::round;

use super::Overview;
use crate::tour::Annotation;

/// One unit of output for the presentation layer
#[derive(Debug, Clone)]
pub enum Chunk {
    /// Listing of all authored tours
    BrowseOverview(Overview),
    /// Authoring progress of the tour under construction
    CreateHeader {
        /// Tour title
        title: String,
        /// Legs added so far
        leg_count: usize,
        /// Waypoints added so far
        waypoint_count: usize,
    },
    /// Details of one stored tour
    BrowseDetails {
        /// Tour id
        id: String,
        /// Tour title
        title: String,
        /// Tour description
        annotation: Annotation,
    },
    /// Progress through the followed tour
    FollowHeader {
        /// Tour title
        title: String,
        /// Waypoints reached so far
        stage: usize,
        /// Waypoints in the tour
        waypoint_count: usize,
    },
    /// Leg currently being walked
    FollowLeg {
        /// Leg annotation
        annotation: Annotation,
    },
    /// Waypoint the walker is at
    FollowWaypoint {
        /// Waypoint annotation
        annotation: Annotation,
    },
    /// Direction to the next waypoint
    FollowBearing {
        /// Bearing in degrees, clockwise from north (0-360)
        bearing_deg: f64,
        /// Distance in metres
        distance: f64,
    },
}

impl Chunk {
    /// Create a `CreateHeader` chunk
    pub fn create_header(
        title: impl Into<String>,
        leg_count: usize,
        waypoint_count: usize,
    ) -> Self {
        Chunk::CreateHeader {
            title: title.into(),
            leg_count,
            waypoint_count,
        }
    }

    /// Create a `BrowseDetails` chunk
    pub fn browse_details(
        id: impl Into<String>,
        title: impl Into<String>,
        annotation: impl Into<Annotation>,
    ) -> Self {
        Chunk::BrowseDetails {
            id: id.into(),
            title: title.into(),
            annotation: annotation.into(),
        }
    }

    /// Create a `FollowHeader` chunk
    pub fn follow_header(title: impl Into<String>, stage: usize, waypoint_count: usize) -> Self {
        Chunk::FollowHeader {
            title: title.into(),
            stage,
            waypoint_count,
        }
    }

    /// Create a `FollowLeg` chunk
    pub fn follow_leg(annotation: impl Into<Annotation>) -> Self {
        Chunk::FollowLeg {
            annotation: annotation.into(),
        }
    }

    /// Create a `FollowWaypoint` chunk
    pub fn follow_waypoint(annotation: impl Into<Annotation>) -> Self {
        Chunk::FollowWaypoint {
            annotation: annotation.into(),
        }
    }

    /// Create a `FollowBearing` chunk
    pub fn follow_bearing(bearing_deg: f64, distance: f64) -> Self {
        Chunk::FollowBearing {
            bearing_deg,
            distance,
        }
    }
}

/// Bearing at display resolution: whole degrees, 360 folded onto 0
fn display_bearing(bearing_deg: f64) -> f64 {
    round(bearing_deg) % 360.0
}

impl PartialEq for Chunk {
    /// Bearings and distances compare at display resolution (whole units);
    /// every other field compares exactly.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Chunk::BrowseOverview(a), Chunk::BrowseOverview(b)) => a == b,
            (
                Chunk::CreateHeader {
                    title: t1,
                    leg_count: l1,
                    waypoint_count: w1,
                },
                Chunk::CreateHeader {
                    title: t2,
                    leg_count: l2,
                    waypoint_count: w2,
                },
            ) => t1 == t2 && l1 == l2 && w1 == w2,
            (
                Chunk::BrowseDetails {
                    id: i1,
                    title: t1,
                    annotation: a1,
                },
                Chunk::BrowseDetails {
                    id: i2,
                    title: t2,
                    annotation: a2,
                },
            ) => i1 == i2 && t1 == t2 && a1 == a2,
            (
                Chunk::FollowHeader {
                    title: t1,
                    stage: s1,
                    waypoint_count: w1,
                },
                Chunk::FollowHeader {
                    title: t2,
                    stage: s2,
                    waypoint_count: w2,
                },
            ) => t1 == t2 && s1 == s2 && w1 == w2,
            (Chunk::FollowLeg { annotation: a1 }, Chunk::FollowLeg { annotation: a2 }) => a1 == a2,
            (
                Chunk::FollowWaypoint { annotation: a1 },
                Chunk::FollowWaypoint { annotation: a2 },
            ) => a1 == a2,
            (
                Chunk::FollowBearing {
                    bearing_deg: b1,
                    distance: d1,
                },
                Chunk::FollowBearing {
                    bearing_deg: b2,
                    distance: d2,
                },
            ) => display_bearing(*b1) == display_bearing(*b2) && round(*d1) == round(*d2),
            _ => false,
        }
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chunk::BrowseOverview(overview) => {
                write!(f, "Tours:")?;
                if overview.is_empty() {
                    return write!(f, " (none)");
                }
                for (i, entry) in overview.entries().iter().enumerate() {
                    let sep = if i == 0 { " " } else { "; " };
                    write!(f, "{}{} {}", sep, entry.id, entry.title)?;
                }
                Ok(())
            }
            Chunk::CreateHeader {
                title,
                leg_count,
                waypoint_count,
            } => write!(
                f,
                "Creating \"{}\": {} legs, {} waypoints",
                title, leg_count, waypoint_count
            ),
            Chunk::BrowseDetails {
                id,
                title,
                annotation,
            } => write!(f, "{} \"{}\": {}", id, title, annotation),
            Chunk::FollowHeader {
                title,
                stage,
                waypoint_count,
            } => write!(f, "\"{}\": stage {} of {}", title, stage, waypoint_count),
            Chunk::FollowLeg { annotation } => write!(f, "Leg: {}", annotation),
            Chunk::FollowWaypoint { annotation } => write!(f, "Waypoint: {}", annotation),
            Chunk::FollowBearing {
                bearing_deg,
                distance,
            } => write!(
                f,
                "Head {:.0} deg for {:.0} m",
                display_bearing(*bearing_deg),
                round(*distance)
            ),
        }
    }
}
