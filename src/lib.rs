#![cfg_attr(not(test), no_std)]

//! tour_guide_core - Pure no_std logic core for a pedestrian tour-guide device
//!
//! This crate contains the controller of the device: the authoring, browsing
//! and following state machine, the tour data it manages, and the geometry
//! that turns a walker's reported position into progress information.
//! Rendering, persistence and location sensing are left to the host.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives in the logic modules
//! - **Pure no_std**: Owned text and tour lists come from `alloc` only
//! - **Trait abstractions**: The presentation layer talks to the [`Controller`] trait
//!
//! # Modules
//!
//! - [`navigation`]: Displacement type and polar distance/bearing geometry
//! - [`tour`]: Tour, Leg, Waypoint and Annotation entities
//! - [`output`]: Chunk output items and the tour overview accumulator
//! - [`mode`]: Controller mode and the operation transition table
//! - [`follow`]: Follow-mode stage tracking and waypoint progression
//! - [`controller`]: The `Controller` trait and its `TourGuide` implementation
//! - [`parameters`]: Parameter store and the controller thresholds
//! - [`error`]: Command failure types
//! - [`logging`]: Crate logging macros
//!
//! # Example
//!
//! ```
//! use tour_guide_core::{Annotation, Controller, TourGuide};
//!
//! let mut guide = TourGuide::new(10.0, 25.0);
//! guide.start_new_tour("T1", "Old Town", Annotation::new("Castle to palace")).unwrap();
//! guide.set_location(-500.0, 0.0);
//! guide.add_waypoint(Annotation::new("Edinburgh Castle")).unwrap();
//! guide.end_new_tour().unwrap();
//!
//! guide.follow_tour("T1").unwrap();
//! guide.set_location(0.0, 0.0);
//! assert_eq!(guide.output().len(), 3);
//! ```

extern crate alloc;

pub mod logging;
pub mod controller;
pub mod error;
pub mod follow;
pub mod mode;
pub mod navigation;
pub mod output;
pub mod parameters;
pub mod tour;

pub use controller::{Controller, TourGuide};
pub use error::{ErrorKind, Status, TourGuideError};
pub use follow::Stage;
pub use mode::{Mode, Operation};
pub use navigation::{polar_distance, Displacement};
pub use output::{Chunk, Overview, OutputBuffer, MAX_CHUNKS};
pub use parameters::{ParameterError, ParameterStore, TourGuideParams};
pub use tour::{Annotation, Leg, Tour, Waypoint};
