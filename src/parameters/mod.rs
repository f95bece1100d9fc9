//! Parameter management
//!
//! The controller's two thresholds are plain numbers fixed at construction.
//! This module lets a host keep them as named parameters it can edit and
//! persist, and turn them into [`TourGuideParams`] when building the
//! controller. Persistence itself is the host's concern.

pub mod error;
pub mod storage;
pub mod tour_guide;

pub use error::ParameterError;
pub use storage::{ParamFlags, ParamValue, ParameterStore, MAX_PARAMS, PARAM_NAME_LEN};
pub use tour_guide::TourGuideParams;
