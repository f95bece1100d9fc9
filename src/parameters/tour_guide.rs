//! Tour Guide Parameter Definitions
//!
//! Maps the controller's distance thresholds to parameter store entries.
//!
//! # Parameters
//!
//! - `WP_RADIUS` - Waypoint detection radius in metres
//! - `WP_SEPARATION` - Minimum distance between waypoints of one tour in metres

use super::error::ParameterError;
use super::storage::{ParamFlags, ParamValue, ParameterStore};

/// Parameter name of the waypoint detection radius
pub const PARAM_WP_RADIUS: &str = "WP_RADIUS";

/// Parameter name of the minimum waypoint separation
pub const PARAM_WP_SEPARATION: &str = "WP_SEPARATION";

// --- Defaults ---

const DEFAULT_WP_RADIUS: f64 = 10.0;
const DEFAULT_WP_SEPARATION: f64 = 25.0;

// --- Ranges ---

const MIN_WP_RADIUS: f64 = 0.5;
const MAX_WP_RADIUS: f64 = 1000.0;

const MIN_WP_SEPARATION: f64 = 0.0;
const MAX_WP_SEPARATION: f64 = 5000.0;

/// Controller thresholds
///
/// Fixed for the lifetime of a [`TourGuide`](crate::TourGuide).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourGuideParams {
    /// A walker within this distance of a waypoint is at it (metres)
    pub waypoint_radius: f64,
    /// New waypoints must be at least this far from existing ones (metres)
    pub waypoint_separation: f64,
}

impl Default for TourGuideParams {
    fn default() -> Self {
        Self {
            waypoint_radius: DEFAULT_WP_RADIUS,
            waypoint_separation: DEFAULT_WP_SEPARATION,
        }
    }
}

impl TourGuideParams {
    /// Create parameters from explicit thresholds
    pub fn new(waypoint_radius: f64, waypoint_separation: f64) -> Self {
        Self {
            waypoint_radius,
            waypoint_separation,
        }
    }

    /// Register tour guide parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register(
            PARAM_WP_RADIUS,
            ParamValue::Float(DEFAULT_WP_RADIUS as f32),
            ParamFlags::empty(),
        )?;
        store.register(
            PARAM_WP_SEPARATION,
            ParamValue::Float(DEFAULT_WP_SEPARATION as f32),
            ParamFlags::empty(),
        )?;
        Ok(())
    }

    /// Load parameters from the store
    ///
    /// Values are clamped to their ranges. Missing or non-numeric entries
    /// fall back to the defaults.
    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            waypoint_radius: load_float(
                store,
                PARAM_WP_RADIUS,
                DEFAULT_WP_RADIUS,
                MIN_WP_RADIUS,
                MAX_WP_RADIUS,
            ),
            waypoint_separation: load_float(
                store,
                PARAM_WP_SEPARATION,
                DEFAULT_WP_SEPARATION,
                MIN_WP_SEPARATION,
                MAX_WP_SEPARATION,
            ),
        }
    }

    /// Check that both thresholds are within range
    pub fn is_valid(&self) -> bool {
        (MIN_WP_RADIUS..=MAX_WP_RADIUS).contains(&self.waypoint_radius)
            && (MIN_WP_SEPARATION..=MAX_WP_SEPARATION).contains(&self.waypoint_separation)
    }
}

fn load_float(store: &ParameterStore, name: &str, default: f64, min: f64, max: f64) -> f64 {
    match store.get(name).and_then(ParamValue::as_f64) {
        Some(v) => v.clamp(min, max),
        None => default,
    }
}
