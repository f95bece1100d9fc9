//! Output Model
//!
//! Display items the controller emits for the presentation layer.
//!
//! # Output Buffer
//!
//! - Each mutating command replaces the whole buffer; nothing carries over
//! - At most [`MAX_CHUNKS`] items per command (a follow update emits
//!   header, waypoint, leg and bearing)
//! - Items are snapshots: the presentation layer can hold on to them without
//!   seeing later controller changes

mod chunk;
mod overview;

pub use chunk::Chunk;
pub use overview::{Overview, OverviewEntry};

/// Maximum chunks emitted by a single command
pub const MAX_CHUNKS: usize = 4;

/// Controller output buffer
pub type OutputBuffer = heapless::Vec<Chunk, MAX_CHUNKS>;
