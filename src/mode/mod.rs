//! Controller Mode State Machine
//!
//! The controller is always in exactly one [`Mode`]. Which commands are legal,
//! and which mode a successful command leaves the controller in, is decided
//! by one transition table rather than by checks spread over each command.
//!
//! # Contents
//!
//! - `Mode`: Browse (initial), Create, Follow
//! - `Operation`: every mode-gated controller operation
//! - `TRANSITIONS`: the (mode, operation) -> next mode table

mod state;
mod transition;

pub use state::Mode;
pub use transition::{Operation, TRANSITIONS};
