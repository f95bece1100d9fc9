//! Tour Guide Controller
//!
//! The mode state machine that authors, lists and follows tours.
//!
//! # Contents
//!
//! - [`Controller`] trait (the interface the presentation layer drives)
//! - [`TourGuide`], the owned controller state implementing it
//!
//! # Command Handling
//!
//! Each command runs the same way:
//!
//! 1. Look up `(mode, operation)` in [`TRANSITIONS`](crate::mode::TRANSITIONS);
//!    an unlisted pair fails with a mode violation
//! 2. Validate arguments against the current state
//! 3. Mutate, switch mode, replace the output buffer

mod guide;
mod traits;

pub use guide::TourGuide;
pub use traits::Controller;
