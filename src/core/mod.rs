//! Core module - pure simulation engine with no external dependencies
//!
//! Shape table, figures, the jar grid, and the session state machine.
//! It has zero dependencies on UI, persistence, or I/O.

pub mod figure;
pub mod jar;
pub mod rng;
pub mod session;
pub mod shapes;

// Re-export commonly used types
pub use figure::Figure;
pub use jar::Jar;
pub use rng::{ShapeRng, SimpleRng};
pub use session::Session;
pub use shapes::{rotation_states, Pattern};
