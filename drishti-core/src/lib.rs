//! drishti-core: shared data model for the drishti assistive-vision pipeline
//!
//! Holds the vocabulary the organ crates agree on: operating modes, the
//! closed detected-object category set, and the normalized message type
//! the alert gate reasons over.

pub mod message;
pub mod mode;
pub mod object;

pub use message::NormalizedMessage;
pub use mode::Mode;
pub use object::{DetectedObject, Direction, ObjectKind};
