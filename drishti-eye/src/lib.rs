//! drishti-eye: the assistive-vision analysis pipeline
//!
//! Periodic camera frames go to a hosted vision model; whatever text
//! comes back is normalized into a short message, gated against recent
//! alert history, and delivered as speech and haptics. The intelligence
//! lives behind the provider seam in drishti-llm; the judgement about
//! when to capture and when to stay quiet lives here.

pub mod config;
pub mod error;
pub mod frame;
pub mod gate;
pub mod parser;
pub mod session;

pub use config::VisionConfig;
pub use error::VisionError;
pub use frame::{encode_jpeg_data_uri, FrameSource};
pub use gate::{is_urgent, AlertGate, AlertState};
pub use parser::normalize;
pub use session::VisionSession;
