//! drishti-llm: remote vision-model client
//!
//! One HTTP call per captured frame: a mode-specific instruction prompt
//! plus the frame goes to a hosted multimodal model, raw text comes back.
//! The response should contain JSON but is treated as untrusted; parsing
//! it into something speakable is the pipeline's job, not the client's.

pub mod config;
pub mod error;
pub mod prompts;
pub mod providers;


pub use config::{LlmConfig, LlmProvider};
pub use error::{LlmError, Result};
pub use providers::{HuggingFaceProvider, OpenRouterProvider, Provider};
