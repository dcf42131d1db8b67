pub mod huggingface;
pub mod openrouter;
pub mod trait_impl;

pub use huggingface::HuggingFaceProvider;
pub use openrouter::OpenRouterProvider;
pub use trait_impl::Provider;
