//! Prompt domain
//!
//! Templates for every reasoning-service call the pipeline makes.

mod template;

pub use template::PromptTemplate;
