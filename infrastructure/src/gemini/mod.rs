//! Gemini adapter
//!
//! Implements the reasoning-gateway port over the Gemini `generateContent`
//! HTTP surface.

pub mod gateway;
pub mod protocol;

pub use gateway::GeminiGateway;
