//! Use cases
//!
//! Application-level operations that orchestrate domain logic.
//!
//! The pipeline stages ([`simulate`], [`debate`], [`synthesize`]) are pure
//! transforms from inputs to new values; [`run_council`] sequences them,
//! and every remote call they make goes through [`backoff`].

pub mod backoff;
pub mod debate;
pub mod extract_profile;
pub mod run_council;
pub mod simulate;
pub mod suggest_council;
pub mod synthesize;
pub mod shared;
