//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] - the reasoning backends available to the pipeline
//! - [`objective::Objective`] - a validated run objective
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod model;
pub mod objective;
