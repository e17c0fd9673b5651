//! Council domain
//!
//! This module contains the entities and value objects of a council run:
//! the configured perspectives, the drafts they produce at each pipeline
//! stage, the progress insights disclosed mid-run, the synthesized result,
//! and the persisted history records.

pub mod draft;
pub mod history;
pub mod insight;
pub mod profile;
pub mod reply;
pub mod result;
pub mod task_type;
