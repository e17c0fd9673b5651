//! Configuration file handling

pub mod file_config;
pub mod loader;

pub use file_config::{ExecutionSection, FileConfig, GatewaySection, StorageSection};
pub use loader::ConfigLoader;
