//! Presentation layer for prompt-council
//!
//! This crate contains CLI definitions, output formatters, and the
//! progress reporters that render the run's event feed.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat, TaskTypeArg};
pub use config::council_file::{CouncilFileError, load_council_file};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
