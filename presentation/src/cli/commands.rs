//! CLI command definitions

use clap::{Parser, ValueEnum};
use council_domain::TaskType;
use std::path::PathBuf;

/// Output format for run results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with every section
    Full,
    /// Only the final draft and improved prompt
    Final,
    /// JSON output
    Json,
}

/// Task type selector
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TaskTypeArg {
    /// Creative / generative objective
    A,
    /// Analytical / technical objective
    B,
}

impl From<TaskTypeArg> for TaskType {
    fn from(arg: TaskTypeArg) -> Self {
        match arg {
            TaskTypeArg::A => TaskType::Generative,
            TaskTypeArg::B => TaskType::Analytical,
        }
    }
}

/// CLI arguments for prompt-council
#[derive(Parser, Debug)]
#[command(name = "prompt-council")]
#[command(author, version, about = "Multi-perspective prompt council - simulate, debate, synthesize")]
#[command(long_about = r#"
prompt-council runs a council of configured perspectives against an objective.

The process has three stages:
1. Simulation: each council lens drafts an independent analysis, one at a time
2. Debate: each draft is revised against the other lenses' key points
3. Synthesis: a deeper model combines everything into one final artifact

Configuration files are loaded from (in priority order):
1. --config <path>      Explicit config file
2. ./council.toml       Project-level config
3. ~/.config/prompt-council/config.toml   Global config

Example:
  prompt-council --council team.toml "Launch a paid newsletter for indie devs"
  prompt-council --suggest -t b "Choose a primary datastore for event logs"
  prompt-council --history
"#)]
pub struct Cli {
    /// The objective for the council to deliberate on
    pub objective: Option<String>,

    /// Additional free-text context for the run
    #[arg(long, value_name = "TEXT")]
    pub context: Option<String>,

    /// TOML file describing the council roster
    #[arg(short = 'C', long, value_name = "PATH")]
    pub council: Option<PathBuf>,

    /// Ask the service to suggest a council roster for the objective
    #[arg(short, long)]
    pub suggest: bool,

    /// Task type; inferred by --suggest, defaults to analytical otherwise
    #[arg(short, long, value_enum)]
    pub task_type: Option<TaskTypeArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "final")]
    pub output: OutputFormat,

    /// Save the run's improved prompt to the artifact library under this label
    #[arg(long, value_name = "LABEL")]
    pub save_artifact: Option<String>,

    /// List past runs and exit
    #[arg(long)]
    pub history: bool,

    /// Clear the entire run history and exit
    #[arg(long)]
    pub clear_history: bool,

    /// List saved artifacts and exit
    #[arg(long)]
    pub artifacts: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
