//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for wayfarer
#[derive(Parser, Debug)]
#[command(name = "wayfarer")]
#[command(version, about = "Travel-content assistant - generate and refine travel content in conversation")]
#[command(long_about = r#"
Wayfarer generates travel content (attraction guides, itineraries, food
recommendations, ...) through a chat-completion model and lets you refine
the result over follow-up turns.

The first request is wrapped with the selected category's instruction
template; every later turn continues the same conversation.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./wayfarer.toml     Project-level config
3. ~/.config/wayfarer/config.toml   Global config

Example:
  wayfarer --category food-recommendation "snacks around the Muslim Quarter in Xi'an"
  wayfarer --chat
  wayfarer -t 0.2 --category gear-checklist "7 days in Tibet, September"
"#)]
pub struct Cli {
    /// The request to generate content for (not required in chat mode)
    pub request: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Content category for the first turn (e.g. attraction-guide)
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Sampling temperature in [0, 1] (0 = rigorous, 1 = creative)
    #[arg(short, long, value_name = "FLOAT")]
    pub temperature: Option<f32>,

    /// Model identifier override
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner and headers
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
