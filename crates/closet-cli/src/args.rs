use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "closet")]
#[command(about = "Catalog your wardrobe and get outfit suggestions")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.closet)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive closet session
    Session {
        /// Preload a closet directory (<dir>/<category>/<image>)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Seed the random picker for repeatable suggestions
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Suggest one outfit from a closet directory
    Suggest {
        /// Occasion (casual, formal, workout)
        occasion: String,

        /// Weather (sunny, cloudy, rainy, cold, hot)
        weather: String,

        /// Closet directory (<dir>/<category>/<image>)
        #[arg(short, long)]
        dir: PathBuf,

        /// Seed the random picker for repeatable suggestions
        #[arg(long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the outfit rules
    Rules {
        /// Print the rules as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., intake.extensions)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., intake.extensions, categories.aliases.hoodie)
        key: String,

        /// Value to set (e.g., "jpg,png" or "[jpg, png]" or "outerwear")
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Initialize config file with defaults
    Init,
}
