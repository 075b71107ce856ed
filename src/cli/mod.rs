pub mod completions;
pub mod fmt;
pub mod init;
pub mod palette;
pub mod scan;
pub mod validate;

use clap::{ArgAction, Parser, Subcommand};

/// tint - Theme configuration checker for utility-first stylesheets
#[derive(Parser, Debug)]
#[command(name = "tint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a theme configuration
    Validate(validate::ValidateArgs),

    /// List the class names used by the project's content files
    Scan(scan::ScanArgs),

    /// Print the merged design-token palette
    Palette(palette::PaletteArgs),

    /// Rewrite a configuration in canonical form
    Fmt(fmt::FmtArgs),

    /// Create a starter configuration (generates tint.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
