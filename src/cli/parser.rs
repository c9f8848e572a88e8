use crate::export::ArtifactFormat;
use crate::models::InputSchema;
use clap::{Parser, Subcommand};

/// Command-line interface definition for focustimeline
/// CLI application that renders focus sessions as weekly timelines
#[derive(Parser)]
#[command(
    name = "focustimeline",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn a focus-session log into weekly calendar timelines and an HTML report",
    long_about = None
)]
pub struct Cli {
    /// Override the input CSV path (useful for tests or one-off logs)
    #[arg(global = true, long = "input", short = 'i')]
    pub input: Option<String>,

    /// Override the input layout detection
    #[arg(global = true, long = "schema", value_enum)]
    pub schema: Option<InputSchema>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Render one timeline per week and the HTML index
    Report {
        /// Output directory (default from config)
        #[arg(long, short = 'o', value_name = "DIR")]
        out: Option<String>,

        /// Artifact format for the weekly timelines
        #[arg(long, value_enum)]
        format: Option<ArtifactFormat>,

        /// Text/Markdown file shown as "Key Insights"
        #[arg(long, value_name = "FILE", conflicts_with = "builtin_insights")]
        insights: Option<String>,

        /// Compute the insights from the log and embed them
        #[arg(long = "builtin-insights")]
        builtin_insights: bool,

        /// Externally generated AI analysis shown as "AI Analysis"
        #[arg(long = "ai-notes", value_name = "FILE")]
        ai_notes: Option<String>,

        /// Also write the analysis charts (SVG) and link them from the index
        #[arg(long)]
        charts: bool,

        /// Overwrite an existing report without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print per-week totals and overall statistics
    Stats {
        #[arg(long, help = "Print the statistics as JSON")]
        json: bool,
    },

    /// Compute statistical insights (Markdown)
    Insights {
        /// Write the Markdown report to FILE instead of stdout
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
