use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for scriptboard.
/// With no subcommand the dashboard server is started.
#[derive(Parser)]
#[command(
    name = "scriptboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Operational dashboard for script-execution events: who ran what, when, and for how long",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the dashboard web server (default)
    Serve {
        #[arg(long, value_name = "ADDR", help = "Listen address, e.g. 127.0.0.1:8501")]
        bind: Option<String>,
    },

    /// Create the script_event table in the configured database
    Init,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration as YAML")]
        print_config: bool,
    },

    /// List the distinct source identifiers (IPs)
    Sources,

    /// List events with their durations
    Events {
        #[arg(long, help = "Only events from this source")]
        ip: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Only events started on this date")]
        date: Option<String>,
    },

    /// Show the 24-hour busy/free calendar for one day
    Calendar {
        #[arg(long, help = "Only events from this source")]
        ip: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Day to show (default: today)")]
        date: Option<String>,

        #[arg(
            long = "status",
            value_name = "STATUS",
            help = "Show only Running or Free slots (repeatable)"
        )]
        status: Vec<String>,
    },

    /// Export the filtered events
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        ip: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
