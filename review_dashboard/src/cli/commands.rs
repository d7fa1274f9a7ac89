use clap::{Parser, Subcommand};

/// Review dashboard data layer CLI.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the config file (dashboard.toml)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Base URL of the analytics service; overrides the config file and
    /// environment
    #[arg(long)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one render cycle, writing each panel spec as a JSON line
    Render {
        /// Period granularity: D (daily), W (weekly), M (monthly)
        #[arg(long)]
        freq: Option<String>,
    },

    /// List the panels and the service resources that feed them
    Panels,
}
