use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "quo")]
#[command(about = "Interactive quote-building chat for audio equipment")]
#[command(version)]
pub struct Args {
    /// Customer mode (Residential, Commercial, Tender, Insurance)
    #[arg(short = 'm', long)]
    pub mode: Option<String>,

    /// Quote service base URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure quo settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List customer modes
    Modes,
}
