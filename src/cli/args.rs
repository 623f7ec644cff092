use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bavard")]
#[command(about = "Chat with an AI about the subject of your choice")]
#[command(version)]
pub struct Args {
    /// Your first name (asked interactively if missing)
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Subject of the conversation (asked interactively if missing)
    #[arg(short = 's', long)]
    pub subject: Option<String>,

    /// Provider name (must be configured in config.toml, or "openai")
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Hide confetti and spinners
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Log requests and session events to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List configured providers
    Providers {
        /// Show details for a single provider
        provider: Option<String>,
    },
}
