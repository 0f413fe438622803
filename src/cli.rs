use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quitpath")]
#[command(about = "Smoking-cessation tracker with onboarding quiz", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print the completed quiz answers as JSON after the TUI exits
    #[arg(long)]
    pub print_results: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the trigger catalog offered by the quiz
    Triggers,

    /// Show config status and location, or create default config if missing
    InitConfig,
}

pub fn parse() -> Cli {
    Cli::parse()
}
