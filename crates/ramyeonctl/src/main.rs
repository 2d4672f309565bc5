//! Ramyeon Control - CLI client for the Ramyeon Assistant daemon.
//!
//! Manual smoke-testing interface against a running ramyeond.

mod client;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ramyeon_common::Language;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "ramyeonctl")]
#[command(about = "Ramyeon Assistant - conversational cooking helper", long_about = None)]
#[command(version)]
struct Cli {
    /// Daemon address
    #[arg(long, default_value = "http://127.0.0.1:8787")]
    addr: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show daemon health
    Status,

    /// Print the brand-grouped catalog
    Catalog,

    /// List all guide names
    List,

    /// Show the cooking guide for a product
    Guide {
        /// Product name (canonical or partial)
        name: String,

        /// Language (ko or en)
        #[arg(long, default_value = "ko", value_parser = Language::from_str)]
        lang: Language,

        /// Quick summary only
        #[arg(long)]
        quick: bool,
    },

    /// Run one utterance through the conversational parser
    Parse {
        /// Free-text utterance
        text: String,

        /// Language (ko or en)
        #[arg(long, default_value = "ko", value_parser = Language::from_str)]
        lang: Language,
    },

    /// Run the fixed manual smoke cases against the daemon
    Smoke,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = client::DaemonClient::new(&cli.addr)?;

    match cli.command {
        Commands::Status => commands::status(&client).await,
        Commands::Catalog => commands::catalog(&client).await,
        Commands::List => commands::list(&client).await,
        Commands::Guide { name, lang, quick } => commands::guide(&client, &name, lang, quick).await,
        Commands::Parse { text, lang } => commands::parse(&client, &text, lang).await,
        Commands::Smoke => commands::smoke(&client).await,
    }
}
