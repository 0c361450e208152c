mod commands;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use workdeck_infra::config;

use crate::commands::chat::Provider;

#[derive(Parser)]
#[command(name = "workdeck", version)]
#[command(about = "Work-item calendars and PR drafting against local LLMs")]
struct Cli {
    /// Config file (JSON or TOML); defaults to env vars, then the standard locations
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    json: bool,

    /// Log filter, e.g. "debug" or "workdeck_infra=trace" (RUST_LOG wins when set)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a prompt to a chat backend and print the accumulated answer
    Chat {
        #[arg(short, long, value_enum, default_value_t = Provider::Tabby)]
        provider: Provider,

        /// Prompt text; read from stdin when omitted or "-"
        prompt: Option<String>,
    },
    /// Map a tracker CSV export to calendar events (JSON)
    Calendar {
        /// Path to the CSV export
        csv: PathBuf,

        /// Only keep events for this assignee (repeatable)
        #[arg(short, long = "assignee")]
        assignees: Vec<String>,

        /// Print the distinct assignees instead of events
        #[arg(long)]
        list_assignees: bool,
    },
    /// Print the pull-request description template
    PrTemplate {
        /// Work-item ID to substitute
        #[arg(short, long, conflicts_with = "from")]
        ticket: Option<String>,

        /// Free text (e.g. a branch or PR title) to take the first number from
        #[arg(long)]
        from: Option<String>,
    },
    /// Print a review request message for a pull-request link
    ReviewMessage { pr_link: String },
    /// Run the local CORS proxy in front of Ollama
    Proxy {
        #[arg(long)]
        listen: Option<String>,

        #[arg(long)]
        upstream: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = config::load_or_default(cli.config)?;
    let level = cli.log_level.as_deref().unwrap_or(&settings.log_level);
    logging::init(level, cli.json)?;

    match cli.command {
        Commands::Chat { provider, prompt } => {
            commands::chat::run(provider, prompt, &settings.chat).await
        }
        Commands::Calendar { csv, assignees, list_assignees } => {
            commands::calendar::run(&csv, &assignees, list_assignees, &settings.calendar)
        }
        Commands::PrTemplate { ticket, from } => {
            commands::pull_request::template(ticket.as_deref(), from.as_deref());
            Ok(())
        }
        Commands::ReviewMessage { pr_link } => {
            commands::pull_request::review_message(&pr_link);
            Ok(())
        }
        Commands::Proxy { listen, upstream } => {
            let mut proxy = settings.proxy;
            if let Some(addr) = listen {
                proxy.listen_addr = addr;
            }
            if let Some(url) = upstream {
                proxy.upstream_url = url;
            }
            commands::proxy::run(&proxy).await
        }
    }
}
