//! CLI binary for searchit.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use searchit::render::render_page;
use searchit::{AppConfig, TerminalNotifier};
use searchit_client::{HttpBackend, ResultsPager};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;
use url::Url;

/// SearchIT: search a remote endpoint and page through the results.
#[derive(Parser)]
#[command(name = "searchit", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Search endpoint URL (overrides the config file).
    #[arg(long)]
    endpoint: Option<String>,

    /// Number of page-number controls to show (overrides the config file).
    #[arg(long)]
    window_size: Option<u32>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Interactive prompt (default).
    Interactive,

    /// Run one search and print one page of results.
    Search {
        /// Query text.
        query: String,

        /// Page to show.
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// Load a page URL and print the results its q/page parameters describe.
    Open {
        /// Page URL, e.g. `http://localhost:3000/?q=rust&page=2`.
        url: Url,
    },

    /// Print the effective configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so results on stdout stay clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("searchit=info,searchit_client=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(endpoint) = cli.endpoint {
        config.client.endpoint = endpoint;
    }
    if let Some(window_size) = cli.window_size {
        config.ui.window_size = window_size;
    }
    config.validate()?;

    let backend = HttpBackend::new(&config.client)?;
    let mut pager = ResultsPager::new(backend, TerminalNotifier, &config.ui)?;
    tracing::debug!(endpoint = %pager.backend().endpoint(), "search endpoint");

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            println!("SearchIT v{}  (:help for commands)", env!("CARGO_PKG_VERSION"));
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = tokio::io::stdout();
            searchit::repl::run(&mut pager, stdin, &mut stdout).await?;
        }
        Command::Search { query, page } => {
            pager.open_search(&query, page).await;
            print!("{}", render_page(pager.state(), &pager.window()));
        }
        Command::Open { url } => {
            pager.open(url).await;
            print!("{}", render_page(pager.state(), &pager.window()));
        }
        Command::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
