//! Line-oriented interactive prompt driving a [`ResultsPager`].
//!
//! Plain text is a query; lines starting with `:` are commands.

use searchit_client::url_state::read_params;
use searchit_client::{Notifier, ResultsPager, SearchBackend, SearchState};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use url::Url;

use crate::error::Result;
use crate::render::{render_page, LOADING};

/// Shown by `:help`.
pub const HELP: &str = "\
Type a query and press Enter to search.
  :n, :next          next page
  :p, :prev          previous page
  :page N            jump to page N
  :back, :forward    move through history
  :open URL          load a page URL (reads its q and page parameters)
  :url               show the current page URL
  :clear             clear the search
  :help              show this help
  :q, :quit          exit
";

const PROMPT: &str = "> ";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Search for the given text.
    Search(String),
    /// Next page.
    Next,
    /// Previous page.
    Previous,
    /// Jump to a page; out-of-range pages are ignored by the pager.
    Page(u32),
    /// History back.
    Back,
    /// History forward.
    Forward,
    /// Navigate to a page URL.
    Open(Url),
    /// Print the current page URL.
    ShowUrl,
    /// Reset the search.
    Clear,
    /// Print help.
    Help,
    /// Leave the prompt.
    Quit,
}

/// Input that could not be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// A `:` command that does not exist.
    #[error("unknown command :{0} (try :help)")]
    Unknown(String),

    /// A command that needs an argument got none.
    #[error(":{0} needs an argument")]
    MissingArgument(&'static str),

    /// `:page` with something that is not a number.
    #[error("not a page number: {0}")]
    InvalidPage(String),

    /// `:open` with something that is not a URL.
    #[error("not a URL: {0}")]
    InvalidUrl(String),
}

impl Command {
    /// Parse one trimmed, non-empty input line.
    pub fn parse(line: &str) -> std::result::Result<Self, CommandError> {
        let line = line.trim();
        let Some(rest) = line.strip_prefix(':') else {
            return Ok(Self::Search(line.to_owned()));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name {
            "n" | "next" => Ok(Self::Next),
            "p" | "prev" | "previous" => Ok(Self::Previous),
            "page" => {
                if arg.is_empty() {
                    return Err(CommandError::MissingArgument("page"));
                }
                arg.parse::<u32>()
                    .map(Self::Page)
                    .map_err(|_| CommandError::InvalidPage(arg.to_owned()))
            }
            "back" | "b" => Ok(Self::Back),
            "forward" | "f" => Ok(Self::Forward),
            "open" => {
                if arg.is_empty() {
                    return Err(CommandError::MissingArgument("open"));
                }
                Url::parse(arg)
                    .map(Self::Open)
                    .map_err(|_| CommandError::InvalidUrl(arg.to_owned()))
            }
            "url" => Ok(Self::ShowUrl),
            "clear" => Ok(Self::Clear),
            "help" | "h" | "?" => Ok(Self::Help),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_owned())),
        }
    }

    /// Whether running this command against `state` will send a request.
    ///
    /// History moves are not predicted.
    pub fn will_fetch(&self, state: &SearchState) -> bool {
        match self {
            Self::Search(query) => !query.trim().is_empty(),
            Self::Next => state.is_selectable(state.current_page.saturating_add(1)),
            Self::Previous => state.is_selectable(state.current_page.saturating_sub(1)),
            Self::Page(page) => state.is_selectable(*page),
            Self::Open(url) => read_params(url).query.is_some(),
            _ => false,
        }
    }
}

/// Read commands from `input` until EOF or `:quit`, rendering to `output`.
///
/// A search carried by the pager's page URL is loaded and shown before the
/// first prompt.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub async fn run<B, N, R, W>(pager: &mut ResultsPager<B, N>, input: R, output: &mut W) -> Result<()>
where
    B: SearchBackend,
    N: Notifier,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    if read_params(pager.current_url()).query.is_some() {
        write_out(output, &format!("{LOADING}\n")).await?;
        pager.sync_from_url().await;
        write_out(output, &render_page(pager.state(), &pager.window())).await?;
    }
    write_out(output, PROMPT).await?;

    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            write_out(output, PROMPT).await?;
            continue;
        }

        let command = match Command::parse(trimmed) {
            Ok(command) => command,
            Err(err) => {
                write_out(output, &format!("error: {err}\n{PROMPT}")).await?;
                continue;
            }
        };
        tracing::trace!(?command, "prompt command");

        if command == Command::Quit {
            break;
        }
        if command.will_fetch(pager.state()) {
            write_out(output, &format!("{LOADING}\n")).await?;
        }

        match command {
            Command::Search(query) => {
                pager.set_query(query);
                pager.submit().await;
            }
            Command::Next => pager.next_page().await,
            Command::Previous => pager.previous_page().await,
            Command::Page(page) => pager.select_page(page).await,
            Command::Back => {
                if !pager.back().await {
                    write_out(output, "no earlier page\n").await?;
                }
            }
            Command::Forward => {
                if !pager.forward().await {
                    write_out(output, "no later page\n").await?;
                }
            }
            Command::Open(url) => pager.open(url).await,
            Command::Clear => pager.clear(),
            Command::ShowUrl => {
                let url = format!("{}\n{PROMPT}", pager.current_url());
                write_out(output, &url).await?;
                continue;
            }
            Command::Help => {
                write_out(output, &format!("{HELP}{PROMPT}")).await?;
                continue;
            }
            Command::Quit => break,
        }

        let page = render_page(pager.state(), &pager.window());
        write_out(output, &page).await?;
        write_out(output, PROMPT).await?;
    }

    Ok(())
}

async fn write_out<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
