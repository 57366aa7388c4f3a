//! SearchIT: terminal front end for a paginated web search endpoint.
//!
//! The heavy lifting lives in [`searchit_client`]; this crate adds the
//! pieces a user touches:
//!
//! - **Config**: TOML file with `[client]` and `[ui]` tables
//! - **Rendering**: result cards and the Previous / pages / Next bar as text
//! - **Prompt**: a line-oriented loop where text is a query and `:` lines
//!   are navigation commands
//! - **Alerts**: fetch failures are reported on stderr

pub mod alert;
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod render;
pub mod repl;

pub use alert::TerminalNotifier;
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use repl::Command;
