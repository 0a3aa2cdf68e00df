//! Terminal front-end for the character browser.
//!
//! # Overview
//! `rickdex-core` decides what to fetch and what to show; this crate does
//! the I/O. `Shell` reads line commands, turns them into URL pushes on the
//! `Controller`, runs the resulting requests through a `Transport` on
//! worker threads and redraws the screen as text.

pub mod command;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod render;
pub mod shell;
pub mod transport;

pub use command::Command;
pub use config::Config;
pub use error::{AppError, CommandError};
pub use shell::{Flow, Shell};
pub use transport::{Transport, UreqTransport};
