//! The UI event loop.
//!
//! # Design
//! Single-threaded: only the fetcher's workers run elsewhere, and they never
//! touch state. After each command that navigates, the loop waits for
//! completions until the controller stops loading, applying each one in
//! arrival order. Completions for superseded tickets are dropped by the
//! controller.

use std::io::{BufRead, Write};

use rickdex_core::{CharacterClient, Controller, FetchTicket};

use crate::command::{Command, HELP};
use crate::error::AppError;
use crate::fetcher::Fetcher;
use crate::render;
use crate::transport::Transport;

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Redraw, optionally with a one-line notice.
    Continue(Option<String>),
    Quit,
}

pub struct Shell<T: Transport> {
    controller: Controller,
    fetcher: Fetcher<T>,
}

impl<T: Transport> Shell<T> {
    pub fn new(client: CharacterClient, transport: T) -> Self {
        Self {
            controller: Controller::new(client),
            fetcher: Fetcher::new(transport),
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Push `url` and wait for whatever it fetches.
    pub fn go(&mut self, url: &str) {
        let ticket = self.controller.push(url);
        self.dispatch(ticket);
    }

    fn dispatch(&mut self, ticket: Option<FetchTicket>) {
        if let Some(ticket) = ticket {
            let request = self.controller.request(&ticket);
            self.fetcher.spawn(ticket, request);
        }
        self.settle();
    }

    /// Apply completions until the current fetch has landed.
    fn settle(&mut self) {
        while self.controller.screen().loading {
            let Some(done) = self.fetcher.recv() else {
                tracing::error!("fetch channel closed while loading");
                return;
            };
            let generation = done.ticket.generation();
            if !self.controller.complete(done.ticket, done.outcome) {
                tracing::debug!(generation, "stale completion ignored");
            }
        }
    }

    pub fn handle(&mut self, command: Command) -> Flow {
        tracing::debug!(?command, "handling command");
        let notice = match command {
            Command::Search(text) => {
                self.controller.set_query(text);
                let url = self.controller.search_url();
                self.go(&url);
                None
            }
            Command::Type(text) => {
                self.controller.set_query(text);
                None
            }
            Command::Open(id) => {
                let url = self.controller.open_url(id);
                self.go(&url);
                None
            }
            Command::Close => {
                if self.controller.nav().is_detail() {
                    let url = self.controller.close_url();
                    self.go(&url);
                    None
                } else {
                    Some("no character is open".to_string())
                }
            }
            Command::Next => match self.controller.next_page_url() {
                Some(url) => {
                    self.go(&url);
                    None
                }
                None => Some("there is no next page".to_string()),
            },
            Command::Prev => match self.controller.prev_page_url() {
                Some(url) => {
                    self.go(&url);
                    None
                }
                None => Some("already on the first page".to_string()),
            },
            Command::Favorite => match self.controller.toggle_favorite() {
                Some(true) => Some("added to favorites".to_string()),
                Some(false) => Some("removed from favorites".to_string()),
                None => Some("open a character to favorite it".to_string()),
            },
            Command::Go(url) => {
                self.go(&url);
                None
            }
            Command::Back => {
                if self.controller.history().can_go_back() {
                    let ticket = self.controller.back();
                    self.dispatch(ticket);
                    None
                } else {
                    Some("no earlier page".to_string())
                }
            }
            Command::Help => Some(HELP.to_string()),
            Command::Quit => return Flow::Quit,
        };
        Flow::Continue(notice)
    }

    /// Draw the current screen.
    pub fn render(&self) -> String {
        render::screen(
            &self.controller.screen(),
            self.controller.store(),
            self.controller.nav(),
        )
    }

    /// Read commands line by line until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, start: &str, input: R, mut out: W) -> Result<(), AppError> {
        self.go(start);
        write!(out, "{}> ", self.render())?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            let flow = match line.parse::<Command>() {
                Ok(command) => self.handle(command),
                Err(e) => Flow::Continue(Some(e.to_string())),
            };
            match flow {
                Flow::Quit => break,
                Flow::Continue(notice) => {
                    writeln!(out)?;
                    if let Some(notice) = notice {
                        writeln!(out, "{notice}")?;
                        writeln!(out)?;
                    }
                    write!(out, "{}", self.render())?;
                    write!(out, "> ")?;
                    out.flush()?;
                }
            }
        }
        Ok(())
    }
}
