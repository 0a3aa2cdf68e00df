//! Navigation-synced data loader.
//!
//! # Design
//! Each navigation change calls `Loader::begin`, which bumps a generation
//! counter and hands out a `FetchTicket` stamped with it. The host executes
//! the ticket's request and returns the outcome through `Loader::complete`.
//! Outcomes whose generation is no longer current are dropped without
//! touching visible state, so a slow response for an old URL can never
//! overwrite a newer one.
//!
//! Failure handling differs by mode: in detail mode every failure surfaces
//! as a "not found" error, in list mode every failure collapses into an
//! empty, zero-page result.

use crate::client::CharacterClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::nav::NavState;
use crate::types::{Character, CharacterPage};

/// Message shown when a detail request fails for any reason.
pub const NOT_FOUND_MESSAGE: &str = "character not found";

/// What a ticket fetches, fixed at `begin` time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPlan {
    Detail { id: String },
    List { page: u32, query: String },
}

impl FetchPlan {
    fn for_nav(nav: &NavState) -> Self {
        match &nav.id {
            Some(id) => FetchPlan::Detail { id: id.clone() },
            None => FetchPlan::List {
                page: nav.page.max(1),
                query: nav.query.clone(),
            },
        }
    }
}

/// A single in-flight fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    plan: FetchPlan,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn plan(&self) -> &FetchPlan {
        &self.plan
    }
}

/// What the current state allows to be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen<'a> {
    pub loading: bool,
    pub error: Option<&'a str>,
    pub body: Body<'a>,
}

/// At most one of detail or list is ever shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body<'a> {
    Detail(&'a Character),
    List(&'a CharacterPage),
    Empty,
}

#[derive(Debug, Clone)]
pub struct Loader {
    client: CharacterClient,
    generation: u64,
    loading: bool,
    error: Option<String>,
    list: Option<CharacterPage>,
    detail: Option<Character>,
}

impl Loader {
    pub fn new(client: CharacterClient) -> Self {
        Self {
            client,
            generation: 0,
            loading: false,
            error: None,
            list: None,
            detail: None,
        }
    }

    /// Start a fetch for `nav`, superseding any fetch still in flight.
    pub fn begin(&mut self, nav: &NavState) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        let ticket = FetchTicket {
            generation: self.generation,
            plan: FetchPlan::for_nav(nav),
        };
        tracing::debug!(generation = ticket.generation, plan = ?ticket.plan, "fetch started");
        ticket
    }

    /// The request the host should execute for `ticket`.
    ///
    /// A detail id that is not a valid character id fails as `NotFound`
    /// without a round-trip.
    pub fn request(&self, ticket: &FetchTicket) -> Result<HttpRequest, ApiError> {
        match &ticket.plan {
            FetchPlan::Detail { id } => id
                .trim()
                .parse::<u32>()
                .map(|id| self.client.build_get_character(id))
                .map_err(|_| ApiError::NotFound),
            FetchPlan::List { page, query } => Ok(self.client.build_list_characters(*page, query)),
        }
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply the outcome of `ticket`. Returns `false` if the ticket was
    /// superseded and the outcome was dropped.
    pub fn complete(&mut self, ticket: FetchTicket, outcome: Result<HttpResponse, ApiError>) -> bool {
        if !self.is_current(&ticket) {
            tracing::debug!(
                generation = ticket.generation,
                current = self.generation,
                "dropping superseded response"
            );
            return false;
        }

        match ticket.plan {
            FetchPlan::Detail { id } => {
                match outcome.and_then(|response| self.client.parse_get_character(response)) {
                    Ok(character) => {
                        self.detail = Some(character);
                        self.list = None;
                    }
                    Err(e) => {
                        tracing::warn!(%id, error = %e, "detail fetch failed");
                        self.error = Some(NOT_FOUND_MESSAGE.to_string());
                        self.detail = None;
                        self.list = None;
                    }
                }
            }
            FetchPlan::List { page, query } => {
                let result = outcome
                    .and_then(|response| self.client.parse_list_characters(response))
                    .unwrap_or_else(|e| {
                        tracing::warn!(page, %query, error = %e, "list fetch failed");
                        CharacterPage::empty()
                    });
                self.list = Some(result);
                self.detail = None;
            }
        }
        self.loading = false;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn list(&self) -> Option<&CharacterPage> {
        self.list.as_ref()
    }

    pub fn detail(&self) -> Option<&Character> {
        self.detail.as_ref()
    }

    /// Project the loaded data onto what `nav` says should be displayed.
    pub fn screen(&self, nav: &NavState) -> Screen<'_> {
        let body = match (&self.detail, &self.list) {
            _ if self.loading => Body::Empty,
            (Some(detail), _) if nav.is_detail() => Body::Detail(detail),
            (_, Some(list)) if !nav.is_detail() => Body::List(list),
            _ => Body::Empty,
        };
        Screen {
            loading: self.loading,
            error: self.error(),
            body,
        }
    }
}
