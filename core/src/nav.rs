//! Navigation state derived from URL query parameters.
//!
//! # Design
//! The URL is the single source of truth for what is displayed. `NavState`
//! is parsed from it, and every user action produces a new URL through
//! `NavState::make_url` rather than mutating state in place. Parameters:
//!
//! - `id`: selected character; its presence alone selects detail mode.
//! - `p`: page number, default 1, omitted when 1.
//! - `q`: search text, omitted when empty.

use std::num::IntErrorKind;

/// Page shown when `p` is absent or invalid.
pub const DEFAULT_PAGE: u32 = 1;

/// What the URL currently asks to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub id: Option<String>,
    pub page: u32,
    pub query: String,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            id: None,
            page: DEFAULT_PAGE,
            query: String::new(),
        }
    }
}

impl NavState {
    /// Parse a relative URL (`/?q=Rick`), a bare `?q=Rick`, or `q=Rick`.
    ///
    /// The first occurrence of each parameter wins. An empty `id` is absent;
    /// a missing, non-numeric or zero `p` is page 1. A `p` too large for a
    /// `u32` saturates at `u32::MAX`, which the API answers with no results.
    pub fn from_url(url: &str) -> Self {
        let url = url.split('#').next().unwrap_or_default();
        let query = match url.split_once('?') {
            Some((_, qs)) => qs,
            None if url.starts_with('/') => "",
            None => url,
        };

        let mut id = None;
        let mut page = None;
        let mut search = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "id" if id.is_none() => id = Some(value.into_owned()),
                "p" if page.is_none() => page = Some(value.into_owned()),
                "q" if search.is_none() => search = Some(value.into_owned()),
                _ => {}
            }
        }

        Self {
            id: id.filter(|id| !id.is_empty()),
            page: page.as_deref().and_then(parse_page).unwrap_or(DEFAULT_PAGE),
            query: search.unwrap_or_default(),
        }
    }

    pub fn is_detail(&self) -> bool {
        self.id.is_some()
    }

    /// Apply `update` on top of this state.
    pub fn apply(&self, update: &NavUpdate) -> NavState {
        let id = match &update.id {
            Some(next) => next.clone().filter(|id| !id.is_empty()),
            None => self.id.clone(),
        };
        NavState {
            id,
            page: update.page.unwrap_or(self.page),
            query: update.query.clone().unwrap_or_else(|| self.query.clone()),
        }
    }

    /// Build the relative URL for `update` applied to this state.
    pub fn make_url(&self, update: &NavUpdate) -> String {
        self.apply(update).to_url()
    }

    /// Render this state as a relative URL, parameters ordered `id`, `q`, `p`.
    pub fn to_url(&self) -> String {
        let mut qs = form_urlencoded::Serializer::new(String::new());
        if let Some(id) = &self.id {
            qs.append_pair("id", id);
        }
        if !self.query.is_empty() {
            qs.append_pair("q", &self.query);
        }
        if self.page > DEFAULT_PAGE {
            qs.append_pair("p", &self.page.to_string());
        }
        let qs = qs.finish();
        if qs.is_empty() {
            "/".to_string()
        } else {
            format!("/?{qs}")
        }
    }
}

fn parse_page(raw: &str) -> Option<u32> {
    match raw.trim().parse::<u32>() {
        Ok(page) => Some(page).filter(|p| *p >= 1),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u32::MAX),
        Err(_) => None,
    }
}

/// A partial navigation change. Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavUpdate {
    /// `Some(None)` clears the selection.
    id: Option<Option<String>>,
    page: Option<u32>,
    query: Option<String>,
}

impl NavUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(mut self, id: impl ToString) -> Self {
        self.id = Some(Some(id.to_string()));
        self
    }

    pub fn clear_selection(mut self) -> Self {
        self.id = Some(None);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}

/// Push-only navigation history, starting at `/`.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<String>,
}

impl Default for History {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History {
    pub fn new(start: &str) -> Self {
        Self {
            entries: vec![start.to_string()],
        }
    }

    pub fn push(&mut self, url: impl Into<String>) {
        self.entries.push(url.into());
    }

    /// Drop the current entry and return the one before it. The first entry
    /// is never dropped.
    pub fn back(&mut self) -> Option<&str> {
        if self.entries.len() < 2 {
            return None;
        }
        self.entries.pop();
        self.entries.last().map(String::as_str)
    }

    pub fn current(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or("/")
    }

    /// Whether `back` has an earlier entry to return to.
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }
}
