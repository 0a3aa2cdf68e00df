//! The page controller: URL in, fetch tickets out, screens on demand.
//!
//! # Design
//! `Controller` owns every piece of client state explicitly. User actions
//! never mutate the displayed state directly; they produce a URL through
//! `NavState::make_url`, which the host pushes back in via `push`. A push
//! whose parameters match the current ones does not refetch.

use crate::client::CharacterClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::loader::{Body, FetchTicket, Loader, Screen};
use crate::nav::{History, NavState, NavUpdate};
use crate::store::AppStore;

#[derive(Debug, Clone)]
pub struct Controller {
    history: History,
    nav: NavState,
    synced: bool,
    store: AppStore,
    loader: Loader,
}

impl Controller {
    pub fn new(client: CharacterClient) -> Self {
        Self {
            history: History::default(),
            nav: NavState::default(),
            synced: false,
            store: AppStore::new(),
            loader: Loader::new(client),
        }
    }

    /// Record `url` in the history and navigate to it.
    pub fn push(&mut self, url: &str) -> Option<FetchTicket> {
        if self.history.current() != url {
            self.history.push(url);
        }
        self.navigate(url)
    }

    /// Return to the previous history entry.
    pub fn back(&mut self) -> Option<FetchTicket> {
        let url = self.history.back()?.to_string();
        self.navigate(&url)
    }

    /// Read the parameters of `url` and start a fetch if they changed.
    ///
    /// The search box is overwritten only when `q` itself changed, so text
    /// typed but not yet submitted survives opening and closing a detail.
    pub fn navigate(&mut self, url: &str) -> Option<FetchTicket> {
        let next = NavState::from_url(url);
        if self.synced && next == self.nav {
            tracing::trace!(url, "navigation unchanged");
            return None;
        }
        if !self.synced || next.query != self.nav.query {
            self.store.set_query(next.query.clone());
        }
        self.nav = next;
        self.synced = true;
        tracing::info!(url, "navigating");
        Some(self.loader.begin(&self.nav))
    }

    pub fn request(&self, ticket: &FetchTicket) -> Result<HttpRequest, ApiError> {
        self.loader.request(ticket)
    }

    pub fn complete(&mut self, ticket: FetchTicket, outcome: Result<HttpResponse, ApiError>) -> bool {
        self.loader.complete(ticket, outcome)
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.loader.is_current(ticket)
    }

    /// Edit the search box without submitting it.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.store.set_query(query);
    }

    /// Submit the search box: back to the list, first page.
    pub fn search_url(&self) -> String {
        self.nav.make_url(
            &NavUpdate::new()
                .clear_selection()
                .page(1)
                .query(self.store.query().trim()),
        )
    }

    pub fn open_url(&self, id: u32) -> String {
        self.nav.make_url(&NavUpdate::new().select(id))
    }

    pub fn close_url(&self) -> String {
        self.nav.make_url(&NavUpdate::new().clear_selection())
    }

    pub fn prev_page_url(&self) -> Option<String> {
        if self.nav.is_detail() || self.nav.page <= 1 {
            return None;
        }
        Some(self.nav.make_url(&NavUpdate::new().page(self.nav.page - 1)))
    }

    /// `None` unless the shown list reports a next page. The last
    /// representable page has no successor.
    pub fn next_page_url(&self) -> Option<String> {
        match self.screen().body {
            Body::List(page) if page.has_next() => {
                let next = self.nav.page.checked_add(1)?;
                Some(self.nav.make_url(&NavUpdate::new().page(next)))
            }
            _ => None,
        }
    }

    /// Toggle the character shown in detail mode. `None` when no detail is
    /// displayed.
    pub fn toggle_favorite(&mut self) -> Option<bool> {
        match self.loader.screen(&self.nav).body {
            Body::Detail(character) => Some(self.store.toggle_favorite(character)),
            _ => None,
        }
    }

    pub fn screen(&self) -> Screen<'_> {
        self.loader.screen(&self.nav)
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn store(&self) -> &AppStore {
        &self.store
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::NOT_FOUND_MESSAGE;
    use crate::testutil::{character, character_json, page_json};

    fn controller() -> Controller {
        Controller::new(CharacterClient::new("http://api.test"))
    }

    fn ok(body: String) -> Result<HttpResponse, ApiError> {
        Ok(HttpResponse::new(200, body))
    }

    /// Push `url` and answer its fetch with `outcome`.
    fn visit(c: &mut Controller, url: &str, outcome: Result<HttpResponse, ApiError>) {
        let ticket = c.push(url).expect("navigation should fetch");
        assert!(c.complete(ticket, outcome));
    }

    #[test]
    fn search_builds_query_url_and_fetches_first_page() {
        let mut c = controller();
        visit(&mut c, "/", ok(page_json(&[character(1, "Rick Sanchez")], 3)));

        c.set_query("  Rick ");
        let url = c.search_url();
        assert_eq!(url, "/?q=Rick");

        let ticket = c.push(&url).unwrap();
        let req = c.request(&ticket).unwrap();
        assert_eq!(req.path, "http://api.test/character?page=1&name=Rick");
        assert_eq!(c.store().query(), "Rick");
    }

    #[test]
    fn search_from_detail_resets_selection_and_page() {
        let mut c = controller();
        c.push("/?id=3&q=Rick&p=4");
        c.set_query("Morty");
        assert_eq!(c.search_url(), "/?q=Morty");
    }

    #[test]
    fn failed_detail_shows_error_only() {
        let mut c = controller();
        visit(&mut c, "/", ok(page_json(&[character(2, "Morty Smith")], 1)));
        let url = c.open_url(2);
        assert_eq!(url, "/?id=2");
        visit(&mut c, &url, Ok(HttpResponse::new(404, "")));

        let screen = c.screen();
        assert_eq!(screen.error, Some(NOT_FOUND_MESSAGE));
        assert_eq!(screen.body, Body::Empty);
    }

    #[test]
    fn toggling_detail_favorite_twice_leaves_store_empty() {
        let mut c = controller();
        visit(&mut c, "/?id=5", ok(character_json(&character(5, "Jerry Smith"))));
        assert_eq!(c.toggle_favorite(), Some(true));
        assert!(c.store().is_favorite(5));
        assert_eq!(c.toggle_favorite(), Some(false));
        assert!(c.store().is_empty());
    }

    #[test]
    fn toggle_without_detail_is_noop() {
        let mut c = controller();
        visit(&mut c, "/", ok(page_json(&[character(1, "Rick Sanchez")], 1)));
        assert_eq!(c.toggle_favorite(), None);
        assert!(c.store().is_empty());
    }

    #[test]
    fn paging_urls_respect_bounds() {
        let mut c = controller();
        visit(&mut c, "/?q=Smith", ok(page_json(&[character(2, "Morty Smith")], 3)));
        assert_eq!(c.prev_page_url(), None);
        assert_eq!(c.next_page_url().as_deref(), Some("/?q=Smith&p=2"));

        visit(&mut c, "/?q=Smith&p=2", ok(page_json(&[character(3, "Summer Smith")], 1)));
        assert_eq!(c.prev_page_url().as_deref(), Some("/?q=Smith"));
        assert_eq!(c.next_page_url(), None);
    }

    #[test]
    fn last_representable_page_has_no_next() {
        let mut c = controller();
        let url = format!("/?p={}", u32::MAX);
        visit(&mut c, &url, ok(page_json(&[character(1, "Rick Sanchez")], 3)));
        assert_eq!(c.nav().page, u32::MAX);
        assert_eq!(c.next_page_url(), None);
        assert_eq!(
            c.prev_page_url(),
            Some(format!("/?p={}", u32::MAX - 1))
        );
    }

    #[test]
    fn no_next_page_while_loading() {
        let mut c = controller();
        visit(&mut c, "/", ok(page_json(&[character(1, "Rick Sanchez")], 3)));
        c.push("/?p=2");
        assert_eq!(c.next_page_url(), None);
    }

    #[test]
    fn close_keeps_query_and_page() {
        let mut c = controller();
        c.push("/?id=1&q=Rick&p=2");
        assert_eq!(c.close_url(), "/?q=Rick&p=2");
    }

    #[test]
    fn unchanged_navigation_does_not_refetch() {
        let mut c = controller();
        assert!(c.push("/?q=Rick").is_some());
        assert!(c.push("/?q=Rick").is_none());
        assert!(c.push("?p=1&q=Rick").is_none());
        assert!(c.push("/?q=Rick&p=2").is_some());
    }

    #[test]
    fn typed_query_survives_detail_round_trip() {
        let mut c = controller();
        c.push("/?q=Rick");
        c.set_query("Mort");
        c.push(&c.open_url(1));
        c.push(&c.close_url());
        assert_eq!(c.store().query(), "Mort");
    }

    #[test]
    fn url_query_overwrites_search_box_when_it_changes() {
        let mut c = controller();
        c.push("/?q=Rick");
        c.set_query("typed");
        c.push("/?q=Beth");
        assert_eq!(c.store().query(), "Beth");
    }

    #[test]
    fn back_returns_to_previous_page() {
        let mut c = controller();
        c.push("/");
        c.push("/?q=Rick");
        c.push("/?id=1&q=Rick");
        let ticket = c.back().unwrap();
        assert_eq!(c.nav(), &NavState::from_url("/?q=Rick"));
        assert!(c.is_current(&ticket));
        assert!(c.back().is_some());
        assert_eq!(c.nav(), &NavState::default());
        assert!(c.back().is_none());
    }

    #[test]
    fn only_fresh_response_is_rendered_after_quick_navigation() {
        let mut c = controller();
        let stale = c.push("/?q=Rick").unwrap();
        let fresh = c.push("/?q=Morty").unwrap();
        assert!(!c.is_current(&stale));

        assert!(c.complete(fresh, ok(page_json(&[character(2, "Morty Smith")], 1))));
        assert!(!c.complete(stale, ok(page_json(&[character(1, "Rick Sanchez")], 1))));

        match c.screen().body {
            Body::List(page) => {
                assert_eq!(page.results.len(), 1);
                assert_eq!(page.results[0].id, 2);
            }
            other => panic!("expected list, got {other:?}"),
        }
    }
}
