//! Text rendering of a `Screen`.

use std::fmt::Write;

use rickdex_core::{AppStore, Body, Character, CharacterPage, NavState, Screen};

const TITLE: &str = "Rick & Morty Cards";

fn star(store: &AppStore, id: u32) -> &'static str {
    if store.is_favorite(id) {
        "★"
    } else {
        "☆"
    }
}

/// Draw the whole page: title, search box, status lines, then detail or
/// list.
pub fn screen(screen: &Screen<'_>, store: &AppStore, nav: &NavState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "Search: [{}]", store.query());
    let _ = writeln!(out);

    if screen.loading {
        let _ = writeln!(out, "Loading...");
    }
    if let Some(error) = screen.error {
        let _ = writeln!(out, "Error: {error}");
    }

    match screen.body {
        Body::Detail(character) => out.push_str(&detail(character, store)),
        Body::List(page) => out.push_str(&list(page, store, nav.page)),
        Body::Empty => {}
    }
    out
}

pub fn detail(c: &Character, store: &AppStore) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}  (#{})", star(store, c.id), c.name, c.id);
    let _ = writeln!(out, "  {} • {}", c.status, c.species);
    if !c.kind.is_empty() {
        let _ = writeln!(out, "  Type: {}", c.kind);
    }
    let _ = writeln!(out, "  Gender: {}", c.gender);
    let _ = writeln!(out, "  Origin: {}", c.origin.name);
    let _ = writeln!(out, "  Location: {}", c.location.name);
    let _ = writeln!(out, "  Image: {}", c.image);
    let action = if store.is_favorite(c.id) {
        "remove favorite"
    } else {
        "add favorite"
    };
    let _ = writeln!(out);
    let _ = writeln!(out, "[fav] {action}   [close] back to list");
    out
}

pub fn list(page: &CharacterPage, store: &AppStore, current: u32) -> String {
    let mut out = String::new();
    if page.results.is_empty() {
        let _ = writeln!(out, "No characters found.");
    }
    for c in &page.results {
        let _ = writeln!(
            out,
            "{} [{:>4}] {}  ({} • {})",
            star(store, c.id),
            c.id,
            c.name,
            c.status,
            c.species
        );
    }
    let _ = writeln!(out);

    let prev = if current > 1 { "[prev]" } else { "      " };
    let next = if page.has_next() { "[next]" } else { "      " };
    let _ = writeln!(out, "{prev}  Page {current} of {}  {next}", page.info.pages);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rickdex_core::{PageInfo, Place, Status, NOT_FOUND_MESSAGE};

    fn morty() -> Character {
        Character {
            id: 2,
            name: "Morty Smith".to_string(),
            status: Status::Alive,
            species: "Human".to_string(),
            kind: String::new(),
            gender: "Male".to_string(),
            origin: Place {
                name: "unknown".to_string(),
                url: String::new(),
            },
            location: Place {
                name: "Citadel of Ricks".to_string(),
                url: String::new(),
            },
            image: "https://rickandmortyapi.com/api/character/avatar/2.jpeg".to_string(),
        }
    }

    fn page(next: bool) -> CharacterPage {
        CharacterPage {
            info: PageInfo {
                count: 1,
                pages: 3,
                next: next.then(|| "x".to_string()),
                prev: None,
            },
            results: vec![morty()],
        }
    }

    #[test]
    fn detail_shows_attributes_and_favorite_action() {
        let mut store = AppStore::new();
        let text = detail(&morty(), &store);
        assert!(text.contains("☆ Morty Smith"));
        assert!(text.contains("Alive • Human"));
        assert!(text.contains("Location: Citadel of Ricks"));
        assert!(!text.contains("Type:"));
        assert!(text.contains("add favorite"));

        store.toggle_favorite(&morty());
        let text = detail(&morty(), &store);
        assert!(text.contains("★ Morty Smith"));
        assert!(text.contains("remove favorite"));
    }

    #[test]
    fn list_shows_pager() {
        let store = AppStore::new();
        let text = list(&page(true), &store, 1);
        assert!(text.contains("[   2] Morty Smith  (Alive • Human)"));
        assert!(text.contains("Page 1 of 3  [next]"));
        assert!(!text.contains("[prev]"));

        let text = list(&page(false), &store, 3);
        assert!(text.contains("[prev]  Page 3 of 3"));
        assert!(!text.contains("[next]"));
    }

    #[test]
    fn empty_list_says_so() {
        let text = list(&CharacterPage::empty(), &AppStore::new(), 1);
        assert!(text.contains("No characters found."));
        assert!(text.contains("Page 1 of 0"));
    }

    #[test]
    fn error_screen_has_no_body() {
        let nav = NavState::from_url("/?id=2");
        let s = Screen {
            loading: false,
            error: Some(NOT_FOUND_MESSAGE),
            body: Body::Empty,
        };
        let text = screen(&s, &AppStore::new(), &nav);
        assert!(text.contains("Error: character not found"));
        assert!(!text.contains("Page"));
        assert!(!text.contains("Origin"));
    }

    #[test]
    fn loading_screen_shows_search_box() {
        let mut store = AppStore::new();
        store.set_query("Rick");
        let s = Screen {
            loading: true,
            error: None,
            body: Body::Empty,
        };
        let text = screen(&s, &store, &NavState::default());
        assert!(text.contains("Search: [Rick]"));
        assert!(text.contains("Loading..."));
    }
}
