//! Fixture builders shared by unit tests.

use crate::types::{Character, CharacterPage, PageInfo, Place, Status};

pub fn character(id: u32, name: &str) -> Character {
    Character {
        id,
        name: name.to_string(),
        status: Status::Alive,
        species: "Human".to_string(),
        kind: String::new(),
        gender: "Male".to_string(),
        origin: Place {
            name: "Earth (C-137)".to_string(),
            url: String::new(),
        },
        location: Place {
            name: "Citadel of Ricks".to_string(),
            url: String::new(),
        },
        image: format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
    }
}

pub fn character_json(character: &Character) -> String {
    serde_json::to_string(character).unwrap()
}

/// A list body with `pages` total pages; `next` is set when there is more
/// than one page.
pub fn page_json(results: &[Character], pages: u32) -> String {
    let page = CharacterPage {
        info: PageInfo {
            count: results.len() as u32,
            pages,
            next: (pages > 1).then(|| "/character?page=2".to_string()),
            prev: None,
        },
        results: results.to_vec(),
    };
    serde_json::to_string(&page).unwrap()
}
