//! Domain DTOs for the character API.
//!
//! # Design
//! These types mirror the remote API's schema but are defined independently
//! from the mock-server crate. Fields the browser never shows (`episode`,
//! `url`, `created`) are ignored on decode. Integration tests catch any
//! schema drift between the two crates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Life status as reported by the API. The wire form of `Unknown` is
/// lowercase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Status {
    Alive,
    Dead,
    #[serde(rename = "unknown", alias = "Unknown")]
    Unknown,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Alive => "Alive",
            Status::Dead => "Dead",
            Status::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// A named reference to an origin or location resource. `url` is empty when
/// the API has nothing to link to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Place {
    pub name: String,
    pub url: String,
}

/// A single character snapshot as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub status: Status,
    pub species: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: String,
    pub origin: Place,
    pub location: Place,
    pub image: String,
}

/// Paging metadata attached to every list response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageInfo {
    #[serde(default)]
    pub count: u32,
    pub pages: u32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// One page of list results.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub results: Vec<Character>,
}

impl CharacterPage {
    /// The zero-page result a failed list request collapses into.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_next(&self) -> bool {
        self.info.next.is_some()
    }
}
