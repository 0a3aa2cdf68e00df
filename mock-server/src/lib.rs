use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Page size used by the public API.
pub const PAGE_SIZE: usize = 20;

const API_BASE: &str = "https://rickandmortyapi.com/api";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub status: String,
    pub species: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: String,
    pub origin: Place,
    pub location: Place,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    pub count: usize,
    pub pages: usize,
    pub next: Option<String>,
    pub prev: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Page {
    pub info: Info,
    pub results: Vec<Character>,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub page: Option<usize>,
    pub name: Option<String>,
}

/// Read-only character catalog served by the router.
#[derive(Debug)]
pub struct Catalog {
    characters: Vec<Character>,
    page_size: usize,
}

pub type Db = Arc<Catalog>;

pub fn app() -> Router {
    app_with(fixtures(), PAGE_SIZE)
}

pub fn app_with(characters: Vec<Character>, page_size: usize) -> Router {
    let db: Db = Arc::new(Catalog {
        characters,
        page_size: page_size.max(1),
    });
    Router::new()
        .route("/character", get(list_characters))
        .route("/character/{id}", get(get_character))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn nothing_here() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "There is nothing here" })),
    )
}

fn page_link(page: usize, name: Option<&str>) -> String {
    let mut qs = form_urlencoded::Serializer::new(String::new());
    qs.append_pair("page", &page.to_string());
    if let Some(name) = name {
        qs.append_pair("name", name);
    }
    format!("{API_BASE}/character?{}", qs.finish())
}

async fn list_characters(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page>, (StatusCode, Json<Value>)> {
    let name = params.name.as_deref().filter(|n| !n.is_empty());
    let needle = name.map(str::to_lowercase);
    let matches: Vec<&Character> = db
        .characters
        .iter()
        .filter(|c| match &needle {
            Some(needle) => c.name.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .collect();

    let count = matches.len();
    let page = params.page.unwrap_or(1).max(1);
    let pages = count.div_ceil(db.page_size);
    if page > pages {
        tracing::debug!(page, pages, ?name, "list out of range");
        return Err(nothing_here());
    }

    let results = matches
        .into_iter()
        .skip((page - 1) * db.page_size)
        .take(db.page_size)
        .cloned()
        .collect();

    Ok(Json(Page {
        info: Info {
            count,
            pages,
            next: (page < pages).then(|| page_link(page + 1, name)),
            prev: (page > 1).then(|| page_link(page - 1, name)),
        },
        results,
    }))
}

async fn get_character(
    State(db): State<Db>,
    Path(id): Path<u32>,
) -> Result<Json<Character>, (StatusCode, Json<Value>)> {
    db.characters
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .map(Json)
        .ok_or((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Character not found" })),
        ))
}

fn place(name: &str, location: Option<u32>) -> Place {
    Place {
        name: name.to_string(),
        url: location
            .map(|id| format!("{API_BASE}/location/{id}"))
            .unwrap_or_default(),
    }
}

#[allow(clippy::too_many_arguments)]
fn character(
    id: u32,
    name: &str,
    status: &str,
    species: &str,
    kind: &str,
    gender: &str,
    origin: Place,
    location: Place,
) -> Character {
    Character {
        id,
        name: name.to_string(),
        status: status.to_string(),
        species: species.to_string(),
        kind: kind.to_string(),
        gender: gender.to_string(),
        origin,
        location,
        image: format!("{API_BASE}/character/avatar/{id}.jpeg"),
    }
}

/// The first characters of the public catalog.
pub fn fixtures() -> Vec<Character> {
    let c137 = || place("Earth (C-137)", Some(1));
    let replacement = || place("Earth (Replacement Dimension)", Some(20));
    let citadel = || place("Citadel of Ricks", Some(3));
    let unknown = || place("unknown", None);
    vec![
        character(1, "Rick Sanchez", "Alive", "Human", "", "Male", c137(), citadel()),
        character(2, "Morty Smith", "Alive", "Human", "", "Male", unknown(), citadel()),
        character(3, "Summer Smith", "Alive", "Human", "", "Female", replacement(), replacement()),
        character(4, "Beth Smith", "Alive", "Human", "", "Female", replacement(), replacement()),
        character(5, "Jerry Smith", "Alive", "Human", "", "Male", replacement(), replacement()),
        character(
            6,
            "Abadango Cluster Princess",
            "Alive",
            "Alien",
            "",
            "Female",
            place("Abadango", Some(2)),
            place("Abadango", Some(2)),
        ),
        character(
            7,
            "Abradolf Lincler",
            "unknown",
            "Human",
            "Genetic experiment",
            "Male",
            replacement(),
            place("Testicle Monster Dimension", Some(21)),
        ),
        character(8, "Adjudicator Rick", "Dead", "Human", "", "Male", unknown(), citadel()),
        character(9, "Agency Director", "Dead", "Human", "", "Male", replacement(), replacement()),
        character(
            10,
            "Alan Rails",
            "Dead",
            "Human",
            "Superhuman (Ghost trains summoner)",
            "Male",
            unknown(),
            place("Worldender's lair", Some(4)),
        ),
        character(11, "Albert Einstein", "Dead", "Human", "", "Male", c137(), replacement()),
        character(12, "Alexander", "Dead", "Human", "", "Male", c137(), place("Anatomy Park", Some(5))),
    ]
}
