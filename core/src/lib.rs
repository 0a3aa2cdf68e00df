//! State core for a character browser over the Rick and Morty API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). On top of the client sit
//! the pieces a browser front-end needs: URL-derived navigation state, a
//! URL builder, a favorites store and a generation-counted loader that
//! discards superseded responses.
//!
//! # Design
//! - `CharacterClient` is stateless; it holds only `base_url`.
//! - The URL is the single source of truth for what is displayed.
//!   `NavState` is parsed from it; user actions build the next URL.
//! - `Controller` owns all client state explicitly. There is no global
//!   store.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod loader;
pub mod nav;
pub mod store;
pub mod types;

#[cfg(test)]
mod testutil;

pub use client::{CharacterClient, DEFAULT_BASE_URL};
pub use controller::Controller;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use loader::{Body, FetchPlan, FetchTicket, Loader, Screen, NOT_FOUND_MESSAGE};
pub use nav::{History, NavState, NavUpdate, DEFAULT_PAGE};
pub use store::AppStore;
pub use types::{Character, CharacterPage, PageInfo, Place, Status};
