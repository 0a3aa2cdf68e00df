//! Stateless HTTP request builder and response parser for the character API.
//!
//! # Design
//! `CharacterClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip.
//!
//! The two parse methods differ on purpose: a failed list request collapses
//! into an empty page, while a failed detail request is an error.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Character, CharacterPage};

/// Base URL of the public API.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Synchronous, stateless client for the character API.
#[derive(Debug, Clone)]
pub struct CharacterClient {
    base_url: String,
}

impl Default for CharacterClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl CharacterClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /character?page=N&name=Q`. `name` is sent only when non-empty.
    pub fn build_list_characters(&self, page: u32, name: &str) -> HttpRequest {
        let mut qs = form_urlencoded::Serializer::new(String::new());
        qs.append_pair("page", &page.to_string());
        if !name.is_empty() {
            qs.append_pair("name", name);
        }
        HttpRequest::get(format!("{}/character?{}", self.base_url, qs.finish()))
    }

    pub fn build_get_character(&self, id: u32) -> HttpRequest {
        HttpRequest::get(format!("{}/character/{id}", self.base_url))
    }

    /// Any non-200 status yields an empty, zero-page result.
    pub fn parse_list_characters(&self, response: HttpResponse) -> Result<CharacterPage, ApiError> {
        if response.status != 200 {
            tracing::debug!(status = response.status, "list request failed, using empty page");
            return Ok(CharacterPage::empty());
        }
        decode(&response.body)
    }

    pub fn parse_get_character(&self, response: HttpResponse) -> Result<Character, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
