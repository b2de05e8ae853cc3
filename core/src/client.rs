//! Stateless HTTP request builder and response parser for the meals API.
//!
//! # Design
//! `FoodClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! `FoodApi` performs the round trip in between; tests drive both halves
//! directly. Any 2xx status is success and every other status is a failure,
//! with no special case for 404.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{encode_uri_component, HttpMethod, HttpRequest, HttpResponse};
use crate::types::{FoodFormInput, FoodPayload, FoodRecord};

/// Hosted store the front end talks to by default.
pub const DEFAULT_BASE_URL: &str = "https://6852821e0594059b23cdd834.mockapi.io";

const COLLECTION: &str = "Food";

/// Synchronous, stateless client for the meals collection resource.
#[derive(Debug, Clone)]
pub struct FoodClient {
    base_url: String,
}

impl Default for FoodClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl FoodClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_all(&self) -> HttpRequest {
        request(HttpMethod::Get, self.collection_url(), None)
    }

    /// The query is trimmed and percent-encoded. Redirecting a blank query to
    /// `build_list_all` is up to the caller.
    pub fn build_search(&self, query: &str) -> HttpRequest {
        let path = format!(
            "{}?name={}",
            self.collection_url(),
            encode_uri_component(query.trim())
        );
        request(HttpMethod::Get, path, None)
    }

    pub fn build_get_by_id(&self, id: &str) -> HttpRequest {
        request(HttpMethod::Get, self.item_url(id), None)
    }

    /// `created_at` is stamped into the payload as ISO-8601 UTC with
    /// millisecond precision.
    pub fn build_create(
        &self,
        input: &FoodFormInput,
        created_at: DateTime<Utc>,
    ) -> Result<HttpRequest, ApiError> {
        let created_at = created_at.to_rfc3339_opts(SecondsFormat::Millis, true);
        let body = to_json(&FoodPayload::from_input(input, Some(created_at)))?;
        Ok(request(HttpMethod::Post, self.collection_url(), Some(body)))
    }

    /// The identifier only appears in the address, never in the payload.
    pub fn build_update(&self, id: &str, input: &FoodFormInput) -> Result<HttpRequest, ApiError> {
        let body = to_json(&FoodPayload::from_input(input, None))?;
        Ok(request(HttpMethod::Put, self.item_url(id), Some(body)))
    }

    pub fn build_delete(&self, id: &str) -> HttpRequest {
        request(HttpMethod::Delete, self.item_url(id), None)
    }

    pub fn parse_list_all(&self, response: HttpResponse) -> Result<Vec<FoodRecord>, ApiError> {
        decode(response)
    }

    pub fn parse_search(&self, response: HttpResponse) -> Result<Vec<FoodRecord>, ApiError> {
        decode(response)
    }

    pub fn parse_get_by_id(&self, response: HttpResponse) -> Result<FoodRecord, ApiError> {
        decode(response)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<FoodRecord, ApiError> {
        decode(response)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<FoodRecord, ApiError> {
        decode(response)
    }

    /// The store echoes the removed record; it is not needed and not parsed.
    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn collection_url(&self) -> String {
        format!("{}/{COLLECTION}", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), encode_uri_component(id))
    }
}

fn request(method: HttpMethod, path: String, body: Option<String>) -> HttpRequest {
    HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body,
    }
}

fn to_json(payload: &FoodPayload<'_>) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
