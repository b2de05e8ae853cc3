//! Data-access and validation core for the meals catalog.
//!
//! # Overview
//! Talks to a remote REST store holding one collection of food records
//! (`/Food`). Offers list, search, get, create, update and delete, a form
//! validator that runs before every submission, and advisory shape guards
//! for untyped payloads.
//!
//! # Design
//! - `FoodClient` is stateless and I/O-free: `build_*` produces an
//!   `HttpRequest`, `parse_*` consumes an `HttpResponse`.
//! - `FoodApi` executes those requests with reqwest, one round trip per call,
//!   and turns every failure into the operation's `FoodError`.
//! - `validate_food_form` is pure and returns per-field messages.
//! - `MealCatalog` is caller-owned listing state refreshed by re-fetching.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod catalog;
pub mod client;
pub mod error;
pub mod guards;
pub mod http;
pub mod types;
pub mod validation;

pub use api::FoodApi;
pub use catalog::{MealCatalog, SaveOutcome, SaveTarget};
pub use client::{FoodClient, DEFAULT_BASE_URL};
pub use error::{error_message, ApiError, FoodError, Operation};
pub use guards::{is_food, is_food_array};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{coerce_rating, FoodFormInput, FoodRecord, ParseStatusError, RestaurantStatus};
pub use validation::{validate_food_form, FieldErrors, FoodField};
