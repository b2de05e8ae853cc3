//! Domain DTOs for the meals catalog.
//!
//! # Design
//! `FoodRecord` is what the store hands back and is strongly typed.
//! `FoodFormInput` is the editable draft: its rating may be missing or NaN and
//! its status is raw text, so every invalid draft a user can type is
//! representable and left for the validator to reject. Drafts never carry an
//! identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether a restaurant currently takes orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RestaurantStatus {
    #[serde(rename = "Open Now")]
    OpenNow,
    #[serde(rename = "Closed")]
    Closed,
}

impl RestaurantStatus {
    pub const ALL: [RestaurantStatus; 2] = [RestaurantStatus::OpenNow, RestaurantStatus::Closed];

    pub fn as_str(self) -> &'static str {
        match self {
            RestaurantStatus::OpenNow => "Open Now",
            RestaurantStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for RestaurantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown restaurant status '{0}'")]
pub struct ParseStatusError(pub String);

impl FromStr for RestaurantStatus {
    type Err = ParseStatusError;

    /// Exact match against the wire text; no trimming, no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RestaurantStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// A food item as confirmed by the remote store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub id: String,
    pub food_name: String,
    pub food_rating: f64,
    pub food_image: String,
    pub restaurant_name: String,
    pub restaurant_logo: String,
    pub restaurant_status: RestaurantStatus,
    pub price: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl FoodRecord {
    /// Draft prefilled with this record's mutable fields, for editing.
    pub fn to_form_input(&self) -> FoodFormInput {
        FoodFormInput {
            food_name: self.food_name.clone(),
            food_rating: Some(self.food_rating),
            food_image: self.food_image.clone(),
            restaurant_name: self.restaurant_name.clone(),
            restaurant_logo: self.restaurant_logo.clone(),
            restaurant_status: self.restaurant_status.to_string(),
            price: self.price.clone(),
        }
    }
}

/// Client-side draft used for both create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodFormInput {
    pub food_name: String,
    pub food_rating: Option<f64>,
    pub food_image: String,
    pub restaurant_name: String,
    pub restaurant_logo: String,
    pub restaurant_status: String,
    pub price: String,
}

/// Numeric coercion for a rating typed as text.
///
/// Blank text means no rating; anything that does not parse as a number
/// becomes NaN so the validator reports it as "not a number".
pub fn coerce_rating(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(text.parse().unwrap_or(f64::NAN))
}

/// JSON body sent on create and update. `created_at` is only set on create.
#[derive(Debug, Serialize)]
pub(crate) struct FoodPayload<'a> {
    pub food_name: &'a str,
    pub food_rating: Option<f64>,
    pub food_image: &'a str,
    pub restaurant_name: &'a str,
    pub restaurant_logo: &'a str,
    pub restaurant_status: &'a str,
    pub price: &'a str,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl<'a> FoodPayload<'a> {
    pub(crate) fn from_input(input: &'a FoodFormInput, created_at: Option<String>) -> Self {
        Self {
            food_name: &input.food_name,
            food_rating: input.food_rating,
            food_image: &input.food_image,
            restaurant_name: &input.restaurant_name,
            restaurant_logo: &input.restaurant_logo,
            restaurant_status: &input.restaurant_status,
            price: &input.price,
            created_at,
        }
    }
}
