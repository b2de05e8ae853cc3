//! Client-side validation for meal drafts.
//!
//! Every rule runs independently so a single pass reports all failing
//! fields. A rating of exactly zero is reported as missing; this matches the
//! behavior users already see and is pending a product decision.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::types::{FoodFormInput, RestaurantStatus};

/// A form field that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodField {
    FoodName,
    FoodRating,
    FoodImage,
    RestaurantName,
    RestaurantLogo,
    RestaurantStatus,
    Price,
}

impl FoodField {
    pub fn as_str(self) -> &'static str {
        match self {
            FoodField::FoodName => "food_name",
            FoodField::FoodRating => "food_rating",
            FoodField::FoodImage => "food_image",
            FoodField::RestaurantName => "restaurant_name",
            FoodField::RestaurantLogo => "restaurant_logo",
            FoodField::RestaurantStatus => "restaurant_status",
            FoodField::Price => "price",
        }
    }
}

impl fmt::Display for FoodField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-level validation messages. Empty means the draft can be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FoodField, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FoodField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: FoodField) -> bool {
        self.0.contains_key(&field)
    }

    /// Failing fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (FoodField, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: FoodField, message: &'static str) {
        self.0.insert(field, message);
    }
}

pub const FOOD_NAME_REQUIRED: &str = "Food Name is required";
pub const FOOD_RATING_NOT_A_NUMBER: &str = "Food Rating must be a number";
pub const FOOD_RATING_OUT_OF_RANGE: &str = "Food Rating must be between 0 and 5";
pub const FOOD_IMAGE_REQUIRED: &str = "Food Image URL is required";
pub const RESTAURANT_NAME_REQUIRED: &str = "Restaurant Name is required";
pub const RESTAURANT_LOGO_REQUIRED: &str = "Restaurant Logo URL is required";
pub const RESTAURANT_STATUS_INVALID: &str = "Restaurant Status must be 'Open Now' or 'Closed'";
pub const PRICE_REQUIRED: &str = "Price is required";

/// Check a draft before create or update. Never fails; an empty result means
/// the draft is acceptable.
pub fn validate_food_form(input: &FoodFormInput) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if is_blank(&input.food_name) {
        errors.insert(FoodField::FoodName, FOOD_NAME_REQUIRED);
    }

    match input.food_rating {
        None => errors.insert(FoodField::FoodRating, FOOD_RATING_NOT_A_NUMBER),
        // zero is treated as missing
        Some(rating) if rating.is_nan() || rating == 0.0 => {
            errors.insert(FoodField::FoodRating, FOOD_RATING_NOT_A_NUMBER)
        }
        Some(rating) if !(0.0..=5.0).contains(&rating) => {
            errors.insert(FoodField::FoodRating, FOOD_RATING_OUT_OF_RANGE)
        }
        Some(_) => {}
    }

    if is_blank(&input.food_image) {
        errors.insert(FoodField::FoodImage, FOOD_IMAGE_REQUIRED);
    }

    if is_blank(&input.restaurant_name) {
        errors.insert(FoodField::RestaurantName, RESTAURANT_NAME_REQUIRED);
    }

    if is_blank(&input.restaurant_logo) {
        errors.insert(FoodField::RestaurantLogo, RESTAURANT_LOGO_REQUIRED);
    }

    if input.restaurant_status.parse::<RestaurantStatus>().is_err() {
        errors.insert(FoodField::RestaurantStatus, RESTAURANT_STATUS_INVALID);
    }

    if is_blank(&input.price) {
        errors.insert(FoodField::Price, PRICE_REQUIRED);
    }

    errors
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> FoodFormInput {
        FoodFormInput {
            food_name: "Egusi Soup".to_string(),
            food_rating: Some(4.0),
            food_image: "https://img.example/egusi.png".to_string(),
            restaurant_name: "Buka Hut".to_string(),
            restaurant_logo: "https://img.example/buka.png".to_string(),
            restaurant_status: "Open Now".to_string(),
            price: "9.99".to_string(),
        }
    }

    fn rating_error(rating: Option<f64>) -> Option<&'static str> {
        let input = FoodFormInput {
            food_rating: rating,
            ..valid()
        };
        validate_food_form(&input).get(FoodField::FoodRating)
    }

    #[test]
    fn valid_input_has_no_errors() {
        assert!(validate_food_form(&valid()).is_empty());
    }

    #[test]
    fn empty_name_reports_only_name() {
        let input = FoodFormInput {
            food_name: String::new(),
            ..valid()
        };
        let errors = validate_food_form(&input);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FoodField::FoodName), Some("Food Name is required"));
    }

    #[test]
    fn whitespace_only_name_is_blank() {
        let input = FoodFormInput {
            food_name: " \t\n".to_string(),
            ..valid()
        };
        assert!(validate_food_form(&input).contains(FoodField::FoodName));
    }

    #[test]
    fn missing_nan_and_zero_rating_are_not_a_number() {
        assert_eq!(rating_error(None), Some(FOOD_RATING_NOT_A_NUMBER));
        assert_eq!(rating_error(Some(f64::NAN)), Some(FOOD_RATING_NOT_A_NUMBER));
        assert_eq!(rating_error(Some(0.0)), Some(FOOD_RATING_NOT_A_NUMBER));
    }

    #[test]
    fn ratings_in_half_open_range_pass() {
        for rating in [0.1, 1.0, 2.5, 4.99, 5.0] {
            assert_eq!(rating_error(Some(rating)), None, "rating {rating}");
        }
    }

    #[test]
    fn ratings_outside_range_fail() {
        for rating in [-0.5, -3.0, 5.01, 10.0, f64::INFINITY] {
            assert_eq!(rating_error(Some(rating)), Some(FOOD_RATING_OUT_OF_RANGE), "rating {rating}");
        }
    }

    #[test]
    fn status_must_match_exactly() {
        for status in ["", "open now", "Open", "Closed ", "Busy"] {
            let input = FoodFormInput {
                restaurant_status: status.to_string(),
                ..valid()
            };
            assert_eq!(
                validate_food_form(&input).get(FoodField::RestaurantStatus),
                Some(RESTAURANT_STATUS_INVALID),
                "status {status:?}"
            );
        }
        let closed = FoodFormInput {
            restaurant_status: "Closed".to_string(),
            ..valid()
        };
        assert!(validate_food_form(&closed).is_empty());
    }

    #[test]
    fn empty_draft_reports_every_field() {
        let errors = validate_food_form(&FoodFormInput::default());
        let fields: Vec<FoodField> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(
            fields,
            vec![
                FoodField::FoodName,
                FoodField::FoodRating,
                FoodField::FoodImage,
                FoodField::RestaurantName,
                FoodField::RestaurantLogo,
                FoodField::RestaurantStatus,
                FoodField::Price,
            ]
        );
        assert_eq!(errors.get(FoodField::Price), Some(PRICE_REQUIRED));
        assert_eq!(errors.get(FoodField::RestaurantLogo), Some(RESTAURANT_LOGO_REQUIRED));
    }

    #[test]
    fn errors_serialize_as_field_map() {
        let input = FoodFormInput {
            price: "  ".to_string(),
            food_image: String::new(),
            ..valid()
        };
        let json = serde_json::to_value(validate_food_form(&input)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "food_image": "Food Image URL is required",
                "price": "Price is required",
            })
        );
    }
}
