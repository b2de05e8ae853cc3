//! Command-line flags for a meal draft.

use clap::Args;
use meals_core::{coerce_rating, FoodFormInput};

/// Fields of a meal. On `edit`, omitted flags keep the stored value.
#[derive(Args, Debug, Default, Clone)]
pub struct MealFields {
    /// Food name
    #[arg(long)]
    pub name: Option<String>,
    /// Rating from 0 to 5
    #[arg(long)]
    pub rating: Option<String>,
    /// Food image URL
    #[arg(long)]
    pub image: Option<String>,
    /// Restaurant name
    #[arg(long)]
    pub restaurant: Option<String>,
    /// Restaurant logo URL
    #[arg(long)]
    pub logo: Option<String>,
    /// Restaurant status: 'Open Now' or 'Closed'
    #[arg(long)]
    pub status: Option<String>,
    /// Price, free-form
    #[arg(long)]
    pub price: Option<String>,
}

impl MealFields {
    /// Overlay the given flags on `base`.
    pub fn apply(self, base: FoodFormInput) -> FoodFormInput {
        FoodFormInput {
            food_name: self.name.unwrap_or(base.food_name),
            food_rating: match self.rating {
                Some(text) => coerce_rating(&text),
                None => base.food_rating,
            },
            food_image: self.image.unwrap_or(base.food_image),
            restaurant_name: self.restaurant.unwrap_or(base.restaurant_name),
            restaurant_logo: self.logo.unwrap_or(base.restaurant_logo),
            restaurant_status: self.status.unwrap_or(base.restaurant_status),
            price: self.price.unwrap_or(base.price),
        }
    }
}
