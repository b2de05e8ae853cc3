//! Caller-owned listing state.
//!
//! `MealCatalog` holds the meals currently shown and the active search query.
//! It never caches on behalf of `FoodApi`: after every successful mutation it
//! re-fetches the whole collection, and a failed mutation leaves the shown
//! meals untouched.

use crate::api::FoodApi;
use crate::error::FoodError;
use crate::types::{FoodFormInput, FoodRecord};
use crate::validation::{validate_food_form, FieldErrors};

/// Where a submitted draft goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    New,
    Existing(String),
}

/// Result of submitting a draft that reached the validator.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// The store accepted the draft and returned this record.
    Saved(FoodRecord),
    /// The draft failed validation; nothing was sent.
    Invalid(FieldErrors),
}

#[derive(Debug, Clone, Default)]
pub struct MealCatalog {
    meals: Vec<FoodRecord>,
    query: String,
}

impl MealCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn meals(&self) -> &[FoodRecord] {
        &self.meals
    }

    /// Active search query; empty when showing the full collection.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub async fn load(&mut self, api: &FoodApi) -> Result<(), FoodError> {
        self.meals = api.list_all().await?;
        self.query.clear();
        Ok(())
    }

    /// A blank query never reaches the store; it reloads the full list.
    pub async fn search(&mut self, api: &FoodApi, query: &str) -> Result<(), FoodError> {
        if query.trim().is_empty() {
            return self.load(api).await;
        }
        self.meals = api.search(query).await?;
        self.query = query.to_string();
        Ok(())
    }

    pub async fn save(
        &mut self,
        api: &FoodApi,
        target: &SaveTarget,
        input: &FoodFormInput,
    ) -> Result<SaveOutcome, FoodError> {
        let errors = validate_food_form(input);
        if !errors.is_empty() {
            return Ok(SaveOutcome::Invalid(errors));
        }

        let saved = match target {
            SaveTarget::New => api.create(input).await?,
            SaveTarget::Existing(id) => api.update(id, input).await?,
        };
        self.refresh(api).await;
        Ok(SaveOutcome::Saved(saved))
    }

    pub async fn remove(&mut self, api: &FoodApi, id: &str) -> Result<(), FoodError> {
        api.delete(id).await?;
        self.refresh(api).await;
        Ok(())
    }

    /// Reload after a mutation. The mutation already succeeded, so a failed
    /// reload is logged and the previous meals stay in place.
    async fn refresh(&mut self, api: &FoodApi) {
        if let Err(e) = self.load(api).await {
            log::warn!("reload after mutation failed: {e}");
        }
    }
}
