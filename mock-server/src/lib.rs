//! In-memory stand-in for the hosted `/Food` collection resource.
//!
//! Ids are sequential decimal strings assigned on create. `?name=` filters by
//! case-insensitive substring. PUT replaces every mutable field and keeps
//! `id` and `createdAt`. DELETE answers 200 with the removed record. Unknown
//! ids answer 404 with the JSON string `"Not found"`.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: String,
    pub food_name: String,
    pub food_rating: f64,
    pub food_image: String,
    pub restaurant_name: String,
    pub restaurant_logo: String,
    pub restaurant_status: String,
    pub price: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Deserialize)]
pub struct FoodInput {
    pub food_name: String,
    pub food_rating: f64,
    pub food_image: String,
    pub restaurant_name: String,
    pub restaurant_logo: String,
    pub restaurant_status: String,
    pub price: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: u64,
    foods: BTreeMap<u64, Food>,
}

impl Store {
    fn insert(&mut self, input: FoodInput) -> Food {
        self.next_id += 1;
        let food = Food {
            id: self.next_id.to_string(),
            food_name: input.food_name,
            food_rating: input.food_rating,
            food_image: input.food_image,
            restaurant_name: input.restaurant_name,
            restaurant_logo: input.restaurant_logo,
            restaurant_status: input.restaurant_status,
            price: input.price,
            created_at: input.created_at,
        };
        self.foods.insert(self.next_id, food.clone());
        food
    }
}

pub type Db = Arc<RwLock<Store>>;

type NotFound = (StatusCode, Json<&'static str>);

fn not_found() -> NotFound {
    (StatusCode::NOT_FOUND, Json("Not found"))
}

/// Ids that are not decimal numbers can never exist.
fn key(id: &str) -> Result<u64, NotFound> {
    id.parse().map_err(|_| not_found())
}

pub fn app() -> Router {
    app_with(Db::default())
}

/// Router over an existing store, so callers can seed or inspect it.
pub fn app_with(db: Db) -> Router {
    Router::new()
        .route("/Food", get(list_foods).post(create_food))
        .route("/Food/{id}", get(get_food).put(update_food).delete(delete_food))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_foods(State(db): State<Db>, Query(params): Query<SearchParams>) -> Json<Vec<Food>> {
    let store = db.read().await;
    let needle = params.name.map(|name| name.to_lowercase());
    let foods = store
        .foods
        .values()
        .filter(|food| match &needle {
            Some(needle) => food.food_name.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .cloned()
        .collect();
    Json(foods)
}

async fn create_food(State(db): State<Db>, Json(input): Json<FoodInput>) -> (StatusCode, Json<Food>) {
    let food = db.write().await.insert(input);
    log::debug!("created food {}", food.id);
    (StatusCode::CREATED, Json(food))
}

async fn get_food(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Food>, NotFound> {
    let key = key(&id)?;
    let store = db.read().await;
    store.foods.get(&key).cloned().map(Json).ok_or_else(not_found)
}

async fn update_food(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<FoodInput>,
) -> Result<Json<Food>, NotFound> {
    let key = key(&id)?;
    let mut store = db.write().await;
    let food = store.foods.get_mut(&key).ok_or_else(not_found)?;
    food.food_name = input.food_name;
    food.food_rating = input.food_rating;
    food.food_image = input.food_image;
    food.restaurant_name = input.restaurant_name;
    food.restaurant_logo = input.restaurant_logo;
    food.restaurant_status = input.restaurant_status;
    food.price = input.price;
    Ok(Json(food.clone()))
}

async fn delete_food(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Food>, NotFound> {
    let key = key(&id)?;
    let removed = db.write().await.foods.remove(&key).ok_or_else(not_found)?;
    log::debug!("deleted food {}", removed.id);
    Ok(Json(removed))
}
