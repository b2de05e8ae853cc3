use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Food};
use tower::ServiceExt;

const JOLLOF: &str = r#"{"food_name":"Jollof Rice","food_rating":4.5,"food_image":"https://img.example/jollof.png","restaurant_name":"Mama Put","restaurant_logo":"https://img.example/mamaput.png","restaurant_status":"Open Now","price":"12.50","createdAt":"2024-05-01T12:00:00.000Z"}"#;
const SUYA: &str = r#"{"food_name":"Beef Suya","food_rating":4,"food_image":"https://img.example/suya.png","restaurant_name":"Mallam's","restaurant_logo":"https://img.example/mallam.png","restaurant_status":"Closed","price":"8.00"}"#;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_foods_empty() {
    let resp = app().oneshot(empty_request("GET", "/Food")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let foods: Vec<Food> = body_json(resp).await;
    assert!(foods.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_food_returns_201_with_id() {
    let resp = app()
        .oneshot(json_request("POST", "/Food", JOLLOF))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let food: Food = body_json(resp).await;
    assert_eq!(food.id, "1");
    assert_eq!(food.food_name, "Jollof Rice");
    assert_eq!(food.created_at.as_deref(), Some("2024-05-01T12:00:00.000Z"));
}

#[tokio::test]
async fn create_food_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/Food", r#"{"food_name":"only a name"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_food_not_found() {
    let resp = app().oneshot(empty_request("GET", "/Food/99")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: String = body_json(resp).await;
    assert_eq!(body, "Not found");
}

#[tokio::test]
async fn get_food_non_numeric_id_is_not_found() {
    let resp = app()
        .oneshot(empty_request("GET", "/Food/not-an-id"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- update ---

#[tokio::test]
async fn update_food_not_found() {
    let resp = app()
        .oneshot(json_request("PUT", "/Food/1", SUYA))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_food_not_found() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/Food/1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create two
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/Food", JOLLOF))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let jollof: Food = body_json(resp).await;

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/Food", SUYA))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let suya: Food = body_json(resp).await;
    assert_eq!(suya.id, "2");

    // list keeps insertion order
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/Food"))
        .await
        .unwrap();
    let foods: Vec<Food> = body_json(resp).await;
    let ids: Vec<&str> = foods.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);

    // search is a case-insensitive substring match
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/Food?name=SUY"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let foods: Vec<Food> = body_json(resp).await;
    assert_eq!(foods.len(), 1);
    assert_eq!(foods[0].id, suya.id);

    // percent-encoded spaces decode before matching
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/Food?name=jollof%20rice"))
        .await
        .unwrap();
    let foods: Vec<Food> = body_json(resp).await;
    assert_eq!(foods.len(), 1);
    assert_eq!(foods[0].id, jollof.id);

    // update replaces mutable fields, keeps id and createdAt
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("PUT", &format!("/Food/{}", jollof.id), SUYA))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Food = body_json(resp).await;
    assert_eq!(updated.id, jollof.id);
    assert_eq!(updated.food_name, "Beef Suya");
    assert_eq!(updated.restaurant_status, "Closed");
    assert_eq!(updated.created_at, jollof.created_at);

    // delete echoes the removed record
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/Food/{}", suya.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let removed: Food = body_json(resp).await;
    assert_eq!(removed, suya);

    // get after delete — 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/Food/{}", suya.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete — one left
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/Food"))
        .await
        .unwrap();
    let foods: Vec<Food> = body_json(resp).await;
    assert_eq!(foods, vec![updated]);
}
