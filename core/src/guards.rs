//! Advisory shape checks for untyped JSON payloads.
//!
//! These only look for the presence of required keys. They are not schema
//! validation and nothing in `FoodApi` depends on them.

use serde_json::Value;

const RECORD_KEYS: [&str; 4] = ["id", "food_name", "food_rating", "restaurant_name"];
const LIST_ITEM_KEYS: [&str; 2] = ["id", "food_name"];

/// Whether `data` looks like a single `FoodRecord`.
pub fn is_food(data: &Value) -> bool {
    has_keys(data, &RECORD_KEYS)
}

/// Whether `data` looks like a list of `FoodRecord`s. An empty array passes.
pub fn is_food_array(data: &Value) -> bool {
    data.as_array()
        .is_some_and(|items| items.iter().all(|item| has_keys(item, &LIST_ITEM_KEYS)))
}

fn has_keys(data: &Value, keys: &[&str]) -> bool {
    data.as_object()
        .is_some_and(|object| keys.iter().all(|key| object.contains_key(*key)))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn food_requires_core_keys() {
        let full = json!({"id": "1", "food_name": "Suya", "food_rating": 4, "restaurant_name": "Spot"});
        assert!(is_food(&full));

        let missing_rating = json!({"id": "1", "food_name": "Suya", "restaurant_name": "Spot"});
        assert!(!is_food(&missing_rating));
    }

    #[test]
    fn null_valued_keys_still_count_as_present() {
        let data = json!({"id": null, "food_name": null, "food_rating": null, "restaurant_name": null});
        assert!(is_food(&data));
    }

    #[test]
    fn non_objects_are_not_food() {
        assert!(!is_food(&json!(null)));
        assert!(!is_food(&json!("food")));
        assert!(!is_food(&json!([{"id": "1"}])));
    }

    #[test]
    fn array_items_need_id_and_name() {
        assert!(is_food_array(&json!([])));
        assert!(is_food_array(&json!([{"id": "1", "food_name": "a"}, {"id": "2", "food_name": "b"}])));
        assert!(!is_food_array(&json!([{"id": "1", "food_name": "a"}, {"id": "2"}])));
        assert!(!is_food_array(&json!([null])));
        assert!(!is_food_array(&json!({"id": "1", "food_name": "a"})));
    }
}
