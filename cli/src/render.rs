use meals_core::{FieldErrors, FoodRecord};

pub fn meal_line(food: &FoodRecord) -> String {
    format!(
        "[{}] {} ★{} | {} | {} ({})",
        food.id,
        food.food_name,
        food.food_rating,
        food.price,
        food.restaurant_name,
        food.restaurant_status
    )
}

pub fn meal_details(food: &FoodRecord) -> String {
    let mut out = String::new();
    out += &format!("id:          {}\n", food.id);
    out += &format!("name:        {}\n", food.food_name);
    out += &format!("rating:      {}\n", food.food_rating);
    out += &format!("price:       {}\n", food.price);
    out += &format!("image:       {}\n", food.food_image);
    out += &format!("restaurant:  {}\n", food.restaurant_name);
    out += &format!("logo:        {}\n", food.restaurant_logo);
    out += &format!("status:      {}\n", food.restaurant_status);
    if let Some(created_at) = &food.created_at {
        out += &format!("created:     {created_at}\n");
    }
    out
}

pub fn meal_list(foods: &[FoodRecord]) -> String {
    if foods.is_empty() {
        return "No meals found.\n".to_string();
    }
    foods.iter().map(|food| meal_line(food) + "\n").collect()
}

pub fn field_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}\n"))
        .collect()
}
