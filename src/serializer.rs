use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models;

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantResponse {
    /// Unique identifier for the restaurant
    pub id: i32,
    /// Name of the restaurant
    pub name: String,
    /// Address of the restaurant
    pub address: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PizzaResponse {
    /// Unique identifier for the pizza
    pub id: i32,
    /// Name of the pizza
    pub name: String,
    /// Comma-separated ingredient list
    pub ingredients: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantPizzaResponse {
    /// Unique identifier for the offer
    pub id: i32,
    /// Price of the pizza at this restaurant
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub pizza: PizzaResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantDetailResponse {
    pub id: i32,
    pub name: String,
    pub address: String,
    /// Pizzas offered by this restaurant
    pub restaurant_pizzas: Vec<RestaurantPizzaResponse>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    /// Price of the pizza at this restaurant, between 1 and 30
    pub price: Option<i32>,
    pub restaurant_id: Option<i32>,
    pub pizza_id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateRestaurantPizzaResponse {
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub pizza: PizzaResponse,
    pub restaurant: RestaurantResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Error message
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorsResponse {
    /// Error messages
    pub errors: Vec<String>,
}

pub fn serialize_restaurant(restaurant: &models::Restaurant) -> RestaurantResponse {
    RestaurantResponse {
        id: restaurant.id,
        name: restaurant.name.clone(),
        address: restaurant.address.clone(),
    }
}

pub fn serialize_pizza(pizza: &models::Pizza) -> PizzaResponse {
    PizzaResponse {
        id: pizza.id,
        name: pizza.name.clone(),
        ingredients: pizza.ingredients.clone(),
    }
}

pub fn serialize_restaurant_detail(
    restaurant: &models::Restaurant,
    offers: &[(models::RestaurantPizza, models::Pizza)],
) -> RestaurantDetailResponse {
    RestaurantDetailResponse {
        id: restaurant.id,
        name: restaurant.name.clone(),
        address: restaurant.address.clone(),
        restaurant_pizzas: offers
            .iter()
            .map(|(offer, pizza)| RestaurantPizzaResponse {
                id: offer.id,
                price: offer.price,
                restaurant_id: offer.restaurant_id,
                pizza_id: offer.pizza_id,
                pizza: serialize_pizza(pizza),
            })
            .collect(),
    }
}

pub fn serialize_created_restaurant_pizza(
    offer: &models::RestaurantPizza,
    restaurant: &models::Restaurant,
    pizza: &models::Pizza,
) -> CreateRestaurantPizzaResponse {
    CreateRestaurantPizzaResponse {
        id: offer.id,
        price: offer.price,
        restaurant_id: offer.restaurant_id,
        pizza_id: offer.pizza_id,
        pizza: serialize_pizza(pizza),
        restaurant: serialize_restaurant(restaurant),
    }
}
