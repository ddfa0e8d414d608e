use axum::{http::StatusCode, response::Json, routing::post, Router};
use diesel::{insert_into, prelude::*, result::Error::NotFound};
use tracing::instrument;

use crate::error::ApiError;
use crate::serializer::{
    serialize_created_restaurant_pizza, ApiErrorsResponse, CreateRestaurantPizzaRequest,
    CreateRestaurantPizzaResponse,
};
use crate::{establish_connection, models, schema};

pub fn router() -> Router {
    Router::new().route("/restaurant_pizzas", post(create_restaurant_pizza))
}

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Offer created", body = CreateRestaurantPizzaResponse),
        (status = 400, description = "Price missing or out of range", body = ApiErrorsResponse),
        (status = 404, description = "Restaurant or pizza not found", body = ApiErrorsResponse),
    ),
    tag = "restaurant_pizzas"
)]
#[instrument]
pub async fn create_restaurant_pizza(
    Json(payload): Json<CreateRestaurantPizzaRequest>,
) -> Result<(StatusCode, Json<CreateRestaurantPizzaResponse>), ApiError> {
    // An absent price fails the same way as one outside [1, 30]
    let offered_price = match payload.price {
        Some(p) if (1..=30).contains(&p) => p,
        _ => return Err(ApiError::PriceOutOfRange),
    };

    let conn = &mut establish_connection();

    let restaurant = find_restaurant(conn, payload.restaurant_id)?;
    let pizza = find_pizza(conn, payload.pizza_id)?;
    let (restaurant, pizza) = match (restaurant, pizza) {
        (Some(restaurant), Some(pizza)) => (restaurant, pizza),
        _ => return Err(ApiError::ReferenceNotFound),
    };

    let offer = conn
        .transaction::<models::RestaurantPizza, diesel::result::Error, _>(|conn| {
            insert_into(schema::restaurant_pizzas::table)
                .values(models::NewRestaurantPizza {
                    price: offered_price,
                    restaurant_id: restaurant.id,
                    pizza_id: pizza.id,
                })
                .returning(models::RestaurantPizza::as_returning())
                .get_result(conn)
        })
        .map_err(|e| ApiError::CreateFailed(e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(serialize_created_restaurant_pizza(&offer, &restaurant, &pizza)),
    ))
}

fn find_restaurant(
    conn: &mut PgConnection,
    restaurant_id: Option<i32>,
) -> Result<Option<models::Restaurant>, ApiError> {
    let Some(restaurant_id) = restaurant_id else {
        return Ok(None);
    };

    match schema::restaurants::table
        .find(restaurant_id)
        .select(models::Restaurant::as_select())
        .first(conn)
    {
        Ok(restaurant) => Ok(Some(restaurant)),
        Err(NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn find_pizza(
    conn: &mut PgConnection,
    pizza_id: Option<i32>,
) -> Result<Option<models::Pizza>, ApiError> {
    let Some(pizza_id) = pizza_id else {
        return Ok(None);
    };

    match schema::pizzas::table
        .find(pizza_id)
        .select(models::Pizza::as_select())
        .first(conn)
    {
        Ok(pizza) => Ok(Some(pizza)),
        Err(NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
