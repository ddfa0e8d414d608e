use axum::{
    extract::Path,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use diesel::{prelude::*, result::Error::NotFound};
use tracing::instrument;

use crate::error::ApiError;
use crate::serializer::{
    serialize_restaurant, serialize_restaurant_detail, ApiErrorResponse, RestaurantDetailResponse,
    RestaurantResponse,
};
use crate::{establish_connection, models, schema};

pub fn router() -> Router {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route(
            "/restaurants/{id}",
            get(get_restaurant).delete(delete_restaurant),
        )
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "List of restaurants", body = Vec<RestaurantResponse>),
    ),
    tag = "restaurants"
)]
#[instrument]
pub async fn list_restaurants() -> Result<Json<Vec<RestaurantResponse>>, ApiError> {
    use crate::schema::restaurants::dsl::*;

    let conn = &mut establish_connection();
    let results = restaurants
        .select(models::Restaurant::as_select())
        .load(conn)?;

    Ok(Json(results.iter().map(serialize_restaurant).collect()))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    responses(
        (status = 200, description = "Restaurant details with offered pizzas", body = RestaurantDetailResponse),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument]
pub async fn get_restaurant(
    Path(restaurant_id): Path<i32>,
) -> Result<Json<RestaurantDetailResponse>, ApiError> {
    let conn = &mut establish_connection();

    let restaurant = match schema::restaurants::table
        .find(restaurant_id)
        .select(models::Restaurant::as_select())
        .first(conn)
    {
        Ok(r) => r,
        Err(NotFound) => return Err(ApiError::RestaurantNotFound),
        Err(e) => return Err(e.into()),
    };

    let offers = models::RestaurantPizza::belonging_to(&restaurant)
        .inner_join(schema::pizzas::table)
        .select((
            models::RestaurantPizza::as_select(),
            models::Pizza::as_select(),
        ))
        .load::<(models::RestaurantPizza, models::Pizza)>(conn)?;

    Ok(Json(serialize_restaurant_detail(&restaurant, &offers)))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    responses(
        (status = 204, description = "Restaurant and its offers deleted"),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument]
pub async fn delete_restaurant(Path(restaurant_id): Path<i32>) -> Result<StatusCode, ApiError> {
    let conn = &mut establish_connection();

    let restaurant = match schema::restaurants::table
        .find(restaurant_id)
        .select(models::Restaurant::as_select())
        .first(conn)
    {
        Ok(r) => r,
        Err(NotFound) => return Err(ApiError::RestaurantNotFound),
        Err(e) => return Err(e.into()),
    };

    // Dependent offers go first; both deletes commit or roll back together.
    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::delete(models::RestaurantPizza::belonging_to(&restaurant)).execute(conn)?;
        diesel::delete(schema::restaurants::table.find(restaurant.id)).execute(conn)?;

        Ok(())
    })?;

    Ok(StatusCode::NO_CONTENT)
}
