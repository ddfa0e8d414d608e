use axum::{response::Json, routing::get, Router};
use diesel::prelude::*;
use tracing::instrument;

use crate::error::ApiError;
use crate::serializer::{serialize_pizza, PizzaResponse};
use crate::{establish_connection, models};

pub fn router() -> Router {
    Router::new().route("/pizzas", get(list_pizzas))
}

#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "List of pizzas", body = Vec<PizzaResponse>),
    ),
    tag = "pizzas"
)]
#[instrument]
pub async fn list_pizzas() -> Result<Json<Vec<PizzaResponse>>, ApiError> {
    use crate::schema::pizzas::dsl::*;

    let conn = &mut establish_connection();
    let results = pizzas.select(models::Pizza::as_select()).load(conn)?;

    Ok(Json(results.iter().map(serialize_pizza).collect()))
}
