pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

// Re-export routers for easier importing
pub use pizza::router as pizza_router;
pub use restaurant::router as restaurant_router;
pub use restaurant_pizza::router as restaurant_pizza_router;

use axum::{response::Html, routing::get, Router};
use utoipa::OpenApi;

pub fn app() -> Router {
    Router::new()
        .route("/", get(index))
        .merge(restaurant_router())
        .merge(pizza_router())
        .merge(restaurant_pizza_router())
}

async fn index() -> Html<&'static str> {
    Html("<h1>Pizzeria API</h1>")
}

#[derive(OpenApi)]
#[openapi(
    paths(
        restaurant::list_restaurants,
        restaurant::get_restaurant,
        restaurant::delete_restaurant,
        pizza::list_pizzas,
        restaurant_pizza::create_restaurant_pizza,
    ),
    components(
        schemas(
            crate::serializer::RestaurantResponse,
            crate::serializer::RestaurantDetailResponse,
            crate::serializer::RestaurantPizzaResponse,
            crate::serializer::PizzaResponse,
            crate::serializer::CreateRestaurantPizzaRequest,
            crate::serializer::CreateRestaurantPizzaResponse,
            crate::serializer::ApiErrorResponse,
            crate::serializer::ApiErrorsResponse
        )
    ),
    tags(
        (name = "restaurants", description = "Restaurant endpoints"),
        (name = "pizzas", description = "Pizza endpoints"),
        (name = "restaurant_pizzas", description = "Restaurant pizza offer endpoints")
    ),
    info(
        title = "Pizzeria API",
        description = "CRUD API over restaurants, pizzas, and the pizzas each restaurant offers",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

#[cfg(test)]
pub(crate) mod testing {
    use diesel::prelude::*;
    use diesel_migrations::MigrationHarness;
    use std::sync::Once;

    use crate::{establish_connection, models, schema, MIGRATIONS};

    static MIGRATED: Once = Once::new();

    pub fn setup() {
        MIGRATED.call_once(|| {
            let conn = &mut establish_connection();
            conn.run_pending_migrations(MIGRATIONS)
                .expect("Failed to run migrations");
        });
    }

    pub fn seed_restaurant(
        conn: &mut PgConnection,
        name: &str,
        address: &str,
    ) -> models::Restaurant {
        diesel::insert_into(schema::restaurants::table)
            .values(models::NewRestaurant {
                name: name.to_string(),
                address: address.to_string(),
            })
            .returning(models::Restaurant::as_returning())
            .get_result(conn)
            .unwrap()
    }

    pub fn seed_pizza(conn: &mut PgConnection, name: &str, ingredients: &str) -> models::Pizza {
        diesel::insert_into(schema::pizzas::table)
            .values(models::NewPizza {
                name: name.to_string(),
                ingredients: ingredients.to_string(),
            })
            .returning(models::Pizza::as_returning())
            .get_result(conn)
            .unwrap()
    }

    pub fn seed_offer(
        conn: &mut PgConnection,
        restaurant_id: i32,
        pizza_id: i32,
        price: i32,
    ) -> models::RestaurantPizza {
        diesel::insert_into(schema::restaurant_pizzas::table)
            .values(models::NewRestaurantPizza {
                price,
                restaurant_id,
                pizza_id,
            })
            .returning(models::RestaurantPizza::as_returning())
            .get_result(conn)
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use diesel::prelude::*;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use super::testing::{seed_pizza, seed_restaurant, setup};
    use crate::{establish_connection, schema};

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_index() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_offer_lifecycle() {
        setup();
        let conn = &mut establish_connection();
        let restaurant = seed_restaurant(conn, "Kiki's Pizza", "address3");
        let pizza = seed_pizza(conn, "Cheese", "Dough, Tomato Sauce, Cheese");

        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/restaurant_pizzas")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({
                            "price": 10,
                            "restaurant_id": restaurant.id,
                            "pizza_id": pizza.id,
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = read_json(response).await;
        assert_eq!(body["price"], 10);
        assert_eq!(body["restaurant_id"], restaurant.id);
        assert_eq!(body["pizza_id"], pizza.id);
        assert_eq!(body["pizza"]["name"], "Cheese");
        assert_eq!(body["restaurant"]["name"], "Kiki's Pizza");

        let response = app()
            .oneshot(
                Request::builder()
                    .uri(format!("/restaurants/{}", restaurant.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["name"], "Kiki's Pizza");
        assert_eq!(body["restaurant_pizzas"].as_array().unwrap().len(), 1);
        assert_eq!(body["restaurant_pizzas"][0]["price"], 10);
        assert_eq!(body["restaurant_pizzas"][0]["pizza"]["name"], "Cheese");

        let response = app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/restaurants/{}", restaurant.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app()
            .oneshot(
                Request::builder()
                    .uri(format!("/restaurants/{}", restaurant.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = read_json(response).await;
        assert_eq!(body["error"], "Restaurant not found");
    }

    #[tokio::test]
    async fn test_create_offer_rejects_out_of_range_price() {
        setup();
        let conn = &mut establish_connection();
        let restaurant = seed_restaurant(conn, "Pizza Hat", "address4");
        let pizza = seed_pizza(conn, "Margherita", "Dough, Tomato Sauce, Basil");

        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/restaurant_pizzas")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({
                            "price": 50,
                            "restaurant_id": restaurant.id,
                            "pizza_id": pizza.id,
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["errors"][0], "Price must be between 1 and 30");

        let count: i64 = schema::restaurant_pizzas::table
            .filter(schema::restaurant_pizzas::restaurant_id.eq(restaurant.id))
            .count()
            .get_result(conn)
            .unwrap();
        assert_eq!(count, 0);
    }
}
