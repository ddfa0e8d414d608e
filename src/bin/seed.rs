use diesel::prelude::*;
use diesel_migrations::MigrationHarness;

use pizzeria_api::{establish_connection, models, schema, MIGRATIONS};

fn main() {
    let conn = &mut establish_connection();
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run migrations");

    let existing: i64 = schema::restaurants::table
        .count()
        .get_result(conn)
        .expect("Error counting restaurants");
    if existing > 0 {
        println!("database already seeded, nothing to do");
        return;
    }

    let restaurants = diesel::insert_into(schema::restaurants::table)
        .values(vec![
            models::NewRestaurant {
                name: "Karen's Pizza Shack".to_string(),
                address: "address1".to_string(),
            },
            models::NewRestaurant {
                name: "Sanjay's Pizza".to_string(),
                address: "address2".to_string(),
            },
            models::NewRestaurant {
                name: "Kiki's Pizza".to_string(),
                address: "address3".to_string(),
            },
        ])
        .returning(models::Restaurant::as_returning())
        .get_results(conn)
        .expect("Error seeding restaurants");

    let pizzas = diesel::insert_into(schema::pizzas::table)
        .values(vec![
            models::NewPizza {
                name: "Emma".to_string(),
                ingredients: "Dough, Tomato Sauce, Cheese".to_string(),
            },
            models::NewPizza {
                name: "Geri".to_string(),
                ingredients: "Dough, Tomato Sauce, Cheese, Pepperoni".to_string(),
            },
            models::NewPizza {
                name: "Melanie".to_string(),
                ingredients: "Dough, Sauce, Ricotta, Red peppers, Mustard".to_string(),
            },
        ])
        .returning(models::Pizza::as_returning())
        .get_results(conn)
        .expect("Error seeding pizzas");

    let offers = diesel::insert_into(schema::restaurant_pizzas::table)
        .values(vec![
            models::NewRestaurantPizza {
                price: 1,
                restaurant_id: restaurants[0].id,
                pizza_id: pizzas[0].id,
            },
            models::NewRestaurantPizza {
                price: 4,
                restaurant_id: restaurants[1].id,
                pizza_id: pizzas[1].id,
            },
            models::NewRestaurantPizza {
                price: 5,
                restaurant_id: restaurants[2].id,
                pizza_id: pizzas[2].id,
            },
        ])
        .execute(conn)
        .expect("Error seeding restaurant pizzas");

    println!(
        "seeded {} restaurants, {} pizzas, {} offers",
        restaurants.len(),
        pizzas.len(),
        offers
    );
}
