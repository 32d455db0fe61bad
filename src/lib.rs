//! API CRUD de carreras: cars, motorbikes y car races sobre SQLite.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use middleware::cors_layer;
use models::vehicle::VehicleKind;
use routes::{car_race_routes, health_routes, vehicle_routes};
use state::AppState;

/// Router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health_routes::health_check))
        .nest("/api/cars", vehicle_routes::create_vehicle_router(VehicleKind::Car))
        .nest(
            "/api/motorbikes",
            vehicle_routes::create_vehicle_router(VehicleKind::Motorbike),
        )
        .nest("/api/carraces", car_race_routes::create_car_race_router())
        .merge(car_race_routes::create_car_race_actions_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
