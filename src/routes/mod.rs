pub mod car_race_routes;
pub mod health_routes;
pub mod vehicle_routes;
