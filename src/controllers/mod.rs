pub mod car_race_controller;
pub mod vehicle_controller;
