pub mod car_race_repository;
pub mod vehicle_repository;
