pub mod car_race_dto;
pub mod vehicle_dto;
