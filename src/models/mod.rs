//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema SQLite.

pub mod car_race;
pub mod vehicle;

pub use car_race::{CarRace, CarRaceRow, RaceStatus};
pub use vehicle::{Vehicle, VehicleKind};
