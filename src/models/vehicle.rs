//! Modelo de Vehicle
//!
//! Cars y motorbikes comparten exactamente la misma forma; `VehicleKind`
//! decide en qué tabla vive cada uno.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Tipo de vehículo - cada variante se guarda en su propia tabla
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Car,
    Motorbike,
}

impl VehicleKind {
    pub fn table(self) -> &'static str {
        match self {
            VehicleKind::Car => "Cars",
            VehicleKind::Motorbike => "Motorbikes",
        }
    }

    /// Nombre usado en mensajes de la API
    pub fn label(self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Motorbike => "Motorbike",
        }
    }
}

/// Vehicle principal - mapea a las tablas Cars y Motorbikes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Vehicle {
    pub id: i32,
    pub team_name: String,
    pub speed: i32,
    pub malfunction_chance: f64,
    pub malfunctions_occurred: i32,
    pub distance_covered_miles: i32,
    pub finished_race: bool,
    pub raced_for_hours: i32,
    pub car_race_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vehicle_serializes_camel_case() {
        let car = Vehicle {
            id: 1,
            team_name: "Red".to_string(),
            speed: 200,
            malfunction_chance: 0.1,
            malfunctions_occurred: 0,
            distance_covered_miles: 0,
            finished_race: false,
            raced_for_hours: 0,
            car_race_id: None,
        };

        assert_eq!(
            serde_json::to_value(&car).unwrap(),
            json!({
                "id": 1,
                "teamName": "Red",
                "speed": 200,
                "malfunctionChance": 0.1,
                "malfunctionsOccurred": 0,
                "distanceCoveredMiles": 0,
                "finishedRace": false,
                "racedForHours": 0,
                "carRaceId": null
            })
        );
    }

    #[test]
    fn test_kind_tables() {
        assert_eq!(VehicleKind::Car.table(), "Cars");
        assert_eq!(VehicleKind::Motorbike.table(), "Motorbikes");
        assert_eq!(VehicleKind::Motorbike.label(), "Motorbike");
    }
}
