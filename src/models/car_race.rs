//! Modelo de CarRace
//!
//! Una carrera es dueña de cero o más cars a través de `Cars.CarRaceId`.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

use super::vehicle::Vehicle;

/// Estado de la carrera - se guarda como TEXT con el nombre exacto de la variante
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
pub enum RaceStatus {
    Created,
    Started,
}

/// Fila de la tabla CarRaces, sin la colección de cars
#[derive(Debug, Clone, FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct CarRaceRow {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub distance: i32,
    pub time_limit: i32,
    pub status: RaceStatus,
}

/// CarRace con sus cars cargados
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarRace {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub distance: i32,
    pub time_limit: i32,
    pub status: RaceStatus,
    pub cars: Vec<Vehicle>,
}

impl CarRace {
    pub fn from_row(row: CarRaceRow, cars: Vec<Vehicle>) -> Self {
        Self {
            id: row.id,
            name: row.name,
            location: row.location,
            distance: row.distance,
            time_limit: row.time_limit,
            status: row.status,
            cars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_serializes_as_plain_string() {
        assert_eq!(serde_json::to_value(RaceStatus::Created).unwrap(), json!("Created"));
        assert_eq!(serde_json::to_value(RaceStatus::Started).unwrap(), json!("Started"));
    }

    #[test]
    fn test_car_race_serializes_camel_case() {
        let race = CarRace::from_row(
            CarRaceRow {
                id: 1,
                name: "GP1".to_string(),
                location: "Monaco".to_string(),
                distance: 300,
                time_limit: 120,
                status: RaceStatus::Created,
            },
            Vec::new(),
        );

        let value = serde_json::to_value(&race).unwrap();
        assert_eq!(value["timeLimit"], 120);
        assert_eq!(value["status"], "Created");
        assert_eq!(value["cars"], json!([]));
    }
}
