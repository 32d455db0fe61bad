use serde::Deserialize;
use validator::Validate;

// Request para crear o actualizar una carrera.
// `status` no se acepta: lo controla el servidor.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarRaceRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub distance: i32,
    pub time_limit: i32,
}

pub type UpdateCarRaceRequest = CreateCarRaceRequest;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_camel_case_body() {
        let request: CreateCarRaceRequest = serde_json::from_value(json!({
            "name": "GP1",
            "location": "Monaco",
            "distance": 300,
            "timeLimit": 120,
            "status": "Started"
        }))
        .unwrap();

        assert_eq!(request.time_limit, 120);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_location_fails_to_deserialize() {
        let result = serde_json::from_value::<CreateCarRaceRequest>(json!({
            "name": "GP1",
            "distance": 300,
            "timeLimit": 120
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_name_is_invalid() {
        let request = CreateCarRaceRequest {
            name: String::new(),
            location: "Monza".to_string(),
            distance: 1,
            time_limit: 1,
        };
        assert!(request.validate().is_err());
    }
}
