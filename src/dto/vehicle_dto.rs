use serde::Deserialize;
use validator::Validate;

// Request para crear o actualizar un car / motorbike.
// Solo estos campos los fija el cliente; el resto los calcula el servidor.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1))]
    pub team_name: String,
    pub speed: i32,
    pub malfunction_chance: f64,
}

// PUT reemplaza los mismos campos que acepta POST
pub type UpdateVehicleRequest = CreateVehicleRequest;
