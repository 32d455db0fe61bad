use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::vehicle::{Vehicle, VehicleKind};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::SqlitePool;
use tracing::info;
use validator::Validate;

pub struct VehicleController {
    repository: VehicleRepository,
    kind: VehicleKind,
}

impl VehicleController {
    pub fn new(pool: SqlitePool, kind: VehicleKind) -> Self {
        Self {
            repository: VehicleRepository::new(pool, kind),
            kind,
        }
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Vehicle, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(self.kind.label(), id))
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<Vehicle, AppError> {
        request.validate()?;

        let vehicle = self
            .repository
            .create(request.team_name, request.speed, request.malfunction_chance)
            .await?;

        info!("✅ {} {} creado", self.kind.label(), vehicle.id);
        Ok(vehicle)
    }

    pub async fn update(&self, id: i32, request: UpdateVehicleRequest) -> Result<Vehicle, AppError> {
        request.validate()?;

        self.repository
            .update(id, request.team_name, request.speed, request.malfunction_chance)
            .await?
            .ok_or_else(|| not_found_error(self.kind.label(), id))
    }

    /// Devuelve el mensaje de confirmación para la API
    pub async fn delete(&self, id: i32) -> Result<String, AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error(self.kind.label(), id));
        }

        info!("🗑️ {} {} eliminado", self.kind.label(), id);
        Ok(format!("{} with id: {} has been deleted", self.kind.label(), id))
    }
}
