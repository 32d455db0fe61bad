use crate::dto::car_race_dto::{CreateCarRaceRequest, UpdateCarRaceRequest};
use crate::models::car_race::{CarRace, RaceStatus};
use crate::models::vehicle::VehicleKind;
use crate::repositories::car_race_repository::{AddCarOutcome, CarRaceRepository};
use crate::utils::errors::{not_found_error, AppError};
use sqlx::SqlitePool;
use tracing::info;
use validator::Validate;

const RESOURCE: &str = "CarRace";

pub struct CarRaceController {
    repository: CarRaceRepository,
}

impl CarRaceController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: CarRaceRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<CarRace>, AppError> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<CarRace, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(RESOURCE, id))
    }

    pub async fn create(&self, request: CreateCarRaceRequest) -> Result<CarRace, AppError> {
        request.validate()?;

        let race = self
            .repository
            .create(request.name, request.location, request.distance, request.time_limit)
            .await?;

        info!("🏁 CarRace {} creada en {}", race.id, race.location);
        Ok(race)
    }

    pub async fn update(&self, id: i32, request: UpdateCarRaceRequest) -> Result<CarRace, AppError> {
        request.validate()?;

        self.repository
            .update(id, request.name, request.location, request.distance, request.time_limit)
            .await?
            .ok_or_else(|| not_found_error(RESOURCE, id))
    }

    pub async fn delete(&self, id: i32) -> Result<String, AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error(RESOURCE, id));
        }

        info!("🗑️ CarRace {} eliminada", id);
        Ok(format!("{} with id: {} has been deleted", RESOURCE, id))
    }

    pub async fn add_car(&self, race_id: i32, car_id: i32) -> Result<CarRace, AppError> {
        match self.repository.add_car(race_id, car_id).await? {
            AddCarOutcome::Added(race) => {
                info!("🚗 Car {} asignado a CarRace {}", car_id, race_id);
                Ok(race)
            }
            AddCarOutcome::RaceNotFound => Err(not_found_error(RESOURCE, race_id)),
            AddCarOutcome::CarNotFound => Err(not_found_error(VehicleKind::Car.label(), car_id)),
        }
    }

    /// Solo cambia el estado; la simulación de la carrera no existe
    pub async fn start(&self, id: i32) -> Result<CarRace, AppError> {
        let race = self
            .repository
            .set_status(id, RaceStatus::Started)
            .await?
            .ok_or_else(|| not_found_error(RESOURCE, id))?;

        info!("🚦 CarRace {} iniciada con {} cars", id, race.cars.len());
        Ok(race)
    }
}
