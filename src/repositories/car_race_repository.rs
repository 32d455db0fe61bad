use std::collections::HashMap;

use crate::models::car_race::{CarRace, CarRaceRow, RaceStatus};
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;
use tracing::debug;

/// Resultado de asignar un car a una carrera
#[derive(Debug)]
pub enum AddCarOutcome {
    Added(CarRace),
    RaceNotFound,
    CarNotFound,
}

pub struct CarRaceRepository {
    pool: SqlitePool,
}

impl CarRaceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Todas las carreras con sus cars (dos consultas, sin N+1)
    pub async fn find_all(&self) -> Result<Vec<CarRace>, AppError> {
        let rows = sqlx::query_as::<_, CarRaceRow>("SELECT * FROM CarRaces ORDER BY Id")
            .fetch_all(&self.pool)
            .await?;

        let assigned = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM Cars WHERE CarRaceId IS NOT NULL ORDER BY Id",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_race: HashMap<i32, Vec<Vehicle>> = HashMap::new();
        for car in assigned {
            if let Some(race_id) = car.car_race_id {
                by_race.entry(race_id).or_default().push(car);
            }
        }

        let races = rows
            .into_iter()
            .map(|row| {
                let cars = by_race.remove(&row.id).unwrap_or_default();
                CarRace::from_row(row, cars)
            })
            .collect();

        Ok(races)
    }

    /// Carrera con sus cars cargados
    pub async fn find_by_id(&self, id: i32) -> Result<Option<CarRace>, AppError> {
        let row = sqlx::query_as::<_, CarRaceRow>("SELECT * FROM CarRaces WHERE Id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(self.with_cars(row).await?)),
            None => Ok(None),
        }
    }

    /// Crea la carrera siempre en estado `Created`
    pub async fn create(
        &self,
        name: String,
        location: String,
        distance: i32,
        time_limit: i32,
    ) -> Result<CarRace, AppError> {
        let row = sqlx::query_as::<_, CarRaceRow>(
            r#"
            INSERT INTO CarRaces (Name, Location, Distance, TimeLimit, Status)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(location)
        .bind(distance)
        .bind(time_limit)
        .bind(RaceStatus::Created)
        .fetch_one(&self.pool)
        .await?;

        debug!("CarRace {} creada", row.id);
        Ok(CarRace::from_row(row, Vec::new()))
    }

    /// Status y cars no se tocan
    pub async fn update(
        &self,
        id: i32,
        name: String,
        location: String,
        distance: i32,
        time_limit: i32,
    ) -> Result<Option<CarRace>, AppError> {
        let row = sqlx::query_as::<_, CarRaceRow>(
            r#"
            UPDATE CarRaces
            SET Name = ?, Location = ?, Distance = ?, TimeLimit = ?
            WHERE Id = ?
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(location)
        .bind(distance)
        .bind(time_limit)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.with_cars(row).await?)),
            None => Ok(None),
        }
    }

    /// Borra la carrera; sus cars quedan sin asignar, no se borran
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let released = sqlx::query("UPDATE Cars SET CarRaceId = NULL WHERE CarRaceId = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM CarRaces WHERE Id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        debug!(
            "CarRace {} borrada, {} cars liberados",
            id,
            released.rows_affected()
        );
        Ok(true)
    }

    /// Asigna el car a la carrera fijando `Cars.CarRaceId`.
    /// Se comprueba primero la carrera y después el car.
    pub async fn add_car(&self, race_id: i32, car_id: i32) -> Result<AddCarOutcome, AppError> {
        let race_exists: Option<(i32,)> = sqlx::query_as("SELECT Id FROM CarRaces WHERE Id = ?")
            .bind(race_id)
            .fetch_optional(&self.pool)
            .await?;

        if race_exists.is_none() {
            return Ok(AddCarOutcome::RaceNotFound);
        }

        let assigned: Option<(i32,)> =
            sqlx::query_as("UPDATE Cars SET CarRaceId = ? WHERE Id = ? RETURNING Id")
                .bind(race_id)
                .bind(car_id)
                .fetch_optional(&self.pool)
                .await?;

        if assigned.is_none() {
            return Ok(AddCarOutcome::CarNotFound);
        }

        match self.find_by_id(race_id).await? {
            Some(race) => Ok(AddCarOutcome::Added(race)),
            None => Ok(AddCarOutcome::RaceNotFound),
        }
    }

    pub async fn set_status(&self, id: i32, status: RaceStatus) -> Result<Option<CarRace>, AppError> {
        let row = sqlx::query_as::<_, CarRaceRow>(
            "UPDATE CarRaces SET Status = ? WHERE Id = ? RETURNING *",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.with_cars(row).await?)),
            None => Ok(None),
        }
    }

    async fn with_cars(&self, row: CarRaceRow) -> Result<CarRace, AppError> {
        let cars = sqlx::query_as::<_, Vehicle>("SELECT * FROM Cars WHERE CarRaceId = ? ORDER BY Id")
            .bind(row.id)
            .fetch_all(&self.pool)
            .await?;

        Ok(CarRace::from_row(row, cars))
    }
}
