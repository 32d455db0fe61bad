use crate::models::vehicle::{Vehicle, VehicleKind};
use crate::utils::errors::AppError;
use sqlx::SqlitePool;
use tracing::debug;

/// Acceso a las tablas Cars / Motorbikes según el `VehicleKind`
pub struct VehicleRepository {
    pool: SqlitePool,
    kind: VehicleKind,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool, kind: VehicleKind) -> Self {
        Self { pool, kind }
    }

    pub async fn find_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let sql = format!("SELECT * FROM {} ORDER BY Id", self.kind.table());
        let vehicles = sqlx::query_as::<_, Vehicle>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, AppError> {
        let sql = format!("SELECT * FROM {} WHERE Id = ?", self.kind.table());
        let vehicle = sqlx::query_as::<_, Vehicle>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn create(
        &self,
        team_name: String,
        speed: i32,
        malfunction_chance: f64,
    ) -> Result<Vehicle, AppError> {
        // Los campos calculados toman los DEFAULT del schema
        let sql = format!(
            r#"
            INSERT INTO {} (TeamName, Speed, MalfunctionChance)
            VALUES (?, ?, ?)
            RETURNING *
            "#,
            self.kind.table()
        );

        let vehicle = sqlx::query_as::<_, Vehicle>(&sql)
            .bind(team_name)
            .bind(speed)
            .bind(malfunction_chance)
            .fetch_one(&self.pool)
            .await?;

        debug!("{} {} creado", self.kind.label(), vehicle.id);
        Ok(vehicle)
    }

    /// Actualiza solo los campos que fija el cliente. `None` si el id no existe.
    pub async fn update(
        &self,
        id: i32,
        team_name: String,
        speed: i32,
        malfunction_chance: f64,
    ) -> Result<Option<Vehicle>, AppError> {
        let sql = format!(
            r#"
            UPDATE {}
            SET TeamName = ?, Speed = ?, MalfunctionChance = ?
            WHERE Id = ?
            RETURNING *
            "#,
            self.kind.table()
        );

        let vehicle = sqlx::query_as::<_, Vehicle>(&sql)
            .bind(team_name)
            .bind(speed)
            .bind(malfunction_chance)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    /// Devuelve `false` si no había fila con ese id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE Id = ?", self.kind.table());
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::DatabaseConnection;

    async fn repository(kind: VehicleKind) -> VehicleRepository {
        let db = DatabaseConnection::in_memory().await.unwrap();
        VehicleRepository::new(db.pool().clone(), kind)
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_defaults() {
        let repo = repository(VehicleKind::Car).await;

        let car = repo.create("Red".to_string(), 200, 0.1).await.unwrap();

        assert_eq!(car.id, 1);
        assert_eq!(car.team_name, "Red");
        assert_eq!(car.speed, 200);
        assert_eq!(car.malfunction_chance, 0.1);
        assert_eq!(car.malfunctions_occurred, 0);
        assert_eq!(car.distance_covered_miles, 0);
        assert!(!car.finished_race);
        assert_eq!(car.raced_for_hours, 0);
        assert_eq!(car.car_race_id, None);
    }

    #[tokio::test]
    async fn test_ids_are_monotonic_and_not_reused() {
        let repo = repository(VehicleKind::Car).await;

        let first = repo.create("A".to_string(), 1, 0.0).await.unwrap();
        let second = repo.create("B".to_string(), 1, 0.0).await.unwrap();
        assert!(second.id > first.id);

        assert!(repo.delete(second.id).await.unwrap());
        let third = repo.create("C".to_string(), 1, 0.0).await.unwrap();
        assert!(third.id > second.id);
    }

    #[tokio::test]
    async fn test_find_by_id_returns_created_fields() {
        let repo = repository(VehicleKind::Motorbike).await;
        let created = repo.create("Yamaha".to_string(), 180, 0.25).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert!(repo.find_by_id(created.id + 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_applies_patch_fields_only() {
        let repo = repository(VehicleKind::Car).await;
        let created = repo.create("Red".to_string(), 200, 0.1).await.unwrap();

        let updated = repo
            .update(created.id, "Blue".to_string(), 250, 0.9)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.team_name, "Blue");
        assert_eq!(updated.speed, 250);
        assert_eq!(updated.malfunction_chance, 0.9);
        assert_eq!(updated.malfunctions_occurred, 0);
    }

    #[tokio::test]
    async fn test_update_missing_creates_nothing() {
        let repo = repository(VehicleKind::Car).await;

        let updated = repo.update(5, "Ghost".to_string(), 1, 0.0).await.unwrap();

        assert!(updated.is_none());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = repository(VehicleKind::Car).await;
        let created = repo.create("Red".to_string(), 200, 0.1).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_cars_and_motorbikes_are_stored_separately() {
        let db = DatabaseConnection::in_memory().await.unwrap();
        let cars = VehicleRepository::new(db.pool().clone(), VehicleKind::Car);
        let bikes = VehicleRepository::new(db.pool().clone(), VehicleKind::Motorbike);

        cars.create("Red".to_string(), 200, 0.1).await.unwrap();

        assert_eq!(cars.find_all().await.unwrap().len(), 1);
        assert!(bikes.find_all().await.unwrap().is_empty());
        assert!(bikes.find_by_id(1).await.unwrap().is_none());
    }
}
