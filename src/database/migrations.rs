//! Schema de la base de datos
//!
//! Las sentencias son idempotentes y se ejecutan en cada arranque.

use sqlx::SqlitePool;
use tracing::info;

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS CarRaces (
            Id INTEGER PRIMARY KEY AUTOINCREMENT,
            Name TEXT NOT NULL,
            Location TEXT NOT NULL,
            Distance INTEGER NOT NULL,
            TimeLimit INTEGER NOT NULL,
            Status TEXT NOT NULL
        );
    "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS Cars (
            Id INTEGER PRIMARY KEY AUTOINCREMENT,
            TeamName TEXT NOT NULL,
            Speed INTEGER NOT NULL,
            MalfunctionChance REAL NOT NULL,
            MalfunctionsOccurred INTEGER NOT NULL DEFAULT 0,
            DistanceCoveredMiles INTEGER NOT NULL DEFAULT 0,
            FinishedRace BOOLEAN NOT NULL DEFAULT 0,
            RacedForHours INTEGER NOT NULL DEFAULT 0,
            CarRaceId INTEGER NULL,
            CONSTRAINT FK_Cars_CarRaces_CarRaceId
                FOREIGN KEY (CarRaceId) REFERENCES CarRaces (Id)
        );
    "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS IX_Cars_CarRaceId ON Cars (CarRaceId);")
        .execute(pool)
        .await?;

    // Races only own cars; the column keeps both vehicle tables the same shape
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS Motorbikes (
            Id INTEGER PRIMARY KEY AUTOINCREMENT,
            TeamName TEXT NOT NULL,
            Speed INTEGER NOT NULL,
            MalfunctionChance REAL NOT NULL,
            MalfunctionsOccurred INTEGER NOT NULL DEFAULT 0,
            DistanceCoveredMiles INTEGER NOT NULL DEFAULT 0,
            FinishedRace BOOLEAN NOT NULL DEFAULT 0,
            RacedForHours INTEGER NOT NULL DEFAULT 0,
            CarRaceId INTEGER NULL
        );
    "#,
    )
    .execute(pool)
    .await?;

    info!("✅ Migraciones de base de datos completadas");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let pool = DatabaseConfig::create_test_pool().await.unwrap();
        run_migrations(&pool).await.unwrap();
        run_migrations(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_car_race_foreign_key_is_enforced() {
        let pool = DatabaseConfig::create_test_pool().await.unwrap();
        run_migrations(&pool).await.unwrap();

        let result = sqlx::query(
            "INSERT INTO Cars (TeamName, Speed, MalfunctionChance, CarRaceId) VALUES ('Red', 200, 0.1, 99)",
        )
        .execute(&pool)
        .await;

        assert!(result.is_err());
    }
}
