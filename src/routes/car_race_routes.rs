use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post, put},
    Json, Router,
};
use crate::controllers::car_race_controller::CarRaceController;
use crate::dto::car_race_dto::{CreateCarRaceRequest, UpdateCarRaceRequest};
use crate::models::car_race::CarRace;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// CRUD de carreras, montado en /api/carraces
pub fn create_car_race_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_car_races))
        .route("/cars", post(create_car_race))
        .route(
            "/:id",
            get(get_car_race).put(update_car_race).delete(delete_car_race),
        )
}

/// Acciones sobre una carrera, montadas en la raíz
pub fn create_car_race_actions_router() -> Router<AppState> {
    // matchit exige el mismo nombre de parámetro en el primer segmento
    Router::new()
        .route("/:id/addcar/:car_id", put(add_car_to_car_race))
        .route("/:id/start", put(start_car_race))
}

async fn list_car_races(State(state): State<AppState>) -> Result<Json<Vec<CarRace>>, AppError> {
    let controller = CarRaceController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_car_race(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CarRace>, AppError> {
    let controller = CarRaceController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_car_race(
    State(state): State<AppState>,
    payload: Result<Json<CreateCarRaceRequest>, JsonRejection>,
) -> Result<Json<CarRace>, AppError> {
    let Json(request) = payload?;
    let controller = CarRaceController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn update_car_race(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateCarRaceRequest>, JsonRejection>,
) -> Result<Json<CarRace>, AppError> {
    let Json(request) = payload?;
    let controller = CarRaceController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_car_race(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<String>, AppError> {
    let controller = CarRaceController::new(state.pool.clone());
    let message = controller.delete(id).await?;
    Ok(Json(message))
}

async fn add_car_to_car_race(
    State(state): State<AppState>,
    Path((car_race_id, car_id)): Path<(i32, i32)>,
) -> Result<Json<CarRace>, AppError> {
    let controller = CarRaceController::new(state.pool.clone());
    let response = controller.add_car(car_race_id, car_id).await?;
    Ok(Json(response))
}

async fn start_car_race(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CarRace>, AppError> {
    let controller = CarRaceController::new(state.pool.clone());
    let response = controller.start(id).await?;
    Ok(Json(response))
}
