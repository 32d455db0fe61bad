use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Extension, Json, Router,
};
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::vehicle::{Vehicle, VehicleKind};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Router CRUD para un tipo de vehículo; se monta en /api/cars y /api/motorbikes
pub fn create_vehicle_router(kind: VehicleKind) -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route(
            "/:id",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
        .layer(Extension(kind))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Extension(kind): Extension<VehicleKind>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), kind);
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Extension(kind): Extension<VehicleKind>,
    Path(id): Path<i32>,
) -> Result<Json<Vehicle>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), kind);
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Extension(kind): Extension<VehicleKind>,
    payload: Result<Json<CreateVehicleRequest>, JsonRejection>,
) -> Result<Json<Vehicle>, AppError> {
    let Json(request) = payload?;
    let controller = VehicleController::new(state.pool.clone(), kind);
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Extension(kind): Extension<VehicleKind>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateVehicleRequest>, JsonRejection>,
) -> Result<Json<Vehicle>, AppError> {
    let Json(request) = payload?;
    let controller = VehicleController::new(state.pool.clone(), kind);
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Extension(kind): Extension<VehicleKind>,
    Path(id): Path<i32>,
) -> Result<Json<String>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), kind);
    let message = controller.delete(id).await?;
    Ok(Json(message))
}
