//! Vehicle REST API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::super::AppState;
use super::dto::{
    CreateVehicleRequest, UpdateVehicleRequest, UpdateVehicleStatusRequest, VehicleListParams,
    VehicleResponse, VehicleStatusDto,
};
use crate::domain::{status_token, Vehicle, VehicleFilter, VehicleStatus};
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};

type HandlerError = (StatusCode, Json<ApiResponse<()>>);

fn internal(message: String) -> HandlerError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error(message)),
    )
}

fn not_found(message: String) -> HandlerError {
    (StatusCode::NOT_FOUND, Json(ApiResponse::error(message)))
}

async fn response_with_status(
    state: &AppState,
    vehicle: Vehicle,
) -> Result<VehicleResponse, HandlerError> {
    let status = state
        .repos
        .statuses()
        .find_by_vehicle(&vehicle.id)
        .await
        .map_err(|e| internal(format!("Failed to get vehicle status: {}", e)))?;
    Ok(VehicleResponse::from_parts(vehicle, status))
}

pub async fn list_vehicles(
    State(state): State<AppState>,
    Query(params): Query<VehicleListParams>,
) -> Result<Json<ApiResponse<Vec<VehicleResponse>>>, HandlerError> {
    let filter = VehicleFilter {
        brand_id: params.brand,
        model_id: params.model,
        status: params.status,
    };

    let vehicles = state
        .repos
        .vehicles()
        .find_all(&filter)
        .await
        .map_err(|e| internal(format!("Failed to list vehicles: {}", e)))?;

    let mut responses = Vec::with_capacity(vehicles.len());
    for vehicle in vehicles {
        responses.push(response_with_status(&state, vehicle).await?);
    }
    Ok(Json(ApiResponse::success(responses)))
}

pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<VehicleResponse>>, HandlerError> {
    match state.repos.vehicles().find_by_id(&id).await {
        Ok(Some(vehicle)) => Ok(Json(ApiResponse::success(
            response_with_status(&state, vehicle).await?,
        ))),
        Ok(None) => Err(not_found(format!("Vehicle {} not found", id))),
        Err(e) => Err(internal(format!("Failed to get vehicle: {}", e))),
    }
}

pub async fn create_vehicle(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleResponse>>), HandlerError> {
    match state.repos.brands().find_by_id(&req.brand_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Err(not_found(format!("Brand {} not found", req.brand_id))),
        Err(e) => return Err(internal(format!("Failed to get brand: {}", e))),
    }
    match state.repos.models().find_by_id(&req.model_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Err(not_found(format!("Model {} not found", req.model_id))),
        Err(e) => return Err(internal(format!("Failed to get model: {}", e))),
    }

    let external_id = req.external_id.filter(|id| !id.is_empty());
    let vehicle = state
        .repos
        .vehicles()
        .save(Vehicle::new(external_id, req.name, req.brand_id, req.model_id))
        .await
        .map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(format!("Failed to create vehicle: {}", e))),
            )
        })?;

    // inline initial status, defaults when omitted
    let (charge, token) = match req.status {
        Some(initial) => (
            initial.current_charge_level.unwrap_or(0.0),
            initial
                .status
                .unwrap_or_else(|| status_token::AVAILABLE.to_string())
                .to_lowercase(),
        ),
        None => (0.0, status_token::AVAILABLE.to_string()),
    };
    let status = state
        .repos
        .statuses()
        .save(VehicleStatus::new(&vehicle.id, charge, token))
        .await
        .map_err(|e| internal(format!("Failed to create vehicle status: {}", e)))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(VehicleResponse::from_parts(
            vehicle,
            Some(status),
        ))),
    ))
}

pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, HandlerError> {
    let existing = match state.repos.vehicles().find_by_id(&id).await {
        Ok(Some(v)) => v,
        Ok(None) => return Err(not_found(format!("Vehicle {} not found", id))),
        Err(e) => return Err(internal(format!("Failed to get vehicle: {}", e))),
    };

    let mut updated = existing;
    if let Some(external_id) = req.external_id {
        updated.external_id = (!external_id.is_empty()).then_some(external_id);
    }
    if let Some(name) = req.name {
        updated.name = name;
    }
    if let Some(brand_id) = req.brand_id {
        match state.repos.brands().find_by_id(&brand_id).await {
            Ok(Some(_)) => updated.brand_id = brand_id,
            Ok(None) => return Err(not_found(format!("Brand {} not found", brand_id))),
            Err(e) => return Err(internal(format!("Failed to get brand: {}", e))),
        }
    }
    if let Some(model_id) = req.model_id {
        match state.repos.models().find_by_id(&model_id).await {
            Ok(Some(_)) => updated.model_id = model_id,
            Ok(None) => return Err(not_found(format!("Model {} not found", model_id))),
            Err(e) => return Err(internal(format!("Failed to get model: {}", e))),
        }
    }

    state
        .repos
        .vehicles()
        .update(updated.clone())
        .await
        .map_err(|e| internal(format!("Failed to update vehicle: {}", e)))?;

    Ok(Json(ApiResponse::success(
        response_with_status(&state, updated).await?,
    )))
}

pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, HandlerError> {
    state
        .repos
        .statuses()
        .delete_for_vehicle(&id)
        .await
        .map_err(|e| internal(format!("Failed to delete vehicle status: {}", e)))?;

    match state.repos.vehicles().delete(&id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(not_found(format!("Failed to delete vehicle: {}", e))),
    }
}

/// Upsert the 1:1 status row of a vehicle.
pub async fn update_vehicle_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateVehicleStatusRequest>,
) -> Result<Json<ApiResponse<VehicleStatusDto>>, HandlerError> {
    match state.repos.vehicles().find_by_id(&id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Err(not_found(format!("Vehicle {} not found", id))),
        Err(e) => return Err(internal(format!("Failed to get vehicle: {}", e))),
    }

    let existing = state
        .repos
        .statuses()
        .find_by_vehicle(&id)
        .await
        .map_err(|e| internal(format!("Failed to get vehicle status: {}", e)))?;

    let saved = match existing {
        Some(mut status) => {
            if let Some(charge) = req.current_charge_level {
                status.current_charge_level = charge;
            }
            if let Some(token) = req.status {
                status.status = token.to_lowercase();
            }
            state
                .repos
                .statuses()
                .update(status.clone())
                .await
                .map_err(|e| internal(format!("Failed to update vehicle status: {}", e)))?;
            status
        }
        None => {
            let charge = req.current_charge_level.unwrap_or(0.0);
            let token = req
                .status
                .unwrap_or_else(|| status_token::AVAILABLE.to_string())
                .to_lowercase();
            state
                .repos
                .statuses()
                .save(VehicleStatus::new(&id, charge, token))
                .await
                .map_err(|e| internal(format!("Failed to create vehicle status: {}", e)))?
        }
    };

    Ok(Json(ApiResponse::success(saved.into())))
}
