//! Vehicle model REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::super::AppState;
use super::dto::{parse_powertrain, CreateModelRequest, ModelResponse, UpdateModelRequest};
use crate::domain::VehicleModel;
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};

pub async fn list_models(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ModelResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.models().find_all().await {
        Ok(models) => {
            let responses: Vec<ModelResponse> = models.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to list models: {}", e))),
        )),
    }
}

pub async fn get_model(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ModelResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.models().find_by_id(&id).await {
        Ok(Some(model)) => Ok(Json(ApiResponse::success(model.into()))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Model {} not found", id))),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to get model: {}", e))),
        )),
    }
}

pub async fn create_model(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateModelRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ModelResponse>>), (StatusCode, Json<ApiResponse<()>>)> {
    // the owning brand must exist
    match state.repos.brands().find_by_id(&req.brand_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(format!(
                    "Brand {} not found",
                    req.brand_id
                ))),
            ));
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Failed to get brand: {}", e))),
            ));
        }
    }

    let powertrain = parse_powertrain(req.powertrain.as_deref().unwrap_or("BEV"));
    let model = VehicleModel::new(
        req.name,
        req.brand_id,
        req.battery_capacity,
        req.average_consumption,
        req.emission_gco2,
        powertrain,
    );

    match state.repos.models().save(model).await {
        Ok(saved) => Ok((StatusCode::CREATED, Json(ApiResponse::success(saved.into())))),
        Err(e) => Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format!("Failed to create model: {}", e))),
        )),
    }
}

pub async fn update_model(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateModelRequest>,
) -> Result<Json<ApiResponse<ModelResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let existing = match state.repos.models().find_by_id(&id).await {
        Ok(Some(m)) => m,
        Ok(None) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(format!("Model {} not found", id))),
            ));
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Failed to get model: {}", e))),
            ));
        }
    };

    let mut updated = existing;
    if let Some(name) = req.name {
        updated.name = name;
    }
    if let Some(battery_capacity) = req.battery_capacity {
        updated.battery_capacity = battery_capacity;
    }
    if let Some(average_consumption) = req.average_consumption {
        updated.average_consumption = average_consumption;
    }
    if let Some(emission_gco2) = req.emission_gco2 {
        updated.emission_gco2 = emission_gco2;
    }
    if let Some(powertrain) = req.powertrain.as_deref() {
        updated.powertrain = parse_powertrain(powertrain);
    }

    match state.repos.models().update(updated.clone()).await {
        Ok(()) => Ok(Json(ApiResponse::success(updated.into()))),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to update model: {}", e))),
        )),
    }
}

pub async fn delete_model(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.models().delete(&id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Failed to delete model: {}", e))),
        )),
    }
}
