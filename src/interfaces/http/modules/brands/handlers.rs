//! Brand REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::super::AppState;
use super::dto::{BrandResponse, CreateBrandRequest, UpdateBrandRequest};
use crate::domain::Brand;
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};

pub async fn list_brands(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<BrandResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.brands().find_all().await {
        Ok(brands) => {
            let responses: Vec<BrandResponse> = brands.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to list brands: {}", e))),
        )),
    }
}

pub async fn get_brand(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<BrandResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.brands().find_by_id(&id).await {
        Ok(Some(brand)) => Ok(Json(ApiResponse::success(brand.into()))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Brand {} not found", id))),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to get brand: {}", e))),
        )),
    }
}

pub async fn create_brand(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateBrandRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BrandResponse>>), (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.brands().save(Brand::new(req.name)).await {
        Ok(saved) => Ok((StatusCode::CREATED, Json(ApiResponse::success(saved.into())))),
        Err(e) => Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format!("Failed to create brand: {}", e))),
        )),
    }
}

pub async fn update_brand(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateBrandRequest>,
) -> Result<Json<ApiResponse<BrandResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let existing = match state.repos.brands().find_by_id(&id).await {
        Ok(Some(b)) => b,
        Ok(None) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(format!("Brand {} not found", id))),
            ));
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Failed to get brand: {}", e))),
            ));
        }
    };

    let mut updated = existing;
    if let Some(name) = req.name {
        updated.name = name;
    }

    match state.repos.brands().update(updated.clone()).await {
        Ok(()) => Ok(Json(ApiResponse::success(updated.into()))),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to update brand: {}", e))),
        )),
    }
}

pub async fn delete_brand(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.brands().delete(&id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Failed to delete brand: {}", e))),
        )),
    }
}
