use absence_core::{
    errors::AbsenceError,
    models::slot::{
        CreateSlotBySessionRequest, CreateSlotRequest, DeleteManyResponse, Slot,
        SlotWithDetails, UpdateSlotRequest,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn get_slots(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Slot>>, AppError> {
    let slots = state.slots.get_all().await?;
    Ok(Json(slots))
}

#[axum::debug_handler]
pub async fn get_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<Json<Slot>, AppError> {
    let slot = state
        .slots
        .get(id)
        .await?
        .ok_or_else(|| AbsenceError::NotFound(format!("Slot with ID {} not found", id)))?;

    Ok(Json(slot))
}

#[axum::debug_handler]
pub async fn get_slots_by_date(
    State(state): State<Arc<ApiState>>,
    Path(date): Path<String>,
) -> Result<Json<Vec<SlotWithDetails>>, AppError> {
    let slots = state.slots.get_all_by_date(&date).await?;
    Ok(Json(slots))
}

#[axum::debug_handler]
pub async fn create_slot(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateSlotRequest>,
) -> Result<(StatusCode, Json<Slot>), AppError> {
    let slot = state.slots.post(payload).await?;
    Ok((StatusCode::CREATED, Json(slot)))
}

#[axum::debug_handler]
pub async fn create_slot_by_session(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateSlotBySessionRequest>,
) -> Result<(StatusCode, Json<Slot>), AppError> {
    let slot = state.slots.post_by_session_name(payload).await?;
    Ok((StatusCode::CREATED, Json(slot)))
}

#[axum::debug_handler]
pub async fn update_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSlotRequest>,
) -> Result<Json<Slot>, AppError> {
    let slot = state.slots.put(id, payload).await?;
    Ok(Json(slot))
}

#[axum::debug_handler]
pub async fn delete_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<Json<Slot>, AppError> {
    let slot = state.slots.delete(id).await?;
    Ok(Json(slot))
}

#[axum::debug_handler]
pub async fn delete_slots(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<DeleteManyResponse>, AppError> {
    let response = state.slots.delete_many().await?;
    Ok(Json(response))
}
