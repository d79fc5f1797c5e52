use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use werewolf_core::{DomainError, ok_payload, success_payload};
use werewolf_game::RoomStore;

use crate::errors::ApiError;
use crate::extract::ValidatedJson;

/// Shared state for room route handlers
#[derive(Clone)]
pub struct RoomsState {
    pub store: RoomStore,
    pub min_seats: u32,
    pub max_seats: u32,
}

pub fn router(state: RoomsState) -> Router {
    Router::new()
        .route("/rooms", get(list_rooms).post(create_room))
        .route("/rooms/{room_id}", delete(delete_room))
        .route("/rooms/{room_id}/join", post(join_room))
        .route("/rooms/{room_id}/leave", post(leave_room))
        .route("/rooms/{room_id}/start", post(start_game))
        .with_state(state)
}

fn room_not_found(room_id: &str) -> DomainError {
    DomainError::not_found("ROOM_NOT_FOUND", format!("room {room_id} not found"))
}

/// Handle `GET /rooms`
async fn list_rooms(State(state): State<RoomsState>) -> Result<Json<Value>, ApiError> {
    let rooms = state.store.list();
    Ok(Json(success_payload(serde_json::to_value(rooms)?)))
}

#[derive(Debug, Deserialize)]
struct CreateRoomBody {
    #[serde(default)]
    seats: Option<u32>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    fill_ai: bool,
    #[serde(default)]
    owner_id: Option<String>,
}

/// Handle `POST /rooms`
async fn create_room(
    State(state): State<RoomsState>,
    ValidatedJson(body): ValidatedJson<CreateRoomBody>,
) -> Result<Json<Value>, ApiError> {
    let Some(seats) = body.seats else {
        return Err(DomainError::validation("seats required").into());
    };
    if !(state.min_seats..=state.max_seats).contains(&seats) {
        return Err(DomainError::validation(format!(
            "invalid seats: must be between {} and {}",
            state.min_seats, state.max_seats
        ))
        .into());
    }

    let room = state.store.create(seats, body.fill_ai, body.name, body.owner_id);
    tracing::info!(room_id = %room.id, seats, "room created");

    Ok(Json(success_payload(serde_json::to_value(room)?)))
}

/// Handle `DELETE /rooms/{room_id}`
async fn delete_room(
    State(state): State<RoomsState>,
    Path(room_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if state.store.delete(&room_id) {
        Ok(Json(ok_payload()))
    } else {
        Err(room_not_found(&room_id).into())
    }
}

#[derive(Debug, Deserialize)]
struct JoinRoomBody {
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default)]
    seat: Option<u32>,
}

/// Handle `POST /rooms/{room_id}/join`
async fn join_room(
    State(state): State<RoomsState>,
    Path(room_id): Path<String>,
    ValidatedJson(body): ValidatedJson<JoinRoomBody>,
) -> Result<Json<Value>, ApiError> {
    let user_id = body.user_id.filter(|id| !id.is_empty());
    let Some(user_id) = user_id else {
        return Err(DomainError::validation("user_id required").into());
    };

    let room = state
        .store
        .join(&room_id, &user_id, body.seat)
        .ok_or_else(|| room_not_found(&room_id))?;

    Ok(Json(success_payload(serde_json::to_value(room)?)))
}

#[derive(Debug, Deserialize)]
struct LeaveRoomBody {
    #[serde(default)]
    user_id: Option<String>,
}

/// Handle `POST /rooms/{room_id}/leave`
async fn leave_room(
    State(state): State<RoomsState>,
    Path(room_id): Path<String>,
    ValidatedJson(body): ValidatedJson<LeaveRoomBody>,
) -> Result<Json<Value>, ApiError> {
    let user_id = body.user_id.filter(|id| !id.is_empty());
    let Some(user_id) = user_id else {
        return Err(DomainError::validation("user_id required").into());
    };

    let room = state
        .store
        .leave(&room_id, &user_id)
        .ok_or_else(|| room_not_found(&room_id))?;

    Ok(Json(success_payload(serde_json::to_value(room)?)))
}

/// Handle `POST /rooms/{room_id}/start`
async fn start_game(
    State(state): State<RoomsState>,
    Path(room_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let game_id = state
        .store
        .start_game(&room_id)
        .ok_or_else(|| room_not_found(&room_id))?;

    tracing::info!(room_id = %room_id, game_id = %game_id, "game started");

    Ok(Json(success_payload(json!({"game_id": game_id}))))
}
