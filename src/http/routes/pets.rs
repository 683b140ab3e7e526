//! Pet endpoints
//!
//! The original interface read the delete id from the request body while
//! declaring a path parameter. Here delete keys off the path id alone and
//! takes no body.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::db::PetRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{ListParams, ListWindow, Pet};

/// Create pet request. Any client-supplied `id` is ignored; the database
/// assigns one.
#[derive(Deserialize)]
pub struct CreatePetRequest {
    pub name: String,
}

/// GET /pets - list pets within an offset/limit window
async fn list_pets(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Pet>>, ApiError> {
    let window = ListWindow::from(params);
    let pets = PetRepo::new(&state.pool).list(window).await?;
    Ok(Json(pets))
}

/// GET /pets/{id} - get a single pet
async fn get_pet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Pet>, ApiError> {
    let pet = PetRepo::new(&state.pool).get(id).await?;
    Ok(Json(pet))
}

/// POST /pets - create a pet
async fn create_pet(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePetRequest>,
) -> Result<(StatusCode, Json<Pet>), ApiError> {
    let pet = PetRepo::new(&state.pool).create(&req.name).await?;
    Ok((StatusCode::CREATED, Json(pet)))
}

/// PUT /pets - rename the pet identified by the body's id
async fn update_pet(
    State(state): State<Arc<AppState>>,
    Json(pet): Json<Pet>,
) -> Result<Json<Pet>, ApiError> {
    PetRepo::new(&state.pool).update(&pet).await?;
    Ok(Json(pet))
}

/// DELETE /pets/{id} - delete by path id
async fn delete_pet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    PetRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Pet routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/pets", get(list_pets).post(create_pet).put(update_pet))
        .route("/pets/{id}", get(get_pet).delete(delete_pet))
}
