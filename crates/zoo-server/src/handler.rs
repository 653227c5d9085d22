use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::json;

use zoo_store::{AnimalStore, InMemoryAnimalStore, StoreError};
use zoo_types::{Animal, AnimalDraft, AnimalId};

use crate::error::{ApiError, ApiResult};

/// State shared by every handler: the injected store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AnimalStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn AnimalStore>) -> Self {
        Self { store }
    }

    /// State over a fresh [`InMemoryAnimalStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryAnimalStore::new()))
    }
}

/// A path id that does not parse cannot name a row, so it is reported the
/// same way as a missing one.
fn parse_id(raw: &str) -> ApiResult<AnimalId> {
    AnimalId::parse(raw).map_err(|_| ApiError::animal_not_found())
}

/// Decode a request body as JSON whatever its `Content-Type`.
fn decode_draft(body: &Bytes) -> ApiResult<AnimalDraft> {
    Ok(serde_json::from_slice(body)?)
}

/// `POST /animals`
pub async fn create_animal(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Animal>)> {
    let draft = decode_draft(&body)?;
    let id = state
        .store
        .insert(&draft)
        .await
        .map_err(ApiError::store("could not create animal"))?;
    tracing::info!(%id, name = %draft.name, "animal created");
    Ok((StatusCode::CREATED, Json(draft.into_animal(id))))
}

/// `GET /animals`
///
/// An empty table is reported as 404 rather than an empty array.
pub async fn list_animals(State(state): State<AppState>) -> ApiResult<Json<Vec<Animal>>> {
    let animals = state
        .store
        .fetch_all()
        .await
        .map_err(ApiError::store("could not fetch animals"))?;
    if animals.is_empty() {
        return Err(ApiError::NotFound("no animals found".into()));
    }
    Ok(Json(animals))
}

/// `GET /animals/:id`
///
/// Every lookup failure is answered with 404; storage failures are only
/// distinguished in the log.
pub async fn get_animal(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Animal>> {
    let id = parse_id(&raw_id)?;
    let animal = state.store.fetch_by_id(id).await.map_err(|err| {
        if let StoreError::Storage(detail) = &err {
            tracing::error!(%id, %detail, "could not fetch animal");
        }
        ApiError::animal_not_found()
    })?;
    Ok(Json(animal))
}

/// `PUT /animals/:id`
///
/// Replaces every field. The body is checked before the id.
pub async fn update_animal(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> ApiResult<StatusCode> {
    let draft = decode_draft(&body)?;
    let id = parse_id(&raw_id)?;
    state
        .store
        .update(id, &draft)
        .await
        .map_err(ApiError::store("could not update animal"))?;
    tracing::info!(%id, "animal updated");
    Ok(StatusCode::OK)
}

/// `DELETE /animals/:id`
pub async fn delete_animal(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    state
        .store
        .delete(id)
        .await
        .map_err(ApiError::store("could not delete animal"))?;
    tracing::info!(%id, "animal deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check handler. Reports 503 when the store cannot be reached.
pub async fn health_handler(State(state): State<AppState>) -> Response {
    let version = env!("CARGO_PKG_VERSION");
    match state.store.ping().await {
        Ok(()) => Json(HealthResponse { status: "ok", version }).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                    version,
                }),
            )
                .into_response()
        }
    }
}

/// Info handler.
pub async fn info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "anekazoo",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
