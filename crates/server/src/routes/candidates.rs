use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use models::candidate;
use service::candidate::CandidateInput;
use service::errors::ServiceError;
use tracing::{error, info};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

/// List every candidate
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<candidate::Model>>, JsonApiError> {
    match state.service.list().await {
        Ok(list) => {
            info!(count = list.len(), "list candidates");
            Ok(Json(list))
        }
        Err(e) => {
            error!(err = %e, "list candidates failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "List Failed", Some(e.to_string())))
        }
    }
}

/// Fetch one candidate by id
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<candidate::Model>, StatusCode> {
    match state.service.get(id).await {
        Ok(m) => Ok(Json(m)),
        Err(ServiceError::NotFound(_)) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            error!(err = %e, "get candidate failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Create a candidate; the store assigns the id, any id in the body is ignored
pub async fn create(State(state): State<ServerState>, Json(input): Json<CandidateInput>) -> Response {
    match state.service.create(input).await {
        Ok(m) => {
            info!(id = m.id, "created candidate");
            let location = format!("/candidates/{}", m.id);
            (StatusCode::CREATED, [(header::LOCATION, location)], Json(m)).into_response()
        }
        Err(e @ ServiceError::Constraint(_)) => {
            JsonApiError::new(StatusCode::BAD_REQUEST, "Constraint Violation", Some(e.to_string()))
                .into_response()
        }
        Err(e) => {
            error!(err = %e, "create candidate failed");
            JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Create Failed", Some(e.to_string()))
                .into_response()
        }
    }
}

/// Full replace of the candidate at the path id; the body's id is discarded
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<CandidateInput>,
) -> Response {
    match state.service.update(id, input).await {
        Ok(()) => {
            info!(id, "updated candidate");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(e @ ServiceError::Constraint(_)) => {
            JsonApiError::new(StatusCode::BAD_REQUEST, "Constraint Violation", Some(e.to_string()))
                .into_response()
        }
        Err(e) => {
            error!(err = %e, "update candidate failed");
            JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Update Failed", Some(e.to_string()))
                .into_response()
        }
    }
}

/// Remove the candidate at the path id, echoing its final state
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Response {
    match state.service.delete(id).await {
        Ok(m) => {
            info!(id, "deleted candidate");
            Json(m).into_response()
        }
        Err(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            error!(err = %e, "delete candidate failed");
            JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Delete Failed", Some(e.to_string()))
                .into_response()
        }
    }
}
