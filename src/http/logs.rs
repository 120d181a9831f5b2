//! Controller log APIs: list history and record samples.

use crate::{
  app::AppState,
  http::error::ApiError,
  models::{
    log::controller_state::ControllerState,
    request::log_query::LogQuery,
    response::{LogList, SavedLog},
  },
};
use axum::{
  Json,
  extract::{
    Query, State,
    rejection::{JsonRejection, QueryRejection},
  },
};
use tracing::{debug, warn};

pub async fn list_logs(State(state): State<AppState>) -> Result<Json<LogList>, ApiError> {
  let data = state.store.list().await?;
  Ok(Json(LogList {
    message: "success",
    data,
  }))
}

/// Record a sample sent as query parameters.
///
/// Embedded clients can only issue plain GETs, so this write stays on GET.
pub async fn create_log_query(
  State(state): State<AppState>,
  query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<SavedLog>, ApiError> {
  let Query(pairs) = query.map_err(|rejection| {
    warn!("rejected /log-get query: {rejection}");
    ApiError::InvalidJoystick
  })?;
  let query = LogQuery::from_pairs(pairs);
  let Some(sample) = query.coerce() else {
    warn!(
      "rejected /log-get sample: joystick_x={:?} joystick_y={:?}",
      query.joystick_x, query.joystick_y
    );
    return Err(ApiError::InvalidJoystick);
  };
  let id = state.store.insert(&sample).await?;
  debug!("stored log {id} via GET");
  Ok(Json(SavedLog {
    message: "Log saved successfully via GET!",
    id,
  }))
}

/// Record a sample sent as a strictly typed JSON body.
pub async fn create_log_json(
  State(state): State<AppState>,
  payload: Result<Json<ControllerState>, JsonRejection>,
) -> Result<Json<SavedLog>, ApiError> {
  let Json(sample) = payload.map_err(|rejection| {
    warn!("rejected /log payload: {rejection}");
    ApiError::InvalidPayload
  })?;
  let id = state.store.insert(&sample).await?;
  debug!("stored log {id} via POST");
  Ok(Json(SavedLog {
    message: "Log saved successfully!",
    id,
  }))
}
