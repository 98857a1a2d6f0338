//! JSON handlers for the device clock.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use clockhub_app::ports::DeviceLink;
use clockhub_domain::error::ValidationError;
use clockhub_domain::state::DeviceState;
use clockhub_domain::time::{self, DeviceTime};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for setting the device date.
#[derive(Deserialize)]
pub struct SetDateRequest {
    /// Wall-clock instant as a device token (`YYYYMMDDTHHMMSSZ`).
    pub date: String,
}

/// Body returned by the projected-clock endpoint.
#[derive(Serialize)]
pub struct ClockBody {
    /// Projected current device time as a device token.
    pub date: DeviceTime,
}

/// Possible responses from the state endpoint.
pub enum StateResponse {
    Ok(Json<DeviceState>),
}

impl IntoResponse for StateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the projected-clock endpoint.
pub enum NowResponse {
    Ok(Json<ClockBody>),
}

impl IntoResponse for NowResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the set-date endpoint.
pub enum SetDateResponse {
    NoContent,
}

impl IntoResponse for SetDateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/state` — refresh from the device and return its state document.
pub async fn state<L>(State(state): State<AppState<L>>) -> Result<StateResponse, ApiError>
where
    L: DeviceLink + Send + Sync + 'static,
{
    let document = state.clock_service.refresh().await?;
    Ok(StateResponse::Ok(Json(document)))
}

/// `GET /api/clock` — projected current device time.
///
/// Falls back to a device read when no projection anchor exists yet.
pub async fn now<L>(State(state): State<AppState<L>>) -> Result<NowResponse, ApiError>
where
    L: DeviceLink + Send + Sync + 'static,
{
    if let Some(instant) = state.clock_service.device_now() {
        return Ok(NowResponse::Ok(Json(ClockBody {
            date: DeviceTime(instant),
        })));
    }

    let document = state.clock_service.refresh().await?;
    Ok(NowResponse::Ok(Json(ClockBody {
        date: document.date,
    })))
}

/// `PUT /api/date` — set the device wall clock.
pub async fn set_date<L>(
    State(state): State<AppState<L>>,
    Json(req): Json<SetDateRequest>,
) -> Result<SetDateResponse, ApiError>
where
    L: DeviceLink + Send + Sync + 'static,
{
    let instant = time::decode(&req.date).ok_or(ValidationError::InvalidTimestamp)?;
    state.clock_service.set_date(instant).await?;
    Ok(SetDateResponse::NoContent)
}

/// `POST /api/synchronize` — trigger NTP resync and return the refreshed
/// state document.
pub async fn synchronize<L>(State(state): State<AppState<L>>) -> Result<StateResponse, ApiError>
where
    L: DeviceLink + Send + Sync + 'static,
{
    let document = state.clock_service.synchronize().await?;
    Ok(StateResponse::Ok(Json(document)))
}
