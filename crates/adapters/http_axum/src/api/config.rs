//! JSON handlers for device configuration persistence.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use clockhub_app::ports::DeviceLink;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the save endpoint.
pub enum SaveResponse {
    NoContent,
}

impl IntoResponse for SaveResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `POST /api/config/save` — persist current settings on the device.
pub async fn save<L>(State(state): State<AppState<L>>) -> Result<SaveResponse, ApiError>
where
    L: DeviceLink + Send + Sync + 'static,
{
    state.display_service.save().await?;
    Ok(SaveResponse::NoContent)
}
