//! JSON handlers for the device display.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use clockhub_app::ports::DeviceLink;
use clockhub_domain::scheme::ColorScheme;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for applying display settings.
#[derive(Deserialize)]
pub struct ApplyDisplayRequest {
    /// Brightness on the panel's full 8-bit scale.
    pub brightness: u8,
    /// Color scheme as 30 hexadecimal digits.
    pub colors: String,
}

/// Possible responses from the apply endpoint.
pub enum ApplyResponse {
    NoContent,
}

impl IntoResponse for ApplyResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `PUT /api/display` — apply brightness and color scheme.
pub async fn apply<L>(
    State(state): State<AppState<L>>,
    Json(req): Json<ApplyDisplayRequest>,
) -> Result<ApplyResponse, ApiError>
where
    L: DeviceLink + Send + Sync + 'static,
{
    let colors: ColorScheme = req.colors.parse().map_err(ApiError::from)?;
    state.display_service.apply(req.brightness, colors).await?;
    Ok(ApplyResponse::NoContent)
}
