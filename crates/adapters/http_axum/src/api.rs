//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod clock;
#[allow(clippy::missing_errors_doc)]
pub mod config;
#[allow(clippy::missing_errors_doc)]
pub mod display;

use axum::Router;
use axum::routing::{get, post, put};

use clockhub_app::ports::DeviceLink;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<L>() -> Router<AppState<L>>
where
    L: DeviceLink + Send + Sync + 'static,
{
    Router::new()
        // Clock
        .route("/state", get(clock::state::<L>))
        .route("/clock", get(clock::now::<L>))
        .route("/date", put(clock::set_date::<L>))
        .route("/synchronize", post(clock::synchronize::<L>))
        // Display
        .route("/display", put(display::apply::<L>))
        // Configuration
        .route("/config/save", post(config::save::<L>))
}
