//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use clockhub_app::ports::DeviceLink;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the JSON API under `/api`. Includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<L>(state: AppState<L>) -> Router
where
    L: DeviceLink + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::NaiveDateTime;
    use tower::ServiceExt;

    use clockhub_domain::error::{ClockHubError, DeviceError};
    use clockhub_domain::scheme::ColorScheme;
    use clockhub_domain::state::DeviceState;

    struct StubLink;

    impl DeviceLink for StubLink {
        fn fetch_state(
            &self,
        ) -> impl Future<Output = Result<DeviceState, ClockHubError>> + Send {
            async { Err(DeviceError::new("stub").into()) }
        }

        fn set_date(
            &self,
            _instant: NaiveDateTime,
        ) -> impl Future<Output = Result<(), ClockHubError>> + Send {
            async { Ok(()) }
        }

        fn synchronize(&self) -> impl Future<Output = Result<(), ClockHubError>> + Send {
            async { Ok(()) }
        }

        fn set_display(
            &self,
            _brightness: u8,
            _colors: ColorScheme,
        ) -> impl Future<Output = Result<(), ClockHubError>> + Send {
            async { Ok(()) }
        }

        fn save_config(&self) -> impl Future<Output = Result<(), ClockHubError>> + Send {
            async { Ok(()) }
        }
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(AppState::new(StubLink));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_map_device_failures_to_bad_gateway() {
        let app = build(AppState::new(StubLink));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/state")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
