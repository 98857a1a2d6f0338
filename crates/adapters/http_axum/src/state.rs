//! Shared application state for axum handlers.

use std::sync::Arc;

use clockhub_app::ports::DeviceLink;
use clockhub_app::services::clock_service::ClockService;
use clockhub_app::services::display_service::DisplayService;

/// Application state shared across all axum handlers.
///
/// Generic over the device link type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the link itself does not need to be `Clone` —
/// only the `Arc` wrappers are cloned.
pub struct AppState<L> {
    /// Clock use-cases (state refresh, date steering, projection).
    pub clock_service: Arc<ClockService<L>>,
    /// Display use-cases (apply and persist settings).
    pub display_service: Arc<DisplayService<L>>,
}

impl<L> Clone for AppState<L> {
    fn clone(&self) -> Self {
        Self {
            clock_service: Arc::clone(&self.clock_service),
            display_service: Arc::clone(&self.display_service),
        }
    }
}

impl<L> AppState<L>
where
    L: DeviceLink + Send + Sync + 'static,
{
    /// Wire both services onto a single device link.
    pub fn new(link: L) -> Self {
        let link = Arc::new(link);
        Self {
            clock_service: Arc::new(ClockService::new(Arc::clone(&link))),
            display_service: Arc::new(DisplayService::new(link)),
        }
    }
}
