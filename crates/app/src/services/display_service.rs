//! Display service — use-cases for the device display settings.

use std::sync::Arc;

use clockhub_domain::error::ClockHubError;
use clockhub_domain::scheme::ColorScheme;

use crate::ports::DeviceLink;

/// Application service for driving the device display.
pub struct DisplayService<L> {
    link: Arc<L>,
}

impl<L: DeviceLink> DisplayService<L> {
    /// Create a new service talking through the given device link.
    pub fn new(link: Arc<L>) -> Self {
        Self { link }
    }

    /// Apply brightness and color scheme to the display.
    ///
    /// The settings take effect immediately but are not persisted; call
    /// [`save`](Self::save) to survive a device power cycle.
    ///
    /// # Errors
    ///
    /// Returns [`ClockHubError::Device`] when the device cannot be reached or
    /// rejects the settings.
    #[tracing::instrument(skip(self, colors), fields(colors = %colors))]
    pub async fn apply(&self, brightness: u8, colors: ColorScheme) -> Result<(), ClockHubError> {
        self.link.set_display(brightness, colors).await?;
        tracing::info!(brightness, "display settings applied");
        Ok(())
    }

    /// Persist the device's current settings to its non-volatile storage.
    ///
    /// # Errors
    ///
    /// Returns [`ClockHubError::Device`] when the device cannot be reached or
    /// the write fails.
    #[tracing::instrument(skip(self))]
    pub async fn save(&self) -> Result<(), ClockHubError> {
        self.link.save_config().await?;
        tracing::info!("device settings persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::NaiveDateTime;

    use clockhub_domain::error::DeviceError;
    use clockhub_domain::scheme::Rgb;
    use clockhub_domain::state::DeviceState;

    #[derive(Default)]
    struct RecordingLink {
        applied: Mutex<Vec<(u8, ColorScheme)>>,
        save_calls: AtomicUsize,
        fail: bool,
    }

    impl DeviceLink for RecordingLink {
        fn fetch_state(
            &self,
        ) -> impl Future<Output = Result<DeviceState, ClockHubError>> + Send {
            async { Err(DeviceError::new("not used in these tests").into()) }
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
            brightness: u8,
            colors: ColorScheme,
        ) -> impl Future<Output = Result<(), ClockHubError>> + Send {
            let result = if self.fail {
                Err(DeviceError::new("display update rejected").into())
            } else {
                self.applied.lock().unwrap().push((brightness, colors));
                Ok(())
            };
            async { result }
        }

        fn save_config(&self) -> impl Future<Output = Result<(), ClockHubError>> + Send {
            self.save_calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(()) }
        }
    }

    fn scheme() -> ColorScheme {
        ColorScheme::new([
            Rgb::new(0x080822),
            Rgb::new(0x000044),
            Rgb::new(0x3333AA),
            Rgb::new(0xFF0000),
            Rgb::new(0x001100),
        ])
    }

    #[tokio::test]
    async fn should_push_display_settings_to_the_device() {
        let link = Arc::new(RecordingLink::default());
        let service = DisplayService::new(Arc::clone(&link));

        service.apply(120, scheme()).await.unwrap();

        assert_eq!(*link.applied.lock().unwrap(), vec![(120, scheme())]);
    }

    #[tokio::test]
    async fn should_request_config_persistence() {
        let link = Arc::new(RecordingLink::default());
        let service = DisplayService::new(Arc::clone(&link));

        service.save().await.unwrap();

        assert_eq!(link.save_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_propagate_device_rejection() {
        let link = Arc::new(RecordingLink {
            fail: true,
            ..RecordingLink::default()
        });
        let service = DisplayService::new(link);

        let err = service.apply(120, scheme()).await.unwrap_err();
        assert!(matches!(err, ClockHubError::Device(_)));
    }
}
