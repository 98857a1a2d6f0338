//! Transport error type for the HTTP device link.

use clockhub_domain::error::{ClockHubError, DeviceError};

/// Failure talking to the device over HTTP.
#[derive(Debug, thiserror::Error)]
pub enum HttpLinkError {
    /// Transport-level failure: connect, timeout, or an unreadable body.
    #[error("device request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The device answered with a non-success status.
    #[error("device answered {0}")]
    Status(reqwest::StatusCode),
}

impl From<HttpLinkError> for ClockHubError {
    fn from(err: HttpLinkError) -> Self {
        Self::Device(DeviceError::new(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_flatten_status_errors_into_device_errors() {
        let err: ClockHubError = HttpLinkError::Status(reqwest::StatusCode::BAD_REQUEST).into();
        match err {
            ClockHubError::Device(device) => {
                assert_eq!(device.message, "device answered 400 Bad Request");
            }
            other => panic!("expected a device error, got {other:?}"),
        }
    }
}
