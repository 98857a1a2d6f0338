//! HTTP implementation of the device link port.

use std::future::Future;

use chrono::NaiveDateTime;

use clockhub_app::ports::DeviceLink;
use clockhub_domain::error::ClockHubError;
use clockhub_domain::scheme::ColorScheme;
use clockhub_domain::state::DeviceState;
use clockhub_domain::time;

use crate::error::HttpLinkError;

const STATE_PATH: &str = "get-state";
const SET_DATE_PATH: &str = "set-date";
// the device registers the endpoint without the "h"
const SYNCHRONIZE_PATH: &str = "syncronize";
const SET_DISPLAY_PATH: &str = "set-display";
const WRITE_CONFIG_PATH: &str = "write-config";

/// HTTP Basic credentials for the device's protected endpoints.
#[derive(Debug, Clone)]
struct Credentials {
    username: String,
    password: String,
}

/// Device link over the device's HTTP control endpoints.
#[derive(Debug, Clone)]
pub struct HttpDeviceLink {
    client: reqwest::Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl HttpDeviceLink {
    /// Create a link to the device at `base_url` (scheme + host, no trailing
    /// slash required).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
            credentials: None,
        }
    }

    /// Attach HTTP Basic credentials for the device's protected endpoints.
    #[must_use]
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let builder = self.client.post(self.url(path));
        match &self.credentials {
            Some(credentials) => {
                builder.basic_auth(&credentials.username, Some(&credentials.password))
            }
            None => builder,
        }
    }

    fn accepted(response: reqwest::Response) -> Result<reqwest::Response, HttpLinkError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(HttpLinkError::Status(response.status()))
        }
    }

    async fn get_state(&self) -> Result<DeviceState, HttpLinkError> {
        let response = self.client.get(self.url(STATE_PATH)).send().await?;
        let state = Self::accepted(response)?.json::<DeviceState>().await?;
        tracing::debug!(date = %state.date, "device state fetched");
        Ok(state)
    }

    async fn post_form(
        &self,
        path: &str,
        form: &[(&str, String)],
    ) -> Result<(), HttpLinkError> {
        let response = self.post(path).form(form).send().await?;
        Self::accepted(response)?;
        tracing::debug!(path, "device accepted request");
        Ok(())
    }

    async fn post_empty(&self, path: &str) -> Result<(), HttpLinkError> {
        let response = self.post(path).send().await?;
        Self::accepted(response)?;
        tracing::debug!(path, "device accepted request");
        Ok(())
    }
}

impl DeviceLink for HttpDeviceLink {
    fn fetch_state(&self) -> impl Future<Output = Result<DeviceState, ClockHubError>> + Send {
        async { self.get_state().await.map_err(Into::into) }
    }

    fn set_date(
        &self,
        instant: NaiveDateTime,
    ) -> impl Future<Output = Result<(), ClockHubError>> + Send {
        async move {
            self.post_form(SET_DATE_PATH, &[("date", time::encode(&instant))])
                .await
                .map_err(Into::into)
        }
    }

    fn synchronize(&self) -> impl Future<Output = Result<(), ClockHubError>> + Send {
        async { self.post_empty(SYNCHRONIZE_PATH).await.map_err(Into::into) }
    }

    fn set_display(
        &self,
        brightness: u8,
        colors: ColorScheme,
    ) -> impl Future<Output = Result<(), ClockHubError>> + Send {
        async move {
            self.post_form(
                SET_DISPLAY_PATH,
                &[
                    ("brightness", brightness.to_string()),
                    ("colors", colors.to_string()),
                ],
            )
            .await
            .map_err(Into::into)
        }
    }

    fn save_config(&self) -> impl Future<Output = Result<(), ClockHubError>> + Send {
        async { self.post_empty(WRITE_CONFIG_PATH).await.map_err(Into::into) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_join_paths_without_doubling_slashes() {
        let link = HttpDeviceLink::new("http://192.168.0.83/");
        assert_eq!(link.url("get-state"), "http://192.168.0.83/get-state");

        let link = HttpDeviceLink::new("http://hallclock.local");
        assert_eq!(link.url("set-date"), "http://hallclock.local/set-date");
    }

    #[test]
    fn should_keep_credentials_after_builder_chain() {
        let link = HttpDeviceLink::new("http://hallclock.local").with_basic_auth("admin", "secret");
        assert!(link.credentials.is_some());
    }
}
