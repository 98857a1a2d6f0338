//! # clockhubd — clockhub daemon
//!
//! Composition root that wires the device link and the API together and
//! starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize the `tracing` subscriber
//! - Construct the device link (real HTTP device or built-in simulation)
//! - Construct application services, injecting the link via the port trait
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use clockhub_adapter_device_http::HttpDeviceLink;
use clockhub_adapter_device_virtual::VirtualClockDevice;
use clockhub_adapter_http_axum::router;
use clockhub_adapter_http_axum::state::AppState;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "clockhubd listening");

    if config.device.virtual_enabled {
        tracing::info!("using the built-in virtual clock device");
        let app = router::build(AppState::new(VirtualClockDevice::default()));
        axum::serve(listener, app).await?;
    } else {
        tracing::info!(url = %config.device.url, "using the device at the configured url");
        let mut link = HttpDeviceLink::new(config.device.url.clone());
        if let (Some(username), Some(password)) = (&config.device.username, &config.device.password)
        {
            link = link.with_basic_auth(username.as_str(), password.as_str());
        }
        let app = router::build(AppState::new(link));
        axum::serve(listener, app).await?;
    }

    Ok(())
}
