//! # clockhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **`DeviceLink` port** that device adapters implement
//!   (driven/outbound port): read state, set the clock, trigger NTP resync,
//!   drive the display, persist settings
//! - Provide **use-case services** on top of the port:
//!   - `ClockService` — refresh state, steer the device clock, project a
//!     ticking "device now" between reads
//!   - `DisplayService` — apply and persist display settings
//! - Orchestrate domain objects without knowing *how* the device is reached
//!
//! ## Dependency rule
//! Depends on `clockhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
