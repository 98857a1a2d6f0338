//! # clockhub-adapter-device-http
//!
//! Device link adapter for a real clock device on the network.
//!
//! The device exposes a handful of plain HTTP endpoints: a JSON state
//! document behind `GET /get-state` and form-encoded mutations behind
//! `POST /set-date`, `POST /syncronize`, `POST /set-display` and
//! `POST /write-config`. Mutating endpoints sit behind HTTP Basic auth.
//!
//! ## Dependency rule
//!
//! Depends on `clockhub-app` (port trait) and `clockhub-domain`. Never leaks
//! `reqwest` types past this crate; transport failures are flattened into
//! the domain's device error.

mod error;
mod link;

pub use error::HttpLinkError;
pub use link::HttpDeviceLink;
