//! # clockhub-domain
//!
//! Pure domain model for the clockhub device control system.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, device timestamps
//! - Define the **timestamp token codec** used on every date exchange with
//!   the device (`YYYYMMDDTHHMMSSZ`)
//! - Define the **device state document** (clock, NTP, display settings)
//! - Define the **display color scheme** and its wire encoding
//! - Define the **device clock projection** that keeps a ticking view of the
//!   device time between state reads
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod clock;
pub mod scheme;
pub mod state;
