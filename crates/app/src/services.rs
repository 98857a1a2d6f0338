//! Application services — one per device concern.

pub mod clock_service;
pub mod display_service;

pub use clock_service::ClockService;
pub use display_service::DisplayService;
