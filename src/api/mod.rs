//! REST API module.
//!
//! Handlers extract path and body, delegate to the villa controller and translate the outcome
//! into status codes. Errors render through `AppError`'s `IntoResponse`.

mod villas;

pub use villas::*;
