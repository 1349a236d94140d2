//! Data models for the villa API.
//!
//! `VillaRecord` is the store shape; the DTOs are the JSON shapes exchanged with clients.

mod villa;

pub use villa::*;
