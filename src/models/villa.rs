//! Villa models: the stored record and the wire DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A villa as held by a store.
#[derive(Debug, Clone, PartialEq)]
pub struct VillaRecord {
    pub id: i64,
    pub name: String,
    pub details: Option<String>,
    pub rate: f64,
    pub occupancy: i32,
    pub sqft: i32,
    pub image_url: Option<String>,
    pub amenity: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The mutable fields of a villa, as accepted by a store for create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVilla {
    pub name: String,
    pub details: Option<String>,
    pub rate: f64,
    pub occupancy: i32,
    pub sqft: i32,
    pub image_url: Option<String>,
    pub amenity: Option<String>,
}

/// Villa as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VillaDto {
    pub id: i64,
    pub name: String,
    pub details: Option<String>,
    pub rate: f64,
    pub occupancy: i32,
    pub sqft: i32,
    pub image_url: Option<String>,
    pub amenity: Option<String>,
}

/// Request body for creating a villa.
///
/// `id` is accepted only so that a client-supplied id can be detected and refused.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VillaCreateDto {
    #[serde(default)]
    pub id: i64,
    #[validate(
        required(message = "Name is required"),
        length(
            min = 7,
            max = 30,
            message = "Name must be between 7 and 30 characters"
        )
    )]
    pub name: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub occupancy: i32,
    #[serde(default)]
    pub sqft: i32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub amenity: Option<String>,
}

/// Request body for replacing a villa, and the document JSON patches are applied to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VillaUpdateDto {
    pub id: i64,
    #[validate(
        required(message = "Name is required"),
        length(
            min = 7,
            max = 30,
            message = "Name must be between 7 and 30 characters"
        )
    )]
    pub name: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub occupancy: i32,
    #[serde(default)]
    pub sqft: i32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub amenity: Option<String>,
}
