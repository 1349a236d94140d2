//! In-process villa store backed by an ordered list.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{not_found, VillaStore};
use crate::errors::AppError;
use crate::models::{NewVilla, VillaRecord};

/// Villa store holding its records in memory, in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryVillaStore {
    villas: RwLock<Vec<VillaRecord>>,
}

impl InMemoryVillaStore {
    /// A store holding the two starter villas.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let seed = |id: i64, name: &str, occupancy: i32| VillaRecord {
            id,
            name: name.to_string(),
            details: None,
            rate: 0.0,
            occupancy,
            sqft: 100,
            image_url: None,
            amenity: None,
            created_at: now,
            updated_at: now,
        };

        Self {
            villas: RwLock::new(vec![seed(1, "Pool View", 4), seed(2, "Beach View", 3)]),
        }
    }
}

#[async_trait]
impl VillaStore for InMemoryVillaStore {
    async fn list_all(&self) -> Result<Vec<VillaRecord>, AppError> {
        Ok(self.villas.read().await.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<VillaRecord>, AppError> {
        let villas = self.villas.read().await;
        Ok(villas.iter().find(|v| v.id == id).cloned())
    }

    async fn create(&self, villa: NewVilla) -> Result<VillaRecord, AppError> {
        let mut villas = self.villas.write().await;
        let id = villas.iter().map(|v| v.id).max().unwrap_or(0) + 1;
        let now = Utc::now();

        let record = VillaRecord {
            id,
            name: villa.name,
            details: villa.details,
            rate: villa.rate,
            occupancy: villa.occupancy,
            sqft: villa.sqft,
            image_url: villa.image_url,
            amenity: villa.amenity,
            created_at: now,
            updated_at: now,
        };
        villas.push(record.clone());

        Ok(record)
    }

    async fn update(&self, id: i64, villa: NewVilla) -> Result<VillaRecord, AppError> {
        let mut villas = self.villas.write().await;
        let existing = villas
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| not_found(id))?;

        existing.name = villa.name;
        existing.details = villa.details;
        existing.rate = villa.rate;
        existing.occupancy = villa.occupancy;
        existing.sqft = villa.sqft;
        existing.image_url = villa.image_url;
        existing.amenity = villa.amenity;
        existing.updated_at = Utc::now();

        Ok(existing.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut villas = self.villas.write().await;
        let index = villas
            .iter()
            .position(|v| v.id == id)
            .ok_or_else(|| not_found(id))?;

        villas.remove(index);
        Ok(())
    }

    async fn find_by_name_case_insensitive(
        &self,
        name: &str,
    ) -> Result<Option<VillaRecord>, AppError> {
        let wanted = name.to_lowercase();
        let villas = self.villas.read().await;
        Ok(villas
            .iter()
            .find(|v| v.name.to_lowercase() == wanted)
            .cloned())
    }
}
