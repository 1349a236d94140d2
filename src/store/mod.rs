//! Villa record storage.
//!
//! `VillaStore` is the contract the controller works against. `db::SqliteVillaStore` persists to
//! SQLite; `InMemoryVillaStore` keeps an ordered list for the lifetime of the process.

mod memory;

pub use memory::*;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{NewVilla, VillaRecord};

/// Storage for villa records.
///
/// Ids are assigned on `create` as one past the highest id held, or `1` for an empty store.
#[async_trait]
pub trait VillaStore: Send + Sync {
    /// All villas in id order.
    async fn list_all(&self) -> Result<Vec<VillaRecord>, AppError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<VillaRecord>, AppError>;

    /// Store a new villa and return it with its assigned id.
    async fn create(&self, villa: NewVilla) -> Result<VillaRecord, AppError>;

    /// Replace the mutable fields of villa `id`. Fails with `NotFound` if it does not exist.
    async fn update(&self, id: i64, villa: NewVilla) -> Result<VillaRecord, AppError>;

    /// Remove villa `id`. Fails with `NotFound` if it does not exist.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    async fn find_by_name_case_insensitive(
        &self,
        name: &str,
    ) -> Result<Option<VillaRecord>, AppError>;
}

pub(crate) fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Villa {} not found", id))
}
