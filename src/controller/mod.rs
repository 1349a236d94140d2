//! Villa resource controller.
//!
//! Each operation validates its input, consults the store, maps between record and DTO shapes,
//! and logs the outcome. HTTP concerns stay in `api`.

use std::sync::Arc;

use json_patch::Patch;

use crate::errors::AppError;
use crate::mapping::{create_dto_to_new, record_to_dto, record_to_update_dto, update_dto_to_new};
use crate::models::{VillaCreateDto, VillaDto, VillaUpdateDto};
use crate::patch::apply_patch;
use crate::store::{not_found, VillaStore};
use crate::validation::{
    check_fields, check_ids_match, check_new_id, check_path_id, check_unique_name,
};

#[derive(Clone)]
pub struct VillaController {
    store: Arc<dyn VillaStore>,
}

impl VillaController {
    pub fn new(store: Arc<dyn VillaStore>) -> Self {
        Self { store }
    }

    /// All villas.
    pub async fn list(&self) -> Result<Vec<VillaDto>, AppError> {
        let result = self
            .store
            .list_all()
            .await
            .map(|villas| villas.iter().map(record_to_dto).collect::<Vec<_>>());

        match &result {
            Ok(villas) => tracing::info!(operation = "list", count = villas.len(), "Listed villas"),
            Err(e) => log_rejection("list", None, e),
        }
        result
    }

    /// A single villa by id.
    pub async fn get(&self, id: i64) -> Result<VillaDto, AppError> {
        let result = self.try_get(id).await;
        match &result {
            Ok(_) => tracing::info!(operation = "get", villa_id = id, "Fetched villa"),
            Err(e) => log_rejection("get", Some(id), e),
        }
        result
    }

    /// Create a villa; the store assigns its id.
    pub async fn create(&self, dto: VillaCreateDto) -> Result<VillaDto, AppError> {
        let result = self.try_create(dto).await;
        match &result {
            Ok(villa) => tracing::info!(operation = "create", villa_id = villa.id, "Villa created"),
            Err(e) => log_rejection("create", None, e),
        }
        result
    }

    /// Replace every mutable field of villa `id`.
    pub async fn update(&self, id: i64, dto: VillaUpdateDto) -> Result<(), AppError> {
        let result = self.try_update(id, dto).await;
        match &result {
            Ok(()) => tracing::info!(operation = "update", villa_id = id, "Villa updated"),
            Err(e) => log_rejection("update", Some(id), e),
        }
        result
    }

    /// Apply a JSON patch to villa `id`. Nothing is written unless the patched villa is valid.
    pub async fn partial_update(&self, id: i64, patch: Patch) -> Result<(), AppError> {
        let result = self.try_partial_update(id, &patch).await;
        match &result {
            Ok(()) => tracing::info!(
                operation = "partial_update",
                villa_id = id,
                operations = patch.0.len(),
                "Villa patched"
            ),
            Err(e) => log_rejection("partial_update", Some(id), e),
        }
        result
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = self.try_delete(id).await;
        match &result {
            Ok(()) => tracing::info!(operation = "delete", villa_id = id, "Villa deleted"),
            Err(e) => log_rejection("delete", Some(id), e),
        }
        result
    }

    async fn try_get(&self, id: i64) -> Result<VillaDto, AppError> {
        check_path_id(id)?;

        let villa = self.store.get_by_id(id).await?.ok_or_else(|| not_found(id))?;
        Ok(record_to_dto(&villa))
    }

    async fn try_create(&self, dto: VillaCreateDto) -> Result<VillaDto, AppError> {
        check_fields(&dto, dto.name.as_deref())?;

        let name = dto.name.as_deref().unwrap_or_default();
        let existing = self.store.find_by_name_case_insensitive(name).await?;
        check_unique_name(existing.as_ref())?;

        check_new_id(dto.id)?;

        let villa = self.store.create(create_dto_to_new(dto)).await?;
        Ok(record_to_dto(&villa))
    }

    async fn try_update(&self, id: i64, dto: VillaUpdateDto) -> Result<(), AppError> {
        check_path_id(id)?;
        check_ids_match(id, dto.id)?;
        check_fields(&dto, dto.name.as_deref())?;

        if self.store.get_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        self.store.update(id, update_dto_to_new(dto)).await?;
        Ok(())
    }

    async fn try_partial_update(&self, id: i64, patch: &Patch) -> Result<(), AppError> {
        check_path_id(id)?;

        let villa = self.store.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

        let patched = apply_patch(patch, &record_to_update_dto(&villa))
            .map_err(|e| AppError::field("patch", e.to_string()))?;

        if patched.id != id {
            return Err(AppError::InvalidInput(
                "Villa id cannot be changed by a patch".to_string(),
            ));
        }
        check_fields(&patched, patched.name.as_deref())?;

        self.store.update(id, update_dto_to_new(patched)).await?;
        Ok(())
    }

    async fn try_delete(&self, id: i64) -> Result<(), AppError> {
        check_path_id(id)?;
        self.store.delete(id).await
    }
}

fn log_rejection(operation: &'static str, villa_id: Option<i64>, error: &AppError) {
    tracing::error!(
        operation,
        villa_id,
        code = error.error_code(),
        "Villa request rejected: {}",
        error.message()
    );
}
