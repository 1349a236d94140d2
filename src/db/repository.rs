//! SQLite-backed villa store.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{NewVilla, VillaRecord};
use crate::store::{not_found, VillaStore};

const VILLA_COLUMNS: &str =
    "id, name, details, rate, occupancy, sqft, image_url, amenity, created_at, updated_at";

/// Villa store persisting to the `villas` table.
#[derive(Clone)]
pub struct SqliteVillaStore {
    pool: SqlitePool,
}

impl SqliteVillaStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VillaStore for SqliteVillaStore {
    async fn list_all(&self) -> Result<Vec<VillaRecord>, AppError> {
        let rows = sqlx::query(&format!("SELECT {VILLA_COLUMNS} FROM villas ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| villa_from_row(row).map_err(AppError::from))
            .collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<VillaRecord>, AppError> {
        let row = sqlx::query(&format!("SELECT {VILLA_COLUMNS} FROM villas WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(villa_from_row).transpose()?)
    }

    async fn create(&self, villa: NewVilla) -> Result<VillaRecord, AppError> {
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO villas (name, name_key, details, rate, occupancy, sqft, image_url, amenity, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        )
        .bind(&villa.name)
        .bind(name_key(&villa.name))
        .bind(&villa.details)
        .bind(villa.rate)
        .bind(villa.occupancy)
        .bind(villa.sqft)
        .bind(&villa.image_url)
        .bind(&villa.amenity)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(VillaRecord {
            id: result.last_insert_rowid(),
            name: villa.name,
            details: villa.details,
            rate: villa.rate,
            occupancy: villa.occupancy,
            sqft: villa.sqft,
            image_url: villa.image_url,
            amenity: villa.amenity,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update(&self, id: i64, villa: NewVilla) -> Result<VillaRecord, AppError> {
        let now = Utc::now();

        let result = sqlx::query(
            "UPDATE villas SET name = ?, name_key = ?, details = ?, rate = ?, occupancy = ?, sqft = ?, image_url = ?, amenity = ?, updated_at = ? WHERE id = ?"
        )
        .bind(&villa.name)
        .bind(name_key(&villa.name))
        .bind(&villa.details)
        .bind(villa.rate)
        .bind(villa.occupancy)
        .bind(villa.sqft)
        .bind(&villa.image_url)
        .bind(&villa.amenity)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        self.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM villas WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }

    async fn find_by_name_case_insensitive(
        &self,
        name: &str,
    ) -> Result<Option<VillaRecord>, AppError> {
        let row = sqlx::query(&format!(
            "SELECT {VILLA_COLUMNS} FROM villas WHERE name_key = ? LIMIT 1"
        ))
        .bind(name_key(name))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(villa_from_row).transpose()?)
    }
}

/// Case-folded name used for uniqueness lookups.
fn name_key(name: &str) -> String {
    name.to_lowercase()
}

fn villa_from_row(row: &SqliteRow) -> Result<VillaRecord, sqlx::Error> {
    Ok(VillaRecord {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        details: row.try_get("details")?,
        rate: row.try_get("rate")?,
        occupancy: row.try_get("occupancy")?,
        sqft: row.try_get("sqft")?,
        image_url: row.try_get("image_url")?,
        amenity: row.try_get("amenity")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use tempfile::TempDir;

    async fn store() -> (SqliteVillaStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let pool = init_database(&temp_dir.path().join("villas.sqlite"))
            .await
            .expect("Failed to init DB");
        (SqliteVillaStore::new(pool), temp_dir)
    }

    fn new_villa(name: &str) -> NewVilla {
        NewVilla {
            name: name.to_string(),
            details: Some("Quiet street".to_string()),
            rate: 180.25,
            occupancy: 5,
            sqft: 640,
            image_url: Some("https://example.com/villa.jpg".to_string()),
            amenity: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let (store, _dir) = store().await;

        let created = store.create(new_villa("Harbor Villa")).await.unwrap();
        assert_eq!(created.id, 1);

        let fetched = store.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Harbor Villa");
        assert_eq!(fetched.details.as_deref(), Some("Quiet street"));
        assert_eq!(fetched.rate, 180.25);
        assert_eq!(fetched.occupancy, 5);
        assert_eq!(fetched.sqft, 640);
        assert_eq!(
            fetched.image_url.as_deref(),
            Some("https://example.com/villa.jpg")
        );
        assert!(fetched.amenity.is_none());
    }

    #[tokio::test]
    async fn test_ids_follow_max() {
        let (store, _dir) = store().await;

        assert_eq!(store.create(new_villa("Villa Number One")).await.unwrap().id, 1);
        assert_eq!(store.create(new_villa("Villa Number Two")).await.unwrap().id, 2);
        assert_eq!(store.create(new_villa("Villa Number Three")).await.unwrap().id, 3);

        store.delete(1).await.unwrap();
        assert_eq!(store.create(new_villa("Villa Number Four")).await.unwrap().id, 4);
    }

    #[tokio::test]
    async fn test_list_in_id_order() {
        let (store, _dir) = store().await;
        store.create(new_villa("Zebra Villa")).await.unwrap();
        store.create(new_villa("Alpha Villa")).await.unwrap();

        let ids: Vec<i64> = store.list_all().await.unwrap().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_update_keeps_created_at() {
        let (store, _dir) = store().await;
        let created = store.create(new_villa("Harbor Villa")).await.unwrap();
        let stored = store.get_by_id(created.id).await.unwrap().unwrap();

        let mut changed = new_villa("Harbor Villa Grand");
        changed.amenity = Some("Pool".to_string());
        let updated = store.update(created.id, changed).await.unwrap();

        assert_eq!(updated.name, "Harbor Villa Grand");
        assert_eq!(updated.amenity.as_deref(), Some("Pool"));
        assert_eq!(updated.created_at, stored.created_at);
    }

    #[tokio::test]
    async fn test_missing_rows() {
        let (store, _dir) = store().await;

        assert!(store.get_by_id(999).await.unwrap().is_none());
        assert!(matches!(
            store.update(999, new_villa("Nowhere Villa")).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(store.delete(999).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_find_by_name_ignores_case() {
        let (store, _dir) = store().await;
        store.create(new_villa("Pool View")).await.unwrap();

        let found = store.find_by_name_case_insensitive("POOL view").await.unwrap();
        assert_eq!(found.map(|v| v.name), Some("Pool View".to_string()));
    }

    #[tokio::test]
    async fn test_find_by_name_folds_non_ascii() {
        let (store, _dir) = store().await;
        store.create(new_villa("Élan Villa")).await.unwrap();

        let found = store.find_by_name_case_insensitive("élan villa").await.unwrap();
        assert_eq!(found.map(|v| v.name), Some("Élan Villa".to_string()));
        assert!(store
            .find_by_name_case_insensitive("ÉLAN VILLA")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_update_refreshes_name_lookup() {
        let (store, _dir) = store().await;
        let created = store.create(new_villa("Harbor Villa")).await.unwrap();
        store
            .update(created.id, new_villa("Ölberg Retreat"))
            .await
            .unwrap();

        assert!(store
            .find_by_name_case_insensitive("harbor villa")
            .await
            .unwrap()
            .is_none());
        assert!(store
            .find_by_name_case_insensitive("ölberg retreat")
            .await
            .unwrap()
            .is_some());
    }
}
