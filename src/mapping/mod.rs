//! Field-by-field conversion between stored records and wire DTOs.

use crate::models::{NewVilla, VillaCreateDto, VillaDto, VillaRecord, VillaUpdateDto};

pub fn record_to_dto(record: &VillaRecord) -> VillaDto {
    VillaDto {
        id: record.id,
        name: record.name.clone(),
        details: record.details.clone(),
        rate: record.rate,
        occupancy: record.occupancy,
        sqft: record.sqft,
        image_url: record.image_url.clone(),
        amenity: record.amenity.clone(),
    }
}

/// The patchable view of a stored record.
pub fn record_to_update_dto(record: &VillaRecord) -> VillaUpdateDto {
    VillaUpdateDto {
        id: record.id,
        name: Some(record.name.clone()),
        details: record.details.clone(),
        rate: record.rate,
        occupancy: record.occupancy,
        sqft: record.sqft,
        image_url: record.image_url.clone(),
        amenity: record.amenity.clone(),
    }
}

/// Drops the client id; the store assigns one.
///
/// Callers validate first: a missing name maps to an empty string.
pub fn create_dto_to_new(dto: VillaCreateDto) -> NewVilla {
    NewVilla {
        name: dto.name.unwrap_or_default(),
        details: dto.details,
        rate: dto.rate,
        occupancy: dto.occupancy,
        sqft: dto.sqft,
        image_url: dto.image_url,
        amenity: dto.amenity,
    }
}

/// The id travels in the request path, not in the returned fields.
pub fn update_dto_to_new(dto: VillaUpdateDto) -> NewVilla {
    NewVilla {
        name: dto.name.unwrap_or_default(),
        details: dto.details,
        rate: dto.rate,
        occupancy: dto.occupancy,
        sqft: dto.sqft,
        image_url: dto.image_url,
        amenity: dto.amenity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record() -> VillaRecord {
        let now = Utc::now();
        VillaRecord {
            id: 7,
            name: "Diamond Villa".to_string(),
            details: Some("Sea facing".to_string()),
            rate: 325.5,
            occupancy: 6,
            sqft: 1100,
            image_url: Some("https://example.com/diamond.jpg".to_string()),
            amenity: Some("Jacuzzi".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_record_to_dto_copies_every_field() {
        let r = record();
        let dto = record_to_dto(&r);

        assert_eq!(dto.id, 7);
        assert_eq!(dto.name, "Diamond Villa");
        assert_eq!(dto.details.as_deref(), Some("Sea facing"));
        assert_eq!(dto.rate, 325.5);
        assert_eq!(dto.occupancy, 6);
        assert_eq!(dto.sqft, 1100);
        assert_eq!(
            dto.image_url.as_deref(),
            Some("https://example.com/diamond.jpg")
        );
        assert_eq!(dto.amenity.as_deref(), Some("Jacuzzi"));
    }

    #[test]
    fn test_update_dto_round_trip() {
        let r = record();
        let new = update_dto_to_new(record_to_update_dto(&r));

        assert_eq!(
            new,
            NewVilla {
                name: r.name,
                details: r.details,
                rate: r.rate,
                occupancy: r.occupancy,
                sqft: r.sqft,
                image_url: r.image_url,
                amenity: r.amenity,
            }
        );
    }

    #[test]
    fn test_create_dto_ignores_id() {
        let dto = VillaCreateDto {
            id: 99,
            name: Some("Royal Villa".to_string()),
            details: Some("Hill top".to_string()),
            rate: 150.0,
            occupancy: 2,
            sqft: 450,
            image_url: None,
            amenity: Some("Fireplace".to_string()),
        };
        let new = create_dto_to_new(dto);

        assert_eq!(new.name, "Royal Villa");
        assert_eq!(new.details.as_deref(), Some("Hill top"));
        assert_eq!(new.rate, 150.0);
        assert_eq!(new.occupancy, 2);
        assert_eq!(new.sqft, 450);
        assert!(new.image_url.is_none());
        assert_eq!(new.amenity.as_deref(), Some("Fireplace"));
    }
}
