//! Billboard catalogue served by the reference backend.

use std::path::Path;

use common::{BillboardDto, TrafficLevel};
use model::{ValidationError, collection_from_dtos};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalogue {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalogue {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid catalogue: {0}")]
    Invalid(#[from] ValidationError),
}

type Row = (i64, &'static str, f64, f64, &'static str, &'static str, &'static str, i64, TrafficLevel);

const BUILTIN: [Row; 20] = [
    (1, "B001", 6.9271, 79.8612, "Colombo 1 (Fort)", "10x20", "Digital", 250000, TrafficLevel::High),
    (2, "B002", 6.9310, 79.8500, "Colombo 1 (Fort)", "8x16", "Static", 180000, TrafficLevel::High),
    (3, "B003", 6.9138, 79.8491, "Colombo 3 (Kollupitiya)", "12x24", "Digital", 320000, TrafficLevel::High),
    (4, "B004", 6.8867, 79.8540, "Colombo 4 (Bambalapitiya)", "10x20", "Static", 150000, TrafficLevel::Medium),
    (5, "B005", 6.8402, 79.8712, "Dehiwala", "8x16", "Static", 120000, TrafficLevel::Medium),
    (6, "B006", 6.9390, 79.8528, "Colombo 11 (Pettah)", "15x30", "Digital", 400000, TrafficLevel::High),
    (7, "B007", 6.8729, 79.8886, "Nugegoda", "10x20", "Static", 140000, TrafficLevel::Medium),
    (8, "B008", 6.9076, 79.8990, "Rajagiriya", "8x16", "Static", 130000, TrafficLevel::Medium),
    (9, "B009", 6.8386, 79.8631, "Mount Lavinia", "12x24", "Digital", 280000, TrafficLevel::Medium),
    (10, "B010", 6.8741, 79.8605, "Colombo 6 (Wellawatte)", "10x20", "Static", 160000, TrafficLevel::Medium),
    (11, "B011", 6.8970, 79.9180, "Battaramulla", "10x20", "Static", 135000, TrafficLevel::Medium),
    (12, "B012", 6.9050, 79.8530, "Colombo 2 (Slave Island)", "12x24", "Digital", 310000, TrafficLevel::High),
    (13, "B013", 6.8652, 79.8790, "Colombo 5 (Kirulapone)", "8x16", "Static", 125000, TrafficLevel::Medium),
    (14, "B014", 6.9025, 79.8711, "Colombo 5 (Havelock Town)", "10x20", "Digital", 270000, TrafficLevel::High),
    (15, "B015", 6.8872, 79.9056, "Kohuwala", "8x16", "Static", 145000, TrafficLevel::Medium),
    (16, "B016", 6.8422, 79.8741, "Ratmalana", "12x24", "Digital", 260000, TrafficLevel::Medium),
    (17, "B017", 6.9556, 79.8637, "Colombo 13 (Kotahena)", "10x20", "Static", 155000, TrafficLevel::Medium),
    (18, "B018", 6.8908, 79.9135, "Colombo 5 (Narahenpita)", "15x30", "Digital", 390000, TrafficLevel::High),
    (19, "B019", 6.9066, 79.9023, "Colombo 8 (Borella)", "10x20", "Static", 150000, TrafficLevel::Medium),
    (20, "B020", 6.9197, 79.8700, "Colombo 7 (Cinnamon Gardens)", "12x24", "Digital", 300000, TrafficLevel::High),
];

/// The built-in 20-asset catalogue around Colombo.
pub fn builtin_catalog() -> Vec<BillboardDto> {
    BUILTIN
        .iter()
        .map(
            |&(id, code, latitude, longitude, region, size, kind, rate, traffic_level)| BillboardDto {
                id,
                billboard_id: code.to_string(),
                region: region.to_string(),
                latitude,
                longitude,
                traffic_level,
                size: size.to_string(),
                kind: kind.to_string(),
                monthly_rate: Decimal::from(rate),
            },
        )
        .collect()
}

/// Reads a JSON array of billboards and checks it the way the client will.
pub fn load_catalog(path: &Path) -> Result<Vec<BillboardDto>, CatalogError> {
    let path_str = path.display().to_string();
    debug!("Reading billboard catalogue from {}", path_str);

    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path_str.clone(),
        source,
    })?;
    let billboards: Vec<BillboardDto> =
        serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: path_str.clone(),
            source,
        })?;

    validate_catalog(&billboards)?;
    info!("Loaded {} billboards from {}", billboards.len(), path_str);
    Ok(billboards)
}

/// Rejects catalogues the dashboard would refuse to display.
pub fn validate_catalog(billboards: &[BillboardDto]) -> Result<(), CatalogError> {
    collection_from_dtos(billboards.to_vec())?;
    Ok(())
}

/// Looks a billboard up by code (`B001`) or numeric id (`1`).
pub fn find_billboard<'a>(billboards: &'a [BillboardDto], key: &str) -> Option<&'a BillboardDto> {
    if key.starts_with('B') {
        billboards.iter().find(|b| b.billboard_id == key)
    } else {
        let id = key.parse::<i64>().ok()?;
        billboards.iter().find(|b| b.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 20);
        assert!(validate_catalog(&catalog).is_ok());
        assert_eq!(catalog[5].billboard_id, "B006");
        assert_eq!(catalog[5].monthly_rate, Decimal::from(400000));
    }

    #[test]
    fn test_find_billboard_by_code_or_id() {
        let catalog = builtin_catalog();
        assert_eq!(find_billboard(&catalog, "B012").map(|b| b.id), Some(12));
        assert_eq!(find_billboard(&catalog, "7").map(|b| b.billboard_id.as_str()), Some("B007"));
        assert!(find_billboard(&catalog, "B999").is_none());
        assert!(find_billboard(&catalog, "x7").is_none());
    }

    #[test]
    fn test_load_catalog_from_file() {
        let path = std::env::temp_dir().join(format!("billboard-catalog-{}.json", std::process::id()));
        let catalog = builtin_catalog()[..2].to_vec();
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(serde_json::to_string(&catalog).unwrap().as_bytes()).unwrap();

        let loaded = load_catalog(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut catalog = builtin_catalog();
        catalog[1].id = 1;
        assert!(matches!(
            validate_catalog(&catalog),
            Err(CatalogError::Invalid(ValidationError::DuplicateId(1)))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_catalog(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
