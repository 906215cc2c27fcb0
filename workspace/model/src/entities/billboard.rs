use std::collections::HashSet;

use common::{BillboardDto, TrafficLevel};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// A physical billboard asset with a fixed geographic location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BillboardRecord {
    /// Stable server-assigned identifier, unique within a snapshot.
    pub id: i64,
    /// Human-readable code such as "B001".
    pub billboard_id: String,
    pub region: String,
    /// WGS84 latitude in degrees.
    pub latitude: f64,
    /// WGS84 longitude in degrees.
    pub longitude: f64,
    pub traffic_level: TrafficLevel,
    pub size: String,
    pub kind: String,
    /// Monthly rental rate, never negative.
    pub monthly_rate: Decimal,
}

impl BillboardRecord {
    /// Checks the per-record invariants.
    pub fn validate(&self) -> Result<()> {
        if self.billboard_id.trim().is_empty() {
            return Err(ValidationError::EmptyField("billboard_id"));
        }

        let latitude_ok = self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude);
        let longitude_ok =
            self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude);
        if !latitude_ok || !longitude_ok {
            return Err(ValidationError::InvalidCoordinates {
                billboard_id: self.billboard_id.clone(),
                latitude: self.latitude,
                longitude: self.longitude,
            });
        }

        if self.monthly_rate.is_sign_negative() && !self.monthly_rate.is_zero() {
            return Err(ValidationError::NegativeRate {
                billboard_id: self.billboard_id.clone(),
            });
        }

        Ok(())
    }

    /// `(latitude, longitude)` pair, in the order map widgets expect.
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

impl TryFrom<BillboardDto> for BillboardRecord {
    type Error = ValidationError;

    fn try_from(dto: BillboardDto) -> Result<Self> {
        let record = BillboardRecord {
            id: dto.id,
            billboard_id: dto.billboard_id,
            region: dto.region,
            latitude: dto.latitude,
            longitude: dto.longitude,
            traffic_level: dto.traffic_level,
            size: dto.size,
            kind: dto.kind,
            monthly_rate: dto.monthly_rate,
        };
        record.validate()?;
        Ok(record)
    }
}

impl From<&BillboardRecord> for BillboardDto {
    fn from(record: &BillboardRecord) -> Self {
        BillboardDto {
            id: record.id,
            billboard_id: record.billboard_id.clone(),
            region: record.region.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
            traffic_level: record.traffic_level,
            size: record.size.clone(),
            kind: record.kind.clone(),
            monthly_rate: record.monthly_rate,
        }
    }
}

/// Converts a whole snapshot, rejecting it if any record is malformed or
/// if two records share an id. Order is preserved.
pub fn collection_from_dtos(dtos: Vec<BillboardDto>) -> Result<Vec<BillboardRecord>> {
    let mut seen = HashSet::with_capacity(dtos.len());
    let mut records = Vec::with_capacity(dtos.len());

    for dto in dtos {
        if !seen.insert(dto.id) {
            tracing::warn!(id = dto.id, "Duplicate billboard id in snapshot");
            return Err(ValidationError::DuplicateId(dto.id));
        }
        records.push(BillboardRecord::try_from(dto)?);
    }

    Ok(records)
}
