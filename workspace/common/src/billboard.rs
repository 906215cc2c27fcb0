use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Traffic classification of the road a billboard faces.
///
/// Unknown strings coming from the backend deserialize to
/// [`TrafficLevel::Unknown`] instead of failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TrafficLevel {
    High,
    Medium,
    Low,
    #[default]
    Unknown,
}

impl TrafficLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficLevel::High => "high",
            TrafficLevel::Medium => "medium",
            TrafficLevel::Low => "low",
            TrafficLevel::Unknown => "unknown",
        }
    }

    /// Marker colour used by the map legend.
    pub fn marker_color(&self) -> &'static str {
        match self {
            TrafficLevel::High => "#ef4444",
            TrafficLevel::Medium => "#f97316",
            TrafficLevel::Low => "#22c55e",
            TrafficLevel::Unknown => "#6b7280",
        }
    }
}

impl From<String> for TrafficLevel {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "high" => TrafficLevel::High,
            "medium" => TrafficLevel::Medium,
            "low" => TrafficLevel::Low,
            _ => TrafficLevel::Unknown,
        }
    }
}

impl std::fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Billboard record as it travels over the wire.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BillboardDto {
    /// Stable server-assigned identifier
    pub id: i64,
    /// Human-readable code, e.g. "B001"
    pub billboard_id: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    pub traffic_level: TrafficLevel,
    /// Size descriptor, e.g. "10x20"
    pub size: String,
    /// Display technology, e.g. "Digital"
    #[serde(rename = "type")]
    pub kind: String,
    /// Monthly rental rate in the local currency
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub monthly_rate: Decimal,
}

/// Success envelope of `GET /api/billboards`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BillboardListResponse {
    pub success: bool,
    pub data: Vec<BillboardDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
