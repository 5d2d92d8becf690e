use chrono::{DateTime, Utc};
use core_types::{
    ChartSeries, Company, ComparisonMetric, MarketSummary, Sector, SectorFinancials,
    SectorOverview, VolumeMetrics,
};
use serde::{Deserialize, Serialize};

/// Every sector, ordered as requested, plus the exchange-wide summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorsOverviewResponse {
    pub sectors: Vec<SectorOverview>,
    pub market_summary: MarketSummary,
    pub last_updated: DateTime<Utc>,
}

/// The single-sector drill-down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorDetailResponse {
    pub sector: Sector,
    pub performance_chart: ChartSeries,
    pub financial_metrics: SectorFinancials,
    pub volume_metrics: VolumeMetrics,
    pub companies: Vec<Company>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorCompaniesResponse {
    pub sector_id: String,
    pub sector_name: String,
    pub companies: Vec<Company>,
    /// Listed companies in the sector according to the catalog, not the
    /// length of `companies`.
    pub total_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorCompareResponse {
    pub comparison: Vec<SectorOverview>,
    pub timeframe: String,
    /// Echo of the requested metrics. Every column is always populated.
    pub metrics: Vec<ComparisonMetric>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

/// Reported by the health check. Shared by every transport of the service.
pub const SERVICE_VERSION: &str = "1.0.0";

impl HealthResponse {
    pub fn healthy(timestamp: DateTime<Utc>) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp,
            version: SERVICE_VERSION.to_string(),
        }
    }
}
