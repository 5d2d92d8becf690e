//! Allow-list checks on caller-supplied enums. Runs before any synthesis, so a
//! rejected request never touches the random source.

use crate::error::AnalyticsError;
use core_types::{ComparisonMetric, SectorSortKey, SortOrder, Timeframe};
use serde::Deserialize;

fn default_timeframe() -> String {
    Timeframe::OneDay.as_str().to_string()
}

fn default_sort_by() -> String {
    SectorSortKey::MarketCap.as_str().to_string()
}

fn default_sort_order() -> String {
    SortOrder::Desc.as_str().to_string()
}

/// The sectors overview request as the caller sent it.
#[derive(Debug, Clone, Deserialize)]
pub struct SectorsRequest {
    #[serde(default = "default_timeframe")]
    pub timeframe: String,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default = "default_sort_order")]
    pub sort_order: String,
}

impl Default for SectorsRequest {
    fn default() -> Self {
        Self {
            timeframe: default_timeframe(),
            sort_by: default_sort_by(),
            sort_order: default_sort_order(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorsQuery {
    pub timeframe: Timeframe,
    pub sort_by: SectorSortKey,
    pub sort_order: SortOrder,
}

/// Fields are checked in order: timeframe, sort_by, sort_order. The first
/// failure is reported.
pub fn validate_sectors_request(request: &SectorsRequest) -> Result<SectorsQuery, AnalyticsError> {
    Ok(SectorsQuery {
        timeframe: request.timeframe.parse()?,
        sort_by: request.sort_by.parse()?,
        sort_order: request.sort_order.parse()?,
    })
}

/// A comparison request as the caller sent it.
#[derive(Debug, Clone, Deserialize)]
pub struct CompareRequest {
    pub sector_ids: Vec<String>,
    #[serde(default = "default_timeframe")]
    pub timeframe: String,
    #[serde(default)]
    pub metrics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompareQuery {
    pub sector_ids: Vec<String>,
    pub timeframe: String,
    pub metrics: Vec<ComparisonMetric>,
}

/// Requires at least one sector id and a known name for every metric.
///
/// Sector ids are resolved later against the catalog; the timeframe is passed
/// through unchecked.
pub fn validate_compare_request(request: &CompareRequest) -> Result<CompareQuery, AnalyticsError> {
    if request.sector_ids.is_empty() {
        return Err(AnalyticsError::Validation {
            field: "sector_ids",
            value: String::new(),
        });
    }

    let metrics = request
        .metrics
        .iter()
        .map(|m| m.parse::<ComparisonMetric>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CompareQuery {
        sector_ids: request.sector_ids.clone(),
        timeframe: request.timeframe.clone(),
        metrics,
    })
}

/// Clamps a caller's company limit; `None` takes the default.
pub fn resolve_limit(limit: Option<usize>, default: usize, max: usize) -> usize {
    limit.unwrap_or(default).min(max)
}
