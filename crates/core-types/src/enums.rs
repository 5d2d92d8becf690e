use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The coarse period codes accepted by the sectors overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
}

impl Timeframe {
    pub const ALL: [Timeframe; 6] = [
        Timeframe::OneDay,
        Timeframe::OneWeek,
        Timeframe::OneMonth,
        Timeframe::ThreeMonths,
        Timeframe::SixMonths,
        Timeframe::OneYear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::OneDay => "1D",
            Timeframe::OneWeek => "1W",
            Timeframe::OneMonth => "1M",
            Timeframe::ThreeMonths => "3M",
            Timeframe::SixMonths => "6M",
            Timeframe::OneYear => "1Y",
        }
    }
}

impl FromStr for Timeframe {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timeframe::ALL
            .into_iter()
            .find(|tf| tf.as_str() == s)
            .ok_or_else(|| CoreError::InvalidInput {
                field: "timeframe",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The columns a sector overview list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectorSortKey {
    MarketCap,
    Performance,
    Volume,
    CompanyCount,
}

impl SectorSortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectorSortKey::MarketCap => "market_cap",
            SectorSortKey::Performance => "performance",
            SectorSortKey::Volume => "volume",
            SectorSortKey::CompanyCount => "company_count",
        }
    }
}

impl FromStr for SectorSortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "market_cap" => Ok(SectorSortKey::MarketCap),
            "performance" => Ok(SectorSortKey::Performance),
            "volume" => Ok(SectorSortKey::Volume),
            "company_count" => Ok(SectorSortKey::CompanyCount),
            other => Err(CoreError::InvalidInput {
                field: "sort_by",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(CoreError::InvalidInput {
                field: "sort_order",
                value: other.to_string(),
            }),
        }
    }
}

/// The columns a company list can be ranked by.
///
/// Unlike the sector keys, an unknown company key is not an error: callers
/// use [`CompanySortKey::parse_lenient`], which falls back to market cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySortKey {
    MarketCap,
    Performance,
    Volume,
    PeRatio,
}

impl CompanySortKey {
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or(CompanySortKey::MarketCap)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySortKey::MarketCap => "market_cap",
            CompanySortKey::Performance => "performance",
            CompanySortKey::Volume => "volume",
            CompanySortKey::PeRatio => "pe_ratio",
        }
    }
}

impl FromStr for CompanySortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "market_cap" => Ok(CompanySortKey::MarketCap),
            "performance" => Ok(CompanySortKey::Performance),
            "volume" => Ok(CompanySortKey::Volume),
            "pe_ratio" => Ok(CompanySortKey::PeRatio),
            other => Err(CoreError::InvalidInput {
                field: "sort_by",
                value: other.to_string(),
            }),
        }
    }
}

/// Metric columns a comparison request may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMetric {
    Performance,
    MarketCap,
    Volume,
    PeRatio,
    PbRatio,
    DividendYield,
}

impl FromStr for ComparisonMetric {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "performance" => Ok(ComparisonMetric::Performance),
            "market_cap" => Ok(ComparisonMetric::MarketCap),
            "volume" => Ok(ComparisonMetric::Volume),
            "pe_ratio" => Ok(ComparisonMetric::PeRatio),
            "pb_ratio" => Ok(ComparisonMetric::PbRatio),
            "dividend_yield" => Ok(ComparisonMetric::DividendYield),
            other => Err(CoreError::InvalidInput {
                field: "metrics",
                value: other.to_string(),
            }),
        }
    }
}
