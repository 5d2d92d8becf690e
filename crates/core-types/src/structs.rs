use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Typical valuation ratios for a sector, used as the centre of synthesized
/// financial metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationRatios {
    pub pe_ratio: f64,
    pub pb_ratio: f64,
    pub dividend_yield: f64,
    pub roe: f64,
    pub debt_to_equity: f64,
}

/// A hand-authored seed for a well-known listed company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyTemplate {
    pub symbol: String,
    pub name: String,
    pub reference_price: f64,
}

impl CompanyTemplate {
    pub fn new(symbol: &str, name: &str, reference_price: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            reference_price,
        }
    }
}

/// Immutable reference data for one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorBaseline {
    pub id: String,
    pub name: String,
    pub market_cap_billion: f64,
    pub company_count: u32,
    pub base_performance: f64,
    /// `None` means the generic ratio baseline applies.
    #[serde(default)]
    pub ratios: Option<ValuationRatios>,
    #[serde(default)]
    pub description: String,
    /// Empty means the generic placeholder templates apply.
    #[serde(default)]
    pub templates: Vec<CompanyTemplate>,
}

/// Percentage changes anchored on a single randomized current value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceBundle {
    pub current_change: f64,
    pub one_week: f64,
    pub one_month: f64,
    pub three_months: f64,
    pub six_months: f64,
    pub one_year: f64,
    pub ytd: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCompany {
    pub symbol: String,
    pub name: String,
    pub market_cap: f64,
    pub current_price: f64,
    pub change_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorOverview {
    pub id: String,
    pub name: String,
    pub market_cap: f64,
    pub market_cap_percentage: f64,
    pub performance: PerformanceBundle,
    pub company_count: u32,
    pub volume_today: f64,
    pub turnover_today: f64,
    pub top_companies: Vec<TopCompany>,
}

/// The detail record returned by a single-sector drill-down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub id: String,
    pub name: String,
    pub description: String,
    pub market_cap: f64,
    pub market_cap_percentage: f64,
    pub company_count: u32,
    pub performance: PerformanceBundle,
    pub volume_today: f64,
    pub turnover_today: f64,
    pub volatility: f64,
    pub beta: f64,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub symbol: String,
    pub name: String,
    pub sector_id: String,
    pub market_cap: f64,
    pub market_cap_percentage: f64,
    pub current_price: f64,
    pub change_percent: f64,
    pub volume: f64,
    pub pe_ratio: f64,
    pub pb_ratio: f64,
    pub dividend_yield: f64,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    pub volume: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub timeframe: String,
    pub data_points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorFinancials {
    pub avg_pe_ratio: f64,
    pub avg_pb_ratio: f64,
    pub avg_dividend_yield: f64,
    pub avg_roe: f64,
    pub avg_debt_to_equity: f64,
    pub median_market_cap: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeMetrics {
    pub today_volume: f64,
    pub avg_volume_30d: f64,
    pub today_turnover: f64,
    pub avg_turnover_30d: f64,
}

/// Exchange-wide aggregates. Independent draws, not derived from sectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub total_market_cap: f64,
    pub kse100_index: f64,
    pub kse100_change: f64,
    pub total_volume: f64,
    pub total_turnover: f64,
    pub advance_decline_ratio: f64,
    pub last_updated: DateTime<Utc>,
}
