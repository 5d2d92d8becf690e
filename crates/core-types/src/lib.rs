pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{ComparisonMetric, CompanySortKey, SectorSortKey, SortOrder, Timeframe};
pub use error::CoreError;
pub use structs::{
    ChartPoint, ChartSeries, Company, CompanyTemplate, MarketSummary, PerformanceBundle, Sector,
    SectorBaseline, SectorFinancials, SectorOverview, TopCompany, ValuationRatios, VolumeMetrics,
};
