use crate::random::BoundedRandom;
use crate::ranking::market_cap_percentage;
use catalog::SectorCatalog;
use chrono::{DateTime, Duration, Utc};
use core_types::{
    ChartPoint, ChartSeries, Company, MarketSummary, PerformanceBundle, Sector, SectorBaseline,
    SectorFinancials, SectorOverview, TopCompany, VolumeMetrics,
};

/// Offset bands for each performance horizon, relative to the current change.
///
/// Bands widen with horizon length and skew upward from three months out.
pub mod horizon {
    pub const CURRENT: (f64, f64) = (-1.0, 1.0);
    pub const ONE_WEEK: (f64, f64) = (-2.0, 2.0);
    pub const ONE_MONTH: (f64, f64) = (-5.0, 5.0);
    pub const THREE_MONTHS: (f64, f64) = (-10.0, 15.0);
    pub const SIX_MONTHS: (f64, f64) = (-15.0, 25.0);
    pub const ONE_YEAR: (f64, f64) = (-25.0, 40.0);
    pub const YTD: (f64, f64) = (-20.0, 35.0);
}

/// Starting level of every chart random walk.
pub const CHART_START_VALUE: f64 = 100.0;
/// Chart values are clamped up to this after each step. There is no ceiling.
pub const CHART_FLOOR: f64 = 50.0;
/// Exchange-wide market cap reported in the market summary (PKR).
pub const TOTAL_MARKET_CAP: f64 = 4.74e12;
/// The KSE-100 level the summary index is drawn around.
pub const INDEX_CENTER: f64 = 45_000.0;

/// Resolves a timeframe code to `(duration, sampling interval)`.
///
/// Only `1D` and `1W` have their own buckets. Every other code, including
/// `3M`, `6M`, `1Y` and codes that are not timeframes at all, is charted as
/// `1M`: thirty days of daily samples.
pub fn chart_window(timeframe: &str) -> (Duration, Duration) {
    match timeframe {
        "1D" => (Duration::hours(24), Duration::minutes(30)),
        "1W" => (Duration::days(7), Duration::hours(4)),
        _ => (Duration::days(30), Duration::hours(24)),
    }
}

/// Builds synthetic metric bundles from catalog baselines and random draws.
///
/// Borrowed per request: the catalog is shared reference data, the random
/// source belongs to the request, and `now` pins every timestamp it emits.
pub struct MetricSynthesizer<'a, R: BoundedRandom> {
    catalog: &'a SectorCatalog,
    rng: &'a mut R,
    now: DateTime<Utc>,
}

impl<'a, R: BoundedRandom> MetricSynthesizer<'a, R> {
    pub fn new(catalog: &'a SectorCatalog, rng: &'a mut R, now: DateTime<Utc>) -> Self {
        Self { catalog, rng, now }
    }

    fn draw(&mut self, (min, max): (f64, f64)) -> f64 {
        self.rng.draw(min, max)
    }

    /// All horizons are offsets from one randomized current value, so they
    /// move together instead of being independent draws.
    pub fn performance_bundle(&mut self, base_performance: f64) -> PerformanceBundle {
        let current = base_performance + self.draw(horizon::CURRENT);

        PerformanceBundle {
            current_change: current,
            one_week: current + self.draw(horizon::ONE_WEEK),
            one_month: current + self.draw(horizon::ONE_MONTH),
            three_months: current + self.draw(horizon::THREE_MONTHS),
            six_months: current + self.draw(horizon::SIX_MONTHS),
            one_year: current + self.draw(horizon::ONE_YEAR),
            ytd: current + self.draw(horizon::YTD),
        }
    }

    /// Up to `count` leaders taken from the sector's templates, never padded.
    ///
    /// Market cap is drawn independently of price.
    pub fn top_companies(&mut self, sector_id: &str, count: usize) -> Vec<TopCompany> {
        let catalog = self.catalog;

        catalog
            .company_templates_for(sector_id)
            .iter()
            .take(count)
            .map(|template| {
                let change_percent = self.rng.draw(-5.0, 5.0);
                TopCompany {
                    symbol: template.symbol.clone(),
                    name: template.name.clone(),
                    market_cap: self.rng.draw(50e9, 500e9),
                    current_price: template.reference_price * (1.0 + change_percent / 100.0),
                    change_percent,
                }
            })
            .collect()
    }

    /// `count` placeholder companies named after the sector, e.g. `cem1`.
    pub fn companies(&mut self, sector_id: &str, count: usize) -> Vec<Company> {
        let prefix: String = sector_id.chars().take(3).collect();
        let sector_name = self
            .catalog
            .baseline(sector_id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|_| sector_id.to_string());

        (1..=count)
            .map(|i| {
                let change_percent = self.rng.draw(-10.0, 10.0);
                Company {
                    symbol: format!("{prefix}{i}"),
                    name: format!("Company {i} in {sector_name}"),
                    sector_id: sector_id.to_string(),
                    market_cap: self.rng.draw(1e9, 100e9),
                    market_cap_percentage: self.rng.draw(0.1, 10.0),
                    current_price: self.rng.draw(50.0, 500.0),
                    change_percent,
                    volume: self.rng.draw(10_000.0, 1_000_000.0),
                    pe_ratio: self.rng.draw(8.0, 25.0),
                    pb_ratio: self.rng.draw(0.5, 3.5),
                    dividend_yield: self.rng.draw(0.0, 8.0),
                    last_updated: self.now,
                }
            })
            .collect()
    }

    /// A bounded random walk sampled across `[now - duration, now)`.
    pub fn chart_series(&mut self, timeframe: &str) -> ChartSeries {
        let (duration, interval) = chart_window(timeframe);
        let mut data_points = Vec::new();
        let mut value = CHART_START_VALUE;
        let mut timestamp = self.now - duration;

        while timestamp < self.now {
            value += self.rng.draw(-2.0, 2.0);
            if value < CHART_FLOOR {
                value = CHART_FLOOR;
            }

            data_points.push(ChartPoint {
                timestamp,
                value,
                volume: self.rng.draw(100_000.0, 2_000_000.0),
            });
            timestamp += interval;
        }

        ChartSeries {
            timeframe: timeframe.to_string(),
            data_points,
        }
    }

    /// The sector's typical ratios, each nudged by a small random offset.
    pub fn financial_metrics(&mut self, sector_id: &str) -> SectorFinancials {
        let ratios = self.catalog.ratios_for(sector_id);

        SectorFinancials {
            avg_pe_ratio: ratios.pe_ratio + self.rng.draw(-2.0, 2.0),
            avg_pb_ratio: ratios.pb_ratio + self.rng.draw(-0.3, 0.3),
            avg_dividend_yield: ratios.dividend_yield + self.rng.draw(-1.0, 1.0),
            avg_roe: ratios.roe + self.rng.draw(-3.0, 3.0),
            avg_debt_to_equity: ratios.debt_to_equity + self.rng.draw(-0.3, 0.3),
            median_market_cap: self.rng.draw(5e9, 50e9),
        }
    }

    /// The 30-day averages are single-draw proxies scaled from today's values.
    pub fn volume_metrics(&mut self) -> VolumeMetrics {
        let today_volume = self.rng.draw(1e6, 50e6);
        let today_turnover = self.rng.draw(500e6, 5e9);

        VolumeMetrics {
            today_volume,
            avg_volume_30d: today_volume * self.rng.draw(0.8, 1.2),
            today_turnover,
            avg_turnover_30d: today_turnover * self.rng.draw(0.85, 1.15),
        }
    }

    /// Exchange-wide figures. Not derived from any per-sector draw.
    pub fn market_summary(&mut self) -> MarketSummary {
        let kse100_index = INDEX_CENTER + self.rng.draw(-2000.0, 2000.0);
        let kse100_change = self.rng.draw(-2.0, 2.0);

        MarketSummary {
            total_market_cap: TOTAL_MARKET_CAP,
            kse100_index,
            kse100_change,
            total_volume: self.rng.draw(100e6, 500e6),
            total_turnover: self.rng.draw(10e9, 50e9),
            advance_decline_ratio: self.rng.draw(0.3, 2.5),
            last_updated: self.now,
        }
    }

    pub fn sector_overview(&mut self, baseline: &SectorBaseline, top_count: usize) -> SectorOverview {
        let performance = self.performance_bundle(baseline.base_performance);
        let top_companies = self.top_companies(&baseline.id, top_count);

        SectorOverview {
            id: baseline.id.clone(),
            name: baseline.name.clone(),
            market_cap: baseline.market_cap_billion * 1e9,
            market_cap_percentage: market_cap_percentage(baseline.market_cap_billion),
            performance,
            company_count: baseline.company_count,
            volume_today: self.rng.draw(1e6, 100e6),
            turnover_today: self.rng.draw(500e6, 10e9),
            top_companies,
        }
    }

    /// Widens an overview into the drill-down record.
    pub fn sector_detail(&mut self, overview: &SectorOverview) -> Sector {
        Sector {
            id: overview.id.clone(),
            name: overview.name.clone(),
            description: self.catalog.description_for(&overview.id).to_string(),
            market_cap: overview.market_cap,
            market_cap_percentage: overview.market_cap_percentage,
            company_count: overview.company_count,
            performance: overview.performance,
            volume_today: overview.volume_today,
            turnover_today: overview.turnover_today,
            volatility: self.rng.draw(15.0, 45.0),
            beta: self.rng.draw(0.7, 1.4),
            last_updated: self.now,
        }
    }
}
