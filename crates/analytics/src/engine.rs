use crate::error::AnalyticsError;
use crate::random::BoundedRandom;
use crate::ranking::{sort_companies, sort_sectors};
use crate::report::{
    HealthResponse, SectorCompaniesResponse, SectorCompareResponse, SectorDetailResponse,
    SectorsOverviewResponse,
};
use crate::synthesizer::MetricSynthesizer;
use crate::validation::{
    CompareRequest, SectorsRequest, resolve_limit, validate_compare_request,
    validate_sectors_request,
};
use catalog::SectorCatalog;
use chrono::{DateTime, Utc};
use configuration::EngineConfig;
use core_types::{CompanySortKey, SectorBaseline, SectorOverview};

/// The request-scoped aggregation engine.
///
/// Holds no state between requests: build one per request with its own random
/// source. Every operation validates and resolves sector ids before the first
/// random draw, so a rejected request leaves the source untouched.
pub struct SectorEngine<'a, R: BoundedRandom> {
    catalog: &'a SectorCatalog,
    config: EngineConfig,
    rng: R,
    as_of: Option<DateTime<Utc>>,
}

impl<'a, R: BoundedRandom> SectorEngine<'a, R> {
    pub fn new(catalog: &'a SectorCatalog, config: EngineConfig, rng: R) -> Self {
        Self {
            catalog,
            config,
            rng,
            as_of: None,
        }
    }

    /// Pins the clock, so timestamps and chart windows are reproducible.
    pub fn with_clock(mut self, as_of: DateTime<Utc>) -> Self {
        self.as_of = Some(as_of);
        self
    }

    pub fn into_rng(self) -> R {
        self.rng
    }

    fn now(&self) -> DateTime<Utc> {
        self.as_of.unwrap_or_else(Utc::now)
    }

    fn synthesizer(&mut self, now: DateTime<Utc>) -> MetricSynthesizer<'_, R> {
        MetricSynthesizer::new(self.catalog, &mut self.rng, now)
    }

    fn lookup(&self, sector_id: &str) -> Result<&'a SectorBaseline, AnalyticsError> {
        self.catalog
            .baseline(sector_id)
            .map_err(|_| AnalyticsError::NotFound(sector_id.to_string()))
    }

    /// GetAllSectors: validate, synthesize every sector, then order them.
    pub fn all_sectors(
        &mut self,
        request: &SectorsRequest,
    ) -> Result<SectorsOverviewResponse, AnalyticsError> {
        let query = validate_sectors_request(request)?;
        let now = self.now();

        let mut sectors = self.overviews_for_all_sectors();
        let market_summary = self.synthesizer(now).market_summary();
        sort_sectors(&mut sectors, query.sort_by, query.sort_order);

        Ok(SectorsOverviewResponse {
            sectors,
            market_summary,
            last_updated: now,
        })
    }

    /// One overview per catalog entry, in catalog order.
    ///
    /// Performance horizons are the same for every timeframe, so no timeframe
    /// is taken here.
    pub fn overviews_for_all_sectors(&mut self) -> Vec<SectorOverview> {
        let now = self.now();
        let top = self.config.top_companies;
        let catalog = self.catalog;
        let mut synth = self.synthesizer(now);

        catalog
            .baselines()
            .iter()
            .map(|baseline| synth.sector_overview(baseline, top))
            .collect()
    }

    /// The overview for a single sector, on the same path as the full list.
    pub fn sector_overview(&mut self, sector_id: &str) -> Result<SectorOverview, AnalyticsError> {
        let baseline = self.lookup(sector_id)?;
        let now = self.now();
        let top = self.config.top_companies;
        Ok(self.synthesizer(now).sector_overview(baseline, top))
    }

    /// GetSectorDetails. Any timeframe code is accepted; unknown codes chart
    /// like `1M`.
    pub fn sector_details(
        &mut self,
        sector_id: &str,
        timeframe: &str,
    ) -> Result<SectorDetailResponse, AnalyticsError> {
        let baseline = self.lookup(sector_id)?;
        let now = self.now();
        let top = self.config.top_companies;
        let detail_count = self.config.detail_companies;
        let mut synth = self.synthesizer(now);

        let overview = synth.sector_overview(baseline, top);
        let sector = synth.sector_detail(&overview);
        let performance_chart = synth.chart_series(timeframe);
        let financial_metrics = synth.financial_metrics(&baseline.id);
        let volume_metrics = synth.volume_metrics();
        let companies = synth.companies(&baseline.id, detail_count);

        Ok(SectorDetailResponse {
            sector,
            performance_chart,
            financial_metrics,
            volume_metrics,
            companies,
        })
    }

    /// GetSectorCompanies: `limit` companies ranked by `sort_by`.
    pub fn sector_companies(
        &mut self,
        sector_id: &str,
        limit: Option<usize>,
        sort_by: CompanySortKey,
    ) -> Result<SectorCompaniesResponse, AnalyticsError> {
        let baseline = self.lookup(sector_id)?;
        let limit = resolve_limit(
            limit,
            self.config.default_company_limit,
            self.config.max_company_limit,
        );
        let now = self.now();

        let mut companies = self.synthesizer(now).companies(&baseline.id, limit);
        sort_companies(&mut companies, sort_by);
        companies.truncate(limit);

        Ok(SectorCompaniesResponse {
            sector_id: baseline.id.clone(),
            sector_name: baseline.name.clone(),
            companies,
            total_count: baseline.company_count,
        })
    }

    /// CompareSectors. All-or-nothing: the first unknown id fails the request
    /// before anything is synthesized.
    pub fn compare_sectors(
        &mut self,
        request: &CompareRequest,
    ) -> Result<SectorCompareResponse, AnalyticsError> {
        let query = validate_compare_request(request)?;
        let baselines = query
            .sector_ids
            .iter()
            .map(|id| self.lookup(id))
            .collect::<Result<Vec<_>, _>>()?;

        let now = self.now();
        let top = self.config.top_companies;
        let mut synth = self.synthesizer(now);
        let comparison = baselines
            .into_iter()
            .map(|baseline| synth.sector_overview(baseline, top))
            .collect();

        Ok(SectorCompareResponse {
            comparison,
            timeframe: query.timeframe,
            metrics: query.metrics,
            generated_at: now,
        })
    }

    pub fn health(&self) -> HealthResponse {
        HealthResponse::healthy(self.now())
    }
}
