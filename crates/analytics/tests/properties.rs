//! Property tests for the synthesis bounds: horizon anchoring, the chart floor
//! and the ordering of sorted responses, across arbitrary seeds.

use analytics::synthesizer::{CHART_FLOOR, horizon};
use analytics::{MetricSynthesizer, SectorEngine, SectorsRequest, UniformSource};
use catalog::SectorCatalog;
use chrono::{TimeZone, Utc};
use configuration::EngineConfig;
use proptest::prelude::*;

fn within((min, max): (f64, f64), offset: f64) -> bool {
    // Offsets are recovered by subtraction, so allow rounding at the edges.
    const EPS: f64 = 1e-9;
    offset >= min - EPS && offset <= max + EPS
}

fn arb_timeframe() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("1D"),
        Just("1W"),
        Just("1M"),
        Just("3M"),
        Just("6M"),
        Just("1Y"),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10_000))]

    #[test]
    fn prop_horizons_stay_anchored(seed in any::<u64>(), base in -10.0f64..10.0) {
        let catalog = SectorCatalog::psx();
        let mut rng = UniformSource::with_seed(seed);
        let mut synth = MetricSynthesizer::new(&catalog, &mut rng, Utc::now());

        let p = synth.performance_bundle(base);
        let c = p.current_change;
        prop_assert!(within(horizon::CURRENT, c - base));
        prop_assert!(within(horizon::ONE_WEEK, p.one_week - c));
        prop_assert!(within(horizon::ONE_MONTH, p.one_month - c));
        prop_assert!(within(horizon::THREE_MONTHS, p.three_months - c));
        prop_assert!(within(horizon::SIX_MONTHS, p.six_months - c));
        prop_assert!(within(horizon::ONE_YEAR, p.one_year - c));
        prop_assert!(within(horizon::YTD, p.ytd - c));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_chart_never_drops_below_floor(seed in any::<u64>(), timeframe in arb_timeframe()) {
        let catalog = SectorCatalog::psx();
        let mut rng = UniformSource::with_seed(seed);
        let mut synth = MetricSynthesizer::new(&catalog, &mut rng, Utc::now());

        let series = synth.chart_series(timeframe);
        prop_assert!(!series.data_points.is_empty());
        for point in &series.data_points {
            prop_assert!(point.value >= CHART_FLOOR);
            prop_assert!(point.volume >= 100_000.0 && point.volume < 2_000_000.0);
        }
    }

    #[test]
    fn prop_volume_desc_holds_for_any_seed(seed in any::<u64>()) {
        let catalog = SectorCatalog::psx();
        let clock = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let mut engine = SectorEngine::new(&catalog, EngineConfig::default(), UniformSource::with_seed(seed))
            .with_clock(clock);
        let request = SectorsRequest {
            timeframe: "1D".to_string(),
            sort_by: "volume".to_string(),
            sort_order: "desc".to_string(),
        };

        let response = engine.all_sectors(&request).unwrap();
        for pair in response.sectors.windows(2) {
            prop_assert!(pair[0].volume_today >= pair[1].volume_today);
        }
    }

    #[test]
    fn prop_top_company_price_follows_change(seed in any::<u64>()) {
        let catalog = SectorCatalog::psx();
        let mut rng = UniformSource::with_seed(seed);
        let mut synth = MetricSynthesizer::new(&catalog, &mut rng, Utc::now());

        let templates = catalog.company_templates_for("banking-finance").to_vec();
        for (company, template) in synth.top_companies("banking-finance", 5).iter().zip(&templates) {
            let expected = template.reference_price * (1.0 + company.change_percent / 100.0);
            prop_assert!((company.current_price - expected).abs() < 1e-9);
            prop_assert!(company.change_percent >= -5.0 && company.change_percent < 5.0);
            prop_assert!(company.market_cap >= 50e9 && company.market_cap < 500e9);
        }
    }
}
