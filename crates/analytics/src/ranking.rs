use core_types::{Company, CompanySortKey, SectorOverview, SectorSortKey, SortOrder};
use std::cmp::Ordering;

/// Fixed exchange-wide market cap, in billions, that sector shares are taken of.
///
/// This is a constant rather than the sum of the sampled sectors, so shares are
/// stable across calls but need not add up to exactly 100.
pub const TOTAL_MARKET_CAP_BILLION: f64 = 4740.0;

pub fn market_cap_percentage(market_cap_billion: f64) -> f64 {
    market_cap_billion / TOTAL_MARKET_CAP_BILLION * 100.0
}

fn compare_sectors(a: &SectorOverview, b: &SectorOverview, key: SectorSortKey) -> Ordering {
    match key {
        SectorSortKey::MarketCap => a.market_cap.total_cmp(&b.market_cap),
        SectorSortKey::Performance => a
            .performance
            .current_change
            .total_cmp(&b.performance.current_change),
        SectorSortKey::Volume => a.volume_today.total_cmp(&b.volume_today),
        SectorSortKey::CompanyCount => a.company_count.cmp(&b.company_count),
    }
}

/// Orders overviews by `key`. `Desc` reverses the comparator; ties keep their
/// catalog order in either direction.
pub fn sort_sectors(sectors: &mut [SectorOverview], key: SectorSortKey, order: SortOrder) {
    sectors.sort_by(|a, b| {
        let ordering = compare_sectors(a, b, key);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Ranks companies: P/E ascending (cheapest first), every other key descending.
pub fn sort_companies(companies: &mut [Company], key: CompanySortKey) {
    companies.sort_by(|a, b| match key {
        CompanySortKey::MarketCap => b.market_cap.total_cmp(&a.market_cap),
        CompanySortKey::Performance => b.change_percent.total_cmp(&a.change_percent),
        CompanySortKey::Volume => b.volume.total_cmp(&a.volume),
        CompanySortKey::PeRatio => a.pe_ratio.total_cmp(&b.pe_ratio),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use core_types::PerformanceBundle;

    fn overview(id: &str, market_cap: f64, change: f64, volume: f64, count: u32) -> SectorOverview {
        SectorOverview {
            id: id.to_string(),
            name: id.to_string(),
            market_cap,
            market_cap_percentage: 0.0,
            performance: PerformanceBundle {
                current_change: change,
                one_week: change,
                one_month: change,
                three_months: change,
                six_months: change,
                one_year: change,
                ytd: change,
            },
            company_count: count,
            volume_today: volume,
            turnover_today: 0.0,
            top_companies: Vec::new(),
        }
    }

    fn company(symbol: &str, market_cap: f64, change: f64, volume: f64, pe: f64) -> Company {
        Company {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            sector_id: "x".to_string(),
            market_cap,
            market_cap_percentage: 0.0,
            current_price: 0.0,
            change_percent: change,
            volume,
            pe_ratio: pe,
            pb_ratio: 0.0,
            dividend_yield: 0.0,
            last_updated: Utc::now(),
        }
    }

    fn ids(sectors: &[SectorOverview]) -> Vec<&str> {
        sectors.iter().map(|s| s.id.as_str()).collect()
    }

    fn sample() -> Vec<SectorOverview> {
        vec![
            overview("a", 200.0, -1.0, 30.0, 5),
            overview("b", 900.0, 3.0, 10.0, 40),
            overview("c", 500.0, 0.5, 20.0, 12),
        ]
    }

    #[test]
    fn market_cap_share_uses_fixed_total() {
        assert_eq!(market_cap_percentage(4740.0), 100.0);
        assert!((market_cap_percentage(1250.0) - 26.371_308).abs() < 1e-5);
    }

    #[test]
    fn sectors_sort_by_each_key() {
        let mut s = sample();
        sort_sectors(&mut s, SectorSortKey::MarketCap, SortOrder::Desc);
        assert_eq!(ids(&s), ["b", "c", "a"]);

        sort_sectors(&mut s, SectorSortKey::Performance, SortOrder::Asc);
        assert_eq!(ids(&s), ["a", "c", "b"]);

        sort_sectors(&mut s, SectorSortKey::Volume, SortOrder::Desc);
        assert_eq!(ids(&s), ["a", "c", "b"]);

        sort_sectors(&mut s, SectorSortKey::CompanyCount, SortOrder::Asc);
        assert_eq!(ids(&s), ["a", "c", "b"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let mut s = vec![
            overview("first", 100.0, 0.0, 0.0, 1),
            overview("second", 100.0, 0.0, 0.0, 1),
        ];
        sort_sectors(&mut s, SectorSortKey::MarketCap, SortOrder::Desc);
        assert_eq!(ids(&s), ["first", "second"]);
        sort_sectors(&mut s, SectorSortKey::MarketCap, SortOrder::Asc);
        assert_eq!(ids(&s), ["first", "second"]);
    }

    #[test]
    fn companies_rank_descending_except_pe() {
        let mut c = vec![
            company("x", 10.0, 1.0, 500.0, 20.0),
            company("y", 30.0, -2.0, 900.0, 9.0),
            company("z", 20.0, 4.0, 100.0, 14.0),
        ];
        let symbols = |c: &[Company]| c.iter().map(|c| c.symbol.clone()).collect::<Vec<_>>();

        sort_companies(&mut c, CompanySortKey::MarketCap);
        assert_eq!(symbols(&c), ["y", "z", "x"]);
        sort_companies(&mut c, CompanySortKey::Performance);
        assert_eq!(symbols(&c), ["z", "x", "y"]);
        sort_companies(&mut c, CompanySortKey::Volume);
        assert_eq!(symbols(&c), ["y", "x", "z"]);
        sort_companies(&mut c, CompanySortKey::PeRatio);
        assert_eq!(symbols(&c), ["y", "z", "x"]);
    }
}
