use core_types::{CompanyTemplate, SectorBaseline, ValuationRatios};

/// Ratio baseline for sectors that carry no curated ratios.
pub const GENERIC_RATIOS: ValuationRatios = ValuationRatios {
    pe_ratio: 13.5,
    pb_ratio: 1.5,
    dividend_yield: 4.0,
    roe: 13.0,
    debt_to_equity: 1.3,
};

/// Placeholder templates for sectors without curated companies.
pub fn generic_templates() -> Vec<CompanyTemplate> {
    vec![
        CompanyTemplate::new("ABC", "ABC Limited", 100.00),
        CompanyTemplate::new("DEF", "DEF Corporation", 150.00),
        CompanyTemplate::new("GHI", "GHI Industries", 200.00),
    ]
}

struct Row {
    id: &'static str,
    name: &'static str,
    market_cap_billion: f64,
    company_count: u32,
    base_performance: f64,
    // pe, pb, dividend yield, roe, debt/equity
    ratios: (f64, f64, f64, f64, f64),
    description: &'static str,
}

// Approximations of the PSX sector classification, largest first.
const ROWS: [Row; 13] = [
    Row {
        id: "banking-finance",
        name: "Banking & Finance",
        market_cap_billion: 1250.0,
        company_count: 35,
        base_performance: 2.5,
        ratios: (8.5, 0.9, 4.2, 15.5, 2.1),
        description: "Commercial banks, investment banks, insurance companies, and financial services including HBL, UBL, MCB Bank, and other major financial institutions",
    },
    Row {
        id: "oil-gas",
        name: "Oil & Gas",
        market_cap_billion: 890.0,
        company_count: 18,
        base_performance: -1.2,
        ratios: (12.3, 1.2, 6.8, 12.8, 0.8),
        description: "Oil and gas exploration, production, refining, and marketing companies including OGDC, PPL, PSO, and other energy sector companies",
    },
    Row {
        id: "textiles",
        name: "Textiles",
        market_cap_billion: 450.0,
        company_count: 85,
        base_performance: 0.8,
        ratios: (15.2, 1.8, 3.5, 11.2, 1.5),
        description: "Textile manufacturing, spinning, weaving, and garment production companies representing Pakistan's largest export industry",
    },
    Row {
        id: "cement",
        name: "Cement",
        market_cap_billion: 380.0,
        company_count: 22,
        base_performance: 1.5,
        ratios: (11.8, 1.4, 5.2, 16.3, 1.2),
        description: "Cement manufacturing and building materials companies including Lucky Cement, DG Khan Cement, and other construction material producers",
    },
    Row {
        id: "fertilizer",
        name: "Fertilizer",
        market_cap_billion: 320.0,
        company_count: 8,
        base_performance: 3.2,
        ratios: (9.5, 1.1, 7.5, 18.2, 0.6),
        description: "Chemical fertilizer production and agricultural input companies supporting Pakistan's agricultural sector",
    },
    Row {
        id: "steel-engineering",
        name: "Steel & Engineering",
        market_cap_billion: 280.0,
        company_count: 45,
        base_performance: -0.5,
        ratios: (14.2, 1.6, 4.1, 10.8, 1.8),
        description: "Steel production, engineering goods, and heavy machinery companies including Pakistan Steel Mills and engineering firms",
    },
    Row {
        id: "chemicals-pharmaceuticals",
        name: "Chemicals & Pharmaceuticals",
        market_cap_billion: 250.0,
        company_count: 28,
        base_performance: 2.1,
        ratios: (16.5, 2.2, 3.8, 14.7, 0.9),
        description: "Chemical production, pharmaceutical manufacturing, and healthcare companies including GSK, Abbott, and local pharma companies",
    },
    Row {
        id: "food-agriculture",
        name: "Food & Agriculture",
        market_cap_billion: 220.0,
        company_count: 35,
        base_performance: 1.8,
        ratios: (13.8, 1.9, 4.5, 13.5, 1.1),
        description: "Food processing, agriculture, and consumer goods companies including Nestle Pakistan, National Foods, and agribusiness firms",
    },
    Row {
        id: "power-generation",
        name: "Power Generation",
        market_cap_billion: 180.0,
        company_count: 25,
        base_performance: -2.1,
        ratios: (10.2, 0.8, 8.2, 9.5, 2.5),
        description: "Electricity generation, power distribution, and energy companies including independent power producers and utility companies",
    },
    Row {
        id: "technology-telecom",
        name: "Technology & Telecom",
        market_cap_billion: 160.0,
        company_count: 15,
        base_performance: 4.5,
        ratios: (18.5, 2.8, 2.5, 16.8, 1.3),
        description: "Technology services, telecommunications, and IT companies including Jazz, Telenor Pakistan, and tech service providers",
    },
    Row {
        id: "automobile",
        name: "Automobile",
        market_cap_billion: 120.0,
        company_count: 18,
        base_performance: 0.3,
        ratios: (12.5, 1.5, 5.8, 12.2, 1.4),
        description: "Automobile assembly, parts manufacturing, and automotive services including Honda Atlas, Toyota IMC, and auto parts companies",
    },
    Row {
        id: "real-estate",
        name: "Real Estate",
        market_cap_billion: 90.0,
        company_count: 12,
        base_performance: -1.8,
        ratios: (8.8, 0.7, 6.5, 8.2, 2.8),
        description: "Real estate development, property management, and construction companies focusing on residential and commercial projects",
    },
    Row {
        id: "miscellaneous",
        name: "Miscellaneous",
        market_cap_billion: 150.0,
        company_count: 65,
        base_performance: 1.2,
        ratios: (13.5, 1.5, 4.0, 13.0, 1.3),
        description: "Companies not classified in other specific sectors including diversified businesses and emerging industries",
    },
];

fn curated_templates(sector_id: &str) -> Vec<CompanyTemplate> {
    let rows: &[(&str, &str, f64)] = match sector_id {
        "banking-finance" => &[
            ("HBL", "Habib Bank Limited", 125.50),
            ("UBL", "United Bank Limited", 165.25),
            ("MCB", "MCB Bank Limited", 220.75),
            ("ABL", "Allied Bank Limited", 85.30),
            ("NBP", "National Bank of Pakistan", 42.80),
        ],
        "oil-gas" => &[
            ("OGDC", "Oil & Gas Development Company", 85.30),
            ("PPL", "Pakistan Petroleum Limited", 95.60),
            ("PSO", "Pakistan State Oil", 145.80),
            ("SNGP", "Sui Northern Gas Pipelines", 45.20),
            ("SSGC", "Sui Southern Gas Company", 28.75),
        ],
        "cement" => &[
            ("LUCK", "Lucky Cement Limited", 485.25),
            ("DGKC", "D.G. Khan Cement Company", 75.40),
            ("MLCF", "Maple Leaf Cement Factory", 32.15),
            ("CHCC", "Cherat Cement Company", 125.80),
            ("PIOC", "Pioneer Cement Limited", 68.95),
        ],
        "textiles" => &[
            ("GATM", "Gul Ahmed Textile Mills", 45.80),
            ("KTML", "Kohinoor Textile Mills", 52.30),
            ("UNITY", "Unity Foods Limited", 28.75),
            ("SITC", "Sitara Chemical Industries", 285.60),
            ("LOTTE", "Lotte Chemical Pakistan", 18.25),
        ],
        "fertilizer" => &[
            ("FFC", "Fauji Fertilizer Company", 125.75),
            ("EFERT", "Engro Fertilizers Limited", 68.90),
            ("FATIMA", "Fatima Fertilizer Company", 32.85),
        ],
        _ => &[],
    };

    rows.iter()
        .map(|&(symbol, name, price)| CompanyTemplate::new(symbol, name, price))
        .collect()
}

/// The built-in PSX sector baselines, in catalog order.
pub fn psx_sectors() -> Vec<SectorBaseline> {
    ROWS.iter()
        .map(|row| {
            let (pe_ratio, pb_ratio, dividend_yield, roe, debt_to_equity) = row.ratios;
            SectorBaseline {
                id: row.id.to_string(),
                name: row.name.to_string(),
                market_cap_billion: row.market_cap_billion,
                company_count: row.company_count,
                base_performance: row.base_performance,
                ratios: Some(ValuationRatios {
                    pe_ratio,
                    pb_ratio,
                    dividend_yield,
                    roe,
                    debt_to_equity,
                }),
                description: row.description.to_string(),
                templates: curated_templates(row.id),
            }
        })
        .collect()
}
