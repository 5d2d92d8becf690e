use analytics::{
    CompareRequest, SectorCompaniesResponse, SectorDetailResponse, SectorEngine,
    SectorsOverviewResponse, SectorsRequest, UniformSource,
};
use anyhow::Result;
use catalog::SectorCatalog;
use clap::{Args, Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use configuration::{Config, LoggingConfig};
use core_types::{CompanySortKey, SectorOverview};
use serde::Serialize;
use std::net::IpAddr;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// The main entry point for the PSX sector analytics service.
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file, if there is one
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = configuration::load_config(&cli.config)?;
    if let Some(seed) = cli.seed {
        config.engine.seed = Some(seed);
    }
    let _guard = init_tracing(&config.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => {
            if let Some(host) = args.host {
                config.server.host = host;
            }
            if let Some(port) = args.port {
                config.server.port = port;
            }
            web_server::run_server(config).await
        }
        Commands::Overview(args) => handle_overview(args, &config),
        Commands::Sector(args) => handle_sector(args, &config),
        Commands::Companies(args) => handle_companies(args, &config),
        Commands::Compare(args) => handle_compare(args, &config),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Sector-level analytics for the Pakistan Stock Exchange.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    /// Fix the random stream for reproducible output.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API.
    Serve(ServeArgs),
    /// Overview of every sector with the market summary.
    Overview(OverviewArgs),
    /// Detailed analysis of a single sector.
    Sector(SectorArgs),
    /// Ranked companies within a sector.
    Companies(CompaniesArgs),
    /// Side-by-side comparison of several sectors.
    Compare(CompareArgs),
}

#[derive(Args)]
struct ServeArgs {
    #[arg(long)]
    host: Option<IpAddr>,
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args)]
struct OverviewArgs {
    /// One of 1D, 1W, 1M, 3M, 6M, 1Y.
    #[arg(long, default_value = "1D")]
    timeframe: String,
    /// One of market_cap, performance, volume, company_count.
    #[arg(long, default_value = "market_cap")]
    sort_by: String,
    /// asc or desc.
    #[arg(long, default_value = "desc")]
    sort_order: String,
    /// Print the raw response as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SectorArgs {
    /// Sector identifier, e.g. "cement".
    sector_id: String,
    #[arg(long, default_value = "1D")]
    timeframe: String,
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CompaniesArgs {
    sector_id: String,
    #[arg(long)]
    limit: Option<usize>,
    /// One of market_cap, performance, volume, pe_ratio.
    #[arg(long, default_value = "market_cap")]
    sort_by: String,
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CompareArgs {
    /// One or more sector identifiers.
    #[arg(required = true)]
    sector_ids: Vec<String>,
    #[arg(long, default_value = "1D")]
    timeframe: String,
    /// Comma-separated metric names (advisory).
    #[arg(long, value_delimiter = ',')]
    metrics: Vec<String>,
    #[arg(long)]
    json: bool,
}

// ==============================================================================
// Logging
// ==============================================================================

/// Console logging to stderr, plus a daily rolling file when a directory is set.
///
/// `RUST_LOG` takes precedence over the configured level. The returned guard
/// must live until exit so buffered file output is flushed.
fn init_tracing(logging: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))?;
    let console = fmt::layer().with_writer(std::io::stderr);

    match &logging.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, &logging.file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry().with(filter).with(console).init();
            Ok(None)
        }
    }
}

// ==============================================================================
// Command Handlers
// ==============================================================================

fn engine<'a>(catalog: &'a SectorCatalog, config: &Config) -> SectorEngine<'a, UniformSource> {
    let rng = UniformSource::from_optional_seed(config.engine.seed);
    tracing::debug!(seeded = config.engine.seed.is_some(), sectors = catalog.len(), "Engine ready.");
    SectorEngine::new(catalog, config.engine.clone(), rng)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn handle_overview(args: OverviewArgs, config: &Config) -> Result<()> {
    let catalog = web_server::catalog_from_config(config)?;
    let request = SectorsRequest {
        timeframe: args.timeframe,
        sort_by: args.sort_by,
        sort_order: args.sort_order,
    };
    let response = engine(&catalog, config).all_sectors(&request)?;

    if args.json {
        return print_json(&response);
    }
    print_market_summary(&response);
    println!("{}", sector_table(&response.sectors));
    Ok(())
}

fn handle_sector(args: SectorArgs, config: &Config) -> Result<()> {
    let catalog = web_server::catalog_from_config(config)?;
    let response = engine(&catalog, config).sector_details(&args.sector_id, &args.timeframe)?;

    if args.json {
        return print_json(&response);
    }
    print_sector_details(&response);
    Ok(())
}

fn handle_companies(args: CompaniesArgs, config: &Config) -> Result<()> {
    let catalog = web_server::catalog_from_config(config)?;
    let sort_by = CompanySortKey::parse_lenient(&args.sort_by);
    let response = engine(&catalog, config).sector_companies(&args.sector_id, args.limit, sort_by)?;

    if args.json {
        return print_json(&response);
    }
    print_companies(&response);
    Ok(())
}

fn handle_compare(args: CompareArgs, config: &Config) -> Result<()> {
    let catalog = web_server::catalog_from_config(config)?;
    let request = CompareRequest {
        sector_ids: args.sector_ids,
        timeframe: args.timeframe,
        metrics: args.metrics,
    };
    let response = engine(&catalog, config).compare_sectors(&request)?;

    if args.json {
        return print_json(&response);
    }
    println!("Comparison ({}), generated {}", response.timeframe, response.generated_at);
    println!("{}", sector_table(&response.comparison));
    Ok(())
}

// ==============================================================================
// Table Rendering
// ==============================================================================

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn billions(value: f64) -> String {
    format!("{:.2}B", value / 1e9)
}

fn millions(value: f64) -> String {
    format!("{:.2}M", value / 1e6)
}

fn signed_pct(value: f64) -> String {
    format!("{value:+.2}%")
}

fn right(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

fn sector_table(sectors: &[SectorOverview]) -> Table {
    let mut table = new_table(vec![
        "Sector", "Market Cap", "Share", "Change", "1W", "1M", "1Y", "Companies", "Volume", "Leaders",
    ]);
    for sector in sectors {
        let leaders = sector
            .top_companies
            .iter()
            .map(|c| c.symbol.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(&sector.name),
            right(billions(sector.market_cap)),
            right(format!("{:.2}%", sector.market_cap_percentage)),
            right(signed_pct(sector.performance.current_change)),
            right(signed_pct(sector.performance.one_week)),
            right(signed_pct(sector.performance.one_month)),
            right(signed_pct(sector.performance.one_year)),
            right(sector.company_count.to_string()),
            right(millions(sector.volume_today)),
            Cell::new(leaders),
        ]);
    }
    table
}

fn print_market_summary(response: &SectorsOverviewResponse) {
    let summary = &response.market_summary;
    println!(
        "KSE-100 {:.2} ({}) | Market cap {:.2}T | Volume {} | Turnover {} | A/D {:.2}",
        summary.kse100_index,
        signed_pct(summary.kse100_change),
        summary.total_market_cap / 1e12,
        millions(summary.total_volume),
        billions(summary.total_turnover),
        summary.advance_decline_ratio,
    );
}

fn print_sector_details(response: &SectorDetailResponse) {
    let sector = &response.sector;
    println!("{} ({})", sector.name, sector.id);
    println!("{}", sector.description);
    println!(
        "Market cap {} ({:.2}% of market) | {} companies | volatility {:.1} | beta {:.2}",
        billions(sector.market_cap),
        sector.market_cap_percentage,
        sector.company_count,
        sector.volatility,
        sector.beta,
    );

    let f = &response.financial_metrics;
    let mut ratios = new_table(vec!["P/E", "P/B", "Div. Yield", "ROE", "D/E", "Median Cap"]);
    ratios.add_row(vec![
        right(format!("{:.2}", f.avg_pe_ratio)),
        right(format!("{:.2}", f.avg_pb_ratio)),
        right(format!("{:.2}%", f.avg_dividend_yield)),
        right(format!("{:.2}%", f.avg_roe)),
        right(format!("{:.2}", f.avg_debt_to_equity)),
        right(billions(f.median_market_cap)),
    ]);
    println!("{ratios}");

    let v = &response.volume_metrics;
    println!(
        "Volume today {} (30d avg {}) | Turnover today {} (30d avg {})",
        millions(v.today_volume),
        millions(v.avg_volume_30d),
        billions(v.today_turnover),
        billions(v.avg_turnover_30d),
    );

    let chart = &response.performance_chart;
    if let (Some(first), Some(last)) = (chart.data_points.first(), chart.data_points.last()) {
        println!(
            "Chart {}: {} points, {:.2} -> {:.2}",
            chart.timeframe,
            chart.data_points.len(),
            first.value,
            last.value,
        );
    }
}

fn print_companies(response: &SectorCompaniesResponse) {
    println!(
        "{} ({} listed, showing {})",
        response.sector_name,
        response.total_count,
        response.companies.len()
    );
    let mut table = new_table(vec!["Symbol", "Name", "Market Cap", "Price", "Change", "Volume", "P/E", "P/B"]);
    for company in &response.companies {
        table.add_row(vec![
            Cell::new(&company.symbol),
            Cell::new(&company.name),
            right(billions(company.market_cap)),
            right(format!("{:.2}", company.current_price)),
            right(signed_pct(company.change_percent)),
            right(format!("{:.0}", company.volume)),
            right(format!("{:.2}", company.pe_ratio)),
            right(format!("{:.2}", company.pb_ratio)),
        ]);
    }
    println!("{table}");
}
