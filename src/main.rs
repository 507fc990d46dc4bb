use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use taxnav::api::api_router;
use taxnav::config::AppConfig;
use taxnav::engines::matching::{
    self, load_offers_from_path, MatchingEngine, UserProfile, DEFAULT_TOP_MATCHES,
};
use taxnav::engines::tax::{
    calculate_child_tax_credit, calculate_income_tax, calculate_self_employment_tax,
    standard_deduction, FilingStatus, MemoryTaxReturnStore, LATEST_TAX_YEAR,
};
use taxnav::error::AppError;
use taxnav::telemetry;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Tax Navigator",
    about = "Match taxpayers to free-filing partners and estimate federal income tax",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank partner offers from a directory CSV against a taxpayer profile
    Match(MatchArgs),
    /// Estimate federal income tax for a taxable income figure
    Estimate(EstimateArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct MatchArgs {
    /// Partner directory CSV (falls back to OFFER_DIRECTORY from the env)
    #[arg(long)]
    offers: Option<PathBuf>,
    /// Adjusted gross income
    #[arg(long)]
    agi: f64,
    /// Filer age
    #[arg(long)]
    age: Option<u8>,
    /// Two-letter state code
    #[arg(long)]
    state: String,
    /// Filing status (single, married-joint, married-separate,
    /// head-of-household, qualifying-widow)
    #[arg(long, value_parser = parse_filing_status, default_value = "single")]
    filing_status: FilingStatus,
    /// Schedules the filer needs, semicolon separated (e.g. "C;SE")
    #[arg(long)]
    schedules: Option<String>,
    #[arg(long)]
    needs_state_return: bool,
    #[arg(long)]
    needs_prior_year: bool,
    #[arg(long)]
    military: bool,
    #[arg(long)]
    student: bool,
    #[arg(long)]
    disability: bool,
    #[arg(long)]
    spanish: bool,
    #[arg(long)]
    live_support: bool,
    #[arg(long)]
    mobile_app: bool,
    /// Include ineligible offers in the listing
    #[arg(long)]
    show_ineligible: bool,
}

#[derive(Args, Debug)]
struct EstimateArgs {
    /// Taxable income after deductions
    #[arg(long)]
    taxable_income: f64,
    #[arg(long, value_parser = parse_filing_status, default_value = "single")]
    filing_status: FilingStatus,
    /// Tax year (defaults to the latest supported tables)
    #[arg(long, default_value_t = LATEST_TAX_YEAR)]
    tax_year: u16,
    /// Net self-employment income, when any
    #[arg(long, default_value_t = 0.0)]
    se_income: f64,
    /// Qualifying children for the child tax credit
    #[arg(long, default_value_t = 0)]
    children: u32,
    /// AGI used for credit phase-outs (defaults to taxable income)
    #[arg(long)]
    agi: Option<f64>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Match(args) => run_match(args),
        Command::Estimate(args) => run_estimate(args),
    }
}

fn parse_filing_status(raw: &str) -> Result<FilingStatus, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "single" => Ok(FilingStatus::Single),
        "married-joint" => Ok(FilingStatus::MarriedJoint),
        "married-separate" => Ok(FilingStatus::MarriedSeparate),
        "head-of-household" => Ok(FilingStatus::HeadOfHousehold),
        "qualifying-widow" => Ok(FilingStatus::QualifyingWidow),
        other => Err(format!("unknown filing status '{other}'")),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let store = Arc::new(MemoryTaxReturnStore::default());

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(api_router(store))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "tax navigator ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let offers_path = match args.offers.clone() {
        Some(path) => path,
        None => {
            let config = AppConfig::load()?;
            config.matching.offer_directory.ok_or_else(|| {
                AppError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no offer directory given; pass --offers or set OFFER_DIRECTORY",
                ))
            })?
        }
    };

    let offers = load_offers_from_path(&offers_path)?;
    let profile = profile_from_args(&args);

    let engine = MatchingEngine::new();
    let results = engine.score(&offers, &profile);

    println!(
        "Scored {} offer(s) for AGI ${:.0} in {}",
        results.len(),
        profile.agi,
        profile.state
    );

    let top = matching::top_matches(&results, DEFAULT_TOP_MATCHES);
    if top.is_empty() {
        println!("\nNo eligible offers");
    } else {
        println!("\nTop matches");
        for result in &top {
            println!("- {} (score {})", result.offer.name, result.score);
            for reason in &result.reasons.eligible {
                println!("    + {reason}");
            }
            for warning in &result.reasons.warnings {
                println!("    ! {warning}");
            }
        }
    }

    let remaining_eligible = matching::eligible_matches(&results)
        .len()
        .saturating_sub(top.len());
    if remaining_eligible > 0 {
        println!("\n{remaining_eligible} more eligible offer(s) not shown");
    }

    if args.show_ineligible {
        let ineligible = matching::ineligible_matches(&results);
        if !ineligible.is_empty() {
            println!("\nIneligible offers");
            for result in ineligible {
                println!(
                    "- {}: {}",
                    result.offer.name,
                    result.reasons.disqualified.join("; ")
                );
            }
        }
    }

    Ok(())
}

fn profile_from_args(args: &MatchArgs) -> UserProfile {
    let has_schedules: BTreeSet<String> = args
        .schedules
        .as_deref()
        .map(|raw| {
            raw.split(';')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_ascii_uppercase)
                .collect()
        })
        .unwrap_or_default();

    UserProfile {
        agi: args.agi,
        age: args.age,
        state: args.state.to_ascii_uppercase(),
        needs_state_tax_return: args.needs_state_return,
        filing_status: args.filing_status,
        has_schedules,
        needs_prior_year_return: args.needs_prior_year,
        is_military: args.military,
        is_student: args.student,
        has_disability: args.disability,
        prefer_spanish: args.spanish,
        wants_live_support: args.live_support,
        wants_mobile_app: args.mobile_app,
    }
}

fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let agi = args.agi.unwrap_or(args.taxable_income);

    let income_tax = calculate_income_tax(args.taxable_income, args.filing_status, args.tax_year);
    let se = calculate_self_employment_tax(args.se_income, args.filing_status, args.tax_year);
    let child_tax_credit =
        calculate_child_tax_credit(args.children, agi, args.filing_status, args.tax_year);

    println!(
        "Tax year {} ({})",
        args.tax_year,
        args.filing_status.label()
    );
    println!(
        "Standard deduction: ${:.2}",
        standard_deduction(args.tax_year, args.filing_status)
    );
    println!(
        "Income tax on ${:.2}: ${:.2}",
        args.taxable_income, income_tax
    );
    if args.se_income > 0.0 {
        println!(
            "Self-employment tax: ${:.2} (deductible half ${:.2})",
            se.se_tax, se.deductible_amount
        );
    }
    if args.children > 0 {
        println!("Child tax credit: ${child_tax_credit:.2}");
    }

    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
