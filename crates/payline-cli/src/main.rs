//! payline: affiliate commission and payout schedule tool.
//!
//! Reads affiliates from the local sale store, computes payout schedules as
//! of a given instant and records manual status overrides.

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use payline_engine::schedule::parse_instant;
use payline_store::{SaleStore, SqliteSaleStore};
use payline_types::PayoutStatus;
use tracing::info;

use crate::commands::Context;
use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "payline")]
#[command(about = "Affiliate commission and payout schedule tool")]
struct Cli {
    /// Data directory holding config.toml and payline.db.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Evaluation instant (YYYY-MM-DD or RFC 3339). Defaults to now.
    #[arg(long, global = true)]
    as_of: Option<String>,
    /// Print JSON instead of text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Payout schedule of one affiliate.
    Report { affiliate: String },
    /// Payout panels for every affiliate.
    Overview,
    /// Manually assign a payout status to a sale.
    SetStatus {
        affiliate: String,
        sale: String,
        #[arg(value_enum)]
        status: StatusCli,
    },
    /// Remove a sale's manual status.
    ClearStatus { affiliate: String, sale: String },
    /// Upcoming payout dates.
    Calendar {
        #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u16).range(1..=1000))]
        count: u16,
    },
    /// Replace the store contents with demo affiliates.
    Seed,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StatusCli {
    Pending,
    Eligible,
    Paid,
}

impl From<StatusCli> for PayoutStatus {
    fn from(value: StatusCli) -> Self {
        match value {
            StatusCli::Pending => PayoutStatus::PendingEligibility,
            StatusCli::Eligible => PayoutStatus::EligibleForPayout,
            StatusCli::Paid => PayoutStatus::Paid,
        }
    }
}

fn resolve_as_of(raw: Option<&str>) -> anyhow::Result<DateTime<Utc>> {
    match raw {
        Some(text) => parse_instant(text).with_context(|| format!("invalid --as-of value {text:?}")),
        None => Ok(Utc::now()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.data_dir.as_deref())?;

    // Logs go to stderr so stdout stays parseable with --json.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("payline={}", config.logging.log_level).parse()?)
                .add_directive(format!("payline_store={}", config.logging.log_level).parse()?)
                .add_directive(format!("payline_engine={}", config.logging.log_level).parse()?),
        )
        .init();

    let data_dir = config.data_dir();
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("creating data directory {}", data_dir.display()))?;

    let db_path = data_dir.join("payline.db");
    let mut store = SqliteSaleStore::open(&db_path)
        .with_context(|| format!("opening sale store {}", db_path.display()))?;

    if config.payouts.seed_demo_data && !store.has_data()? {
        info!("Empty sale store, seeding demo affiliates");
        payline_store::seed::seed(&mut store)?;
    }

    let ctx = Context {
        as_of: resolve_as_of(cli.as_of.as_deref())?,
        policy: config.payouts.status_policy,
        json: cli.json,
    };

    let output = match cli.command {
        Commands::Report { affiliate } => commands::report::run(&store, &ctx, &affiliate)?,
        Commands::Overview => commands::overview::run(&store, &ctx)?,
        Commands::SetStatus {
            affiliate,
            sale,
            status,
        } => commands::status::set(&mut store, &affiliate, &sale, status.into())?,
        Commands::ClearStatus { affiliate, sale } => {
            commands::status::clear(&mut store, &affiliate, &sale)?
        }
        Commands::Calendar { count } => commands::calendar::run(&ctx, usize::from(count))?,
        Commands::Seed => {
            let n = payline_store::seed::seed(&mut store)?;
            let total = store.load()?.iter().map(|a| a.sales.len()).sum::<usize>();
            format!("seeded {n} affiliates with {total} sales")
        }
    };

    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_set_status() {
        let cli = Cli::try_parse_from(["payline", "set-status", "AFF-001", "SALE-1001", "paid", "--json"])
            .expect("parse");
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Commands::SetStatus { status: StatusCli::Paid, .. }
        ));
    }

    #[test]
    fn test_calendar_count_bounds() {
        let cli = Cli::try_parse_from(["payline", "calendar", "--count", "12"]).expect("parse");
        assert!(matches!(cli.command, Commands::Calendar { count: 12 }));
        assert!(Cli::try_parse_from(["payline", "calendar", "--count", "0"]).is_err());
        assert!(Cli::try_parse_from(["payline", "calendar", "--count", "1001"]).is_err());
        assert!(Cli::try_parse_from(["payline", "calendar", "--count", "18446744073709551615"]).is_err());
    }

    #[test]
    fn test_resolve_as_of() {
        let ts = resolve_as_of(Some("2024-08-05")).expect("date");
        assert_eq!(ts.to_rfc3339(), "2024-08-05T00:00:00+00:00");
        assert!(resolve_as_of(Some("yesterday")).is_err());
    }
}
