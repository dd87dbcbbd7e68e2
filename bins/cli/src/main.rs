//! ERPVN command line.
//!
//! Renders amounts in Vietnamese words, plans daily reports, and lists
//! draft reports due for cleanup.

use std::io::{self, Read};

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use erpvn_core::amount_words::number_to_text_vn;
use erpvn_core::report::{Report, ReportService};
use erpvn_shared::{AppConfig, AppError};

#[derive(Parser, Debug)]
#[command(
    name = "erpvn",
    version,
    about = "Vietnamese ERP helpers: amount in words, daily report planning.",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an amount in Vietnamese words
    Words {
        /// Non-negative amount, e.g. 1200000 or 10.50
        amount: Decimal,

        /// Currency code (defaults to the configured currency)
        #[arg(long, short)]
        currency: Option<String>,

        /// Print a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// List days in a range that still need a daily report
    Plan {
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,

        /// Last day, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: NaiveDate,

        /// Days that already have a report
        #[arg(long)]
        existing: Vec<NaiveDate>,

        /// Reference day; later days are rejected (defaults to today, UTC)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Read reports as JSON from stdin and print ids of stale drafts
    Stale {
        /// Reference day (defaults to today, UTC)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

#[derive(Debug, Serialize)]
struct WordsOutput<'a> {
    amount: Decimal,
    currency: &'a str,
    text: String,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "erpvn_core=info,erpvn=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AppConfig::load()
        .map_err(AppError::from)
        .context("failed to load configuration")?;

    match Cli::parse().command {
        Command::Words {
            amount,
            currency,
            json,
        } => {
            let currency = currency.unwrap_or(config.amount_words.default_currency);
            let text = number_to_text_vn(amount, &currency).map_err(AppError::from)?;
            if json {
                let output = WordsOutput {
                    amount,
                    currency: &currency,
                    text,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{text}");
            }
        }
        Command::Plan {
            from,
            to,
            existing,
            today,
        } => {
            let today = today.unwrap_or_else(|| Utc::now().date_naive());
            let days = ReportService::plan_daily_reports(from, to, today, &existing)
                .map_err(AppError::from)?;
            info!(count = days.len(), "days without a daily report");
            for day in days {
                println!("{day}");
            }
        }
        Command::Stale { today } => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read reports from stdin")?;
            let reports: Vec<Report> =
                serde_json::from_str(&input).context("stdin is not a JSON array of reports")?;

            let today = today.unwrap_or_else(|| Utc::now().date_naive());
            let stale = ReportService::stale_drafts(
                &reports,
                today,
                config.reports.draft_retention_days,
            );
            for id in stale {
                println!("{id}");
            }
        }
    }

    Ok(())
}
