//! agecalc - exact age between two dates
//!
//! Usage:
//!   agecalc 1990-06-15                      - age today
//!   agecalc "June 15, 1990" --on 2024-01-01 - age on a given date
//!   agecalc 15/06/1990 --format day-first   - force a date order
//!   agecalc 1990-06-15 --json               - machine-readable report

use agecalc::{AgeReport, CalendarDate, DEFAULT_FORMATS, DateFormat, parse_date_with};
use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "agecalc")]
#[command(about = "Exact age, next-birthday countdown and zodiac sign for a birth date")]
#[command(version)]
struct Cli {
    /// Birth date: YYYY-MM-DD, MM/DD/YYYY, DD/MM/YYYY or text like "June 15, 1990"
    birth: String,

    /// Date to measure against (defaults to today's local date)
    #[arg(long = "on", value_name = "DATE")]
    target: Option<String>,

    /// Date formats to try, in order: iso, month-first, day-first, natural
    #[arg(long = "format", value_name = "FORMAT")]
    formats: Vec<DateFormat>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log how dates were resolved (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let formats = if cli.formats.is_empty() {
        DEFAULT_FORMATS.to_vec()
    } else {
        cli.formats.clone()
    };

    let birth = parse_date_with(&cli.birth, &formats)
        .with_context(|| format!("could not read birth date {:?}", cli.birth))?;
    let target = match &cli.target {
        Some(text) => parse_date_with(text, &formats)
            .with_context(|| format!("could not read comparison date {text:?}"))?,
        None => today()?,
    };
    tracing::debug!(%birth, %target, "computing age");

    let report = AgeReport::new(birth, target)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn today() -> Result<CalendarDate> {
    let now = chrono::Local::now().date_naive();
    let year = u16::try_from(now.year()).context("current year is out of range")?;
    let month = u8::try_from(now.month()).context("current month is out of range")?;
    let day = u8::try_from(now.day()).context("current day is out of range")?;
    CalendarDate::new(year, month, day).context("today's date is out of range")
}

fn plural(n: u64) -> &'static str {
    if n == 1 { "" } else { "s" }
}

fn count(n: impl Into<u64>, unit: &str) -> String {
    let n = n.into();
    format!("{n} {unit}{}", plural(n))
}

fn print_report(report: &AgeReport) {
    let age = &report.age;
    let countdown = &report.countdown;
    let zodiac = &report.zodiac;

    println!("Born:      {} (a {})", report.birth, report.born_on);
    println!("As of:     {}", report.target);
    println!(
        "Age:       {}, {}, {}",
        count(age.years, "year"),
        count(age.months, "month"),
        count(age.days, "day")
    );
    println!(
        "Totals:    {} / {} / {}",
        count(age.total_months, "month"),
        count(age.total_weeks, "week"),
        count(age.total_days, "day")
    );
    println!(
        "           {} / {} / {}",
        count(age.total_hours, "hour"),
        count(age.total_minutes, "minute"),
        count(age.total_seconds, "second")
    );

    if countdown.is_today {
        println!("Birthday:  today! Happy birthday (turning {})", countdown.turning);
    } else {
        println!(
            "Birthday:  in {}, {} ({}, turning {})",
            count(countdown.months, "month"),
            count(countdown.days, "day"),
            countdown.date,
            countdown.turning
        );
    }

    println!(
        "Zodiac:    {} {} ({})",
        zodiac.sign, zodiac.symbol, zodiac.element
    );
}
