use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use serde_json::json;
use tracing_subscriber::{EnvFilter, fmt};

use time_reconciliation::modules::reports::use_cases::{
    build_daily_report, build_weekly_report, report_query::ReportQuery,
};
use time_reconciliation::modules::schedules::core::arrival::arrival_status;
use time_reconciliation::shared::core::primitives::format_hours;
use time_reconciliation::shell::config::Config;
use time_reconciliation::shell::snapshot::Snapshot;

fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.snapshot.clone())
        .context("pass a snapshot path or set RECONCILE_SNAPSHOT")?;
    let snapshot = Snapshot::load(&path)?;

    let timezones = snapshot.timezones_or(&config.timezones);
    let now = snapshot.now.unwrap_or_else(Utc::now);
    let query = ReportQuery {
        entries: &snapshot.entries,
        schedules: &snapshot.schedules,
        timezones: &timezones,
        now,
    };

    let daily = build_daily_report::handler::build_daily_report(query);
    let weekly = build_weekly_report::handler::build_weekly_report(query);
    let company = timezones.resolve().company;
    let grace = config.grace();
    let arrival = snapshot
        .entries
        .iter()
        .filter(|entry| entry.date == daily.date)
        .min_by_key(|entry| entry.start_utc)
        .map(|entry| arrival_status(&snapshot.schedules, entry.start_utc, company, grace));

    let output = json!({
        "now": now,
        "daily": daily,
        "daily_display": {
            "hours_elapsed": format_hours(daily.summary.hours_elapsed),
            "hours_remaining": format_hours(daily.summary.hours_remaining),
        },
        "arrival": arrival,
        "weekly": weekly,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
