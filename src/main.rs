//! Wealth Projection CLI
//!
//! Command-line driver for investment projections and recurring schedules

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use wealth_projection::projection::{GrowthPoint, Milestone, MilestoneSearch, DEFAULT_MAX_YEARS};
use wealth_projection::{parse_date, ContributionInterval, Frequency, ProjectionInput, RecurrenceSchedule};

#[derive(Debug, Parser)]
#[command(name = "wealth_projection", version, about = "Investment growth projections and recurring schedules")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Project the growth of a single investment
    Project {
        /// Initial amount invested
        #[arg(long)]
        principal: f64,

        /// Annual rate as a decimal fraction (0.07 = 7%)
        #[arg(long)]
        rate: f64,

        /// Horizon for the projected total, in years
        #[arg(long, default_value_t = 10.0)]
        years: f64,

        /// Recurring contribution amount
        #[arg(long, default_value_t = 0.0)]
        contribution: f64,

        /// Contribution interval: MONTHLY, QUARTERLY or YEARLY
        #[arg(long)]
        interval: Option<ContributionInterval>,

        /// Number of whole years in the growth series
        #[arg(long, default_value_t = 30)]
        chart_years: u32,

        /// Milestone search horizon in years
        #[arg(long, default_value_t = DEFAULT_MAX_YEARS)]
        max_years: f64,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Expand a recurring schedule
    Schedule {
        /// First occurrence (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        start: NaiveDate,

        /// DAILY, WEEKLY, MONTHLY or YEARLY
        #[arg(long)]
        frequency: Frequency,

        /// Last date an occurrence may fall on
        #[arg(long, value_parser = parse_date)]
        end: Option<NaiveDate>,

        /// Reference date for the next occurrence (defaults to today)
        #[arg(long, value_parser = parse_date)]
        after: Option<NaiveDate>,

        /// Start of the listing window
        #[arg(long, value_parser = parse_date, requires = "to")]
        from: Option<NaiveDate>,

        /// End of the listing window
        #[arg(long, value_parser = parse_date, requires = "from")]
        to: Option<NaiveDate>,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectionReport {
    input: ProjectionInput,
    total_value: f64,
    total_invested: f64,
    milestones: Vec<Milestone>,
    series: Vec<GrowthPoint>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleReport {
    schedule: RecurrenceSchedule,
    after: NaiveDate,
    next_occurrence: Option<NaiveDate>,
    occurrences: Vec<NaiveDate>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Project {
            principal,
            rate,
            years,
            contribution,
            interval,
            chart_years,
            max_years,
            json,
        } => {
            let mut input = ProjectionInput::new(principal, rate, years);
            if let Some(interval) = interval {
                input = input.with_contribution(contribution, interval);
            } else if contribution > 0.0 {
                log::warn!("Contribution of {:.2} ignored: no --interval given", contribution);
            }

            let report = ProjectionReport {
                total_value: input.total_value(),
                total_invested: input.total_invested(),
                milestones: input.milestones_with(&MilestoneSearch::with_max_years(max_years)),
                series: input.growth_series(chart_years),
                input,
            };

            if json {
                let out = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize projection report")?;
                println!("{}", out);
            } else {
                print_projection(&report);
            }
        }

        Command::Schedule {
            start,
            frequency,
            end,
            after,
            from,
            to,
            json,
        } => {
            let mut schedule = RecurrenceSchedule::new(start, frequency);
            if let Some(end) = end {
                schedule = schedule.until(end);
            }

            let after = after.unwrap_or_else(|| chrono::Local::now().date_naive());
            let occurrences = match (from, to) {
                (Some(from), Some(to)) => schedule.occurrences_in_range(from, to),
                _ => Vec::new(),
            };

            let report = ScheduleReport {
                schedule,
                after,
                next_occurrence: schedule.next_occurrence(after),
                occurrences,
            };

            if json {
                let out = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize schedule report")?;
                println!("{}", out);
            } else {
                print_schedule(&report);
            }
        }
    }

    Ok(())
}

fn print_projection(report: &ProjectionReport) {
    let input = &report.input;

    println!("Projection");
    println!("==========\n");
    println!("  Principal:      ${:.2}", input.principal);
    println!("  Annual Rate:    {:.2}%", input.annual_rate * 100.0);
    match input.interval {
        Some(interval) if input.contribution > 0.0 => {
            println!("  Contribution:   ${:.2} {}", input.contribution, interval);
        }
        _ => println!("  Contribution:   none"),
    }
    println!();
    println!("  Value after {} years: ${:.2}", input.years, report.total_value);
    println!("  Total invested:       ${:.2}", report.total_invested);

    println!("\nMilestones:");
    if report.milestones.is_empty() {
        println!("  (none reachable)");
    }
    for m in &report.milestones {
        println!("  {:>3}x in {:>5.1} years", m.multiple, m.years);
    }

    println!("\n{:>5} {:>16} {:>16}", "Year", "Principal Only", "Total");
    println!("{}", "-".repeat(39));
    for point in &report.series {
        println!("{:>5} {:>16.2} {:>16.2}", point.year, point.principal_only, point.total);
    }
}

fn print_schedule(report: &ScheduleReport) {
    let schedule = &report.schedule;

    println!("Schedule: every {} from {}", schedule.frequency, schedule.start_date);
    if let Some(end) = schedule.recurrence_end {
        println!("  Ends: {}", end);
    }

    match report.next_occurrence {
        Some(next) => println!("  Next after {}: {}", report.after, next),
        None => println!("  Next after {}: (schedule ended)", report.after),
    }

    if !report.occurrences.is_empty() {
        println!("\nOccurrences ({}):", report.occurrences.len());
        for date in &report.occurrences {
            println!("  {}", date);
        }
    }
}
