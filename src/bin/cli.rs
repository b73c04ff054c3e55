//! Course-schedule planner CLI
//!
//! Browses the catalog and opens shared schedules from the terminal.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use planner::{
    error::{AppError, Result},
    models::{Config, Shift},
    schedule::{self, SharedSchedule, ShiftSelection, share_link},
    services::{FenixClient, Planner, Severity},
};

/// Course-schedule planner
#[derive(Parser, Debug)]
#[command(
    name = "planner",
    version,
    about = "Plan course timetables and share them as links"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "planner.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the degrees offered in the configured term
    Degrees,

    /// List the courses of one or more degrees
    Courses {
        /// Degree acronym (repeatable)
        #[arg(short, long = "degree", required = true)]
        degrees: Vec<String>,
    },

    /// List the shifts and lessons of a course
    Shifts {
        /// Catalog id of the course
        course_id: String,

        /// Degree acronym the course is offered in (repeatable)
        #[arg(short, long = "degree", required = true)]
        degrees: Vec<String>,
    },

    /// Open a shared schedule link or a bare schedule identifier
    Open {
        input: String,

        /// Degrees to load when the input does not name any (`;`-separated)
        #[arg(long)]
        degrees: Option<String>,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Log queued planner alerts at a matching level.
fn report_alerts(planner: &mut Planner) {
    for alert in planner.take_alerts() {
        match alert.severity {
            Severity::Success | Severity::Info => log::info!("{}", alert.message),
            Severity::Warning => log::warn!("{}", alert.message),
            Severity::Error => log::error!("{}", alert.message),
        }
    }
}

fn print_shift(shift: &Shift) {
    println!(
        "{} [{}] {}/{} {}",
        shift.name,
        shift.shift_type,
        shift.occupation.current,
        shift.occupation.max,
        shift.campus
    );
    for lesson in &shift.lessons {
        println!(
            "    {} {}-{} {}",
            lesson.day_of_week,
            lesson.start,
            lesson.end,
            lesson.room.as_deref().unwrap_or("-")
        );
    }
}

fn build_planner(config: &Config) -> Result<Planner> {
    let client = Arc::new(FenixClient::new(&config.api)?);
    let planner = Planner::new(client, &config.planner)?;
    log::info!("Academic term {}", planner.term());
    Ok(planner)
}

/// Load degrees and select `acronyms`, failing when none of them exist.
async fn select_degrees(planner: &mut Planner, acronyms: &[String]) -> Result<()> {
    planner.load_degrees().await;
    report_alerts(planner);

    if planner.select_degrees(acronyms).await == 0 {
        return Err(AppError::validation(format!(
            "no known degree among {}",
            acronyms.join(", ")
        )));
    }
    report_alerts(planner);
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Degrees => {
            let mut planner = build_planner(&config)?;
            planner.load_degrees().await;
            report_alerts(&mut planner);
            for degree in planner.degrees() {
                println!("{}", degree.display_name());
            }
        }

        Command::Courses { degrees } => {
            let mut planner = build_planner(&config)?;
            select_degrees(&mut planner, &degrees).await?;
            for view in planner.available_courses() {
                println!("{:>14}  {}", view.course.id, view.label());
            }
        }

        Command::Shifts { course_id, degrees } => {
            let mut planner = build_planner(&config)?;
            select_degrees(&mut planner, &degrees).await?;
            let course = planner
                .find_course(&course_id)
                .ok_or_else(|| AppError::validation(format!("unknown course '{course_id}'")))?;

            println!("{}", course.display_name());
            for shift in planner.load_shifts(&course).await {
                print_shift(&shift);
            }
            report_alerts(&mut planner);
        }

        Command::Open { input, degrees } => {
            let shared = SharedSchedule::parse(&input)?;
            if shared.is_empty() {
                log::warn!("No schedule found in '{}'", input);
                return Ok(());
            }

            let acronyms = if shared.degrees.is_empty() {
                degrees
                    .as_deref()
                    .map(schedule::parse_degrees)
                    .unwrap_or_default()
            } else {
                shared.degrees.clone()
            };
            if acronyms.is_empty() {
                return Err(AppError::validation(
                    "the schedule names no degree; pass --degrees",
                ));
            }
            let mut planner = build_planner(&config)?;
            select_degrees(&mut planner, &acronyms).await?;

            let mut courses = Vec::new();
            for selection in &shared.courses {
                match planner.find_course(&selection.course_id) {
                    Some(course) => courses.push(course),
                    None => log::warn!("Course {} is not offered", selection.course_id),
                }
            }
            let courses = planner.select_courses(courses).to_vec();
            let catalog = planner.load_all_shifts(&courses).await;
            report_alerts(&mut planner);

            let resolved = schedule::resolve(&shared.courses, &catalog);
            for (course_id, shift_id) in &resolved.missing {
                log::warn!("Shift {} of course {} was not found", shift_id, course_id);
            }

            let selection = ShiftSelection::from_shifts(resolved.shifts);
            for shift in selection.shifts() {
                print_shift(shift);
            }
            for conflict in selection.conflicts() {
                log::warn!(
                    "Conflict: {} and {} on {} at {}",
                    conflict.first.shift_name,
                    conflict.second.shift_name,
                    conflict.first.day_of_week,
                    conflict.first.start
                );
            }

            let base = config.planner.share_base_url()?;
            println!("{}", share_link(&base, selection.shifts()));
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
        }
    }

    Ok(())
}
