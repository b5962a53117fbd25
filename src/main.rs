use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;

use looplog::{Fault, Runner, StepScope, StepValue};

/// Demo driver: validate a batch of grades, showing captured warnings,
/// faults, skips, and the live progress line.
#[derive(Parser, Debug)]
#[command(name = "looplog", version, about)]
struct Cli {
    /// Name of the loop, shown in progress and milestone text
    #[arg(long, default_value = "validate_grade")]
    name: String,

    /// Process at most this many grades
    #[arg(long)]
    limit: Option<usize>,

    /// Disable fault isolation; the first fault aborts the run
    #[arg(long)]
    unmanaged: bool,

    /// Render the live progress line even when stdout is not a tty
    #[arg(long)]
    force_live: bool,

    /// Print the run log as JSON instead of the text reports
    #[arg(long)]
    json: bool,
}

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("looplog")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("looplog.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Validate one grade, returning it divided into 10.
///
/// Raises a warning for non-integer input, a fault for out-of-range or zero
/// input, and skips missing grades.
fn validate_grade(grade: Value, step: &mut StepScope) -> std::result::Result<StepValue<f64>, Fault> {
    let grade = match grade {
        Value::Null => return Ok(StepValue::Skip),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => text.parse::<f64>()?,
        other => {
            return Err(Fault::new(
                "TypeError",
                format!("expected a number, got {other}"),
            ));
        }
    };

    let grade = if grade.fract() != 0.0 {
        step.warn("RoundWarning", "input will be rounded");
        grade.round()
    } else {
        grade
    };

    if !(0.0..=20.0).contains(&grade) {
        return Err(Fault::new("ValueError", "input out of range"));
    }
    if grade == 0.0 {
        return Err(
            Fault::new("ZeroDivisionError", "division by zero")
                .with_note("this was done on purpose"),
        );
    }

    Ok(StepValue::Value(10.0 / grade))
}

fn main() -> Result<()> {
    setup_logging()?;
    let cli = Cli::parse();
    info!("Starting demo run `{}`", cli.name);

    let grades = json!([12, 14, 7, 11.25, "19", 0, 22.25, 0, 13, null, "n/a", 15, 12]);
    let grades: Vec<Value> = grades
        .as_array()
        .cloned()
        .unwrap_or_default();

    let mut runner = Runner::new(cli.name.as_str())
        .logger(log::logger())
        .step_name(|grade: &Value| format!("validating {grade}"));
    if let Some(limit) = cli.limit {
        runner = runner.limit(limit);
    }
    if cli.unmanaged {
        runner = runner.unmanaged(true);
    }
    if cli.force_live {
        runner = runner.check_tty(false);
    }

    let logs = runner.run(grades, validate_grade)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&logs)?);
        return Ok(());
    }

    println!();
    println!("{}", "Summary:".cyan());
    println!("{}", logs.summary());
    println!();
    println!("{}", "Report:".cyan());
    print!("{}", logs.report());
    println!();
    println!("{}", "Details:".cyan());
    print!("{}", logs.details());

    info!("Demo run finished: {}", logs.summary());
    Ok(())
}
