//! End-to-end run tests
//!
//! Drives whole runs through the public API and checks the resulting run
//! log, reports, and writer output.

use std::io::Read;

use looplog::term::LineWriter;
use looplog::{Fault, Runner, SEPARATOR, StepScope, StepValue};

use StepValue::{Skip, Value};

/// Validation used across the tests: divide 10 by the grade, warning on
/// non-integer input, faulting on zero, skipping missing values.
fn validate(grade: Option<f64>, step: &mut StepScope) -> Result<StepValue<i64>, Fault> {
    let Some(grade) = grade else { return Ok(Skip) };
    let grade = if grade.fract() != 0.0 {
        step.warn("RoundWarning", "input will be rounded");
        grade.floor()
    } else {
        grade
    };
    if grade == 0.0 {
        return Err(Fault::new("ZeroDivisionError", "division by zero")
            .with_note("this was done on purpose"));
    }
    Ok(Value(10 / grade as i64))
}

#[test]
fn test_full_run_classification_and_counts() {
    let grades = vec![Some(1.0), Some(2.0), Some(3.5), Some(0.0), Some(5.0), None];
    let logs = Runner::new("validate")
        .run(grades, validate)
        .unwrap();

    assert_eq!(logs.count_ok(), 3);
    assert_eq!(logs.count_warn(), 1);
    assert_eq!(logs.count_ko(), 1);
    assert_eq!(logs.count_skip(), 1);
    assert_eq!(logs.len(), 6);

    let outputs: Vec<Option<i64>> = logs.steps().iter().map(|s| s.output).collect();
    assert_eq!(
        outputs,
        vec![Some(10), Some(5), Some(3), None, Some(2), None]
    );
}

#[test]
fn test_reports_from_full_run() {
    let grades = vec![Some(3.5), Some(0.0), Some(0.0)];
    let logs = Runner::new("validate").run(grades, validate).unwrap();

    assert_eq!(logs.summary(), "0 ok / 1 warn / 2 err / 0 skip");

    let report = logs.report();
    assert!(report.contains("Errors:\n    2   ZeroDivisionError"));
    assert!(report.contains("Warnings:\n    1   RoundWarning"));

    let details = logs.details();
    assert!(details.contains("step_1\n    WARN:  input will be rounded"));
    assert!(details.contains(
        "    ERROR: division by zero [notes: this was done on purpose]"
    ));
    // one separator heading the view, one closing each noisy block
    assert_eq!(details.matches(SEPARATOR).count(), 4);
}

#[test]
fn test_combining_two_runs() {
    let morning = Runner::new("morning")
        .run(vec![Some(1.0), Some(0.0)], validate)
        .unwrap();
    let evening = Runner::new("evening")
        .run(vec![Some(2.5), None], validate)
        .unwrap();

    let combined = morning + evening;
    assert_eq!(combined.summary(), "1 ok / 1 warn / 1 err / 1 skip");
    assert_eq!(combined.len(), 4);
    let names: Vec<&str> = combined.steps().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["step_1", "step_2", "step_1", "step_2"]);
}

#[test]
fn test_limit_with_step_names() {
    let logs = Runner::new("limited")
        .limit(3)
        .step_name(|grade: &Option<f64>| format!("grade {grade:?}"))
        .run(vec![Some(1.0); 10], validate)
        .unwrap();
    assert_eq!(logs.len(), 3);
    assert_eq!(logs.steps()[2].name, "grade Some(1.0)");
}

#[test]
fn test_unknown_length_iterator_completes() {
    let grades = (1..=4).map(|n| Some(n as f64)).filter(|_| true);
    let logs = Runner::new("unknown").run(grades, validate).unwrap();
    assert_eq!(logs.count_ok(), 4);
}

#[test]
fn test_unmanaged_propagates_fault() {
    let result = Runner::new("debugging")
        .unmanaged(true)
        .run(vec![Some(1.0), Some(0.0), Some(5.0)], validate);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("ZeroDivisionError"));
    assert!(err.to_string().contains("step_2"));
}

#[test]
fn test_line_writer_to_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut writer = LineWriter::new(file.reopen().unwrap(), false);
    writer.writeln("Starting loop `test`...").unwrap();
    writer.provln("progress 1/2").unwrap();
    writer.writeln("Finished `test`").unwrap();

    let mut contents = String::new();
    file.reopen().unwrap().read_to_string(&mut contents).unwrap();
    // disabled writer keeps permanent lines and drops progress
    assert_eq!(contents, "Starting loop `test`...\nFinished `test`\n");
}

#[test]
fn test_serialized_run_log() {
    let logs = Runner::new("serialized")
        .run(vec![Some(2.0)], validate)
        .unwrap();
    let json = serde_json::to_value(&logs).unwrap();
    assert_eq!(json["count_ok"], 1);
    assert_eq!(json["steps"][0]["name"], "step_1");
    assert_eq!(json["steps"][0]["output"], 5);
}
