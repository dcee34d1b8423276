use std::fs::File;
use std::io::{self, BufRead, BufReader};

use serde::Serialize;

use lexcast::{convert_dynamic, Strategy, TargetType, Value};

use crate::config::BatchArgs;
use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct BatchEntry {
    /// 1-based line number.
    pub line: usize,
    pub input: String,
    /// `None` when the line could not be converted.
    pub value: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub target: &'static str,
    pub converter: &'static str,
    pub total: usize,
    pub converted: usize,
    pub absent: usize,
    pub entries: Vec<BatchEntry>,
}

pub fn run(args: &BatchArgs, strategy: &Strategy) -> Result<(), CliError> {
    let report = match &args.file {
        Some(path) => convert_lines(BufReader::new(File::open(path)?), args.to, strategy)?,
        None => convert_lines(io::stdin().lock(), args.to, strategy)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    tracing::info!(
        to = report.target,
        total = report.total,
        absent = report.absent,
        "batch finished"
    );
    if report.absent > 0 {
        return Err(CliError::BatchIncomplete {
            absent: report.absent,
            total: report.total,
        });
    }
    Ok(())
}

/// Optional conversion of each line; absent lines are recorded, not fatal.
///
/// Lines that are not valid UTF-8 are absent too. Only a failing reader
/// aborts the batch.
pub fn convert_lines(
    reader: impl BufRead,
    target: TargetType,
    strategy: &Strategy,
) -> Result<BatchReport, CliError> {
    let mut entries = Vec::new();
    for (i, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        let bytes = raw.strip_suffix(b"\r").unwrap_or(&raw[..]);
        let entry = match std::str::from_utf8(bytes) {
            Ok(input) => {
                let value = convert_dynamic(input, target, strategy).into_option();
                if value.is_none() {
                    tracing::warn!(line = i + 1, input, "line could not be converted");
                }
                BatchEntry { line: i + 1, input: input.to_string(), value }
            }
            Err(e) => {
                let input = String::from_utf8_lossy(bytes).into_owned();
                tracing::warn!(line = i + 1, %input, error = %e, "line is not valid UTF-8");
                BatchEntry { line: i + 1, input, value: None }
            }
        };
        entries.push(entry);
    }

    let converted = entries.iter().filter(|e| e.value.is_some()).count();
    Ok(BatchReport {
        target: target.name(),
        converter: strategy.name(),
        total: entries.len(),
        converted,
        absent: entries.len() - converted,
        entries,
    })
}

fn render_text(report: &BatchReport) -> String {
    let mut out = String::new();
    for entry in &report.entries {
        let value = match &entry.value {
            Some(v) => v.to_string(),
            None => "<absent>".to_string(),
        };
        out.push_str(&format!("{}: {} -> {value}\n", entry.line, entry.input));
    }
    out.push_str(&format!(
        "{} of {} converted to {}\n",
        report.converted, report.total, report.target
    ));
    out
}
