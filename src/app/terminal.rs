use colored::Colorize;
use spinners::{Spinner, Spinners};
use std::io::{self, BufRead, Write};

use crate::app::{REPORT_HEADING, WAIT_MESSAGE};
use crate::core::engine::AdvisoryEngine;
use crate::domain::model::AdvisoryRequest;
use crate::domain::ports::CompletionTransport;
use crate::utils::error::{AdvisoryError, ErrorCategory};
use crate::utils::validation::Validate;

pub const PLANT_LABEL: &str = "🌾 Crop / Plant Name";
pub const ISSUE_LABEL: &str = "🦠 Disease / Problem";

/// Returns `value` if given, otherwise asks for it on `input`.
///
/// Only the line terminator is stripped from typed answers.
pub fn read_field<R: BufRead, W: Write>(
    value: Option<String>,
    label: &str,
    placeholder: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }

    write!(output, "{} ({}): ", label.bold(), placeholder.dimmed())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn format_report(content: &str) -> String {
    format!("{}\n\n{}\n", REPORT_HEADING.green().bold(), content)
}

pub fn format_failure(error: &AdvisoryError) -> String {
    match error.category() {
        ErrorCategory::Validation => format!("⚠️ {}", error.user_friendly_message())
            .yellow()
            .to_string(),
        _ => format!("❌ {}", error.user_friendly_message())
            .red()
            .to_string(),
    }
}

/// Collects the two fields, submits them and prints the outcome.
///
/// Prompts go to stderr so stdout carries only the report.
pub async fn run_ask<T: CompletionTransport>(
    engine: &AdvisoryEngine<T>,
    plant: Option<String>,
    issue: Option<String>,
) -> Result<(), AdvisoryError> {
    let request = {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        read_request(plant, issue, &mut input, &mut io::stderr())
    };
    let request = match request {
        Ok(request) => request,
        Err(e) => {
            eprintln!("{}", format_failure(&e));
            return Err(e);
        }
    };

    // 等待中顯示 spinner
    let mut spinner = Spinner::with_stream(
        Spinners::Dots,
        WAIT_MESSAGE.to_string(),
        spinners::Stream::Stderr,
    );
    let outcome = engine.submit(&request).await;
    spinner.stop_with_newline();

    match outcome {
        Ok(response) => {
            println!("{}", format_report(&response.content));
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_failure(&e));
            if e.category() == ErrorCategory::RemoteService {
                eprintln!("💡 {}", e.recovery_suggestion());
            }
            Err(e)
        }
    }
}

/// Process exit status for a failed `ask`.
pub fn exit_code(error: &AdvisoryError) -> i32 {
    match error.category() {
        ErrorCategory::Validation => 2,
        ErrorCategory::RemoteService => 1,
        ErrorCategory::Configuration | ErrorCategory::System => 3,
    }
}

// 欄位檢查在 spinner 出現之前
fn read_request<R: BufRead, W: Write>(
    plant: Option<String>,
    issue: Option<String>,
    input: &mut R,
    output: &mut W,
) -> Result<AdvisoryRequest, AdvisoryError> {
    let request = read_inputs(plant, issue, input, output)?;
    request.validate()?;
    Ok(request)
}

fn read_inputs<R: BufRead, W: Write>(
    plant: Option<String>,
    issue: Option<String>,
    input: &mut R,
    output: &mut W,
) -> io::Result<AdvisoryRequest> {
    let plant = read_field(plant, PLANT_LABEL, "e.g. Potato", input, output)?;
    let issue = read_field(issue, ISSUE_LABEL, "e.g. Late Blight", input, output)?;
    Ok(AdvisoryRequest::new(plant, issue))
}
