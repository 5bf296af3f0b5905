use crate::assignment::BitAssignment;
use crate::cli::hexdump::{hex_dump, DEFAULT_HEX_LIMIT};
use crate::cli::input::read_input;
use crate::cli::visible::visible_whitespace;
use crate::error::Result;
use crate::pipeline::{Extraction, LineOutcome, StackOutcome};
use crate::report::{analyze, AnalysisReport};
use std::path::Path;
use tracing::info;

/// Options for the full analysis report
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Emit the report as JSON instead of text
    pub json: bool,
    /// Bit symbols shown per bit string in the text report
    pub preview: usize,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            json: false,
            preview: 80,
        }
    }
}

/// Analyze a file and format the report
pub fn analyze_file(path: &Path, options: &AnalyzeOptions) -> Result<String> {
    let input = read_input(path)?;
    info!(path = %path.display(), bytes = input.raw.len(), "analyzing");
    let report = analyze(input.raw.len(), &input.text);

    if options.json {
        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        return Ok(json);
    }

    Ok(render_report(path, &input.raw, &input.text, &report, options.preview))
}

/// Human-readable report
pub fn render_report(
    path: &Path,
    raw: &[u8],
    text: &str,
    report: &AnalysisReport,
    preview: usize,
) -> String {
    let mut output = String::new();

    output.push_str("Whitespace Steganography Analysis\n");
    output.push_str("=================================\n\n");

    output.push_str(&format!("File: {}\n", path.display()));
    output.push_str(&format!("File size: {} bytes\n", report.raw_bytes));
    output.push_str(&format!("Readable chars: {}\n\n", report.printable_characters));

    output.push_str(&format!("Hex dump (first {} bytes):\n", DEFAULT_HEX_LIMIT));
    output.push_str(&hex_dump(raw, DEFAULT_HEX_LIMIT));
    output.push_str("\n\n");

    output.push_str("Visible whitespace:\n");
    output.push_str(&visible_whitespace(text));
    if !text.ends_with('\n') {
        output.push('\n');
    }
    output.push('\n');

    output.push_str("Character frequency:\n");
    for (category, count) in report.counts.iter() {
        output.push_str(&format!("  {}: {}\n", category.name(), count));
    }
    output.push('\n');

    output.push_str("Binary decoding attempts:\n");
    for assignment in BitAssignment::ALL {
        output.push_str(&format!(
            "  {}: {}\n",
            assignment,
            truncate(report.bits.get(assignment), preview)
        ));
    }
    output.push('\n');

    output.push_str("ASCII extraction:\n");
    for assignment in BitAssignment::ALL {
        output.push_str(&format!(
            "  {}: {}\n",
            assignment,
            describe_extraction(report.ascii.get(assignment))
        ));
    }
    output.push('\n');

    output.push_str("Whitespace language analysis:\n");
    output.push_str(&format!("  Possible push commands: {}\n", report.push_commands));
    for observation in &report.observations {
        let detail = match &observation.outcome {
            LineOutcome::Pushed { value } => match observation.outcome.ascii() {
                Some(c) => format!("pushed {} -> ASCII '{}'", value, c),
                None => format!("pushed {} (non-printable)", value),
            },
            LineOutcome::ParseFailed { operand } => {
                format!("could not parse {:?}", operand)
            }
            LineOutcome::NotACommand => continue,
        };
        output.push_str(&format!("  Line {}: {}\n", observation.line, detail));
    }
    match &report.stack {
        StackOutcome::Rendered(text) => {
            output.push_str(&format!("  Extracted text: {}\n", text));
        }
        StackOutcome::Empty => output.push_str("  Stack empty\n"),
    }

    output
}

pub fn describe_extraction(extraction: &Extraction) -> &str {
    match extraction {
        Extraction::Text(text) => text.as_str(),
        Extraction::NoResult => "No printable ASCII found",
    }
}

/// First `limit` characters of `s`, with `...` appended when cut
fn truncate(s: &str, limit: usize) -> String {
    match s.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
