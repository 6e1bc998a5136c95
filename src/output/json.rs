use serde::Serialize;

use crate::checker::DiagnosticKind;
use crate::error::Result;

use super::{CheckReport, OutputFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    diagnostics: Vec<JsonDiagnostic>,
}

#[derive(Serialize)]
struct Summary {
    files_scanned: usize,
    diagnostics: usize,
    double_space: usize,
    missing_punctuation: usize,
}

#[derive(Serialize)]
struct JsonDiagnostic {
    path: String,
    line: usize,
    kind: DiagnosticKind,
    message: &'static str,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &CheckReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                files_scanned: report.files_scanned,
                diagnostics: report.diagnostics.len(),
                double_space: report.count(DiagnosticKind::DoubleSpace),
                missing_punctuation: report.count(DiagnosticKind::MissingPunctuation),
            },
            diagnostics: report
                .diagnostics
                .iter()
                .map(|d| JsonDiagnostic {
                    path: d.path.display().to_string(),
                    line: d.line,
                    kind: d.kind,
                    message: d.message(),
                })
                .collect(),
        };

        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}
