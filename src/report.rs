//! Presentation of a hook outcome on stdout.

use serde::Serialize;

use crate::eval::{Outcome, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub hook: &'a str,
    pub status: Status,
    pub message: &'a str,
}

impl<'a> Report<'a> {
    pub fn new(hook: &'a str, outcome: &'a Outcome) -> Self {
        Self {
            hook,
            status: outcome.status,
            message: outcome.message.trim_end(),
        }
    }
}

/// Render a report, or `None` when a text report has nothing to say.
pub fn render(report: &Report, format: Format) -> Option<String> {
    match format {
        Format::Text if report.message.is_empty() => None,
        Format::Text => Some(report.message.to_string()),
        Format::Json => Some(serde_json::to_string(report).unwrap_or_else(|e| {
            format!(r#"{{"hook":"{}","error":"{e}"}}"#, report.hook)
        })),
    }
}
