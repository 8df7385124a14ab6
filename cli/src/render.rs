//! Report rendering.

use asod_guards::Classification;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct ReportLine<'a> {
    input: &'a str,
    #[serde(flatten)]
    classification: &'a Classification,
}

/// Render one classified input as a single line (no trailing newline).
pub fn render(
    format: OutputFormat,
    input: &str,
    classification: &Classification,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(input, classification)),
        OutputFormat::Json => serde_json::to_string(&ReportLine {
            input,
            classification,
        }),
    }
}

fn render_text(input: &str, c: &Classification) -> String {
    let capabilities = if c.capabilities.is_empty() {
        "-".to_string()
    } else {
        c.capabilities
            .iter()
            .map(|method| method.as_str())
            .collect::<Vec<_>>()
            .join(",")
    };

    format!(
        "{input}\tkind={} truthy={} falsy={} neutral={} identity={} comparable={} capabilities={capabilities}",
        c.kind,
        c.truthy,
        c.falsy_operand,
        c.neutral_operand,
        c.identity_operand,
        c.comparable_operand,
    )
}
