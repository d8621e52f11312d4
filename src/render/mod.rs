use crate::models::EndpointCatalogue;
use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fmt::{self, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Markdown,
}

pub fn render(catalogue: &EndpointCatalogue, format: OutputFormat, docs_url: &str) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(catalogue),
        OutputFormat::Markdown => Ok(to_markdown(catalogue, docs_url, Utc::now())?),
    }
}

/// Pretty JSON with four-space indentation. Keys come out sorted.
pub fn to_json(catalogue: &EndpointCatalogue) -> Result<String> {
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    catalogue.serialize(&mut serializer)?;
    Ok(String::from_utf8(out)?)
}

/// Endpoint overview with one table per scope, each endpoint linked back to
/// its anchor in the documentation.
pub fn to_markdown(
    catalogue: &EndpointCatalogue,
    docs_url: &str,
    generated_at: DateTime<Utc>,
) -> Result<String, fmt::Error> {
    let mut md = String::new();

    writeln!(
        md,
        "<!--- Generated {} -->",
        generated_at.format("%Y-%m-%d at %H:%M:%S UTC")
    )?;
    md.push_str("# Endpoints\n\n");
    writeln!(
        md,
        "**{}** endpoints across **{}** scopes, taken from the [OAuth API docs]({docs_url}).",
        catalogue.endpoint_count(),
        catalogue.scope_count()
    )?;

    for (scope, entries) in catalogue.scopes() {
        writeln!(md, "\n## {scope}\n")?;
        md.push_str("|Method|Endpoint|\n");
        md.push_str("|:----:|--------|\n");
        for entry in entries {
            writeln!(
                md,
                "|`{}`|[`{}`]({docs_url}{})|",
                entry.descriptor.method(),
                entry.descriptor.path(),
                entry.href
            )?;
        }
    }

    Ok(md)
}
