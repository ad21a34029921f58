/*
 * vDMARC aggregate report tooling
 *
 * Copyright (C) 2003 - viridIT SAS
 * Licensed under the Elastic License 2.0
 *
 * You should have received a copy of the Elastic License 2.0 along with
 * this program. If not, see https://www.elastic.co/licensing/elastic-license.
 *
 */

/// Everything that can make a conversion exit non-zero.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A file could not be read.
    #[error("failed to read `{}`: {}", .0.display(), .1)]
    FileRead(std::path::PathBuf, #[source] std::io::Error),
    /// A file could not be written.
    #[error("failed to write `{}`: {}", .0.display(), .1)]
    FileWrite(std::path::PathBuf, #[source] std::io::Error),
    /// The document on the standard input stream could not be read.
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),
    /// The output could not be written to the standard output stream.
    #[error("failed to write stdout: {0}")]
    Stdout(#[source] std::io::Error),
    /// The reports directory itself could not be walked.
    #[error("failed to walk the reports directory: {0}")]
    Walk(#[from] walkdir::Error),
    /// A single report document failed to decode.
    #[error(transparent)]
    Decode(#[from] vdmarc_report::DecodeError),
    /// The JSON projection could not be produced.
    #[error("failed to encode the report to json: {0}")]
    Json(#[from] serde_json::Error),
    /// The handlebars template did not compile.
    #[error("failed to compile the template: {0}")]
    Template(#[from] handlebars::TemplateError),
    /// The handlebars template failed at render time.
    #[error("failed to render the template: {0}")]
    Render(#[from] handlebars::RenderError),
}
