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

use vdmarc_cli::cli::{Args, Command};
use vdmarc_cli::error::CliError;
use vdmarc_cli::{reader, render};
use vdmarc_report::Feedback;

fn write_output(path: Option<&std::path::Path>, content: &str) -> Result<(), CliError> {
    match path {
        Some(path) => std::fs::write(path, content)
            .map_err(|error| CliError::FileWrite(path.to_path_buf(), error)),
        None => {
            std::io::Write::write_all(&mut std::io::stdout(), content.as_bytes())
                .map_err(CliError::Stdout)?;
            Ok(())
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Json { output } => {
            let mut input = String::new();
            std::io::Read::read_to_string(&mut std::io::stdin(), &mut input)
                .map_err(CliError::Stdin)?;

            let feedback = Feedback::from_xml(&input)?;
            let json = feedback.to_json()?;

            write_output(output.as_deref(), &json)
        }
        Command::Html {
            reports,
            template,
            output,
        } => {
            let template = match template {
                Some(path) => {
                    tracing::info!(path = %path.display(), "loading template");
                    std::fs::read_to_string(&path)
                        .map_err(|error| CliError::FileRead(path, error))?
                }
                None => render::DEFAULT_TEMPLATE.to_string(),
            };

            tracing::info!(path = %reports.display(), "reading reports");
            let reports = reader::read_reports(&reports)?;
            tracing::info!(count = reports.len(), "rendering reports");

            let feedbacks = reports
                .into_iter()
                .map(|(_, feedback)| feedback)
                .collect::<Vec<_>>();
            let rendered = render::render(&template, &feedbacks)?;

            tracing::info!(path = %output.display(), "writing output");
            write_output(Some(&output), &rendered)
        }
    }
}

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = <Args as clap::Parser>::parse();
    match run(args) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "conversion failed");
            std::process::ExitCode::FAILURE
        }
    }
}
