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

#[derive(clap::Parser)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand)]
pub enum Command {
    /// Convert one XML aggregate report, read on stdin, to JSON.
    Json {
        /// Path of the output document, stdout when absent.
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
    /// Render every report of a directory through an HTML template.
    Html {
        /// Directory containing the `.xml` aggregate reports.
        #[arg(short, long)]
        reports: std::path::PathBuf,
        /// Path to a handlebars template, the built-in one when absent.
        #[arg(short, long)]
        template: Option<std::path::PathBuf>,
        /// Path of the rendered output document.
        #[arg(short, long)]
        output: std::path::PathBuf,
    },
}
