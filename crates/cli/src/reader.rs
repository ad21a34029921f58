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

use crate::error::CliError;
use vdmarc_report::Feedback;

/// Decodes every `.xml` report of a directory, in file name order.
///
/// One unreadable or undecodable report is logged and skipped, it never
/// aborts the batch. A directory that cannot be walked at all is an error.
pub fn read_reports(
    dir: &std::path::Path,
) -> Result<Vec<(std::path::PathBuf, Feedback)>, CliError> {
    let mut reports = vec![];

    for entry in walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        if path.extension().map_or(true, |extension| extension != "xml") {
            continue;
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "skipping unreadable report");
                continue;
            }
        };

        match Feedback::from_xml(&content) {
            Ok(feedback) => {
                tracing::debug!(path = %path.display(), records = feedback.record.len(), "report decoded");
                reports.push((path.to_path_buf(), feedback));
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "skipping undecodable report");
            }
        }
    }

    Ok(reports)
}
