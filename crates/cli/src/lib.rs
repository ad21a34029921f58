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

/// Command line arguments.
pub mod cli;
/// Failure kinds of the converter.
pub mod error;
/// Batch loading of report files from a directory.
pub mod reader;
/// HTML rendering of a batch of reports.
pub mod render;
