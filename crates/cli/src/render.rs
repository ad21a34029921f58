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

/// Template used when the caller does not provide one.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/report.html");

// Templates see the JSON projection, so enumerated fields are already
// canonical tokens. Anything else reaching the helper is out of vocabulary
// and renders as the literal "unknown".
handlebars::handlebars_helper!(token: |value: Json| match value {
    serde_json::Value::String(text) => text.clone(),
    _ => "unknown".to_string(),
});

/// Renders a batch of reports through a handlebars template.
///
/// The `token` helper is bound on the registry built for this call, there
/// is no process-wide helper state.
pub fn render(template: &str, reports: &[Feedback]) -> Result<String, CliError> {
    let mut registry = handlebars::Handlebars::new();
    registry.register_helper("token", Box::new(token));
    registry.register_template_string("report", template)?;

    Ok(registry.render("report", &reports)?)
}
