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

use crate::codec::{
    Alignment, Disposition, DkimResult, PolicyOverride, SpfDomainScope, SpfResult, Verdict,
};
use crate::error::DecodeError;

/// One aggregate feedback report, the root of the entity graph.
///
/// Values are built by [`Feedback::from_xml`] and never mutated afterwards;
/// encoding reads the graph without touching it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Feedback {
    /// The report format version, `1` for RFC 7489 generators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Report generator metadata.
    pub report_metadata: ReportMetadata,
    /// The DMARC policy that applied to the messages in this report.
    pub policy_published: PolicyPublished,
    /// Per-message-group records, in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub record: Vec<Record>,
}

impl Feedback {
    /// Decodes one aggregate report document.
    ///
    /// All-or-nothing: any missing required element, malformed value or
    /// unknown enumeration token fails the whole decode. Extra elements
    /// outside the schema are ignored.
    pub fn from_xml(input: &str) -> Result<Self, DecodeError> {
        well_formed(input)?;
        let mut deserializer = quick_xml::de::Deserializer::from_str(input);
        serde_path_to_error::deserialize(&mut deserializer).map_err(DecodeError::classify)
    }

    /// The JSON projection of this report: wire field names, canonical
    /// lowercase tokens, absent optional fields omitted entirely.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Same projection as [`Feedback::to_json`], as a tree.
    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

// The serde layer reports everything it trips over as a field-level error,
// so syntax is checked first to tell a malformed document apart from a
// schema violation.
fn well_formed(input: &str) -> Result<(), DecodeError> {
    let mut reader = quick_xml::Reader::from_str(input);
    let mut saw_root = false;
    loop {
        match reader.read_event() {
            Ok(
                quick_xml::events::Event::Start(_) | quick_xml::events::Event::Empty(_),
            ) => saw_root = true,
            Ok(quick_xml::events::Event::Eof) => break,
            Ok(_) => (),
            Err(error) => return Err(DecodeError::Malformed(error.to_string())),
        }
    }
    if saw_root {
        Ok(())
    } else {
        Err(DecodeError::Malformed("no root element".to_string()))
    }
}

/// Report generator metadata.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReportMetadata {
    /// Name of the organization that produced the report.
    pub org_name: String,
    /// Contact address of the report generator.
    pub email: String,
    /// Additional contact information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_contact_info: Option<String>,
    /// Generator-chosen report identifier.
    pub report_id: String,
    /// The time range covered by messages in this report.
    pub date_range: DateRange,
    /// Free-text processing errors the generator wants to surface.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub error: Vec<String>,
}

/// The time range in UTC covered by messages in this report, in seconds
/// since epoch. `begin <= end` is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DateRange {
    /// Start of the range.
    pub begin: i64,
    /// End of the range.
    pub end: i64,
}

/// The DMARC policy published at the domain, as the receiver retrieved it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PolicyPublished {
    /// The domain at which the DMARC record was found.
    pub domain: String,
    /// The DKIM alignment mode.
    pub adkim: Alignment,
    /// The SPF alignment mode.
    pub aspf: Alignment,
    /// The policy to apply to messages from the domain.
    pub p: Disposition,
    /// The policy to apply to messages from subdomains.
    pub sp: Disposition,
    /// The percent of messages to which the policy applies, 0 to 100
    /// expected but not range-checked.
    pub pct: u8,
    /// Failure reporting options in effect, kept opaque.
    pub fo: String,
}

/// All the authentication results the receiving system evaluated for one
/// set of messages.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    /// Source and count of the matching messages.
    pub row: Row,
    /// The domains the messages claimed.
    pub identifiers: Identifiers,
    /// The underlying DKIM and SPF check results.
    pub auth_results: AuthResult,
}

/// Source and DMARC outcome of one group of matching messages.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    /// The connecting IP.
    pub source_ip: std::net::IpAddr,
    /// The number of matching messages.
    pub count: u32,
    /// The DMARC disposition applying to matching messages.
    pub policy_evaluated: PolicyEvaluated,
}

/// Taking into account everything else in the record, the results of
/// applying DMARC.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PolicyEvaluated {
    /// The disposition the receiver applied.
    pub disposition: Disposition,
    /// The DMARC-aligned DKIM result.
    pub dkim: Verdict,
    /// The DMARC-aligned SPF result.
    pub spf: Verdict,
    /// Reasons the receiver overrode the published policy, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reason: Vec<PolicyOverrideReason>,
}

/// One reason the receiver did not apply the published policy as-is.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PolicyOverrideReason {
    /// The override kind.
    pub r#type: PolicyOverride,
    /// Free-text detail, mostly used with [`PolicyOverride::Other`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// The domains the messages claimed to come from.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Identifiers {
    /// The envelope recipient domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envelope_to: Option<String>,
    /// The RFC5321.MailFrom domain.
    pub envelope_from: String,
    /// The RFC5322.From domain.
    pub header_from: String,
}

/// DKIM and SPF results, uninterpreted with respect to DMARC.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AuthResult {
    /// There may be no DKIM signature, or multiple DKIM signatures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dkim: Vec<DkimAuthResult>,
    /// A conformant report carries at least one SPF result, but the model
    /// does not require it.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spf: Vec<SpfAuthResult>,
}

/// The result of verifying one DKIM signature.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DkimAuthResult {
    /// The `d=` parameter in the signature.
    pub domain: String,
    /// The `s=` parameter in the signature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    /// The DKIM verification result.
    pub result: DkimResult,
    /// Any extra information, e.g. from `Authentication-Results`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_result: Option<String>,
}

/// The result of one SPF check.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SpfAuthResult {
    /// The checked domain.
    pub domain: String,
    /// The scope of the checked domain.
    pub scope: SpfDomainScope,
    /// The SPF verification result.
    pub result: SpfResult,
}
