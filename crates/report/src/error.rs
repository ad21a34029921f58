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

/// Why one report document failed to decode.
///
/// Decoding is all-or-nothing: the first failure aborts the whole document
/// and no partially populated value escapes.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The input is not well-formed XML.
    #[error("malformed document: {0}")]
    Malformed(String),
    /// A required field is missing or has the wrong shape.
    #[error("schema violation at `{path}`: {message}")]
    Schema {
        /// Path of the offending field in the document.
        path: String,
        /// What was wrong with it.
        message: String,
    },
    /// A strict enumeration rejected a token outside its vocabulary.
    #[error("unknown enum token at `{path}`: {message}")]
    UnknownToken {
        /// Path of the offending field in the document.
        path: String,
        /// The [`crate::codec::UnknownTokenError`] rendering, naming the
        /// token set and the raw token.
        message: String,
    },
}

impl DecodeError {
    pub(crate) fn classify(error: serde_path_to_error::Error<quick_xml::DeError>) -> Self {
        let path = error.path().to_string();
        match error.into_inner() {
            quick_xml::DeError::Custom(message) if is_unknown_token(&message) => {
                Self::UnknownToken { path, message }
            }
            quick_xml::DeError::Custom(message) => Self::Schema { path, message },
            other => Self::Schema {
                path,
                message: other.to_string(),
            },
        }
    }
}

// Field-level errors reach serde as opaque custom messages; the codec's
// `UnknownTokenError` rendering is the only one shaped like this.
fn is_unknown_token(message: &str) -> bool {
    message.starts_with("unknown ") && message.contains(" token \"")
}

#[cfg(test)]
mod tests {
    use super::is_unknown_token;

    #[rstest::rstest]
    #[case("unknown disposition token \"Pending\"", true)]
    #[case("unknown spf_result token \"\"", true)]
    #[case("missing field `org_name`", false)]
    #[case("invalid IP address syntax", false)]
    #[case("unknown field `foo`", false)]
    fn recognizes_the_codec_rendering(#[case] message: &str, #[case] expected: bool) {
        pretty_assertions::assert_eq!(is_unknown_token(message), expected);
    }
}
