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

/// A token outside the closed vocabulary of one enumeration.
///
/// The rendering is stable: `crate::error` classifies decode failures by it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {set} token \"{token}\"")]
pub struct UnknownTokenError {
    /// Wire name of the enumeration that rejected the token.
    pub set: &'static str,
    /// The offending raw token.
    pub token: String,
}

/// Declares one closed token set: an enumeration whose members each map to
/// exactly one canonical lowercase wire token, with optional extra decode
/// spellings.
///
/// Decode (`FromStr`) is case-insensitive and rejects anything outside the
/// vocabulary with an [`UnknownTokenError`] naming the set and the raw token.
/// Encode (`Display` / [`as_token`]) is infallible and always yields the
/// canonical token. Serde goes through the same two paths on both the XML and
/// the JSON side.
macro_rules! token_set {
    (
        $(#[$meta:meta])*
        $name:ident ($set:literal) {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $token:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            strum::Display,
            strum::IntoStaticStr,
            serde_with::SerializeDisplay,
            serde_with::DeserializeFromStr,
        )]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[strum(to_string = $token)]
                $variant,
            )+
        }

        impl $name {
            /// Wire name of this token set, as reported in decode errors.
            pub const SET: &'static str = $set;

            /// The canonical lowercase wire token for this member.
            #[must_use]
            pub fn as_token(self) -> &'static str {
                self.into()
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownTokenError;

            fn from_str(token: &str) -> Result<Self, Self::Err> {
                $(
                    if token.eq_ignore_ascii_case($token)
                        $(|| token.eq_ignore_ascii_case($alias))*
                    {
                        return Ok(Self::$variant);
                    }
                )+
                Err(UnknownTokenError {
                    set: Self::SET,
                    token: token.to_string(),
                })
            }
        }
    };
}

token_set! {
    /// Alignment mode (relaxed or strict) for DKIM and SPF identifiers.
    ///
    /// The report schema spells these `r` and `s`; the canonical output
    /// tokens are the long forms, so decode accepts both spellings.
    Alignment("alignment") {
        /// The organizational domains must match.
        Relaxed => "relaxed" | "r",
        /// The domains must match exactly.
        Strict => "strict" | "s",
    }
}

token_set! {
    /// The policy action specified by `p` and `sp` in the DMARC record.
    Disposition("disposition") {
        /// No specific action is requested.
        None => "none",
        /// Treat non-conforming mail as suspicious.
        Quarantine => "quarantine",
        /// Reject non-conforming mail.
        Reject => "reject",
    }
}

token_set! {
    /// A reason that may affect the DMARC disposition or execution thereof.
    PolicyOverride("policy_override") {
        /// The message was relayed via a known forwarder, or local heuristics
        /// identified the message as likely having been forwarded. There is
        /// no expectation that authentication would pass.
        Forwarded => "forwarded",
        /// The message was exempted from application of policy by the `pct`
        /// setting in the DMARC policy record.
        SampledOut => "sampled_out",
        /// Message authentication failure was anticipated by other evidence
        /// linking the message to a locally maintained list of known and
        /// trusted forwarders.
        TrustedForwarder => "trusted_forwarder",
        /// Local heuristics determined that the message arrived via a mailing
        /// list, and thus authentication of the original message was not
        /// expected to succeed.
        MailingList => "mailing_list",
        /// The Mail Receiver's local policy exempted the message from being
        /// subjected to the Domain Owner's requested policy action.
        LocalPolicy => "local_policy",
        /// Some policy exception not covered by the other entries occurred.
        /// Additional detail can be found in the reason's `comment` field.
        Other => "other",
    }
}

token_set! {
    /// DKIM verification result, per RFC 7001 section 2.6.1.
    DkimResult("dkim_result") {
        /// The message was not signed.
        None => "none",
        /// The signature verified.
        Pass => "pass",
        /// The signature did not verify.
        Fail => "fail",
        /// The signature was unacceptable to the verifier's policy.
        Policy => "policy",
        /// The signature was syntactically valid but could not be processed.
        Neutral => "neutral",
        /// A transient error prevented verification.
        TempError => "temperror",
        /// A permanent error prevented verification.
        PermError => "permerror",
    }
}

token_set! {
    /// Which identity the SPF check was evaluated against.
    ///
    /// Presence is required on decode: the schema declares a `helo` default,
    /// but silently defaulting would let a generator's omission masquerade as
    /// an explicit scope.
    SpfDomainScope("spf_domain_scope") {
        /// The HELO/EHLO identity.
        Helo => "helo",
        /// The RFC5321.MailFrom identity.
        Mfrom => "mfrom",
    }
}

token_set! {
    /// SPF verification result, per RFC 7208 section 2.6.
    SpfResult("spf_result") {
        /// No SPF record was published.
        None => "none",
        /// The record made no definitive assertion.
        Neutral => "neutral",
        /// The client is authorized.
        Pass => "pass",
        /// The client is not authorized.
        Fail => "fail",
        /// The client is probably not authorized.
        SoftFail => "softfail",
        /// A transient error prevented evaluation.
        TempError => "temperror",
        /// A permanent error prevented evaluation.
        PermError => "permerror",
    }
}

/// The DMARC-aligned authentication result: `true` is "pass".
///
/// Unlike the closed sets above this one is deliberately lenient on decode:
/// any token other than `pass` means "fail", garbage included. Encode is
/// computed from the boolean itself, `true`/`false`, which is also what
/// decode maps back to pass/fail so the JSON projection round-trips.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde_with::SerializeDisplay,
    serde_with::DeserializeFromStr,
)]
pub struct Verdict(pub bool);

impl Verdict {
    /// The DMARC check passed.
    pub const PASS: Self = Self(true);
    /// The DMARC check failed.
    pub const FAIL: Self = Self(false);

    /// The canonical wire token, `true` or `false`.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        if self.0 {
            "true"
        } else {
            "false"
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_token())
    }
}

impl std::str::FromStr for Verdict {
    type Err = std::convert::Infallible;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            token.eq_ignore_ascii_case("pass") || token.eq_ignore_ascii_case("true"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Alignment, Disposition, DkimResult, PolicyOverride, SpfDomainScope, SpfResult,
        UnknownTokenError, Verdict,
    };

    macro_rules! strict_set_cases {
        ($name:ident, $set:ty, [$(($value:expr, $token:literal)),+ $(,)?]) => {
            #[test]
            fn $name() {
                for (value, token) in [$(($value, $token)),+] {
                    // canonical lowercase encode
                    pretty_assertions::assert_eq!(value.as_token(), token);
                    pretty_assertions::assert_eq!(value.to_string(), token);
                    // decode(encode(m)) == m, any case
                    pretty_assertions::assert_eq!(token.parse::<$set>().unwrap(), value);
                    pretty_assertions::assert_eq!(
                        token.to_uppercase().parse::<$set>().unwrap(),
                        value
                    );
                }
            }
        };
    }

    strict_set_cases!(
        alignment_tokens,
        Alignment,
        [(Alignment::Relaxed, "relaxed"), (Alignment::Strict, "strict")]
    );

    strict_set_cases!(
        disposition_tokens,
        Disposition,
        [
            (Disposition::None, "none"),
            (Disposition::Quarantine, "quarantine"),
            (Disposition::Reject, "reject"),
        ]
    );

    strict_set_cases!(
        policy_override_tokens,
        PolicyOverride,
        [
            (PolicyOverride::Forwarded, "forwarded"),
            (PolicyOverride::SampledOut, "sampled_out"),
            (PolicyOverride::TrustedForwarder, "trusted_forwarder"),
            (PolicyOverride::MailingList, "mailing_list"),
            (PolicyOverride::LocalPolicy, "local_policy"),
            (PolicyOverride::Other, "other"),
        ]
    );

    strict_set_cases!(
        dkim_result_tokens,
        DkimResult,
        [
            (DkimResult::None, "none"),
            (DkimResult::Pass, "pass"),
            (DkimResult::Fail, "fail"),
            (DkimResult::Policy, "policy"),
            (DkimResult::Neutral, "neutral"),
            (DkimResult::TempError, "temperror"),
            (DkimResult::PermError, "permerror"),
        ]
    );

    strict_set_cases!(
        spf_domain_scope_tokens,
        SpfDomainScope,
        [
            (SpfDomainScope::Helo, "helo"),
            (SpfDomainScope::Mfrom, "mfrom"),
        ]
    );

    strict_set_cases!(
        spf_result_tokens,
        SpfResult,
        [
            (SpfResult::None, "none"),
            (SpfResult::Neutral, "neutral"),
            (SpfResult::Pass, "pass"),
            (SpfResult::Fail, "fail"),
            (SpfResult::SoftFail, "softfail"),
            (SpfResult::TempError, "temperror"),
            (SpfResult::PermError, "permerror"),
        ]
    );

    #[rstest::rstest]
    #[case("r", Alignment::Relaxed)]
    #[case("R", Alignment::Relaxed)]
    #[case("s", Alignment::Strict)]
    #[case("S", Alignment::Strict)]
    fn alignment_short_spellings(#[case] token: &str, #[case] expected: Alignment) {
        pretty_assertions::assert_eq!(token.parse::<Alignment>().unwrap(), expected);
    }

    #[rstest::rstest]
    #[case("relax")]
    #[case("rs")]
    #[case("")]
    #[case("strict ")]
    fn alignment_rejects_unknown_tokens(#[case] token: &str) {
        pretty_assertions::assert_eq!(
            token.parse::<Alignment>().unwrap_err(),
            UnknownTokenError {
                set: "alignment",
                token: token.to_string(),
            }
        );
    }

    #[rstest::rstest]
    #[case("forwarded ")]
    #[case("sampledout")]
    #[case("trusted")]
    #[case("list")]
    #[case("whatever")]
    fn policy_override_rejects_unknown_tokens(#[case] token: &str) {
        let error = token.parse::<PolicyOverride>().unwrap_err();
        pretty_assertions::assert_eq!(error.set, "policy_override");
        pretty_assertions::assert_eq!(error.token, token);
    }

    #[test]
    fn unknown_token_error_names_set_and_token() {
        pretty_assertions::assert_eq!(
            "Pending".parse::<Disposition>().unwrap_err().to_string(),
            "unknown disposition token \"Pending\""
        );
    }

    #[rstest::rstest]
    #[case("pass", Verdict::PASS)]
    #[case("PASS", Verdict::PASS)]
    #[case("true", Verdict::PASS)]
    #[case("fail", Verdict::FAIL)]
    #[case("false", Verdict::FAIL)]
    #[case("softfail", Verdict::FAIL)]
    #[case("anything at all", Verdict::FAIL)]
    #[case("", Verdict::FAIL)]
    fn verdict_is_lenient(#[case] token: &str, #[case] expected: Verdict) {
        pretty_assertions::assert_eq!(token.parse::<Verdict>().unwrap(), expected);
    }

    #[test]
    fn verdict_encodes_from_the_boolean() {
        pretty_assertions::assert_eq!(Verdict::PASS.as_token(), "true");
        pretty_assertions::assert_eq!(Verdict::FAIL.as_token(), "false");
        // and its own encoded form decodes back to the same value
        pretty_assertions::assert_eq!("true".parse::<Verdict>().unwrap(), Verdict::PASS);
        pretty_assertions::assert_eq!("false".parse::<Verdict>().unwrap(), Verdict::FAIL);
    }
}
