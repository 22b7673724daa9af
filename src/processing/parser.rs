//! Input classification.
//!
//! Turns one raw input string into an [`InputClassification`]. The grammars
//! are tried in a fixed order, the first match wins:
//!
//! 1. `/24` - prefix only
//! 2. `255.255.255.0` - mask only
//! 3. `192.168.1.10/24` - address and prefix
//! 4. `192.168.1.10 255.255.255.0` - address and mask
//! 5. `192.168.1.10` - bare address, not actionable
//! 6. anything else is invalid

use crate::models::{
    parse_address, InputClassification, InputFormatKind, Mask, ParseError, MAX_LENGTH,
};
use regex::Regex;
use std::sync::OnceLock;

/// Regex for splitting `ip mask` input on runs of whitespace.
static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_whitespace_regex() -> &'static Regex {
    WHITESPACE_REGEX.get_or_init(|| Regex::new(r"\s+").expect("Invalid Regex"))
}

/// Split on whitespace runs, dropping empty tokens.
fn split_whitespace_tokens(input: &str) -> Vec<&str> {
    get_whitespace_regex()
        .split(input)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Parse a CIDR prefix length, digits only, `0..=32`.
pub fn parse_prefix(text: &str) -> Result<u8, ParseError> {
    let out_of_range = || ParseError::PrefixRange {
        text: text.to_string(),
    };
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(out_of_range());
    }
    match text.parse::<u8>() {
        Ok(len) if len <= MAX_LENGTH => Ok(len),
        _ => Err(out_of_range()),
    }
}

/// Classify a raw input string.
///
/// Leading and trailing whitespace is ignored. This never fails, problems are
/// reported as [`InputClassification::Invalid`].
///
/// # Examples
/// ```
/// use subnet_calc::{classify, InputClassification};
/// assert_eq!(classify("/24"), InputClassification::CidrOnly(24));
/// ```
pub fn classify(raw: &str) -> InputClassification {
    let input = raw.trim();
    let classification = classify_trimmed(input);
    match &classification {
        InputClassification::Invalid(e) => log::warn!("rejected input {input:?}: {e}"),
        c => log::debug!("classified {input:?} as {c}"),
    }
    classification
}

fn classify_trimmed(input: &str) -> InputClassification {
    if input.is_empty() {
        return invalid(input, InputFormatKind::Empty);
    }
    let has_slash = input.contains('/');
    let has_whitespace = input.chars().any(char::is_whitespace);

    // 1. prefix only
    if let Some(prefix) = input.strip_prefix('/') {
        if !prefix.contains('.') {
            return match parse_prefix(prefix) {
                Ok(len) => InputClassification::CidrOnly(len),
                Err(e) => InputClassification::Invalid(e),
            };
        }
    }

    // 2. mask only
    if !has_slash && !has_whitespace {
        if let Ok(mask) = input.parse::<Mask>() {
            return InputClassification::MaskOnly(mask);
        }
    }

    // 3. address/prefix
    if has_slash {
        let parts: Vec<&str> = input.split('/').collect();
        if parts.len() != 2 {
            return invalid(input, InputFormatKind::TooManySlashes);
        }
        return match (parse_address(parts[0]), parse_prefix(parts[1])) {
            (Ok(ip), Ok(len)) => InputClassification::IpWithCidr(ip, len),
            (Err(e), _) | (_, Err(e)) => InputClassification::Invalid(e),
        };
    }

    // 4. address mask
    if has_whitespace {
        let tokens = split_whitespace_tokens(input);
        if tokens.len() != 2 {
            return invalid(input, InputFormatKind::TokenCount(tokens.len()));
        }
        return match (parse_address(tokens[0]), tokens[1].parse::<Mask>()) {
            (Ok(ip), Ok(mask)) => InputClassification::IpWithMask(ip, mask),
            (Err(e), _) | (_, Err(e)) => InputClassification::Invalid(e),
        };
    }

    // 5. bare address
    match parse_address(input) {
        Ok(ip) => InputClassification::BareIp(ip),
        Err(_) => invalid(input, InputFormatKind::Unrecognized),
    }
}

fn invalid(input: &str, kind: InputFormatKind) -> InputClassification {
    InputClassification::Invalid(ParseError::input_format(input, kind))
}
