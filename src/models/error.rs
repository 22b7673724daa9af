//! Error types returned when input can not be turned into a subnet.

use std::net::Ipv4Addr;

/// Why a dotted-decimal address was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxKind {
    /// Not exactly four `.` separated tokens.
    #[error("expected 4 octets, found {0}")]
    TokenCount(usize),
    /// Token is not a plain base-10 number.
    #[error("octet \"{0}\" is not a number")]
    NotNumeric(String),
    /// Token value is above 255.
    #[error("octet \"{0}\" is out of range 0-255")]
    OctetOutOfRange(String),
    /// Token has a leading zero, e.g. `01`.
    #[error("octet \"{0}\" has a leading zero")]
    LeadingZero(String),
}

/// Why the overall input shape was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputFormatKind {
    /// Nothing but whitespace was entered.
    #[error("Please enter an IP address or subnet mask")]
    Empty,
    /// An address on its own, no mask or prefix to go with it.
    #[error("missing mask or CIDR prefix")]
    MissingMaskOrPrefix,
    /// More than one `/` in the input.
    #[error("expected a single '/'")]
    TooManySlashes,
    /// Whitespace separated input that is not exactly `ip mask`.
    #[error("expected \"ip mask\", found {0} parts")]
    TokenCount(usize),
    /// Input matched none of the accepted shapes.
    #[error("unrecognized format")]
    Unrecognized,
}

/// Error returned by the parser and by [`compute`](crate::compute).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Malformed dotted-decimal address.
    #[error("Invalid address \"{addr}\": {kind}")]
    Syntax { addr: String, kind: SyntaxKind },
    /// Valid address whose bits are not contiguous ones followed by zeros.
    #[error("Invalid mask \"{mask}\": bits are not contiguous")]
    MaskFormat { mask: String },
    /// Prefix text that is not an integer in `0..=32`.
    #[error("Invalid CIDR \"{text}\": expected a number from 0 to 32")]
    PrefixRange { text: String },
    /// None of the accepted input grammars matched.
    #[error("{}", input_format_message(.input, .kind))]
    InputFormat { input: String, kind: InputFormatKind },
}

// Empty input has nothing to quote back.
fn input_format_message(input: &str, kind: &InputFormatKind) -> String {
    match kind {
        InputFormatKind::Empty => kind.to_string(),
        _ => format!("Invalid input \"{input}\": {kind}"),
    }
}

impl ParseError {
    pub(crate) fn syntax(addr: &str, kind: SyntaxKind) -> ParseError {
        ParseError::Syntax {
            addr: addr.to_string(),
            kind,
        }
    }

    pub(crate) fn input_format(input: &str, kind: InputFormatKind) -> ParseError {
        ParseError::InputFormat {
            input: input.to_string(),
            kind,
        }
    }

    pub(crate) fn missing_mask_or_prefix(ip: Ipv4Addr) -> ParseError {
        ParseError::input_format(&ip.to_string(), InputFormatKind::MissingMaskOrPrefix)
    }
}
