//! IPv4 address and subnet mask utilities.
//!
//! Strict dotted-decimal parsing, conversion between dotted-decimal and `u32`,
//! and conversion between CIDR prefix lengths and subnet masks. All bit
//! operations stay in the unsigned 32-bit domain.

use super::error::{ParseError, SyntaxKind};
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Number of bits in an IPv4 address.
pub const BITS_PER_ADDRESS: u8 = 32;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = BITS_PER_ADDRESS;

/// All 32 bits set, the `/32` mask.
pub const ALL_ONES_32: u32 = u32::MAX;

const OCTET_COUNT: usize = 4;

/// Parse one octet token of `addr`.
///
/// The token must be the canonical decimal form of a value in `0..=255`:
/// digits only, no sign, no whitespace and no leading zero unless it is `0`.
fn parse_octet(addr: &str, token: &str) -> Result<u32, ParseError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::syntax(
            addr,
            SyntaxKind::NotNumeric(token.to_string()),
        ));
    }
    if token.len() > 1 && token.starts_with('0') {
        return Err(ParseError::syntax(
            addr,
            SyntaxKind::LeadingZero(token.to_string()),
        ));
    }
    // at most 3 digits fit an octet, longer tokens would overflow the parse
    let value = if token.len() > 3 {
        None
    } else {
        token.parse::<u32>().ok().filter(|v| *v <= 255)
    };
    value.ok_or_else(|| ParseError::syntax(addr, SyntaxKind::OctetOutOfRange(token.to_string())))
}

/// Convert a dotted-decimal address to its big-endian `u32` value.
///
/// # Examples
/// ```
/// use subnet_calc::models::address_to_int;
/// assert_eq!(address_to_int("192.168.1.10").unwrap(), 0xC0A8010A);
/// assert!(address_to_int("192.168.01.10").is_err());
/// ```
pub fn address_to_int(addr: &str) -> Result<u32, ParseError> {
    let tokens: Vec<&str> = addr.split('.').collect();
    if tokens.len() != OCTET_COUNT {
        return Err(ParseError::syntax(addr, SyntaxKind::TokenCount(tokens.len())));
    }
    tokens
        .iter()
        .try_fold(0u32, |acc, token| Ok((acc << 8) | parse_octet(addr, token)?))
}

/// Convert a `u32` to its dotted-decimal form.
pub fn int_to_address(bits: u32) -> String {
    Ipv4Addr::from(bits).to_string()
}

/// Parse a dotted-decimal address with the strict octet rules of [`address_to_int`].
pub fn parse_address(addr: &str) -> Result<Ipv4Addr, ParseError> {
    address_to_int(addr).map(Ipv4Addr::from)
}

/// True if `addr` is a syntactically valid dotted-decimal address.
pub fn is_valid_address(addr: &str) -> bool {
    address_to_int(addr).is_ok()
}

/// True if `mask` is a valid address and a contiguous prefix mask.
pub fn is_valid_mask(mask: &str) -> bool {
    mask.parse::<Mask>().is_ok()
}

/// Convert a CIDR prefix length to a subnet mask.
///
/// # Examples
/// ```
/// use subnet_calc::models::cidr_to_mask;
/// assert_eq!(cidr_to_mask(24).unwrap().bits(), 0xFFFFFF00);
/// ```
pub fn cidr_to_mask(len: u8) -> Result<Mask, ParseError> {
    if len > MAX_LENGTH {
        return Err(ParseError::PrefixRange {
            text: len.to_string(),
        });
    }
    // shifting by 32 is out of range for u32, /0 is the empty mask
    let bits = ALL_ONES_32
        .checked_shl(u32::from(BITS_PER_ADDRESS - len))
        .unwrap_or(0);
    Ok(Mask(bits))
}

/// Convert a subnet mask to its CIDR prefix length.
///
/// Fails with [`ParseError::MaskFormat`] if the set bits are not contiguous
/// from the most significant bit.
pub fn mask_to_cidr(mask: u32) -> Result<u8, ParseError> {
    let inverted = !mask;
    if inverted == 0 {
        return Ok(MAX_LENGTH);
    }
    if inverted == ALL_ONES_32 {
        return Ok(0);
    }
    // host bits + 1 must be a power of two
    let host_span = inverted.wrapping_add(1);
    if host_span & inverted != 0 {
        return Err(ParseError::MaskFormat {
            mask: int_to_address(mask),
        });
    }
    Ok(BITS_PER_ADDRESS - host_span.trailing_zeros() as u8)
}

/// Network address (all host bits cleared) of `addr` under `mask`.
pub fn network_addr(addr: Ipv4Addr, mask: Mask) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & mask.bits())
}

/// Broadcast address (all host bits set) of `addr` under `mask`.
pub fn broadcast_addr(addr: Ipv4Addr, mask: Mask) -> Ipv4Addr {
    Ipv4Addr::from((u32::from(addr) & mask.bits()) | mask.host_bits())
}

/// A contiguous IPv4 prefix mask.
///
/// Only constructible from a valid prefix length or a contiguous bit pattern,
/// so every value maps to exactly one prefix length.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mask(u32);

impl Mask {
    /// Mask for the given prefix length.
    pub fn from_prefix(len: u8) -> Result<Mask, ParseError> {
        cidr_to_mask(len)
    }

    /// Raw mask bits.
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// The inverted mask, i.e. the host part.
    pub fn host_bits(&self) -> u32 {
        !self.0
    }

    /// Prefix length (count of leading one bits).
    pub fn prefix_len(&self) -> u8 {
        self.0.leading_ones() as u8
    }

    /// The mask as a dotted-decimal address.
    pub fn addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.0)
    }
}

impl TryFrom<u32> for Mask {
    type Error = ParseError;

    fn try_from(bits: u32) -> Result<Mask, ParseError> {
        mask_to_cidr(bits).map(|_| Mask(bits))
    }
}

impl FromStr for Mask {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Mask, ParseError> {
        Mask::try_from(address_to_int(s)?)
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.addr())
    }
}

impl Serialize for Mask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
