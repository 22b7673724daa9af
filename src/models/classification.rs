//! Classified form of one raw input string.

use super::error::ParseError;
use super::ipv4::Mask;
use std::fmt;
use std::net::Ipv4Addr;

/// What a raw input string turned out to be.
///
/// Produced by [`classify`](crate::classify), consumed once by
/// [`compute`](crate::compute).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputClassification {
    /// `/24`
    CidrOnly(u8),
    /// `255.255.255.0`
    MaskOnly(Mask),
    /// `192.168.1.10/24`
    IpWithCidr(Ipv4Addr, u8),
    /// `192.168.1.10 255.255.255.0`
    IpWithMask(Ipv4Addr, Mask),
    /// `192.168.1.10`, an address with nothing to size the subnet.
    BareIp(Ipv4Addr),
    Invalid(ParseError),
}

impl InputClassification {
    /// Keep actionable classifications, turn the rest into their error.
    ///
    /// A [`BareIp`](InputClassification::BareIp) is rejected with
    /// [`InputFormatKind::MissingMaskOrPrefix`](crate::models::InputFormatKind::MissingMaskOrPrefix).
    pub fn validate(self) -> Result<InputClassification, ParseError> {
        match self {
            InputClassification::BareIp(ip) => Err(ParseError::missing_mask_or_prefix(ip)),
            InputClassification::Invalid(e) => Err(e),
            other => Ok(other),
        }
    }

    /// The supplied address, if the input had one.
    pub fn ip(&self) -> Option<Ipv4Addr> {
        match self {
            InputClassification::IpWithCidr(ip, _)
            | InputClassification::IpWithMask(ip, _)
            | InputClassification::BareIp(ip) => Some(*ip),
            _ => None,
        }
    }
}

impl fmt::Display for InputClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputClassification::CidrOnly(p) => write!(f, "cidr-only /{p}"),
            InputClassification::MaskOnly(m) => write!(f, "mask-only {m}"),
            InputClassification::IpWithCidr(ip, p) => write!(f, "ip/cidr {ip}/{p}"),
            InputClassification::IpWithMask(ip, m) => write!(f, "ip mask {ip} {m}"),
            InputClassification::BareIp(ip) => write!(f, "bare ip {ip}"),
            InputClassification::Invalid(e) => write!(f, "invalid ({e})"),
        }
    }
}
