//! Computed subnet details for one input.

use super::ipv4::Mask;
use crate::config::NOT_APPLICABLE;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;

/// How the mask was written in the input, decides the display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MaskNotation {
    /// `/24 (255.255.255.0)`
    Prefix,
    /// `255.255.255.0 (/24)`
    Dotted,
}

/// Result of a subnet calculation.
///
/// Address fields are `None` where they do not apply to the prefix length, or
/// when the input carried no address at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetResult {
    /// Network address.
    pub network: Option<Ipv4Addr>,
    /// First usable host address.
    pub first_usable: Option<Ipv4Addr>,
    /// The address given in the input.
    pub supplied_ip: Option<Ipv4Addr>,
    /// Last usable host address.
    pub last_usable: Option<Ipv4Addr>,
    /// Broadcast address.
    pub broadcast: Option<Ipv4Addr>,
    /// Subnet mask.
    pub mask: Mask,
    /// Prefix length (0-32), always matches `mask`.
    pub prefix_length: u8,
    /// How the mask was supplied in the input.
    pub notation: MaskNotation,
}

/// Render an optional address, `N/A` when missing.
pub fn addr_or_na(addr: Option<Ipv4Addr>) -> String {
    addr.map(|a| a.to_string())
        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

impl SubnetResult {
    /// Mask as shown to the user, e.g. `255.255.255.0 (/24)`.
    pub fn mask_display(&self) -> String {
        match self.notation {
            MaskNotation::Prefix => format!("/{} ({})", self.prefix_length, self.mask),
            MaskNotation::Dotted => format!("{} (/{})", self.mask, self.prefix_length),
        }
    }

    /// True when the input had no address, only a mask or prefix.
    pub fn is_mask_only(&self) -> bool {
        self.supplied_ip.is_none()
    }

    /// Usable host count for this prefix length.
    pub fn usable_hosts(&self) -> u64 {
        crate::processing::usable_hosts(self.prefix_length)
    }
}

impl Serialize for SubnetResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("SubnetResult", 9)?;
        s.serialize_field("network", &addr_or_na(self.network))?;
        s.serialize_field("first_usable", &addr_or_na(self.first_usable))?;
        s.serialize_field("supplied_ip", &addr_or_na(self.supplied_ip))?;
        s.serialize_field("last_usable", &addr_or_na(self.last_usable))?;
        s.serialize_field("broadcast", &addr_or_na(self.broadcast))?;
        s.serialize_field("mask", &self.mask)?;
        s.serialize_field("prefix_length", &self.prefix_length)?;
        s.serialize_field("mask_display", &self.mask_display())?;
        s.serialize_field("usable_hosts", &self.usable_hosts())?;
        s.end()
    }
}
