//! Subnet arithmetic.
//!
//! Derives network, broadcast and usable host range from a classified input.
//! All values are `u32`, nothing here re-validates the classification.

use crate::models::{
    broadcast_addr, cidr_to_mask, network_addr, InputClassification, Mask, MaskNotation,
    ParseError, SubnetResult, MAX_LENGTH,
};
use std::net::Ipv4Addr;

/// Compute the subnet details for a classification.
///
/// Never fails for `CidrOnly`, `MaskOnly`, `IpWithCidr` and `IpWithMask` as
/// produced by [`classify`](crate::classify). `BareIp` and `Invalid` return
/// their error instead of a result.
pub fn compute(classification: &InputClassification) -> Result<SubnetResult, ParseError> {
    let (ip, mask) = match *classification {
        InputClassification::CidrOnly(len) => {
            return Ok(mask_only(cidr_to_mask(len)?, MaskNotation::Prefix))
        }
        InputClassification::MaskOnly(mask) => {
            return Ok(mask_only(mask, MaskNotation::Dotted))
        }
        InputClassification::IpWithCidr(ip, len) => (ip, cidr_to_mask(len)?),
        InputClassification::IpWithMask(ip, mask) => (ip, mask),
        InputClassification::BareIp(ip) => return Err(ParseError::missing_mask_or_prefix(ip)),
        InputClassification::Invalid(ref e) => return Err(e.clone()),
    };
    let result = subnet_for(ip, mask);
    log::info!(
        "computed {ip} {mask_display}: network={network:?} broadcast={broadcast:?}",
        mask_display = result.mask_display(),
        network = result.network,
        broadcast = result.broadcast,
    );
    Ok(result)
}

/// Result for an input without an address.
fn mask_only(mask: Mask, notation: MaskNotation) -> SubnetResult {
    SubnetResult {
        network: None,
        first_usable: None,
        supplied_ip: None,
        last_usable: None,
        broadcast: None,
        mask,
        prefix_length: mask.prefix_len(),
        notation,
    }
}

/// Result for an address in a subnet.
///
/// | prefix | network | first  | last   | broadcast |
/// |--------|---------|--------|--------|-----------|
/// | 32     | N/A     | ip     | ip     | N/A       |
/// | 31     | network | N/A    | N/A    | broadcast |
/// | 0-30   | network | net+1  | bc-1   | broadcast |
pub fn subnet_for(ip: Ipv4Addr, mask: Mask) -> SubnetResult {
    let prefix_length = mask.prefix_len();
    let network = network_addr(ip, mask);
    let broadcast = broadcast_addr(ip, mask);

    let (network, first_usable, last_usable, broadcast) = match prefix_length {
        32 => (None, Some(ip), Some(ip), None),
        31 => (Some(network), None, None, Some(broadcast)),
        _ => {
            let (net, bc) = (u32::from(network), u32::from(broadcast));
            let first = net.checked_add(1).filter(|f| *f < bc).map(Ipv4Addr::from);
            let last = bc.checked_sub(1).filter(|l| *l > net).map(Ipv4Addr::from);
            (Some(network), first, last, Some(broadcast))
        }
    };

    SubnetResult {
        network,
        first_usable,
        supplied_ip: Some(ip),
        last_usable,
        broadcast,
        mask,
        prefix_length,
        notation: MaskNotation::Dotted,
    }
}

/// Total number of addresses in a subnet with this prefix length.
pub fn address_count(len: u8) -> u64 {
    if len > MAX_LENGTH {
        0
    } else {
        1u64 << (MAX_LENGTH - len)
    }
}

/// Number of usable host addresses, excluding network and broadcast.
///
/// `/31` and `/32` have no usable range and report 0.
pub fn usable_hosts(len: u8) -> u64 {
    if len > MAX_LENGTH - 2 {
        0
    } else {
        address_count(len) - 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::classify;

    fn calc(input: &str) -> SubnetResult {
        compute(&classify(input)).unwrap_or_else(|e| panic!("{input:?}: {e}"))
    }

    fn ip(s: &str) -> Option<Ipv4Addr> {
        Some(s.parse().unwrap())
    }

    #[test]
    fn test_ip_with_cidr_24() {
        let r = calc("192.168.1.10/24");
        assert_eq!(r.network, ip("192.168.1.0"));
        assert_eq!(r.first_usable, ip("192.168.1.1"));
        assert_eq!(r.supplied_ip, ip("192.168.1.10"));
        assert_eq!(r.last_usable, ip("192.168.1.254"));
        assert_eq!(r.broadcast, ip("192.168.1.255"));
        assert_eq!(r.mask.to_string(), "255.255.255.0");
        assert_eq!(r.prefix_length, 24);
        assert_eq!(r.mask_display(), "255.255.255.0 (/24)");
    }

    #[test]
    fn test_ip_with_mask_30() {
        let r = calc("10.0.0.5 255.255.255.252");
        assert_eq!(r.prefix_length, 30);
        assert_eq!(r.network, ip("10.0.0.4"));
        assert_eq!(r.first_usable, ip("10.0.0.5"));
        assert_eq!(r.last_usable, ip("10.0.0.6"));
        assert_eq!(r.broadcast, ip("10.0.0.7"));
    }

    #[test]
    fn test_cidr_only() {
        let r = calc("/24");
        assert_eq!(r.mask.to_string(), "255.255.255.0");
        assert_eq!(r.prefix_length, 24);
        assert_eq!(r.network, None);
        assert_eq!(r.first_usable, None);
        assert_eq!(r.supplied_ip, None);
        assert_eq!(r.last_usable, None);
        assert_eq!(r.broadcast, None);
        assert_eq!(r.mask_display(), "/24 (255.255.255.0)");
        assert!(r.is_mask_only());
    }

    #[test]
    fn test_mask_only() {
        let r = calc("255.255.255.254");
        assert_eq!(r.prefix_length, 31);
        assert!(r.is_mask_only());
        assert_eq!(r.mask_display(), "255.255.255.254 (/31)");
    }

    #[test]
    fn test_prefix_31() {
        let r = calc("172.16.0.1/31");
        assert_eq!(r.network, ip("172.16.0.0"));
        assert_eq!(r.first_usable, None);
        assert_eq!(r.supplied_ip, ip("172.16.0.1"));
        assert_eq!(r.last_usable, None);
        assert_eq!(r.broadcast, ip("172.16.0.1"));
    }

    #[test]
    fn test_prefix_32() {
        let r = calc("172.16.0.1/32");
        assert_eq!(r.network, None);
        assert_eq!(r.first_usable, ip("172.16.0.1"));
        assert_eq!(r.supplied_ip, ip("172.16.0.1"));
        assert_eq!(r.last_usable, ip("172.16.0.1"));
        assert_eq!(r.broadcast, None);
    }

    #[test]
    fn test_prefix_0() {
        let r = calc("10.1.2.3/0");
        assert_eq!(r.network, ip("0.0.0.0"));
        assert_eq!(r.first_usable, ip("0.0.0.1"));
        assert_eq!(r.last_usable, ip("255.255.255.254"));
        assert_eq!(r.broadcast, ip("255.255.255.255"));
        assert_eq!(r.mask.to_string(), "0.0.0.0");
    }

    #[test]
    fn test_extremes_do_not_overflow() {
        let r = calc("255.255.255.255/30");
        assert_eq!(r.network, ip("255.255.255.252"));
        assert_eq!(r.broadcast, ip("255.255.255.255"));
        assert_eq!(r.last_usable, ip("255.255.255.254"));

        let r = calc("0.0.0.0/31");
        assert_eq!(r.network, ip("0.0.0.0"));
        assert_eq!(r.broadcast, ip("0.0.0.1"));

        let r = calc("255.255.255.255 255.255.255.255");
        assert_eq!(r.first_usable, ip("255.255.255.255"));
        assert_eq!(r.prefix_length, 32);
    }

    #[test]
    fn test_containment_and_usable_range() {
        let addrs = ["0.0.0.0", "10.20.30.40", "172.16.255.1", "255.255.255.255"];
        for a in addrs {
            let addr: Ipv4Addr = a.parse().unwrap();
            for len in 0..=30u8 {
                let mask = cidr_to_mask(len).unwrap();
                let r = subnet_for(addr, mask);
                let net = u32::from(r.network.unwrap());
                let bc = u32::from(r.broadcast.unwrap());
                let first = u32::from(r.first_usable.unwrap());
                let last = u32::from(r.last_usable.unwrap());
                let ip = u32::from(addr);

                assert!(net <= ip && ip <= bc, "{a}/{len}");
                assert_eq!(net & mask.host_bits(), 0, "{a}/{len}");
                assert_eq!(last - first, bc - net - 2, "{a}/{len}");
                assert_eq!(u64::from(last - first) + 1, usable_hosts(len));
            }
        }
    }

    #[test]
    fn test_rejected_classifications() {
        assert!(matches!(
            compute(&classify("192.168.1.1")),
            Err(ParseError::InputFormat { .. })
        ));
        assert!(matches!(
            compute(&classify("192.168.1.0/33")),
            Err(ParseError::PrefixRange { .. })
        ));
        // hand built out-of-range prefix
        assert!(matches!(
            compute(&InputClassification::CidrOnly(40)),
            Err(ParseError::PrefixRange { .. })
        ));
    }

    #[test]
    fn test_host_counts() {
        assert_eq!(usable_hosts(0), 4294967294);
        assert_eq!(usable_hosts(8), 16777214);
        assert_eq!(usable_hosts(24), 254);
        assert_eq!(usable_hosts(30), 2);
        assert_eq!(usable_hosts(31), 0);
        assert_eq!(usable_hosts(32), 0);
        assert_eq!(usable_hosts(33), 0);
        assert_eq!(address_count(0), 1 << 32);
        assert_eq!(address_count(32), 1);
        assert_eq!(address_count(33), 0);
    }
}
