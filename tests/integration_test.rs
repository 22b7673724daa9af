//! Integration tests for subnet-calc
//!
//! These tests drive the public API from raw input to rendered output.

use std::net::Ipv4Addr;
use subnet_calc::{
    calculate, classify, compute,
    config::OutputFormat,
    models::{address_to_int, cidr_to_mask, int_to_address, mask_to_cidr, InputFormatKind},
    output::{render, DiagramLayout},
    InputClassification, ParseError,
};

fn addr(s: &str) -> Option<Ipv4Addr> {
    Some(s.parse().unwrap())
}

#[test]
fn test_documented_scenarios() {
    let r = calculate("192.168.1.10/24").expect("valid input");
    assert_eq!(r.network, addr("192.168.1.0"));
    assert_eq!(r.first_usable, addr("192.168.1.1"));
    assert_eq!(r.supplied_ip, addr("192.168.1.10"));
    assert_eq!(r.last_usable, addr("192.168.1.254"));
    assert_eq!(r.broadcast, addr("192.168.1.255"));
    assert_eq!(r.mask.to_string(), "255.255.255.0");
    assert_eq!(r.prefix_length, 24);

    let r = calculate("10.0.0.5 255.255.255.252").expect("valid input");
    assert_eq!(r.prefix_length, 30);
    assert_eq!(r.network, addr("10.0.0.4"));
    assert_eq!(r.first_usable, addr("10.0.0.5"));
    assert_eq!(r.last_usable, addr("10.0.0.6"));
    assert_eq!(r.broadcast, addr("10.0.0.7"));

    let r = calculate("/24").expect("valid input");
    assert_eq!(r.mask.to_string(), "255.255.255.0");
    assert_eq!(r.prefix_length, 24);
    assert!(r.network.is_none() && r.supplied_ip.is_none() && r.broadcast.is_none());

    assert_eq!(calculate("255.255.255.254").unwrap().prefix_length, 31);

    let r = calculate("172.16.0.1/31").unwrap();
    assert_eq!(r.network, addr("172.16.0.0"));
    assert_eq!(r.first_usable, None);
    assert_eq!(r.supplied_ip, addr("172.16.0.1"));
    assert_eq!(r.last_usable, None);
    assert_eq!(r.broadcast, addr("172.16.0.1"));

    let r = calculate("172.16.0.1/32").unwrap();
    assert_eq!(r.network, None);
    assert_eq!(r.first_usable, addr("172.16.0.1"));
    assert_eq!(r.supplied_ip, addr("172.16.0.1"));
    assert_eq!(r.last_usable, addr("172.16.0.1"));
    assert_eq!(r.broadcast, None);
}

#[test]
fn test_documented_errors() {
    assert!(matches!(
        calculate("192.168.1.300/24"),
        Err(ParseError::Syntax { .. })
    ));
    assert!(matches!(
        calculate("192.168.01.1/24"),
        Err(ParseError::Syntax { .. })
    ));
    assert!(matches!(
        calculate("192.168.1.0/33"),
        Err(ParseError::PrefixRange { .. })
    ));
    assert!(matches!(
        calculate("192.168.1.1"),
        Err(ParseError::InputFormat {
            kind: InputFormatKind::MissingMaskOrPrefix,
            ..
        })
    ));
    assert!(matches!(
        calculate("192.168.1.1 255.255.0.255"),
        Err(ParseError::MaskFormat { .. })
    ));
    assert!(matches!(
        mask_to_cidr(address_to_int("255.255.0.255").unwrap()),
        Err(ParseError::MaskFormat { .. })
    ));
}

#[test]
fn test_error_messages_name_the_token() {
    let msg = calculate("192.168.1.300/24").unwrap_err().to_string();
    assert!(msg.contains("300"), "{msg}");
    let msg = calculate("10.0.0.1/40").unwrap_err().to_string();
    assert!(msg.contains("40"), "{msg}");
    let msg = calculate("").unwrap_err().to_string();
    assert_eq!(msg, "Please enter an IP address or subnet mask");
}

#[test]
fn test_classify_then_compute() {
    let c = classify("10.1.2.3 255.255.0.0");
    assert!(matches!(c, InputClassification::IpWithMask(..)));
    let c = c.validate().expect("actionable");
    let r = compute(&c).expect("computes");
    assert_eq!(r.network, addr("10.1.0.0"));
    assert_eq!(r.usable_hosts(), 65534);
}

#[test]
fn test_cidr_and_mask_inputs_agree() {
    for len in 0..=32u8 {
        let mask = cidr_to_mask(len).unwrap();
        let by_cidr = calculate(&format!("10.200.30.4/{len}")).unwrap();
        let by_mask = calculate(&format!("10.200.30.4 {mask}")).unwrap();
        assert_eq!(by_cidr, by_mask, "/{len}");
        assert_eq!(mask_to_cidr(mask.bits()).unwrap(), len);
    }
}

#[test]
fn test_round_trip_strings() {
    for s in ["0.0.0.0", "1.2.3.4", "10.0.0.255", "255.255.255.255", "100.64.0.1"] {
        assert_eq!(int_to_address(address_to_int(s).unwrap()), s);
    }
}

#[test]
fn test_render_formats() {
    let r = calculate("192.168.1.10/24").unwrap();

    let json = render(&r, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["mask_display"], "255.255.255.0 (/24)");
    assert_eq!(value["last_usable"], "192.168.1.254");

    let svg = render(&r, OutputFormat::Svg).unwrap();
    assert_eq!(svg.matches("<rect ").count(), 5);
    assert_eq!(DiagramLayout::for_result(&r), DiagramLayout::Range);

    let table = render(&r, OutputFormat::Table).unwrap();
    assert!(table.contains("192.168.1.255"));
}
