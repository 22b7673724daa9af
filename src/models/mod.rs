//! Domain models for the subnet calculator.
//!
//! - [`ipv4`] - strict address parsing, `u32` conversion and [`Mask`]
//! - [`InputClassification`] - what an input string was recognised as
//! - [`SubnetResult`] - the computed subnet details
//! - [`ParseError`] - why an input was rejected

mod classification;
mod error;
mod ipv4;
mod result;

// Re-export public types
pub use classification::InputClassification;
pub use error::{InputFormatKind, ParseError, SyntaxKind};
pub use ipv4::{
    address_to_int, broadcast_addr, cidr_to_mask, int_to_address, is_valid_address,
    is_valid_mask, mask_to_cidr, network_addr, parse_address, Mask, ALL_ONES_32,
    BITS_PER_ADDRESS, MAX_LENGTH,
};
pub use result::{addr_or_na, MaskNotation, SubnetResult};
