//! Input processing.
//!
//! - [`parser`] - classify raw input into one of the accepted grammars
//! - [`arithmetic`] - network, broadcast and host range derivation

mod arithmetic;
mod parser;

// Re-export public functions
pub use arithmetic::{address_count, compute, subnet_for, usable_hosts};
pub use parser::{classify, parse_prefix};
