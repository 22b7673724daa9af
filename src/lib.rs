//! IPv4 subnet calculator.
//!
//! Classifies an input such as `192.168.1.10/24`, `10.0.0.5 255.255.255.252`,
//! `/24` or `255.255.255.0` and computes network, usable range, broadcast and
//! mask for it.
//!
//! ```
//! let result = subnet_calc::calculate("192.168.1.10/24").unwrap();
//! assert_eq!(result.network.unwrap().to_string(), "192.168.1.0");
//! assert_eq!(result.mask_display(), "255.255.255.0 (/24)");
//! ```

pub mod config;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use models::{InputClassification, ParseError, SubnetResult};
pub use processing::{classify, compute};

/// Classify and compute in one step.
pub fn calculate(input: &str) -> Result<SubnetResult, ParseError> {
    compute(&classify(input))
}
