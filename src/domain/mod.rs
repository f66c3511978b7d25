//! Domain layer: check results and the lookup seams.
//!
//! - [`entities`] - Verdict and WHOIS result types
//! - [`lookups`] - Traits implemented by the infrastructure clients

pub mod entities;
pub mod lookups;
