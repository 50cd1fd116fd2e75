//! Tool catalogue.
//!
//! Tools are grouped by market area, one file per group. Each group exposes a
//! `SPECS` table; [`all_specs`] concatenates them in listing order.
//!
//! ## Adding a New Tool
//!
//! Append a [`ToolSpec`] to the relevant group's `SPECS`. The registry,
//! the rmcp router and the HTTP transport pick it up automatically.

pub mod commodities;
pub mod crypto;
pub mod economic;
pub mod forex;
pub mod stocks;

use super::spec::ToolSpec;

/// Every built-in tool, in listing order.
pub fn all_specs() -> impl Iterator<Item = &'static ToolSpec> {
    stocks::SPECS
        .iter()
        .chain(forex::SPECS)
        .chain(crypto::SPECS)
        .chain(commodities::SPECS)
        .chain(economic::SPECS)
}
