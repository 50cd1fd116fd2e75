//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Every tool forwards its arguments to one Alpha Vantage function and
//! returns a uniform [`ToolResult`].
//!
//! ## Architecture
//!
//! - `catalogue/` - Static tool specifications, one file per market area
//! - `spec.rs` - Declarative [`ToolSpec`] types
//! - `registry.rs` - Validated name → spec lookup
//! - `gateway.rs` - Parameterized dispatch shared by every tool
//! - `extractor.rs` - Provider body classification
//! - `result.rs` - The [`ToolResult`] envelope and its transport rendering
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `error.rs` - Tool-specific error types
//!
//! **No need to modify `server.rs` to add a tool!** The router is built
//! from the registry.

pub mod catalogue;
mod error;
pub mod extractor;
pub mod gateway;
mod registry;
mod result;
pub mod router;
pub mod spec;

pub use error::ToolError;
pub use gateway::{ArgumentSet, DispatchGateway, ToolDescriptor};
pub use registry::ToolRegistry;
pub use result::ToolResult;
pub use router::build_tool_router;
pub use spec::{ParamKind, ParamSpec, Projection, ToolSpec};
