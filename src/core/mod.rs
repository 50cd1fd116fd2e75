//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, the provider HTTP client, server
//! lifecycle management, and transport layer abstractions.

pub mod config;
pub mod error;
pub mod provider;
pub mod server;
pub mod transport;

pub use config::{Config, ProviderConfig};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
