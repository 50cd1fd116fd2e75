//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type for server construction and
//! lifecycle failures. Per-call tool failures never surface here: the dispatch
//! gateway turns them into a [`ToolResult`](crate::domains::tools::ToolResult).

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error building the provider client.
    #[error("Provider error: {0}")]
    Provider(#[from] super::provider::FetchError),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
