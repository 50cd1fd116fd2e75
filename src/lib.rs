//! Alpha Vantage MCP Server Library
//!
//! Exposes Alpha Vantage market data as Model Context Protocol tools. Every
//! tool is a static declaration; a single dispatch gateway validates the
//! arguments, queries the provider and classifies the reply into a
//! [`ToolResult`](domains::tools::ToolResult).
//!
//! # Architecture
//!
//! - **core**: configuration, errors, the provider HTTP client, the MCP
//!   server handler and the transports
//! - **domains::tools**: tool specs, the catalogue, the registry, the
//!   dispatch gateway and the response extractor
//!
//! # Example
//!
//! ```rust,no_run
//! use alpha_vantage_mcp_server::core::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let server = McpServer::new(Config::from_env())?;
//!     let quote = server
//!         .call_tool("get_current_price", serde_json::json!({"symbol": "AAPL"}))
//!         .await;
//!     println!("{}", serde_json::to_string_pretty(&quote)?);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
