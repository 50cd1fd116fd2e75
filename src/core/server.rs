//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool calls to the dispatch gateway.
//!
//! ## Tool Architecture
//!
//! Tools are declared as static specs in `domains/tools/catalogue/`. The
//! ToolRouter is built dynamically from the registry in
//! `domains/tools/router.rs`, and every route funnels into the same
//! [`DispatchGateway`].
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::tool::{ToolCallContext, ToolRouter},
    model::*,
    service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, warn};

use super::config::Config;
use super::error::{self, Error};
use super::provider::HttpProviderClient;
use crate::domains::tools::{
    DispatchGateway, ToolDescriptor, ToolRegistry, ToolResult, build_tool_router,
};

/// Instructions sent to clients during initialization.
pub const INSTRUCTIONS: &str = "Alpha Vantage market data server. Tools return stock quotes, \
     FX and digital currency time series, commodity prices and US economic indicators. \
     Failures are reported as tool errors with a `kind` of invalid_arguments, \
     transport_error, provider_error, rate_limited or unrecognized_response.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. Cloning is
/// cheap: all state lives behind `Arc`s and is read-only.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Gateway shared by every tool route.
    gateway: Arc<DispatchGateway>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails when the tool catalogue is inconsistent, the provider endpoint
    /// is not a valid URL, or the HTTP client cannot be built.
    pub fn new(config: Config) -> error::Result<Self> {
        reqwest::Url::parse(&config.provider.base_url).map_err(|e| {
            Error::config(format!(
                "invalid provider base URL '{}': {}",
                config.provider.base_url, e
            ))
        })?;

        let client = Arc::new(HttpProviderClient::new(&config.provider)?);
        let gateway = Arc::new(DispatchGateway::new(
            ToolRegistry::builtin()?,
            client,
            config.provider.clone(),
        ));

        info!("Registered {} tools", gateway.registry().len());

        Ok(Self::with_gateway(config, gateway))
    }

    /// Create a server around an existing gateway.
    pub fn with_gateway(config: Config, gateway: Arc<DispatchGateway>) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(gateway.clone()),
            config: Arc::new(config),
            gateway,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Capability listing, independent of any transport.
    pub fn capabilities(&self) -> Vec<ToolDescriptor> {
        self.gateway.capabilities()
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// Non-object arguments are treated as invalid arguments rather than a
    /// protocol error, so the caller always receives a tool result.
    pub async fn call_tool(&self, name: &str, arguments: serde_json::Value) -> ToolResult {
        match arguments {
            serde_json::Value::Object(args) => self.gateway.invoke_json(name, &args).await,
            serde_json::Value::Null => self.gateway.invoke_json(name, &JsonObject::new()).await,
            _ => ToolResult::invalid_arguments("arguments must be a JSON object"),
        }
    }
}

/// ServerHandler implementation.
///
/// Registered tools go through the router. Unknown names still reach the
/// gateway so they come back as a tool result, not a protocol error.
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        if self.tool_router.has_route(&request.name) {
            let tcc = ToolCallContext::new(self, request, context);
            return self.tool_router.call(tcc).await;
        }

        warn!("Call to unregistered tool '{}'", request.name);
        let arguments = request.arguments.unwrap_or_default();
        Ok(self
            .gateway
            .invoke_json(&request.name, &arguments)
            .await
            .into_call_result())
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_router.list_all(),
            meta: None,
            next_cursor: None,
        })
    }
}
