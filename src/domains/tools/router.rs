//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Every registered [`ToolSpec`](super::spec::ToolSpec) becomes one route.
//! All routes share the same dispatch gateway, so adding a tool to the
//! catalogue is enough to expose it over STDIO/TCP.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
};

use super::gateway::DispatchGateway;
use super::spec::ToolSpec;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(gateway: Arc<DispatchGateway>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    gateway
        .registry()
        .iter()
        .fold(ToolRouter::new(), |router, spec| {
            router.with_route(create_route(spec, gateway.clone()))
        })
}

/// Create a ToolRoute dispatching `spec` through the gateway.
fn create_route<S>(spec: &'static ToolSpec, gateway: Arc<DispatchGateway>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(spec.to_tool(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let gateway = gateway.clone();
        async move {
            let result = gateway.invoke_json(spec.name, &args).await;
            Ok::<_, McpError>(result.into_call_result())
        }
        .boxed()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ProviderConfig;
    use crate::core::provider::HttpProviderClient;
    use crate::domains::tools::ToolRegistry;

    struct TestServer {}

    fn test_gateway() -> Arc<DispatchGateway> {
        let config = ProviderConfig::default();
        let client = Arc::new(HttpProviderClient::new(&config).unwrap());
        Arc::new(DispatchGateway::new(
            ToolRegistry::builtin().unwrap(),
            client,
            config,
        ))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_gateway());
        let tools = router.list_all();
        assert_eq!(tools.len(), 29);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_current_price"));
        assert!(names.contains(&"get_fx_daily_data"));
        assert!(names.contains(&"get_digital_currency_weekly_data"));
        assert!(names.contains(&"get_coffee_data"));
        assert!(names.contains(&"get_monthly_unemployment_rate"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let gateway = test_gateway();
        let registry_names = gateway.registry().tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(gateway);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }

    #[test]
    fn test_router_schema_declares_required_params() {
        let router: ToolRouter<TestServer> = build_tool_router(test_gateway());
        let tools = router.list_all();
        let fx = tools
            .iter()
            .find(|t| t.name == "get_fx_daily_data")
            .unwrap();

        assert_eq!(
            fx.input_schema.get("required"),
            Some(&serde_json::json!(["from_symbol", "to_symbol"]))
        );
    }
}
