//! Dispatch gateway.
//!
//! One parameterized path serves every tool:
//! registry lookup → argument validation → provider request → extraction.
//! Every failure along the way is converted into a [`ToolResult`]; nothing
//! escapes as an error.

use std::collections::BTreeMap;
use std::sync::Arc;

use rmcp::model::JsonObject;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::error::ToolError;
use super::extractor::{apply_projection, classify};
use super::registry::ToolRegistry;
use super::result::ToolResult;
use super::spec::{Projection, ToolSpec};
use crate::core::config::ProviderConfig;
use crate::core::provider::{API_KEY_PARAM, ProviderClient, ProviderRequest};

/// Argument name to value, supplied per call.
pub type ArgumentSet = BTreeMap<String, String>;

/// Capability listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Vec<&'static str>,
}

/// Convert a JSON argument object into an [`ArgumentSet`].
///
/// Strings pass through, numbers and booleans use their JSON text, `null`
/// counts as absent. Arrays and objects are rejected.
pub fn arguments_from_json(arguments: &JsonObject) -> Result<ArgumentSet, ToolError> {
    let mut args = ArgumentSet::new();

    for (name, value) in arguments {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(ToolError::invalid_arguments(format!(
                    "parameter '{name}' must be a string"
                )));
            }
        };
        args.insert(name.clone(), value);
    }

    Ok(args)
}

/// Routes tool calls to the provider.
///
/// Holds only read-only state; share it behind an `Arc` across any number of
/// concurrent calls.
pub struct DispatchGateway {
    registry: ToolRegistry,
    client: Arc<dyn ProviderClient>,
    provider: ProviderConfig,
}

impl DispatchGateway {
    /// Create a gateway over `registry`, sending requests through `client`.
    pub fn new(
        registry: ToolRegistry,
        client: Arc<dyn ProviderClient>,
        provider: ProviderConfig,
    ) -> Self {
        Self {
            registry,
            client,
            provider,
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Name, description and parameter names of every registered tool.
    pub fn capabilities(&self) -> Vec<ToolDescriptor> {
        self.registry
            .iter()
            .map(|spec| ToolDescriptor {
                name: spec.name,
                description: spec.description,
                parameters: spec.param_names(),
            })
            .collect()
    }

    /// Invoke a tool with JSON arguments, as received from a transport.
    pub async fn invoke_json(&self, tool_name: &str, arguments: &JsonObject) -> ToolResult {
        match arguments_from_json(arguments) {
            Ok(args) => self.invoke(tool_name, &args).await,
            Err(e) => {
                warn!("Rejected arguments for {}: {}", tool_name, e);
                ToolResult::invalid_arguments(e.to_string())
            }
        }
    }

    /// Invoke a tool.
    ///
    /// Sends at most one provider request. Unknown tools, missing or invalid
    /// arguments and a missing API key are reported without touching the
    /// network.
    #[instrument(skip(self, args), fields(tool = %tool_name))]
    pub async fn invoke(&self, tool_name: &str, args: &ArgumentSet) -> ToolResult {
        let spec = match self.registry.lookup(tool_name) {
            Ok(spec) => spec,
            Err(e) => {
                warn!("{}", e);
                return ToolResult::invalid_arguments(format!("unknown tool '{tool_name}'"));
            }
        };

        let request = match self.build_request(spec, args) {
            Ok(request) => request,
            Err(e) => {
                warn!("{}", e);
                return ToolResult::invalid_arguments(match e {
                    ToolError::InvalidArguments(details) => details,
                    other => other.to_string(),
                });
            }
        };

        debug!(?request, "Dispatching provider request");

        let response = match self.client.fetch(&request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Provider call failed: {}", e);
                return ToolResult::TransportError {
                    cause: e.to_string(),
                };
            }
        };

        let result = match spec.projection {
            Projection::Payload => classify(response.body, spec.success_keys),
            projection => apply_projection(
                classify(response.body.clone(), spec.success_keys),
                projection,
                args.get("symbol").map(String::as_str),
                &response.body,
            ),
        };

        if result.is_success() {
            info!("Tool {} succeeded", spec.name);
        } else {
            warn!("Tool {} returned {}", spec.name, result.kind());
        }

        result
    }

    /// Validate `args` against `spec` and build the outbound request.
    ///
    /// Undeclared arguments are ignored.
    pub fn build_request(
        &self,
        spec: &ToolSpec,
        args: &ArgumentSet,
    ) -> Result<ProviderRequest, ToolError> {
        let mut request = ProviderRequest::new(&self.provider.base_url, spec.function);

        for param in spec.params {
            match args.get(param.name) {
                Some(value) if !param.kind.accepts(value) => {
                    return Err(ToolError::invalid_arguments(format!(
                        "invalid value '{}' for parameter '{}'",
                        value, param.name
                    )));
                }
                Some(value) => request = request.with_param(param.name, value.as_str()),
                None if param.required => {
                    return Err(ToolError::invalid_arguments(format!(
                        "missing required parameter '{}'",
                        param.name
                    )));
                }
                None => {}
            }
        }

        for (name, value) in spec.fixed_params {
            request = request.with_param(*name, *value);
        }

        let api_key = self.provider.api_key.as_deref().ok_or_else(|| {
            ToolError::invalid_arguments("ALPHA_VANTAGE_API_KEY is not configured")
        })?;

        Ok(request.with_param(API_KEY_PARAM, api_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::provider::{FetchError, HttpProviderClient, ProviderResponse};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Deterministic in-process provider that records every request.
    struct MockProvider {
        reply: Result<Value, fn() -> FetchError>,
        calls: AtomicUsize,
        seen: Mutex<Vec<ProviderRequest>>,
    }

    impl MockProvider {
        fn replying(body: Value) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(body),
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn failing(error: fn() -> FetchError) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(error),
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn last_request(&self) -> ProviderRequest {
            self.seen.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl ProviderClient for MockProvider {
        async fn fetch(&self, request: &ProviderRequest) -> Result<ProviderResponse, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(request.clone());
            match &self.reply {
                Ok(body) => Ok(ProviderResponse {
                    status: 200,
                    body: body.clone(),
                }),
                Err(make) => Err(make()),
            }
        }
    }

    fn provider_config(api_key: Option<&str>) -> ProviderConfig {
        ProviderConfig::new(
            api_key.map(str::to_string),
            "https://provider.test/query",
            Duration::from_secs(10),
        )
    }

    fn gateway(client: Arc<dyn ProviderClient>) -> DispatchGateway {
        DispatchGateway::new(
            ToolRegistry::builtin().unwrap(),
            client,
            provider_config(Some("demo")),
        )
    }

    fn args(pairs: &[(&str, &str)]) -> ArgumentSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_unknown_tool_never_reaches_provider() {
        let provider = MockProvider::replying(json!({}));
        let gateway = gateway(provider.clone());

        let result = gateway.invoke("get_moon_phase", &ArgumentSet::new()).await;

        assert!(matches!(result, ToolResult::InvalidArguments { ref details } if details.contains("unknown tool")));
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_required_parameter_never_reaches_provider() {
        let provider = MockProvider::replying(json!({}));
        let gateway = gateway(provider.clone());

        let result = gateway
            .invoke("get_fx_daily_data", &args(&[("from_symbol", "EUR")]))
            .await;

        assert_eq!(
            result,
            ToolResult::invalid_arguments("missing required parameter 'to_symbol'")
        );
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_choice_never_reaches_provider() {
        let provider = MockProvider::replying(json!({}));
        let gateway = gateway(provider.clone());

        let result = gateway
            .invoke("get_crude_oil_wti_data", &args(&[("interval", "hourly")]))
            .await;

        assert!(matches!(result, ToolResult::InvalidArguments { .. }));
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_api_key_never_reaches_provider() {
        let provider = MockProvider::replying(json!({}));
        let gateway = DispatchGateway::new(
            ToolRegistry::builtin().unwrap(),
            provider.clone(),
            provider_config(None),
        );

        let result = gateway.invoke("get_inflation_data", &ArgumentSet::new()).await;

        assert_eq!(
            result,
            ToolResult::invalid_arguments("ALPHA_VANTAGE_API_KEY is not configured")
        );
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_request_carries_function_params_and_key() {
        let provider = MockProvider::replying(json!({"Time Series FX (Daily)": {}}));
        let gateway = gateway(provider.clone());

        gateway
            .invoke(
                "get_fx_daily_data",
                &args(&[("from_symbol", "EUR"), ("to_symbol", "USD"), ("extra", "ignored")]),
            )
            .await;

        let request = provider.last_request();
        assert_eq!(request.endpoint, "https://provider.test/query");
        assert_eq!(
            request.query,
            vec![
                ("function".to_string(), "FX_DAILY".to_string()),
                ("from_symbol".to_string(), "EUR".to_string()),
                ("to_symbol".to_string(), "USD".to_string()),
                ("apikey".to_string(), "demo".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_optional_parameter_omitted_from_query() {
        let provider = MockProvider::replying(json!({"name": "Treasury Yield", "data": []}));
        let gateway = gateway(provider.clone());

        let result = gateway
            .invoke("get_treasury_yield", &args(&[("maturity", "10year")]))
            .await;

        assert!(result.is_success());
        let request = provider.last_request();
        assert_eq!(request.param("maturity"), Some("10year"));
        assert_eq!(request.param("interval"), None);
    }

    #[tokio::test]
    async fn test_success_extracts_wrapped_payload() {
        let rate = json!({"1. From_Currency Code": "USD", "5. Exchange Rate": "151.2"});
        let provider = MockProvider::replying(json!({"Realtime Currency Exchange Rate": rate.clone()}));
        let gateway = gateway(provider);

        let result = gateway
            .invoke(
                "get_currency_exchange_rate",
                &args(&[("from_currency", "USD"), ("to_currency", "JPY")]),
            )
            .await;

        assert_eq!(result, ToolResult::Success { payload: rate });
    }

    #[tokio::test]
    async fn test_provider_error_and_rate_limit_pass_through() {
        let provider = MockProvider::replying(json!({"Error Message": "Invalid API call."}));
        let result = gateway(provider)
            .invoke("get_fx_weekly_data", &args(&[("from_symbol", "EUR"), ("to_symbol", "XXX")]))
            .await;
        assert!(matches!(result, ToolResult::ProviderError { .. }));

        let provider = MockProvider::replying(json!({"Note": "Thank you for using Alpha Vantage!"}));
        let result = gateway(provider).invoke("get_durables", &ArgumentSet::new()).await;
        assert!(matches!(result, ToolResult::RateLimited { .. }));
    }

    #[tokio::test]
    async fn test_transport_failure_maps_to_transport_error() {
        let provider = MockProvider::failing(|| FetchError::Connect("refused".to_string()));
        let gateway = gateway(provider.clone());

        let result = gateway.invoke("get_retail_sales", &ArgumentSet::new()).await;

        assert!(matches!(result, ToolResult::TransportError { ref cause } if cause.contains("refused")));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_current_price_uses_fixed_interval_and_projection() {
        let provider = MockProvider::replying(json!({
            "Meta Data": {"2. Symbol": "IBM"},
            "Time Series (5min)": {
                "2024-05-01 15:55:00": {"4. close": "165.10"},
                "2024-05-01 16:00:00": {"4. close": "165.25"}
            }
        }));
        let gateway = gateway(provider.clone());

        let result = gateway
            .invoke("get_current_price", &args(&[("symbol", "IBM")]))
            .await;

        assert_eq!(
            result,
            ToolResult::Success {
                payload: json!({"symbol": "IBM", "price": "165.25", "updated": "2024-05-01 16:00:00"})
            }
        );
        assert_eq!(provider.last_request().param("interval"), Some("5min"));
    }

    #[tokio::test]
    async fn test_invocation_is_idempotent() {
        let provider = MockProvider::replying(json!({
            "Time Series (Digital Currency Daily)": {"2024-01-01": {"4. close": "42000"}}
        }));
        let gateway = gateway(provider.clone());
        let call_args = args(&[("symbol", "BTC"), ("market", "EUR")]);

        let first = gateway.invoke("get_digital_currency_daily_data", &call_args).await;
        let second = gateway.invoke("get_digital_currency_daily_data", &call_args).await;

        assert_eq!(first, second);
        assert!(first.is_success());
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn test_invoke_json_converts_arguments() {
        let provider = MockProvider::replying(json!({"name": "Real GDP", "data": []}));
        let gateway = gateway(provider.clone());

        let mut arguments = JsonObject::new();
        arguments.insert("interval".to_string(), json!("annual"));
        arguments.insert("unused".to_string(), Value::Null);
        assert!(gateway.invoke_json("get_real_gdp_data", &arguments).await.is_success());

        arguments.insert("interval".to_string(), json!(["annual"]));
        let result = gateway.invoke_json("get_real_gdp_data", &arguments).await;
        assert!(matches!(result, ToolResult::InvalidArguments { .. }));
        assert_eq!(provider.calls(), 1);
    }

    #[test]
    fn test_arguments_from_json() {
        let mut arguments = JsonObject::new();
        arguments.insert("symbol".to_string(), json!("IBM"));
        arguments.insert("limit".to_string(), json!(5));
        arguments.insert("adjusted".to_string(), json!(true));
        arguments.insert("skip".to_string(), Value::Null);

        let args = arguments_from_json(&arguments).unwrap();
        assert_eq!(args.get("symbol").map(String::as_str), Some("IBM"));
        assert_eq!(args.get("limit").map(String::as_str), Some("5"));
        assert_eq!(args.get("adjusted").map(String::as_str), Some("true"));
        assert!(!args.contains_key("skip"));
    }

    #[test]
    fn test_capabilities_list_every_tool() {
        let gateway = gateway(MockProvider::replying(json!({})));
        let capabilities = gateway.capabilities();

        assert_eq!(capabilities.len(), gateway.registry().len());
        let treasury = capabilities
            .iter()
            .find(|c| c.name == "get_treasury_yield")
            .unwrap();
        assert_eq!(treasury.parameters, vec!["interval", "maturity"]);
        assert!(!treasury.description.is_empty());
    }

    #[tokio::test]
    async fn test_end_to_end_over_http() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("function", "FX_MONTHLY"))
            .and(query_param("apikey", "demo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Meta Data": {},
                "Time Series FX (Monthly)": {"2024-01-31": {"4. close": "1.08"}}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = ProviderConfig::new(
            Some("demo".to_string()),
            format!("{}/query", server.uri()),
            Duration::from_secs(5),
        );
        let client = Arc::new(HttpProviderClient::new(&config).unwrap());
        let gateway = DispatchGateway::new(ToolRegistry::builtin().unwrap(), client, config);

        let result = gateway
            .invoke("get_fx_monthly_data", &args(&[("from_symbol", "EUR"), ("to_symbol", "USD")]))
            .await;

        assert_eq!(
            result,
            ToolResult::Success {
                payload: json!({"2024-01-31": {"4. close": "1.08"}})
            }
        );
    }

    #[tokio::test]
    async fn test_slow_provider_yields_transport_error_near_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"name": "WTI", "data": []}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let config = ProviderConfig::new(
            Some("demo".to_string()),
            format!("{}/query", server.uri()),
            Duration::from_millis(300),
        );
        let client = Arc::new(HttpProviderClient::new(&config).unwrap());
        let gateway = DispatchGateway::new(ToolRegistry::builtin().unwrap(), client, config);

        let started = Instant::now();
        let result = gateway.invoke("get_crude_oil_wti_data", &ArgumentSet::new()).await;
        let elapsed = started.elapsed();

        assert!(matches!(result, ToolResult::TransportError { .. }));
        assert!(elapsed < Duration::from_secs(2), "took {elapsed:?}");
    }
}
