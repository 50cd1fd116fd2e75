//! Uniform result envelope returned by every tool call.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde_json::{Value, json};

/// Outcome of a tool invocation.
///
/// This is the only value the gateway hands back; raw provider shapes never
/// leak past it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToolResult {
    /// The provider answered with the expected payload.
    Success { payload: Value },

    /// The provider explicitly reported a domain error (e.g. bad symbol).
    ProviderError { message: String },

    /// The provider throttled the request.
    RateLimited { notice: String },

    /// Caller or configuration mistake; no request was sent.
    InvalidArguments { details: String },

    /// Network, timeout, non-2xx status or non-JSON body.
    TransportError { cause: String },

    /// A well-formed body matching none of the documented shapes.
    UnrecognizedResponse { raw_body: Value },
}

impl ToolResult {
    pub fn invalid_arguments(details: impl Into<String>) -> Self {
        Self::InvalidArguments {
            details: details.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Short machine-readable tag, matching the serialized `kind`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::ProviderError { .. } => "provider_error",
            Self::RateLimited { .. } => "rate_limited",
            Self::InvalidArguments { .. } => "invalid_arguments",
            Self::TransportError { .. } => "transport_error",
            Self::UnrecognizedResponse { .. } => "unrecognized_response",
        }
    }

    /// Human-readable summary of a failure. `None` on success.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Success { .. } => None,
            Self::ProviderError { message } => Some(format!("Provider error: {message}")),
            Self::RateLimited { notice } => {
                Some(format!("API limit reached. Try again later. ({notice})"))
            }
            Self::InvalidArguments { details } => Some(format!("Invalid arguments: {details}")),
            Self::TransportError { cause } => Some(format!("Connection error: {cause}")),
            Self::UnrecognizedResponse { .. } => {
                Some("Unrecognized response from provider".to_string())
            }
        }
    }

    /// Render for the rmcp transports.
    ///
    /// Success carries the payload as pretty JSON text (plain text for string
    /// payloads) plus structured content when the payload is an object.
    /// Failures set `is_error` and carry the serialized envelope as
    /// structured content.
    pub fn into_call_result(self) -> CallToolResult {
        match self {
            Self::Success { payload } => {
                let text = match &payload {
                    Value::String(s) => s.clone(),
                    other => serde_json::to_string_pretty(other)
                        .unwrap_or_else(|_| other.to_string()),
                };
                CallToolResult {
                    content: vec![Content::text(text)],
                    structured_content: payload.is_object().then_some(payload),
                    is_error: Some(false),
                    meta: None,
                }
            }
            failure => CallToolResult {
                content: vec![Content::text(failure.error_message().unwrap_or_default())],
                structured_content: serde_json::to_value(&failure).ok(),
                is_error: Some(true),
                meta: None,
            },
        }
    }

    /// Render as the JSON body used by the HTTP transport's `tools/call`.
    pub fn to_http_value(&self) -> Value {
        let result = self.clone().into_call_result();

        let mut response = json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false),
        });

        if let (Some(structured), Some(obj)) = (result.structured_content, response.as_object_mut())
        {
            obj.insert("structuredContent".to_string(), structured);
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_renders_payload() {
        let result = ToolResult::Success {
            payload: json!({"5. Exchange Rate": "1.08"}),
        }
        .into_call_result();

        assert_eq!(result.is_error, Some(false));
        assert_eq!(
            result.structured_content,
            Some(json!({"5. Exchange Rate": "1.08"}))
        );
        let text = result.content[0].as_text().unwrap().text.clone();
        assert!(text.contains("1.08"));
    }

    #[test]
    fn test_rate_limited_renders_error() {
        let result = ToolResult::RateLimited {
            notice: "5 calls per minute".to_string(),
        }
        .into_call_result();

        assert_eq!(result.is_error, Some(true));
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["kind"], "rate_limited");
        assert_eq!(structured["notice"], "5 calls per minute");
        let text = result.content[0].as_text().unwrap().text.clone();
        assert!(text.starts_with("API limit reached"));
    }

    #[test]
    fn test_kind_matches_serialized_tag() {
        let results = [
            ToolResult::Success { payload: json!(1) },
            ToolResult::ProviderError { message: "x".into() },
            ToolResult::RateLimited { notice: "x".into() },
            ToolResult::invalid_arguments("x"),
            ToolResult::TransportError { cause: "x".into() },
            ToolResult::UnrecognizedResponse { raw_body: json!({}) },
        ];
        for result in results {
            let value = serde_json::to_value(&result).unwrap();
            assert_eq!(value["kind"], result.kind());
        }
    }

    #[test]
    fn test_http_value() {
        let value = ToolResult::invalid_arguments("missing required parameter 'symbol'")
            .to_http_value();
        assert_eq!(value["isError"], true);
        assert_eq!(value["structuredContent"]["kind"], "invalid_arguments");
        assert!(value["content"].is_array());
    }
}
