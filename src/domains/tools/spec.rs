//! Declarative tool specifications.
//!
//! A [`ToolSpec`] describes everything the dispatch gateway needs to serve a
//! tool: the provider function it maps to, the parameters it accepts and the
//! key(s) the provider wraps its payload under. Specs are `'static` data and
//! never change after the registry is built.

use rmcp::model::{JsonObject, Tool};
use serde_json::{Value, json};
use std::borrow::Cow;
use std::sync::Arc;

/// How a parameter value is constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Free-form text, forwarded verbatim.
    Text,
    /// One of a fixed set of provider-documented values.
    Choice(&'static [&'static str]),
}

impl ParamKind {
    /// Check a supplied value against this kind.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Text => true,
            Self::Choice(allowed) => allowed.contains(&value),
        }
    }
}

/// A single declared parameter.
///
/// `name` is both the argument name callers use and the provider's query
/// parameter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub required: bool,
    pub kind: ParamKind,
    pub description: &'static str,
}

impl ParamSpec {
    /// A required free-text parameter.
    pub const fn required(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            required: true,
            kind: ParamKind::Text,
            description,
        }
    }

    /// An optional parameter restricted to `allowed`.
    pub const fn optional_choice(
        name: &'static str,
        allowed: &'static [&'static str],
        description: &'static str,
    ) -> Self {
        Self {
            name,
            required: false,
            kind: ParamKind::Choice(allowed),
            description,
        }
    }
}

/// Post-processing applied to a successfully extracted payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Return the payload unchanged.
    Payload,
    /// Reduce a time series to its most recent entry's `field`, reported as
    /// `{symbol, price, updated}`.
    LatestQuote { field: &'static str },
}

/// Static description of one tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSpec {
    /// Unique tool name exposed to callers.
    pub name: &'static str,

    /// Human-readable description for capability listings.
    pub description: &'static str,

    /// Provider `function` identifier.
    pub function: &'static str,

    /// Declared parameters, in presentation order.
    pub params: &'static [ParamSpec],

    /// Query pairs sent on every call regardless of arguments.
    pub fixed_params: &'static [(&'static str, &'static str)],

    /// Candidate payload keys, first present wins. Empty means the whole
    /// body is the payload.
    pub success_keys: &'static [&'static str],

    pub projection: Projection,
}

impl ToolSpec {
    /// A spec whose payload is the provider's whole response body.
    pub const fn whole_body(
        name: &'static str,
        description: &'static str,
        function: &'static str,
        params: &'static [ParamSpec],
    ) -> Self {
        Self {
            name,
            description,
            function,
            params,
            fixed_params: &[],
            success_keys: &[],
            projection: Projection::Payload,
        }
    }

    /// Declared parameter names, in order.
    pub fn param_names(&self) -> Vec<&'static str> {
        self.params.iter().map(|p| p.name).collect()
    }

    /// JSON schema describing the tool's arguments.
    pub fn input_schema(&self) -> JsonObject {
        let properties: serde_json::Map<String, Value> = self
            .params
            .iter()
            .map(|p| {
                let mut property = json!({
                    "type": "string",
                    "description": p.description,
                });
                if let ParamKind::Choice(allowed) = p.kind {
                    property["enum"] = json!(allowed);
                }
                (p.name.to_string(), property)
            })
            .collect();

        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();

        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        schema.insert("required".to_string(), json!(required));
        schema
    }

    /// rmcp tool model for this spec.
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: Cow::Borrowed(self.name),
            description: Some(Cow::Borrowed(self.description)),
            input_schema: Arc::new(self.input_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
