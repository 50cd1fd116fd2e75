//! Tool Registry - central lookup table for all tools.
//!
//! This module provides:
//! - A validated, read-only index of [`ToolSpec`]s built once at startup
//! - Tool metadata for listing
//!
//! The registry holds only `'static` data and is shared by every concurrent
//! call without synchronization.

use std::collections::{HashMap, HashSet};

use rmcp::model::Tool;

use super::catalogue;
use super::error::ToolError;
use super::spec::ToolSpec;
use crate::core::provider::{API_KEY_PARAM, FUNCTION_PARAM};

/// Tool registry - maps tool names to their specifications.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    specs: Vec<&'static ToolSpec>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Build the registry from the built-in catalogue.
    pub fn builtin() -> Result<Self, ToolError> {
        Self::from_specs(catalogue::all_specs())
    }

    /// Build a registry from arbitrary specs, enforcing:
    /// - tool names are unique
    /// - parameter names are unique within a spec
    /// - declared and fixed parameters never shadow `function`/`apikey` or each other
    pub fn from_specs<I>(specs: I) -> Result<Self, ToolError>
    where
        I: IntoIterator<Item = &'static ToolSpec>,
    {
        let mut registry = Self {
            specs: Vec::new(),
            index: HashMap::new(),
        };

        for spec in specs {
            Self::validate(spec)?;

            if registry.index.contains_key(spec.name) {
                return Err(ToolError::invalid_spec(format!(
                    "duplicate tool name '{}'",
                    spec.name
                )));
            }

            registry.index.insert(spec.name, registry.specs.len());
            registry.specs.push(spec);
        }

        Ok(registry)
    }

    fn validate(spec: &ToolSpec) -> Result<(), ToolError> {
        let mut seen: HashSet<&str> = HashSet::from([FUNCTION_PARAM, API_KEY_PARAM]);

        let names = spec
            .params
            .iter()
            .map(|p| p.name)
            .chain(spec.fixed_params.iter().map(|(name, _)| *name));

        for name in names {
            if !seen.insert(name) {
                return Err(ToolError::invalid_spec(format!(
                    "tool '{}' declares parameter '{}' more than once or shadows a reserved one",
                    spec.name, name
                )));
            }
        }

        Ok(())
    }

    /// Look up a tool by name.
    pub fn lookup(&self, name: &str) -> Result<&'static ToolSpec, ToolError> {
        self.index
            .get(name)
            .map(|&i| self.specs[i])
            .ok_or_else(|| ToolError::not_found(name))
    }

    /// Iterate specs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static ToolSpec> + '_ {
        self.specs.iter().copied()
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.iter().map(|s| s.name).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools(&self) -> Vec<Tool> {
        self.iter().map(ToolSpec::to_tool).collect()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
