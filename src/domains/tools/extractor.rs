//! Response extractor.
//!
//! Maps a parsed provider body onto a [`ToolResult`]. Pure functions of the
//! body and the declared keys: no I/O, no retries.

use serde_json::{Value, json};

use super::result::ToolResult;
use super::spec::Projection;

/// Key the provider uses for hard errors (unknown symbol, bad function...).
pub const ERROR_KEY: &str = "Error Message";

/// Keys the provider uses for throttling notices, in priority order.
pub const THROTTLE_KEYS: &[&str] = &["Note", "Information"];

/// Classify a provider body.
///
/// Decision order, first match wins:
/// 1. `Error Message` present ⇒ [`ToolResult::ProviderError`]
/// 2. a throttling key present ⇒ [`ToolResult::RateLimited`]
/// 3. first of `success_keys` present ⇒ [`ToolResult::Success`] with its value
/// 4. `success_keys` empty and the body is a non-empty object ⇒ the whole body
/// 5. otherwise ⇒ [`ToolResult::UnrecognizedResponse`] with the body unchanged
pub fn classify(body: Value, success_keys: &[&str]) -> ToolResult {
    let Some(obj) = body.as_object() else {
        return ToolResult::UnrecognizedResponse { raw_body: body };
    };

    if let Some(message) = obj.get(ERROR_KEY) {
        return ToolResult::ProviderError {
            message: notice_text(message),
        };
    }

    if let Some(notice) = THROTTLE_KEYS.iter().find_map(|key| obj.get(*key)) {
        return ToolResult::RateLimited {
            notice: notice_text(notice),
        };
    }

    if success_keys.is_empty() {
        if obj.is_empty() {
            return ToolResult::UnrecognizedResponse { raw_body: body };
        }
        return ToolResult::Success { payload: body };
    }

    if let Some(payload) = success_keys.iter().find_map(|key| obj.get(*key)) {
        return ToolResult::Success {
            payload: payload.clone(),
        };
    }

    ToolResult::UnrecognizedResponse { raw_body: body }
}

/// Apply a spec's projection to a classified result.
///
/// Only successes are touched. `symbol` labels the latest quote; `raw_body`
/// is returned inside [`ToolResult::UnrecognizedResponse`] when the payload
/// cannot be projected.
pub fn apply_projection(
    result: ToolResult,
    projection: Projection,
    symbol: Option<&str>,
    raw_body: &Value,
) -> ToolResult {
    let (ToolResult::Success { payload }, Projection::LatestQuote { field }) =
        (&result, projection)
    else {
        return result;
    };

    match latest_entry(payload, field) {
        Some((updated, price)) => ToolResult::Success {
            payload: json!({
                "symbol": symbol,
                "price": price,
                "updated": updated,
            }),
        },
        None => ToolResult::UnrecognizedResponse {
            raw_body: raw_body.clone(),
        },
    }
}

/// Most recent `(timestamp, field)` of a time series keyed by timestamp.
///
/// Provider timestamps are `YYYY-MM-DD[ HH:MM:SS]`, so the lexicographic
/// maximum is the latest.
fn latest_entry<'a>(series: &'a Value, field: &str) -> Option<(&'a str, &'a Value)> {
    let (timestamp, entry) = series.as_object()?.iter().max_by(|a, b| a.0.cmp(b.0))?;
    Some((timestamp.as_str(), entry.get(field)?))
}

fn notice_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
