//! Equity quote tools.

use crate::domains::tools::spec::{ParamSpec, Projection, ToolSpec};

const SYMBOL: ParamSpec = ParamSpec::required("symbol", "Stock symbol (e.g.: AAPL, GOOGL, MSFT)");

pub const SPECS: &[ToolSpec] = &[ToolSpec {
    name: "get_current_price",
    description: "Gets the current price of a stock from Alpha Vantage API. \
                  Returns the latest 5-minute close with its timestamp.",
    function: "TIME_SERIES_INTRADAY",
    params: &[SYMBOL],
    fixed_params: &[("interval", "5min")],
    success_keys: &["Time Series (5min)"],
    projection: Projection::LatestQuote { field: "4. close" },
}];
