//! Digital currency tools.

use crate::domains::tools::spec::{ParamSpec, Projection, ToolSpec};

const SYMBOL: ParamSpec = ParamSpec::required("symbol", "Digital currency (e.g.: BTC, ETH)");
const MARKET: ParamSpec = ParamSpec::required("market", "Exchange market currency (e.g.: EUR, USD)");

pub const SPECS: &[ToolSpec] = &[
    ToolSpec {
        name: "get_digital_currency_daily_data",
        description: "Gets the daily historical time series for a digital currency traded on a \
                      specific market from Alpha Vantage API. Refreshed daily at midnight (UTC).",
        function: "DIGITAL_CURRENCY_DAILY",
        params: &[SYMBOL, MARKET],
        fixed_params: &[],
        success_keys: &["Time Series (Digital Currency Daily)"],
        projection: Projection::Payload,
    },
    ToolSpec {
        name: "get_digital_currency_weekly_data",
        description: "Gets the weekly historical time series for a digital currency traded on a \
                      specific market from Alpha Vantage API. Refreshed daily at midnight (UTC).",
        function: "DIGITAL_CURRENCY_WEEKLY",
        params: &[SYMBOL, MARKET],
        fixed_params: &[],
        success_keys: &["Time Series (Digital Currency Weekly)"],
        projection: Projection::Payload,
    },
    ToolSpec {
        name: "get_digital_currency_monthly_data",
        description: "Gets the monthly historical time series for a digital currency traded on a \
                      specific market from Alpha Vantage API. Refreshed daily at midnight (UTC).",
        function: "DIGITAL_CURRENCY_MONTHLY",
        params: &[SYMBOL, MARKET],
        fixed_params: &[],
        success_keys: &["Time Series (Digital Currency Monthly)"],
        projection: Projection::Payload,
    },
];
