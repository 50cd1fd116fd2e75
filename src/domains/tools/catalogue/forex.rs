//! Foreign exchange tools.

use crate::domains::tools::spec::{ParamSpec, Projection, ToolSpec};

const FROM_SYMBOL: ParamSpec = ParamSpec::required("from_symbol", "Source currency (e.g.: EUR)");
const FROM_CURRENCY: ParamSpec =
    ParamSpec::required("from_currency", "Source currency (e.g.: USD, EUR, BTC)");
const TO_CURRENCY: ParamSpec = ParamSpec::required("to_currency", "Target currency (e.g.: JPY, USD)");
const TO_SYMBOL: ParamSpec = ParamSpec::required("to_symbol", "Target currency (e.g.: USD)");

pub const SPECS: &[ToolSpec] = &[
    ToolSpec {
        name: "get_currency_exchange_rate",
        description: "Gets the current exchange rate between two currencies (physical or \
                      digital) from Alpha Vantage API.",
        function: "CURRENCY_EXCHANGE_RATE",
        params: &[FROM_CURRENCY, TO_CURRENCY],
        fixed_params: &[],
        success_keys: &["Realtime Currency Exchange Rate"],
        projection: Projection::Payload,
    },
    ToolSpec {
        name: "get_fx_daily_data",
        description: "Gets the daily time series (timestamp, open, high, low, close) of the FX \
                      currency pair from Alpha Vantage API.",
        function: "FX_DAILY",
        params: &[FROM_SYMBOL, TO_SYMBOL],
        fixed_params: &[],
        success_keys: &["Time Series FX (Daily)"],
        projection: Projection::Payload,
    },
    ToolSpec {
        name: "get_fx_weekly_data",
        description: "Gets the weekly time series (timestamp, open, high, low, close) of the FX \
                      currency pair from Alpha Vantage API.",
        function: "FX_WEEKLY",
        params: &[FROM_SYMBOL, TO_SYMBOL],
        fixed_params: &[],
        success_keys: &["Time Series FX (Weekly)"],
        projection: Projection::Payload,
    },
    ToolSpec {
        name: "get_fx_monthly_data",
        description: "Gets the monthly time series (timestamp, open, high, low, close) of the FX \
                      currency pair from Alpha Vantage API.",
        function: "FX_MONTHLY",
        params: &[FROM_SYMBOL, TO_SYMBOL],
        fixed_params: &[],
        success_keys: &["Time Series FX (Monthly)"],
        projection: Projection::Payload,
    },
];
