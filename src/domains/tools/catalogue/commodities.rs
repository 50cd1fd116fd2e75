//! Commodity price tools.
//!
//! The provider returns these series as the whole response body
//! (`name`, `interval`, `unit`, `data`), so no success key is declared.

use crate::domains::tools::spec::{ParamSpec, ToolSpec};

const ENERGY_INTERVALS: &[&str] = &["daily", "weekly", "monthly"];
const GLOBAL_INTERVALS: &[&str] = &["monthly", "quarterly", "annual"];

const ENERGY_INTERVAL: ParamSpec = ParamSpec::optional_choice(
    "interval",
    ENERGY_INTERVALS,
    "Interval of the data: daily, weekly or monthly (provider default: monthly)",
);

const GLOBAL_INTERVAL: ParamSpec = ParamSpec::optional_choice(
    "interval",
    GLOBAL_INTERVALS,
    "Interval of the data: monthly, quarterly or annual (provider default: monthly)",
);

pub const SPECS: &[ToolSpec] = &[
    ToolSpec::whole_body(
        "get_crude_oil_wti_data",
        "Gets the daily, weekly, or monthly historical time series for the West Texas \
         Intermediate (WTI) crude oil prices from Alpha Vantage API.",
        "WTI",
        &[ENERGY_INTERVAL],
    ),
    ToolSpec::whole_body(
        "get_crude_oil_brent_data",
        "Gets the daily, weekly, or monthly historical time series for the Brent crude oil \
         prices from Alpha Vantage API.",
        "BRENT",
        &[ENERGY_INTERVAL],
    ),
    ToolSpec::whole_body(
        "get_natural_gas_data",
        "Gets the daily, weekly, or monthly historical time series for the Henry Hub natural \
         gas prices from Alpha Vantage API.",
        "NATURAL_GAS",
        &[ENERGY_INTERVAL],
    ),
    ToolSpec::whole_body(
        "get_copper_data",
        "Gets the monthly, quarterly and annual global price of copper from Alpha Vantage API.",
        "COPPER",
        &[GLOBAL_INTERVAL],
    ),
    ToolSpec::whole_body(
        "get_aluminum_data",
        "Gets the monthly, quarterly and annual global price of aluminum from Alpha Vantage API.",
        "ALUMINUM",
        &[GLOBAL_INTERVAL],
    ),
    ToolSpec::whole_body(
        "get_wheat_data",
        "Gets the monthly, quarterly and annual global price of wheat from Alpha Vantage API.",
        "WHEAT",
        &[GLOBAL_INTERVAL],
    ),
    ToolSpec::whole_body(
        "get_corn_data",
        "Gets the monthly, quarterly and annual global price of corn from Alpha Vantage API.",
        "CORN",
        &[GLOBAL_INTERVAL],
    ),
    ToolSpec::whole_body(
        "get_cotton_data",
        "Gets the monthly, quarterly and annual global price of cotton from Alpha Vantage API.",
        "COTTON",
        &[GLOBAL_INTERVAL],
    ),
    ToolSpec::whole_body(
        "get_sugar_data",
        "Gets the monthly, quarterly and annual global price of sugar from Alpha Vantage API.",
        "SUGAR",
        &[GLOBAL_INTERVAL],
    ),
    ToolSpec::whole_body(
        "get_coffee_data",
        "Gets the monthly, quarterly and annual global price of coffee from Alpha Vantage API.",
        "COFFEE",
        &[GLOBAL_INTERVAL],
    ),
    ToolSpec::whole_body(
        "get_all_commodities_data",
        "Gets the global price index of all commodities in monthly, quarterly, and annual \
         temporal dimensions.",
        "ALL_COMMODITIES",
        &[GLOBAL_INTERVAL],
    ),
];
