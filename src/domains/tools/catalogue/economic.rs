//! US economic indicator tools.

use crate::domains::tools::spec::{ParamSpec, ToolSpec};

const RATE_INTERVALS: &[&str] = &["daily", "weekly", "monthly"];
const GDP_INTERVALS: &[&str] = &["quarterly", "annual"];
const CPI_INTERVALS: &[&str] = &["monthly", "semiannual"];
const MATURITIES: &[&str] = &["3month", "2year", "5year", "7year", "10year", "30year"];

const RATE_INTERVAL: ParamSpec = ParamSpec::optional_choice(
    "interval",
    RATE_INTERVALS,
    "Interval of the data: daily, weekly or monthly (provider default: monthly)",
);

const GDP_INTERVAL: ParamSpec = ParamSpec::optional_choice(
    "interval",
    GDP_INTERVALS,
    "Interval of the data: quarterly or annual (provider default: annual)",
);

const CPI_INTERVAL: ParamSpec = ParamSpec::optional_choice(
    "interval",
    CPI_INTERVALS,
    "Interval of the data: monthly or semiannual (provider default: monthly)",
);

const MATURITY: ParamSpec = ParamSpec::optional_choice(
    "maturity",
    MATURITIES,
    "Maturity of the treasury yield: 3month, 2year, 5year, 7year, 10year or 30year \
     (provider default: 10year)",
);

pub const SPECS: &[ToolSpec] = &[
    ToolSpec::whole_body(
        "get_real_gdp_data",
        "Gets the real GDP data of the US economy in quarterly and annual temporal dimensions.",
        "REAL_GDP",
        &[GDP_INTERVAL],
    ),
    ToolSpec::whole_body(
        "get_real_gdp_per_capita_data",
        "Gets the quarterly real GDP per capita data of the US economy.",
        "REAL_GDP_PER_CAPITA",
        &[],
    ),
    ToolSpec::whole_body(
        "get_treasury_yield",
        "Gets the US Treasury yield data for a specific maturity and interval.",
        "TREASURY_YIELD",
        &[RATE_INTERVAL, MATURITY],
    ),
    ToolSpec::whole_body(
        "get_federal_funds_rate",
        "Gets the Federal Funds Rate (interest rate) in the US for a specific interval.",
        "FEDERAL_FUNDS_RATE",
        &[RATE_INTERVAL],
    ),
    ToolSpec::whole_body(
        "get_cpi_data",
        "Gets the Consumer Price Index (CPI) data in the US for a specific interval.",
        "CPI",
        &[CPI_INTERVAL],
    ),
    ToolSpec::whole_body(
        "get_inflation_data",
        "Gets the annual inflation rate (consumer prices) in the US.",
        "INFLATION",
        &[],
    ),
    ToolSpec::whole_body(
        "get_retail_sales",
        "Gets the monthly Advance Retail Sales: Retail Trade data in the US.",
        "RETAIL_SALES",
        &[],
    ),
    ToolSpec::whole_body(
        "get_durables",
        "Gets the monthly manufacturers' new orders of durable goods in the US.",
        "DURABLES",
        &[],
    ),
    ToolSpec::whole_body(
        "get_monthly_unemployment_rate",
        "Gets the monthly unemployment rate in the US.",
        "UNEMPLOYMENT",
        &[],
    ),
    ToolSpec::whole_body(
        "get_nonfarm_payrolls",
        "Gets the monthly US All Employees: Total Nonfarm (commonly known as Total Nonfarm \
         Payroll), a measure of the number of U.S. workers in the economy that excludes \
         proprietors, private household employees, unpaid volunteers, farm employees, and the \
         unincorporated self-employed.",
        "NONFARM_PAYROLL",
        &[],
    ),
];
