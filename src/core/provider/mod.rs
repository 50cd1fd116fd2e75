//! Provider client for the Alpha Vantage query endpoint.
//!
//! The client performs exactly one HTTP GET per request and reports either the
//! parsed JSON body or a transport-level [`FetchError`]. Interpreting the body
//! is the response extractor's job.

mod client;
mod error;

pub use client::{
    API_KEY_PARAM, FUNCTION_PARAM, HttpProviderClient, ProviderClient, ProviderRequest,
    ProviderResponse,
};
pub use error::FetchError;
