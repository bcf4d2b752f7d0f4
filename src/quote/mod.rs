//! Quote request and response handling

mod client;
mod params;
mod response;

pub use client::QuoteClient;
pub use params::{parse_quantities, QuoteParameters, DEFAULT_HOURLY_RATE};
pub use response::{DetectedProperties, LineItem, QuantityPrice, QuoteMeta, QuoteResponse};
