//! pdf-quote library
//!
//! This crate extracts text from a PDF and asks a remote estimation service
//! for a price quote:
//! - `pdf`: PDF text extraction through PDFium
//! - `quote`: request parameters, the HTTP client and the response schema
//! - `render`: summary line and tables for a quote response
//! - `app`: session state machine and the extract-then-quote workflow

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod pdf;
pub mod quote;
pub mod render;
pub mod source;

pub use app::{Phase, QuoteApp, Session};
pub use config::{AppConfig, ClientConfig, ExtractorConfig};
pub use error::{Error, ErrorCategory, Result};
pub use pdf::{ExtractedDocument, PdfTextExtractor, TextExtractor};
pub use quote::{parse_quantities, QuoteClient, QuoteParameters, QuoteResponse};
pub use render::{eur, render, QuoteView};
