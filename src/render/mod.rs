//! Rendering of quote responses
//!
//! A response becomes a [`QuoteView`]: the detected-properties summary, the
//! line-item table and, when the service priced several quantities, the
//! per-quantity table. Views print as aligned plain text or as HTML.

mod format;
mod view;

pub use format::{eur, plain_number};
pub use view::{render, Align, QuoteView, Summary, Table, PLACEHOLDER};
