//! Source resolution

pub mod resolver;

pub use resolver::{has_pdf_header, resolve_path, resolve_path_async, ResolvedPdf};
