//! PDF processing layer
//!
//! This module turns PDF bytes into plain text using PDFium.

mod extractor;

pub use extractor::{
    collect_text, ExtractedDocument, PageTextSource, PdfTextExtractor, TextExtractor,
    PREVIEW_CHARS,
};
