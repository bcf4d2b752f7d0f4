//! Plain text extraction on top of PDFium

use crate::config::ExtractorConfig;
use crate::error::{Error, Result};
use crate::source::has_pdf_header;
use pdfium_render::prelude::*;

/// Number of characters shown in the text preview
pub const PREVIEW_CHARS: usize = 4000;

/// Text of the most recently extracted PDF
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    text: String,
    page_count: u32,
    source_name: String,
}

impl ExtractedDocument {
    pub fn new(text: String, page_count: u32, source_name: impl Into<String>) -> Self {
        Self {
            text,
            page_count,
            source_name: source_name.into(),
        }
    }

    /// Full extracted text, one line per page
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// First [`PREVIEW_CHARS`] characters, for display only
    pub fn preview(&self) -> &str {
        match self.text.char_indices().nth(PREVIEW_CHARS) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }
}

/// Anything that can hand out the text fragments of its pages
pub trait PageTextSource {
    /// Number of pages
    fn page_count(&self) -> u32;

    /// Text fragments of a page (1-indexed), in content order
    fn page_fragments(&self, page: u32) -> Result<Vec<String>>;
}

/// Join a document's pages into a single string.
///
/// Fragments of a page are joined with one space and every page ends with a
/// newline; the concatenation is trimmed.
pub fn collect_text<S: PageTextSource + ?Sized>(source: &S) -> Result<String> {
    let mut text = String::new();

    for page in 1..=source.page_count() {
        let fragments = source.page_fragments(page)?;
        text.push_str(&fragments.join(" "));
        text.push('\n');
    }

    Ok(text.trim().to_string())
}

impl PageTextSource for PdfDocument<'_> {
    fn page_count(&self) -> u32 {
        self.pages().len() as u32
    }

    fn page_fragments(&self, page: u32) -> Result<Vec<String>> {
        let total = PageTextSource::page_count(self);
        if page < 1 || page > total {
            return Err(Error::Pdfium {
                reason: format!("Page {} out of bounds (total: {})", page, total),
            });
        }
        let index = (page - 1).try_into().map_err(|_| Error::Pdfium {
            reason: format!("Page {} is not addressable", page),
        })?;

        let pdf_page = self.pages().get(index).map_err(|e| Error::Pdfium {
            reason: format!("Failed to get page {}: {}", page, e),
        })?;

        let page_text = pdf_page.text().map_err(|e| Error::Pdfium {
            reason: format!("Failed to read text of page {}: {}", page, e),
        })?;

        Ok(page_text
            .segments()
            .iter()
            .map(|segment| segment.text())
            .collect())
    }
}

/// Turns PDF bytes into an [`ExtractedDocument`]
pub trait TextExtractor: Send + Sync + 'static {
    fn extract(&self, data: &[u8], source_name: &str) -> Result<ExtractedDocument>;
}

/// PDFium-backed extractor
#[derive(Debug, Clone, Default)]
pub struct PdfTextExtractor {
    config: ExtractorConfig,
}

impl PdfTextExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Bind PDFium (creates a new instance each time - PDFium is not thread-safe)
    fn create_pdfium(&self) -> Result<Pdfium> {
        if let Some(dir) = &self.config.library_dir {
            let dir = dir.to_string_lossy();
            match Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&*dir)) {
                Ok(bindings) => return Ok(Pdfium::new(bindings)),
                Err(e) => tracing::warn!("PDFium not usable from {}: {}", dir, e),
            }
        }

        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| {
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                    "/opt/pdfium/lib",
                ))
            })
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| Error::Pdfium {
                reason: format!("Failed to initialize PDFium: {}", e),
            })?;

        Ok(Pdfium::new(bindings))
    }

    fn map_pdfium_error(&self, err: PdfiumError) -> Error {
        match err {
            PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError) => {
                if self.config.password.is_some() {
                    Error::IncorrectPassword
                } else {
                    Error::PasswordRequired
                }
            }
            _ => Error::Pdfium {
                reason: format!("{}", err),
            },
        }
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, data: &[u8], source_name: &str) -> Result<ExtractedDocument> {
        if !has_pdf_header(data) {
            return Err(Error::InvalidPdf {
                reason: "Not a valid PDF file".to_string(),
            });
        }

        let pdfium = self.create_pdfium()?;
        let document = pdfium
            .load_pdf_from_byte_slice(data, self.config.password.as_deref())
            .map_err(|e| self.map_pdfium_error(e))?;

        let page_count = PageTextSource::page_count(&document);
        let text = collect_text(&document)?;

        tracing::debug!(
            source = source_name,
            pages = page_count,
            chars = text.len(),
            "Extracted PDF text"
        );

        Ok(ExtractedDocument::new(text, page_count, source_name))
    }
}
