//! Extract-then-quote workflow driving a [`Session`]

use crate::app::Session;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::pdf::{ExtractedDocument, PdfTextExtractor, TextExtractor};
use crate::quote::{QuoteClient, QuoteParameters};
use crate::render::{render, QuoteView};
use crate::source::resolve_path_async;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Owns the session plus the collaborators each step needs
pub struct QuoteApp<E: TextExtractor = PdfTextExtractor> {
    session: Session,
    extractor: Arc<E>,
    client: QuoteClient,
}

impl QuoteApp<PdfTextExtractor> {
    /// PDFium extractor and HTTP client built from configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let extractor = PdfTextExtractor::new(config.extractor.clone());
        let client = QuoteClient::new(&config.client)?;
        Ok(Self::new(extractor, client))
    }
}

impl<E: TextExtractor> QuoteApp<E> {
    pub fn new(extractor: E, client: QuoteClient) -> Self {
        Self {
            session: Session::new(),
            extractor: Arc::new(extractor),
            client,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn status(&self) -> &str {
        self.session.status()
    }

    pub fn can_analyze(&self) -> bool {
        self.session.can_analyze()
    }

    pub fn can_calculate(&self) -> bool {
        self.session.can_calculate()
    }

    pub fn select_file(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        self.session.select_file(path)
    }

    /// Extract the selected file and keep the result in the session
    pub async fn analyze(&mut self) -> Result<&ExtractedDocument> {
        let path = self.session.begin_extraction()?;
        let mut guard = InFlight(&mut self.session);
        let result = extract_file(&self.extractor, &path).await;
        guard.0.complete_extraction(result)?;
        drop(guard);
        self.session.document().ok_or(Error::NotExtracted)
    }

    /// Request a quote for the extracted text and render it
    pub async fn calculate(&mut self, params: &QuoteParameters) -> Result<QuoteView> {
        if let Err(err) = params.validate() {
            return Err(self.session.reject(err));
        }

        let text = self.session.begin_quote()?;
        let mut guard = InFlight(&mut self.session);
        let result = self.client.request_quote(&text, params).await;
        let quote = guard.0.complete_quote(result)?;
        Ok(render(quote))
    }
}

/// Aborts the session step if the future driving it is dropped mid-flight
struct InFlight<'a>(&'a mut Session);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.0.phase().is_busy() {
            self.0.abort();
        }
    }
}

async fn extract_file<E: TextExtractor>(
    extractor: &Arc<E>,
    path: &Path,
) -> Result<ExtractedDocument> {
    let resolved = resolve_path_async(path).await?;
    let extractor = Arc::clone(extractor);

    // Move CPU-heavy PDF work to blocking thread pool
    tokio::task::spawn_blocking(move || extractor.extract(&resolved.data, &resolved.source_name))
        .await
        .map_err(|e| Error::Pdfium {
            reason: format!("Task join error: {}", e),
        })?
}
