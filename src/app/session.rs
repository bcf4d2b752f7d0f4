//! Session state: which file is selected, what has been extracted, what is running

use crate::error::{Error, Result, EXTRACTION_FAILED_MESSAGE, QUOTE_FAILED_MESSAGE};
use crate::pdf::ExtractedDocument;
use crate::quote::QuoteResponse;
use std::fmt;
use std::path::{Path, PathBuf};

/// Status shown when an in-flight step is dropped before it finishes
pub const CANCELLED_MESSAGE: &str = "Operazione annullata";

/// Where the session is in the extract-then-quote flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FileSelected,
    Extracting,
    Extracted,
    Quoting,
    Done,
    Failed,
}

impl Phase {
    /// Extraction or quote request in flight
    pub fn is_busy(self) -> bool {
        matches!(self, Phase::Extracting | Phase::Quoting)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::FileSelected => "file selected",
            Phase::Extracting => "extracting",
            Phase::Extracted => "extracted",
            Phase::Quoting => "quoting",
            Phase::Done => "done",
            Phase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// State of one user session.
///
/// Every change goes through a transition method; triggers that arrive while
/// an extraction or quote is in flight are rejected with [`Error::Busy`].
#[derive(Debug)]
pub struct Session {
    phase: Phase,
    file: Option<PathBuf>,
    document: Option<ExtractedDocument>,
    quote: Option<QuoteResponse>,
    status: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            file: None,
            document: None,
            quote: None,
            status: String::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// User-facing status line
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn document(&self) -> Option<&ExtractedDocument> {
        self.document.as_ref()
    }

    pub fn quote(&self) -> Option<&QuoteResponse> {
        self.quote.as_ref()
    }

    pub fn can_analyze(&self) -> bool {
        self.file.is_some() && !self.phase.is_busy()
    }

    pub fn can_calculate(&self) -> bool {
        self.document.as_ref().is_some_and(|d| !d.is_empty()) && !self.phase.is_busy()
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.phase.is_busy() {
            return Err(Error::Busy {
                phase: self.phase.to_string(),
            });
        }
        Ok(())
    }

    fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        if !self.status.is_empty() {
            tracing::info!(phase = %self.phase, "{}", self.status);
        }
    }

    /// Record a rejected trigger in the status line and hand the error back
    pub fn reject(&mut self, err: Error) -> Error {
        tracing::warn!("Rejected in phase {}: {}", self.phase, err);
        self.set_status(err.client_message());
        err
    }

    /// A new file was chosen; any previous document is dropped
    pub fn select_file(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        self.ensure_idle()?;
        self.file = Some(path.into());
        self.document = None;
        self.quote = None;
        self.phase = Phase::FileSelected;
        self.set_status("");
        Ok(())
    }

    /// Start extracting the selected file, returning its path
    pub fn begin_extraction(&mut self) -> Result<PathBuf> {
        self.ensure_idle()?;
        let Some(file) = self.file.clone() else {
            return Err(self.reject(Error::NoFileSelected));
        };
        self.phase = Phase::Extracting;
        self.set_status("Estrazione testo dal PDF…");
        Ok(file)
    }

    pub fn complete_extraction(&mut self, result: Result<ExtractedDocument>) -> Result<()> {
        if self.phase != Phase::Extracting {
            return Err(Error::Busy {
                phase: self.phase.to_string(),
            });
        }
        match result {
            Ok(document) => {
                self.document = Some(document);
                self.phase = Phase::Extracted;
                self.set_status("Testo estratto ✓");
                Ok(())
            }
            Err(err) => {
                tracing::error!("PDF extraction failed: {}", err);
                self.phase = Phase::Failed;
                self.set_status(EXTRACTION_FAILED_MESSAGE);
                Err(err)
            }
        }
    }

    /// Start a quote request, returning the text to send
    pub fn begin_quote(&mut self) -> Result<String> {
        self.ensure_idle()?;
        let text = self
            .document
            .as_ref()
            .filter(|d| !d.is_empty())
            .map(|d| d.text().to_string());
        let Some(text) = text else {
            return Err(self.reject(Error::NotExtracted));
        };
        self.phase = Phase::Quoting;
        self.set_status("Chiedo all'AI…");
        Ok(text)
    }

    pub fn complete_quote(&mut self, result: Result<QuoteResponse>) -> Result<&QuoteResponse> {
        if self.phase != Phase::Quoting {
            return Err(Error::Busy {
                phase: self.phase.to_string(),
            });
        }
        match result {
            Ok(quote) => {
                self.phase = Phase::Done;
                self.set_status("Fatto ✓");
                Ok(self.quote.insert(quote))
            }
            Err(err) => {
                tracing::error!("Quote request failed: {}", err);
                self.quote = None;
                self.phase = Phase::Failed;
                self.set_status(QUOTE_FAILED_MESSAGE);
                Err(err)
            }
        }
    }

    /// Return an interrupted extraction or quote to a retryable state.
    ///
    /// No-op unless a step is in flight. The document survives an aborted
    /// quote; a partial extraction leaves nothing behind.
    pub fn abort(&mut self) {
        if !self.phase.is_busy() {
            return;
        }
        tracing::warn!("Operation cancelled while {}", self.phase);
        if self.phase == Phase::Quoting {
            self.quote = None;
        }
        self.phase = Phase::Failed;
        self.set_status(CANCELLED_MESSAGE);
    }
}
