//! Error types for pdf-quote

use thiserror::Error;

/// Result type alias for pdf-quote
pub type Result<T> = std::result::Result<T, Error>;

/// Status shown for any failure while extracting text from the PDF
pub const EXTRACTION_FAILED_MESSAGE: &str = "Errore estrazione PDF";

/// Status shown for any failure while requesting the quote
pub const QUOTE_FAILED_MESSAGE: &str = "Errore calcolo (controlla OPENAI_API_KEY e redeploy)";

/// Error types for pdf-quote
#[derive(Error, Debug)]
pub enum Error {
    /// PDF file not found
    #[error("PDF not found: {path}")]
    PdfNotFound { path: String },

    /// Invalid PDF file
    #[error("Invalid PDF file: {reason}")]
    InvalidPdf { reason: String },

    /// PDF is password protected and no password was provided
    #[error("PDF is password protected")]
    PasswordRequired,

    /// Incorrect password provided
    #[error("Incorrect password")]
    IncorrectPassword,

    /// PDFium error
    #[error("PDFium error: {reason}")]
    Pdfium { reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The quote request could not be sent or its response not received
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// The quoting service answered with a non-success status
    #[error("Quote request failed with HTTP {status}: {body}")]
    QuoteStatus { status: u16, body: String },

    /// The quoting service answered 2xx with a body that is not a quote
    #[error("Invalid quote response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// Analyze was triggered before any file was chosen
    #[error("No PDF file selected")]
    NoFileSelected,

    /// Calculate was triggered before a successful extraction
    #[error("No extracted text available")]
    NotExtracted,

    /// An extraction or quote request is already in flight
    #[error("Another operation is in progress ({phase})")]
    Busy { phase: String },

    /// Quote parameters out of range
    #[error("Invalid quote parameters: {reason}")]
    InvalidParameters { reason: String },

    /// Quote endpoint could not be built from the configuration
    #[error("Invalid quote endpoint: {reason}")]
    InvalidEndpoint { reason: String },
}

/// Coarse failure taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed or unreadable PDF
    Extraction,
    /// Request could not be sent or received
    Network,
    /// Remote returned a non-success status or an unusable body
    Quote,
    /// Action triggered out of order or with bad input
    Usage,
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::PdfNotFound { .. }
            | Error::InvalidPdf { .. }
            | Error::PasswordRequired
            | Error::IncorrectPassword
            | Error::Pdfium { .. }
            | Error::Io(_) => ErrorCategory::Extraction,
            Error::HttpRequest(_) => ErrorCategory::Network,
            Error::QuoteStatus { .. } | Error::InvalidResponse(_) => ErrorCategory::Quote,
            Error::NoFileSelected
            | Error::NotExtracted
            | Error::Busy { .. }
            | Error::InvalidParameters { .. }
            | Error::InvalidEndpoint { .. } => ErrorCategory::Usage,
        }
    }

    /// Return the short status string shown to the user.
    /// Network and quote failures share one message; the full error
    /// should be logged via tracing before calling this.
    pub fn client_message(&self) -> String {
        match self.category() {
            ErrorCategory::Extraction => EXTRACTION_FAILED_MESSAGE.to_string(),
            ErrorCategory::Network | ErrorCategory::Quote => QUOTE_FAILED_MESSAGE.to_string(),
            ErrorCategory::Usage => match self {
                Error::NoFileSelected => "Seleziona un PDF.".to_string(),
                Error::NotExtracted => "Prima analizza il PDF.".to_string(),
                Error::Busy { .. } => "Operazione in corso…".to_string(),
                Error::InvalidParameters { reason } => format!("Parametri non validi: {}", reason),
                _ => "Endpoint non valido".to_string(),
            },
        }
    }
}
