//! Configuration for the quote client and the PDF extractor

use crate::error::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Default base URL (local Netlify dev server)
pub const DEFAULT_BASE_URL: &str = "http://localhost:8888";

/// Default path of the quoting function
pub const DEFAULT_FUNCTION_PATH: &str = "/.netlify/functions/calc-quote";

/// Settings for talking to the quoting service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host of the deployment
    pub base_url: String,
    /// Path of the quoting function on that host
    pub function_path: String,
    /// Optional request timeout (default: none, transport defaults apply)
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            function_path: DEFAULT_FUNCTION_PATH.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Full URL the quote request is posted to
    pub fn endpoint(&self) -> Result<Url> {
        let base = Url::parse(&self.base_url).map_err(|e| Error::InvalidEndpoint {
            reason: format!("{}: {}", self.base_url, e),
        })?;
        if base.cannot_be_a_base() {
            return Err(Error::InvalidEndpoint {
                reason: format!("{} cannot be used as a base URL", self.base_url),
            });
        }
        base.join(&self.function_path)
            .map_err(|e| Error::InvalidEndpoint {
                reason: format!("{}: {}", self.function_path, e),
            })
    }
}

/// Settings for binding PDFium
#[derive(Debug, Clone, Default)]
pub struct ExtractorConfig {
    /// Directory holding the PDFium dynamic library, tried before the defaults
    pub library_dir: Option<PathBuf>,
    /// Password for encrypted PDFs
    pub password: Option<String>,
}

/// Full application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub extractor: ExtractorConfig,
}
