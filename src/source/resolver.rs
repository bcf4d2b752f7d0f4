//! Source resolution for PDF data

use crate::error::{Error, Result};
use std::path::Path;

/// Resolved PDF data
pub struct ResolvedPdf {
    pub data: Vec<u8>,
    pub source_name: String,
}

/// Check the `%PDF` magic at the start of the data
pub fn has_pdf_header(data: &[u8]) -> bool {
    data.len() >= 4 && &data[0..4] == b"%PDF"
}

/// Resolve a file path to PDF data
pub fn resolve_path<P: AsRef<Path>>(path: P) -> Result<ResolvedPdf> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::PdfNotFound {
            path: path.display().to_string(),
        });
    }

    let data = std::fs::read(path).map_err(Error::Io)?;

    if !has_pdf_header(&data) {
        return Err(Error::InvalidPdf {
            reason: "Not a valid PDF file".to_string(),
        });
    }

    let source_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(ResolvedPdf { data, source_name })
}

/// Async variant of [`resolve_path`]
pub async fn resolve_path_async<P: AsRef<Path>>(path: P) -> Result<ResolvedPdf> {
    let path = path.as_ref().to_path_buf();
    tokio::task::spawn_blocking(move || resolve_path(&path))
        .await
        .map_err(|e| Error::Io(std::io::Error::other(format!("Task join error: {}", e))))?
}
