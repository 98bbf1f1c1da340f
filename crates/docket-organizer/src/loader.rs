//! Reading documents from disk

use docket_domain::{Document, ErrorKind, ValidationError};
use docket_extractor::Extractor;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Read and extract one document
///
/// Unreadable or non-UTF-8 files come back as a `ReadFailure` finding so the
/// caller can record it and carry on with the rest of the batch.
pub fn load_document(root: &Path, rel_path: &Path, extractor: &Extractor) -> Result<Document, ValidationError> {
    let read = fs::read(root.join(rel_path))
        .map_err(|e| e.to_string())
        .and_then(|bytes| String::from_utf8(bytes).map_err(|e| format!("not valid UTF-8: {}", e)));

    match read {
        Ok(raw) => Ok(extractor.extract_document(rel_path, raw)),
        Err(cause) => {
            warn!("skipping {}: {}", rel_path.display(), cause);
            Err(ValidationError::new(rel_path, ErrorKind::ReadFailure { cause }))
        }
    }
}
