//! File operations for the collection document.
//!
//! Reads the whole document, writes the whole document. Writes go to a
//! sibling temp file first and are renamed into place, so a crash
//! mid-write never leaves a truncated document behind.

use std::fs;
use std::io;
use std::path::Path;

use super::document::RecadoDocument;
use super::store::StoreError;
use crate::config::RecoveryMode;

/// Read the collection document from disk.
///
/// A missing file yields an empty document in both modes; the document
/// is materialized on the first write. A corrupt or otherwise unreadable
/// file yields an empty document in `Lenient` mode and a storage error
/// in `Strict` mode.
pub fn read_document(path: &Path, mode: RecoveryMode) -> Result<RecadoDocument, StoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Ok(RecadoDocument::default());
        }
        Err(e) => {
            return match mode {
                RecoveryMode::Lenient => {
                    log::warn!(
                        "[STORE] Failed to read {}, recovering as empty collection: {}",
                        path.display(),
                        e
                    );
                    Ok(RecadoDocument::default())
                }
                RecoveryMode::Strict => Err(StoreError::Storage(format!(
                    "failed to read {}: {}",
                    path.display(),
                    e
                ))),
            };
        }
    };

    match serde_json::from_str(&raw) {
        Ok(doc) => Ok(doc),
        Err(e) => match mode {
            RecoveryMode::Lenient => {
                log::warn!(
                    "[STORE] Failed to parse {}, recovering as empty collection: {}",
                    path.display(),
                    e
                );
                Ok(RecadoDocument::default())
            }
            RecoveryMode::Strict => Err(StoreError::Storage(format!(
                "failed to parse {}: {}",
                path.display(),
                e
            ))),
        },
    }
}

/// Write the collection document to disk (creates parent directories as
/// needed). Write failures always surface, regardless of recovery mode.
pub fn write_document(path: &Path, doc: &RecadoDocument) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(doc)
        .map_err(|e| StoreError::Storage(format!("failed to serialize document: {}", e)))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| StoreError::Storage(format!("failed to create {}: {}", parent.display(), e)))?;
    }

    // Atomic replacement: never expose a partially written document.
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)
        .map_err(|e| StoreError::Storage(format!("failed to write {}: {}", tmp.display(), e)))?;
    fs::rename(&tmp, path)
        .map_err(|e| StoreError::Storage(format!("failed to replace {}: {}", path.display(), e)))?;

    Ok(())
}
