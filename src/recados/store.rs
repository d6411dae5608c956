//! RecadoStore — CRUD over the file-backed collection document.
//!
//! Every operation is one read-modify-write cycle against the document
//! file: reload the authoritative state, apply a single logical change,
//! persist the whole document. A mutex held for the full cycle
//! serializes writers within the process, so two concurrent mutations
//! cannot overwrite each other's changes. Writers in other processes
//! touching the same file remain unsynchronized.

use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

use super::document::Recado;
use super::file_ops;
use crate::config::RecoveryMode;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("recado {0} not found")]
    NotFound(i64),
    #[error("storage failure: {0}")]
    Storage(String),
}

pub struct RecadoStore {
    data_file: PathBuf,
    recovery_mode: RecoveryMode,
    // Guards the whole read-modify-write cycle of each operation.
    lock: Mutex<()>,
}

impl RecadoStore {
    pub fn new(data_file: PathBuf, recovery_mode: RecoveryMode) -> Self {
        Self {
            data_file,
            recovery_mode,
            lock: Mutex::new(()),
        }
    }

    /// List all recados in insertion order.
    pub fn list(&self) -> Result<Vec<Recado>, StoreError> {
        let _guard = self.lock.lock().unwrap();
        let doc = file_ops::read_document(&self.data_file, self.recovery_mode)?;
        Ok(doc.recados)
    }

    /// Create a recado from `text`, trimmed. Rejects text that is empty
    /// after trimming. Ids are assigned max-plus-one.
    pub fn create(&self, text: &str) -> Result<Recado, StoreError> {
        let text = validate_text(text)?;

        let _guard = self.lock.lock().unwrap();
        let mut doc = file_ops::read_document(&self.data_file, self.recovery_mode)?;

        let recado = Recado {
            id: doc.next_id(),
            text,
        };
        doc.recados.push(recado.clone());
        file_ops::write_document(&self.data_file, &doc)?;

        log::info!("[STORE] Created recado {}", recado.id);
        Ok(recado)
    }

    /// Replace the text of the recado with the given id.
    pub fn update(&self, id: i64, text: &str) -> Result<Recado, StoreError> {
        let text = validate_text(text)?;

        let _guard = self.lock.lock().unwrap();
        let mut doc = file_ops::read_document(&self.data_file, self.recovery_mode)?;

        let recado = match doc.find_mut(id) {
            Some(r) => {
                r.text = text;
                r.clone()
            }
            None => return Err(StoreError::NotFound(id)),
        };
        file_ops::write_document(&self.data_file, &doc)?;

        log::info!("[STORE] Updated recado {}", id);
        Ok(recado)
    }

    /// Remove the recado with the given id.
    pub fn delete(&self, id: i64) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap();
        let mut doc = file_ops::read_document(&self.data_file, self.recovery_mode)?;

        let before = doc.recados.len();
        doc.recados.retain(|r| r.id != id);
        if doc.recados.len() == before {
            return Err(StoreError::NotFound(id));
        }
        file_ops::write_document(&self.data_file, &doc)?;

        log::info!("[STORE] Deleted recado {}", id);
        Ok(())
    }
}

fn validate_text(text: &str) -> Result<String, StoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidInput("Text is required.".to_string()));
    }
    Ok(trimmed.to_string())
}
