//! The persisted collection document and its records.

use serde::{Deserialize, Serialize};

/// A single recado: a short text record with a unique integer id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recado {
    pub id: i64,
    pub text: String,
}

/// The on-disk collection document. Serializes as
/// `{"recados": [{"id": 1, "text": "hello"}]}`.
///
/// Order of the sequence is insertion order; ids are pairwise distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecadoDocument {
    #[serde(default)]
    pub recados: Vec<Recado>,
}

impl RecadoDocument {
    pub fn find_mut(&mut self, id: i64) -> Option<&mut Recado> {
        self.recados.iter_mut().find(|r| r.id == id)
    }

    /// Next id under the max-plus-one policy: 1 for an empty collection,
    /// otherwise one past the largest existing id. Never collides with an
    /// id still present in the document, including externally-edited ones.
    pub fn next_id(&self) -> i64 {
        self.recados.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }
}
