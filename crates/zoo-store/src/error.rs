use zoo_types::AnimalId;

/// Errors from animal store operations.
///
/// This is the complete set of outcomes a store may report. Backends classify
/// their own driver errors into these kinds before returning.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An animal with this name already exists (uniqueness violation).
    #[error("animal already exists: {name}")]
    Conflict { name: String },

    /// No row matched the id.
    #[error("animal not found: {0}")]
    NotFound(AnimalId),

    /// Any other store failure: connectivity loss, query error, bad row.
    #[error("storage error: {0}")]
    Storage(String),
}

impl StoreError {
    /// Returns `true` for the uniqueness-violation kind.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Returns `true` for the zero-rows-matched kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
