//! The [`AnimalStore`] trait defining the persistence interface.

use async_trait::async_trait;
use zoo_types::{Animal, AnimalDraft, AnimalId};

use crate::error::StoreResult;

/// Storage backend for animals.
///
/// Implementations must be thread-safe (`Send + Sync`); a single instance is
/// shared by every in-flight request. Each method is one independent store
/// statement with no application-level locking around it.
#[async_trait]
pub trait AnimalStore: Send + Sync {
    /// Insert a new animal and return its store-assigned id.
    ///
    /// Returns `Conflict` if an animal with the same name exists.
    async fn insert(&self, draft: &AnimalDraft) -> StoreResult<AnimalId>;

    /// Return every animal. Order is storage-defined and may change between
    /// calls.
    async fn fetch_all(&self) -> StoreResult<Vec<Animal>>;

    /// Return the animal with the given id, or `NotFound`.
    async fn fetch_by_id(&self, id: AnimalId) -> StoreResult<Animal>;

    /// Replace every field of the animal with the given id.
    ///
    /// Returns `NotFound` when zero rows were affected. Any failed write,
    /// including a name already held by another animal, is `Storage`;
    /// `Conflict` is reserved for `insert`.
    async fn update(&self, id: AnimalId, draft: &AnimalDraft) -> StoreResult<()>;

    /// Remove the animal with the given id.
    ///
    /// Returns `NotFound` when zero rows were affected.
    async fn delete(&self, id: AnimalId) -> StoreResult<()>;

    /// Check that the store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
