//! In-memory animal store for testing and ephemeral use.
//!
//! [`InMemoryAnimalStore`] keeps all rows in a `BTreeMap` behind a `RwLock`
//! and reproduces the PostgreSQL store's observable contract: a serial id
//! counter, name uniqueness, `VARCHAR(50)` column limits, and affected-row
//! absence detection.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use zoo_types::{Animal, AnimalDraft, AnimalId};

use crate::error::{StoreError, StoreResult};
use crate::schema::MAX_TEXT_LEN;
use crate::traits::AnimalStore;

/// Reject values the `VARCHAR(50)` columns would refuse.
fn check_lengths(draft: &AnimalDraft) -> StoreResult<()> {
    for (column, value) in [("name", &draft.name), ("class", &draft.class)] {
        if value.chars().count() > MAX_TEXT_LEN {
            return Err(StoreError::Storage(format!(
                "value too long for column {column} (max {MAX_TEXT_LEN})"
            )));
        }
    }
    Ok(())
}

#[derive(Debug)]
struct Table {
    next_id: i32,
    rows: BTreeMap<AnimalId, Animal>,
}

impl Table {
    fn name_taken(&self, name: &str, except: Option<AnimalId>) -> bool {
        self.rows
            .values()
            .any(|row| row.name == name && Some(row.id) != except)
    }
}

/// An in-memory implementation of [`AnimalStore`].
///
/// Ids start at 1 and are never reused, like a `SERIAL` column. Data is lost
/// when the store is dropped.
#[derive(Debug)]
pub struct InMemoryAnimalStore {
    table: RwLock<Table>,
}

impl InMemoryAnimalStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    /// Number of rows currently stored.
    pub fn len(&self) -> StoreResult<usize> {
        self.read().map(|t| t.rows.len())
    }

    /// Returns `true` if the store holds no rows.
    pub fn is_empty(&self) -> StoreResult<bool> {
        self.len().map(|n| n == 0)
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Table>> {
        self.table
            .read()
            .map_err(|e| StoreError::Storage(format!("lock poisoned: {e}")))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Table>> {
        self.table
            .write()
            .map_err(|e| StoreError::Storage(format!("lock poisoned: {e}")))
    }
}

impl Default for InMemoryAnimalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnimalStore for InMemoryAnimalStore {
    async fn insert(&self, draft: &AnimalDraft) -> StoreResult<AnimalId> {
        check_lengths(draft)?;
        let mut table = self.write()?;
        if table.name_taken(&draft.name, None) {
            return Err(StoreError::Conflict {
                name: draft.name.clone(),
            });
        }
        let id = AnimalId::from_raw(table.next_id);
        table.next_id = table
            .next_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Storage("id sequence exhausted".into()))?;
        table.rows.insert(id, draft.clone().into_animal(id));
        Ok(id)
    }

    async fn fetch_all(&self) -> StoreResult<Vec<Animal>> {
        let table = self.read()?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn fetch_by_id(&self, id: AnimalId) -> StoreResult<Animal> {
        let table = self.read()?;
        table.rows.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, id: AnimalId, draft: &AnimalDraft) -> StoreResult<()> {
        let mut table = self.write()?;
        // Zero matched rows wins over any constraint, as in PostgreSQL where
        // column checks only run against rows the statement touches.
        if !table.rows.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }
        check_lengths(draft)?;
        // Conflict is an insert-only outcome; a clash on update is a failed
        // write.
        if table.name_taken(&draft.name, Some(id)) {
            return Err(StoreError::Storage(format!(
                "duplicate name on update: {}",
                draft.name
            )));
        }
        table.rows.insert(id, draft.clone().into_animal(id));
        Ok(())
    }

    async fn delete(&self, id: AnimalId) -> StoreResult<()> {
        let mut table = self.write()?;
        table
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn ping(&self) -> StoreResult<()> {
        self.read().map(|_| ())
    }
}
