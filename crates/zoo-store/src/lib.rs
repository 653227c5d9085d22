//! Persistence adapter for the Anekazoo service.
//!
//! Translates animal operations into parameterized SQL and classifies every
//! store-level failure into a small, driver-independent taxonomy
//! ([`StoreError`]). Callers never see a raw driver error.
//!
//! # Storage Backends
//!
//! All backends implement the [`AnimalStore`] trait:
//!
//! - [`PgAnimalStore`] -- PostgreSQL via a shared `sqlx` connection pool
//! - [`InMemoryAnimalStore`] -- `BTreeMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. `name` uniqueness is enforced by the store; a duplicate is a
//!    [`StoreError::Conflict`], never a fatal error.
//! 2. Update and delete detect absence from the affected-row count, not from a
//!    pre-read. Zero rows affected is [`StoreError::NotFound`]; a failed write
//!    is [`StoreError::Storage`].
//! 3. Listing applies no ordering; callers must not rely on row order.
//! 4. Schema bootstrap is idempotent and runs once at startup, outside
//!    steady-state request handling.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod schema;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryAnimalStore;
pub use postgres::{DatabaseConfig, PgAnimalStore};
pub use schema::MigrationOutcome;
pub use traits::AnimalStore;
