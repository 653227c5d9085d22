//! Entity model for the Anekazoo service.
//!
//! The service manages a single flat record type, the animal. This crate
//! holds its shape and nothing else; storage and HTTP live in `zoo-store`
//! and `zoo-server`.
//!
//! # Key Types
//!
//! - [`Animal`] — A stored row: store-assigned id plus the client fields
//! - [`AnimalDraft`] — The client-supplied fields used by create and update
//! - [`AnimalId`] — Store-assigned integer identifier

pub mod animal;
pub mod error;

pub use animal::{Animal, AnimalDraft, AnimalId};
pub use error::TypeError;
