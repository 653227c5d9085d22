//! HTTP server for the Anekazoo service.
//!
//! Exposes create, list, get, update and delete over a single `animals`
//! resource. Handlers decode JSON, call the injected [`zoo_store::AnimalStore`],
//! and map store outcomes to HTTP statuses:
//!
//! | Error | Status |
//! |---|---|
//! | undecodable body | 400 |
//! | duplicate name on create | 409 |
//! | missing row, empty listing, unparseable id | 404 |
//! | any other store failure | 500 |

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult, ServerError, ServerResult};
pub use handler::AppState;
pub use router::build_router;
pub use server::ZooServer;
