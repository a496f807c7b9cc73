//! Typed pool records for the placement scheduler.
//!
//! The scheduler receives every pool object as an attribute document and
//! needs a handful of scalar fields from each one on every placement pass.
//! The records in this crate extract those fields once, at construction,
//! and keep the backing document around for later relative lookups.
//!
//! # Modules
//!
//! - [`error`] — Error types for record extraction
//! - [`config`] — [`DatastoreConfig`] and the [`MissingFieldPolicy`]
//! - [`numeric`] — Permissive leading-integer parsing
//! - [`datastore`] — [`DatastoreRecord`]
//! - [`pool`] — [`DatastorePool`], records keyed by datastore id

pub mod config;
pub mod datastore;
pub mod error;
pub mod numeric;
pub mod pool;

pub use config::{DatastoreConfig, MissingFieldPolicy};
pub use datastore::{
    DatastoreRecord, DATASTORE_CLUSTER_ID_PATH, DATASTORE_FREE_MB_PATH, DATASTORE_ID_PATH,
    DATASTORE_SEARCH_PREFIXES,
};
pub use error::{PoolError, Result};
pub use numeric::{parse_leading_int, parse_leading_long, truncate_to_u32};
pub use pool::DatastorePool;
