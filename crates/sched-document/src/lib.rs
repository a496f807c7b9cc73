//! Attribute documents for scheduler pool objects.
//!
//! Every object the scheduler tracks (hosts, datastores, virtual machines) is
//! delivered as a tree-shaped snapshot whose values are addressed by
//! hierarchical paths such as `/DATASTORE/FREE_MB`. This crate defines the
//! interface the pool records consume and an in-memory tree implementation.
//!
//! # Path resolution
//!
//! - **Absolute lookups** name the full path from the root element and
//!   return every matching value in document order.
//! - **Relative searches** take a bare attribute name and try each of the
//!   document's active search prefixes in turn, so the same key resolves
//!   whether it lives under a template section or at the root.
//!
//! # Modules
//!
//! - [`error`] — Error types for document operations
//! - [`path`] — Lookup path validation and splitting
//! - [`traits`] — The [`AttributeDocument`] trait
//! - [`tree`] — [`Element`] and the in-memory [`TreeDocument`]

pub mod error;
pub mod path;
pub mod traits;
pub mod tree;

pub use error::{DocumentError, Result};
pub use path::{join_prefix, split_path};
pub use traits::AttributeDocument;
pub use tree::{Element, TreeDocument};
