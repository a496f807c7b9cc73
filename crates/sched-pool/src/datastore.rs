//! Datastore records.
//!
//! A [`DatastoreRecord`] wraps the attribute document of one datastore and
//! caches the three fields the scheduler consults on every placement pass:
//! its id, the cluster it belongs to, and its free capacity in megabytes.
//!
//! # Invariants
//!
//! - The cached fields always come from a single document snapshot; a failed
//!   extraction leaves the previous values in place.
//! - After a successful extraction the document's search prefixes are
//!   exactly [`DATASTORE_SEARCH_PREFIXES`], template section first.

use sched_document::AttributeDocument;
use tracing::{debug, warn};

use crate::config::{DatastoreConfig, MissingFieldPolicy};
use crate::error::{PoolError, Result};
use crate::numeric::{parse_leading_int, parse_leading_long, truncate_to_u32};

/// Path of the datastore id.
pub const DATASTORE_ID_PATH: &str = "/DATASTORE/ID";

/// Path of the owning cluster id.
pub const DATASTORE_CLUSTER_ID_PATH: &str = "/DATASTORE/CLUSTER_ID";

/// Path of the free capacity, in megabytes.
pub const DATASTORE_FREE_MB_PATH: &str = "/DATASTORE/FREE_MB";

/// Prefixes installed on every datastore document for relative lookups.
pub const DATASTORE_SEARCH_PREFIXES: [&str; 2] = ["/DATASTORE/TEMPLATE/", "/DATASTORE/"];

/// Typed view over a datastore's attribute document.
///
/// The record is generic over its document. Pass `&mut doc` when the
/// document's lifetime is managed elsewhere, or move an owned document in.
#[derive(Debug)]
pub struct DatastoreRecord<D> {
    document: D,
    config: DatastoreConfig,
    id: i32,
    cluster_id: i32,
    free_mb: u32,
}

impl<D: AttributeDocument> DatastoreRecord<D> {
    /// Wrap `document` and extract its fields with the default configuration.
    pub fn new(document: D) -> Result<Self> {
        Self::with_config(document, DatastoreConfig::default())
    }

    /// Wrap `document` and extract its fields under `config`.
    pub fn with_config(document: D, config: DatastoreConfig) -> Result<Self> {
        let mut record = Self {
            document,
            config,
            id: 0,
            cluster_id: 0,
            free_mb: 0,
        };
        record.init_attributes()?;
        Ok(record)
    }

    /// Extract `ID`, `CLUSTER_ID` and `FREE_MB` from the document.
    ///
    /// The three fields are read from absolute paths and updated together.
    /// On success the datastore search prefixes are installed on the
    /// document, replacing any previous list. Re-running against an
    /// unchanged document yields the same values.
    pub fn init_attributes(&mut self) -> Result<()> {
        let id = parse_leading_int(&self.first_value(DATASTORE_ID_PATH)?);
        let cluster_id = parse_leading_int(&self.first_value(DATASTORE_CLUSTER_ID_PATH)?);

        let raw_free_mb = parse_leading_long(&self.first_value(DATASTORE_FREE_MB_PATH)?);
        let free_mb = truncate_to_u32(raw_free_mb);
        if i64::from(free_mb) != raw_free_mb {
            warn!(
                datastore = id,
                raw = raw_free_mb,
                free_mb,
                "free capacity out of 32-bit range, truncated"
            );
        }

        self.id = id;
        self.cluster_id = cluster_id;
        self.free_mb = free_mb;
        self.document.set_search_prefixes(&DATASTORE_SEARCH_PREFIXES);

        debug!(id, cluster_id, free_mb, "datastore attributes initialized");
        Ok(())
    }

    /// First value at `path`, or the configured fallback when there is none.
    fn first_value(&self, path: &str) -> Result<String> {
        let mut values = self.document.lookup(path)?;
        if values.is_empty() {
            return match self.config.missing_field {
                MissingFieldPolicy::Fail => Err(PoolError::MissingField {
                    path: path.to_string(),
                }),
                MissingFieldPolicy::DefaultZero => {
                    warn!(%path, "required datastore field missing, reading as zero");
                    Ok(String::new())
                }
            };
        }
        Ok(values.swap_remove(0))
    }

    /// The datastore id.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// The id of the cluster this datastore belongs to.
    pub fn cluster_id(&self) -> i32 {
        self.cluster_id
    }

    /// Free capacity in megabytes.
    pub fn free_mb(&self) -> u32 {
        self.free_mb
    }

    /// The prefixes this record installs on its document.
    pub fn search_prefixes(&self) -> &'static [&'static str] {
        &DATASTORE_SEARCH_PREFIXES
    }

    /// Whether a disk of `disk_mb` megabytes fits in the free capacity.
    ///
    /// The comparison is strict: a datastore is never filled to zero.
    pub fn test_capacity(&self, disk_mb: u32) -> bool {
        disk_mb < self.free_mb
    }

    /// Resolve a relative attribute such as `TM_MAD` through the installed
    /// search prefixes, returning its first value.
    pub fn template_attribute(&self, name: &str) -> Result<Option<String>> {
        Ok(self.document.search(name)?.into_iter().next())
    }

    /// The configuration this record was built with.
    pub fn config(&self) -> &DatastoreConfig {
        &self.config
    }

    /// The backing document.
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Mutable access to the backing document.
    ///
    /// Cached fields are not refreshed until [`init_attributes`] runs again.
    ///
    /// [`init_attributes`]: DatastoreRecord::init_attributes
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    /// Release the backing document.
    pub fn into_document(self) -> D {
        self.document
    }
}
