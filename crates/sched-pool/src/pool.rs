//! A collection of datastore records keyed by datastore id.

use std::collections::BTreeMap;

use sched_document::AttributeDocument;
use tracing::{debug, warn};

use crate::config::DatastoreConfig;
use crate::datastore::DatastoreRecord;
use crate::error::{PoolError, Result};

/// Datastore records indexed by id, iterated in ascending id order.
#[derive(Debug)]
pub struct DatastorePool<D> {
    records: BTreeMap<i32, DatastoreRecord<D>>,
}

impl<D: AttributeDocument> DatastorePool<D> {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// Build a pool from a batch of documents.
    ///
    /// Fails on the first document whose fields cannot be extracted, or
    /// whose id was already produced by an earlier document in the batch.
    pub fn from_documents<I>(documents: I, config: &DatastoreConfig) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
    {
        let mut pool = Self::new();
        for document in documents {
            let record = DatastoreRecord::with_config(document, config.clone())?;
            let id = record.id();
            if pool.records.contains_key(&id) {
                warn!(id, "duplicate datastore id in batch");
                return Err(PoolError::DuplicateId { id });
            }
            pool.insert(record);
        }
        debug!(datastores = pool.len(), "datastore pool built");
        Ok(pool)
    }

    /// Add a record, returning the one it replaced if the id was taken.
    pub fn insert(&mut self, record: DatastoreRecord<D>) -> Option<DatastoreRecord<D>> {
        self.records.insert(record.id(), record)
    }

    /// Look up a record by datastore id.
    pub fn get(&self, id: i32) -> Option<&DatastoreRecord<D>> {
        self.records.get(&id)
    }

    /// Remove a record by datastore id.
    pub fn remove(&mut self, id: i32) -> Option<DatastoreRecord<D>> {
        self.records.remove(&id)
    }

    /// Number of records in the pool.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the pool holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &DatastoreRecord<D>> {
        self.records.values()
    }

    /// Ids of datastores with room for a disk of `disk_mb` megabytes.
    pub fn with_capacity_for(&self, disk_mb: u32) -> Vec<i32> {
        self.records
            .values()
            .filter(|r| r.test_capacity(disk_mb))
            .map(|r| r.id())
            .collect()
    }

    /// Records belonging to `cluster_id`, in ascending id order.
    pub fn in_cluster(&self, cluster_id: i32) -> impl Iterator<Item = &DatastoreRecord<D>> {
        self.records
            .values()
            .filter(move |r| r.cluster_id() == cluster_id)
    }
}

impl<D: AttributeDocument> Default for DatastorePool<D> {
    fn default() -> Self {
        Self::new()
    }
}
