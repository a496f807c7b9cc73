//! The [`AttributeDocument`] trait consumed by pool records.

use tracing::debug;

use crate::error::Result;
use crate::path::join_prefix;

/// A path-addressable attribute snapshot.
///
/// The search-prefix list is per-document state: installing prefixes
/// changes how every later [`search`](AttributeDocument::search) on the same
/// document resolves, which is why it takes `&mut self`.
///
/// No `Send + Sync` bound: a document is read and configured by one owner
/// at a time, and exclusive access comes from the `&mut` receiver rather
/// than from internal locking.
pub trait AttributeDocument {
    /// Return every value found at the absolute `path`, in document order.
    ///
    /// Returns an empty vector if nothing matches. Fails only when `path`
    /// is malformed.
    fn lookup(&self, path: &str) -> Result<Vec<String>>;

    /// The prefixes currently used to resolve relative names.
    fn search_prefixes(&self) -> &[String];

    /// Replace the active search-prefix list.
    fn set_search_prefixes(&mut self, prefixes: &[&str]);

    /// Resolve a relative attribute name against the active prefixes.
    ///
    /// Prefixes are tried in order and the matches of the first prefix that
    /// yields anything are returned.
    fn search(&self, name: &str) -> Result<Vec<String>> {
        for prefix in self.search_prefixes() {
            let path = join_prefix(prefix, name);
            let values = self.lookup(&path)?;
            if !values.is_empty() {
                debug!(%name, %path, "relative attribute resolved");
                return Ok(values);
            }
        }
        Ok(Vec::new())
    }
}

impl<T: AttributeDocument + ?Sized> AttributeDocument for &mut T {
    fn lookup(&self, path: &str) -> Result<Vec<String>> {
        (**self).lookup(path)
    }

    fn search_prefixes(&self) -> &[String] {
        (**self).search_prefixes()
    }

    fn set_search_prefixes(&mut self, prefixes: &[&str]) {
        (**self).set_search_prefixes(prefixes)
    }

    fn search(&self, name: &str) -> Result<Vec<String>> {
        (**self).search(name)
    }
}

impl<T: AttributeDocument + ?Sized> AttributeDocument for Box<T> {
    fn lookup(&self, path: &str) -> Result<Vec<String>> {
        (**self).lookup(path)
    }

    fn search_prefixes(&self) -> &[String] {
        (**self).search_prefixes()
    }

    fn set_search_prefixes(&mut self, prefixes: &[&str]) {
        (**self).set_search_prefixes(prefixes)
    }

    fn search(&self, name: &str) -> Result<Vec<String>> {
        (**self).search(name)
    }
}
