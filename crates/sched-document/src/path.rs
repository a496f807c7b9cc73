//! Lookup path validation.
//!
//! A lookup path is absolute: it starts with `/` and names one element per
//! `/`-separated segment, beginning with the root element. Search prefixes
//! have the same shape plus a trailing `/`, so a relative name can be
//! appended directly.

use crate::error::{DocumentError, Result};

/// Split an absolute lookup path into its element names.
///
/// # Examples
///
/// ```
/// use sched_document::split_path;
///
/// assert_eq!(split_path("/DATASTORE/ID").unwrap(), vec!["DATASTORE", "ID"]);
/// assert!(split_path("DATASTORE/ID").is_err());
/// assert!(split_path("/DATASTORE/").is_err());
/// ```
pub fn split_path(path: &str) -> Result<Vec<&str>> {
    let rest = path.strip_prefix('/').ok_or_else(|| DocumentError::InvalidPath {
        path: path.to_string(),
        reason: "must start with '/'".into(),
    })?;

    let segments: Vec<&str> = rest.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(DocumentError::InvalidPath {
            path: path.to_string(),
            reason: "path segments must not be empty".into(),
        });
    }
    Ok(segments)
}

/// Append a relative attribute name to a search prefix.
///
/// The prefix is expected to end with `/`; one is inserted if it does not.
pub fn join_prefix(prefix: &str, name: &str) -> String {
    if prefix.ends_with('/') {
        format!("{prefix}{name}")
    } else {
        format!("{prefix}/{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_nested_path() {
        let segments = split_path("/DATASTORE/TEMPLATE/TM_MAD").unwrap();
        assert_eq!(segments, vec!["DATASTORE", "TEMPLATE", "TM_MAD"]);
    }

    #[test]
    fn root_only_path_is_valid() {
        assert_eq!(split_path("/DATASTORE").unwrap(), vec!["DATASTORE"]);
    }

    #[test]
    fn reject_relative_path() {
        let err = split_path("ID").unwrap_err();
        assert!(matches!(err, DocumentError::InvalidPath { .. }));
    }

    #[test]
    fn reject_empty_segments() {
        assert!(split_path("/").is_err());
        assert!(split_path("").is_err());
        assert!(split_path("/DATASTORE//ID").is_err());
        assert!(split_path("/DATASTORE/TEMPLATE/").is_err());
    }

    #[test]
    fn join_with_and_without_trailing_slash() {
        assert_eq!(
            join_prefix("/DATASTORE/TEMPLATE/", "DS_MAD"),
            "/DATASTORE/TEMPLATE/DS_MAD"
        );
        assert_eq!(join_prefix("/DATASTORE", "NAME"), "/DATASTORE/NAME");
    }
}
