use serde::{Deserialize, Serialize};

/// What to do when a required field is absent from a document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFieldPolicy {
    /// Refuse to build the record and report the missing path.
    #[default]
    Fail,
    /// Treat the field as empty text, which parses to zero.
    DefaultZero,
}

/// Configuration for datastore record extraction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatastoreConfig {
    /// Policy applied when `ID`, `CLUSTER_ID` or `FREE_MB` is missing.
    #[serde(default)]
    pub missing_field: MissingFieldPolicy,
}

impl DatastoreConfig {
    /// A configuration that never fails on missing fields.
    ///
    /// Absent values become zero, which is what the scheduler historically
    /// saw for malformed datastores.
    pub fn lenient() -> Self {
        Self {
            missing_field: MissingFieldPolicy::DefaultZero,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fails_on_missing_fields() {
        assert_eq!(
            DatastoreConfig::default().missing_field,
            MissingFieldPolicy::Fail
        );
    }

    #[test]
    fn lenient_defaults_to_zero() {
        assert_eq!(
            DatastoreConfig::lenient().missing_field,
            MissingFieldPolicy::DefaultZero
        );
    }

    #[test]
    fn deserialize_policy_from_snake_case() {
        let config: DatastoreConfig =
            serde_json::from_str(r#"{ "missing_field": "default_zero" }"#).unwrap();
        assert_eq!(config, DatastoreConfig::lenient());
    }

    #[test]
    fn deserialize_empty_object_uses_defaults() {
        let config: DatastoreConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DatastoreConfig::default());
    }
}
