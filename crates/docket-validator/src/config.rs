//! Validator configuration

use crate::ValidatorError;
use docket_domain::fields;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Configuration for schema checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Fields every header must carry, reported in this order
    pub required_fields: Vec<String>,

    /// Warn when `created` is not a `YYYY-MM-DD` date
    pub check_created_date: bool,

    /// Warn when `tags` is not a list
    pub check_tags_list: bool,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            required_fields: fields::REQUIRED.iter().map(|f| f.to_string()).collect(),
            check_created_date: true,
            check_tags_list: true,
        }
    }
}

impl SchemaConfig {
    /// Only the hard schema rules, no shape warnings
    pub fn errors_only() -> Self {
        Self {
            check_created_date: false,
            check_tags_list: false,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidatorError> {
        let mut seen = BTreeSet::new();
        for field in &self.required_fields {
            if field.trim().is_empty() {
                return Err(ValidatorError::Config("required_fields contains an empty name".to_string()));
            }
            if !seen.insert(field.as_str()) {
                return Err(ValidatorError::Config(format!("required field listed twice: {}", field)));
            }
        }
        Ok(())
    }
}
