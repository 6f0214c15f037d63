//! # Option Set Normalization
//!
//! Flattens the option-bearing attribute metadata shapes into one record type.
//! Boolean, Picklist and MultiSelectPicklist options carry only `value` and
//! `label`; State options add `defaultstatus` and `invariantname`; Status
//! options add `state`. Every option produced for one attribute has the same
//! set of extra keys.
//!
//! Serialized, an option is a flat record:
//!
//! ```json
//! { "value": 1, "label": "Active", "state": 0 }
//! ```

use crate::constants::option_fields;
use crate::error::{HelperError, Result};
use crate::service::{AttributeMetadata, AttributeMetadataKind, OptionMetadata};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value of a shape-specific option field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionFieldValue {
    Null,
    Boolean(bool),
    Integer(i32),
    String(String),
}

impl From<Option<i32>> for OptionFieldValue {
    fn from(value: Option<i32>) -> Self {
        value.map_or(OptionFieldValue::Null, OptionFieldValue::Integer)
    }
}

impl From<i32> for OptionFieldValue {
    fn from(value: i32) -> Self {
        OptionFieldValue::Integer(value)
    }
}

impl From<&str> for OptionFieldValue {
    fn from(value: &str) -> Self {
        OptionFieldValue::String(value.to_string())
    }
}

/// One selectable value of an attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedOption {
    pub value: i32,
    pub label: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, OptionFieldValue>,
}

impl NormalizedOption {
    pub fn new(value: i32, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: &str, value: impl Into<OptionFieldValue>) -> Self {
        self.extra.insert(name.to_string(), value.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&OptionFieldValue> {
        self.extra.get(name)
    }
}

impl From<&OptionMetadata> for NormalizedOption {
    fn from(option: &OptionMetadata) -> Self {
        NormalizedOption::new(option.value, option.label.text())
    }
}

/// Options of `attribute` in service order.
///
/// Fails with `NoOptions` for attributes that are not Boolean, Picklist,
/// MultiSelectPicklist, State or Status.
pub fn normalize(attribute: &AttributeMetadata) -> Result<Vec<NormalizedOption>> {
    let options: Vec<NormalizedOption> = match &attribute.kind {
        AttributeMetadataKind::Boolean {
            true_option,
            false_option,
        } => vec![true_option.into(), false_option.into()],
        AttributeMetadataKind::Picklist { options }
        | AttributeMetadataKind::MultiSelectPicklist { options } => {
            options.iter().map(NormalizedOption::from).collect()
        }
        AttributeMetadataKind::State { options } => options
            .iter()
            .map(|option| {
                NormalizedOption::new(option.value, option.label.text())
                    .with_field(option_fields::DEFAULT_STATUS, option.default_status)
                    .with_field(option_fields::INVARIANT_NAME, option.invariant_name.as_str())
            })
            .collect(),
        AttributeMetadataKind::Status { options } => options
            .iter()
            .map(|option| {
                NormalizedOption::new(option.value, option.label.text())
                    .with_field(option_fields::STATE, option.state)
            })
            .collect(),
        AttributeMetadataKind::Other { .. } => {
            return Err(HelperError::NoOptions {
                attribute: attribute.logical_name.clone(),
            })
        }
    };
    Ok(options)
}
