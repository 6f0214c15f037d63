//! # Parameter Types
//!
//! Typed values exchanged with the host: identifiers, entity references and the
//! name → value collections used for handler inputs and outputs.

use crate::error::{HelperError, Result};
use crate::options::NormalizedOption;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Reference to a single record: entity logical name plus record id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityReference {
    pub logical_name: String,
    pub id: Uuid,
}

impl EntityReference {
    pub fn new(logical_name: impl Into<String>, id: Uuid) -> Self {
        Self {
            logical_name: logical_name.into(),
            id,
        }
    }
}

impl fmt::Display for EntityReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.logical_name, self.id)
    }
}

/// A single typed parameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ParameterValue {
    String(String),
    Guid(Uuid),
    EntityReference(EntityReference),
    Integer(i32),
    Boolean(bool),
    Options(Vec<NormalizedOption>),
}

impl ParameterValue {
    /// Type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            ParameterValue::String(_) => "String",
            ParameterValue::Guid(_) => "Guid",
            ParameterValue::EntityReference(_) => "EntityReference",
            ParameterValue::Integer(_) => "Integer",
            ParameterValue::Boolean(_) => "Boolean",
            ParameterValue::Options(_) => "Options",
        }
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::String(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        ParameterValue::String(value)
    }
}

impl From<Uuid> for ParameterValue {
    fn from(value: Uuid) -> Self {
        ParameterValue::Guid(value)
    }
}

impl From<EntityReference> for ParameterValue {
    fn from(value: EntityReference) -> Self {
        ParameterValue::EntityReference(value)
    }
}

impl From<i32> for ParameterValue {
    fn from(value: i32) -> Self {
        ParameterValue::Integer(value)
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        ParameterValue::Boolean(value)
    }
}

impl From<Vec<NormalizedOption>> for ParameterValue {
    fn from(value: Vec<NormalizedOption>) -> Self {
        ParameterValue::Options(value)
    }
}

/// Named parameters passed into or returned from a handler
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterCollection {
    values: BTreeMap<String, ParameterValue>,
}

impl ParameterCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used when assembling inputs
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParameterValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParameterValue)> {
        self.values.iter()
    }

    /// String parameter, `None` when absent
    pub fn string(&self, name: &str) -> Result<Option<&str>> {
        match self.values.get(name) {
            None => Ok(None),
            Some(ParameterValue::String(value)) => Ok(Some(value.as_str())),
            Some(other) => Err(type_mismatch(name, "String", other)),
        }
    }

    /// Identifier parameter, `None` when absent
    pub fn guid(&self, name: &str) -> Result<Option<Uuid>> {
        match self.values.get(name) {
            None => Ok(None),
            Some(ParameterValue::Guid(value)) => Ok(Some(*value)),
            Some(other) => Err(type_mismatch(name, "Guid", other)),
        }
    }

    /// Entity reference parameter, `None` when absent
    pub fn entity_reference(&self, name: &str) -> Result<Option<&EntityReference>> {
        match self.values.get(name) {
            None => Ok(None),
            Some(ParameterValue::EntityReference(value)) => Ok(Some(value)),
            Some(other) => Err(type_mismatch(name, "EntityReference", other)),
        }
    }

    /// Normalized option list, `None` when absent
    pub fn options(&self, name: &str) -> Result<Option<&[NormalizedOption]>> {
        match self.values.get(name) {
            None => Ok(None),
            Some(ParameterValue::Options(value)) => Ok(Some(value.as_slice())),
            Some(other) => Err(type_mismatch(name, "Options", other)),
        }
    }
}

fn type_mismatch(name: &str, expected: &'static str, actual: &ParameterValue) -> HelperError {
    HelperError::InvalidParameterType {
        parameter: name.to_string(),
        expected,
        actual: actual.type_name(),
    }
}
