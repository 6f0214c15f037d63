//! Record query shapes: filtered, column-limited `RetrieveMultiple` queries and
//! the records they return.

use crate::types::EntityReference;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Value of a record attribute or of a query condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Guid(Uuid),
    Integer(i32),
    Boolean(bool),
    EntityReference(EntityReference),
    String(String),
}

impl AttributeValue {
    /// Identifier held by the value, if it is one
    pub fn as_id(&self) -> Option<Uuid> {
        match self {
            AttributeValue::Guid(id) => Some(*id),
            AttributeValue::EntityReference(reference) => Some(reference.id),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Guid(id) => write!(f, "{id}"),
            AttributeValue::Integer(value) => write!(f, "{value}"),
            AttributeValue::Boolean(value) => write!(f, "{value}"),
            AttributeValue::EntityReference(reference) => write!(f, "{reference}"),
            AttributeValue::String(value) => f.write_str(value),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<Uuid> for AttributeValue {
    fn from(value: Uuid) -> Self {
        AttributeValue::Guid(value)
    }
}

/// Columns a query returns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnSet {
    All,
    Columns(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOperator {
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionOperator {
    Equal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionExpression {
    pub attribute: String,
    pub operator: ConditionOperator,
    pub value: AttributeValue,
}

impl ConditionExpression {
    pub fn equal(attribute: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self {
            attribute: attribute.into(),
            operator: ConditionOperator::Equal,
            value: value.into(),
        }
    }
}

impl fmt::Display for ConditionExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operator {
            ConditionOperator::Equal => write!(f, "{} = '{}'", self.attribute, self.value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterExpression {
    pub operator: LogicalOperator,
    pub conditions: Vec<ConditionExpression>,
}

impl Default for FilterExpression {
    fn default() -> Self {
        Self {
            operator: LogicalOperator::And,
            conditions: Vec::new(),
        }
    }
}

/// Query against one entity's records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryExpression {
    pub entity_name: String,
    pub column_set: ColumnSet,
    pub criteria: FilterExpression,
    pub top_count: Option<u32>,
}

impl QueryExpression {
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            column_set: ColumnSet::All,
            criteria: FilterExpression::default(),
            top_count: None,
        }
    }

    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_set = ColumnSet::Columns(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn condition(mut self, condition: ConditionExpression) -> Self {
        self.criteria.conditions.push(condition);
        self
    }

    pub fn top(mut self, count: u32) -> Self {
        self.top_count = Some(count);
        self
    }

    /// Human-readable filter, used as error and log context
    pub fn describe(&self) -> String {
        let conditions = self
            .criteria
            .conditions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" and ");
        format!("{} where {}", self.entity_name, conditions)
    }
}

/// A returned record with only the requested columns populated
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Entity {
    pub logical_name: String,
    pub id: Option<Uuid>,
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl Entity {
    pub fn new(logical_name: impl Into<String>) -> Self {
        Self {
            logical_name: logical_name.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntityCollection {
    pub entities: Vec<Entity>,
}

impl From<Vec<Entity>> for EntityCollection {
    fn from(entities: Vec<Entity>) -> Self {
        Self { entities }
    }
}
