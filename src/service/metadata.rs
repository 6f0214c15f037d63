//! Metadata shapes: metadata-change queries, entity metadata restricted to a
//! property allowlist, and the attribute metadata variants that carry options.

use crate::constants::metadata_properties;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetadataConditionOperator {
    Equals,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataConditionExpression {
    pub property_name: String,
    pub operator: MetadataConditionOperator,
    pub value: String,
}

/// Which entity metadata properties the service should populate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetadataProperties {
    All,
    Named(Vec<String>),
}

impl MetadataProperties {
    pub fn includes(&self, property: &str) -> bool {
        match self {
            MetadataProperties::All => true,
            MetadataProperties::Named(names) => names.iter().any(|name| name == property),
        }
    }
}

/// Metadata-change query; conditions are combined with AND
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityQueryExpression {
    pub conditions: Vec<MetadataConditionExpression>,
    pub properties: MetadataProperties,
}

impl EntityQueryExpression {
    /// Query for a single entity by logical name, returning only `properties`
    pub fn by_logical_name<I, S>(logical_name: &str, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            conditions: vec![MetadataConditionExpression {
                property_name: metadata_properties::LOGICAL_NAME.to_string(),
                operator: MetadataConditionOperator::Equals,
                value: logical_name.to_string(),
            }],
            properties: MetadataProperties::Named(properties.into_iter().map(Into::into).collect()),
        }
    }
}

/// Entity metadata; properties outside the requested allowlist stay `None`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntityMetadata {
    pub logical_name: Option<String>,
    pub object_type_code: Option<i32>,
    pub display_name: Option<Label>,
    pub primary_id_attribute: Option<String>,
    pub primary_name_attribute: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedLabel {
    pub label: String,
    pub language_code: i32,
}

/// Display label in the caller's language plus every localized variant
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Label {
    pub user_localized_label: Option<LocalizedLabel>,
    pub localized_labels: Vec<LocalizedLabel>,
}

impl Label {
    /// Label with a single localization that is also the user's
    pub fn new(text: impl Into<String>, language_code: i32) -> Self {
        let localized = LocalizedLabel {
            label: text.into(),
            language_code,
        };
        Self {
            user_localized_label: Some(localized.clone()),
            localized_labels: vec![localized],
        }
    }

    /// User's label, else the first localization, else empty
    pub fn text(&self) -> &str {
        self.user_localized_label
            .as_ref()
            .or_else(|| self.localized_labels.first())
            .map(|localized| localized.label.as_str())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionMetadata {
    pub value: i32,
    pub label: Label,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateOptionMetadata {
    pub value: i32,
    pub label: Label,
    /// Status reason value a record takes when it enters this state
    pub default_status: Option<i32>,
    pub invariant_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusOptionMetadata {
    pub value: i32,
    pub label: Label,
    /// State value this status reason belongs to
    pub state: i32,
}

/// Attribute metadata shapes. Only the option-bearing shapes carry options;
/// everything else is `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "attribute_type", rename_all = "snake_case")]
pub enum AttributeMetadataKind {
    Boolean {
        true_option: OptionMetadata,
        false_option: OptionMetadata,
    },
    Picklist {
        options: Vec<OptionMetadata>,
    },
    MultiSelectPicklist {
        options: Vec<OptionMetadata>,
    },
    State {
        options: Vec<StateOptionMetadata>,
    },
    Status {
        options: Vec<StatusOptionMetadata>,
    },
    Other {
        type_name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeMetadata {
    pub entity_logical_name: String,
    pub logical_name: String,
    pub kind: AttributeMetadataKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrieveAttributeRequest {
    pub entity_logical_name: String,
    pub logical_name: String,
}
