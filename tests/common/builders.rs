//! Builders for attribute metadata in the shapes the service returns.

#![allow(dead_code)]

use flow_helpers::service::{
    AttributeMetadata, AttributeMetadataKind, Label, OptionMetadata, StateOptionMetadata,
    StatusOptionMetadata,
};

pub const ENGLISH: i32 = 1033;

pub fn option(value: i32, label: &str) -> OptionMetadata {
    OptionMetadata {
        value,
        label: Label::new(label, ENGLISH),
    }
}

pub fn state_option(value: i32, label: &str, default_status: i32) -> StateOptionMetadata {
    StateOptionMetadata {
        value,
        label: Label::new(label, ENGLISH),
        default_status: Some(default_status),
        invariant_name: label.to_string(),
    }
}

pub fn status_option(value: i32, label: &str, state: i32) -> StatusOptionMetadata {
    StatusOptionMetadata {
        value,
        label: Label::new(label, ENGLISH),
        state,
    }
}

/// Attribute metadata for `entity.attribute` with the given shape
pub struct AttributeBuilder {
    entity: String,
    attribute: String,
}

impl AttributeBuilder {
    pub fn new(entity: &str, attribute: &str) -> Self {
        Self {
            entity: entity.to_string(),
            attribute: attribute.to_string(),
        }
    }

    pub fn kind(self, kind: AttributeMetadataKind) -> AttributeMetadata {
        AttributeMetadata {
            entity_logical_name: self.entity,
            logical_name: self.attribute,
            kind,
        }
    }

    pub fn boolean(self, true_label: &str, false_label: &str) -> AttributeMetadata {
        self.kind(AttributeMetadataKind::Boolean {
            true_option: option(1, true_label),
            false_option: option(0, false_label),
        })
    }

    pub fn picklist(self, options: &[(i32, &str)]) -> AttributeMetadata {
        self.kind(AttributeMetadataKind::Picklist {
            options: options.iter().map(|(v, l)| option(*v, l)).collect(),
        })
    }

    pub fn multi_select(self, options: &[(i32, &str)]) -> AttributeMetadata {
        self.kind(AttributeMetadataKind::MultiSelectPicklist {
            options: options.iter().map(|(v, l)| option(*v, l)).collect(),
        })
    }

    pub fn state(self, options: &[(i32, &str, i32)]) -> AttributeMetadata {
        self.kind(AttributeMetadataKind::State {
            options: options
                .iter()
                .map(|(v, l, d)| state_option(*v, l, *d))
                .collect(),
        })
    }

    pub fn status(self, options: &[(i32, &str, i32)]) -> AttributeMetadata {
        self.kind(AttributeMetadataKind::Status {
            options: options
                .iter()
                .map(|(v, l, s)| status_option(*v, l, *s))
                .collect(),
        })
    }

    pub fn other(self, type_name: &str) -> AttributeMetadata {
        self.kind(AttributeMetadataKind::Other {
            type_name: type_name.to_string(),
        })
    }
}
