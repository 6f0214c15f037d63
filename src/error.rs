//! # Error Types
//!
//! Structured errors for name resolution, metadata lookups, option normalization
//! and handler dispatch. Nothing in this crate retries: every variant is reported
//! to the host once, with enough context to tell which lookup failed.

use crate::service::ServiceFault;
use thiserror::Error;

/// Errors raised by the resolver, metadata descriptor, normalizer and handlers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HelperError {
    #[error("Required parameter '{parameter}' for {message_name} not present")]
    MissingParameter {
        message_name: String,
        parameter: String,
    },

    #[error("Parameter '{parameter}' has type {actual}, expected {expected}")]
    InvalidParameterType {
        parameter: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("'{logical_name}' is not a valid entity logical name")]
    InvalidEntityName { logical_name: String },

    #[error("No {entity} record found with the {attribute} value '{value}'")]
    NotFound {
        entity: String,
        attribute: String,
        value: String,
    },

    #[error("No Team Template record found with the name '{template_name}' for the {entity} entity")]
    TeamTemplateNotFound {
        template_name: String,
        entity: String,
    },

    #[error("The {attribute} attribute doesn't have options")]
    NoOptions { attribute: String },

    #[error("Metadata for '{entity}' did not include the {property} property")]
    MissingMetadataProperty { entity: String, property: String },

    #[error("The {attribute} value of the returned {entity} record is not an identifier")]
    UnexpectedAttributeValue { entity: String, attribute: String },

    #[error("An error occurred in {operation} ({context}): {source}")]
    RemoteService {
        operation: String,
        context: String,
        #[source]
        source: ServiceFault,
    },

    #[error("No handler registered for message '{message_name}'")]
    UnknownMessage { message_name: String },

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl HelperError {
    /// Create a missing parameter error
    pub fn missing_parameter(message_name: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::MissingParameter {
            message_name: message_name.into(),
            parameter: parameter.into(),
        }
    }

    /// Create an invalid entity name error
    pub fn invalid_entity_name(logical_name: impl Into<String>) -> Self {
        Self::InvalidEntityName {
            logical_name: logical_name.into(),
        }
    }

    /// Create a record-not-found error for a name lookup
    pub fn not_found(
        entity: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            entity: entity.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Wrap a remote fault with the operation and the names it was called with
    pub fn remote(
        operation: impl Into<String>,
        context: impl Into<String>,
        source: ServiceFault,
    ) -> Self {
        Self::RemoteService {
            operation: operation.into(),
            context: context.into(),
            source,
        }
    }

    /// True for lookups that found nothing (records or team templates)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::TeamTemplateNotFound { .. }
        )
    }

    /// True when the remote data service itself failed
    pub fn is_remote_fault(&self) -> bool {
        matches!(self, Self::RemoteService { .. })
    }
}

pub type Result<T> = std::result::Result<T, HelperError>;
