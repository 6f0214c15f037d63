//! # Custom API Handlers
//!
//! One handler per custom API message. Every handler follows the same linear
//! sequence:
//!
//! 1. validate that required inputs are present and non-default, before any
//!    remote call is made
//! 2. resolve names to identifiers through [`EntityResolver`] and
//!    [`MetadataDescriptor`]
//! 3. issue at most one platform operation, always last, so a failed lookup
//!    never leaves a partial mutation behind
//! 4. return the output parameters
//!
//! Handlers hold only immutable configuration. All per-call state lives in the
//! [`PluginContext`], so one handler instance serves concurrent invocations.
//!
//! [`EntityResolver`]: crate::resolver::EntityResolver
//! [`MetadataDescriptor`]: crate::metadata::MetadataDescriptor

pub mod add_to_queue;
pub mod add_user_to_record_team;
pub mod registry;
pub mod retrieve_options;

pub use add_to_queue::AddToQueueHandler;
pub use add_user_to_record_team::AddUserToRecordTeamHandler;
pub use registry::HandlerRegistry;
pub use retrieve_options::RetrieveOptionsHandler;

use crate::error::{HelperError, Result};
use crate::service::OrganizationService;
use crate::types::{EntityReference, ParameterCollection};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Everything one invocation needs: the service handle and its inputs
#[derive(Clone)]
pub struct PluginContext {
    service: Arc<dyn OrganizationService>,
    input: ParameterCollection,
    user_id: Uuid,
    correlation_id: Uuid,
}

impl PluginContext {
    pub fn new(service: Arc<dyn OrganizationService>, input: ParameterCollection) -> Self {
        Self {
            service,
            input,
            user_id: Uuid::nil(),
            correlation_id: Uuid::new_v4(),
        }
    }

    /// Calling user the host created the service handle for
    pub fn with_user(mut self, user_id: Uuid) -> Self {
        self.user_id = user_id;
        self
    }

    /// Host-supplied correlation id; a random one is used otherwise
    pub fn with_correlation_id(mut self, correlation_id: Uuid) -> Self {
        self.correlation_id = correlation_id;
        self
    }

    pub fn service(&self) -> &dyn OrganizationService {
        self.service.as_ref()
    }

    pub fn input(&self) -> &ParameterCollection {
        &self.input
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// A custom API message implementation
#[async_trait]
pub trait CustomApiHandler: Send + Sync {
    /// Registered message name, e.g. `sample_AddToQueue`
    fn message_name(&self) -> &str;

    /// Run one invocation and return its output parameters
    async fn execute(&self, context: &PluginContext) -> Result<ParameterCollection>;
}

/// Non-empty string input
pub(crate) fn required_string<'a>(
    input: &'a ParameterCollection,
    message_name: &str,
    name: &str,
) -> Result<&'a str> {
    input
        .string(name)?
        .filter(|value| !value.is_empty())
        .ok_or_else(|| HelperError::missing_parameter(message_name, name))
}

/// String input that may be absent; empty counts as absent
pub(crate) fn optional_string<'a>(
    input: &'a ParameterCollection,
    name: &str,
) -> Result<Option<&'a str>> {
    Ok(input.string(name)?.filter(|value| !value.is_empty()))
}

/// Non-nil identifier input
pub(crate) fn required_guid(
    input: &ParameterCollection,
    message_name: &str,
    name: &str,
) -> Result<Uuid> {
    input
        .guid(name)?
        .filter(|id| !id.is_nil())
        .ok_or_else(|| HelperError::missing_parameter(message_name, name))
}

/// Entity reference input with a non-nil id
pub(crate) fn required_entity_reference<'a>(
    input: &'a ParameterCollection,
    message_name: &str,
    name: &str,
) -> Result<&'a EntityReference> {
    input
        .entity_reference(name)?
        .filter(|reference| !reference.id.is_nil())
        .ok_or_else(|| HelperError::missing_parameter(message_name, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string_rejects_absent_and_empty() {
        let input = ParameterCollection::new()
            .with("Present", "value")
            .with("Empty", "");

        assert_eq!(
            required_string(&input, "sample_Test", "Present").unwrap(),
            "value"
        );
        assert_eq!(
            required_string(&input, "sample_Test", "Empty").unwrap_err(),
            HelperError::missing_parameter("sample_Test", "Empty")
        );
        assert_eq!(
            required_string(&input, "sample_Test", "Absent").unwrap_err(),
            HelperError::missing_parameter("sample_Test", "Absent")
        );
    }

    #[test]
    fn test_optional_string_treats_empty_as_absent() {
        let input = ParameterCollection::new().with("Source", "");
        assert_eq!(optional_string(&input, "Source").unwrap(), None);
        assert_eq!(optional_string(&input, "Other").unwrap(), None);
    }

    #[test]
    fn test_required_guid_rejects_nil() {
        let input = ParameterCollection::new().with("Id", Uuid::nil());
        assert!(matches!(
            required_guid(&input, "sample_Test", "Id"),
            Err(HelperError::MissingParameter { .. })
        ));
    }

    #[test]
    fn test_required_entity_reference_rejects_nil_id() {
        let input =
            ParameterCollection::new().with("Target", EntityReference::new("systemuser", Uuid::nil()));
        assert!(required_entity_reference(&input, "sample_Test", "Target").is_err());

        let id = Uuid::new_v4();
        let input =
            ParameterCollection::new().with("Target", EntityReference::new("systemuser", id));
        assert_eq!(
            required_entity_reference(&input, "sample_Test", "Target")
                .unwrap()
                .id,
            id
        );
    }

    #[test]
    fn test_wrong_type_is_not_reported_as_missing() {
        let input = ParameterCollection::new().with("Id", "abc");
        assert!(matches!(
            required_guid(&input, "sample_Test", "Id"),
            Err(HelperError::InvalidParameterType { .. })
        ));
    }
}
