//! # Remote Data Service Boundary
//!
//! The handlers never talk to storage directly. Every lookup and mutation goes
//! through an injected [`OrganizationService`], which the host backs with its
//! own transport. This module defines the request and response shapes that
//! boundary accepts:
//!
//! - filtered, top-1, column-limited record queries ([`QueryExpression`])
//! - metadata-change queries by logical name with a property allowlist
//!   ([`EntityQueryExpression`])
//! - single attribute metadata retrieval ([`RetrieveAttributeRequest`])
//! - the two platform mutations: queue assignment and access-team membership

pub mod metadata;
pub mod query;

pub use metadata::{
    AttributeMetadata, AttributeMetadataKind, EntityMetadata, EntityQueryExpression, Label,
    LocalizedLabel, MetadataConditionExpression, MetadataConditionOperator, MetadataProperties,
    OptionMetadata, RetrieveAttributeRequest, StateOptionMetadata, StatusOptionMetadata,
};
pub use query::{
    AttributeValue, ColumnSet, ConditionExpression, ConditionOperator, Entity, EntityCollection,
    FilterExpression, LogicalOperator, QueryExpression,
};

use crate::types::EntityReference;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Fault returned by the remote data service for a single call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ServiceFault {
    pub message: String,
    pub error_code: Option<i32>,
}

impl ServiceFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error_code: None,
        }
    }

    pub fn with_code(message: impl Into<String>, error_code: i32) -> Self {
        Self {
            message: message.into(),
            error_code: Some(error_code),
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceFault>;

/// Moves or adds a record into a queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToQueueRequest {
    pub destination_queue_id: Uuid,
    pub source_queue_id: Option<Uuid>,
    pub target: EntityReference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToQueueResponse {
    pub queue_item_id: Uuid,
}

/// Adds a user to the access team auto-created for a record from a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddUserToRecordTeamRequest {
    pub record: EntityReference,
    pub system_user_id: Uuid,
    pub team_template_id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddUserToRecordTeamResponse {
    pub access_team_id: Uuid,
}

/// Synchronous request/response calls against the platform's data service.
///
/// Each call suspends the invocation until the service answers or faults.
/// Implementations own transport, authentication and timeouts.
#[async_trait]
pub trait OrganizationService: Send + Sync {
    /// Run a record query and return the matching records
    async fn retrieve_multiple(&self, query: QueryExpression) -> ServiceResult<EntityCollection>;

    /// Run a metadata-change query and return the matching entity metadata
    async fn retrieve_metadata_changes(
        &self,
        query: EntityQueryExpression,
    ) -> ServiceResult<Vec<EntityMetadata>>;

    /// Fetch the metadata of a single attribute
    async fn retrieve_attribute(
        &self,
        request: RetrieveAttributeRequest,
    ) -> ServiceResult<AttributeMetadata>;

    async fn add_to_queue(&self, request: AddToQueueRequest) -> ServiceResult<AddToQueueResponse>;

    async fn add_user_to_record_team(
        &self,
        request: AddUserToRecordTeamRequest,
    ) -> ServiceResult<AddUserToRecordTeamResponse>;
}
