//! In-memory organization service for handler tests.
//!
//! Answers record queries by exact-match filtering over seeded records,
//! answers metadata queries from seeded entity metadata (populating only the
//! requested properties), and records every call so tests can assert on what
//! reached the service.

#![allow(dead_code)]

use async_trait::async_trait;
use flow_helpers::service::{
    AddToQueueRequest, AddToQueueResponse, AddUserToRecordTeamRequest,
    AddUserToRecordTeamResponse, AttributeMetadata, ColumnSet, Entity, EntityCollection,
    EntityMetadata, EntityQueryExpression, OrganizationService, QueryExpression,
    RetrieveAttributeRequest, ServiceFault, ServiceResult,
};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// A call that reached the mock service
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceCall {
    RetrieveMultiple(QueryExpression),
    RetrieveMetadataChanges(EntityQueryExpression),
    RetrieveAttribute(RetrieveAttributeRequest),
    AddToQueue(AddToQueueRequest),
    AddUserToRecordTeam(AddUserToRecordTeamRequest),
}

impl ServiceCall {
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            ServiceCall::AddToQueue(_) | ServiceCall::AddUserToRecordTeam(_)
        )
    }
}

pub struct MockOrganizationService {
    records: HashMap<String, Vec<Entity>>,
    entities: Vec<EntityMetadata>,
    attributes: Vec<AttributeMetadata>,
    faults: HashMap<String, ServiceFault>,
    queue_item_id: Uuid,
    access_team_id: Uuid,
    calls: Mutex<Vec<ServiceCall>>,
}

impl Default for MockOrganizationService {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
            entities: Vec::new(),
            attributes: Vec::new(),
            faults: HashMap::new(),
            queue_item_id: Uuid::new_v4(),
            access_team_id: Uuid::new_v4(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl MockOrganizationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, record: Entity) -> Self {
        self.records
            .entry(record.logical_name.clone())
            .or_default()
            .push(record);
        self
    }

    pub fn with_queue(self, name: &str, id: Uuid) -> Self {
        self.with_record(
            Entity::new("queue")
                .with_attribute("name", name)
                .with_attribute("queueid", id),
        )
    }

    pub fn with_team_template(self, name: &str, object_type_code: i32, id: Uuid) -> Self {
        self.with_record(
            Entity::new("teamtemplate")
                .with_attribute("teamtemplatename", name)
                .with_attribute("objecttypecode", object_type_code)
                .with_attribute("teamtemplateid", id),
        )
    }

    pub fn with_entity(mut self, logical_name: &str, object_type_code: i32) -> Self {
        self.entities.push(EntityMetadata {
            logical_name: Some(logical_name.to_string()),
            object_type_code: Some(object_type_code),
            primary_id_attribute: Some(format!("{logical_name}id")),
            primary_name_attribute: Some("name".to_string()),
            ..Default::default()
        });
        self
    }

    pub fn with_attribute(mut self, attribute: AttributeMetadata) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Make every call of `operation` fail with `message`
    pub fn failing(mut self, operation: &str, message: &str) -> Self {
        self.faults
            .insert(operation.to_string(), ServiceFault::new(message));
        self
    }

    pub fn with_queue_item_id(mut self, id: Uuid) -> Self {
        self.queue_item_id = id;
        self
    }

    pub fn with_access_team_id(mut self, id: Uuid) -> Self {
        self.access_team_id = id;
        self
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn mutations(&self) -> Vec<ServiceCall> {
        self.calls()
            .into_iter()
            .filter(ServiceCall::is_mutation)
            .collect()
    }

    fn record_call(&self, operation: &str, call: ServiceCall) -> ServiceResult<()> {
        self.calls.lock().unwrap().push(call);
        match self.faults.get(operation) {
            Some(fault) => Err(fault.clone()),
            None => Ok(()),
        }
    }
}

fn project(record: &Entity, columns: &ColumnSet) -> Entity {
    match columns {
        ColumnSet::All => record.clone(),
        ColumnSet::Columns(names) => Entity {
            logical_name: record.logical_name.clone(),
            id: record.id,
            attributes: record
                .attributes
                .iter()
                .filter(|(name, _)| names.contains(*name))
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        },
    }
}

fn project_metadata(metadata: &EntityMetadata, query: &EntityQueryExpression) -> EntityMetadata {
    let properties = &query.properties;
    EntityMetadata {
        logical_name: metadata
            .logical_name
            .clone()
            .filter(|_| properties.includes("LogicalName")),
        object_type_code: metadata
            .object_type_code
            .filter(|_| properties.includes("ObjectTypeCode")),
        display_name: metadata
            .display_name
            .clone()
            .filter(|_| properties.includes("DisplayName")),
        primary_id_attribute: metadata
            .primary_id_attribute
            .clone()
            .filter(|_| properties.includes("PrimaryIdAttribute")),
        primary_name_attribute: metadata
            .primary_name_attribute
            .clone()
            .filter(|_| properties.includes("PrimaryNameAttribute")),
    }
}

#[async_trait]
impl OrganizationService for MockOrganizationService {
    async fn retrieve_multiple(&self, query: QueryExpression) -> ServiceResult<EntityCollection> {
        self.record_call("RetrieveMultiple", ServiceCall::RetrieveMultiple(query.clone()))?;

        let mut matches: Vec<Entity> = self
            .records
            .get(&query.entity_name)
            .into_iter()
            .flatten()
            .filter(|record| {
                query
                    .criteria
                    .conditions
                    .iter()
                    .all(|condition| record.get(&condition.attribute) == Some(&condition.value))
            })
            .map(|record| project(record, &query.column_set))
            .collect();

        if let Some(top) = query.top_count {
            matches.truncate(top as usize);
        }
        Ok(matches.into())
    }

    async fn retrieve_metadata_changes(
        &self,
        query: EntityQueryExpression,
    ) -> ServiceResult<Vec<EntityMetadata>> {
        self.record_call(
            "RetrieveMetadataChanges",
            ServiceCall::RetrieveMetadataChanges(query.clone()),
        )?;

        Ok(self
            .entities
            .iter()
            .filter(|metadata| {
                query.conditions.iter().all(|condition| {
                    condition.property_name == "LogicalName"
                        && metadata.logical_name.as_deref() == Some(condition.value.as_str())
                })
            })
            .map(|metadata| project_metadata(metadata, &query))
            .collect())
    }

    async fn retrieve_attribute(
        &self,
        request: RetrieveAttributeRequest,
    ) -> ServiceResult<AttributeMetadata> {
        self.record_call("RetrieveAttribute", ServiceCall::RetrieveAttribute(request.clone()))?;

        self.attributes
            .iter()
            .find(|attribute| {
                attribute.entity_logical_name == request.entity_logical_name
                    && attribute.logical_name == request.logical_name
            })
            .cloned()
            .ok_or_else(|| {
                ServiceFault::with_code(
                    format!(
                        "Could not find attribute {} on entity {}",
                        request.logical_name, request.entity_logical_name
                    ),
                    -2147204733,
                )
            })
    }

    async fn add_to_queue(&self, request: AddToQueueRequest) -> ServiceResult<AddToQueueResponse> {
        self.record_call("AddToQueue", ServiceCall::AddToQueue(request))?;
        Ok(AddToQueueResponse {
            queue_item_id: self.queue_item_id,
        })
    }

    async fn add_user_to_record_team(
        &self,
        request: AddUserToRecordTeamRequest,
    ) -> ServiceResult<AddUserToRecordTeamResponse> {
        self.record_call("AddUserToRecordTeam", ServiceCall::AddUserToRecordTeam(request))?;
        Ok(AddUserToRecordTeamResponse {
            access_team_id: self.access_team_id,
        })
    }
}
