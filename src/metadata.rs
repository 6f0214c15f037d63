//! # Metadata Descriptor
//!
//! Fetches a named subset of entity metadata properties, and the metadata of a
//! single attribute for option retrieval.

use crate::constants::{metadata_properties, operations};
use crate::error::{HelperError, Result};
use crate::service::{
    AttributeMetadata, EntityMetadata, EntityQueryExpression, OrganizationService,
    RetrieveAttributeRequest,
};
use tracing::{debug, instrument};

#[derive(Clone, Copy)]
pub struct MetadataDescriptor<'a> {
    service: &'a dyn OrganizationService,
}

impl<'a> MetadataDescriptor<'a> {
    pub fn new(service: &'a dyn OrganizationService) -> Self {
        Self { service }
    }

    /// Metadata for `entity` with only `properties` populated.
    ///
    /// Fails with `InvalidEntityName` unless exactly one entity matches.
    #[instrument(skip(self), level = "debug")]
    pub async fn entity_properties(
        &self,
        entity: &str,
        properties: &[&str],
    ) -> Result<EntityMetadata> {
        let query = EntityQueryExpression::by_logical_name(entity, properties.iter().copied());

        let mut metadata = self
            .service
            .retrieve_metadata_changes(query)
            .await
            .map_err(|fault| {
                HelperError::remote(
                    operations::RETRIEVE_METADATA_CHANGES,
                    format!("LogicalName = '{entity}', properties [{}]", properties.join(", ")),
                    fault,
                )
            })?;

        if metadata.len() != 1 {
            debug!(
                entity = %entity,
                returned = metadata.len(),
                "Entity metadata query did not return exactly one entity"
            );
            return Err(HelperError::invalid_entity_name(entity));
        }
        Ok(metadata.remove(0))
    }

    /// Object type code binding team templates to `entity`
    pub async fn object_type_code(&self, entity: &str) -> Result<i32> {
        let metadata = self
            .entity_properties(entity, &[metadata_properties::OBJECT_TYPE_CODE])
            .await?;

        metadata
            .object_type_code
            .ok_or_else(|| HelperError::MissingMetadataProperty {
                entity: entity.to_string(),
                property: metadata_properties::OBJECT_TYPE_CODE.to_string(),
            })
    }

    /// Metadata of one attribute, including its option set if it has one
    #[instrument(skip(self), level = "debug")]
    pub async fn attribute(&self, entity: &str, attribute: &str) -> Result<AttributeMetadata> {
        let request = RetrieveAttributeRequest {
            entity_logical_name: entity.to_string(),
            logical_name: attribute.to_string(),
        };

        self.service
            .retrieve_attribute(request)
            .await
            .map_err(|fault| {
                HelperError::remote(
                    operations::RETRIEVE_ATTRIBUTE,
                    format!("{entity}.{attribute}"),
                    fault,
                )
            })
    }
}
