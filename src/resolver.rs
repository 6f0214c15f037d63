//! # Entity Resolver
//!
//! Translates human-facing names into record identifiers and checks that an
//! entity logical name exists before it is used in a request.
//!
//! Lookups are capped at one record. When several records share a name the
//! first one the service returns wins; nothing here tries to disambiguate.

use crate::constants::{metadata_properties, operations};
use crate::error::{HelperError, Result};
use crate::logging::log_lookup;
use crate::service::{
    ConditionExpression, EntityQueryExpression, OrganizationService, QueryExpression,
};
use tracing::{debug, instrument};
use uuid::Uuid;

/// Stateless lookup primitives over a borrowed service handle
#[derive(Clone, Copy)]
pub struct EntityResolver<'a> {
    service: &'a dyn OrganizationService,
}

impl<'a> EntityResolver<'a> {
    pub fn new(service: &'a dyn OrganizationService) -> Self {
        Self { service }
    }

    /// Id of the first `entity` record whose `filter_attribute` equals `name`.
    ///
    /// Only `result_attribute` is requested. Fails with `NotFound` when no
    /// record matches.
    #[instrument(skip(self), level = "debug")]
    pub async fn resolve_id_by_name(
        &self,
        entity: &str,
        filter_attribute: &str,
        result_attribute: &str,
        name: &str,
    ) -> Result<Uuid> {
        let conditions = vec![ConditionExpression::equal(filter_attribute, name)];
        match self
            .resolve_id_by_conditions(entity, result_attribute, conditions)
            .await?
        {
            Some(id) => {
                log_lookup(entity, filter_attribute, name, "resolved");
                Ok(id)
            }
            None => {
                log_lookup(entity, filter_attribute, name, "not_found");
                Err(HelperError::not_found(entity, filter_attribute, name))
            }
        }
    }

    /// Id of the first `entity` record matching every condition, if any
    pub async fn resolve_id_by_conditions(
        &self,
        entity: &str,
        result_attribute: &str,
        conditions: Vec<ConditionExpression>,
    ) -> Result<Option<Uuid>> {
        let query = conditions
            .into_iter()
            .fold(
                QueryExpression::new(entity).columns([result_attribute]),
                QueryExpression::condition,
            )
            .top(1);
        let context = query.describe();

        let results = self
            .service
            .retrieve_multiple(query)
            .await
            .map_err(|fault| HelperError::remote(operations::RETRIEVE_MULTIPLE, &context, fault))?;

        debug!(
            lookup = %context,
            returned = results.entities.len(),
            "Name lookup returned records"
        );

        let Some(record) = results.entities.first() else {
            return Ok(None);
        };

        record
            .get(result_attribute)
            .and_then(|value| value.as_id())
            .map(Some)
            .ok_or_else(|| HelperError::UnexpectedAttributeValue {
                entity: entity.to_string(),
                attribute: result_attribute.to_string(),
            })
    }

    /// Succeeds iff exactly one entity has this logical name.
    ///
    /// Uses a metadata-change query restricted to `LogicalName`, which is
    /// cheaper than fetching full entity metadata.
    #[instrument(skip(self), level = "debug")]
    pub async fn entity_exists(&self, entity: &str) -> Result<()> {
        let query =
            EntityQueryExpression::by_logical_name(entity, [metadata_properties::LOGICAL_NAME]);

        let metadata = self
            .service
            .retrieve_metadata_changes(query)
            .await
            .map_err(|fault| {
                HelperError::remote(
                    operations::RETRIEVE_METADATA_CHANGES,
                    format!("LogicalName = '{entity}'"),
                    fault,
                )
            })?;

        if metadata.len() == 1 {
            Ok(())
        } else {
            debug!(
                entity = %entity,
                returned = metadata.len(),
                "Entity logical name did not resolve to exactly one entity"
            );
            Err(HelperError::invalid_entity_name(entity))
        }
    }
}
