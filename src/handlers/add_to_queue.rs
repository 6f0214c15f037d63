//! `AddToQueue`: places a record into a queue named by the caller, optionally
//! moving it out of a named source queue.
//!
//! | Direction | Type   | Name                    | Required |
//! |-----------|--------|-------------------------|----------|
//! | in        | String | SourceQueueName         | no       |
//! | in        | String | TargetEntityLogicalName | yes      |
//! | in        | Guid   | TargetId                | yes      |
//! | in        | String | DestinationQueueName    | yes      |
//! | out       | Guid   | QueueItemId             |          |

use super::{optional_string, required_guid, required_string, CustomApiHandler, PluginContext};
use crate::config::HelpersConfig;
use crate::constants::{messages, operations, parameters, queue};
use crate::error::{HelperError, Result};
use crate::resolver::EntityResolver;
use crate::service::AddToQueueRequest;
use crate::types::{EntityReference, ParameterCollection};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone)]
pub struct AddToQueueHandler {
    message_name: String,
    verify_target_entity: bool,
}

impl AddToQueueHandler {
    pub fn new(config: &HelpersConfig) -> Self {
        Self {
            message_name: messages::qualified(&config.message_prefix, messages::ADD_TO_QUEUE),
            verify_target_entity: config.verify_target_entity,
        }
    }
}

#[async_trait]
impl CustomApiHandler for AddToQueueHandler {
    fn message_name(&self) -> &str {
        &self.message_name
    }

    #[instrument(skip_all, fields(message_name = %self.message_name, correlation_id = %context.correlation_id()))]
    async fn execute(&self, context: &PluginContext) -> Result<ParameterCollection> {
        let input = context.input();
        let destination_queue_name =
            required_string(input, &self.message_name, parameters::DESTINATION_QUEUE_NAME)?;
        let target_entity =
            required_string(input, &self.message_name, parameters::TARGET_ENTITY_LOGICAL_NAME)?;
        let target_id = required_guid(input, &self.message_name, parameters::TARGET_ID)?;
        let source_queue_name = optional_string(input, parameters::SOURCE_QUEUE_NAME)?;

        let service = context.service();
        let resolver = EntityResolver::new(service);

        if self.verify_target_entity {
            resolver.entity_exists(target_entity).await.inspect_err(|_| {
                warn!(target_entity = %target_entity, "Not a valid entity logical name");
            })?;
            debug!(target_entity = %target_entity, "Target entity logical name verified");
        }

        let destination_queue_id = resolver
            .resolve_id_by_name(queue::ENTITY, queue::NAME, queue::ID, destination_queue_name)
            .await
            .inspect_err(|_| {
                warn!(queue_name = %destination_queue_name, "No destination queue with this name");
            })?;
        debug!(%destination_queue_id, "Destination queue resolved");

        let source_queue_id = match source_queue_name {
            Some(source_queue_name) => {
                let id = resolver
                    .resolve_id_by_name(queue::ENTITY, queue::NAME, queue::ID, source_queue_name)
                    .await
                    .inspect_err(|_| {
                        warn!(queue_name = %source_queue_name, "No source queue with this name");
                    })?;
                debug!(source_queue_id = %id, "Source queue resolved");
                Some(id)
            }
            None => None,
        };

        let target = EntityReference::new(target_entity, target_id);
        let request = AddToQueueRequest {
            destination_queue_id,
            source_queue_id,
            target: target.clone(),
        };

        let response = service.add_to_queue(request).await.map_err(|fault| {
            HelperError::remote(
                operations::ADD_TO_QUEUE,
                format!("{target} into queue '{destination_queue_name}'"),
                fault,
            )
        })?;

        info!(queue_item_id = %response.queue_item_id, "AddToQueue request completed");
        Ok(ParameterCollection::new().with(parameters::QUEUE_ITEM_ID, response.queue_item_id))
    }
}
