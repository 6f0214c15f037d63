//! `RetrieveOptions`: returns the options of a choice-style attribute as flat
//! `{value, label, ...}` records.
//!
//! | Direction | Type    | Name              | Required |
//! |-----------|---------|-------------------|----------|
//! | in        | String  | EntityLogicalName | yes      |
//! | in        | String  | LogicalName       | yes      |
//! | out       | Options | Options           |          |

use super::{required_string, CustomApiHandler, PluginContext};
use crate::config::HelpersConfig;
use crate::constants::{messages, parameters};
use crate::error::Result;
use crate::metadata::MetadataDescriptor;
use crate::options::normalize;
use crate::types::ParameterCollection;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone)]
pub struct RetrieveOptionsHandler {
    message_name: String,
}

impl RetrieveOptionsHandler {
    pub fn new(config: &HelpersConfig) -> Self {
        Self {
            message_name: messages::qualified(&config.message_prefix, messages::RETRIEVE_OPTIONS),
        }
    }
}

#[async_trait]
impl CustomApiHandler for RetrieveOptionsHandler {
    fn message_name(&self) -> &str {
        &self.message_name
    }

    #[instrument(skip_all, fields(message_name = %self.message_name, correlation_id = %context.correlation_id()))]
    async fn execute(&self, context: &PluginContext) -> Result<ParameterCollection> {
        let input = context.input();
        let entity = required_string(input, &self.message_name, parameters::ENTITY_LOGICAL_NAME)?;
        let attribute = required_string(input, &self.message_name, parameters::LOGICAL_NAME)?;

        debug!(entity = %entity, attribute = %attribute, "Retrieving attribute metadata");
        let metadata = MetadataDescriptor::new(context.service())
            .attribute(entity, attribute)
            .await?;

        let options = normalize(&metadata)?;
        info!(count = options.len(), "RetrieveOptions completed");

        Ok(ParameterCollection::new().with(parameters::OPTIONS, options))
    }
}
