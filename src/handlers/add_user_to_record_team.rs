//! `AddUserToRecordTeam`: adds a user to the access team that the platform
//! auto-creates for a record from a named team template.
//!
//! | Direction | Type            | Name                    | Required |
//! |-----------|-----------------|-------------------------|----------|
//! | in        | EntityReference | Target (the user)       | yes      |
//! | in        | String          | RecordEntityLogicalName | yes      |
//! | in        | Guid            | RecordId                | yes      |
//! | in        | String          | TeamTemplateName        | yes      |
//! | out       | Guid            | AccessTeamId            |          |
//!
//! Team templates are bound to an entity by object type code, so the template
//! is looked up by name and by the record entity's code together.

use super::{
    required_entity_reference, required_guid, required_string, CustomApiHandler, PluginContext,
};
use crate::config::HelpersConfig;
use crate::constants::{messages, operations, parameters, team_template};
use crate::error::{HelperError, Result};
use crate::metadata::MetadataDescriptor;
use crate::resolver::EntityResolver;
use crate::service::{AddUserToRecordTeamRequest, ConditionExpression};
use crate::types::{EntityReference, ParameterCollection};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone)]
pub struct AddUserToRecordTeamHandler {
    message_name: String,
}

impl AddUserToRecordTeamHandler {
    pub fn new(config: &HelpersConfig) -> Self {
        Self {
            message_name: messages::qualified(
                &config.message_prefix,
                messages::ADD_USER_TO_RECORD_TEAM,
            ),
        }
    }
}

#[async_trait]
impl CustomApiHandler for AddUserToRecordTeamHandler {
    fn message_name(&self) -> &str {
        &self.message_name
    }

    #[instrument(skip_all, fields(message_name = %self.message_name, correlation_id = %context.correlation_id()))]
    async fn execute(&self, context: &PluginContext) -> Result<ParameterCollection> {
        let input = context.input();
        let user = required_entity_reference(input, &self.message_name, parameters::TARGET)?;
        let record_entity =
            required_string(input, &self.message_name, parameters::RECORD_ENTITY_LOGICAL_NAME)?;
        let record_id = required_guid(input, &self.message_name, parameters::RECORD_ID)?;
        let template_name =
            required_string(input, &self.message_name, parameters::TEAM_TEMPLATE_NAME)?;

        let service = context.service();

        let object_type_code = MetadataDescriptor::new(service)
            .object_type_code(record_entity)
            .await?;
        debug!(record_entity = %record_entity, object_type_code, "Object type code resolved");

        let team_template_id = EntityResolver::new(service)
            .resolve_id_by_conditions(
                team_template::ENTITY,
                team_template::ID,
                vec![
                    ConditionExpression::equal(team_template::NAME, template_name),
                    ConditionExpression::equal(team_template::OBJECT_TYPE_CODE, object_type_code),
                ],
            )
            .await?
            .ok_or_else(|| HelperError::TeamTemplateNotFound {
                template_name: template_name.to_string(),
                entity: record_entity.to_string(),
            })?;
        debug!(%team_template_id, "Team template resolved");

        let record = EntityReference::new(record_entity, record_id);
        let request = AddUserToRecordTeamRequest {
            record: record.clone(),
            system_user_id: user.id,
            team_template_id,
        };

        let response = service
            .add_user_to_record_team(request)
            .await
            .map_err(|fault| {
                HelperError::remote(
                    operations::ADD_USER_TO_RECORD_TEAM,
                    format!("user {} on {record} with template '{template_name}'", user.id),
                    fault,
                )
            })?;

        info!(access_team_id = %response.access_team_id, "AddUserToRecordTeam request completed");
        Ok(ParameterCollection::new().with(parameters::ACCESS_TEAM_ID, response.access_team_id))
    }
}
