//! # Platform Constants
//!
//! Message names, parameter names and the platform entity/attribute names that
//! the handlers look records up by.

/// Custom API operations, without the publisher prefix
pub mod messages {
    pub const ADD_TO_QUEUE: &str = "AddToQueue";
    pub const ADD_USER_TO_RECORD_TEAM: &str = "AddUserToRecordTeam";
    pub const RETRIEVE_OPTIONS: &str = "RetrieveOptions";

    /// Full message name as registered with the host, e.g. `sample_AddToQueue`
    pub fn qualified(prefix: &str, operation: &str) -> String {
        format!("{prefix}_{operation}")
    }
}

/// Input and output parameter names exchanged with the host
pub mod parameters {
    // AddToQueue
    pub const SOURCE_QUEUE_NAME: &str = "SourceQueueName";
    pub const TARGET_ENTITY_LOGICAL_NAME: &str = "TargetEntityLogicalName";
    pub const TARGET_ID: &str = "TargetId";
    pub const DESTINATION_QUEUE_NAME: &str = "DestinationQueueName";
    pub const QUEUE_ITEM_ID: &str = "QueueItemId";

    // AddUserToRecordTeam
    pub const TARGET: &str = "Target";
    pub const RECORD_ENTITY_LOGICAL_NAME: &str = "RecordEntityLogicalName";
    pub const RECORD_ID: &str = "RecordId";
    pub const TEAM_TEMPLATE_NAME: &str = "TeamTemplateName";
    pub const ACCESS_TEAM_ID: &str = "AccessTeamId";

    // RetrieveOptions
    pub const ENTITY_LOGICAL_NAME: &str = "EntityLogicalName";
    pub const LOGICAL_NAME: &str = "LogicalName";
    pub const OPTIONS: &str = "Options";
}

/// Queue table and the columns used to resolve a queue by name
pub mod queue {
    pub const ENTITY: &str = "queue";
    pub const NAME: &str = "name";
    pub const ID: &str = "queueid";
}

/// Team template table; templates are bound to an entity by object type code
pub mod team_template {
    pub const ENTITY: &str = "teamtemplate";
    pub const NAME: &str = "teamtemplatename";
    pub const OBJECT_TYPE_CODE: &str = "objecttypecode";
    pub const ID: &str = "teamtemplateid";
}

/// Entity metadata property names accepted in a property allowlist
pub mod metadata_properties {
    pub const LOGICAL_NAME: &str = "LogicalName";
    pub const OBJECT_TYPE_CODE: &str = "ObjectTypeCode";
    pub const DISPLAY_NAME: &str = "DisplayName";
    pub const PRIMARY_ID_ATTRIBUTE: &str = "PrimaryIdAttribute";
    pub const PRIMARY_NAME_ATTRIBUTE: &str = "PrimaryNameAttribute";
}

/// Keys of the shape-specific fields added to normalized options
pub mod option_fields {
    pub const VALUE: &str = "value";
    pub const LABEL: &str = "label";
    pub const DEFAULT_STATUS: &str = "defaultstatus";
    pub const INVARIANT_NAME: &str = "invariantname";
    pub const STATE: &str = "state";
}

/// Remote operation names used when wrapping service faults
pub mod operations {
    pub const RETRIEVE_MULTIPLE: &str = "RetrieveMultiple";
    pub const RETRIEVE_METADATA_CHANGES: &str = "RetrieveMetadataChanges";
    pub const RETRIEVE_ATTRIBUTE: &str = "RetrieveAttribute";
    pub const ADD_TO_QUEUE: &str = "AddToQueue";
    pub const ADD_USER_TO_RECORD_TEAM: &str = "AddUserToRecordTeam";
}

/// Default publisher prefix for message names
pub const DEFAULT_MESSAGE_PREFIX: &str = "sample";
