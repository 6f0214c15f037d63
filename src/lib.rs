#![allow(clippy::doc_markdown)] // Allow technical terms like Dataverse, Picklist in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Dataverse Flow Helpers
//!
//! Custom API handlers that automation flows call to work with a business-data
//! platform by name instead of by identifier.
//!
//! ## Overview
//!
//! Each handler reads typed input parameters, translates human-readable names
//! (queue names, entity logical names, team template names) into identifiers
//! through the platform's remote data service, issues one platform operation and
//! returns typed output parameters.
//!
//! ## Architecture
//!
//! ```text
//! HandlerRegistry
//! ├── AddToQueueHandler            (queue assignment)
//! ├── AddUserToRecordTeamHandler   (access team membership)
//! └── RetrieveOptionsHandler       (option set introspection)
//!         │
//!         ├── EntityResolver       name → id, entity existence
//!         ├── MetadataDescriptor   named entity properties, attribute metadata
//!         └── options::normalize   five metadata shapes → NormalizedOption
//!                 │
//!                 └── OrganizationService (injected remote data service)
//! ```
//!
//! ## Module Organization
//!
//! - [`service`] - Remote data service boundary and its request shapes
//! - [`resolver`] - Name → identifier lookups and entity existence checks
//! - [`metadata`] - Entity and attribute metadata retrieval
//! - [`options`] - Option set normalization
//! - [`handlers`] - Custom API handlers and the dispatch registry
//! - [`types`] - Parameter values and collections
//! - [`config`] - Configuration management
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flow_helpers::config::HelpersConfig;
//! use flow_helpers::handlers::{HandlerRegistry, PluginContext};
//! use flow_helpers::logging::init_structured_logging;
//! use flow_helpers::service::OrganizationService;
//! use flow_helpers::types::ParameterCollection;
//! use std::sync::Arc;
//! use uuid::Uuid;
//!
//! # fn example(service: Arc<dyn OrganizationService>) -> Result<(), Box<dyn std::error::Error>> {
//! let config = HelpersConfig::load()?;
//! init_structured_logging(&config);
//!
//! let registry = HandlerRegistry::with_defaults(&config);
//! let input = ParameterCollection::new()
//!     .with("DestinationQueueName", "Support")
//!     .with("TargetEntityLogicalName", "incident")
//!     .with("TargetId", Uuid::new_v4());
//!
//! let output = registry.dispatch_blocking("sample_AddToQueue", &PluginContext::new(service, input))?;
//! println!("queue item: {:?}", output.guid("QueueItemId")?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod metadata;
pub mod options;
pub mod resolver;
pub mod service;
pub mod types;

pub use config::HelpersConfig;
pub use error::{HelperError, Result};
pub use handlers::{
    AddToQueueHandler, AddUserToRecordTeamHandler, CustomApiHandler, HandlerRegistry,
    PluginContext, RetrieveOptionsHandler,
};
pub use metadata::MetadataDescriptor;
pub use options::{normalize, NormalizedOption, OptionFieldValue};
pub use resolver::EntityResolver;
pub use service::{OrganizationService, ServiceFault};
pub use types::{EntityReference, ParameterCollection, ParameterValue};
