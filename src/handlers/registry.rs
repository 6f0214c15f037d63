//! # Handler Registry
//!
//! Maps registered message names to their handlers and runs one invocation,
//! logging its start, completion and failure.
//!
//! ```rust,no_run
//! use flow_helpers::config::HelpersConfig;
//! use flow_helpers::handlers::{HandlerRegistry, PluginContext};
//! use flow_helpers::service::OrganizationService;
//! use flow_helpers::types::ParameterCollection;
//! use std::sync::Arc;
//!
//! # async fn example(service: Arc<dyn OrganizationService>) -> Result<(), Box<dyn std::error::Error>> {
//! let registry = HandlerRegistry::with_defaults(&HelpersConfig::default());
//!
//! let input = ParameterCollection::new()
//!     .with("EntityLogicalName", "contact")
//!     .with("LogicalName", "statuscode");
//! let output = registry
//!     .dispatch("sample_RetrieveOptions", &PluginContext::new(service, input))
//!     .await?;
//! # Ok(())
//! # }
//! ```

use super::{
    AddToQueueHandler, AddUserToRecordTeamHandler, CustomApiHandler, PluginContext,
    RetrieveOptionsHandler,
};
use crate::config::HelpersConfig;
use crate::error::{HelperError, Result};
use crate::logging::{log_error, log_handler_operation};
use crate::types::ParameterCollection;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Message name → handler lookup
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn CustomApiHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the three built-in handlers
    pub fn with_defaults(config: &HelpersConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(AddToQueueHandler::new(config)));
        registry.register(Arc::new(AddUserToRecordTeamHandler::new(config)));
        registry.register(Arc::new(RetrieveOptionsHandler::new(config)));
        registry
    }

    /// Register a handler under its message name, replacing any previous one
    pub fn register(&mut self, handler: Arc<dyn CustomApiHandler>) {
        let message_name = handler.message_name().to_string();
        debug!(message_name = %message_name, "Registering custom API handler");
        self.handlers.insert(message_name, handler);
    }

    pub fn get(&self, message_name: &str) -> Option<Arc<dyn CustomApiHandler>> {
        self.handlers.get(message_name).cloned()
    }

    /// Registered message names, sorted
    pub fn message_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Run the handler registered for `message_name`
    pub async fn dispatch(
        &self,
        message_name: &str,
        context: &PluginContext,
    ) -> Result<ParameterCollection> {
        let correlation_id = context.correlation_id().to_string();

        let Some(handler) = self.handlers.get(message_name) else {
            let err = HelperError::UnknownMessage {
                message_name: message_name.to_string(),
            };
            log_error("handler_registry", "dispatch", &err.to_string(), Some(&correlation_id));
            return Err(err);
        };

        log_handler_operation(message_name, &correlation_id, "started", None);
        match handler.execute(context).await {
            Ok(output) => {
                log_handler_operation(message_name, &correlation_id, "completed", None);
                Ok(output)
            }
            Err(err) => {
                log_error(message_name, "execute", &err.to_string(), Some(&correlation_id));
                log_handler_operation(message_name, &correlation_id, "failed", None);
                Err(err)
            }
        }
    }

    /// Blocking entry point for hosts that call handlers synchronously.
    ///
    /// Builds a current-thread runtime for the single invocation; must not be
    /// called from inside an async runtime.
    pub fn dispatch_blocking(
        &self,
        message_name: &str,
        context: &PluginContext,
    ) -> Result<ParameterCollection> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| HelperError::Runtime(format!("failed to build runtime: {e}")))?;
        runtime.block_on(self.dispatch(message_name, context))
    }
}
