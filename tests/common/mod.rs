#![allow(dead_code)]

pub mod builders;
pub mod mock_service;
pub mod strategies;

pub use builders::*;
pub use mock_service::*;

use flow_helpers::handlers::PluginContext;
use flow_helpers::types::ParameterCollection;
use std::sync::Arc;

/// Invocation context backed by a shared mock, so the test keeps a handle to it
pub fn context(service: &Arc<MockOrganizationService>, input: ParameterCollection) -> PluginContext {
    PluginContext::new(service.clone(), input)
}
