//! # API Context
//!
//! Application state shared by the GraphQL resolvers.

use std::sync::Arc;

use launch_analytics::DashboardEngine;

/// Application context shared across all GraphQL resolvers
#[derive(Debug, Clone)]
pub struct ApiContext {
    /// Filter-aggregate engine over the table loaded at startup
    pub engine: Arc<DashboardEngine>,
}

impl ApiContext {
    /// Wrap an engine for sharing across requests
    pub fn new(engine: DashboardEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
