//! # GraphQL Input Types
//!
//! Input object definitions for dashboard queries.

use async_graphql::InputObject;
use launch_domain as domain;

/// Selector values; omitted, null or blank fields mean "all"
#[derive(Debug, Clone, Default, InputObject)]
pub struct FilterSelectionInput {
    /// Booster version to match exactly
    pub booster_version: Option<String>,
    /// Launch site to match exactly
    pub launch_site: Option<String>,
    /// Orbit to match exactly
    pub orbit: Option<String>,
}

impl From<FilterSelectionInput> for domain::FilterSelection {
    fn from(input: FilterSelectionInput) -> Self {
        Self::new(input.booster_version, input.launch_site, input.orbit)
    }
}
