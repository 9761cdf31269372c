//! # GraphQL Query Resolver
//!
//! Read operations for the launch dashboard.

use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::context::ApiContext;
use crate::error::{ApiError, ApiResult};
use crate::schema::*;
use launch_domain::FilterSelection;

/// Upper bound on requested histogram buckets
const MAX_HISTOGRAM_BINS: usize = 500;

/// GraphQL Query root
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    // =========================================================================
    // SELECTOR QUERIES
    // =========================================================================

    /// Distinct values offered by each selector, in first-seen order
    async fn selector_options(&self, ctx: &Context<'_>) -> Result<SelectorOptions> {
        let api_ctx = ctx.data::<ApiContext>()?;
        Ok(api_ctx.engine.selector_options().into())
    }

    // =========================================================================
    // DASHBOARD QUERIES
    // =========================================================================

    /// KPIs and every chart for one selection
    ///
    /// All artifacts are derived from the same filtered view. Omitted
    /// selectors mean "all"; an unmatched value yields an empty dashboard.
    async fn dashboard(
        &self,
        ctx: &Context<'_>,
        // Selector values (default: everything)
        selection: Option<FilterSelectionInput>,
        // Histogram bucket count, 1 to 500 (default: server setting)
        bins: Option<i32>,
    ) -> Result<Dashboard> {
        let api_ctx = ctx.data::<ApiContext>()?;
        let selection: FilterSelection = selection.unwrap_or_default().into();
        let bins = bins.map(bin_count).transpose().map_err(|e| e.extend())?;

        tracing::debug!(
            booster_version = ?selection.booster_version,
            launch_site = ?selection.launch_site,
            orbit = ?selection.orbit,
            bins = ?bins,
            "Fetching dashboard"
        );

        let snapshot = api_ctx
            .engine
            .recompute(&selection, bins)
            .map_err(|e| ApiError::from(e).extend())?;

        Ok(snapshot.into())
    }

    // =========================================================================
    // DATASET QUERIES
    // =========================================================================

    /// Summary of the table loaded at startup
    async fn dataset_info(&self, ctx: &Context<'_>) -> Result<DatasetInfo> {
        let api_ctx = ctx.data::<ApiContext>()?;
        Ok(DatasetInfo::new(
            api_ctx.engine.dataset_info(),
            api_ctx.engine.histogram_bins(),
        ))
    }
}

fn bin_count(bins: i32) -> ApiResult<usize> {
    usize::try_from(bins)
        .ok()
        .filter(|b| (1..=MAX_HISTOGRAM_BINS).contains(b))
        .ok_or_else(|| {
            ApiError::InvalidInput(format!(
                "bins must be between 1 and {MAX_HISTOGRAM_BINS}, got {bins}"
            ))
        })
}
