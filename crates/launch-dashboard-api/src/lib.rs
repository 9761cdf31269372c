//! # Launch Dashboard API
//!
//! Interactive dashboard over the SpaceX launch dataset.
//!
//! ## Features
//!
//! - **Selectors**: booster version, launch site and orbit, each with "all"
//! - **KPIs**: total launches, success rate, average payload
//! - **Charts**: outcome pie, two scatters, yearly trend, payload histogram
//! - **Single recompute**: one query returns every artifact for a selection
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Axum HTTP Server                         │
//! │          (Dashboard Page + GraphQL Endpoint + Health)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                async-graphql Schema                         │
//! │                       (QueryRoot)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 ApiContext / DashboardEngine                │
//! │            (filter → aggregate over the base table)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                LaunchTable (loaded once)                    │
//! │                 from HTTP or a local CSV                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod context;
pub mod error;
pub mod resolvers;
pub mod schema;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::Method,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::{Config, DatasetLocation, LogFormat};
pub use context::ApiContext;
pub use resolvers::QueryRoot;

/// GraphQL schema type
pub type ApiSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Dashboard page served at `/`
const DASHBOARD_HTML: &str = include_str!("../static/dashboard.html");

/// Build the GraphQL schema with context
pub fn build_schema(ctx: ApiContext) -> ApiSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(ctx)
        .limit_depth(10)
        .limit_complexity(1000)
        .finish()
}

/// Application state for Axum handlers
#[derive(Clone)]
pub struct AppState {
    pub schema: ApiSchema,
}

/// GraphQL endpoint handler
pub async fn graphql_handler(
    State(state): State<AppState>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// GraphQL Playground HTML
pub async fn graphql_playground() -> impl IntoResponse {
    Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}

/// Interactive dashboard page
pub async fn dashboard_page() -> impl IntoResponse {
    Html(DASHBOARD_HTML)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    "OK"
}

/// Build the Axum router
pub fn build_router(schema: ApiSchema) -> Router {
    let state = AppState { schema };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(dashboard_page))
        .route("/graphql", get(graphql_playground).post(graphql_handler))
        .route("/health", get(health_check))
        // State and middleware
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use launch_analytics::{parse_launch_csv, DashboardEngine, LaunchTable};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const CSV: &str = "\
FlightNumber,Date,BoosterVersion,PayloadMass,Orbit,LaunchSite,Outcome,Flights,Class
1,2010-06-04,F9 v1.0,,LEO,CCAFS SLC 40,None None,1,0
2,2012-05-22,F9 v1.0,525,LEO,CCAFS SLC 40,None None,1,0
3,2013-03-01,F9 v1.1,677,ISS,CCAFS SLC 40,True Ocean,1,1
4,2013-09-29,F9 v1.1,500,PO,VAFB SLC 4E,False Ocean,1,0
5,2016-04-08,F9 FT,3136,LEO,CCAFS SLC 40,True ASDS,1,1
6,2017-02-19,F9 FT,2490,ISS,KSC LC 39A,True RTLS,1,1
";

    fn schema() -> ApiSchema {
        let records = parse_launch_csv(CSV.as_bytes()).unwrap();
        let engine = DashboardEngine::new(LaunchTable::new(records)).with_histogram_bins(4);
        build_schema(ApiContext::new(engine))
    }

    async fn run(query: &str) -> Value {
        let response = schema().execute(query).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        response.data.into_json().unwrap()
    }

    #[tokio::test]
    async fn test_selector_options_query() {
        let data = run("{ selectorOptions { boosterVersions launchSites orbits } }").await;
        assert_eq!(
            data["selectorOptions"]["boosterVersions"],
            json!(["F9 v1.0", "F9 v1.1", "F9 FT"])
        );
        assert_eq!(
            data["selectorOptions"]["launchSites"],
            json!(["CCAFS SLC 40", "VAFB SLC 4E", "KSC LC 39A"])
        );
    }

    #[tokio::test]
    async fn test_unfiltered_dashboard() {
        let data = run(
            "{ dashboard {
                selection { unfiltered }
                kpis { totalLaunches successRatePct totalLaunchesLabel successRateLabel avgPayloadLabel }
                outcomeChart { meta { kind title } slices { outcome count } }
                payloadScatter { points { flightNumber payloadMassKg landingOutcome } }
                launchTrend { points { year launches } }
                payloadHistogram { binCount buckets { count } }
            } }",
        )
        .await;

        let dashboard = &data["dashboard"];
        assert_eq!(dashboard["selection"]["unfiltered"], json!(true));
        assert_eq!(dashboard["kpis"]["totalLaunches"], json!(6));
        assert_eq!(dashboard["kpis"]["totalLaunchesLabel"], json!("Total Launches: 6"));
        assert_eq!(dashboard["kpis"]["successRateLabel"], json!("Success Rate: 50.0%"));
        assert_eq!(dashboard["kpis"]["avgPayloadLabel"], json!("Avg Payload: 1465.6 kg"));
        assert_eq!(dashboard["outcomeChart"]["meta"]["kind"], json!("PIE"));
        assert_eq!(
            dashboard["outcomeChart"]["slices"][0],
            json!({ "outcome": "None None", "count": 2 })
        );
        assert_eq!(dashboard["payloadScatter"]["points"][0]["payloadMassKg"], Value::Null);
        assert_eq!(
            dashboard["payloadScatter"]["points"][4]["landingOutcome"],
            json!("SUCCESS")
        );
        assert_eq!(dashboard["launchTrend"]["points"].as_array().unwrap().len(), 5);
        assert_eq!(dashboard["payloadHistogram"]["binCount"], json!(4));
        let binned: u64 = dashboard["payloadHistogram"]["buckets"]
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["count"].as_u64().unwrap())
            .sum();
        assert_eq!(binned, 5);
    }

    #[tokio::test]
    async fn test_filtered_dashboard() {
        let data = run(
            r#"{ dashboard(selection: { boosterVersion: "F9 FT", launchSite: "" }, bins: 2) {
                selection { boosterVersion launchSite unfiltered }
                kpis { totalLaunches successRatePct avgPayloadKg }
                siteScatter { points { launchSite } }
                payloadHistogram { buckets { lower upper count } }
            } }"#,
        )
        .await;

        let dashboard = &data["dashboard"];
        assert_eq!(dashboard["selection"]["boosterVersion"], json!("F9 FT"));
        assert_eq!(dashboard["selection"]["launchSite"], Value::Null);
        assert_eq!(dashboard["selection"]["unfiltered"], json!(false));
        assert_eq!(dashboard["kpis"]["totalLaunches"], json!(2));
        assert_eq!(dashboard["kpis"]["successRatePct"], json!(100.0));
        assert_eq!(dashboard["kpis"]["avgPayloadKg"], json!(2813.0));
        assert_eq!(dashboard["siteScatter"]["points"].as_array().unwrap().len(), 2);
        assert_eq!(
            dashboard["payloadHistogram"]["buckets"].as_array().unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn test_unmatched_selection_is_empty() {
        let data = run(
            r#"{ dashboard(selection: { orbit: "HEO" }) {
                kpis { totalLaunches successRateLabel avgPayloadLabel avgPayloadKg }
                outcomeChart { slices { count } }
                payloadHistogram { buckets { count } }
            } }"#,
        )
        .await;

        let dashboard = &data["dashboard"];
        assert_eq!(dashboard["kpis"]["totalLaunches"], json!(0));
        assert_eq!(dashboard["kpis"]["successRateLabel"], json!("Success Rate: 0.0%"));
        assert_eq!(dashboard["kpis"]["avgPayloadLabel"], json!("N/A"));
        assert_eq!(dashboard["kpis"]["avgPayloadKg"], Value::Null);
        assert_eq!(dashboard["outcomeChart"]["slices"], json!([]));
        assert_eq!(dashboard["payloadHistogram"]["buckets"], json!([]));
    }

    #[tokio::test]
    async fn test_out_of_range_bins_rejected() {
        for bins in [0, -4, 501] {
            let query = format!("{{ dashboard(bins: {bins}) {{ kpis {{ totalLaunches }} }} }}");
            let response = schema().execute(query).await;

            assert_eq!(response.errors.len(), 1, "bins = {bins}");
            let ext = response.errors[0].extensions.as_ref().unwrap();
            assert_eq!(
                ext.get("code"),
                Some(&async_graphql::Value::from("INVALID_INPUT"))
            );
            assert_eq!(ext.get("status"), Some(&async_graphql::Value::from(400)));
        }
    }

    #[tokio::test]
    async fn test_dataset_info_query() {
        let data = run(
            "{ datasetInfo { rowCount undatedRows missingPayloadRows defaultHistogramBins } }",
        )
        .await;
        assert_eq!(
            data["datasetInfo"],
            json!({
                "rowCount": 6,
                "undatedRows": 0,
                "missingPayloadRows": 1,
                "defaultHistogramBins": 4
            })
        );
    }

    #[tokio::test]
    async fn test_router_serves_page_and_health() {
        let app = build_router(schema());

        let page = app
            .clone()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(page.status(), StatusCode::OK);
        let body = to_bytes(page.into_body(), usize::MAX).await.unwrap();
        let page = String::from_utf8_lossy(&body);
        assert!(page.contains("SpaceX Launch Records Dashboard"));
        // Both the render and the error path of a refresh drop stale tickets
        assert_eq!(page.matches("if (ticket !== pending) return;").count(), 2);

        let health = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(health.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_router_answers_graphql_post() {
        let app = build_router(schema());
        let request = Request::post("/graphql")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({ "query": "{ dashboard { kpis { totalLaunches } } }" }).to_string(),
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"]["dashboard"]["kpis"]["totalLaunches"], json!(6));
    }
}
