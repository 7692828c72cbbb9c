//! HTTP routes for workbench endpoints.

use axum::routing::{delete, get, post, put};
use axum::Router;

use super::handlers::{
    add_evidence, add_hypothesis, clear_rating, create_analysis, delete_analysis, export_report,
    get_analysis, get_report, list_analyses, remove_evidence, remove_hypothesis, set_rating,
    WorkbenchAppState,
};

/// Creates the workbench router with all routes.
pub fn workbench_routes(state: WorkbenchAppState) -> Router {
    Router::new()
        .route("/api/analyses", post(create_analysis).get(list_analyses))
        .route(
            "/api/analyses/:analysis_id",
            get(get_analysis).delete(delete_analysis),
        )
        .route("/api/analyses/:analysis_id/hypotheses", post(add_hypothesis))
        .route(
            "/api/analyses/:analysis_id/hypotheses/:hypothesis_id",
            delete(remove_hypothesis),
        )
        .route("/api/analyses/:analysis_id/evidence", post(add_evidence))
        .route(
            "/api/analyses/:analysis_id/evidence/:evidence_id",
            delete(remove_evidence),
        )
        .route("/api/analyses/:analysis_id/ratings", put(set_rating))
        .route(
            "/api/analyses/:analysis_id/ratings/:evidence_id/:hypothesis_id",
            delete(clear_rating),
        )
        .route("/api/analyses/:analysis_id/report", get(get_report))
        .route(
            "/api/analyses/:analysis_id/report/export",
            get(export_report),
        )
        .with_state(state)
}
