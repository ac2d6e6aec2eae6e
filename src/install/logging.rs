//! Request tracing middleware.
//!
//! Attaches an x-request-id to every request, propagates it to the
//! response, and traces request/response lifecycles. The orchestrator skips
//! this installer entirely when running in a test or ci environment.

use axum::Router;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::schema::BootstrapConfig;

pub fn install(app: Router, config: &BootstrapConfig) -> Router {
    debug_assert!(!config.env.is_quiet());

    // Layering is outermost-last: propagate wraps set wraps trace, so the
    // ID exists before the span is created and still reaches the response.
    app.layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
}
