//! Default route composer.
//!
//! Mounts each route as: a redirect from the route's base URL to its first
//! step, plus one GET handler per step rendering the step's template. Step
//! execution semantics (validation, persistence, branching) belong to a
//! richer composer supplied by the embedder.

use std::sync::Arc;

use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::Router;

use crate::boundary::AppError;
use crate::error::ConfigError;
use crate::routes::{RouteComposer, RouteContext};
use crate::templates::Templates;

/// Composes one router per route from its ordered step list.
#[derive(Debug, Default)]
pub struct StepRouter;

impl RouteComposer for StepRouter {
    fn compose(&self, ctx: &RouteContext) -> Result<Router, ConfigError> {
        // Per-route views overrides get their own registry, validated here,
        // at composition time.
        let templates = Templates::from_config(&ctx.config)?;

        let base = &ctx.route.base_url;
        let mut router = Router::new();

        if let Some(first) = ctx.route.steps.first() {
            let target = step_path(base, &first.name);
            router = router.route(
                entry_path(base).as_str(),
                get(move || async move { Redirect::to(&target) }),
            );
        }

        for step in &ctx.route.steps {
            let templates = templates.clone();
            let template = step.template_name().to_string();
            router = router.route(
                step_path(base, &step.name).as_str(),
                get(move || render_step(templates, template)),
            );
        }

        tracing::debug!(
            base_url = %base,
            steps = ctx.route.steps.len(),
            "Composed route pipeline"
        );

        Ok(router)
    }
}

async fn render_step(
    templates: Option<Arc<Templates>>,
    template: String,
) -> Result<Html<String>, AppError> {
    let Some(templates) = templates else {
        return Err(AppError::new(format!(
            "no views directory configured, cannot render {template}"
        )));
    };
    templates.render(&template).await.map_err(AppError::from)
}

fn entry_path(base: &str) -> String {
    let trimmed = base.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

fn step_path(base: &str, step: &str) -> String {
    format!("{}/{step}", base.trim_end_matches('/'))
}
