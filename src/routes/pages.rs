//! Optional static information pages.
//!
//! Registered when the corresponding configuration flag is set; each
//! renders a fixed template with no dynamic data. Render failures are
//! handled by the error boundary.

use std::sync::Arc;

use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::boundary::AppError;
use crate::config::schema::BootstrapConfig;
use crate::templates::Templates;

pub fn install(app: Router, config: &BootstrapConfig, templates: Option<Arc<Templates>>) -> Router {
    let mut app = app;

    if config.get_cookies {
        let templates = templates.clone();
        app = app.route("/cookies", get(move || render_page(templates, "cookies")));
    }

    if config.get_terms {
        let templates = templates.clone();
        app = app.route(
            "/terms-and-conditions",
            get(move || render_page(templates, "terms")),
        );
    }

    app
}

async fn render_page(
    templates: Option<Arc<Templates>>,
    template: &'static str,
) -> Result<Html<String>, AppError> {
    let Some(templates) = templates else {
        return Err(AppError::new(format!(
            "no views directory configured, cannot render {template}"
        )));
    };
    templates.render(template).await.map_err(AppError::from)
}
