//! Translating error boundary.
//!
//! # Responsibilities
//! - Contain request-time errors per request; never crash the process
//! - Rewrite server errors to a translated, user-facing message
//! - Expose raw error detail only in development
//!
//! # Design Decisions
//! - Installed after every other unit, as the outermost layer, so it
//!   observes errors escaping any of them
//! - Handlers surface failures as [`AppError`], which carries its detail in
//!   a response extension for the boundary to pick up

use std::sync::Arc;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::Router;

use crate::config::schema::BootstrapConfig;
use crate::i18n::Translate;
use crate::templates::TemplateError;

const DEFAULT_ERROR_KEY: &str = "errors.default";

/// A request-time failure raised by a handler.
#[derive(Debug)]
pub struct AppError {
    detail: String,
}

impl AppError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl From<TemplateError> for AppError {
    fn from(err: TemplateError) -> Self {
        Self::new(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(ErrorDetail(self.detail));
        response
    }
}

/// Raw error detail attached to a response for the boundary to read.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

/// Install the error boundary as the outermost layer.
pub fn install(app: Router, translator: Arc<dyn Translate>, config: &BootstrapConfig) -> Router {
    let debug = config.env.is_development();

    app.layer(middleware::from_fn(move |req: Request, next: Next| {
        let translator = translator.clone();
        async move {
            let response = next.run(req).await;
            if !response.status().is_server_error() {
                return response;
            }

            let status = response.status();
            let detail = response
                .extensions()
                .get::<ErrorDetail>()
                .map(|d| d.0.clone());

            tracing::error!(
                status = %status,
                detail = detail.as_deref().unwrap_or(""),
                "Request failed"
            );

            let message = translator.translate(DEFAULT_ERROR_KEY);
            let body = match (debug, detail) {
                (true, Some(detail)) => format!("{message}\n\n{detail}"),
                _ => message,
            };

            (status, body).into_response()
        }
    }))
}
