//! Construction-time behavior of the bootstrap orchestrator.

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use form_bootstrap::{
    Bootstrap, BootstrapError, ConfigError, RouteComposer, RouteContext,
};
use form_bootstrap::routes::StepRouter;
use tower::ServiceExt;

mod common;

#[test]
fn missing_routes_fails_before_anything_installs() {
    let err = Bootstrap::builder()
        .options(common::bare_overlay(None))
        .build()
        .unwrap_err();

    assert!(matches!(
        err,
        BootstrapError::Config(ConfigError::RoutesRequired)
    ));
    assert_eq!(
        err.to_string(),
        "Must be called with a list of routes"
    );
}

#[test]
fn empty_routes_fails() {
    let err = Bootstrap::builder()
        .options(common::bare_overlay(Some(vec![])))
        .build()
        .unwrap_err();

    assert_eq!(err.to_string(), "Must be called with a list of routes");
}

#[test]
fn route_without_steps_identifies_the_route() {
    let mut apply = common::route("/apply", &[]);
    apply.name = Some("apply".into());
    let routes = vec![common::route("/ok", &["a"]), apply];

    let err = Bootstrap::builder()
        .options(common::bare_overlay(Some(routes)))
        .build()
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("apply"), "got: {message}");
    assert!(message.contains("steps"), "got: {message}");
}

/// Composer that records the order it was asked to compose routes in.
struct Recording {
    inner: StepRouter,
    seen: Arc<Mutex<Vec<String>>>,
}

impl RouteComposer for Recording {
    fn compose(&self, ctx: &RouteContext) -> Result<Router, ConfigError> {
        self.seen.lock().unwrap().push(ctx.route.base_url.clone());
        self.inner.compose(ctx)
    }
}

#[test]
fn routes_compose_once_each_in_declaration_order() {
    let site = common::TestSite::new().with_views(&["a", "b", "c"]);
    let routes = vec![
        common::route("/first", &["a"]),
        common::route("/second", &["b"]),
        common::route("/third", &["c"]),
    ];

    let seen = Arc::new(Mutex::new(Vec::new()));
    let bootstrap = Bootstrap::builder()
        .options(site.overlay(routes))
        .composer(Arc::new(Recording {
            inner: StepRouter,
            seen: seen.clone(),
        }))
        .build()
        .unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec!["/first", "/second", "/third"]
    );
    assert_eq!(
        bootstrap.installed_routes(),
        ["/first", "/second", "/third"]
    );
}

#[test]
fn logger_skipped_in_test_and_ci() {
    for env in [form_bootstrap::Environment::Test, form_bootstrap::Environment::Ci] {
        let mut overlay = common::bare_overlay(Some(vec![common::route("/apply", &["a"])]));
        overlay.env = Some(env);

        let bootstrap = Bootstrap::builder().options(overlay).build().unwrap();
        assert!(
            !bootstrap.installed_capabilities().contains(&"logger"),
            "logger must not install in {env:?}"
        );
    }
}

#[test]
fn logger_installed_outside_quiet_environments() {
    let mut overlay = common::bare_overlay(Some(vec![common::route("/apply", &["a"])]));
    overlay.env = Some(form_bootstrap::Environment::Production);

    let bootstrap = Bootstrap::builder().options(overlay).build().unwrap();
    assert!(bootstrap.installed_capabilities().contains(&"logger"));
    assert!(bootstrap.installed_capabilities().contains(&"errors"));
}

#[tokio::test]
async fn handler_usable_without_a_socket() {
    let site = common::TestSite::new().with_views(&["start"]);
    let mut overlay = site.overlay(vec![common::route("/apply", &["start"])]);
    overlay.start = Some(false);

    let mut bootstrap = Bootstrap::builder().options(overlay).build().unwrap();
    bootstrap.start().await.unwrap();
    assert!(bootstrap.local_addr().is_none());

    // The composed application still answers requests when driven directly.
    let response = bootstrap
        .handler()
        .oneshot(
            Request::builder()
                .uri("/apply/start")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn entry_redirects_to_first_step() {
    let site = common::TestSite::new().with_views(&["start", "details"]);
    let overlay = site.overlay(vec![common::route("/apply", &["start", "details"])]);

    let bootstrap = Bootstrap::builder().options(overlay).build().unwrap();
    let response = bootstrap
        .handler()
        .oneshot(Request::builder().uri("/apply").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get("location").unwrap().to_str().unwrap(),
        "/apply/start"
    );
}

#[tokio::test]
async fn unreadable_views_directory_aborts_bootstrap() {
    let mut overlay = common::bare_overlay(Some(vec![common::route("/apply", &["a"])]));
    overlay.caller = Some("/nonexistent".into());
    overlay.views = Some("views".into());

    let err = Bootstrap::builder().options(overlay).build().unwrap_err();
    assert!(matches!(
        err,
        BootstrapError::Config(ConfigError::ViewsNotFound { .. })
    ));
}

#[tokio::test]
async fn static_pages_registered_when_requested() {
    let site = common::TestSite::new().with_views(&["start", "cookies", "terms"]);
    let mut overlay = site.overlay(vec![common::route("/apply", &["start"])]);
    overlay.get_cookies = Some(true);
    overlay.get_terms = Some(true);

    let bootstrap = Bootstrap::builder().options(overlay).build().unwrap();

    for (path, marker) in [("/cookies", "cookies"), ("/terms-and-conditions", "terms")] {
        let response = bootstrap
            .handler()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        assert!(String::from_utf8_lossy(&body).contains(marker));
    }
}

#[tokio::test]
async fn boundary_translates_render_failures() {
    // Views directory exists but the step's template file does not, so the
    // handler fails and the boundary takes over.
    let site = common::TestSite::new()
        .with_views(&[])
        .with_error_translations(r#"{"default": "Something went wrong"}"#);
    let mut overlay = site.overlay(vec![common::route("/apply", &["missing"])]);
    overlay.translations = Some("translations".into());

    let bootstrap = Bootstrap::builder().options(overlay).build().unwrap();
    let response = bootstrap
        .handler()
        .oneshot(
            Request::builder()
                .uri("/apply/missing")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("Something went wrong"), "got: {body}");
    // Raw detail is withheld outside development.
    assert!(!body.contains("not found"), "got: {body}");
}

#[tokio::test]
async fn development_mode_exposes_error_detail() {
    let site = common::TestSite::new().with_views(&[]);
    let mut overlay = site.overlay(vec![common::route("/apply", &["missing"])]);
    overlay.env = Some(form_bootstrap::Environment::Development);

    let bootstrap = Bootstrap::builder().options(overlay).build().unwrap();
    let response = bootstrap
        .handler()
        .oneshot(
            Request::builder()
                .uri("/apply/missing")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    assert!(String::from_utf8_lossy(&body).contains("not found"));
}
