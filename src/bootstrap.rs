//! Bootstrap orchestrator.
//!
//! # Responsibilities
//! - Resolve the layered configuration once, at construction
//! - Validate it before anything is installed
//! - Compose one middleware unit per declared route, in declaration order
//! - Install cross-cutting capabilities in a fixed sequence
//! - Install the translating error boundary outermost, last
//! - Own the server lifecycle: start binds a transport, stop releases it
//!
//! # Design Decisions
//! - Construction errors abort the whole bootstrap; a partially wired
//!   application never listens
//! - Everything up to `start` is synchronous; the only suspension point is
//!   awaiting the transport's listen acknowledgement
//! - Each builder produces its own application instance; no state is shared
//!   across bootstrap invocations

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;

use crate::boundary;
use crate::config::overlay::{self, ConfigOverlay};
use crate::config::schema::BootstrapConfig;
use crate::config::validation;
use crate::error::{BootstrapError, LifecycleError};
use crate::i18n::{Translate, Translations};
use crate::install::{logging, sessions, settings, static_assets};
use crate::lifecycle::transport;
use crate::lifecycle::ServerState;
use crate::routes::{pages, RouteComposer, RouteContext, StepRouter};
use crate::templates::Templates;

const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Build and start a service in one call.
///
/// Equivalent to `Bootstrap::builder().options(options).build()` followed by
/// `start()`; the returned handle is already listening unless the options
/// disabled starting.
pub async fn bootstrap(options: ConfigOverlay) -> Result<Bootstrap, BootstrapError> {
    let mut bootstrap = Bootstrap::builder().options(options).build()?;
    bootstrap.start().await?;
    Ok(bootstrap)
}

/// A bootstrapped application: the composed router plus the server handle.
#[derive(Debug)]
pub struct Bootstrap {
    options: ConfigOverlay,
    config: BootstrapConfig,
    app: Router,
    server: ServerState,
    installed: Vec<&'static str>,
    installed_routes: Vec<String>,
}

impl Bootstrap {
    pub fn builder() -> BootstrapBuilder {
        BootstrapBuilder {
            options: ConfigOverlay::default(),
            composer: Arc::new(StepRouter),
            translator: None,
            extra: Vec::new(),
        }
    }

    /// The resolved base configuration.
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// A clone of the composed application router, usable without a bound
    /// transport (embedding, `tower::ServiceExt::oneshot` in tests).
    pub fn handler(&self) -> Router {
        self.app.clone()
    }

    /// Names of the capabilities installed at construction, in attachment
    /// order (innermost first).
    pub fn installed_capabilities(&self) -> &[&'static str] {
        &self.installed
    }

    /// Labels of the installed routes, in declaration order.
    pub fn installed_routes(&self) -> &[String] {
        &self.installed_routes
    }

    /// Address the transport is listening on, if any.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.local_addr()
    }

    pub fn is_listening(&self) -> bool {
        self.server.is_listening()
    }

    /// Start the server with no per-start overrides.
    pub async fn start(&mut self) -> Result<(), LifecycleError> {
        self.start_with(ConfigOverlay::default()).await
    }

    /// Start the server.
    ///
    /// Per-start overrides only take effect when the base configuration
    /// never chose a protocol; in that case the configuration is re-resolved
    /// from (options, overrides) so the transport, host and port can be
    /// bound late. When the resolved configuration disables starting, this
    /// returns immediately without binding a socket and the state stays
    /// `Unbound`.
    pub async fn start_with(&mut self, overrides: ConfigOverlay) -> Result<(), LifecycleError> {
        match self.server {
            ServerState::Listening { .. } => return Err(LifecycleError::AlreadyListening),
            ServerState::Closed => return Err(LifecycleError::Closed),
            ServerState::Unbound => {}
        }

        let config = if self.config.protocol.is_none() {
            overlay::resolve([&self.options, &overrides])
        } else {
            self.config.clone()
        };

        if !config.start {
            tracing::debug!("Start disabled; no transport bound");
            return Ok(());
        }

        let bound = transport::bind(&config, self.app.clone()).await?;
        self.server = ServerState::Listening {
            addr: bound.addr,
            handle: bound.handle,
            task: bound.task,
        };
        Ok(())
    }

    /// Release the bound transport.
    ///
    /// Errors when called before a successful `start`; calling it again
    /// after a stop is a no-op.
    pub async fn stop(&mut self) -> Result<(), LifecycleError> {
        match std::mem::replace(&mut self.server, ServerState::Closed) {
            ServerState::Listening { addr, handle, task } => {
                handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
                let _ = task.await;
                tracing::info!(address = %addr, "Server stopped");
                Ok(())
            }
            ServerState::Unbound => {
                self.server = ServerState::Unbound;
                Err(LifecycleError::NotStarted)
            }
            ServerState::Closed => Ok(()),
        }
    }
}

/// Builder for a [`Bootstrap`].
///
/// `build` performs the whole synchronous bootstrap: resolution,
/// validation, route composition, capability installation and the error
/// boundary. Nothing listens until `start`.
pub struct BootstrapBuilder {
    options: ConfigOverlay,
    composer: Arc<dyn RouteComposer>,
    translator: Option<Arc<dyn Translate>>,
    extra: Vec<Router>,
}

impl BootstrapBuilder {
    /// Caller-supplied options, layered over the defaults.
    pub fn options(mut self, options: ConfigOverlay) -> Self {
        self.options = options;
        self
    }

    /// Replace the route composer collaborator.
    pub fn composer(mut self, composer: Arc<dyn RouteComposer>) -> Self {
        self.composer = composer;
        self
    }

    /// Replace the translation collaborator.
    pub fn translator(mut self, translator: Arc<dyn Translate>) -> Self {
        self.translator = Some(translator);
        self
    }

    /// Merge an extra router into the application, after the declared
    /// routes. The embedder's escape hatch for custom endpoints.
    pub fn merge(mut self, router: Router) -> Self {
        self.extra.push(router);
        self
    }

    pub fn build(self) -> Result<Bootstrap, BootstrapError> {
        let config = overlay::resolve([&self.options]);
        validation::validate(&config)?;

        let translator: Arc<dyn Translate> = match self.translator {
            Some(translator) => translator,
            None => Translations::load(&config)?,
        };
        let templates = Templates::from_config(&config)?;

        let mut installed = Vec::new();
        let mut installed_routes = Vec::new();

        // One middleware unit per route, merged in declaration order.
        let mut app = Router::new();
        for (index, route) in config.routes.iter().enumerate() {
            let ctx = RouteContext::new(route.clone(), &config);
            app = app.merge(self.composer.compose(&ctx)?);
            installed_routes.push(route.label(index));
        }

        for extra in self.extra {
            app = app.merge(extra);
        }

        app = pages::install(app, &config, templates.clone());

        app = static_assets::install(app, &config);
        installed.push("static");

        // Middleware wrap the routes. Tower applies the last-added layer
        // outermost, so attachment runs in reverse of the request-flow
        // order: tracing → settings → sessions → routes.
        app = sessions::install(app, &config);
        installed.push("sessions");

        app = settings::install(app, &config, templates);
        installed.push("settings");

        if !config.env.is_quiet() {
            app = logging::install(app, &config);
            installed.push("logger");
        }

        // The boundary goes on last, outermost, so it observes errors
        // raised by every earlier unit.
        app = boundary::install(app, translator, &config);
        installed.push("errors");

        tracing::debug!(
            routes = installed_routes.len(),
            capabilities = ?installed,
            "Bootstrap composed"
        );

        Ok(Bootstrap {
            options: self.options,
            config,
            app,
            server: ServerState::Unbound,
            installed,
            installed_routes,
        })
    }
}
