//! Tracing subscriber setup for embedders.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::schema::BootstrapConfig;

/// Initialize a global tracing subscriber.
///
/// Opt-in: the library itself never installs a subscriber. A no-op in
/// quiet environments and when a subscriber is already set.
pub fn init_tracing(config: &BootstrapConfig) {
    if config.env.is_quiet() {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "form_bootstrap=debug,tower_http=debug".into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
