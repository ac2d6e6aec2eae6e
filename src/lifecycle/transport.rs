//! Transport factory: bind a listener and serve the application over the
//! configured protocol.

use std::net::SocketAddr;

use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use tokio::task::JoinHandle;

use crate::config::schema::{BootstrapConfig, Protocol};
use crate::error::LifecycleError;

/// A bound, listening transport.
pub struct BoundTransport {
    pub addr: SocketAddr,
    pub handle: axum_server::Handle,
    pub task: JoinHandle<std::io::Result<()>>,
}

/// Bind the configured host/port and serve `app` over the configured
/// protocol (plain HTTP unless `https` was chosen).
///
/// The listener is bound synchronously first, so bind failures such as
/// address-in-use come back as `LifecycleError::Bind` instead of being
/// lost inside the serve task.
pub async fn bind(config: &BootstrapConfig, app: Router) -> Result<BoundTransport, LifecycleError> {
    let addr_str = format!("{}:{}", config.host, config.port);
    let addr: SocketAddr = addr_str
        .parse()
        .map_err(|source| LifecycleError::Address {
            addr: addr_str.clone(),
            source,
        })?;

    let listener = std::net::TcpListener::bind(addr).map_err(|source| LifecycleError::Bind {
        addr: addr_str.clone(),
        source,
    })?;
    listener
        .set_nonblocking(true)
        .map_err(|source| LifecycleError::Bind {
            addr: addr_str.clone(),
            source,
        })?;

    let protocol = config.protocol.unwrap_or(Protocol::Http);
    let handle = axum_server::Handle::new();
    let service = app.into_make_service();

    let task = match protocol {
        Protocol::Http => {
            let server = axum_server::from_tcp(listener)
                .handle(handle.clone())
                .serve(service);
            tokio::spawn(server)
        }
        Protocol::Https => {
            let tls = config.tls.as_ref().ok_or(LifecycleError::TlsRequired)?;
            let rustls = RustlsConfig::from_pem_file(
                config.caller.join(&tls.cert_path),
                config.caller.join(&tls.key_path),
            )
            .await
            .map_err(LifecycleError::Tls)?;

            let server = axum_server::from_tcp_rustls(listener, rustls)
                .handle(handle.clone())
                .serve(service);
            tokio::spawn(server)
        }
    };

    // Await the listen acknowledgement. `None` means the server task gave
    // up before listening; recover the underlying error from the task.
    match handle.listening().await {
        Some(bound) => {
            tracing::info!(address = %bound, protocol = ?protocol, "Transport listening");
            Ok(BoundTransport {
                addr: bound,
                handle,
                task,
            })
        }
        None => {
            let source = match task.await {
                Ok(Err(err)) => err,
                _ => std::io::Error::other("server exited before listening"),
            };
            Err(LifecycleError::Bind {
                addr: addr_str,
                source,
            })
        }
    }
}
