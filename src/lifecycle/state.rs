//! Server handle state machine.

use std::net::SocketAddr;

use tokio::task::JoinHandle;

/// The lifecycle of the server handle owned by a [`crate::Bootstrap`].
///
/// At most one transport is ever bound per orchestrator instance; the
/// state validates every transition.
pub enum ServerState {
    /// No transport bound. The initial state, and the state a
    /// `start: false` bootstrap stays in.
    Unbound,

    /// A transport is bound and listening.
    Listening {
        addr: SocketAddr,
        handle: axum_server::Handle,
        task: JoinHandle<std::io::Result<()>>,
    },

    /// The transport was released by `stop`. Terminal.
    Closed,
}

impl ServerState {
    pub fn local_addr(&self) -> Option<SocketAddr> {
        match self {
            ServerState::Listening { addr, .. } => Some(*addr),
            _ => None,
        }
    }

    pub fn is_listening(&self) -> bool {
        matches!(self, ServerState::Listening { .. })
    }
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerState::Unbound => write!(f, "Unbound"),
            ServerState::Listening { addr, .. } => write!(f, "Listening({addr})"),
            ServerState::Closed => write!(f, "Closed"),
        }
    }
}
