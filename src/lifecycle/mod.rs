//! Server lifecycle subsystem.
//!
//! # Data Flow
//! ```text
//! Bootstrap::start
//!     → state.rs (Unbound → Listening; double start rejected)
//!     → transport.rs (protocol factory: plain or TLS; bind, await listen)
//!
//! Bootstrap::stop
//!     → state.rs (Listening → Closed; stop before start rejected)
//!     → graceful shutdown of the bound transport
//! ```
//!
//! # Design Decisions
//! - Explicit state machine {Unbound, Listening, Closed}; transitions
//!   validate the current state instead of leaving double-start and
//!   stop-before-start undefined
//! - The transport is an enumerated variant resolved through a factory,
//!   never a module loaded by name
//! - The listener binds synchronously before the serve task spawns, so
//!   address-in-use surfaces as a typed bind error rather than a lost
//!   async event

pub mod state;
pub mod transport;

pub use state::ServerState;
