//! Peer connection state labels.
//!
//! An SMPP session progresses through three coarse states:
//!
//! ```text
//! DISCONNECTED → UNBOUND → BOUND → DISCONNECTED
//! ```
//!
//! - **Disconnected**: no transport connection exists (or it was closed)
//! - **Unbound**: transport connected, bind exchange not yet completed
//! - **Bound**: a bind request/response exchange succeeded
//!
//! The bind negotiation itself belongs to the session layer; this module
//! only tracks the label so that codec-level callers can gate traffic on it.

use crate::reader::StreamReader;
use tokio::io::AsyncRead;

/// Coarse connection state of a remote SMPP peer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeerState {
    Disconnected,
    Unbound,
    Bound,
}

/// A remote SMPP entity (ESME or SMSC) reached over one transport
/// connection. Owns the framer for that connection and the session label.
#[derive(Debug)]
pub struct Peer<R> {
    reader: StreamReader<R>,
    state: PeerState,
}

impl<R: AsyncRead + Unpin> Peer<R> {
    /// Wrap an already-connected transport. A freshly connected peer has
    /// not yet exchanged a bind, so it starts out unbound.
    pub fn with_connection(transport: R) -> Peer<R> {
        Peer {
            reader: StreamReader::new(transport),
            state: PeerState::Unbound,
        }
    }

    pub fn state(&self) -> PeerState {
        self.state
    }

    pub fn is_bound(&self) -> bool {
        self.state == PeerState::Bound
    }

    /// Record a successful bind exchange
    pub fn bind_completed(&mut self) {
        self.state = PeerState::Bound;
    }

    /// Record a successful unbind exchange
    pub fn unbound(&mut self) {
        self.state = PeerState::Unbound;
    }

    /// Record transport closure
    pub fn connection_closed(&mut self) {
        self.state = PeerState::Disconnected;
    }

    /// The framer attached to this peer's connection
    pub fn reader(&mut self) -> &mut StreamReader<R> {
        &mut self.reader
    }
}
