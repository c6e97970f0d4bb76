//! Network client seam.
//!
//! [`NetworkClient`] is the contract between the gateway session and
//! whatever actually speaks to the Fabric network. The session owns all
//! connection-layer policy (localhost detection, fallback, error
//! translation); a client implementation owns transport, TLS, and the
//! Fabric wire protocol. Test harnesses substitute a scripted client.

use std::time::Duration;

use async_trait::async_trait;
use fabric_core::{ConnectionProfile, Identity};

use crate::channel::ChaincodeInfo;

/// Client-side service-discovery flags, fixed for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// Whether service discovery is used at all. Always on for this layer.
    pub enabled: bool,
    /// Rewrite discovered addresses to localhost for local dev networks.
    pub as_localhost: bool,
}

impl DiscoveryOptions {
    pub fn new(as_localhost: bool) -> Self {
        Self {
            enabled: true,
            as_localhost,
        }
    }
}

/// Everything a client needs to open the underlying connection.
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    pub identity: Identity,
    pub discovery: DiscoveryOptions,
    /// How long to wait for a transaction commit event.
    pub commit_timeout: Duration,
}

/// Error reported by a client implementation.
///
/// Carries the underlying message verbatim: the session's failure policy
/// pattern-matches on well-known signals rather than on structured codes,
/// because the signals originate in layers (gRPC, peer CLI output) that only
/// surface text.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct ClientError(pub String);

impl ClientError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The peer rejected the query for lack of rights, not for lack of
    /// reachability. Triggers the profile-declared membership fallback.
    pub fn is_access_denied(&self) -> bool {
        self.0.to_ascii_lowercase().contains("access denied")
    }

    /// gRPC-level unreachable signal.
    pub fn is_unreachable(&self) -> bool {
        self.0.contains("http2 header with status: 503")
    }
}

/// The underlying Fabric network client.
///
/// Implementations hold whatever transport state they need; the session
/// calls `connect` exactly once before any other method and `disconnect`
/// at most once after.
#[async_trait]
pub trait NetworkClient: Send + Sync {
    /// Open the connection described by the profile for the given identity.
    async fn connect(
        &self,
        profile: &ConnectionProfile,
        options: ConnectOptions,
    ) -> Result<(), ClientError>;

    /// Release the underlying connection. Must tolerate repeated calls.
    async fn disconnect(&self);

    /// Names of the peers visible to the connected identity's organization.
    async fn peer_names(&self) -> Result<Vec<String>, ClientError>;

    /// Live channel-membership query against one peer. Order unspecified.
    async fn query_channels(&self, peer: &str) -> Result<Vec<String>, ClientError>;

    /// Initialize a channel using `peer` as the discovery target.
    async fn init_channel(
        &self,
        channel: &str,
        peer: &str,
        discovery: DiscoveryOptions,
    ) -> Result<(), ClientError>;

    /// Instantiated chaincode on an initialized channel.
    async fn query_chaincode(&self, channel: &str) -> Result<Vec<ChaincodeInfo>, ClientError>;
}
