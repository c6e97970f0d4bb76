//! Gateway error taxonomy.
//!
//! Every failure surfaces with a human-readable, context-prefixed message.
//! Nothing here is retried internally; retry policy belongs to the caller.

use fabric_core::WalletError;

use crate::client::ClientError;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Identity/credential or transport setup failure at connect time.
    #[error("Failed to connect to the Fabric gateway: {0}")]
    Connection(String),

    /// No peers visible to the connected organization.
    #[error("Could not find any peers to query the list of channels from")]
    NoPeers,

    /// gRPC/transport unreachable while building the channel map.
    #[error("Cannot connect to Fabric: {0}")]
    FabricUnreachable(String),

    /// Any other channel-map construction failure.
    #[error("Error querying channel list: {0}")]
    ChannelQuery(String),

    /// Every peer rejected channel initialization and no attempt produced
    /// a more specific error.
    #[error("Could not discover information for channel {0} from known peers")]
    ChannelDiscovery(String),

    /// An operation was invoked without a live session.
    #[error("gateway is not connected")]
    NotConnected,

    /// Underlying client error, rethrown unchanged.
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl From<WalletError> for GatewayError {
    fn from(err: WalletError) -> Self {
        GatewayError::Connection(err.to_string())
    }
}
