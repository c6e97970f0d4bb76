//! fabric-gateway — stateful connection layer over a Hyperledger Fabric
//! network: peer discovery, per-peer channel resolution with an
//! access-denied fallback, channel map aggregation, lazy channel handle
//! initialization with multi-peer fallback, and chaincode listing.
//!
//! The underlying network client is abstracted behind [`NetworkClient`];
//! credential resolution is injected through [`fabric_core::Wallet`].

pub mod channel;
pub mod client;
pub mod error;
pub mod session;

pub use channel::{ChaincodeInfo, ChannelHandle, ChannelMap};
pub use client::{ClientError, ConnectOptions, DiscoveryOptions, NetworkClient};
pub use error::GatewayError;
pub use session::Gateway;
