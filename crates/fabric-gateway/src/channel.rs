//! Channel types — handles, the channel map, and chaincode descriptors.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use dashmap::DashMap;

/// Channel name → peers that host it. Rebuilt fresh on every request;
/// a channel appears only if it was attributed to at least one peer.
pub type ChannelMap = HashMap<String, BTreeSet<String>>;

/// An initialized channel, bound to the peer that answered discovery.
///
/// Created lazily by the session and cached for the session's lifetime;
/// after initialization a handle is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelHandle {
    pub name: String,
    /// The discovery target that initialization succeeded against.
    pub peer: String,
}

/// Per-session handle cache, keyed by channel name.
pub type ChannelTable = DashMap<String, Arc<ChannelHandle>>;

/// One instantiated chaincode on a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChaincodeInfo {
    pub name: String,
    pub version: String,
}
