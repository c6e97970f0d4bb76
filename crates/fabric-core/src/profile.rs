//! Connection profile — the JSON document describing network topology.
//!
//! The profile is read-only input to session setup: node sections keyed by
//! name (`orderers`, `peers`, `certificateAuthorities`), each entry carrying
//! a `url`, plus a `channels` section declaring expected peer membership.
//! The `channels` section doubles as the resolver's fallback source when a
//! peer denies the live membership query.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A single node entry in one of the profile's node sections.
///
/// Profiles in the wild carry extra per-node fields (TLS CA certs, gRPC
/// options). Those are preserved verbatim but not interpreted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeEntry {
    pub url: String,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Declared membership for one channel: peer name → per-peer attributes.
/// The attributes (endorsingPeer, ledgerQuery, …) are opaque to this crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelEntry {
    #[serde(default)]
    pub peers: HashMap<String, serde_json::Value>,
}

/// Parsed connection profile. Immutable once loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectionProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub orderers: HashMap<String, NodeEntry>,
    #[serde(default)]
    pub peers: HashMap<String, NodeEntry>,
    #[serde(default, rename = "certificateAuthorities")]
    pub certificate_authorities: HashMap<String, NodeEntry>,
    #[serde(default)]
    pub channels: HashMap<String, ChannelEntry>,
}

impl ConnectionProfile {
    /// Parse a profile from a JSON string.
    pub fn from_json_str(text: &str) -> Result<Self, ProfileError> {
        serde_json::from_str(text).map_err(ProfileError::Parse)
    }

    /// Read and parse a profile document from disk.
    pub fn from_file(path: &Path) -> Result<Self, ProfileError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ProfileError::Read(path.to_path_buf(), e))?;
        Self::from_json_str(&text)
    }

    /// Every node URL across the orderer, peer, and CA sections.
    pub fn all_urls(&self) -> impl Iterator<Item = &str> {
        self.orderers
            .values()
            .chain(self.peers.values())
            .chain(self.certificate_authorities.values())
            .map(|node| node.url.as_str())
    }

    /// True iff at least one node URL resolves to the local machine.
    ///
    /// Drives the session's `as_localhost` discovery flag: a profile that
    /// points anywhere at `localhost`/`127.0.0.1` is a local dev network and
    /// discovered addresses must be rewritten accordingly.
    pub fn uses_localhost(&self) -> bool {
        self.all_urls().any(|url| {
            matches!(url_host(url), Some("localhost") | Some("127.0.0.1"))
        })
    }

    /// The declared channel membership as a strongly-typed view:
    /// channel name → set of peer names.
    ///
    /// Built once at connect time so the access-denied fallback never walks
    /// the raw JSON shape.
    pub fn known_channels(&self) -> HashMap<String, BTreeSet<String>> {
        self.channels
            .iter()
            .map(|(name, entry)| {
                let peers = entry.peers.keys().cloned().collect();
                (name.clone(), peers)
            })
            .collect()
    }
}

/// Extract the host portion of a node URL, e.g. `grpcs://peer0.org1:7051`.
fn url_host(url: &str) -> Option<&str> {
    let rest = match url.find("://") {
        Some(idx) => &url[idx + 3..],
        None => url,
    };
    let end = rest.find([':', '/']).unwrap_or(rest.len());
    let host = &rest[..end];
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("failed to read {0}: {1}")]
    Read(PathBuf, std::io::Error),
    #[error("failed to parse connection profile: {0}")]
    Parse(serde_json::Error),
}
