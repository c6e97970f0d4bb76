//! fabric-core — connection profile model, wallet abstraction, and client
//! configuration. The gateway and CLI crates depend on this one.

pub mod config;
pub mod profile;
pub mod wallet;

pub use profile::{ConnectionProfile, ProfileError};
pub use wallet::{FileSystemWallet, Identity, InMemoryWallet, Wallet, WalletError};
