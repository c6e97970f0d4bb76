//! Gateway integration test harness.
//!
//! Drives the full connect → channel map → chaincode flow against a
//! scripted in-memory network client (`infra::ScriptedClient`). No live
//! Fabric network is needed; the scripted client stands in for the
//! transport and records what the session asked of it.

mod infra;

mod channel_map;
