//! Channel map construction across live queries, the access-denied
//! fallback, and the failure-translation policy.

use std::collections::BTreeSet;
use std::time::Duration;

use fabric_gateway::{Gateway, GatewayError, NetworkClient};

use crate::infra::{remote_profile, wallet_with, ScriptedClient};

async fn connected<C: NetworkClient>(client: C) -> Gateway<C> {
    let mut gateway = Gateway::new(client);
    gateway
        .connect(
            &remote_profile(),
            &wallet_with("admin"),
            "admin",
            Duration::from_secs(30),
        )
        .await
        .expect("connect should succeed");
    gateway
}

fn peers(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[tokio::test]
async fn map_aggregates_across_admin_peers() {
    let client = ScriptedClient::new()
        .peer("peer0.org1.example.com")
        .peer("peer0.org2.example.com")
        .channels("peer0.org1.example.com", &["mychannel", "audit"])
        .channels("peer0.org2.example.com", &["mychannel", "transfers"])
        .shared();
    let gateway = connected(client).await;

    let map = gateway.create_channel_map().await.unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(
        map["mychannel"],
        peers(&["peer0.org1.example.com", "peer0.org2.example.com"])
    );
    assert_eq!(map["audit"], peers(&["peer0.org1.example.com"]));
    assert_eq!(map["transfers"], peers(&["peer0.org2.example.com"]));
}

#[tokio::test]
async fn map_mixes_live_and_fallback_membership() {
    // org1's peer answers the live query; org2's peer denies it, so its
    // membership comes from the profile's channels section.
    let client = ScriptedClient::new()
        .peer("peer0.org1.example.com")
        .peer("peer0.org2.example.com")
        .channels("peer0.org1.example.com", &["mychannel", "audit"])
        .channels_fail(
            "peer0.org2.example.com",
            "error: 2 UNKNOWN: access denied",
        )
        .shared();
    let gateway = connected(client).await;

    let map = gateway.create_channel_map().await.unwrap();
    assert_eq!(
        map["mychannel"],
        peers(&["peer0.org1.example.com", "peer0.org2.example.com"])
    );
    // The profile declares audit for org1 only.
    assert_eq!(map["audit"], peers(&["peer0.org1.example.com"]));
}

#[tokio::test]
async fn denied_peer_with_no_declared_membership_fails_the_map() {
    let client = ScriptedClient::new()
        .peer("peer0.org3.example.com")
        .channels_fail("peer0.org3.example.com", "access denied")
        .shared();
    let gateway = connected(client).await;

    // peer0.org3 is not declared in any profile channel, so the original
    // error resurfaces and the map build is terminal.
    let err = gateway.create_channel_map().await.unwrap_err();
    assert!(matches!(err, GatewayError::ChannelQuery(_)));
    assert_eq!(err.to_string(), "Error querying channel list: access denied");
}

#[tokio::test]
async fn no_visible_peers_is_terminal() {
    let client = ScriptedClient::new().shared();
    let gateway = connected(client).await;

    let err = gateway.create_channel_map().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error querying channel list: Could not find any peers to query the list of channels from"
    );
}

#[tokio::test]
async fn grpc_unreachable_translates_to_cannot_connect() {
    let client = ScriptedClient::new()
        .peer("peer0.org1.example.com")
        .channels_fail(
            "peer0.org1.example.com",
            "14 UNAVAILABLE: Received http2 header with status: 503",
        )
        .shared();
    let gateway = connected(client).await;

    let err = gateway.create_channel_map().await.unwrap_err();
    assert!(matches!(err, GatewayError::FabricUnreachable(_)));
    assert_eq!(
        err.to_string(),
        "Cannot connect to Fabric: 14 UNAVAILABLE: Received http2 header with status: 503"
    );
}

#[tokio::test]
async fn no_partial_map_survives_a_failing_peer() {
    let client = ScriptedClient::new()
        .peer("peer0.org1.example.com")
        .peer("peer0.org2.example.com")
        .channels("peer0.org1.example.com", &["mychannel"])
        .channels_fail("peer0.org2.example.com", "deadline exceeded")
        .shared();
    let gateway = connected(client).await;

    let result = gateway.create_channel_map().await;
    assert!(result.is_err(), "a failing peer must fail the whole build");
}
