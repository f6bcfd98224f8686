//! Integration tests for channel commands.

mod common;

use common::TestClient;
use slirc_commands::config::Config;
use slirc_commands::gateway::Outbound;
use slirc_commands::handlers::Dispatch;
use slirc_commands::View;
use std::time::Duration;

#[test]
fn test_join_adds_missing_chantype_and_keys() {
    let mut client = TestClient::new();
    client.send("/join rust secret, &local");
    assert_eq!(client.gateway.lines(), vec!["JOIN #rust secret", "JOIN &local"]);

    let panels: Vec<String> = client.view.panels().into_iter().map(|p| p.name).collect();
    assert_eq!(panels, vec!["server", "#rust", "&local"]);
}

#[test]
fn test_join_without_channel_fails() {
    let mut client = TestClient::new();
    assert_eq!(client.send("/join"), Dispatch::Failed);
    assert_eq!(client.send("/join , ,"), Dispatch::Failed);
    assert!(client.gateway.take().is_empty());
}

#[test]
fn test_part_active_and_listed() {
    let mut client = TestClient::new().in_channel("#rust");
    client.send("/part");
    client.send("/part #a,#b see you later");
    assert_eq!(
        client.gateway.lines(),
        vec!["PART #rust", "PART #a :see you later", "PART #b :see you later"]
    );
}

#[test]
fn test_part_on_server_panel_does_nothing() {
    let mut client = TestClient::new();
    assert_eq!(client.send("/part"), Dispatch::Handled);
    assert!(client.gateway.take().is_empty());
}

#[test]
fn test_topic() {
    let mut client = TestClient::new().in_channel("#rust");
    client.send("/topic");
    client.send("/topic Welcome to #rust");
    client.send("/topic #tokio async all the things");
    client.send("/topic #tokio");
    assert_eq!(
        client.gateway.lines(),
        vec![
            "TOPIC #rust :Welcome to #rust",
            "TOPIC #tokio :async all the things",
            "TOPIC #tokio",
        ]
    );
}

#[test]
fn test_kick_requires_channel_context() {
    let mut client = TestClient::new();
    assert_eq!(client.send("/kick bob"), Dispatch::Failed);
    assert!(client.gateway.take().is_empty());
    assert_eq!(client.server_lines()[0].text, "/kick: not on a channel");

    let mut client = TestClient::new().in_channel("#rust");
    assert_eq!(client.send("/kick"), Dispatch::Failed);
    client.send("/kick bob");
    assert_eq!(
        client.gateway.take(),
        vec![Outbound::Kick { channel: "#rust".into(), nick: "bob".into(), reason: None }]
    );
}

#[test]
fn test_invite() {
    let mut client = TestClient::new().in_channel("#rust");
    client.send("/invite bob");
    assert_eq!(client.gateway.lines(), vec!["INVITE bob #rust"]);
    assert_eq!(client.active_lines()[0].text, "bob has been invited to #rust");

    let mut client = TestClient::new().in_query("bob");
    assert_eq!(client.send("/invite carol"), Dispatch::Failed);
    assert!(client.gateway.take().is_empty());
    assert_eq!(client.active_lines()[0].text, "/invite: not on a channel");
}

#[test]
fn test_clear() {
    let mut client = TestClient::new().in_channel("#rust");
    client.send("hello");
    assert_eq!(client.active_lines().len(), 1);
    client.send("/clear");
    assert!(client.active_lines().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_cycle_rejoins_after_delay() {
    let mut client = TestClient::new().in_channel("#rust");
    client.send("/cycle");
    assert_eq!(client.gateway.lines(), vec!["PART #rust"]);
    assert!(client.dispatcher.scheduler().is_pending("#rust"));

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(client.gateway.lines(), vec!["PART #rust"]);

    tokio::time::sleep(Duration::from_millis(600)).await;
    tokio::task::yield_now().await;
    assert_eq!(client.gateway.lines(), vec!["PART #rust", "JOIN #rust"]);
    assert!(!client.dispatcher.scheduler().is_pending("#rust"));
}

#[tokio::test(start_paused = true)]
async fn test_explicit_join_supersedes_cycle() {
    let mut client = TestClient::new().in_channel("#rust");
    client.send("/cycle");
    client.send("/join #RUST");
    assert_eq!(client.dispatcher.scheduler().pending(), 0);

    tokio::time::sleep(Duration::from_secs(2)).await;
    tokio::task::yield_now().await;
    assert_eq!(client.gateway.lines(), vec!["PART #rust", "JOIN #RUST"]);
}

#[tokio::test(start_paused = true)]
async fn test_part_without_chantype_supersedes_cycle() {
    let mut client = TestClient::new();
    client.send("/cycle rust");
    assert!(client.dispatcher.scheduler().is_pending("#rust"));

    client.send("/part rust");
    assert_eq!(client.dispatcher.scheduler().pending(), 0);

    tokio::time::sleep(Duration::from_secs(2)).await;
    tokio::task::yield_now().await;
    assert_eq!(client.gateway.lines(), vec!["PART #rust", "PART #rust"]);
}

#[tokio::test(start_paused = true)]
async fn test_cycle_delay_is_configurable() {
    let config = Config::from_toml("[client]\ncycle_rejoin_delay_ms = 5000\n").unwrap();
    let mut client = TestClient::with_config(config);
    client.send("/cycle tokio");
    assert_eq!(client.gateway.lines(), vec!["PART #tokio"]);

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(client.gateway.lines(), vec!["PART #tokio"]);

    tokio::time::sleep(Duration::from_secs(4)).await;
    tokio::task::yield_now().await;
    assert_eq!(client.gateway.lines(), vec!["PART #tokio", "JOIN #tokio"]);
    assert_eq!(client.view.active().name, "#tokio");
}
