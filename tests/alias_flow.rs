//! Integration tests for alias expansion through the dispatcher.

mod common;

use common::TestClient;
use slirc_commands::config::Config;
use slirc_commands::gateway::Outbound;
use slirc_commands::handlers::Dispatch;

#[test]
fn test_default_join_alias() {
    let mut client = TestClient::new();
    assert_eq!(client.send("/j #rust key"), Dispatch::Handled);
    assert_eq!(
        client.gateway.take(),
        vec![Outbound::Join { channel: "#rust".into(), key: Some("key".into()) }]
    );
}

#[test]
fn test_channel_substitution() {
    let mut client = TestClient::new().in_channel("#rust");
    client.send("/op alice bob");
    client.send("/k spammer go away");
    client.send("/tick");

    assert_eq!(
        client.gateway.lines(),
        vec![
            "mode #rust +o alice bob",
            "KICK #rust spammer :go away",
            "PRIVMSG #rust :\u{2714}",
        ]
    );
}

#[test]
fn test_chained_alias() {
    let mut client = TestClient::new().in_channel("#rust");
    client.send("/slap bob");
    assert_eq!(
        client.gateway.take(),
        vec![Outbound::Action {
            target: "#rust".into(),
            text: "slaps bob around a bit with a large trout".into(),
        }]
    );
}

#[test]
fn test_set_and_remove_alias() {
    let mut client = TestClient::new().in_channel("#rust");
    client
        .dispatcher
        .set_alias("/hi", "/msg $channel hello $1")
        .unwrap();
    assert!(client.dispatcher.aliases().contains("hi"));

    client.send("/hi bob");
    assert_eq!(client.gateway.lines(), vec!["PRIVMSG #rust :hello bob"]);
    client.gateway.take();

    assert_eq!(
        client.dispatcher.remove_alias("hi").as_deref(),
        Some("/msg $channel hello $1")
    );
    assert_eq!(client.send("/hi bob"), Dispatch::Unhandled);
    assert_eq!(client.gateway.lines(), vec!["hi bob"]);
}

#[test]
fn test_cyclic_aliases_are_left_alone() {
    let mut client = TestClient::new();
    client.dispatcher.set_alias("/ping1", "/ping2 $1+").unwrap();
    client.dispatcher.set_alias("/ping2", "/ping1 $1+").unwrap();

    assert_eq!(client.send("/ping1 x"), Dispatch::Unhandled);
    assert_eq!(client.gateway.lines(), vec!["ping1 x"]);
}

#[test]
fn test_self_referencing_alias_rejected() {
    let mut client = TestClient::new();
    assert!(client.dispatcher.set_alias("/loop", "/loop again").is_err());
    assert!(!client.dispatcher.aliases().contains("/loop"));
}

#[test]
fn test_alias_command() {
    let mut client = TestClient::new().in_channel("#rust");

    assert_eq!(client.send("/alias greet /msg $channel hi $1+"), Dispatch::Handled);
    client.send("/greet everyone here");
    assert_eq!(client.gateway.lines(), vec!["PRIVMSG #rust :hi everyone here"]);

    client.send("/alias del greet");
    assert!(!client.dispatcher.aliases().contains("greet"));

    client.send("/alias");
    let listed: Vec<String> = client.server_lines().into_iter().map(|l| l.text).collect();
    assert!(listed.contains(&"/j   =>   /join $1+".to_string()));
    assert_eq!(listed.len(), client.dispatcher.list_aliases().len());
}

#[test]
fn test_alias_command_rejects_self_reference() {
    let mut client = TestClient::new();
    assert_eq!(client.send("/alias spin /spin"), Dispatch::Failed);
    assert!(!client.dispatcher.aliases().contains("spin"));
}

#[test]
fn test_configured_aliases_and_prefix() {
    let config = Config::from_toml(
        r#"
        [client]
        command_prefix = "!"
        max_alias_depth = 2

        [aliases]
        "!hi" = "!msg $channel hi"
        "!a" = "!b"
        "!b" = "!c"
        "!c" = "!hi"
        "#,
    )
    .unwrap();

    let mut client = TestClient::with_config(config).in_channel("#rust");
    client.send("!hi");
    client.send("!j #tokio");
    // Three steps to reach !hi, one more than allowed.
    client.send("!a");

    assert_eq!(
        client.gateway.lines(),
        vec!["PRIVMSG #rust :hi", "JOIN #tokio", "a"]
    );
    assert_eq!(client.dispatcher.descriptions()["!join"], "Join a channel");
}
