use std::sync::atomic::{AtomicU32, Ordering};
use std::thread;
use std::time::Duration;

use ::config::Environment;
use fabo_core::api::{CreateGameRequest, JoinGameRequest};
use fabo_core::config::{API_URL_DEV, GAME_LIMIT_LIVE};
use fabo_core::{Action, ApiConfig, GameError, GameInfo, GameStore};

use crate::*;

// ==========================================
// MOCK GAME SERVER
// ==========================================

const TURN_BLOB: &str = "1 0 0<br>hand<br>arsenal<br>wtr002 1|wtr003|cru006|wtr005|wtr153|wtr004";

/// Serve `count` requests, answering each with `route(url, body)`
fn mock_server(
    count: usize,
    route: impl Fn(&str, &str) -> (u16, String) + Send + 'static,
) -> (ApiClient, thread::JoinHandle<Vec<String>>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind mock server");
    let port = server
        .server_addr()
        .to_ip()
        .expect("tcp listener")
        .port();

    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for _ in 0..count {
            let mut request = match server.recv() {
                Ok(request) => request,
                Err(_) => break,
            };
            let mut body = String::new();
            let _ = request.as_reader().read_to_string(&mut body);
            let url = request.url().to_string();
            let (status, reply) = route(&url, &body);
            seen.push(format!("{} {}", request.method(), url));
            let response = tiny_http::Response::from_string(reply).with_status_code(status);
            let _ = request.respond(response);
        }
        seen
    });

    let config = ApiConfig {
        dev_mode: false,
        ..ApiConfig::single_server(format!("http://127.0.0.1:{}/", port))
    };
    (ApiClient::new(config), handle)
}

fn game() -> GameInfo {
    GameInfo::new(664, 3, "secret")
}

// ==========================================
// CLIENT CALLS
// ==========================================

#[test]
fn test_next_turn_fetches_and_parses() {
    let (client, server) = mock_server(1, |_, _| (200, TURN_BLOB.to_string()));
    let turn = client.next_turn(&game()).expect("turn parses");
    assert_eq!(turn.player_one.hero.unwrap().card_number, "WTR002");
    assert!(turn.player_one.weapon_right.is_none());

    let seen = server.join().unwrap();
    assert_eq!(seen, vec!["GET /GetNextTurn3.php?gameName=664&playerID=3"]);
}

#[test]
fn test_error_status_collapses_to_code() {
    let (client, server) = mock_server(1, |_, _| (503, String::from("down")));
    let err = client.next_turn(&game()).unwrap_err();
    assert!(matches!(err, ApiError::Status(503)));
    assert_eq!(err.status_text(), "503");
    server.join().unwrap();
}

#[test]
fn test_unparsable_turn_is_a_game_error() {
    let (client, server) = mock_server(1, |_, _| (200, String::from("nothing here")));
    let err = client.next_turn(&game()).unwrap_err();
    assert!(matches!(
        err,
        ApiError::Game(GameError::MissingSection { index: 3 })
    ));
    server.join().unwrap();
}

#[test]
fn test_submit_chat_sends_auth_and_text() {
    let (client, server) = mock_server(1, |_, _| (200, String::from("OK")));
    let reply = client.submit_chat(&game(), "gg").unwrap();
    assert_eq!(reply, "OK");

    let seen = server.join().unwrap();
    assert!(seen[0].starts_with("GET /SubmitChat.php?"));
    assert!(seen[0].contains("authKey=secret"));
    assert!(seen[0].contains("chatText=gg"));
}

#[test]
fn test_game_list_decodes_json() {
    let (client, server) = mock_server(1, |url, _| {
        assert!(url.starts_with("/APIs/GetGameList.php"));
        (
            200,
            String::from(r#"{"gamesInProgress":[],"openGames":[{"gameName":9,"p1Hero":"ARC001"}]}"#),
        )
    });
    let list = client.game_list().unwrap();
    assert_eq!(list.open_games.len(), 1);
    assert_eq!(list.open_games[0].game_name, 9);
    server.join().unwrap();
}

#[test]
fn test_bad_json_is_a_decode_error() {
    let (client, server) = mock_server(1, |_, _| (200, String::from("<html>")));
    let err = client.favorite_decks(&game()).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(err.status_text(), "PARSING_ERROR");
    server.join().unwrap();
}

#[test]
fn test_create_and_join_post_bodies() {
    let (client, server) = mock_server(2, |url, body| {
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        if url.starts_with("/APIs/CreateGame.php") {
            assert_eq!(json["format"], "blitz");
            (200, String::from(r#"{"gameName":101,"playerID":1,"authKey":"a"}"#))
        } else {
            assert_eq!(json["gameName"], 101);
            (200, String::from(r#"{"gameName":101,"playerID":2,"authKey":"b"}"#))
        }
    });

    let created = client
        .create_game(CreateGameRequest {
            fabdb: "deck".into(),
            format: "blitz".into(),
            visibility: "public".into(),
            ..CreateGameRequest::default()
        })
        .unwrap();
    assert_eq!(created.game_info(), Some(GameInfo::new(101, 1, "a")));

    let joined = client
        .join_game(JoinGameRequest {
            game_name: 101,
            player_id: 2,
            fabdb: "deck".into(),
            ..JoinGameRequest::default()
        })
        .unwrap();
    assert_eq!(joined.game_info(), Some(GameInfo::new(101, 2, "b")));

    let seen = server.join().unwrap();
    assert_eq!(seen, vec!["POST /APIs/CreateGame.php", "POST /APIs/JoinGame.php"]);
}

#[test]
fn test_connection_refused_is_transport_error() {
    let client = ApiClient::new(ApiConfig::single_server("http://127.0.0.1:1/"));
    let err = client.next_turn(&game()).unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[test]
fn test_no_game_selected_never_hits_the_network() {
    let client = ApiClient::new(ApiConfig::single_server("http://127.0.0.1:1/"));
    let err = client.next_turn(&GameInfo::default()).unwrap_err();
    assert!(matches!(err, ApiError::Game(GameError::NoGameSelected)));
}

// ==========================================
// POLLER
// ==========================================

#[test]
fn test_poller_applies_good_turns_and_skips_failures() {
    let calls = AtomicU32::new(0);
    let (client, server) = mock_server(3, move |_, _| {
        match calls.fetch_add(1, Ordering::SeqCst) + 1 {
            2 => (500, String::from("boom")),
            _ => (200, TURN_BLOB.to_string()),
        }
    });

    let mut store = GameStore::new();
    store.dispatch(Action::SetGameInfo(game()));
    let summary = Poller::new(Duration::from_millis(1))
        .with_max_polls(3)
        .run(&client, &mut store);

    assert_eq!(summary, PollSummary { applied: 2, failed: 1 });
    assert_eq!(store.state().turns_received, 2);
    assert_eq!(store.state().toasts.len(), 1);
    assert_eq!(store.state().toasts[0].message, "Error: 500 - an error happened");
    server.join().unwrap();
}

#[test]
fn test_zero_poll_limit_makes_no_requests() {
    let client = ApiClient::new(ApiConfig::single_server("http://127.0.0.1:1/"));
    let mut store = GameStore::new();
    store.dispatch(Action::SetGameInfo(game()));
    let summary = Poller::new(Duration::from_millis(1))
        .with_max_polls(0)
        .run(&client, &mut store);

    assert_eq!(summary, PollSummary::default());
    assert_eq!(store.state().turns_received, 0);
    assert!(store.state().toasts.is_empty());
}

#[test]
fn test_single_poll_limit_makes_one_request() {
    let (client, server) = mock_server(1, |_, _| (200, TURN_BLOB.to_string()));
    let mut store = GameStore::new();
    store.dispatch(Action::SetGameInfo(game()));
    let summary = Poller::new(Duration::from_secs(60))
        .with_max_polls(1)
        .run(&client, &mut store);

    assert_eq!(summary, PollSummary { applied: 1, failed: 0 });
    assert_eq!(server.join().unwrap().len(), 1);
}

#[test]
fn test_poll_once_without_game_leaves_store_alone() {
    let client = ApiClient::new(ApiConfig::single_server("http://127.0.0.1:1/"));
    let mut store = GameStore::new();
    let before = store.state().clone();
    assert!(!Poller::default().poll_once(&client, &mut store));
    assert_eq!(store.state(), &before);
}

// ==========================================
// ENVIRONMENT CONFIG
// ==========================================

fn env_source(vars: &[(&str, &str)]) -> Environment {
    let map: ::config::Map<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    Environment::with_prefix(settings::ENV_PREFIX).source(Some(map))
}

#[test]
fn test_env_overrides_replace_defaults() {
    let config = load_config_from(env_source(&[
        ("FABO_API_URL_LIVE", "https://example.test/"),
        ("FABO_GAME_LIMIT_BETA", "42"),
        ("FABO_API_URL_DEV", ""),
        ("FABO_AUTH_KEY", "ignored"),
    ]))
    .unwrap();

    assert_eq!(config.live_url, "https://example.test/");
    assert_eq!(config.beta_game_limit, 42);
    assert_eq!(config.live_game_limit, GAME_LIMIT_LIVE);
    assert_eq!(config.dev_url, API_URL_DEV);
}

#[test]
fn test_env_dev_mode_accepts_any_case() {
    let flags = [
        ("TRUE", true),
        ("on", true),
        ("Yes", true),
        ("1", true),
        ("OFF", false),
        ("false", false),
    ];
    for (flag, expected) in flags {
        let config = load_config_from(env_source(&[("FABO_DEV_MODE", flag)])).unwrap();
        assert_eq!(config.dev_mode, expected, "FABO_DEV_MODE={}", flag);
    }
}

#[test]
fn test_env_without_overrides_is_default() {
    let config = load_config_from(env_source(&[])).unwrap();
    assert_eq!(config, ApiConfig::default());
}

#[test]
fn test_env_bad_limit_is_a_config_error() {
    let err = load_config_from(env_source(&[("FABO_GAME_LIMIT_LIVE", "lots")])).unwrap_err();
    assert!(matches!(err, ApiError::Config(_)));
    assert_eq!(err.status_text(), "CLIENT_ERROR");
}
