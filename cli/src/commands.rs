use std::cell::Cell;

use anyhow::{anyhow, Context, Result};
use fabo_api::{ApiClient, Poller};
use fabo_core::api::{CreateGameRequest, JoinGameRequest};
use fabo_core::log;
use fabo_core::{Action, GameInfo, GameStore, GameView};
use serde::Serialize;

use crate::args::interval;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Follow a game, printing the board each time a turn lands
pub fn poll(client: &ApiClient, info: GameInfo, seconds: f64, count: Option<u32>) -> Result<()> {
    let mut store = GameStore::new();
    store.dispatch(Action::SetGameInfo(info));

    let last_turn = Cell::new(0u64);
    store.subscribe(move |state| {
        if state.turns_received != last_turn.get() {
            last_turn.set(state.turns_received);
            println!("{}\n", GameView::from_state(state));
        }
    });

    let mut poller = Poller::new(interval(seconds));
    if let Some(count) = count {
        poller = poller.with_max_polls(count);
    }
    let summary = poller.run(client, &mut store);
    log::info(&format!(
        "polling finished: {} applied, {} failed",
        summary.applied, summary.failed
    ));
    if summary.applied == 0 && summary.failed > 0 {
        return Err(anyhow!("no turn could be fetched"));
    }
    Ok(())
}

pub fn games(client: &ApiClient) -> Result<()> {
    let list = client.game_list().context("fetching game list")?;
    print_json(&list)
}

pub fn chat(client: &ApiClient, info: &GameInfo, text: &str) -> Result<()> {
    let reply = client.submit_chat(info, text).context("sending chat")?;
    if !reply.trim().is_empty() {
        println!("{}", reply.trim());
    }
    Ok(())
}

pub fn popup(client: &ApiClient, info: &GameInfo, popup_type: &str, index: u32) -> Result<()> {
    let content = client
        .popup_content(info, popup_type, index)
        .with_context(|| format!("fetching {} popup", popup_type))?;
    print_json(&content)
}

pub fn decks(client: &ApiClient, info: &GameInfo) -> Result<()> {
    let decks = client.favorite_decks(info).context("fetching favorite decks")?;
    print_json(&decks)
}

pub fn create(client: &ApiClient, request: CreateGameRequest) -> Result<()> {
    let response = client.create_game(request).context("creating game")?;
    report_seat(response.game_info(), response.message.as_deref())
}

pub fn join(client: &ApiClient, request: JoinGameRequest) -> Result<()> {
    let game = request.game_name;
    let response = client
        .join_game(request)
        .with_context(|| format!("joining game {}", game))?;
    report_seat(response.game_info(), response.message.as_deref())
}

/// Print the seat the server handed out, for use with `poll`
fn report_seat(info: Option<GameInfo>, message: Option<&str>) -> Result<()> {
    match info {
        Some(info) => {
            println!(
                "game {} player {} auth key {}",
                info.game_id, info.player_id, info.auth_key
            );
            Ok(())
        }
        None => Err(anyhow!(
            "server refused: {}",
            message.unwrap_or("no game was returned")
        )),
    }
}
