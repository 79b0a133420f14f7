mod args;
mod commands;

use anyhow::Result;
use clap::Parser;
use fabo_api::ApiClient;
use fabo_core::api::{CreateGameRequest, JoinGameRequest};

use crate::args::{Cli, Command};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("fabo=info"))
        .init();

    let cli = Cli::parse();
    let client = ApiClient::new(cli.api_config()?);

    match cli.command {
        Command::Poll {
            game,
            interval,
            count,
        } => commands::poll(&client, game.info(), interval, count)?,
        Command::Games => commands::games(&client)?,
        Command::Chat { game, text } => commands::chat(&client, &game.info(), &text)?,
        Command::Popup {
            game,
            popup_type,
            index,
        } => commands::popup(&client, &game.info(), &popup_type, index)?,
        Command::Decks { game } => commands::decks(&client, &game.info())?,
        Command::Create {
            deck,
            format,
            visibility,
            description,
        } => commands::create(
            &client,
            CreateGameRequest {
                fabdb: deck,
                format,
                visibility,
                game_description: description,
                ..CreateGameRequest::default()
            },
        )?,
        Command::Join {
            game_id,
            deck,
            player,
        } => commands::join(
            &client,
            JoinGameRequest {
                game_name: game_id,
                player_id: player,
                fabdb: deck,
                ..JoinGameRequest::default()
            },
        )?,
    }

    Ok(())
}
