use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use fabo_api::{load_config, ApiResult};
use fabo_core::{ApiConfig, GameInfo};

#[derive(Debug, Parser)]
#[command(name = "fabo", version, about = "Follow and play FaBO games from the terminal")]
pub struct Cli {
    /// Send every request to this server instead of routing by game id
    #[arg(long, global = true, env = "FABO_SERVER")]
    pub server: Option<String>,

    /// Route unselected games and the game list to the dev server
    #[arg(long, global = true)]
    pub dev: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Poll a game and print the board after every turn
    Poll {
        #[command(flatten)]
        game: GameArgs,
        /// Seconds between polls
        #[arg(long, default_value_t = 1.0)]
        interval: f64,
        /// Stop after this many polls
        #[arg(long)]
        count: Option<u32>,
    },
    /// List open games and games in progress
    Games,
    /// Send a chat line
    Chat {
        #[command(flatten)]
        game: GameArgs,
        text: String,
    },
    /// Show popup content (discard, banish, ...)
    Popup {
        #[command(flatten)]
        game: GameArgs,
        popup_type: String,
        #[arg(long, default_value_t = 0)]
        index: u32,
    },
    /// List favorite decks
    Decks {
        #[command(flatten)]
        game: GameArgs,
    },
    /// Create a game with a deck link
    Create {
        deck: String,
        #[arg(long, default_value = "cc")]
        format: String,
        #[arg(long, default_value = "public")]
        visibility: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Join an open game
    Join {
        game_id: u64,
        deck: String,
        #[arg(long, default_value_t = 2)]
        player: u32,
    },
}

#[derive(Debug, Clone, Args)]
pub struct GameArgs {
    /// Game id (`gameName` on the server)
    #[arg(long = "game", short = 'g')]
    pub game_id: u64,
    #[arg(long = "player", short = 'p', default_value_t = 1)]
    pub player_id: u32,
    #[arg(long, env = "FABO_AUTH_KEY", default_value = "")]
    pub auth_key: String,
}

impl GameArgs {
    pub fn info(&self) -> GameInfo {
        GameInfo::new(self.game_id, self.player_id, self.auth_key.clone())
    }
}

impl Cli {
    /// Environment config with the command-line overrides applied
    pub fn api_config(&self) -> ApiResult<ApiConfig> {
        let mut config = match &self.server {
            Some(url) => ApiConfig::single_server(url.clone()),
            None => load_config()?,
        };
        if self.dev {
            config.dev_mode = true;
        }
        Ok(config)
    }
}

/// Interval in seconds to a duration; negative or NaN values mean no wait
pub fn interval(seconds: f64) -> Duration {
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO)
}
