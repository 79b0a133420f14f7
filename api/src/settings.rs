//! Environment overrides for [`ApiConfig`]
//!
//! Compiled-in defaults come from `fabo-core`; any `FABO_*` variable that is
//! set and non-empty replaces the matching default:
//!
//! | Variable                 | Field               |
//! |--------------------------|---------------------|
//! | `FABO_API_URL_DEV`       | `dev_url`           |
//! | `FABO_API_URL_BETA`      | `beta_url`          |
//! | `FABO_API_URL_LIVE`      | `live_url`          |
//! | `FABO_GAME_LIST_DEV_URL` | `game_list_dev_url` |
//! | `FABO_GAME_LIMIT_BETA`   | `beta_game_limit`   |
//! | `FABO_GAME_LIMIT_LIVE`   | `live_game_limit`   |
//! | `FABO_DEV_MODE`          | `dev_mode`          |

use config::{Config, Environment};
use serde::Deserialize;

use fabo_core::log;
use fabo_core::ApiConfig;

use crate::error::ApiResult;

pub const ENV_PREFIX: &str = "FABO";

/// Keys as the environment source produces them (prefix stripped, lowercased)
#[derive(Debug, Default, Deserialize)]
struct EnvOverrides {
    api_url_dev: Option<String>,
    api_url_beta: Option<String>,
    api_url_live: Option<String>,
    game_list_dev_url: Option<String>,
    game_limit_beta: Option<u64>,
    game_limit_live: Option<u64>,
    dev_mode: Option<bool>,
}

impl EnvOverrides {
    fn apply(self, mut config: ApiConfig) -> ApiConfig {
        if let Some(url) = self.api_url_dev {
            config.dev_url = url;
        }
        if let Some(url) = self.api_url_beta {
            config.beta_url = url;
        }
        if let Some(url) = self.api_url_live {
            config.live_url = url;
        }
        if let Some(url) = self.game_list_dev_url {
            config.game_list_dev_url = url;
        }
        config.beta_game_limit = self.game_limit_beta.unwrap_or(config.beta_game_limit);
        config.live_game_limit = self.game_limit_live.unwrap_or(config.live_game_limit);
        config.dev_mode = self.dev_mode.unwrap_or(config.dev_mode);
        config
    }
}

/// Defaults overridden by the process environment
pub fn load_config() -> ApiResult<ApiConfig> {
    load_config_from(Environment::with_prefix(ENV_PREFIX))
}

/// Defaults overridden by an explicit environment source.
///
/// Booleans accept `true`/`false`, `on`/`off`, `yes`/`no` and `1`/`0` in
/// any case. A limit that is not a number is an error.
pub fn load_config_from(environment: Environment) -> ApiResult<ApiConfig> {
    let overrides: EnvOverrides = Config::builder()
        .add_source(environment.ignore_empty(true))
        .build()?
        .try_deserialize()?;
    log::debug("config", &format!("environment overrides: {:?}", overrides));
    Ok(overrides.apply(ApiConfig::default()))
}
