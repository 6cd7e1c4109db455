use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;

use crate::game::session::DEFAULT_BOARD_SIZE;

const MIN_BOARD_SIZE: usize = 2;
const MAX_BOARD_SIZE: usize = 100;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the browser front end, served at `/`
    pub static_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub dictionary_path: String,
    pub board_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server = ServerConfig {
            host: lookup("HOST")
                .unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
            static_dir: lookup("STATIC_DIR")
                .unwrap_or_else(|| "./static".to_string()),
        };

        let game = GameConfig {
            dictionary_path: lookup("DICT_PATH")
                .unwrap_or_else(|| "./static/twi_words.json".to_string()),
            board_size: lookup("BOARD_SIZE")
                .unwrap_or_else(|| DEFAULT_BOARD_SIZE.to_string())
                .parse()
                .context("BOARD_SIZE must be a number")?,
        };

        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&game.board_size) {
            bail!(
                "BOARD_SIZE must be between {} and {}, got {}",
                MIN_BOARD_SIZE,
                MAX_BOARD_SIZE,
                game.board_size
            );
        }

        Ok(Config { server, game })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
