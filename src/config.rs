use log::warn;
use std::env;
use std::str::FromStr;

use crate::blockchain::{ChainSettings, DEFAULT_DIFFICULTY, DEFAULT_MINER_REWARD};

/// Process settings, read from the environment (and `.env` via dotenvy in main).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub chain: ChainSettings,
    /// Address credited by the genesis block.
    pub genesis_address: String,
    pub genesis_amount: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            chain: ChainSettings::default(),
            genesis_address: "Bob".to_string(),
            genesis_amount: 1000,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; missing or unparseable values keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(d.host),
            port: parse_or(&lookup, "PORT", d.port),
            chain: ChainSettings {
                initial_difficulty: parse_or(&lookup, "INITIAL_DIFFICULTY", DEFAULT_DIFFICULTY),
                miner_reward: parse_or(&lookup, "MINER_REWARD", DEFAULT_MINER_REWARD),
            },
            genesis_address: lookup("GENESIS_ADDRESS").unwrap_or(d.genesis_address),
            genesis_amount: parse_or(&lookup, "GENESIS_AMOUNT", d.genesis_amount),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("invalid {key}={raw:?}, using default {default}");
            default
        }),
    }
}
