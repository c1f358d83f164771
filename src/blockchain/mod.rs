pub mod block;
pub mod hash;
pub mod miner;
pub mod model;

pub use block::Block;
pub use model::{Chain, ChainSettings};

/// Proof-of-Work difficulty the genesis block is mined at (leading hex zeros).
pub const DEFAULT_DIFFICULTY: u32 = 4;

/// Coinbase amount credited to the miner of each accepted block.
pub const DEFAULT_MINER_REWARD: i64 = 100;

/// Target milliseconds between blocks for the retarget rule.
pub const TARGET_BLOCK_TIME_MS: i64 = 5_000;

/// Below this difficulty the retarget rule is switched off.
pub const DIFFICULTY_FLOOR: u32 = 2;

/// Sentinel previous hash of the genesis block.
pub const GENESIS_PREV_HASH: &str = "0";
