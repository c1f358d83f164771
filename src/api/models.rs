use crate::blockchain::{Block, Chain};
use crate::transaction::{Amount, Transaction};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Shared application state: one chain behind one lock.
///
/// The whole mining protocol runs while the lock is held, so two requests can
/// never snapshot the same pending pool.
pub struct AppState {
    pub chain: Mutex<Chain>,
}

impl AppState {
    pub fn new(chain: Chain) -> Self {
        Self {
            chain: Mutex::new(chain),
        }
    }
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub length: usize,
    pub difficulty: u32,
    pub reward: i64,
    pub chain: &'a [Block],
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub length: usize,
    pub difficulty: u32,
}

#[derive(Deserialize)]
pub struct MineRequest {
    pub miner_address: String,
}

#[derive(Serialize)]
pub struct MineResponse {
    pub block: Block,
    pub difficulty: u32,
}

/* ---------- TX API Models ---------- */

#[derive(Deserialize)]
pub struct NewTxRequest {
    #[serde(default)]
    pub from: Option<String>,
    pub to: String,
    pub amount: Amount,
}

impl From<NewTxRequest> for Transaction {
    fn from(req: NewTxRequest) -> Self {
        Transaction::new(req.from, req.to, req.amount)
    }
}

#[derive(Serialize)]
pub struct NewTxResponse {
    pub result: &'static str,
}

#[derive(Serialize)]
pub struct MempoolResponse<'a> {
    pub size: usize,
    pub transactions: &'a [Transaction],
}

#[derive(Serialize)]
pub struct BalanceResponse {
    pub address: String,
    pub balance: i64,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub height: usize,
    pub difficulty: u32,
    pub reward: i64,
    pub pending: usize,
    pub target_block_time_ms: i64,
    pub last_interval_ms: Option<i64>,
}
