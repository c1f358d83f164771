use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::GENESIS_PREV_HASH;
use super::hash::digest;
use crate::transaction::Transaction;

/// A single block holding the transactions it seals.
///
/// Fields are read-only from outside the crate; every mutation goes through a
/// method that recomputes `hash`, so `hash` always matches the other fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    index: u64,
    timestamp: i64, // Unix epoch millis (UTC)
    data: Vec<Transaction>,
    nonce: u64,
    prev_hash: String,
    hash: String,
}

impl Block {
    /// Fresh, unmined block stamped with the current time.
    /// Index and previous hash are placeholders until the chain relinks it.
    pub fn new(data: Vec<Transaction>) -> Self {
        Self::with_timestamp(data, Utc::now().timestamp_millis())
    }

    /// Same as [`Block::new`] with a caller-pinned timestamp.
    pub fn with_timestamp(data: Vec<Transaction>, timestamp: i64) -> Self {
        let mut block = Self {
            index: 0,
            timestamp,
            data,
            nonce: 0,
            prev_hash: String::from(GENESIS_PREV_HASH),
            hash: String::new(),
        };
        block.recompute_hash();
        block
    }

    pub fn compute_hash(&self) -> String {
        digest(self.index, self.timestamp, &self.data, self.nonce, &self.prev_hash)
    }

    pub(crate) fn recompute_hash(&mut self) {
        self.hash = self.compute_hash();
    }

    /// Assign the chain-owned fields and rehash. The nonce is left as is.
    pub(crate) fn relink(&mut self, index: u64, prev_hash: String, data: Vec<Transaction>) {
        self.index = index;
        self.prev_hash = prev_hash;
        self.data = data;
        self.recompute_hash();
    }

    pub(crate) fn increment_nonce(&mut self) {
        self.nonce = self.nonce.wrapping_add(1);
        self.recompute_hash();
    }

    /// Cached hash still matches the block content.
    pub fn has_valid_hash(&self) -> bool {
        self.hash == self.compute_hash()
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn data(&self) -> &[Transaction] {
        &self.data
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn prev_hash(&self) -> &str {
        &self.prev_hash
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }
}
