use log::{debug, info, warn};

use super::{
    Block, DEFAULT_DIFFICULTY, DEFAULT_MINER_REWARD, DIFFICULTY_FLOOR, GENESIS_PREV_HASH,
    TARGET_BLOCK_TIME_MS, miner,
};
use crate::error::ValidationError;
use crate::transaction::Transaction;

/// Tunables fixed at chain creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainSettings {
    pub initial_difficulty: u32,
    pub miner_reward: i64,
}

impl Default for ChainSettings {
    fn default() -> Self {
        Self {
            initial_difficulty: DEFAULT_DIFFICULTY,
            miner_reward: DEFAULT_MINER_REWARD,
        }
    }
}

/// In-memory Proof-of-Work ledger.
///
/// The chain exclusively owns its blocks and the pending pool. A candidate
/// block belongs to the mining routine until it is accepted, then it is moved
/// into `blocks` and never touched again.
#[derive(Debug)]
pub struct Chain {
    blocks: Vec<Block>,
    difficulty: u32,
    pending_tx: Vec<Transaction>,
    miner_reward: i64,
}

impl Chain {
    /// Create a chain whose genesis block carries `genesis` and mine it.
    pub fn new(genesis: Vec<Transaction>) -> Self {
        Self::with_settings(genesis, ChainSettings::default())
    }

    pub fn with_settings(genesis: Vec<Transaction>, settings: ChainSettings) -> Self {
        let mut block = Block::new(genesis);
        miner::mine(&mut block, settings.initial_difficulty);
        info!(
            "genesis block sealed: {} (nonce={}, difficulty={})",
            block.hash(),
            block.nonce(),
            settings.initial_difficulty
        );

        Self {
            blocks: vec![block],
            difficulty: settings.initial_difficulty,
            pending_tx: Vec::new(),
            miner_reward: settings.miner_reward,
        }
    }

    pub fn last_block(&self) -> &Block {
        self.blocks
            .last()
            .expect("chain always holds at least the genesis block")
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn pending(&self) -> &[Transaction] {
        &self.pending_tx
    }

    pub fn miner_reward(&self) -> i64 {
        self.miner_reward
    }

    /// Queue a transaction for the next block. No balance check is made.
    pub fn create_tx(&mut self, tx: Transaction) {
        debug!("pending tx queued: {:?} -> {} ({:?})", tx.from, tx.to, tx.amount.raw());
        self.pending_tx.push(tx);
    }

    /// Mine a fresh template stamped now and return a copy of the sealed block.
    pub fn mine_next(&mut self, miner_address: &str) -> Result<Block, ValidationError> {
        self.add_block(Block::new(Vec::new()), miner_address)
            .map(Clone::clone)
    }

    /// Fill `candidate` from the chain head and the whole pending pool, mine
    /// it at the current difficulty and try to append it.
    pub fn add_block(
        &mut self,
        mut candidate: Block,
        miner_address: &str,
    ) -> Result<&Block, ValidationError> {
        let last = self.last_block();
        candidate.relink(last.index() + 1, last.hash().to_string(), self.pending_tx.clone());
        miner::mine(&mut candidate, self.difficulty);
        self.append_sealed(candidate, miner_address)
    }

    /// Validate an already mined block and append it on success.
    ///
    /// The pool is reset to a single reward transaction for `miner_address`.
    /// On failure blocks and pool are untouched, though the difficulty may
    /// have been retargeted.
    pub fn append_sealed(
        &mut self,
        candidate: Block,
        miner_address: &str,
    ) -> Result<&Block, ValidationError> {
        if let Err(e) = self.validate(&candidate) {
            warn!("{e}");
            warn!("block mine failed");
            return Err(e);
        }

        info!("block mined: {}", candidate.hash());
        self.blocks.push(candidate);
        self.pending_tx = vec![Transaction::coinbase(miner_address, self.miner_reward)];
        Ok(self.last_block())
    }

    /// Check a candidate against the head. Retargets the difficulty as soon
    /// as the timestamp check passes, even if the link check then fails.
    fn validate(&mut self, candidate: &Block) -> Result<(), ValidationError> {
        let last = self.last_block();

        let expected = last.index() + 1;
        if candidate.index() != expected {
            return Err(ValidationError::BadIndex {
                expected,
                got: candidate.index(),
            });
        }

        let last_ts = last.timestamp();
        let delta = candidate.timestamp() - last_ts;
        if delta <= 0 {
            return Err(ValidationError::NonMonotonicTimestamp {
                last: last_ts,
                got: candidate.timestamp(),
            });
        }

        let last_hash = last.hash().to_string();
        self.update_difficulty(delta);

        if candidate.prev_hash() != last_hash {
            return Err(ValidationError::BrokenLink {
                expected: last_hash,
                got: candidate.prev_hash().to_string(),
            });
        }

        Ok(())
    }

    fn update_difficulty(&mut self, delta_ms: i64) {
        if self.difficulty < DIFFICULTY_FLOOR {
            return;
        }
        if delta_ms < TARGET_BLOCK_TIME_MS {
            self.difficulty += 1;
            info!("difficulty increased: {}", self.difficulty);
        } else if delta_ms > TARGET_BLOCK_TIME_MS {
            self.difficulty -= 1;
            info!("difficulty decreased: {}", self.difficulty);
        }
    }

    /// Balance from replaying every sealed block. Pending transactions are
    /// ignored; malformed amounts count as zero.
    pub fn get_balance(&self, address: &str) -> i64 {
        let mut balance: i64 = 0;
        for tx in self.blocks.iter().flat_map(|b| b.data()) {
            if tx.from.as_deref() == Some(address) {
                balance = balance.saturating_sub(tx.amount.value());
            }
            if tx.to == address {
                balance = balance.saturating_add(tx.amount.value());
            }
        }
        balance
    }

    /// Full audit: genesis shape, hash integrity and linkage of every block.
    /// Difficulty is not rechecked since it moves over time.
    pub fn is_valid_chain(&self) -> bool {
        let Some(genesis) = self.blocks.first() else {
            return false;
        };
        if genesis.index() != 0
            || genesis.prev_hash() != GENESIS_PREV_HASH
            || !genesis.has_valid_hash()
        {
            return false;
        }

        self.blocks.windows(2).all(|pair| {
            let (prev, current) = (&pair[0], &pair[1]);
            current.has_valid_hash()
                && current.prev_hash() == prev.hash()
                && current.index() == prev.index() + 1
                && current.timestamp() > prev.timestamp()
        })
    }
}
