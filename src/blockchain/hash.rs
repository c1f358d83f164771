use sha2::{Digest, Sha256};

use crate::transaction::Transaction;

/// SHA-256 over the block fields, lowercase hex.
///
/// The preimage is `index`, `timestamp`, compact JSON of `data`, `nonce` and
/// `prev_hash` concatenated without separators. Same inputs give the same
/// digest on every platform.
pub fn digest(index: u64, timestamp: i64, data: &[Transaction], nonce: u64, prev_hash: &str) -> String {
    // Transaction is plain strings/JSON values; serialization cannot fail.
    let data_json = serde_json::to_string(data).expect("serialize block data");
    let preimage = format!("{index}{timestamp}{data_json}{nonce}{prev_hash}");
    let mut hasher = Sha256::new();
    hasher.update(preimage.as_bytes());
    hex::encode(hasher.finalize())
}
