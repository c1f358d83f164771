use super::Block;

/// `true` when the hex hash starts with `difficulty` zero characters.
pub fn meets_difficulty(hash: &str, difficulty: u32) -> bool {
    let d = difficulty as usize;
    hash.len() >= d && hash.bytes().take(d).all(|c| c == b'0')
}

/// Proof-of-Work: bump the nonce from its current value until the hash meets
/// `difficulty`. Blocks the caller until it succeeds; there is no upper bound.
pub fn mine(block: &mut Block, difficulty: u32) {
    while !meets_difficulty(block.hash(), difficulty) {
        block.increment_nonce();
    }
}

#[cfg(test)]
mod tests {
    use super::{meets_difficulty, mine};
    use crate::blockchain::Block;
    use crate::blockchain::hash::digest;
    use crate::transaction::Transaction;

    #[test]
    fn predicate_counts_leading_zeros() {
        assert!(meets_difficulty("00ab", 2));
        assert!(!meets_difficulty("0ab0", 2));
        assert!(meets_difficulty("ffff", 0));
        assert!(!meets_difficulty("00", 3));
    }

    #[test]
    fn mining_produces_leading_zeros() {
        let mut b = Block::with_timestamp(vec![Transaction::transfer("Bob", "Alice", 1)], 1_234);
        mine(&mut b, 2);
        assert!(b.hash().starts_with("00"));
        assert_eq!(
            b.hash(),
            digest(b.index(), b.timestamp(), b.data(), b.nonce(), b.prev_hash())
        );
    }

    #[test]
    fn difficulty_zero_keeps_nonce() {
        let mut b = Block::with_timestamp(vec![], 1_234);
        let before = b.hash().to_string();
        mine(&mut b, 0);
        assert_eq!(b.nonce(), 0);
        assert_eq!(b.hash(), before);
    }

    #[test]
    fn mined_block_is_first_solution_from_start_nonce() {
        let mut b = Block::with_timestamp(vec![], 99);
        mine(&mut b, 1);
        let found = b.nonce();
        // Every earlier nonce must fail the predicate.
        for n in 0..found {
            let h = digest(b.index(), b.timestamp(), b.data(), n, b.prev_hash());
            assert!(!meets_difficulty(&h, 1));
        }
    }
}
