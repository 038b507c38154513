// Full-string polynomial hash for dictionary words

/// Multiplier for the rolling hash.
const HASH_BASE: u64 = 37;

/// Hash a word by folding every character into the accumulator:
/// `h = h * 37 + code(c)`, with wrapping arithmetic.
///
/// The fold must cover the whole word. Keeping only the last character's
/// code collapses the table to a few dozen effective buckets regardless
/// of capacity, and chain scans degrade into a linear search over the
/// entire dictionary.
pub fn word_hash(word: &str) -> u64 {
    let mut hash: u64 = 0;
    for c in word.chars() {
        hash = hash.wrapping_mul(HASH_BASE).wrapping_add(c as u64);
    }
    hash
}

/// Reduce a hash value to a bucket index for a table with `capacity`
/// buckets. `capacity` must be non-zero; the table constructor enforces
/// this before any index is computed.
pub fn bucket_index(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}
