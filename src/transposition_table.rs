//! A fixed-size cache for the score bounds established by earlier searches

use crate::{HEIGHT, WIDTH};

// number of significant bits in a position key
const KEY_SIZE: usize = WIDTH * (HEIGHT + 1);

// base 2 log of the number of entries
const LOG_SIZE: usize = 23;

const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut factor = 2;
    while factor * factor <= n {
        if n % factor == 0 {
            return false;
        }
        factor += 1;
    }
    true
}

/// Returns the smallest prime greater than or equal to `n`
pub(crate) const fn next_prime(n: u64) -> u64 {
    let mut candidate = n;
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

/// The capacity of the transposition table in entries
pub const TABLE_SIZE: usize = next_prime(1 << LOG_SIZE) as usize;

// stored keys keep the low 32 bits of the full 49-bit key
type PartialKey = u32;

/// A direct-mapped, lossy cache of search bounds keyed by position
///
/// # Notes
/// Entries are indexed by `key % TABLE_SIZE` and collisions overwrite: the
/// newest entry wins. Keys are truncated to 32 bits on storage; the capacity
/// is an odd prime while the truncation modulus is a power of two, so the
/// pair of residues still determines the full 49-bit key (Chinese remainder
/// theorem) and a partial-key match can never confuse two distinct positions.
///
/// Values are 8-bit bound codes with 0 marking an empty slot; see [`Solver`]
/// for the encoding of upper and lower bounds.
///
/// [`Solver`]: ../solver/struct.Solver.html
pub struct TranspositionTable {
    keys: Vec<PartialKey>,
    values: Vec<u8>,
}

impl TranspositionTable {
    /// Creates an empty table, allocating both arrays up front
    pub fn new() -> Self {
        Self {
            keys: vec![0; TABLE_SIZE],
            values: vec![0; TABLE_SIZE],
        }
    }

    /// Discards every entry without releasing the storage
    pub fn reset(&mut self) {
        for key in self.keys.iter_mut() {
            *key = 0;
        }
        for value in self.values.iter_mut() {
            *value = 0;
        }
    }

    /// Stores a non-zero value for a key, overwriting whatever occupied the
    /// slot
    pub fn put(&mut self, key: u64, value: u8) {
        debug_assert!(key >> KEY_SIZE == 0);
        debug_assert!(value != 0);
        let index = Self::index(key);
        self.keys[index] = key as PartialKey;
        self.values[index] = value;
    }

    /// Returns the value stored for a key, or 0 when the slot is empty or
    /// holds another position
    pub fn get(&self, key: u64) -> u8 {
        debug_assert!(key >> KEY_SIZE == 0);
        let index = Self::index(key);
        if self.keys[index] == key as PartialKey {
            self.values[index]
        } else {
            0
        }
    }

    fn index(key: u64) -> usize {
        (key % TABLE_SIZE as u64) as usize
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_a_prime_above_the_log_size() {
        assert!(TABLE_SIZE >= 1 << LOG_SIZE);
        assert!(is_prime(TABLE_SIZE as u64));
        // odd capacity is what keeps the partial keys collision-free
        assert_eq!(TABLE_SIZE % 2, 1);
    }

    #[test]
    fn put_get_overwrite_and_reset() {
        let mut table = TranspositionTable::new();
        let key = 123_456_789;
        assert_eq!(table.get(key), 0);

        table.put(key, 42);
        assert_eq!(table.get(key), 42);

        // a key landing on the same slot evicts the previous entry
        let collider = key + TABLE_SIZE as u64;
        table.put(collider, 7);
        assert_eq!(table.get(collider), 7);
        assert_eq!(table.get(key), 0);

        table.reset();
        assert_eq!(table.get(collider), 0);
    }
}
