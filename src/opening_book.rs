//! A precomputed, read-only map from early positions to their exact scores

use anyhow::{anyhow, Result};
use byteorder::{LittleEndian, ReadBytesExt};

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::solver::MIN_SCORE;
use crate::transposition_table::next_prime;
use crate::{HEIGHT, WIDTH};

/// Marker bytes opening a book file
const BOOK_MAGIC: &[u8; 4] = b"C4BK";

/// An opening book of solved early-game positions
///
/// # Notes
/// The book maps the canonical key of every position at one fixed ply depth
/// to an 8-bit upper-bound code in the transposition-table encoding; because
/// book entries are exact, a hit decodes directly to the score. Mirrored
/// positions share a canonical key and therefore an entry.
///
/// # File format
/// Little-endian throughout: the marker `C4BK`, then one byte each for board
/// width, board height, book depth, table log-size, partial-key width in
/// bytes and value width in bytes, followed by the partial-key array and the
/// value array, each `next_prime(1 << log_size)` entries long.
pub struct OpeningBook {
    keys: Vec<u32>,
    values: Vec<u8>,
    key_bits: u32,
    depth: usize,
}

impl OpeningBook {
    /// Reads a book from disk, validating the header against the compiled
    /// board dimensions
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = BufReader::new(File::open(path)?);

        let mut magic = [0; 4];
        file.read_exact(&mut magic)?;
        if &magic != BOOK_MAGIC {
            return Err(anyhow!("not an opening book file"));
        }

        let width = file.read_u8()? as usize;
        let height = file.read_u8()? as usize;
        let depth = file.read_u8()? as usize;
        let log_size = file.read_u8()? as usize;
        let key_bytes = file.read_u8()? as usize;
        let value_bytes = file.read_u8()? as usize;

        if width != WIDTH || height != HEIGHT {
            return Err(anyhow!(
                "book is for a {}x{} board, expected {}x{}",
                width,
                height,
                WIDTH,
                HEIGHT
            ));
        }
        if depth == 0 || depth > WIDTH * HEIGHT {
            return Err(anyhow!("invalid book depth {}", depth));
        }
        if log_size == 0 || log_size > 30 {
            return Err(anyhow!("invalid table log-size {}", log_size));
        }
        if key_bytes != 1 && key_bytes != 2 && key_bytes != 4 {
            return Err(anyhow!("unsupported partial-key width of {} bytes", key_bytes));
        }
        if value_bytes != 1 {
            return Err(anyhow!("unsupported value width of {} bytes", value_bytes));
        }

        let size = next_prime(1 << log_size) as usize;

        let mut keys = vec![0; size];
        for key in keys.iter_mut() {
            *key = match key_bytes {
                1 => file.read_u8()? as u32,
                2 => file.read_u16::<LittleEndian>()? as u32,
                _ => file.read_u32::<LittleEndian>()?,
            };
        }
        let mut values = vec![0; size];
        file.read_exact(&mut values)?;

        Ok(Self {
            keys,
            values,
            key_bits: 8 * key_bytes as u32,
            depth,
        })
    }

    /// The ply depth at which every book entry sits
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Looks up a canonical key and decodes the stored score
    ///
    /// Returns `None` when the slot is empty or occupied by another key.
    pub fn get(&self, key: u64) -> Option<i32> {
        let index = (key % self.keys.len() as u64) as usize;
        let partial = (key & ((1 << self.key_bits) - 1)) as u32;
        if self.keys[index] == partial && self.values[index] != 0 {
            Some(self.values[index] as i32 + MIN_SCORE - 1)
        } else {
            None
        }
    }
}
