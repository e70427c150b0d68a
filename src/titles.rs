//! Random title generation.
//!
//! Titles are fixed-length strings drawn uniformly, with replacement, from
//! the 62-character alphanumeric alphabet. Sampling goes through
//! `rand::distr::Alphanumeric`, which covers exactly that set.

use rand::Rng;
use rand::distr::Alphanumeric;

/// The 62 characters titles are drawn from: `A-Z`, `a-z`, `0-9`.
///
/// `Alphanumeric` samples uniformly from exactly this set; the constant
/// exists so tests have a membership oracle that is independent of rand.
pub const ALPHABET: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Fill `buf` with `len` random alphanumeric bytes and return them as a
/// string slice. `len == 0` yields the empty string.
pub fn fill_title<'b, R: Rng>(rng: &mut R, len: usize, buf: &'b mut Vec<u8>) -> &'b str {
    buf.clear();
    buf.extend(rng.sample_iter(Alphanumeric).take(len));
    std::str::from_utf8(buf).expect("Alphanumeric yields ASCII")
}

/// Generator of fixed-length random titles.
///
/// Owns its rng and a scratch buffer; `next_title` returns a borrow valid
/// until the next call, so the hot loop allocates nothing per record.
pub struct TitleGen<R> {
    rng: R,
    len: usize,
    buf: Vec<u8>,
}

impl<R: Rng> TitleGen<R> {
    pub fn new(rng: R, len: usize) -> Self {
        Self {
            rng,
            len,
            buf: Vec::with_capacity(len),
        }
    }

    /// Draw the next title. Draws are independent; collisions between
    /// successive titles are possible and fine.
    pub fn next_title(&mut self) -> &str {
        fill_title(&mut self.rng, self.len, &mut self.buf)
    }
}
