//! Full catalog records.
//!
//! Mirrors the book schema of the library systems this data feeds: title,
//! author, genre, publication year, and a one-decimal rating. Authors and
//! genres come from fixed tables; titles reuse the alphanumeric generator.

use rand::Rng;

use crate::titles;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bruno", "Carmen", "Dmitri", "Elena", "Farid", "Grace", "Hugo", "Ingrid", "Jonas",
    "Keiko", "Liam", "Mariam", "Nadia", "Oscar", "Priya",
];

const LAST_NAMES: &[&str] = &[
    "Almeida", "Becker", "Chen", "Dubois", "Eriksen", "Fontaine", "Garcia", "Haddad", "Ivanova",
    "Jensen", "Kowalski", "Lindqvist", "Moretti", "Novak", "Okafor", "Petrov",
];

const GENRES: &[&str] = &[
    "Fantasy",
    "Science Fiction",
    "Mystery",
    "Thriller",
    "Romance",
    "Horror",
    "Biography",
    "History",
    "Poetry",
    "Drama",
    "Adventure",
    "Reference",
];

const MIN_YEAR: u16 = 1950;
const MAX_YEAR: u16 = 2024;

/// One generated catalog record. `title` borrows the generator's scratch
/// buffer and is valid until the next `next_entry` call.
pub struct CatalogEntry<'a> {
    pub title: &'a str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub genre: &'static str,
    pub year: u16,
    pub rating: f64,
}

/// Generator of full catalog entries.
pub struct CatalogGen<R> {
    rng: R,
    title_len: usize,
    buf: Vec<u8>,
}

impl<R: Rng> CatalogGen<R> {
    pub fn new(rng: R, title_len: usize) -> Self {
        Self {
            rng,
            title_len,
            buf: Vec::with_capacity(title_len),
        }
    }

    pub fn next_entry(&mut self) -> CatalogEntry<'_> {
        let first_name = pick(&mut self.rng, FIRST_NAMES);
        let last_name = pick(&mut self.rng, LAST_NAMES);
        let genre = pick(&mut self.rng, GENRES);
        let year = self.rng.random_range(MIN_YEAR..=MAX_YEAR);
        // Integer tenths, so ratings carry exactly one decimal place.
        let rating = f64::from(self.rng.random_range(0u32..=100)) / 10.0;
        let title = titles::fill_title(&mut self.rng, self.title_len, &mut self.buf);
        CatalogEntry {
            title,
            first_name,
            last_name,
            genre,
            year,
            rating,
        }
    }
}

fn pick<R: Rng>(rng: &mut R, table: &'static [&'static str]) -> &'static str {
    table[rng.random_range(0..table.len())]
}
