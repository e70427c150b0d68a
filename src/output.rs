//! Streaming JSON output.
//!
//! Writes the dataset as one top-level JSON array directly to a `Write`
//! sink — no intermediate `String` allocation, nothing retained between
//! records. Uses `itoa` for integers and `ryu` for floats.
//!
//! The layout is line-per-token, matching what downstream loaders expect:
//!
//! ```text
//! [
//! {
//! "title": "Xq7Rb"
//! },
//! {
//! "title": "09zAl"
//! }
//! ]
//! ```

use std::io::{self, Write};

use rand::Rng;

use crate::catalog::{CatalogEntry, CatalogGen};
use crate::titles::TitleGen;

/// Record shape selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    /// Bare `{"title": …}` records (the load-test default).
    Title,
    /// Full library entries: title, author, genre, year, rating.
    Catalog,
}

/// Options for one generation run.
#[derive(Debug, Clone)]
pub struct DatasetOptions {
    /// Number of records to emit.
    pub count: u64,
    /// Characters per generated title.
    pub title_length: usize,
    /// Record shape to emit.
    pub schema: Schema,
}

/// Streaming writer for one JSON array of records.
///
/// The array header is written on construction; `finish` emits the footer,
/// flushes, and consumes the writer. A writer dropped without `finish`
/// leaves the array unterminated, which is the aborted-run contract: a
/// failed run leaves a truncated file, no recovery attempted.
pub struct DatasetWriter<W: Write> {
    out: W,
    records: u64,
}

impl<W: Write> DatasetWriter<W> {
    pub fn new(mut out: W) -> io::Result<Self> {
        out.write_all(b"[\n")?;
        Ok(Self { out, records: 0 })
    }

    /// Number of records written so far.
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Separator before every record but the first; the comma lands directly
    /// after the previous record's closing brace.
    fn sep(&mut self) -> io::Result<()> {
        if self.records > 0 {
            self.out.write_all(b",\n")?;
        }
        self.records += 1;
        Ok(())
    }

    /// Write one `{"title": …}` record.
    pub fn title_record(&mut self, title: &str) -> io::Result<()> {
        debug_assert!(escape_free(title));
        self.sep()?;
        self.out.write_all(b"{\n\"title\": \"")?;
        self.out.write_all(title.as_bytes())?;
        self.out.write_all(b"\"\n}")
    }

    /// Write one full catalog record.
    pub fn catalog_record(&mut self, entry: &CatalogEntry<'_>) -> io::Result<()> {
        debug_assert!(escape_free(entry.title));
        self.sep()?;
        self.out.write_all(b"{\n\"title\": \"")?;
        self.out.write_all(entry.title.as_bytes())?;
        self.out.write_all(b"\",\n\"author\": \"")?;
        self.out.write_all(entry.first_name.as_bytes())?;
        self.out.write_all(b" ")?;
        self.out.write_all(entry.last_name.as_bytes())?;
        self.out.write_all(b"\",\n\"genre\": \"")?;
        self.out.write_all(entry.genre.as_bytes())?;
        self.out.write_all(b"\",\n\"year\": ")?;
        let mut year = itoa::Buffer::new();
        self.out.write_all(year.format(entry.year).as_bytes())?;
        self.out.write_all(b",\n\"rating\": ")?;
        let mut rating = ryu::Buffer::new();
        self.out.write_all(rating.format(entry.rating).as_bytes())?;
        self.out.write_all(b"\n}")
    }

    /// Terminate the array, flush, and hand the sink back.
    pub fn finish(mut self) -> io::Result<W> {
        if self.records == 0 {
            self.out.write_all(b"]")?;
        } else {
            self.out.write_all(b"\n]")?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Generate `opts.count` records and stream them to `out` as one JSON array.
///
/// The serializer drives the generator once per record. Returns the sink
/// after the footer has been written and flushed.
pub fn write_dataset<W: Write, R: Rng>(out: W, rng: R, opts: &DatasetOptions) -> io::Result<W> {
    let mut w = DatasetWriter::new(out)?;
    match opts.schema {
        Schema::Title => {
            let mut titles = TitleGen::new(rng, opts.title_length);
            for _ in 0..opts.count {
                w.title_record(titles.next_title())?;
            }
        }
        Schema::Catalog => {
            let mut entries = CatalogGen::new(rng, opts.title_length);
            for _ in 0..opts.count {
                w.catalog_record(&entries.next_entry())?;
            }
        }
    }
    w.finish()
}

/// Every emitted string comes from escape-free fixed sets (alphanumeric
/// titles, plain-ASCII tables), so the writer carries no escaping logic.
fn escape_free(s: &str) -> bool {
    s.bytes()
        .all(|b| (0x20..0x7f).contains(&b) && b != b'"' && b != b'\\')
}
