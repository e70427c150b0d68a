use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::{self, BufWriter};
use std::time::Instant;

use bookgen::output::{self, DatasetOptions, Schema};

#[derive(Parser)]
#[command(
    name = "bookgen",
    about = "Bulk synthetic JSON book-record generator",
    version
)]
struct Cli {
    /// Number of records to generate
    #[arg(short = 'n', long, default_value_t = 10_000_000)]
    count: u64,

    /// Characters per generated title
    #[arg(long, default_value_t = 5)]
    title_length: usize,

    /// Output file; "-" writes to stdout
    #[arg(short = 'o', long, default_value = "books.json")]
    output: String,

    /// Record shape to emit
    #[arg(long, value_enum, default_value = "title")]
    schema: SchemaArg,

    /// Print timing breakdown to stderr (for profiling)
    #[arg(long = "debug-timing", hide = true)]
    debug_timing: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemaArg {
    /// Bare {"title": ...} records
    Title,
    /// Full entries: title, author, genre, year, rating
    Catalog,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Seeded once from OS entropy; runs are deliberately not reproducible.
    let rng = StdRng::try_from_os_rng()
        .context("failed to seed the random generator from OS entropy")?;

    let opts = DatasetOptions {
        count: cli.count,
        title_length: cli.title_length,
        schema: match cli.schema {
            SchemaArg::Title => Schema::Title,
            SchemaArg::Catalog => Schema::Catalog,
        },
    };

    let t0 = Instant::now();
    let t_open;
    let t_write;

    if cli.output == "-" {
        let stdout = io::stdout().lock();
        let out = BufWriter::with_capacity(128 * 1024, stdout);
        t_open = t0.elapsed();

        let t1 = Instant::now();
        output::write_dataset(out, rng, &opts).context("failed writing dataset to stdout")?;
        t_write = t1.elapsed();
    } else {
        let file = File::create(&cli.output)
            .with_context(|| format!("failed to create output file: {}", cli.output))?;
        let out = BufWriter::with_capacity(128 * 1024, file);
        t_open = t0.elapsed();

        let t1 = Instant::now();
        output::write_dataset(out, rng, &opts)
            .with_context(|| format!("failed writing dataset to: {}", cli.output))?;
        t_write = t1.elapsed();
    }

    if cli.debug_timing {
        let total = t_open + t_write;
        eprintln!(
            "--- debug-timing: {} ({} records) ---",
            cli.output, opts.count
        );
        eprintln!("  open:   {:>8.2}ms", t_open.as_secs_f64() * 1000.0);
        eprintln!(
            "  write:  {:>8.2}ms  ({:.2}M records/s)",
            t_write.as_secs_f64() * 1000.0,
            opts.count as f64 / t_write.as_secs_f64() / 1e6
        );
        eprintln!("  total:  {:>8.2}ms", total.as_secs_f64() * 1000.0);
    }

    Ok(())
}
