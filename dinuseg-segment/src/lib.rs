//! Recursive entropy-driven segmentation of DNA by dinucleotide
//! composition.
//!
//! A sequence is cut wherever splitting maximizes the information gain
//! between the dinucleotide distributions of the two halves, recursively,
//! until regions fall below a length floor. Each leaf region is reported
//! with its GC fraction or RIP index, its 14-bin symmetrized dinucleotide
//! distribution, and either the nearest reference distribution or its
//! recursion depth.
//!
//! # Example
//!
//! ```no_run
//! use dinuseg_segment::{SegmentOptions, segment_fasta};
//!
//! let options = SegmentOptions::default();
//! segment_fasta("input.fa", None, &options, 5, 4).unwrap();
//! ```

pub mod counting;
pub mod distribution;
pub mod reading;
pub mod references;
pub mod segmenting;
pub mod writing;

pub mod consts {
    pub const SEGMENT_CMD: &str = "segment";
    pub const DEFAULT_MIN_LENGTH: usize = 1000;
    pub const DEFAULT_GAP_LIMIT: usize = 5;
}

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use rayon::prelude::*;

use dinuseg_core::models::SegmentRecord;

// re-exports
pub use self::reading::read_contigs;
pub use self::segmenting::{SegmentOptions, segment_contig};

///
/// Segment every contig of a FASTA file and write one row per leaf
/// region.
///
/// Contigs are processed in parallel on a fixed-size thread pool; each
/// contig's records are collected independently and written afterwards by
/// a single writer, in input-contig order. Within one contig, records
/// come out left before right.
///
/// # Arguments
/// - filepath: FASTA file to segment, plain or gzipped
/// - output: output file, or None for stdout
/// - options: segmentation policy (length floor, label and value modes)
/// - gap_limit: gap runs longer than this split sequences into contigs
/// - num_threads: worker threads; 0 uses all available cores
///
pub fn segment_fasta<T: AsRef<Path>>(
    filepath: T,
    output: Option<&Path>,
    options: &SegmentOptions,
    gap_limit: usize,
    num_threads: usize,
) -> Result<()> {
    let contigs = read_contigs(filepath.as_ref(), gap_limit)
        .with_context(|| format!("Failed to read contigs from: {:?}", filepath.as_ref()))?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .context("Failed to build worker thread pool")?;

    let bar = ProgressBar::new(contigs.len() as u64);

    let per_contig: Vec<Vec<SegmentRecord>> = pool.install(|| {
        contigs
            .par_iter()
            .map(|contig| {
                let records = segment_contig(contig, options);
                bar.inc(1);
                records
            })
            .collect()
    });

    bar.finish_and_clear();

    let mut writer = writing::get_record_writer(output)?;
    for records in &per_contig {
        writing::write_records(&mut writer, records)?;
    }
    writer.flush()?;

    Ok(())
}
