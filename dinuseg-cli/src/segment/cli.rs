use clap::{Arg, Command};

pub use dinuseg_segment::consts::*;

/// Creates the segment CLI Command object
pub fn create_segment_cli() -> Command {
    Command::new(SEGMENT_CMD)
        .author("Databio")
        .about("Segment a FASTA file into regions of homogeneous dinucleotide composition")
        .arg(
            Arg::new("fasta")
                .help("Path to the FASTA file to segment (plain or gzipped)")
                .required(true),
        )
        .arg(
            Arg::new("min-length")
                .long("min-length")
                .short('m')
                .value_parser(clap::value_parser!(usize))
                .default_value("1000")
                .help("Length floor; both halves of a split must exceed this to recurse"),
        )
        .arg(
            Arg::new("label")
                .long("label")
                .short('l')
                .default_value("class")
                .help("Label column mode: class (nearest reference) or depth (recursion depth)"),
        )
        .arg(
            Arg::new("value")
                .long("value")
                .short('v')
                .default_value("gc")
                .help("Value column mode: gc (GC fraction) or rip (RIP index scaled by 50)"),
        )
        .arg(
            Arg::new("gap-limit")
                .long("gap-limit")
                .value_parser(clap::value_parser!(usize))
                .default_value("5")
                .help("Runs of more than this many non-ACGT bases split sequences into contigs"),
        )
        .arg(
            Arg::new("threads")
                .long("threads")
                .short('t')
                .value_parser(clap::value_parser!(usize))
                .default_value("0")
                .help("Number of worker threads; 0 uses all available cores"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write records to this file instead of stdout"),
        )
}
