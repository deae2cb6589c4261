use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use dinuseg_core::models::{LabelMode, ValueMode};
use dinuseg_segment::{SegmentOptions, segment_fasta};

pub fn run_segment(matches: &ArgMatches) -> Result<()> {
    let fasta = matches
        .get_one::<String>("fasta")
        .expect("A path to a FASTA file is required.");

    let min_length = matches
        .get_one::<usize>("min-length")
        .expect("A minimum region length is required.");

    let label_mode = matches
        .get_one::<String>("label")
        .expect("A label mode is required.")
        .parse::<LabelMode>()
        .map_err(anyhow::Error::msg)?;

    let value_mode = matches
        .get_one::<String>("value")
        .expect("A value mode is required.")
        .parse::<ValueMode>()
        .map_err(anyhow::Error::msg)?;

    let gap_limit = matches
        .get_one::<usize>("gap-limit")
        .expect("A gap limit is required.");

    let threads = matches
        .get_one::<usize>("threads")
        .expect("A thread count is required.");

    let output = matches.get_one::<String>("output").map(Path::new);

    let options = SegmentOptions {
        min_length: *min_length,
        label_mode,
        value_mode,
    };

    segment_fasta(Path::new(fasta), output, &options, *gap_limit, *threads)?;

    Ok(())
}
