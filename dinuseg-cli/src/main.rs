mod segment;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "dinuseg";
    pub const BIN_NAME: &str = "dinuseg";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Segment DNA sequences into regions of homogeneous dinucleotide composition and classify them against reference genome profiles.")
        .subcommand_required(true)
        .subcommand(segment::cli::create_segment_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // SEGMENT
        //
        Some((segment::cli::SEGMENT_CMD, matches)) => {
            segment::handlers::run_segment(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
