//! FASTA input and gap excision: turning named sequences into the
//! gap-free contigs the segmenter consumes.

use std::io::BufRead;
use std::path::Path;

use dinuseg_core::errors::SequenceError;
use dinuseg_core::models::Contig;
use dinuseg_core::utils::get_dynamic_reader;

///
/// Read a FASTA file (plain or gzipped) and cut every record into
/// gap-free contigs.
///
/// Runs of more than `gap_limit` consecutive non-A/C/G/T symbols are
/// excised and the surviving stretches keep their absolute start offsets
/// within the parent sequence. Shorter runs stay inside their contig and
/// encode as the unknown symbol class downstream.
///
pub fn read_contigs<T: AsRef<Path>>(
    file_path: T,
    gap_limit: usize,
) -> Result<Vec<Contig>, SequenceError> {
    let reader = get_dynamic_reader(file_path.as_ref())
        .map_err(|e| SequenceError::FileReadError(e.to_string()))?;

    let mut contigs: Vec<Contig> = Vec::new();
    let mut current_name: Option<String> = None;
    let mut current_seq: Vec<u8> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some(name) = current_name.take() {
                split_into_contigs(&name, &current_seq, gap_limit, &mut contigs);
            }

            // the sequence name is the first word of the header
            let name = header.split_whitespace().next().unwrap_or("").to_string();
            current_name = Some(name);
            current_seq.clear();
        } else if current_name.is_some() {
            current_seq.extend(line.bytes());
        } else {
            return Err(SequenceError::MissingHeader(line.to_string()));
        }
    }

    if let Some(name) = current_name.take() {
        split_into_contigs(&name, &current_seq, gap_limit, &mut contigs);
    }

    Ok(contigs)
}

///
/// Cut one sequence into contigs around gap runs longer than `gap_limit`.
///
/// A run reaching back to the start of the sequence leaves no contig
/// behind it, and a trailing run is trimmed off the final contig. Empty
/// stretches are dropped.
///
pub fn split_into_contigs(name: &str, seq: &[u8], gap_limit: usize, out: &mut Vec<Contig>) {
    let mut base_start = 0usize;
    let mut gap_run = 0usize;

    for (i, &base) in seq.iter().enumerate() {
        if is_gap(base) {
            gap_run += 1;
            continue;
        }

        if gap_run > gap_limit {
            // gap_run == i means the run spans from the sequence start
            if gap_run != i {
                out.push(Contig::new(
                    name.to_string(),
                    base_start,
                    seq[base_start..i - gap_run].to_vec(),
                ));
            }
            base_start = i;
        }
        gap_run = 0;
    }

    let end = seq.len() - gap_run;
    if end > base_start {
        out.push(Contig::new(
            name.to_string(),
            base_start,
            seq[base_start..end].to_vec(),
        ));
    }
}

fn is_gap(base: u8) -> bool {
    !matches!(base.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'T')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Write;

    const GAP_LIMIT: usize = 5;

    fn contigs_of(seq: &[u8]) -> Vec<Contig> {
        let mut out = Vec::new();
        split_into_contigs("chr1", seq, GAP_LIMIT, &mut out);
        out
    }

    #[test]
    fn test_no_gaps_is_one_contig() {
        let contigs = contigs_of(b"ACGTACGT");
        assert_eq!(contigs.len(), 1);
        assert_eq!(contigs[0].offset, 0);
        assert_eq!(contigs[0].seq, b"ACGTACGT");
    }

    #[test]
    fn test_long_gap_run_splits_with_absolute_offsets() {
        let contigs = contigs_of(b"AAAANNNNNNNCCCC");
        assert_eq!(contigs.len(), 2);
        assert_eq!(contigs[0].offset, 0);
        assert_eq!(contigs[0].seq, b"AAAA");
        assert_eq!(contigs[1].offset, 11);
        assert_eq!(contigs[1].seq, b"CCCC");
    }

    #[test]
    fn test_short_gap_run_stays_inside_the_contig() {
        let contigs = contigs_of(b"AAAANNNCCCC");
        assert_eq!(contigs.len(), 1);
        assert_eq!(contigs[0].seq, b"AAAANNNCCCC");
    }

    #[test]
    fn test_leading_gap_run_emits_no_empty_contig() {
        let contigs = contigs_of(b"NNNNNNNACGT");
        assert_eq!(contigs.len(), 1);
        assert_eq!(contigs[0].offset, 7);
        assert_eq!(contigs[0].seq, b"ACGT");
    }

    #[test]
    fn test_trailing_gap_run_is_trimmed() {
        let contigs = contigs_of(b"ACGTNNNNNNN");
        assert_eq!(contigs.len(), 1);
        assert_eq!(contigs[0].seq, b"ACGT");
    }

    #[test]
    fn test_all_gaps_yields_nothing() {
        let contigs = contigs_of(b"NNNNNNNNNN");
        assert!(contigs.is_empty());
    }

    #[test]
    fn test_three_way_split() {
        let contigs = contigs_of(b"AAAANNNNNNNCCCCNNNNNNNGGGG");
        assert_eq!(contigs.len(), 3);
        assert_eq!(
            contigs.iter().map(|c| c.offset).collect::<Vec<_>>(),
            vec![0, 11, 22]
        );
        assert_eq!(contigs[2].seq, b"GGGG");
    }

    #[fixture]
    fn fasta_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            ">chr1 some description\nACGTacgt\nACGT\n>chr2\nTTTTNNNNNNNNGGGG\n"
        )
        .unwrap();
        file.flush().unwrap();
        file
    }

    #[rstest]
    fn test_read_contigs_from_fasta(fasta_file: tempfile::NamedTempFile) {
        let contigs = read_contigs(fasta_file.path(), GAP_LIMIT).unwrap();

        assert_eq!(contigs.len(), 3);
        assert_eq!(contigs[0].name, "chr1");
        assert_eq!(contigs[0].seq, b"ACGTacgtACGT");
        assert_eq!(contigs[1].name, "chr2");
        assert_eq!(contigs[1].seq, b"TTTT");
        assert_eq!(contigs[2].name, "chr2");
        assert_eq!(contigs[2].offset, 12);
        assert_eq!(contigs[2].seq, b"GGGG");
    }

    #[test]
    fn test_sequence_before_header_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "ACGT\n>chr1\nACGT\n").unwrap();
        file.flush().unwrap();

        let result = read_contigs(file.path(), GAP_LIMIT);
        assert!(matches!(result, Err(SequenceError::MissingHeader(_))));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = read_contigs("/no/such/file.fa", GAP_LIMIT);
        assert!(matches!(result, Err(SequenceError::FileReadError(_))));
    }
}
