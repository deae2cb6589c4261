//! The recursive entropy-maximizing split search over one contig.

use dinuseg_core::models::{Contig, LabelMode, SegmentRecord, ValueMode};

use crate::counting::{DinucCounts, encode};
use crate::distribution::DinucDistribution;
use crate::references::classify;

/// Tunable policy for one segmentation run.
#[derive(Debug, Clone, Copy)]
pub struct SegmentOptions {
    /// Both halves of a split must be strictly longer than this for the
    /// split to recurse; otherwise the region becomes a leaf.
    pub min_length: usize,
    /// What goes in the label column of each record.
    pub label_mode: LabelMode,
    /// What goes in the value column of each record.
    pub value_mode: ValueMode,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        SegmentOptions {
            min_length: crate::consts::DEFAULT_MIN_LENGTH,
            label_mode: LabelMode::default(),
            value_mode: ValueMode::default(),
        }
    }
}

/// One pending region of the work stack: a window into the contig's
/// encoded sequence plus its recursion depth.
struct PendingRegion {
    start: usize,
    end: usize,
    depth: usize,
}

/// Outcome of scanning one region for its best split point.
struct SplitScan {
    /// Index maximizing the entropy gain, or 0 when no candidate improves
    /// on the baseline.
    index: usize,
    /// The left-side matrix after the full scan. Leaf statistics are
    /// derived from this matrix; it covers every adjacency of the window
    /// except the last one.
    left_counts: DinucCounts,
}

///
/// Walk every candidate split index of the window, maintaining the left
/// and right count matrices incrementally: each step transfers exactly one
/// adjacency from right to left, keeping the scan O(1) per candidate.
///
fn best_split(encoded: &[u8]) -> SplitScan {
    let mut right = DinucCounts::from_window(encoded);
    let total_entropy = DinucDistribution::from_counts(&right).shannon_entropy();

    let mut left = DinucCounts::default();
    let length = encoded.len() as f64;

    let mut max_gain = 0.0;
    let mut max_gain_index = 0;

    for i in 1..encoded.len().saturating_sub(1) {
        left.record(encoded[i - 1], encoded[i]);
        right.unrecord(encoded[i - 1], encoded[i]);

        let left_entropy = DinucDistribution::from_counts(&left).shannon_entropy();
        let right_entropy = DinucDistribution::from_counts(&right).shannon_entropy();

        let left_frac = (i as f64 + 1.0) / length;
        let right_frac = 1.0 - left_frac;
        let gain = total_entropy - (left_frac * left_entropy + right_frac * right_entropy);

        // strict comparison: the first maximum wins
        if gain > max_gain {
            max_gain = gain;
            max_gain_index = i;
        }
    }

    SplitScan {
        index: max_gain_index,
        left_counts: left,
    }
}

///
/// Segment one contig into leaf regions of homogeneous dinucleotide
/// composition and return one record per leaf.
///
/// Regions are processed from an explicit work stack rather than by
/// call-stack recursion, so arbitrarily deep segmentations of long
/// sequences cannot overflow the stack. The right half of a split is
/// pushed before the left, which makes leaves come out in coordinate
/// order.
///
pub fn segment_contig(contig: &Contig, options: &SegmentOptions) -> Vec<SegmentRecord> {
    let encoded = encode(&contig.seq);
    let mut records = Vec::new();

    let mut pending = vec![PendingRegion {
        start: 0,
        end: encoded.len(),
        depth: 0,
    }];

    while let Some(region) = pending.pop() {
        let window = &encoded[region.start..region.end];
        let scan = best_split(window);

        let left_len = scan.index;
        let right_len = window.len() - scan.index;

        if left_len > options.min_length && right_len > options.min_length {
            pending.push(PendingRegion {
                start: region.start + scan.index,
                end: region.end,
                depth: region.depth + 1,
            });
            pending.push(PendingRegion {
                start: region.start,
                end: region.start + scan.index,
                depth: region.depth + 1,
            });
        } else {
            records.push(leaf_record(contig, &region, &scan.left_counts, options));
        }
    }

    records
}

fn leaf_record(
    contig: &Contig,
    region: &PendingRegion,
    counts: &DinucCounts,
    options: &SegmentOptions,
) -> SegmentRecord {
    let distribution = DinucDistribution::from_counts(counts);

    let label = match options.label_mode {
        LabelMode::Class => classify(&distribution).to_string(),
        LabelMode::Depth => region.depth.to_string(),
    };

    let value = match options.value_mode {
        ValueMode::Gc => counts.gc_fraction(),
        ValueMode::Rip => counts.rip_index() * 50.0,
    };

    SegmentRecord {
        name: contig.name.clone(),
        start: contig.offset + region.start,
        end: contig.offset + region.end,
        label,
        value,
        distribution: *distribution.bins(),
    }
}
