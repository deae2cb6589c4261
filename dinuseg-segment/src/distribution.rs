//! Symmetrized dinucleotide probability distributions and the
//! information-theoretic measures computed on them.

use crate::counting::DinucCounts;

/// Number of strand-symmetrized dinucleotide bins.
pub const DISTRIBUTION_BINS: usize = 14;

///
/// DinucDistribution struct, a 14-bin probability distribution derived
/// from a dinucleotide count matrix by merging complementary-strand
/// pairs. Bin order: AA/TT, AC/GT, AG/CT, AT, CA/TG, CC/GG, CG, GC, TA,
/// AN/NT, CN/NG, GN/NC, TN/NA, NN.
///
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DinucDistribution([f64; DISTRIBUTION_BINS]);

impl DinucDistribution {
    pub const fn from_bins(bins: [f64; DISTRIBUTION_BINS]) -> Self {
        DinucDistribution(bins)
    }

    ///
    /// Reduce a 5x5 count matrix to the 14 symmetrized bins and normalize
    /// by the summed bin total. Self-symmetric bins (AT, CG, GC, TA, NN)
    /// add their single cell twice. An empty matrix reduces to the
    /// all-zero vector rather than propagating NaN.
    ///
    pub fn from_counts(counts: &DinucCounts) -> Self {
        let mut s = [0u64; DISTRIBUTION_BINS];
        s[0] = counts.get(0, 0) + counts.get(3, 3); // AA,TT
        s[1] = counts.get(0, 1) + counts.get(2, 3); // AC,GT
        s[2] = counts.get(0, 2) + counts.get(1, 3); // AG,CT
        s[3] = counts.get(0, 3) + counts.get(0, 3); // AT
        s[4] = counts.get(1, 0) + counts.get(3, 2); // CA,TG
        s[5] = counts.get(1, 1) + counts.get(2, 2); // CC,GG
        s[6] = counts.get(1, 2) + counts.get(1, 2); // CG
        s[7] = counts.get(2, 1) + counts.get(2, 1); // GC
        s[8] = counts.get(3, 0) + counts.get(3, 0); // TA
        s[9] = counts.get(0, 4) + counts.get(4, 3); // AN,NT
        s[10] = counts.get(1, 4) + counts.get(4, 2); // CN,NG
        s[11] = counts.get(2, 4) + counts.get(4, 1); // GN,NC
        s[12] = counts.get(3, 4) + counts.get(4, 0); // TN,NA
        s[13] = counts.get(4, 4) + counts.get(4, 4); // NN

        let total: u64 = s.iter().sum();
        if total == 0 {
            return DinucDistribution::default();
        }

        let mut p = [0.0f64; DISTRIBUTION_BINS];
        for (i, &count) in s.iter().enumerate() {
            p[i] = count as f64 / total as f64;
        }

        DinucDistribution(p)
    }

    /// Shannon entropy in bits: -sum p*log2(p). Zero-probability bins
    /// contribute zero.
    pub fn shannon_entropy(&self) -> f64 {
        let mut entropy = 0.0;
        for &prob in &self.0 {
            if prob > 0.0 {
                entropy -= prob * prob.log2();
            }
        }
        entropy
    }

    /// L2 distance between two distributions.
    pub fn euclidean_distance(&self, other: &DinucDistribution) -> f64 {
        let mut sum = 0.0;
        for (p, q) in self.0.iter().zip(other.0.iter()) {
            let dist = p - q;
            sum += dist * dist;
        }
        sum.sqrt()
    }

    pub fn bins(&self) -> &[f64; DISTRIBUTION_BINS] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counting::encode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_distribution_sums_to_one() {
        let counts = DinucCounts::from_window(&encode(b"ACGTTGCANNCGGATT"));
        let distribution = DinucDistribution::from_counts(&counts);

        let total: f64 = distribution.bins().iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_homopolymer_collapses_to_single_bin() {
        let counts = DinucCounts::from_window(&encode(b"AAAAAAAAAA"));
        assert_eq!(counts.get(0, 0), 9);
        assert_eq!(counts.total(), 9);

        let distribution = DinucDistribution::from_counts(&counts);
        assert_eq!(distribution.bins()[0], 1.0);
        assert_eq!(distribution.bins()[1..], [0.0; 13]);
        assert_eq!(distribution.shannon_entropy(), 0.0);
    }

    #[test]
    fn test_empty_matrix_reduces_to_zero_vector() {
        let distribution = DinucDistribution::from_counts(&DinucCounts::default());
        assert_eq!(distribution.bins(), &[0.0; DISTRIBUTION_BINS]);
        assert_eq!(distribution.shannon_entropy(), 0.0);
    }

    #[test]
    fn test_single_bin_entropy_is_zero() {
        let mut bins = [0.0; DISTRIBUTION_BINS];
        bins[6] = 1.0;
        let distribution = DinucDistribution::from_bins(bins);
        assert_eq!(distribution.shannon_entropy(), 0.0);
    }

    #[test]
    fn test_uniform_two_bins_entropy_is_one() {
        let mut bins = [0.0; DISTRIBUTION_BINS];
        bins[1] = 0.5;
        bins[4] = 0.5;
        let distribution = DinucDistribution::from_bins(bins);
        assert!((distribution.shannon_entropy() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_euclidean_distance_to_self_is_zero() {
        let counts = DinucCounts::from_window(&encode(b"ACGTTGCACGGATT"));
        let distribution = DinucDistribution::from_counts(&counts);
        assert_eq!(distribution.euclidean_distance(&distribution), 0.0);
    }

    #[test]
    fn test_self_symmetric_bins_count_twice() {
        // two AT pairs against one AA pair: the AT bin doubles its cell
        let counts = DinucCounts::from_window(&encode(b"ATATA"));
        let distribution = DinucDistribution::from_counts(&counts);

        // c(A,T)=2 doubled to 4, c(T,A)=2 doubled to 4
        assert_eq!(distribution.bins()[3], 0.5);
        assert_eq!(distribution.bins()[8], 0.5);
    }
}
