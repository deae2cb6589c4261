use std::fmt::{self, Display};

///
/// Contig struct, one gap-free stretch of sequence cut out of a parent
/// FASTA record. The unit of independent segmentation.
///
#[derive(Eq, PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contig {
    /// Name of the parent sequence this contig was cut from
    pub name: String,
    /// Absolute start position within the parent sequence
    pub offset: usize,
    /// Raw sequence bytes, gap runs longer than the gap limit excised
    pub seq: Vec<u8>,
}

impl Contig {
    pub fn new(name: String, offset: usize, seq: Vec<u8>) -> Self {
        Contig { name, offset, seq }
    }

    ///
    /// Get length of the contig in bases
    ///
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Absolute end position (half-open) within the parent sequence.
    pub fn end(&self) -> usize {
        self.offset + self.seq.len()
    }
}

impl Display for Contig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.name, self.offset, self.end())
    }
}
