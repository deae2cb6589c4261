use std::fmt::{self, Display};
use std::str::FromStr;

/// What goes in the label column of an output record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelMode {
    /// Nearest reference distribution letter (A/B/C)
    #[default]
    Class,
    /// Recursion depth of the leaf region
    Depth,
}

impl FromStr for LabelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "class" => Ok(LabelMode::Class),
            "depth" => Ok(LabelMode::Depth),
            _ => Err(format!("Invalid label mode: {}", s)),
        }
    }
}

/// What goes in the value column of an output record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueMode {
    /// GC fraction of the leaf region
    #[default]
    Gc,
    /// RIP index scaled by 50
    Rip,
}

impl FromStr for ValueMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gc" => Ok(ValueMode::Gc),
            "rip" => Ok(ValueMode::Rip),
            _ => Err(format!("Invalid value mode: {}", s)),
        }
    }
}

///
/// SegmentRecord struct, one leaf region of the segmentation with its
/// classification and dinucleotide profile. Written as one output row.
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentRecord {
    pub name: String,
    /// Absolute start within the parent sequence
    pub start: usize,
    /// Absolute end within the parent sequence, half-open
    pub end: usize,
    /// Reference letter or recursion depth, depending on label mode
    pub label: String,
    /// GC fraction or scaled RIP index, depending on value mode
    pub value: f64,
    /// The 14-bin symmetrized dinucleotide distribution of the region
    pub distribution: [f64; 14],
}

impl SegmentRecord {
    ///
    /// Get the tab-separated output row for this record
    ///
    pub fn as_string(&self) -> String {
        let bins = self
            .distribution
            .iter()
            .map(|p| format!("{:.4}", p))
            .collect::<Vec<String>>()
            .join("\t");

        format!(
            "{}\t{}\t{}\t{}\t{:.2}\t{}",
            self.name, self.start, self.end, self.label, self.value, bins,
        )
    }
}

impl Display for SegmentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
