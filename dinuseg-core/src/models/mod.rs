pub mod contig;
pub mod record;

// re-export for cleaner imports
pub use self::contig::Contig;
pub use self::record::{LabelMode, SegmentRecord, ValueMode};
