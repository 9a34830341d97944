pub mod assembler;
pub mod errors;
pub mod overlap;
pub mod stats;

pub use assembler::{Assembler, AssemblyOptions, DEFAULT_MIN_OVERLAP};
pub use errors::{AssemblyError, AssemblyResult};
pub use overlap::{BestOverlap, Direction, compute_overlap, find_best_overlap, merge};
pub use stats::FragmentStats;
