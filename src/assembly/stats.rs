use itertools::{Itertools, MinMaxResult};
use std::fmt;

/// Length summary of a set of fragments.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FragmentStats {
    pub count: usize,
    pub shortest: usize,
    pub longest: usize,
    pub total_length: usize,
    pub mean_length: f64,
}

impl FragmentStats {
    pub fn from_fragments(fragments: &[Vec<u8>]) -> Self {
        let (shortest, longest) = match fragments.iter().map(Vec::len).minmax() {
            MinMaxResult::NoElements => return FragmentStats::default(),
            MinMaxResult::OneElement(len) => (len, len),
            MinMaxResult::MinMax(min, max) => (min, max),
        };
        let total_length: usize = fragments.iter().map(Vec::len).sum();

        FragmentStats {
            count: fragments.len(),
            shortest,
            longest,
            total_length,
            mean_length: total_length as f64 / fragments.len() as f64,
        }
    }
}

impl fmt::Display for FragmentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} fragments, lengths {}..={} (mean {:.1}, total {})",
            self.count, self.shortest, self.longest, self.mean_length, self.total_length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stats_from_fragments() {
        let fragments = vec![b"AC".to_vec(), b"ACGTAC".to_vec(), b"ACGT".to_vec()];
        let stats = FragmentStats::from_fragments(&fragments);

        assert_eq!(
            stats,
            FragmentStats {
                count: 3,
                shortest: 2,
                longest: 6,
                total_length: 12,
                mean_length: 4.0,
            }
        );
        assert_eq!(
            stats.to_string(),
            "3 fragments, lengths 2..=6 (mean 4.0, total 12)"
        );
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(FragmentStats::from_fragments(&[]), FragmentStats::default());
    }
}
