use crate::assembly::errors::{AssemblyError, AssemblyResult};
use crate::assembly::overlap::{find_best_overlap, merge};
use crate::assembly::stats::FragmentStats;

pub const DEFAULT_MIN_OVERLAP: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyOptions {
    pub min_overlap: usize,
    pub verbose: bool,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        AssemblyOptions {
            min_overlap: DEFAULT_MIN_OVERLAP,
            verbose: false,
        }
    }
}

/// Greedy assembler that grows a single consensus out of a pool of fragments.
///
/// The consensus starts as the longest fragment. Every call to [`Assembler::iterate`] merges the
/// fragment with the largest overlap into one end of it and removes that fragment from the pool.
#[derive(Debug)]
pub struct Assembler {
    consensus: Vec<u8>,
    pool: Vec<Vec<u8>>,
    options: AssemblyOptions,
}

impl Assembler {
    pub fn new(mut fragments: Vec<Vec<u8>>, options: AssemblyOptions) -> AssemblyResult<Self> {
        if fragments.is_empty() {
            return Err(AssemblyError::EmptyInput);
        }
        if options.min_overlap == 0 {
            return Err(AssemblyError::InvalidMinOverlap);
        }

        if options.verbose {
            log::debug!("{}", FragmentStats::from_fragments(&fragments));
        }

        // Earliest fragment wins on equal length.
        let mut longest = 0;
        for (idx, fragment) in fragments.iter().enumerate() {
            if fragment.len() > fragments[longest].len() {
                longest = idx;
            }
        }
        let consensus = fragments.remove(longest);

        Ok(Assembler {
            consensus,
            pool: fragments,
            options,
        })
    }

    /// Merges the best overlapping fragment into the consensus. Returns `false`, leaving the
    /// state untouched, when no fragment overlaps by at least the minimum overlap.
    pub fn iterate(&mut self) -> AssemblyResult<bool> {
        if self.options.verbose {
            log::debug!("fragments left: {}", self.pool.len());
        }

        let best = find_best_overlap(&self.consensus, &self.pool)?;

        let Some(idx) = best.fragment else {
            return Ok(false);
        };
        if best.magnitude() < self.options.min_overlap {
            return Ok(false);
        }

        if self.options.verbose {
            if let Some(direction) = best.direction() {
                log::debug!(
                    "fragment with biggest overlap is at index {} overlap = {} ({})",
                    idx,
                    best.size,
                    direction
                );
            }
        }

        let fragment = self.pool.remove(idx);
        merge(&mut self.consensus, &fragment, best.size);

        Ok(true)
    }

    /// Runs [`Assembler::iterate`] until no further merge is possible and returns the number of
    /// merges made.
    pub fn assemble(&mut self) -> AssemblyResult<usize> {
        let mut merges = 0;
        while self.iterate()? {
            merges += 1;
        }
        Ok(merges)
    }

    /// Returns the leftover fragments that are not contained in the consensus.
    pub fn reconcile_remaining(&self) -> Vec<&[u8]> {
        if self.options.verbose {
            log::debug!(
                "{} fragments remaining unmatched - checking whether already contained in sequence...",
                self.pool.len()
            );
        }

        let unmatched: Vec<&[u8]> = self
            .pool
            .iter()
            .filter(|fragment| !contains(&self.consensus, fragment))
            .map(Vec::as_slice)
            .collect();

        if !unmatched.is_empty() {
            log::warn!("{} fragments remain unmatched!", unmatched.len());
        } else if self.options.verbose {
            log::debug!("all remaining fragments matched OK");
        }

        unmatched
    }

    pub fn consensus(&self) -> &[u8] {
        &self.consensus
    }

    pub fn into_consensus(self) -> Vec<u8> {
        self.consensus
    }

    pub fn remaining_fragments(&self) -> &[Vec<u8>] {
        &self.pool
    }

    pub fn min_overlap(&self) -> usize {
        self.options.min_overlap
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}
