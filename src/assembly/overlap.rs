//! Exact overlap search between the growing consensus and a single fragment.
//!
//! Overlaps are signed: a positive size means the end of the fragment matches the start of the
//! sequence (the fragment goes in front), a negative size means the start of the fragment matches
//! the end of the sequence (the fragment goes at the back).

use crate::assembly::errors::{AssemblyError, AssemblyResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prepend,
    Append,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Prepend => write!(f, "prepend"),
            Direction::Append => write!(f, "append"),
        }
    }
}

/// The best overlap found across a pool of fragments. `fragment` is `None` when no fragment
/// overlaps the sequence at all, in which case `size` is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BestOverlap {
    pub size: isize,
    pub fragment: Option<usize>,
}

impl BestOverlap {
    pub fn magnitude(&self) -> usize {
        self.size.unsigned_abs()
    }

    pub fn direction(&self) -> Option<Direction> {
        match self.size {
            0 => None,
            size if size > 0 => Some(Direction::Prepend),
            _ => Some(Direction::Append),
        }
    }
}

/// Computes the largest exact overlap between `sequence` and `fragment`.
///
/// The front of the sequence is searched first. The back is only searched for overlaps strictly
/// longer than the best front overlap, so a tie between the two ends always resolves to
/// prepending.
pub fn compute_overlap(sequence: &[u8], fragment: &[u8]) -> AssemblyResult<isize> {
    if fragment.len() > sequence.len() {
        return Err(AssemblyError::InvariantViolation {
            fragment_len: fragment.len(),
            sequence_len: sequence.len(),
        });
    }

    // Largest first, so the first hit is the biggest overlap.
    let front = (1..=fragment.len())
        .rev()
        .find(|&k| sequence.starts_with(&fragment[fragment.len() - k..]))
        .unwrap_or(0);

    let back = ((front + 1)..=fragment.len())
        .rev()
        .find(|&k| sequence.ends_with(&fragment[..k]));

    Ok(match back {
        Some(k) => -(k as isize),
        None => front as isize,
    })
}

/// Scans `fragments` in order and returns the one with the largest overlap magnitude. Ties keep
/// the earliest fragment.
pub fn find_best_overlap(sequence: &[u8], fragments: &[Vec<u8>]) -> AssemblyResult<BestOverlap> {
    let mut best = BestOverlap::default();

    for (idx, fragment) in fragments.iter().enumerate() {
        let overlap = compute_overlap(sequence, fragment)?;
        if overlap.unsigned_abs() > best.magnitude() {
            best = BestOverlap {
                size: overlap,
                fragment: Some(idx),
            };
        }
    }

    Ok(best)
}

/// Merges `fragment` into `sequence` using a signed overlap from [`compute_overlap`].
pub fn merge(sequence: &mut Vec<u8>, fragment: &[u8], overlap: isize) {
    let shared = overlap.unsigned_abs().min(fragment.len());

    if overlap > 0 {
        let prefix = &fragment[..fragment.len() - shared];
        sequence.splice(0..0, prefix.iter().copied());
    } else if overlap < 0 {
        sequence.extend_from_slice(&fragment[shared..]);
    }
}
