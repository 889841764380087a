use crate::engine::next_permutation::next_permutation;
use log::debug;
use thiserror::Error;

/// Errors reported by the enumeration entry points.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PermutationError {
    /// The caller supplied a sequence with no symbols.
    #[error("input must contain at least one symbol")]
    InvalidInput,
}

/// Iterator over all unique arrangements of a multiset of symbols, in
/// strictly increasing lexicographic order.
///
/// The first item is the input sorted in non-decreasing order, the last
/// one is the input sorted in non-increasing order. Every yielded vector
/// is an independent value; the iterator keeps no aliases into it after
/// emission.
pub struct Permutations<T> {
    current: Option<Vec<T>>,
}

impl<T: Ord + Clone> Permutations<T> {
    /// Starts an enumeration over the symbols of `input`.
    ///
    /// Fails with [`PermutationError::InvalidInput`] when `input` is empty.
    pub fn new(input: &[T]) -> Result<Self, PermutationError> {
        if input.is_empty() {
            return Err(PermutationError::InvalidInput);
        }
        let mut first = input.to_vec();
        first.sort_unstable();
        debug!(
            "Starting enumeration from the sorted arrangement of {} symbols",
            first.len()
        );
        Ok(Permutations {
            current: Some(first),
        })
    }
}

impl<T: Ord + Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        let emitted = self.current.take()?;
        // The successor is computed from the emitted value but stored as a
        // fresh vector, so the emitted one is handed out without aliases.
        self.current = next_permutation(&emitted);
        if self.current.is_none() {
            debug!("Reached the lexicographically largest arrangement");
        }
        Some(emitted)
    }
}

/// Enumerates every unique arrangement of the symbols in `input`.
///
/// The result is strictly increasing under lexicographic order and holds
/// exactly n! divided by the product of the multiplicity factorials, one
/// entry per distinct arrangement of the input's multiset. Fails with
/// [`PermutationError::InvalidInput`] when `input` is empty.
pub fn generate_all<T: Ord + Clone>(input: &[T]) -> Result<Vec<Vec<T>>, PermutationError> {
    let mut all_permutations = Vec::new();
    for permutation in Permutations::new(input)? {
        debug!("Adding permutation #{}", all_permutations.len() + 1);
        all_permutations.push(permutation);
    }
    debug!(
        "Enumeration finished with {} unique permutations",
        all_permutations.len()
    );
    Ok(all_permutations)
}
