use crate::engine::generate::{generate_all, PermutationError};

/// Enumerates every unique permutation of the characters of `input`.
///
/// The permutations are returned as owned strings in strictly increasing
/// lexicographic order (by `char` order, so uppercase sorts before
/// lowercase). Fails with [`PermutationError::InvalidInput`] when `input`
/// is empty.
pub fn unique_string_permutations(input: &str) -> Result<Vec<String>, PermutationError> {
    let symbols: Vec<char> = input.chars().collect();
    let permutations = generate_all(&symbols)?;
    Ok(permutations
        .into_iter()
        .map(|symbols| symbols.into_iter().collect())
        .collect())
}
