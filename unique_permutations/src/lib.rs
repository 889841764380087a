//! Enumeration of all unique permutations of a multiset of symbols.
//!
//! The enumeration is based on the "next lexicographic permutation"
//! algorithm: starting from the symbols sorted in non-decreasing order,
//! each step computes the lexicographically next-larger arrangement of the
//! same symbols until no larger arrangement exists. Repeated symbols never
//! produce duplicate outputs, so no seen-set bookkeeping is needed.
//!
//! Steps to find the next higher arrangement:
//!
//! 1. Seek the rightmost symbol that is smaller than its right neighbor
//!    (pivot A). If there is none, the arrangement is the last one.
//! 2. Find the ceiling of pivot A: the smallest symbol right of pivot A
//!    that is greater than it (pivot B).
//! 3. Swap the symbols at pivot A and pivot B.
//! 4. Sort the symbols after pivot A's position in non-decreasing order.
//!
//! For "BANANA", the arrangement after "AABNNA" is "AANABN": pivot A is
//! the 'B' at index 2, its ceiling the 'N' at index 3, swapping gives
//! "AANBNA", and sorting the tail "BNA" yields "AANABN".

pub mod engine;
pub mod serialization;
pub mod text;

pub use engine::generate::{generate_all, PermutationError, Permutations};
pub use engine::multiset::{factorial, symbol_counts, unique_permutation_count};
pub use engine::next_permutation::next_permutation;
pub use text::unique_string_permutations;
