pub mod generate;
pub mod multiset;
pub mod next_permutation;
