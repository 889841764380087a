/// Computes the lexicographically next-larger arrangement of `current`.
///
/// Returns `None` when `current` is already the largest arrangement of its
/// symbols, i.e. the sequence is non-increasing throughout. That is the
/// normal termination signal of a full enumeration, not an error.
///
/// The input slice is never mutated; the successor is a fresh vector.
pub fn next_permutation<T: Ord + Clone>(current: &[T]) -> Option<Vec<T>> {
    // Rightmost position whose symbol is smaller than its right neighbor.
    let pivot_a = find_ascent(current)?;

    let mut successor = current.to_vec();

    // Smallest symbol right of pivot A that is still greater than it.
    let pivot_b = find_ceiling(&successor, pivot_a);
    successor.swap(pivot_a, pivot_b);

    // The tail after pivot A was non-increasing before the swap; sorting it
    // non-decreasing makes the successor the smallest arrangement with the
    // new prefix.
    successor[pivot_a + 1..].sort_unstable();

    Some(successor)
}

/// Finds the rightmost index `i` with `seq[i] < seq[i + 1]`, scanning from
/// the second-to-last position down. `None` means the sequence is entirely
/// non-increasing.
fn find_ascent<T: Ord>(seq: &[T]) -> Option<usize> {
    (0..seq.len().checked_sub(1)?)
        .rev()
        .find(|&i| seq[i] < seq[i + 1])
}

/// Finds the index of the ceiling of `seq[pivot]` among the symbols right
/// of `pivot`: the smallest symbol strictly greater than the pivot symbol.
/// The candidate starts at `pivot + 1` and only moves when a strictly
/// smaller qualifying symbol appears, so ties resolve to the leftmost
/// occurrence.
fn find_ceiling<T: Ord>(seq: &[T], pivot: usize) -> usize {
    let mut ceiling = pivot + 1;
    for i in pivot + 2..seq.len() {
        if seq[i] > seq[pivot] && seq[i] < seq[ceiling] {
            ceiling = i;
        }
    }
    ceiling
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn banana_successor_step() {
        // Pivot A is the 'B' at index 2, its ceiling the 'N' at index 3.
        // Swap gives "AANBNA", sorting the tail gives "AANABN".
        let next = next_permutation(&chars("AABNNA")).unwrap();
        assert_eq!(next, chars("AANABN"));
    }

    #[test]
    fn two_distinct_symbols() {
        assert_eq!(next_permutation(&chars("AB")), Some(chars("BA")));
        assert_eq!(next_permutation(&chars("BA")), None);
    }

    #[test]
    fn non_increasing_sequences_are_exhausted() {
        assert_eq!(next_permutation(&chars("CBA")), None);
        assert_eq!(next_permutation(&chars("NNBAAA")), None);
        assert_eq!(next_permutation(&chars("AAAA")), None);
    }

    #[test]
    fn short_sequences_are_exhausted() {
        assert_eq!(next_permutation(&chars("A")), None);
        assert_eq!(next_permutation::<char>(&[]), None);
    }

    #[test]
    fn repeated_symbols_never_revisit_an_arrangement() {
        assert_eq!(next_permutation(&chars("ABB")), Some(chars("BAB")));
        assert_eq!(next_permutation(&chars("BAB")), Some(chars("BBA")));
        assert_eq!(next_permutation(&chars("BBA")), None);
    }

    #[test]
    fn input_is_left_untouched() {
        let current = chars("AABNNA");
        let _ = next_permutation(&current);
        assert_eq!(current, chars("AABNNA"));
    }

    #[test]
    fn works_for_integers() {
        assert_eq!(next_permutation(&[1, 2, 3]), Some(vec![1, 3, 2]));
        assert_eq!(next_permutation(&[1, 3, 2]), Some(vec![2, 1, 3]));
        assert_eq!(next_permutation(&[3, 2, 1]), None);
    }
}
