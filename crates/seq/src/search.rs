use std::cmp::Ordering;

/// Index of the first element satisfying `pred`, scanning from the front.
pub fn find_if<T>(seq: &[T], mut pred: impl FnMut(&T) -> bool) -> Option<usize> {
    for (i, x) in seq.iter().enumerate() {
        if pred(x) {
            return Some(i);
        }
    }
    None
}

/// Index of the first minimal element, or `None` for an empty sequence.
pub fn min_element<T: Ord>(seq: &[T]) -> Option<usize> {
    min_element_by(seq, T::cmp)
}

/// [`min_element`] under a caller-supplied total order.
pub fn min_element_by<T>(seq: &[T], mut cmp: impl FnMut(&T, &T) -> Ordering) -> Option<usize> {
    let mut iter = seq.iter().enumerate();
    let (_, mut best_val) = iter.next()?;
    let mut best = 0;
    for (i, x) in iter {
        // Strict comparison keeps the earliest minimum on ties.
        if cmp(x, best_val) == Ordering::Less {
            best = i;
            best_val = x;
        }
    }
    Some(best)
}

/// Index of the first maximal element, or `None` for an empty sequence.
pub fn max_element<T: Ord>(seq: &[T]) -> Option<usize> {
    max_element_by(seq, T::cmp)
}

/// [`max_element`] under a caller-supplied total order.
pub fn max_element_by<T>(seq: &[T], mut cmp: impl FnMut(&T, &T) -> Ordering) -> Option<usize> {
    let mut iter = seq.iter().enumerate();
    let (_, mut best_val) = iter.next()?;
    let mut best = 0;
    for (i, x) in iter {
        if cmp(x, best_val) == Ordering::Greater {
            best = i;
            best_val = x;
        }
    }
    Some(best)
}

/// True when no adjacent pair is out of order; equal runs are allowed.
pub fn is_sorted<T: Ord>(seq: &[T]) -> bool {
    is_sorted_by(seq, T::cmp)
}

/// [`is_sorted`] under a caller-supplied total order.
pub fn is_sorted_by<T>(seq: &[T], mut cmp: impl FnMut(&T, &T) -> Ordering) -> bool {
    seq.windows(2)
        .all(|w| cmp(&w[0], &w[1]) != Ordering::Greater)
}

/// Index of the first equal adjacent pair.
pub fn adjacent_find<T: PartialEq>(seq: &[T]) -> Option<usize> {
    adjacent_find_by(seq, |a, b| a == b)
}

/// Index `i` of the first pair with `pred(&seq[i], &seq[i + 1])`.
pub fn adjacent_find_by<T>(seq: &[T], mut pred: impl FnMut(&T, &T) -> bool) -> Option<usize> {
    for (i, w) in seq.windows(2).enumerate() {
        if pred(&w[0], &w[1]) {
            return Some(i);
        }
    }
    None
}
