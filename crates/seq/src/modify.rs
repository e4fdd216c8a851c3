/// Replaces every element equal to `old` with a clone of `new`.
pub fn replace<T: PartialEq + Clone>(seq: &mut [T], old: &T, new: &T) {
    for slot in seq {
        if *slot == *old {
            *slot = new.clone();
        }
    }
}

/// Replaces every element satisfying `pred` with a clone of `new`.
pub fn replace_if<T: Clone>(seq: &mut [T], mut pred: impl FnMut(&T) -> bool, new: &T) {
    for slot in seq {
        if pred(&*slot) {
            *slot = new.clone();
        }
    }
}

/// Removes every element satisfying `pred`, in place and in one pass.
///
/// - Kept elements preserve their relative order.
/// - The vector is truncated to the kept length; no stale tail remains.
/// - `pred` runs exactly once per element, in original order.
///
/// Returns the number of removed elements.
pub fn remove_if<T>(seq: &mut Vec<T>, mut pred: impl FnMut(&T) -> bool) -> usize {
    let mut write = 0;
    for read in 0..seq.len() {
        if !pred(&seq[read]) {
            seq.swap(write, read);
            write += 1;
        }
    }
    let removed = seq.len() - write;
    seq.truncate(write);
    removed
}

/// Removes every element equal to `value`; see [`remove_if`].
pub fn remove<T: PartialEq>(seq: &mut Vec<T>, value: &T) -> usize {
    remove_if(seq, |x| x == value)
}
