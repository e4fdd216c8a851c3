use std::ops::Sub;

/// Pairwise differences: `out[0] = seq[0]`, `out[i] = seq[i] - seq[i - 1]`.
///
/// The output length always equals the input length, so a prefix sum of the
/// output rebuilds the input.
pub fn adjacent_difference<T>(seq: &[T]) -> Vec<T>
where
    T: Clone + Sub<Output = T>,
{
    let mut out = Vec::with_capacity(seq.len());
    if let Some(first) = seq.first() {
        out.push(first.clone());
    }
    for w in seq.windows(2) {
        out.push(w[1].clone() - w[0].clone());
    }
    out
}
