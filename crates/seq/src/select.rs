use std::cmp::Ordering;

use crate::sort::{
    INSERTION_THRESHOLD, choose_pivot, depth_limit, insertion_sort_by, partition3_by,
};

const MEDIANS_GROUP: usize = 5;

/// Places the element that a full sort under `cmp` would put at index `n`
/// at index `n`.
///
/// - Afterwards everything before `n` compares less-or-equal to `seq[n]` and
///   everything after compares greater-or-equal; no other order is promised.
/// - Expected linear time. Once the depth limit is spent the loop switches
///   to a median-of-medians pivot, which caps degenerate inputs at
///   `O(n log n)` overall and rules out quadratic behavior.
///
/// # Panics
///
/// Panics when `n >= seq.len()`, including on an empty sequence.
pub fn nth_element_by<T, F>(seq: &mut [T], n: usize, mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    assert!(
        n < seq.len(),
        "nth_element position {} out of bounds for length {}",
        n,
        seq.len()
    );
    let limit = depth_limit(seq.len()) + 1;
    introselect(seq, n, &mut cmp, limit);
}

/// [`nth_element_by`] under the natural order.
pub fn nth_element<T: Ord>(seq: &mut [T], n: usize) {
    nth_element_by(seq, n, T::cmp);
}

fn introselect<T, F>(mut seq: &mut [T], mut n: usize, cmp: &mut F, mut limit: usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while seq.len() > INSERTION_THRESHOLD {
        let pivot = if limit == 0 {
            median_of_medians(seq, cmp)
        } else {
            limit -= 1;
            choose_pivot(seq, cmp)
        };

        let (lt, gt) = partition3_by(seq, pivot, cmp);
        if n >= lt && n < gt {
            // Landed inside the run of pivot-equal elements.
            return;
        }

        let (left, rest) = seq.split_at_mut(lt);
        let (_, right) = rest.split_at_mut(gt - lt);
        if n < lt {
            seq = left;
        } else {
            seq = right;
            n -= gt;
        }
    }

    insertion_sort_by(seq, cmp);
}

/// Deterministic pivot: sorts each group of five, gathers the group medians
/// at the front of the slice, then selects their median recursively. The
/// result is guaranteed to leave at least ~30% of the slice on either side.
fn median_of_medians<T, F>(seq: &mut [T], cmp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = seq.len();
    let mut medians = 0;
    let mut group = 0;
    while group < len {
        let end = (group + MEDIANS_GROUP).min(len);
        insertion_sort_by(&mut seq[group..end], cmp);
        let mid = group + (end - group) / 2;
        seq.swap(medians, mid);
        medians += 1;
        group += MEDIANS_GROUP;
    }

    if medians == 1 {
        return 0;
    }
    select_deterministic(&mut seq[..medians], medians / 2, cmp);
    medians / 2
}

/// Worst-case linear selection; mutually recursive with
/// [`median_of_medians`].
pub(crate) fn select_deterministic<T, F>(mut seq: &mut [T], mut n: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while seq.len() > INSERTION_THRESHOLD {
        let pivot = median_of_medians(seq, cmp);
        let (lt, gt) = partition3_by(seq, pivot, cmp);
        if n >= lt && n < gt {
            return;
        }

        let (left, rest) = seq.split_at_mut(lt);
        let (_, right) = rest.split_at_mut(gt - lt);
        if n < lt {
            seq = left;
        } else {
            seq = right;
            n -= gt;
        }
    }

    insertion_sort_by(seq, cmp);
}
