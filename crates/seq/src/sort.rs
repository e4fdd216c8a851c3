use std::cmp::Ordering;
use std::mem;

use crate::merge;

// Tuning constants. Slices at or below INSERTION_THRESHOLD go straight to
// insertion sort; the depth limit is 5/2 * floor(log2 n) partition levels
// before the unstable path falls back to heapsort.
pub(crate) const INSERTION_THRESHOLD: usize = 24;
const NINTHER_THRESHOLD: usize = 64;
const DEPTH_FACTOR_NUM: usize = 5;
const DEPTH_FACTOR_DEN: usize = 2;

/// Stable sort. Runs of elements that compare equal keep their arrival
/// order, so a later pass with a second comparator leaves earlier keys
/// intact.
pub fn sort_by<T, F>(seq: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if seq.len() < 2 || mem::size_of::<T>() == 0 {
        // Zero-sized elements are indistinguishable; nothing to reorder.
        return;
    }
    merge::merge_sort_by(seq, &mut cmp);
}

/// Stable sort by the natural order.
pub fn sort<T: Ord>(seq: &mut [T]) {
    sort_by(seq, T::cmp);
}

/// Unstable sort: three-way introsort over the comparator's strict weak
/// order. Equal elements may be reordered relative to each other.
pub fn sort_unstable_by<T, F>(seq: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if seq.len() < 2 {
        return;
    }
    let limit = depth_limit(seq.len()) + 1;
    introsort(seq, &mut cmp, limit);
}

/// Unstable sort by the natural order.
pub fn sort_unstable<T: Ord>(seq: &mut [T]) {
    sort_unstable_by(seq, T::cmp);
}

fn introsort<T, F>(mut seq: &mut [T], cmp: &mut F, mut limit: usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while seq.len() > INSERTION_THRESHOLD {
        if limit == 0 {
            heap_sort_by(seq, cmp);
            return;
        }
        limit -= 1;

        let pivot = choose_pivot(seq, cmp);
        let (lt, gt) = partition3_by(seq, pivot, cmp);
        if lt == 0 && gt == seq.len() {
            // Whole slice equal to the pivot.
            return;
        }

        let (left, rest) = seq.split_at_mut(lt);
        let (_, right) = rest.split_at_mut(gt - lt);

        // Recurse into the smaller side, iterate on the larger.
        if left.len() < right.len() {
            introsort(left, cmp, limit);
            seq = right;
        } else {
            introsort(right, cmp, limit);
            seq = left;
        }
    }

    insertion_sort_by(seq, cmp);
}

/// Stable: only strictly smaller elements move past their predecessors.
pub(crate) fn insertion_sort_by<T, F>(seq: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..seq.len() {
        let mut j = i;
        while j > 0 && cmp(&seq[j], &seq[j - 1]) == Ordering::Less {
            seq.swap(j, j - 1);
            j -= 1;
        }
    }
}

pub(crate) fn heap_sort_by<T, F>(seq: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = seq.len();
    if len < 2 {
        return;
    }

    let mut start = (len - 2) / 2;
    loop {
        sift_down(seq, start, len, cmp);
        if start == 0 {
            break;
        }
        start -= 1;
    }

    let mut end = len - 1;
    while end > 0 {
        seq.swap(0, end);
        sift_down(seq, 0, end, cmp);
        end -= 1;
    }
}

fn sift_down<T, F>(seq: &mut [T], mut root: usize, end: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let child = root * 2 + 1;
        if child >= end {
            break;
        }

        let mut largest = child;
        if child + 1 < end && cmp(&seq[child], &seq[child + 1]) == Ordering::Less {
            largest = child + 1;
        }

        if cmp(&seq[root], &seq[largest]) != Ordering::Less {
            break;
        }

        seq.swap(root, largest);
        root = largest;
    }
}

/// Dutch-flag partition around the value at index `pivot`.
///
/// Returns `(lt, gt)` with `seq[..lt]` strictly less than the pivot value,
/// `seq[lt..gt]` equal to it and `seq[gt..]` strictly greater. The equal
/// region is never empty.
pub(crate) fn partition3_by<T, F>(seq: &mut [T], pivot: usize, cmp: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(pivot < seq.len());
    seq.swap(0, pivot);

    // seq[lt] always holds a pivot-equal element, so it serves as the
    // comparison anchor while the scan runs.
    let mut lt = 0;
    let mut i = 1;
    let mut gt = seq.len();

    while i < gt {
        match cmp(&seq[i], &seq[lt]) {
            Ordering::Less => {
                seq.swap(i, lt);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                seq.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }

    (lt, gt)
}

/// Median-of-3 pivot, upgraded to a ninther once the slice is large enough
/// for sampling to pay off.
pub(crate) fn choose_pivot<T, F>(seq: &[T], cmp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = seq.len();
    debug_assert!(len >= 2);
    let mid = len / 2;
    if len < NINTHER_THRESHOLD {
        return median3_index(seq, 0, mid, len - 1, cmp);
    }

    let step = len / 8;
    let a = median3_index(seq, 0, step, step * 2, cmp);
    let b = median3_index(seq, mid - step, mid, mid + step, cmp);
    let c = median3_index(seq, len - 1 - step * 2, len - 1 - step, len - 1, cmp);
    median3_index(seq, a, b, c, cmp)
}

fn median3_index<T, F>(seq: &[T], a: usize, b: usize, c: usize, cmp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    if cmp(&seq[a], &seq[b]) == Ordering::Less {
        if cmp(&seq[b], &seq[c]) == Ordering::Less {
            b
        } else if cmp(&seq[a], &seq[c]) == Ordering::Less {
            c
        } else {
            a
        }
    } else if cmp(&seq[a], &seq[c]) == Ordering::Less {
        a
    } else if cmp(&seq[b], &seq[c]) == Ordering::Less {
        c
    } else {
        b
    }
}

#[inline]
fn floor_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        usize::BITS as usize - 1 - n.leading_zeros() as usize
    }
}

#[inline]
pub(crate) fn depth_limit(n: usize) -> usize {
    floor_log2(n) * DEPTH_FACTOR_NUM / DEPTH_FACTOR_DEN
}
