use std::cmp::Ordering;
use std::ptr;

use crate::sort::{INSERTION_THRESHOLD, insertion_sort_by};

/// Top-down merge sort with insertion-sorted base runs. Callers guarantee
/// `seq` is non-trivial and `T` is not zero-sized.
pub(crate) fn merge_sort_by<T, F>(seq: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = seq.len();
    if len <= INSERTION_THRESHOLD {
        insertion_sort_by(seq, cmp);
        return;
    }

    // Scratch storage for the left run of any merge. The length stays zero;
    // only the capacity is used, through raw pointers.
    let mut scratch: Vec<T> = Vec::with_capacity(len / 2);
    let buf = scratch.as_mut_ptr();
    merge_sort_recursive(seq, buf, cmp);
}

fn merge_sort_recursive<T, F>(seq: &mut [T], buf: *mut T, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = seq.len();
    if len <= INSERTION_THRESHOLD {
        insertion_sort_by(seq, cmp);
        return;
    }

    let mid = len / 2;
    merge_sort_recursive(&mut seq[..mid], buf, cmp);
    merge_sort_recursive(&mut seq[mid..], buf, cmp);

    if cmp(&seq[mid - 1], &seq[mid]) != Ordering::Greater {
        // Runs already in order end to end.
        return;
    }

    merge(seq, mid, buf, cmp);
}

/// Owns the buffered left run during a merge. `start..end` is its unconsumed
/// part and `dest` the front of the gap in `seq` it belongs to; the `Drop`
/// impl moves the remainder back, so every element exists exactly once even
/// when the comparator panics mid-merge.
struct MergeHole<T> {
    start: *mut T,
    end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        unsafe {
            let remaining = self.end.offset_from(self.start) as usize;
            ptr::copy_nonoverlapping(self.start, self.dest, remaining);
        }
    }
}

/// Merges the sorted runs `seq[..mid]` and `seq[mid..]` stably. The split
/// always puts the shorter-or-equal run on the left (`mid <= len - mid`),
/// and `buf` must point to storage for `mid` elements.
fn merge<T, F>(seq: &mut [T], mid: usize, buf: *mut T, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = seq.len();
    let v = seq.as_mut_ptr();
    debug_assert!(mid > 0 && mid <= len - mid);

    unsafe {
        // Move the left run out, then merge front to back into the gap it
        // left behind. The gap never shrinks below the unconsumed buffered
        // count, so the writes stay ahead of the live right run.
        ptr::copy_nonoverlapping(v, buf, mid);
        let mut hole = MergeHole {
            start: buf,
            end: buf.add(mid),
            dest: v,
        };
        let mut right = v.add(mid);
        let right_end = v.add(len);

        while hole.start < hole.end && right < right_end {
            // Taking the buffered element on ties keeps the merge stable.
            let src = if cmp(&*right, &*hole.start) == Ordering::Less {
                let s = right;
                right = right.add(1);
                s
            } else {
                let s = hole.start;
                hole.start = hole.start.add(1);
                s
            };
            ptr::copy_nonoverlapping(src, hole.dest, 1);
            hole.dest = hole.dest.add(1);
        }
        // `hole` drops here and moves any unconsumed buffered elements into
        // the remaining gap.
    }
}
