use std::ops::Add;

/// Left fold of `seq` onto `init` with `+`. An empty sequence returns `init`
/// unchanged.
pub fn accumulate<T>(seq: &[T], init: T) -> T
where
    T: Clone + Add<Output = T>,
{
    let mut acc = init;
    for x in seq {
        acc = acc + x.clone();
    }
    acc
}

/// Left fold with an explicit combine step; the accumulator type may differ
/// from the element type.
pub fn accumulate_by<T, A>(seq: &[T], init: A, mut combine: impl FnMut(A, &T) -> A) -> A {
    let mut acc = init;
    for x in seq {
        acc = combine(acc, x);
    }
    acc
}

/// Number of elements equal to `value`.
pub fn count<T: PartialEq>(seq: &[T], value: &T) -> usize {
    let mut n = 0;
    for x in seq {
        if x == value {
            n += 1;
        }
    }
    n
}

/// Number of elements satisfying `pred`. The predicate runs exactly once per
/// element, front to back.
pub fn count_if<T>(seq: &[T], mut pred: impl FnMut(&T) -> bool) -> usize {
    let mut n = 0;
    for x in seq {
        if pred(x) {
            n += 1;
        }
    }
    n
}
