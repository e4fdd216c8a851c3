/// Replaces every element with `f(&element)`, front to back.
pub fn transform<T>(seq: &mut [T], mut f: impl FnMut(&T) -> T) {
    for slot in seq {
        *slot = f(&*slot);
    }
}

/// Element-wise `seq[i] = f(&seq[i], &other[i])` over the common prefix.
/// Positions past the shorter input are left untouched.
pub fn transform_with<T, U>(seq: &mut [T], other: &[U], mut f: impl FnMut(&T, &U) -> T) {
    for (slot, rhs) in seq.iter_mut().zip(other) {
        *slot = f(&*slot, rhs);
    }
}

/// Appends `f(&a[i], &b[i])` to `dest` for the common prefix of `a` and `b`.
pub fn transform_to<A, B, C>(a: &[A], b: &[B], dest: &mut Vec<C>, mut f: impl FnMut(&A, &B) -> C) {
    dest.reserve(a.len().min(b.len()));
    for (x, y) in a.iter().zip(b) {
        dest.push(f(x, y));
    }
}
