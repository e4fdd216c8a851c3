/// Types with a well-defined next value, used by [`fill_sequential`].
pub trait Successor {
    fn successor(&self) -> Self;
}

macro_rules! impl_successor_int {
    ($($t:ty)*) => {
        $(impl Successor for $t {
            #[inline]
            fn successor(&self) -> Self {
                self + 1
            }
        })*
    };
}

impl_successor_int!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl Successor for f32 {
    #[inline]
    fn successor(&self) -> Self {
        self + 1.0
    }
}

impl Successor for f64 {
    #[inline]
    fn successor(&self) -> Self {
        self + 1.0
    }
}

/// Overwrites `seq` with `start, start+1, start+2, ...` in position order.
///
/// The successor of the final stored value is never computed, so filling up
/// to an integer type's maximum does not overflow.
pub fn fill_sequential<T: Successor + Clone>(seq: &mut [T], start: T) {
    if seq.is_empty() {
        return;
    }
    let last = seq.len() - 1;
    let mut value = start;
    for slot in &mut seq[..last] {
        *slot = value.clone();
        value = value.successor();
    }
    seq[last] = value;
}

/// Calls `f` exactly once per position, front to back, storing each result.
/// Stateful closures observe calls in that order.
pub fn generate<T>(seq: &mut [T], mut f: impl FnMut() -> T) {
    for slot in seq {
        *slot = f();
    }
}
