use rand::Rng;

/// Fisher-Yates shuffle. Every permutation is equally likely when `rng`
/// draws uniformly; a fixed seed reproduces the same arrangement.
pub fn shuffle<T, R: Rng + ?Sized>(seq: &mut [T], rng: &mut R) {
    for i in (1..seq.len()).rev() {
        let j = rng.random_range(0..=i);
        seq.swap(i, j);
    }
}
