use rand::Rng;

/// Fisher-Yates shuffle in place. Every permutation of `items` is equally likely.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffled copy of `items`; the input is left untouched.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    shuffle(&mut copy, rng);
    copy
}
