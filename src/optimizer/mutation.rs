// ===== prolom/src/optimizer/mutation.rs =====
use crate::alphabet::Key;
use fastrand::Rng;

/// Uniformly pick two distinct key positions.
pub fn pick_swap_pair(len: usize, rng: &mut Rng) -> (usize, usize) {
    let a = rng.usize(0..len);
    let mut b = rng.usize(0..len - 1);
    if b >= a {
        b += 1;
    }
    (a, b)
}

/// One neighboring key: the symbols at two random positions exchanged.
/// A swap is its own inverse, which keeps the proposal symmetric, and any
/// permutation is reachable from any other through a finite swap sequence.
pub fn propose_swap(key: &Key, rng: &mut Rng) -> Key {
    let (a, b) = pick_swap_pair(key.len(), rng);
    key.swapped(a, b)
}
