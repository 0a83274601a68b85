//! Circular index math shared by layout, active-item tracking and jump navigation.
//!
//! The cursor is unbounded; everything here reduces it modulo the item count with a Euclidean
//! remainder so negative cursors behave the same as positive ones.

/// Shortest signed distance from `cursor` to item `index`, in `[-count/2, count/2)`.
///
/// Returns `0.0` for an empty ring.
pub fn signed_distance(index: usize, cursor: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let n = count as f64;
    let half = n / 2.0;
    let mut r = (index as f64 - cursor + half).rem_euclid(n);
    // `rem_euclid` may round up to `n` for tiny negative inputs.
    if r >= n {
        r -= n;
    }
    r - half
}

/// Signed cursor delta that lands on `target` along the shorter way around the ring.
///
/// `|delta| <= count / 2`; an exact half-ring tie goes forward. Returns `0.0` for an empty ring.
pub fn shortest_delta(from: f64, target: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let n = count as f64;
    let mut delta = (target as f64 - from).rem_euclid(n);
    if delta >= n {
        delta -= n;
    }
    if delta > n / 2.0 {
        delta -= n;
    }
    delta
}

/// The item nearest to `cursor`; ties resolve to the lowest index.
pub fn closest_index(cursor: f64, count: usize) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for i in 0..count {
        let d = signed_distance(i, cursor, count).abs();
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}
