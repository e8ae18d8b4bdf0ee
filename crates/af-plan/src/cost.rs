//! Crossing-time cost model.
//!
//! Ants are spread round-robin over routes sorted by ascending length, so
//! route `i` of `n` receives `ceil((ants - i) / n)` ants.  The last ant on the
//! longest used route launches in round `ceil(ants / n)` and still needs
//! `len - 1` steps to walk it:
//!
//! ```text
//! turns = ceil(ants / n) + (max_len - 1)
//! ```

/// Ants per route when `ant_count` ants are dealt round-robin over
/// `route_count` routes.  Earlier (shorter) routes receive the remainder.
pub fn distribute(ant_count: usize, route_count: usize) -> Vec<usize> {
    if route_count == 0 {
        return Vec::new();
    }
    let base  = ant_count / route_count;
    let extra = ant_count % route_count;
    (0..route_count).map(|i| base + usize::from(i < extra)).collect()
}

/// Turns needed to drain `ant_count` ants through `route_count` routes whose
/// longest used member has `max_len` nodes.
///
/// # Panics
/// Panics if `route_count == 0`.
#[inline]
pub fn turn_cost(ant_count: usize, route_count: usize, max_len: usize) -> usize {
    ant_count.div_ceil(route_count) + max_len.saturating_sub(1)
}
