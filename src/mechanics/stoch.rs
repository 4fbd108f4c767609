/// Stochastic mechanics: unit draws and weighted picks.
/// Every helper takes the RNG explicitly so seeded runs replay exactly.
use rand_core::RngCore;

/// Uniform draw in [0, 1) from the top 53 bits of one `u64`.
#[inline]
pub fn unit<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Index into `counts` drawn with probability proportional to each count.
///
/// One uniform draw is mapped through the running cumulative sum. Returns
/// `None` when every count is zero.
pub fn weighted_index<R: RngCore + ?Sized>(rng: &mut R, counts: &[u64]) -> Option<usize> {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return None;
    }
    let ticket = ((unit(rng) * total as f64) as u64).min(total - 1);
    let mut acc = 0u64;
    for (i, c) in counts.iter().enumerate() {
        acc += c;
        if ticket < acc {
            return Some(i);
        }
    }
    None
}
