use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one element uniformly at random.
///
/// Returns `None` for an empty slice; callers are expected to have fetched
/// a non-empty list first.
pub fn pick_random<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}
