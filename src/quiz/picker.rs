use std::collections::HashSet;

use rand::{Rng, seq::IndexedRandom};

use crate::question::models::Question;

/// Picks one question uniformly at random among the candidates whose id is
/// not in `excluded`. `None` means every candidate has already been served.
///
/// The caller owns both inputs and the random source, so the same pool and
/// exclusions can be replayed with a seeded generator.
pub fn pick_next<'a, R>(
    candidates: &'a [Question],
    excluded: &HashSet<i32>,
    rng: &mut R,
) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    let remaining: Vec<&Question> = candidates
        .iter()
        .filter(|q| !excluded.contains(&q.id))
        .collect();

    remaining.choose(rng).copied()
}
