//! Random-order argmax over per-class scores.

use rand::{Rng, seq::SliceRandom as _};
use typedex_engine::{ClassMap, CreatureClass};

/// Returns the class with the highest score, breaking ties at random.
///
/// Classes are visited in a freshly shuffled order and a class replaces the running
/// best only when its score is strictly greater, so among tied classes the one
/// visited first wins.
///
/// # Example
///
/// ```
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg32;
/// use typedex_engine::{ClassMap, CreatureClass};
/// use typedex_evaluator::tie_break::first_max_in_random_order;
///
/// let mut scores = ClassMap::from_fn(|_| 0);
/// scores[CreatureClass::Grass] = 4;
///
/// let mut rng = Pcg32::seed_from_u64(42);
/// assert_eq!(first_max_in_random_order(&scores, &mut rng), (CreatureClass::Grass, 4));
/// ```
pub fn first_max_in_random_order<T, R>(scores: &ClassMap<T>, rng: &mut R) -> (CreatureClass, T)
where
    T: PartialOrd + Copy,
    R: Rng + ?Sized,
{
    let mut order = CreatureClass::ALL;
    order.shuffle(rng);

    let mut best = (order[0], scores[order[0]]);
    for class in &order[1..] {
        let score = scores[*class];
        if score > best.1 {
            best = (*class, score);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_unique_max_always_wins() {
        let mut rng = Pcg32::seed_from_u64(1);
        let scores = ClassMap::from_fn(|class| match class {
            CreatureClass::Dragon => 7,
            CreatureClass::Fire => 6,
            _ => 0,
        });
        for _ in 0..100 {
            assert_eq!(
                first_max_in_random_order(&scores, &mut rng),
                (CreatureClass::Dragon, 7)
            );
        }
    }

    #[test]
    fn test_all_tied_is_uniform() {
        let mut rng = Pcg32::seed_from_u64(2);
        let scores = ClassMap::from_fn(|_| 0_u32);
        let mut counts = ClassMap::from_fn(|_| 0_usize);
        let trials = 4000;
        for _ in 0..trials {
            let (class, score) = first_max_in_random_order(&scores, &mut rng);
            assert_eq!(score, 0);
            counts[class] += 1;
        }
        for (class, count) in counts.iter() {
            assert!(
                (800..1200).contains(count),
                "{class} won {count} of {trials} ties"
            );
        }
    }

    #[test]
    fn test_partial_tie_only_picks_tied_classes() {
        let mut rng = Pcg32::seed_from_u64(3);
        let scores = ClassMap::from_fn(|class| match class {
            CreatureClass::Water | CreatureClass::Grass => 2.5,
            _ => -1.0,
        });
        let mut seen = ClassMap::from_fn(|_| false);
        for _ in 0..200 {
            let (class, _) = first_max_in_random_order(&scores, &mut rng);
            assert!(matches!(class, CreatureClass::Water | CreatureClass::Grass));
            seen[class] = true;
        }
        assert!(seen[CreatureClass::Water] && seen[CreatureClass::Grass]);
    }
}
