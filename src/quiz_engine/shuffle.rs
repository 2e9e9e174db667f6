use rand::Rng;

/// Uniform in-place Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Draw `n` items uniformly without replacement.
///
/// Partial Fisher-Yates: only the first `n` slots are settled. Returns all
/// items (shuffled) when `n >= items.len()`.
pub fn sample<T, R: Rng>(mut items: Vec<T>, n: usize, rng: &mut R) -> Vec<T> {
    let len = items.len();
    let n = n.min(len);
    for i in 0..n {
        let j = rng.gen_range(i..len);
        items.swap(i, j);
    }
    items.truncate(n);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffle_keeps_every_item() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut items: Vec<u32> = (0..31).collect();
        shuffle(&mut items, &mut rng);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..31).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let make = |seed: u64| -> Vec<u32> {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut items: Vec<u32> = (0..20).collect();
            shuffle(&mut items, &mut rng);
            items
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn shuffle_is_roughly_uniform() {
        // Each of 3 items should land first about a third of the time.
        let mut rng = StdRng::seed_from_u64(7);
        let mut firsts = [0usize; 3];
        for _ in 0..6000 {
            let mut items = [0usize, 1, 2];
            shuffle(&mut items, &mut rng);
            firsts[items[0]] += 1;
        }
        for count in firsts {
            assert!((1700..=2300).contains(&count), "skewed first-slot count: {count}");
        }
    }

    #[test]
    fn sample_returns_distinct_items() {
        let mut rng = StdRng::seed_from_u64(1);
        let picked = sample((0..10).collect::<Vec<u32>>(), 4, &mut rng);
        assert_eq!(picked.len(), 4);
        let mut dedup = picked.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(dedup.len(), 4);
    }

    #[test]
    fn sample_caps_at_pool_size() {
        let mut rng = StdRng::seed_from_u64(1);
        let picked = sample(vec!["a", "b"], 5, &mut rng);
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn empty_inputs_are_fine() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(sample(empty, 3, &mut rng).is_empty());
    }
}
