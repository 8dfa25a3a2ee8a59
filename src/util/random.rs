use std::collections::BTreeSet;

use rand::{distributions::Alphanumeric, prelude::ThreadRng, Rng};

/// Random keys and values for stress tests and benches.
pub trait Random {
    fn gen(rng: &mut ThreadRng) -> Self;
}

const RANDOM_STRING_MIN: usize = 1;
const RANDOM_STRING_MAX: usize = 12;

impl Random for String {
    // length in [RANDOM_STRING_MIN, RANDOM_STRING_MAX)
    fn gen(rng: &mut ThreadRng) -> Self {
        let length: usize = rng.gen_range(RANDOM_STRING_MIN..RANDOM_STRING_MAX);

        rng.sample_iter(&Alphanumeric)
            .map(char::from)
            .take(length)
            .collect()
    }
}

impl Random for u64 {
    fn gen(rng: &mut ThreadRng) -> Self {
        rng.gen()
    }
}

/// Generate `count` pairwise distinct keys.
///
/// Gives up after `count * 10` draws, so the result can be shorter when the
/// key space is small.
pub fn distinct_keys<K: Random + Ord>(rng: &mut ThreadRng, count: usize) -> Vec<K> {
    let mut keys = BTreeSet::new();

    for _ in 0..count * 10 {
        if keys.len() == count {
            break;
        }

        keys.insert(K::gen(rng));
    }

    keys.into_iter().collect()
}
