use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Supplies the text typed into the chat box each cycle
pub trait MessageSource: Send {
    /// Returns `None` when there is nothing to send.
    fn next_message(&mut self) -> Option<String>;
}

/// Picks uniformly at random from a fixed candidate list
pub struct RandomMessages<R = StdRng> {
    candidates: &'static [&'static str],
    rng: R,
}

impl RandomMessages {
    pub fn new(candidates: &'static [&'static str]) -> Self {
        Self::with_rng(candidates, StdRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng + Send> RandomMessages<R> {
    pub fn with_rng(candidates: &'static [&'static str], rng: R) -> Self {
        Self { candidates, rng }
    }
}

impl<R: Rng + Send> MessageSource for RandomMessages<R> {
    fn next_message(&mut self) -> Option<String> {
        self.candidates
            .choose(&mut self.rng)
            .map(|message| message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANDIDATES: &[&str] = &["alpha", "beta", "gamma"];

    #[test]
    fn test_always_returns_a_candidate() {
        let mut source = RandomMessages::new(CANDIDATES);
        for _ in 0..100 {
            let message = source.next_message().unwrap();
            assert!(CANDIDATES.contains(&message.as_str()));
        }
    }

    #[test]
    fn test_seeded_distribution_is_uniform() {
        let mut source = RandomMessages::with_rng(CANDIDATES, StdRng::seed_from_u64(42));
        let draws = 30_000;
        let mut counts = [0usize; 3];

        for _ in 0..draws {
            let message = source.next_message().unwrap();
            let index = CANDIDATES.iter().position(|c| *c == message).unwrap();
            counts[index] += 1;
        }

        let expected = draws / CANDIDATES.len();
        for count in counts {
            assert!(count.abs_diff(expected) < expected / 10, "counts {:?}", counts);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut first = RandomMessages::with_rng(CANDIDATES, StdRng::seed_from_u64(7));
        let mut second = RandomMessages::with_rng(CANDIDATES, StdRng::seed_from_u64(7));
        for _ in 0..20 {
            assert_eq!(first.next_message(), second.next_message());
        }
    }

    #[test]
    fn test_empty_list_yields_nothing() {
        let mut source = RandomMessages::new(&[]);
        assert_eq!(source.next_message(), None);
    }
}
