//! Topic selection

use rand::Rng;

/// Picks a topic uniformly from a fixed list; repeats across runs are expected
#[derive(Debug, Clone)]
pub struct TopicSelector {
    topics: Vec<String>,
}

impl TopicSelector {
    /// Create a selector; the list must not be empty
    pub fn new(topics: Vec<String>) -> Option<Self> {
        if topics.is_empty() {
            None
        } else {
            Some(Self { topics })
        }
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    /// Choose a topic using the given random source
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let index = rng.random_range(0..self.topics.len());
        &self.topics[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TOPICS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn default_selector() -> TopicSelector {
        TopicSelector::new(DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_empty_list_rejected() {
        assert!(TopicSelector::new(Vec::new()).is_none());
    }

    #[test]
    fn test_selection_is_from_list() {
        let selector = default_selector();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let topic = selector.select(&mut rng);
            assert!(DEFAULT_TOPICS.contains(&topic));
        }
    }

    #[test]
    fn test_seeded_selection_is_repeatable() {
        let selector = default_selector();
        let a: Vec<String> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..20).map(|_| selector.select(&mut rng).to_string()).collect()
        };
        let b: Vec<String> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..20).map(|_| selector.select(&mut rng).to_string()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_distribution_is_roughly_uniform() {
        let selector = default_selector();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts = [0usize; 10];
        let draws = 20_000;
        for _ in 0..draws {
            let topic = selector.select(&mut rng);
            let index = DEFAULT_TOPICS.iter().position(|t| *t == topic).unwrap();
            counts[index] += 1;
        }
        // Expected 2000 each; allow a generous band.
        for count in counts {
            assert!((1600..=2400).contains(&count), "count {count} outside band");
        }
    }
}
