use rand::Rng;

/// A list of options with a weight each, from which options are drawn at random.
///
/// Weights never change, an option is only ever removed together with its weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedChoice<T> {
    choices: Vec<(T, f64)>,
}

impl<T: Copy + PartialEq> WeightedChoice<T> {
    /// Gives the option at the 1-based position `i` the weight `1 / i`, so the
    /// first options are drawn far more often than the last ones.
    #[must_use]
    pub fn with_decaying_weights(options: impl IntoIterator<Item = T>) -> Self {
        Self {
            choices: options
                .into_iter()
                .enumerate()
                .map(|(index, option)| (option, 1.0 / (index + 1) as f64))
                .collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    #[must_use]
    pub fn contains(&self, option: &T) -> bool {
        self.choices.iter().any(|(choice, _)| choice == option)
    }

    #[must_use]
    pub fn weight(&self, option: &T) -> Option<f64> {
        self.choices
            .iter()
            .find_map(|(choice, weight)| (choice == option).then_some(*weight))
    }

    /// Draws an option with a probability proportional to its weight.
    ///
    /// A number `r` is drawn from `[0, total)` and the first option whose
    /// cumulative weight is at least `r` is returned.
    #[must_use]
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<T> {
        let (last, _) = self.choices.last()?;
        let total = self.choices.iter().map(|(_, weight)| weight).sum::<f64>();

        let r = rng.gen_range(0.0..total);
        let mut upto = 0.0;
        for (choice, weight) in &self.choices {
            if upto + weight >= r {
                return Some(*choice);
            }

            upto += weight;
        }

        // only reachable through rounding errors
        Some(*last)
    }

    /// Removes the option and its weight, returns `false` if it was not present.
    pub fn remove(&mut self, option: &T) -> bool {
        let len = self.choices.len();
        self.choices.retain(|(choice, _)| choice != option);
        len != self.choices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_decaying_weights() {
        let choice = WeightedChoice::with_decaying_weights([7, 3, 9, 1]);

        assert_eq!(choice.weight(&7), Some(1.0));
        assert_eq!(choice.weight(&3), Some(0.5));
        assert_eq!(choice.weight(&9), Some(1.0 / 3.0));
        assert_eq!(choice.weight(&1), Some(0.25));
        assert_eq!(choice.weight(&2), None);
    }

    #[test]
    fn test_remove_keeps_other_weights() {
        let mut choice = WeightedChoice::with_decaying_weights([7, 3, 9]);

        assert!(choice.remove(&3));
        assert!(!choice.remove(&3));

        assert_eq!(choice.len(), 2);
        assert!(!choice.contains(&3));
        assert_eq!(choice.weight(&9), Some(1.0 / 3.0));
    }

    #[test]
    fn test_choose_empty() {
        let choice = WeightedChoice::<usize>::with_decaying_weights([]);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(choice.is_empty());
        assert_eq!(choice.choose(&mut rng), None);
    }

    #[test]
    fn test_choose_single() {
        let choice = WeightedChoice::with_decaying_weights([42]);
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..100 {
            assert_eq!(choice.choose(&mut rng), Some(42));
        }
    }

    #[test]
    fn test_choose_is_proportional() {
        let choice = WeightedChoice::with_decaying_weights([0, 1, 2, 3]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0_usize; 4];
        let draws = 25_000;
        for _ in 0..draws {
            counts[choice.choose(&mut rng).unwrap()] += 1;
        }

        // weights 1, 1/2, 1/3, 1/4 sum up to 25/12
        let total = 25.0 / 12.0;
        for (index, count) in counts.into_iter().enumerate() {
            let expected = (1.0 / (index + 1) as f64) / total;
            let actual = count as f64 / draws as f64;

            assert!(
                (expected - actual).abs() < 0.02,
                "option {} was drawn with probability {}, expected {}",
                index,
                actual,
                expected
            );
        }
    }
}
