//! Scoring Engine - weighted-sum scoring and ranking of decision options.

use serde::{Deserialize, Serialize};

use super::{Criterion, DecisionOption};
use crate::domain::foundation::{OptionId, Percentage, Score};

/// One row of the result screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedOption {
    pub option_id: OptionId,
    pub name: String,
    pub score: u32,
    pub percentage: Percentage,
    pub is_winner: bool,
}

/// Weighted-sum analysis functions.
///
/// Everything here is a pure function of the criteria and options passed in;
/// callers recompute on every read instead of caching.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Weighted score of one option.
    ///
    /// # Algorithm
    /// score = Σ(option.score[criterion] × criterion.weight)
    ///
    /// # Edge Cases
    /// - No criteria: 0
    /// - Unrated cells: treated as 0
    pub fn score(option: &DecisionOption, criteria: &[Criterion]) -> u32 {
        criteria
            .iter()
            .map(|c| u32::from(option.score_for(&c.id).value()) * u32::from(c.weight.value()))
            .sum()
    }

    /// Highest score any option could reach: every cell rated 10.
    pub fn max_score(criteria: &[Criterion]) -> u32 {
        criteria
            .iter()
            .map(|c| u32::from(Score::MAX) * u32::from(c.weight.value()))
            .sum()
    }

    /// Score as a share of the maximum; 0 when there is no maximum.
    pub fn percentage(score: u32, max_score: u32) -> Percentage {
        Percentage::of(score, max_score)
    }

    /// Options ordered by score, highest first.
    ///
    /// The sort is stable: equal scores keep insertion order.
    pub fn rank<'a>(options: &'a [DecisionOption], criteria: &[Criterion]) -> Vec<&'a DecisionOption> {
        let mut scored: Vec<(&DecisionOption, u32)> = options
            .iter()
            .map(|o| (o, Self::score(o, criteria)))
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().map(|(o, _)| o).collect()
    }

    /// Ranked rows with scores and percentages; the first row is the winner.
    pub fn results(options: &[DecisionOption], criteria: &[Criterion]) -> Vec<RankedOption> {
        let max = Self::max_score(criteria);
        Self::rank(options, criteria)
            .into_iter()
            .enumerate()
            .map(|(idx, option)| {
                let score = Self::score(option, criteria);
                RankedOption {
                    option_id: option.id,
                    name: option.name.to_string(),
                    score,
                    percentage: Self::percentage(score, max),
                    is_winner: idx == 0,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Label, Weight};
    use proptest::prelude::*;

    fn label(s: &str) -> Label {
        Label::parse("name", s).unwrap()
    }

    fn criterion(name: &str, weight: u8) -> Criterion {
        Criterion::new(label(name)).with_weight(Weight::new(weight))
    }

    /// Salary w8, Flexibility w3; A = {9, 5}, B = {6, 10}.
    fn job_offer() -> (Vec<Criterion>, Vec<DecisionOption>) {
        let salary = criterion("Salary", 8);
        let flexibility = criterion("Flexibility", 3);
        let a = DecisionOption::new(label("A"))
            .with_score(salary.id, Score::new(9))
            .with_score(flexibility.id, Score::new(5));
        let b = DecisionOption::new(label("B"))
            .with_score(salary.id, Score::new(6))
            .with_score(flexibility.id, Score::new(10));
        (vec![salary, flexibility], vec![a, b])
    }

    #[test]
    fn job_offer_scores() {
        let (criteria, options) = job_offer();
        assert_eq!(ScoringEngine::score(&options[0], &criteria), 87);
        assert_eq!(ScoringEngine::score(&options[1], &criteria), 78);
        assert_eq!(ScoringEngine::max_score(&criteria), 110);
    }

    #[test]
    fn job_offer_results() {
        let (criteria, options) = job_offer();
        let results = ScoringEngine::results(&options, &criteria);

        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(results[0].percentage.value(), 79);
        assert_eq!(results[1].percentage.value(), 71);
        assert!(results[0].is_winner);
        assert!(!results[1].is_winner);
    }

    #[test]
    fn no_criteria_means_zero_everything() {
        let options = vec![DecisionOption::new(label("A"))];
        assert_eq!(ScoringEngine::score(&options[0], &[]), 0);
        assert_eq!(ScoringEngine::max_score(&[]), 0);
        let results = ScoringEngine::results(&options, &[]);
        assert_eq!(results[0].percentage, Percentage::ZERO);
    }

    #[test]
    fn rank_reorders_when_lower_option_overtakes() {
        let (criteria, mut options) = job_offer();
        options[1].set_score(criteria[0].id, Score::new(10));
        let ranked: Vec<_> = ScoringEngine::rank(&options, &criteria)
            .into_iter()
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(ranked, vec!["B", "A"]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let criteria = vec![criterion("Cost", 4)];
        let options: Vec<_> = ["first", "second", "third"]
            .iter()
            .map(|n| DecisionOption::new(label(n)).with_score(criteria[0].id, Score::new(5)))
            .collect();

        let ranked: Vec<_> = ScoringEngine::rank(&options, &criteria)
            .into_iter()
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(ranked, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_options_rank_to_empty() {
        let (criteria, _) = job_offer();
        assert!(ScoringEngine::results(&[], &criteria).is_empty());
    }

    proptest! {
        #[test]
        fn score_is_linear_in_weight_and_score(w in 1u8..=10, s in 0u8..=10) {
            let c = criterion("x", w);
            let option = DecisionOption::new(label("o")).with_score(c.id, Score::new(s));
            let criteria = vec![c];
            prop_assert_eq!(ScoringEngine::score(&option, &criteria), u32::from(w) * u32::from(s));
        }

        #[test]
        fn all_zero_scores_give_zero(weights in proptest::collection::vec(1u8..=10, 0..6)) {
            let criteria: Vec<_> = weights.iter().map(|&w| criterion("c", w)).collect();
            let option = DecisionOption::new(label("o"));
            prop_assert_eq!(ScoringEngine::score(&option, &criteria), 0);
        }

        #[test]
        fn percentage_stays_in_bounds(
            cells in proptest::collection::vec((1u8..=10, 0u8..=10), 0..6),
        ) {
            let criteria: Vec<_> = cells.iter().map(|&(w, _)| criterion("c", w)).collect();
            let mut option = DecisionOption::new(label("o"));
            for (c, &(_, s)) in criteria.iter().zip(&cells) {
                option.set_score(c.id, Score::new(s));
            }
            let score = ScoringEngine::score(&option, &criteria);
            let max = ScoringEngine::max_score(&criteria);
            prop_assert!(score <= max);
            prop_assert!(ScoringEngine::percentage(score, max).value() <= 100);
            if max == 0 {
                prop_assert_eq!(ScoringEngine::percentage(score, max), Percentage::ZERO);
            }
        }

        #[test]
        fn rank_is_stable_for_equal_scores(count in 2usize..8, s in 0u8..=10) {
            let criteria = vec![criterion("c", 5)];
            let options: Vec<_> = (0..count)
                .map(|i| {
                    DecisionOption::new(label(&format!("opt{}", i)))
                        .with_score(criteria[0].id, Score::new(s))
                })
                .collect();
            let ranked = ScoringEngine::rank(&options, &criteria);
            let ids: Vec<_> = ranked.iter().map(|o| o.id).collect();
            let expected: Vec<_> = options.iter().map(|o| o.id).collect();
            prop_assert_eq!(ids, expected);
        }
    }
}
