use std::env;
use std::fs;
use leafboost::prelude::*;


/// Puts the examples with an even index in one leaf
/// and the others in another.
pub struct ParityLearner;


impl WeakLearner<CategoricalFeature> for ParityLearner {
    type Hypothesis = (Option<u32>, Option<u32>);

    fn name(&self) -> &str {
        "Parity"
    }

    fn produce(&self, view: WeightView<'_, CategoricalFeature>)
        -> (Self::Hypothesis, LeafPartition)
    {
        let (even, odd): (Vec<usize>, Vec<usize>) = (0..view.n_cases())
            .partition(|i| i % 2 == 0);
        let h = (view.mode(&even), view.mode(&odd));
        (h, LeafPartition::from(vec![even, odd]))
    }
}


fn labels() -> CategoricalFeature {
    CategoricalFeature::from_values(
        "class",
        [
            Some("x"), Some("y"), Some("x"), Some("y"),
            Some("y"), Some("x"), Some("x"), None,
        ],
    )
}


/// Tests for `Logger`.
#[cfg(test)]
pub mod logger_tests {
    use super::*;

    #[test]
    fn writes_one_line_per_round() {
        let mut path = env::temp_dir();
        path.push(format!("leafboost-logger-{}.csv", std::process::id()));

        let booster = AdaBoost::init(labels())
            .max_rounds(5);
        let mut logger = Logger::new(booster, ParityLearner)
            .print_every(2);
        let f = logger.run(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let history = logger.booster().history().to_vec();
        let lines = contents.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "Round,Error,VotingWeight,Time");
        assert_eq!(lines.len(), history.len() + 1);

        for (line, stats) in lines[1..].iter().zip(&history) {
            let cols = line.split(',').collect::<Vec<_>>();
            assert_eq!(cols.len(), 4);
            assert_eq!(cols[0].parse::<usize>().unwrap(), stats.round);
            assert_eq!(cols[1].parse::<f64>().unwrap(), stats.error);
            assert_eq!(cols[2].parse::<f64>().unwrap(), stats.voting_weight);
        }
        assert!(f.len() <= history.len());
    }


    #[test]
    fn silent_run_matches_plain_run() {
        let mut plain = AdaBoost::init(labels())
            .max_rounds(5);
        let expected = plain.run(&ParityLearner);

        let booster = AdaBoost::init(labels())
            .max_rounds(5);
        let mut logger = Logger::new(booster, ParityLearner)
            .print_every(usize::MAX);
        let f = logger.run_silent();

        assert_eq!(f.weights, expected.weights);
        assert_eq!(f.hypotheses, expected.hypotheses);
        assert_eq!(logger.booster().history(), plain.history());
    }
}
