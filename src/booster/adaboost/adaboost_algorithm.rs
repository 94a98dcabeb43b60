//! Provides [`AdaBoost`] for categorical targets.
use serde::{Serialize, Deserialize};

use crate::{
    Booster,
    WeakLearner,
    CatFeature,
    WeightedCategoricalTarget,
    WeightedMajority,

    research::CurrentRound,
};
use crate::constants::{DEFAULT_ROUNDS, DEFAULT_ZERO_WEIGHT_PATIENCE};

use std::mem;
use std::ops::ControlFlow;


/// Statistics of one boosting round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundStats {
    /// Round number, starting from `1`.
    pub round: usize,
    /// Weighted training error of the tree of this round.
    pub error: f64,
    /// Voting weight of the tree of this round.
    pub voting_weight: f64,
}


/// Defines `AdaBoost` over a categorical target.
/// This struct is based on the book:
/// [Boosting: Foundations and Algorithms](https://direct.mit.edu/books/oa-monograph/5342/BoostingFoundations-and-Algorithms)
/// by Robert E. Schapire and Yoav Freund.
///
/// Each round, the weak learner grows a tree from the current weights,
/// the leaf partition of the tree is scored,
/// and the examples are reweighted.
/// Boosting stops after `max_rounds` rounds,
/// after a tree that classifies every labeled example correctly,
/// or after `zero_weight_patience` consecutive trees
/// that are no better than random guessing.
///
/// # Example
/// ```
/// use leafboost::prelude::*;
///
/// // A tree with a single leaf that predicts its modal label.
/// struct Leaf(Option<u32>);
///
/// impl Classifier<()> for Leaf {
///     fn predict(&self, _: &(), _: usize) -> Option<u32> { self.0 }
/// }
///
/// // A weak learner that puts every example in one leaf.
/// struct OneLeaf;
///
/// impl WeakLearner<CategoricalFeature> for OneLeaf {
///     type Hypothesis = Leaf;
///
///     fn name(&self) -> &str { "One Leaf" }
///
///     fn produce(&self, view: WeightView<'_, CategoricalFeature>)
///         -> (Self::Hypothesis, LeafPartition)
///     {
///         let leaf = (0..view.n_cases()).collect::<Vec<_>>();
///         (Leaf(view.mode(&leaf)), LeafPartition::from(vec![leaf]))
///     }
/// }
///
/// let labels = CategoricalFeature::from_values(
///     "class", [Some("a"), Some("a"), Some("b")]
/// );
/// let mut booster = AdaBoost::init(labels)
///     .max_rounds(10)
///     .zero_weight_patience(3);
///
/// let f = booster.run(&OneLeaf);
///
/// assert!(!f.is_empty());
/// assert!(booster.terminated().is_some());
/// assert_eq!(f.predict(&(), 0), Some(0));
/// ```
pub struct AdaBoost<T, H> {
    // Training labels and the distribution on them.
    target: WeightedCategoricalTarget<T>,

    // Weights on hypotheses in `hypotheses`
    weights: Vec<f64>,

    // Hypohteses obtained by the weak-learner.
    hypotheses: Vec<H>,

    // Per-round statistics.
    history: Vec<RoundStats>,

    max_rounds: usize,

    // Number of consecutive zero-weight rounds tolerated.
    zero_weight_patience: usize,

    // Current run of consecutive zero-weight rounds.
    zero_streak: usize,

    // Terminated iteration.
    terminated: usize,
}


impl<T: CatFeature, H> AdaBoost<T, H> {
    /// Initialize the `AdaBoost` with uniform weights on `feature`.
    pub fn init(feature: T) -> Self {
        Self::with_target(WeightedCategoricalTarget::new(feature))
    }


    /// Initialize the `AdaBoost` with an existing target.
    /// The weights are reset to uniform before boosting starts.
    pub fn with_target(target: WeightedCategoricalTarget<T>) -> Self {
        Self {
            target,

            weights: Vec::new(),
            hypotheses: Vec::new(),
            history: Vec::new(),

            max_rounds: DEFAULT_ROUNDS,
            zero_weight_patience: DEFAULT_ZERO_WEIGHT_PATIENCE,
            zero_streak: 0,
            terminated: usize::MAX,
        }
    }


    /// Set the maximal number of rounds.
    pub fn max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = rounds;
        self
    }


    /// Set the number of consecutive zero-weight rounds
    /// after which boosting stops.
    pub fn zero_weight_patience(mut self, rounds: usize) -> Self {
        assert!(rounds > 0, "zero weight patience must be positive");
        self.zero_weight_patience = rounds;
        self
    }


    /// Returns the boosted target.
    pub fn target(&self) -> &WeightedCategoricalTarget<T> {
        &self.target
    }


    /// Returns the statistics of every round so far.
    pub fn history(&self) -> &[RoundStats] {
        &self.history[..]
    }


    /// Returns the round boosting stopped at,
    /// or `None` if it has not stopped.
    pub fn terminated(&self) -> Option<usize> {
        (self.terminated != usize::MAX).then_some(self.terminated)
    }


    /// Returns the target and drops the boosting state.
    pub fn into_target(self) -> WeightedCategoricalTarget<T> {
        self.target
    }
}


impl<T, H> Booster for AdaBoost<T, H>
    where T: CatFeature,
{
    type Feature = T;
    type Hypothesis = H;
    type Output = WeightedMajority<H>;


    fn name(&self) -> &str {
        "AdaBoost"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let n_cases = self.target.n_cases();
        let feature = self.target.feature();
        let info = Vec::from([
            ("Target", feature.name().to_string()),
            ("# of examples", format!("{n_cases}")),
            ("# of categories", format!("{}", feature.n_categories())),
            ("Max rounds", format!("{}", self.max_rounds)),
            ("Zero weight patience", format!("{}", self.zero_weight_patience)),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) {
        self.target.reset_weights();

        self.weights = Vec::new();
        self.hypotheses = Vec::new();
        self.history = Vec::new();

        self.zero_streak = 0;
        self.terminated = usize::MAX;
    }


    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> ControlFlow<usize>
        where W: WeakLearner<T, Hypothesis = H>,
    {
        if self.max_rounds < iteration {
            self.terminated = self.max_rounds;
            return ControlFlow::Break(self.max_rounds);
        }


        // Get a new tree and its leaves.
        let (h, partition) = weak_learner.produce(self.target.view());

        let outcome = self.target.boost_with_error(&partition);
        self.history.push(RoundStats {
            round: iteration,
            error: outcome.error,
            voting_weight: outcome.voting_weight,
        });


        if !outcome.reweighted {
            self.zero_streak += 1;
            if self.zero_streak >= self.zero_weight_patience {
                self.terminated = iteration;
                return ControlFlow::Break(iteration);
            }
            return ControlFlow::Continue(());
        }
        self.zero_streak = 0;


        // If `h` predicted all the labeled examples correctly,
        // use it as the combined classifier.
        if outcome.error <= 0.0 {
            self.terminated = iteration;
            self.weights = vec![outcome.voting_weight];
            self.hypotheses = vec![h];
            return ControlFlow::Break(iteration);
        }


        self.weights.push(outcome.voting_weight);
        self.hypotheses.push(h);

        ControlFlow::Continue(())
    }


    fn postprocess(&mut self) -> Self::Output {
        let weights = mem::take(&mut self.weights);
        let hypotheses = mem::take(&mut self.hypotheses);
        WeightedMajority::from_parts(weights, hypotheses)
    }
}


impl<T, H> CurrentRound for AdaBoost<T, H> {
    fn last_round(&self) -> Option<RoundStats> {
        self.history.last().copied()
    }
}
