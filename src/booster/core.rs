//! Provides `Booster` trait.

use crate::WeakLearner;
use std::ops::ControlFlow;

/// The trait [`Booster`] defines the standard framework of Boosting.
/// Here, the **standard framework** is defined as
/// a repeated game between **Booster** and **Weak Learner**
/// of the following form:
///
/// In each round `t = 1, 2, ...`,
/// 1. Booster hands the current example weights to Weak Learner.
/// 2. Weak Learner grows a tree and returns it
///    with the leaf partition of the training examples.
/// 3. Booster scores the partition, assigns the tree a voting weight,
///    and reweights the examples.
///
/// # Required Methods
/// - [`Booster::name`]
/// - [`Booster::preprocess`]
/// - [`Booster::boost`]
/// - [`Booster::postprocess`]
/// - [`Booster::info`] ... optional.
///
/// # Provided Methods
/// - [`Booster::run`]
pub trait Booster {
    /// The label source the boosting algorithm reweights.
    type Feature;

    /// The hypothesis the weak learner returns.
    type Hypothesis;

    /// The final hypothesis output by a boosting algorithm.
    type Output;

    /// Returns the name of the boosting algorithm.
    fn name(&self) -> &str;

    /// Returns the information of boosting algorithm as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }

    /// A main function that runs boosting algorithm.
    fn run<W>(&mut self, weak_learner: &W) -> Self::Output
        where W: WeakLearner<Self::Feature, Hypothesis = Self::Hypothesis>
    {
        self.preprocess();

        let _ = (1..).try_for_each(|iter|
            self.boost(weak_learner, iter)
        );

        self.postprocess()
    }

    /// Pre-processing for `self`.
    /// As you can see in [`Booster::run`],
    /// this method is called before the boosting process.
    fn preprocess(&mut self);

    /// Boosting step per iteration.
    /// This method returns
    /// `ControlFlow::Continue(())` to request another round,
    /// `ControlFlow::Break(terminated_iter)` otherwise.
    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> ControlFlow<usize>
        where W: WeakLearner<Self::Feature, Hypothesis = Self::Hypothesis>;

    /// Post-processing.
    fn postprocess(&mut self) -> Self::Output;
}
