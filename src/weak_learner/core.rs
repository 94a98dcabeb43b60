//! The core library for the weak learner in the boosting protocol.
//!
//! In each round the weak learner receives the current weights
//! as a read-only [`WeightView`], grows one tree,
//! and hands back the tree together with the leaf partition
//! it induces on the training examples.
use crate::{WeightView, LeafPartition};


/// A trait that defines the behavor of a tree-growing weak learner.
/// You need to implement `name` and `produce`.
pub trait WeakLearner<T> {
    /// The hypothesis returned by this weak learner.
    type Hypothesis;


    /// Returns the name of the weak learner.
    fn name(&self) -> &str;


    /// Returns the information of the weak learner as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Grows a hypothesis for the given weights
    /// and returns it with its leaf partition.
    /// The view may be scored from many threads,
    /// e.g. with [`WeightView::split_impurities`].
    fn produce(&self, view: WeightView<'_, T>)
        -> (Self::Hypothesis, LeafPartition);
}
