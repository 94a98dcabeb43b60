#![warn(missing_docs)]

//!
//! A crate that turns an ensemble of categorical decision trees
//! into an Adaptive Boosting (AdaBoost) classifier.
//!
//! The crate owns the per-example weighting of AdaBoost.
//! Trees are grown elsewhere; this crate
//!
//! - scores index groups and candidate splits by weighted impurity
//!   while a tree grows ([`WeightView`]),
//! - measures the weighted error of a finished tree from its leaf partition,
//!   derives the voting weight of the tree, and reweights the examples
//!   so the next tree focuses on the misclassified ones
//!   ([`WeightedCategoricalTarget::boost`]),
//! - drives the boosting loop and aggregates the trees
//!   into a weighted majority vote ([`AdaBoost`], [`WeightedMajority`]).
//!
//! Labels are read through the [`CatFeature`] trait,
//! so any categorical column with missing-value awareness can be boosted.

pub mod constants;
pub mod common;
pub mod sample;
pub mod target;
pub mod weak_learner;
pub mod booster;
pub mod hypothesis;
pub mod research;
pub mod prelude;


pub use sample::{
    CatFeature,
    CategoricalFeature,
    FeatureReader,
};

pub use target::{
    BoostOutcome,
    LeafPartition,
    WeightView,
    WeightedCategoricalTarget,
};

pub use weak_learner::WeakLearner;

pub use booster::{
    AdaBoost,
    Booster,
    RoundStats,
};

pub use hypothesis::{
    Classifier,
    WeightedMajority,
};
