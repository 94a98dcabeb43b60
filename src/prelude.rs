//! Exports the standard boosting algorithms and traits.
//!
pub use crate::booster::{
    // Booster trait
    Booster,

    // Classification ---------------------------
    AdaBoost,
    RoundStats,
};


pub use crate::weak_learner::{
    // Weak Learner trait
    WeakLearner,
};


pub use crate::sample::{
    CatFeature,
    CategoricalFeature,
    FeatureReader,
};


pub use crate::target::{
    BoostOutcome,
    LeafPartition,
    WeightView,
    WeightedCategoricalTarget,
};


pub use crate::hypothesis::{
    Classifier,
    WeightedMajority,
};


pub use crate::research::{
    Logger,
    CurrentRound,
};
