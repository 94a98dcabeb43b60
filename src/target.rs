//! The weighted categorical target.
//! It owns the per-example weights of an AdaBoost run,
//! scores index groups by weighted impurity,
//! and reweights examples after each tree.

// Leaf partitions handed over by the tree-builder.
pub(crate) mod partition;
// The target struct, its read-only view, and impurity scoring.
pub(crate) mod weighted_target;
// The boosting update over a finished leaf partition.
pub(crate) mod boost_update;


pub use partition::LeafPartition;
pub use weighted_target::{WeightedCategoricalTarget, WeightView};
pub use boost_update::{BoostOutcome, voting_weight};
