//! The file `weak_learner.rs` defines the `WeakLearner` trait,
//! the tree-growing side of the boosting protocol.

/// Provides WeakLearner trait.
pub mod core;

pub use self::core::WeakLearner;
