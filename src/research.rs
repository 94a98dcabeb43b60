//! This directory provides some features for research.
//! Measure the followings of boosting algorithm per iteration
//! - Running time
//! - Weighted training error of the new tree
//! - Voting weight of the new tree

/// Defines a struct that runs a boosting algorithm with logging.
pub mod logger;

pub use logger::{Logger, CurrentRound};
