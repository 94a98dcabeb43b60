//! Provides the boosting loop around a weighted categorical target.

mod core;

// ------------------------------------------------
// Classification
mod adaboost;


/// Booster trait
pub use self::core::Booster;

pub use self::adaboost::{AdaBoost, RoundStats};
