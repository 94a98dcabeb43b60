//! Tunable constants shared across the crate.

/// Tolerance for `sum(weights) == 1`.
pub const SIMPLEX_TOLERANCE: f64 = 1e-5;

/// Lower bound on the weighted error fed to the logarithm
/// when deriving a voting weight.
/// A perfect tree (error `0`) is treated as if its error were this value.
pub const ERROR_FLOOR: f64 = 1e-10;

/// Voting weight assigned to a perfect tree.
/// Equals `0.5 * ln((1 - ERROR_FLOOR) / ERROR_FLOOR)`, about `11.51`.
pub const MAX_VOTING_WEIGHT: f64 = 11.512_925_464_920_228;

/// A weighted error at or above this value makes the tree worthless.
pub const RANDOM_GUESS_ERROR: f64 = 0.5;

/// Default number of boosting rounds.
pub const DEFAULT_ROUNDS: usize = 100;

/// Default number of consecutive zero-weight rounds tolerated
/// before boosting stops.
pub const DEFAULT_ZERO_WEIGHT_PATIENCE: usize = 3;

/// Strings that denote a missing categorical value.
pub const DEFAULT_MISSING_TOKENS: [&str; 6] = ["", "NA", "na", "?", "nan", "NaN"];
