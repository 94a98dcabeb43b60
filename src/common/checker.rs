//! This file defines some functions that checks some pre-conditions
//! E.g., the index space shared by the target and its callers.

use crate::constants::SIMPLEX_TOLERANCE;


/// Check whether the number of examples is valid or not.
#[inline(always)]
pub fn n_cases(n_cases: usize) {
    assert!(n_cases > 0, "a boosting target needs at least one example");
}


/// Check that every index in `cases` lies in `[0, n_cases)`.
#[inline(always)]
pub fn case_indices(cases: &[usize], n_cases: usize) {
    if let Some(&i) = cases.iter().find(|&&i| i >= n_cases) {
        panic!(
            "case index {i} is out of range. \
            every index must be in [0, {n_cases})."
        );
    }
}


/// Check that `slice` is a probability vector.
#[inline(always)]
pub fn simplex_condition(slice: &[f64]) {
    let sum = slice.iter().sum::<f64>();
    assert!(
        (sum - 1f64).abs() < SIMPLEX_TOLERANCE,
        "sum(weights[..]) = {sum}"
    );
    assert!(
        slice.iter().all(|w| w.is_finite() && *w >= 0f64),
        "every weight must be finite and non-negative. weights = {slice:?}"
    );
}


/// Check the normalizing constant before dividing by it.
#[inline(always)]
pub fn normalizer(z: f64) {
    assert!(
        z.is_finite() && z > 0f64,
        "weights collapsed during renormalization. normalizer = {z}"
    );
}


/// Check the logarithm of a normalizing constant.
#[inline(always)]
pub fn log_normalizer(log_z: f64) {
    assert!(
        log_z.is_finite(),
        "weights collapsed during renormalization. ln(normalizer) = {log_z}"
    );
}


/// Check the voting weight handed to the ensemble.
#[inline(always)]
pub fn voting_weight(alpha: f64) {
    assert!(
        alpha.is_finite() && alpha >= 0f64,
        "voting weight must be finite and non-negative. got {alpha}"
    );
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_indices_success_01() {
        case_indices(&[0, 1, 2, 3], 4);
    }

    #[test]
    fn test_case_indices_success_02() {
        case_indices(&[], 4);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_case_indices_failure_01() {
        case_indices(&[0, 4], 4);
    }

    #[test]
    #[should_panic]
    fn test_n_cases_failure_01() {
        n_cases(0);
    }

    #[test]
    fn test_simplex_success_01() {
        simplex_condition(&[0.25; 4]);
    }

    #[test]
    #[should_panic]
    fn test_simplex_failure_01() {
        simplex_condition(&[0.5, 0.6]);
    }

    #[test]
    #[should_panic(expected = "collapsed")]
    fn test_normalizer_failure_01() {
        normalizer(0f64);
    }

    #[test]
    #[should_panic]
    fn test_voting_weight_failure_01() {
        voting_weight(f64::INFINITY);
    }
}
