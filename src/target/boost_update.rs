//! The AdaBoost update over the leaf partition of a finished tree.
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use super::{LeafPartition, WeightedCategoricalTarget};
use crate::CatFeature;
use crate::common::{checker, utils};
use crate::constants::{ERROR_FLOOR, RANDOM_GUESS_ERROR};


/// The result of one boosting update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoostOutcome {
    /// Weighted training error of the tree before the update.
    pub error: f64,
    /// Voting weight of the tree.
    pub voting_weight: f64,
    /// `false` if the tree was no better than random guessing
    /// and the weights were left untouched.
    pub reweighted: bool,
}


/// Returns the voting weight `0.5 * ln((1 - e) / e)` for the error `e`.
///
/// Errors at or above `0.5` get `0`.
/// Errors below [`ERROR_FLOOR`] are raised to it,
/// so a perfect tree gets
/// [`MAX_VOTING_WEIGHT`](crate::constants::MAX_VOTING_WEIGHT)
/// instead of `+inf`.
#[inline]
pub fn voting_weight(error: f64) -> f64 {
    if error >= RANDOM_GUESS_ERROR {
        return 0f64;
    }
    let error = error.max(ERROR_FLOOR);
    0.5 * ((1f64 - error) / error).ln()
}


impl<T: CatFeature> WeightedCategoricalTarget<T> {
    /// Returns the weighted training error of the tree
    /// that produced `partition`,
    /// i.e., the sum of the leaf impurities.
    pub fn weighted_error(&self, partition: &LeafPartition) -> f64 {
        partition.validate(self.n_cases());

        let view = self.view();
        partition.leaves()
            .iter()
            .map(|leaf| view.impurity(leaf))
            .sum::<f64>()
    }


    /// Performs categorical AdaBoost with the leaf partition
    /// of a freshly grown tree,
    /// and returns the voting weight the tree should be given.
    ///
    /// See [`WeightedCategoricalTarget::boost_with_error`].
    #[inline]
    pub fn boost(&mut self, partition: &LeafPartition) -> f64 {
        self.boost_with_error(partition).voting_weight
    }


    /// Performs categorical AdaBoost with the leaf partition
    /// of a freshly grown tree.
    ///
    /// 1. The weighted error `e` is the sum of the leaf impurities.
    /// 2. If `e >= 0.5`, the voting weight is `0`
    ///    and the weights stay as they are.
    /// 3. Otherwise every non-missing example is multiplied by
    ///    `exp(alpha)` if its label differs from the mode of its leaf,
    ///    and by `exp(-alpha)` if it agrees,
    ///    where `alpha = 0.5 * ln((1 - e) / e)`.
    /// 4. The reweighted examples are rescaled to their previous
    ///    total mass, so the weights sum to `1` again.
    ///    Examples that were not reweighted keep their weight exactly.
    ///    Dividing every weight by the new total instead would also move
    ///    the weights of missing-labeled examples,
    ///    so those are left out of the rescaling.
    ///
    /// A tree whose leaves hold no labeled example carries no evidence.
    /// It gets the voting weight `0` and the weights stay as they are.
    pub fn boost_with_error(&mut self, partition: &LeafPartition)
        -> BoostOutcome
    {
        let error = self.weighted_error(partition);
        if error >= RANDOM_GUESS_ERROR {
            return BoostOutcome { error, voting_weight: 0f64, reweighted: false };
        }

        let alpha = voting_weight(error);
        checker::voting_weight(alpha);

        if !self.reweight(partition, alpha) {
            return BoostOutcome { error, voting_weight: 0f64, reweighted: false };
        }
        checker::simplex_condition(&self.weights[..]);

        BoostOutcome { error, voting_weight: alpha, reweighted: true }
    }


    /// Returns `false` if no example was reweighted.
    fn reweight(&mut self, partition: &LeafPartition, alpha: f64) -> bool {
        let n_cases = self.n_cases();

        // Exponent applied to each example, in the log domain.
        // `None` means the example is not reweighted.
        let mut exponents: Vec<Option<f64>> = vec![None; n_cases];
        for leaf in partition {
            let Some(mode) = self.feature.mode(leaf) else {
                continue;
            };
            for &i in leaf {
                if self.feature.is_missing(i) {
                    continue;
                }
                let step = if self.feature.get(i) == mode { -alpha } else { alpha };
                *exponents[i].get_or_insert(0f64) += step;
            }
        }

        if exponents.iter().all(Option::is_none) {
            return false;
        }

        let old_mass = self.weights.par_iter()
            .zip(exponents.par_iter())
            .filter_map(|(w, e)| e.map(|_| *w))
            .sum::<f64>();
        checker::normalizer(old_mass);


        // To prevent overflow, take the logarithm.
        let log_weights = self.weights.par_iter()
            .zip(exponents.par_iter())
            .filter_map(|(w, e)| e.map(|e| w.ln() + e))
            .collect::<Vec<_>>();
        let log_mass = utils::log_sum_exp(&log_weights[..]);
        checker::log_normalizer(log_mass);

        let shift = old_mass.ln() - log_mass;
        self.weights.par_iter_mut()
            .zip(exponents.par_iter())
            .for_each(|(w, e)| {
                if let Some(e) = e {
                    *w = (w.ln() + e + shift).exp();
                }
            });
        true
    }
}
