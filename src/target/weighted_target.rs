use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use rayon::prelude::*;

use crate::CatFeature;
use crate::common::checker;


/// A categorical target for Adaptive Boosting.
///
/// Wraps a categorical label source and owns one weight per example.
/// The weights start uniform (`1/n`) and always sum to `1`
/// after a completed update.
///
/// Weights are read through a [`WeightView`] while a tree grows,
/// and rewritten by [`WeightedCategoricalTarget::boost`],
/// which takes `&mut self`.
/// The borrow checker therefore keeps impurity reads
/// and updates from interleaving.
///
/// # Example
/// ```
/// use leafboost::prelude::*;
///
/// let labels = CategoricalFeature::from_values(
///     "class", [Some("A"), Some("A"), Some("B"), Some("A")]
/// );
/// let mut target = WeightedCategoricalTarget::new(labels);
///
/// let partition = LeafPartition::from(vec![vec![0, 1, 2, 3]]);
/// let alpha = target.boost(&partition);
///
/// assert!((alpha - 0.5 * 3f64.ln()).abs() < 1e-12);
/// assert!((target.weights()[2] - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct WeightedCategoricalTarget<T> {
    pub(super) feature: T,
    pub(super) weights: Vec<f64>,
}


impl<T: CatFeature> WeightedCategoricalTarget<T> {
    /// Wrap `feature` and initialize the weights uniformly.
    /// Panics if `feature` holds no example.
    pub fn new(feature: T) -> Self {
        let n_cases = feature.len();
        checker::n_cases(n_cases);

        let uni = 1f64 / n_cases as f64;
        Self { feature, weights: vec![uni; n_cases] }
    }


    /// Resets the weights to the uniform distribution.
    pub fn reset_weights(&mut self) {
        let uni = 1f64 / self.n_cases() as f64;
        self.weights.iter_mut()
            .for_each(|w| { *w = uni; });
    }


    /// Returns the read-only view used during tree growth.
    #[inline]
    pub fn view(&self) -> WeightView<'_, T> {
        WeightView { feature: &self.feature, weights: &self.weights[..] }
    }


    /// Returns the number of examples.
    /// This value is fixed for the lifetime of the target.
    #[inline]
    pub fn n_cases(&self) -> usize {
        self.weights.len()
    }


    /// Returns the wrapped label source.
    pub fn feature(&self) -> &T {
        &self.feature
    }


    /// Returns the current weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights[..]
    }


    /// See [`WeightView::impurity`].
    #[inline]
    pub fn impurity(&self, cases: &[usize]) -> f64 {
        self.view().impurity(cases)
    }


    /// See [`WeightView::split_impurity`].
    #[inline]
    pub fn split_impurity(&self, left: &[usize], right: &[usize]) -> f64 {
        self.view().split_impurity(left, right)
    }


    /// Consumes the target and returns the label source and the weights.
    pub fn into_parts(self) -> (T, Vec<f64>) {
        (self.feature, self.weights)
    }
}


/// Read-only handle on a [`WeightedCategoricalTarget`].
///
/// The view is `Copy` and is `Sync` whenever the label source is,
/// so split candidates can be scored from many threads at once.
#[derive(Debug)]
pub struct WeightView<'a, T> {
    feature: &'a T,
    weights: &'a [f64],
}


impl<T> Clone for WeightView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}


impl<T> Copy for WeightView<'_, T> {}


impl<'a, T: CatFeature> WeightView<'a, T> {
    /// Returns the weights.
    #[inline]
    pub fn weights(&self) -> &'a [f64] {
        self.weights
    }


    /// Returns the weight of the `index`-th example.
    #[inline]
    pub fn weight(&self, index: usize) -> f64 {
        self.weights[index]
    }


    /// Returns the wrapped label source.
    #[inline]
    pub fn feature(&self) -> &'a T {
        self.feature
    }


    /// Returns the number of examples.
    #[inline]
    pub fn n_cases(&self) -> usize {
        self.weights.len()
    }


    /// Returns the modal label of `cases`, ignoring missing labels.
    #[inline]
    pub fn mode(&self, cases: &[usize]) -> Option<u32> {
        checker::case_indices(cases, self.n_cases());
        self.feature.mode(cases)
    }


    /// Returns the total weight of the non-missing examples in `cases`
    /// whose label differs from the modal label of `cases`.
    ///
    /// The result is not divided by the group size.
    /// A group without any non-missing label has impurity `0`.
    pub fn impurity(&self, cases: &[usize]) -> f64 {
        let Some(mode) = self.mode(cases) else {
            return 0f64;
        };

        cases.iter()
            .copied()
            .filter(|&i| !self.feature.is_missing(i))
            .filter(|&i| self.feature.get(i) != mode)
            .map(|i| self.weights[i])
            .sum::<f64>()
    }


    /// Scores a candidate split.
    /// The impurity of each side is weighted by its number of indices:
    /// ```txt
    /// (|L| * impurity(L) + |R| * impurity(R)) / (|L| + |R|)
    /// ```
    /// Two empty sides score `0`.
    pub fn split_impurity(&self, left: &[usize], right: &[usize]) -> f64 {
        let nl = left.len() as f64;
        let nr = right.len() as f64;
        if left.is_empty() && right.is_empty() {
            return 0f64;
        }

        let score = nl * self.impurity(left) + nr * self.impurity(right);
        score / (nl + nr)
    }


    /// Scores many candidate splits in parallel.
    /// The `k`-th score belongs to the `k`-th candidate.
    pub fn split_impurities(&self, candidates: &[(&[usize], &[usize])])
        -> Vec<f64>
        where T: Sync,
    {
        candidates.par_iter()
            .map(|(left, right)| self.split_impurity(left, right))
            .collect()
    }


    /// Draws `k` example indices with replacement,
    /// each with probability equal to its weight.
    pub fn sample_indices<R>(&self, rng: &mut R, k: usize) -> Vec<usize>
        where R: Rng + ?Sized,
    {
        let dist = WeightedIndex::new(self.weights)
            .expect("weights must be non-negative with a positive sum");
        (0..k).map(|_| dist.sample(rng))
            .collect()
    }
}
