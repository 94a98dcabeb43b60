use serde::{Serialize, Deserialize};

use std::collections::BTreeMap;

use crate::{
    common::utils,
    Classifier,
};


/// A struct that the boosting algorithms in this library return.
/// Each tree votes for its predicted category with its voting weight.
/// You can read/write this struct by `Serde` trait.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct WeightedMajority<H> {
    /// Weights on each hypothesis in `self.hypotheses`.
    pub weights: Vec<f64>,
    /// Set of hypotheses.
    pub hypotheses: Vec<H>,
}


impl<H: Clone> WeightedMajority<H> {
    /// Construct a new `WeightedMajority` from given slices.
    /// Pairs with a non-positive weight are dropped.
    #[inline]
    pub fn from_slices(weights: &[f64], hypotheses: &[H]) -> Self {
        Self::from_parts(weights.to_vec(), hypotheses.to_vec())
    }
}


impl<H> WeightedMajority<H> {
    /// Construct a new `WeightedMajority` from given vectors.
    /// Pairs with a non-positive weight are dropped,
    /// and the remaining weights are normalized.
    pub fn from_parts(weights: Vec<f64>, hypotheses: Vec<H>) -> Self {
        assert_eq!(
            weights.len(), hypotheses.len(),
            "each hypothesis needs exactly one weight"
        );
        let (mut weights, hypotheses): (Vec<_>, Vec<_>) = weights.into_iter()
            .zip(hypotheses)
            .filter(|(w, _)| *w > 0.0)
            .unzip();

        if !weights.is_empty() {
            utils::normalize(&mut weights[..]);
        }
        Self { weights, hypotheses }
    }


    /// Append a pair `(weight, H)` to the current combined hypothesis.
    ///
    /// The weight is stored as given, not normalized.
    /// The vote only compares weights with each other,
    /// so `weight` must be on the same scale as the stored ones
    /// (see [`WeightedMajority::decompose`]).
    /// A non-positive weight is ignored, as in
    /// [`WeightedMajority::from_parts`].
    #[inline]
    pub fn push(&mut self, weight: f64, hypothesis: H) {
        if weight <= 0.0 {
            return;
        }
        self.weights.push(weight);
        self.hypotheses.push(hypothesis);
    }


    /// Returns the number of hypotheses.
    #[inline]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    /// Returns `true` if no hypothesis takes part in the vote.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }


    /// Decompose the combined hypothesis
    /// into the two vectors `Vec<f64>` and `Vec<H>`
    #[inline]
    pub fn decompose(self) -> (Vec<f64>, Vec<H>) {
        (self.weights, self.hypotheses)
    }
}


impl<D, H> Classifier<D> for WeightedMajority<H>
    where D: ?Sized,
          H: Classifier<D>,
{
    /// Sums the weights of the hypotheses voting for each category
    /// and returns the heaviest one.
    /// Ties go to the smallest code.
    fn predict(&self, data: &D, row: usize) -> Option<u32> {
        let mut votes = BTreeMap::<u32, f64>::new();
        self.weights.iter()
            .zip(&self.hypotheses[..])
            .for_each(|(w, h)| {
                if let Some(y) = h.predict(data, row) {
                    *votes.entry(y).or_insert(0.0) += w;
                }
            });

        let mut best: Option<(u32, f64)> = None;
        for (y, w) in votes {
            if best.map_or(true, |(_, b)| w > b) {
                best = Some((y, w));
            }
        }
        best.map(|(y, _)| y)
    }
}
