/// A trait that defines the behavor of a categorical classifier.
/// You only need to implement `predict` method.
///
/// `D` is whatever data the classifier reads its inputs from;
/// predictions are category codes of the boosted target.
pub trait Classifier<D: ?Sized> {
    /// Predicts the category code of the `row`-th example of `data`.
    /// Returns `None` if the classifier abstains.
    fn predict(&self, data: &D, row: usize) -> Option<u32>;


    /// Predicts the category codes of the first `n_rows` examples.
    fn predict_all(&self, data: &D, n_rows: usize) -> Vec<Option<u32>> {
        (0..n_rows).map(|row| self.predict(data, row))
            .collect::<Vec<_>>()
    }
}
