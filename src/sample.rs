//! Categorical label sources.
//! A boosting target reads its labels through the [`CatFeature`] trait,
//! so any categorical column with missing-value awareness can be wrapped.

// Provides the categorical feature trait and its dense implementation.
pub(crate) mod feature;
// Provides a struct that reads a categorical column from a file.
pub(crate) mod sample_reader;


pub use feature::{CatFeature, CategoricalFeature};
pub use sample_reader::FeatureReader;
