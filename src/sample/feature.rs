use polars::prelude::*;
use serde::{Serialize, Deserialize};

use std::collections::HashMap;

use crate::common::utils;
use crate::constants::DEFAULT_MISSING_TOKENS;


/// The capability set a boosting target needs from its labels:
/// label lookup, a missing-value predicate, and a modal-label query.
///
/// Labels are category codes in `0..self.n_categories()`.
pub trait CatFeature {
    /// Returns the feature name.
    fn name(&self) -> &str;

    /// Returns the number of examples.
    fn len(&self) -> usize;

    /// Returns `true` if the feature holds no examples.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of distinct categories.
    fn n_categories(&self) -> usize;

    /// Returns the category code of the `index`-th example.
    /// The entry must not be missing.
    fn get(&self, index: usize) -> u32;

    /// Returns `true` if the label of the `index`-th example is missing.
    fn is_missing(&self, index: usize) -> bool;

    /// Returns the category name for `code`.
    fn category(&self, code: u32) -> &str;

    /// Returns the most frequent code among the non-missing entries
    /// of `cases`.
    /// Ties go to the smallest code.
    /// Returns `None` if `cases` has no non-missing entry.
    fn mode(&self, cases: &[usize]) -> Option<u32> {
        let mut counts = vec![0_usize; self.n_categories()];
        cases.iter()
            .copied()
            .filter(|&i| !self.is_missing(i))
            .for_each(|i| { counts[self.get(i) as usize] += 1; });

        utils::argmax(&counts[..])
            .filter(|&k| counts[k] > 0)
            .map(|k| k as u32)
    }
}


/// Dense categorical feature.
/// Category codes are assigned in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoricalFeature {
    name: String,
    codes: Vec<Option<u32>>,
    categories: Vec<String>,
    code_of: HashMap<String, u32>,
}


impl CategoricalFeature {
    /// Construct an empty feature named `name`.
    pub fn new<T: ToString>(name: T) -> Self {
        Self { name: name.to_string(), ..Self::default() }
    }


    /// Construct a feature from raw values.
    /// `None` marks a missing entry.
    pub fn from_values<'a, T, I>(name: T, values: I) -> Self
        where T: ToString,
              I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut feature = Self::new(name);
        values.into_iter()
            .for_each(|v| feature.push(v));
        feature
    }


    /// Construct a feature from strings.
    /// Each string equal to one of `missing_tokens` is a missing entry.
    pub fn from_strs<'a, T, I, M>(name: T, values: I, missing_tokens: &[M])
        -> Self
        where T: ToString,
              I: IntoIterator<Item = &'a str>,
              M: AsRef<str>,
    {
        let values = values.into_iter()
            .map(|v| {
                let v = v.trim();
                let missing = missing_tokens.iter()
                    .any(|token| token.as_ref() == v);
                if missing { None } else { Some(v) }
            });
        Self::from_values(name, values)
    }


    /// Convert `polars::Series` into `CategoricalFeature`.
    /// Null entries and the default missing tokens become missing.
    pub fn from_series(series: &Series) -> Self {
        let name = series.name().to_string();

        let series = series.cast(&DataType::Utf8)
            .expect("The series cannot be cast to a string dtype");
        let values = series.utf8()
            .expect("The series is not a dtype utf8")
            .into_iter()
            .map(|v| {
                v.map(str::trim)
                    .filter(|v| !DEFAULT_MISSING_TOKENS.contains(v))
            });

        Self::from_values(name, values)
    }


    /// Append an example to this feature.
    /// `None` marks a missing entry.
    pub fn push(&mut self, value: Option<&str>) {
        let code = value.map(|v| self.code_or_insert(v));
        self.codes.push(code);
    }


    fn code_or_insert(&mut self, value: &str) -> u32 {
        if let Some(&code) = self.code_of.get(value) {
            return code;
        }
        let code = self.categories.len() as u32;
        self.categories.push(value.to_string());
        self.code_of.insert(value.to_string(), code);
        code
    }


    /// Returns the code of the category named `value`, if any.
    pub fn code(&self, value: &str) -> Option<u32> {
        self.code_of.get(value).copied()
    }


    /// Returns the category names, indexed by code.
    pub fn categories(&self) -> &[String] {
        &self.categories[..]
    }


    /// Returns the label of the `index`-th example,
    /// or `None` if it is missing.
    pub fn value(&self, index: usize) -> Option<&str> {
        self.codes[index].map(|code| self.category(code))
    }


    /// Returns the number of missing entries.
    pub fn missing_count(&self) -> usize {
        self.codes.iter()
            .filter(|c| c.is_none())
            .count()
    }


    /// Replace the feature name, returning the old one.
    pub fn replace_name<S: ToString>(&mut self, name: S) -> String {
        std::mem::replace(&mut self.name, name.to_string())
    }
}


impl CatFeature for CategoricalFeature {
    fn name(&self) -> &str {
        &self.name
    }


    fn len(&self) -> usize {
        self.codes.len()
    }


    fn n_categories(&self) -> usize {
        self.categories.len()
    }


    fn get(&self, index: usize) -> u32 {
        self.codes[index]
            .unwrap_or_else(|| {
                panic!(
                    "the label of example {index} in `{}` is missing",
                    self.name
                )
            })
    }


    fn is_missing(&self, index: usize) -> bool {
        self.codes[index].is_none()
    }


    fn category(&self, code: u32) -> &str {
        &self.categories[code as usize]
    }
}
