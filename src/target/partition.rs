use fixedbitset::FixedBitSet;
use serde::{Serialize, Deserialize};

use crate::common::checker;


/// The grouping of example indices induced by the leaves of one tree.
/// Each leaf is a list of case indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafPartition {
    leaves: Vec<Vec<usize>>,
}


impl LeafPartition {
    /// Construct an empty partition.
    pub fn new() -> Self {
        Self { leaves: Vec::new() }
    }


    /// Append a leaf.
    pub fn push(&mut self, leaf: Vec<usize>) {
        self.leaves.push(leaf);
    }


    /// Returns the leaves in insertion order.
    pub fn leaves(&self) -> &[Vec<usize>] {
        &self.leaves[..]
    }


    /// Returns the number of leaves.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }


    /// Returns `true` if the partition has no leaf.
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }


    /// Returns the total number of case indices over all leaves.
    pub fn n_cases(&self) -> usize {
        self.leaves.iter()
            .map(|leaf| leaf.len())
            .sum()
    }


    /// Panics if any leaf holds an index outside `[0, n_cases)`.
    pub fn validate(&self, n_cases: usize) {
        self.leaves.iter()
            .for_each(|leaf| checker::case_indices(leaf, n_cases));
    }


    /// Returns the indices that appear more than once,
    /// either within a leaf or across leaves, in ascending order.
    pub fn overlapping(&self, n_cases: usize) -> Vec<usize> {
        self.validate(n_cases);

        let mut seen = FixedBitSet::with_capacity(n_cases);
        let mut twice = FixedBitSet::with_capacity(n_cases);
        self.leaves.iter()
            .flatten()
            .for_each(|&i| {
                if seen.put(i) { twice.insert(i); }
            });
        twice.ones().collect()
    }


    /// Returns a bit set of the indices covered by some leaf.
    pub fn covered(&self, n_cases: usize) -> FixedBitSet {
        self.validate(n_cases);

        let mut covered = FixedBitSet::with_capacity(n_cases);
        covered.extend(self.leaves.iter().flatten().copied());
        covered
    }
}


impl From<Vec<Vec<usize>>> for LeafPartition {
    fn from(leaves: Vec<Vec<usize>>) -> Self {
        Self { leaves }
    }
}


impl FromIterator<Vec<usize>> for LeafPartition {
    fn from_iter<I: IntoIterator<Item = Vec<usize>>>(iter: I) -> Self {
        Self { leaves: iter.into_iter().collect() }
    }
}


impl<'a> IntoIterator for &'a LeafPartition {
    type Item = &'a Vec<usize>;
    type IntoIter = std::slice::Iter<'a, Vec<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.leaves.iter()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_01() {
        let p = LeafPartition::from(vec![vec![0, 1], vec![2, 3]]);
        assert!(p.overlapping(4).is_empty());
        assert_eq!(p.n_cases(), 4);
    }

    #[test]
    fn test_overlapping_02() {
        let p = LeafPartition::from(vec![vec![0, 1, 1], vec![1, 3]]);
        assert_eq!(p.overlapping(4), vec![1]);
    }

    #[test]
    fn test_covered_01() {
        let p: LeafPartition = vec![vec![3], vec![0]].into_iter().collect();
        let covered = p.covered(5);
        assert_eq!(covered.ones().collect::<Vec<_>>(), vec![0, 3]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_validate_failure_01() {
        let p = LeafPartition::from(vec![vec![0, 7]]);
        p.validate(4);
    }
}
