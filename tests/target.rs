use leafboost::prelude::*;
use leafboost::constants::MAX_VOTING_WEIGHT;

use rand::prelude::*;
use rand::rngs::StdRng;


const TOLERANCE: f64 = 1e-9;


fn target_of(labels: &[Option<&str>]) -> WeightedCategoricalTarget<CategoricalFeature> {
    let feature = CategoricalFeature::from_values("class", labels.iter().copied());
    WeightedCategoricalTarget::new(feature)
}


/// Random labels over `n_categories` categories,
/// with roughly one in `missing_every` labels missing.
fn random_labels(rng: &mut StdRng, n: usize, n_categories: usize, missing_every: usize)
    -> Vec<Option<&'static str>>
{
    const NAMES: [&str; 4] = ["A", "B", "C", "D"];
    (0..n).map(|_| {
            if rng.gen_range(0..missing_every) == 0 {
                None
            } else {
                Some(NAMES[rng.gen_range(0..n_categories)])
            }
        })
        .collect()
}


/// Splits `0..n` into `n_leaves` random leaves.
fn random_partition(rng: &mut StdRng, n: usize, n_leaves: usize) -> LeafPartition {
    let mut leaves = vec![Vec::new(); n_leaves];
    for i in 0..n {
        leaves[rng.gen_range(0..n_leaves)].push(i);
    }
    LeafPartition::from(leaves)
}


/// Tests for `WeightedCategoricalTarget`.
#[cfg(test)]
pub mod target_tests {
    use super::*;

    #[test]
    fn single_leaf_scenario() {
        let mut target = target_of(&[Some("A"), Some("A"), Some("B"), Some("A")]);
        assert_eq!(target.weights(), &[0.25; 4]);

        let partition = LeafPartition::from(vec![vec![0, 1, 2, 3]]);
        assert!((target.weighted_error(&partition) - 0.25).abs() < TOLERANCE);

        let alpha = target.boost(&partition);
        assert!((alpha - 0.549_306_144_334_054_8).abs() < TOLERANCE, "alpha = {alpha}");

        let expected = [1.0 / 6.0, 1.0 / 6.0, 0.5, 1.0 / 6.0];
        for (w, e) in target.weights().iter().zip(expected) {
            assert!((w - e).abs() < TOLERANCE, "expected {e}, got {w}");
        }
    }


    #[test]
    fn error_of_one_half_returns_zero() {
        let mut target = target_of(&[Some("A"), Some("B"), Some("B"), Some("A")]);
        let before = target.weights().to_vec();
        let partition = LeafPartition::from(vec![vec![0, 1], vec![2, 3]]);

        let outcome = target.boost_with_error(&partition);
        assert_eq!(outcome.error, 0.5);
        assert_eq!(outcome.voting_weight, 0.0);
        assert_eq!(target.weights(), &before[..]);
    }


    #[test]
    fn split_impurity_weights_sides_by_size() {
        let feature = CategoricalFeature::from_values(
            "class",
            [Some("A"), Some("B"), Some("C"), Some("C"), Some("D"), Some("A")],
        );
        let target = WeightedCategoricalTarget::new(feature);
        // Each example weighs 1/6.
        let left = [0, 1];
        let right = [2, 3, 4];
        let expected = (2.0 * (1.0 / 6.0) + 3.0 * (1.0 / 6.0)) / 5.0;
        let score = target.split_impurity(&left, &right);
        assert!((score - expected).abs() < TOLERANCE, "score = {score}");

        let view = target.view();
        assert_eq!(view.split_impurity(&left, &right), score);
        assert_eq!(view.split_impurity(&right, &left), score);
    }


    #[test]
    fn random_updates_keep_the_invariants() {
        let mut rng = StdRng::seed_from_u64(20_240_917);
        for trial in 0..50 {
            let n = rng.gen_range(1..60);
            let n_categories = rng.gen_range(1..=4);
            let labels = random_labels(&mut rng, n, n_categories, 6);
            let mut target = target_of(&labels);

            let uni = 1.0 / n as f64;
            assert!(target.weights().iter().all(|&w| w == uni));

            for _ in 0..10 {
                let n_leaves = rng.gen_range(1..=5);
                let partition = random_partition(&mut rng, n, n_leaves);
                let before = target.weights().to_vec();
                let outcome = target.boost_with_error(&partition);
                let after = target.weights();

                let sum = after.iter().sum::<f64>();
                assert!((sum - 1.0).abs() < TOLERANCE, "trial {trial}: sum = {sum}");
                assert!(outcome.voting_weight.is_finite());
                assert!(outcome.voting_weight <= MAX_VOTING_WEIGHT + TOLERANCE);
                assert!(after.iter().all(|&w| w > 0.0));

                for (i, label) in labels.iter().enumerate() {
                    if label.is_none() {
                        assert_eq!(after[i], before[i], "missing label {i} moved");
                    }
                }

                if outcome.error >= 0.5 {
                    assert_eq!(outcome.voting_weight, 0.0);
                    assert_eq!(after, &before[..]);
                }
            }
        }
    }


    #[test]
    fn mismatched_examples_gain_weight() {
        let mut rng = StdRng::seed_from_u64(7);
        let labels = random_labels(&mut rng, 40, 2, 8);
        let mut target = target_of(&labels);
        let partition = random_partition(&mut rng, 40, 4);
        let before = target.weights().to_vec();

        let modes = partition.leaves()
            .iter()
            .map(|leaf| target.feature().mode(leaf))
            .collect::<Vec<_>>();
        let alpha = target.boost(&partition);
        if alpha == 0.0 {
            return;
        }

        for (leaf, mode) in partition.leaves().iter().zip(modes) {
            let Some(mode) = mode else { continue; };
            for &i in leaf {
                if target.feature().is_missing(i) {
                    continue;
                }
                let (b, a) = (before[i], target.weights()[i]);
                if target.feature().get(i) == mode {
                    assert!(a < b, "example {i} should lose weight: {b} -> {a}");
                } else {
                    assert!(a > b, "example {i} should gain weight: {b} -> {a}");
                }
            }
        }
    }


    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_indices_fail_loudly() {
        let target = target_of(&[Some("A"), Some("B")]);
        target.impurity(&[0, 1, 2]);
    }


    #[test]
    fn concurrent_reads_agree_with_sequential_reads() {
        let mut rng = StdRng::seed_from_u64(99);
        let labels = random_labels(&mut rng, 200, 4, 10);
        let target = target_of(&labels);
        let view = target.view();

        let groups = (0..64)
            .map(|k| {
                let (left, right): (Vec<usize>, Vec<usize>) = (0..200)
                    .partition(|i| (i * 7 + k) % 5 < 2);
                (left, right)
            })
            .collect::<Vec<_>>();
        let candidates = groups.iter()
            .map(|(l, r)| (&l[..], &r[..]))
            .collect::<Vec<_>>();

        let parallel = view.split_impurities(&candidates[..]);
        let sequential = candidates.iter()
            .map(|(l, r)| view.split_impurity(l, r))
            .collect::<Vec<_>>();
        assert_eq!(parallel, sequential);
    }
}
