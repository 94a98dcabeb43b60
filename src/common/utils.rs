//! This file provides some common functions
//! such as normalization in the log domain.
use rayon::prelude::*;

use super::checker;


/// Normalizes the given slice.
#[inline(always)]
pub fn normalize(items: &mut [f64]) {
    let z = items.iter()
        .map(|it| it.abs())
        .sum::<f64>();

    checker::normalizer(z);

    items.par_iter_mut()
        .for_each(|item| { *item /= z; });
}


/// Returns `ln(sum_i exp(x_i))` without overflowing.
/// The items are accumulated in ascending order.
#[inline(always)]
pub fn log_sum_exp(items: &[f64]) -> f64 {
    let mut sorted = items.to_vec();
    sorted.par_sort_unstable_by(|a, b| a.total_cmp(b));

    let mut iter = sorted.into_iter();
    let Some(mut acc) = iter.next() else {
        return f64::NEG_INFINITY;
    };
    for x in iter {
        let (mut a, mut b) = (acc, x);
        if a < b {
            std::mem::swap(&mut a, &mut b);
        }
        if b == f64::NEG_INFINITY {
            acc = a;
            continue;
        }
        acc = a + (b - a).exp().ln_1p();
    }
    acc
}


/// Returns the index of the largest value.
/// Ties are broken toward the smallest index.
#[inline(always)]
pub fn argmax<T>(arr: &[T]) -> Option<usize>
    where T: PartialOrd + Copy,
{
    let mut best: Option<(usize, T)> = None;
    for (i, &v) in arr.iter().enumerate() {
        let replace = match best {
            Some((_, b)) => v > b,
            None => true,
        };
        if replace { best = Some((i, v)); }
    }
    best.map(|(i, _)| i)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_01() {
        let mut v = vec![1f64, 1f64, 2f64];
        normalize(&mut v);
        assert_eq!(v, vec![0.25, 0.25, 0.5]);
    }

    #[test]
    fn test_log_sum_exp_01() {
        let v = [0.25f64.ln(), 0.25f64.ln(), 0.5f64.ln()];
        let z = log_sum_exp(&v);
        assert!(z.abs() < 1e-12, "expected 0, got {z}");
    }

    #[test]
    fn test_log_sum_exp_02() {
        let v = [1000f64, 1000f64];
        let z = log_sum_exp(&v);
        let expected = 1000f64 + 2f64.ln();
        assert!((z - expected).abs() < 1e-9, "expected {expected}, got {z}");
    }

    #[test]
    fn test_log_sum_exp_with_zeros() {
        let v = [f64::NEG_INFINITY, f64::NEG_INFINITY, 0f64];
        assert_eq!(log_sum_exp(&v), 0f64);
        assert_eq!(log_sum_exp(&[]), f64::NEG_INFINITY);
    }

    #[test]
    fn test_argmax_01() {
        assert_eq!(argmax(&[1, 3, 3, 2]), Some(1));
        assert_eq!(argmax::<usize>(&[]), None);
        assert_eq!(argmax(&[0, 0]), Some(0));
    }
}
