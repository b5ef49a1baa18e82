//! Element-wise operations on `f32` arrays.
//!
//! Every function returns a freshly allocated `Vec<f32>`. Binary ops pair
//! elements by index and stop at the shorter input.

/// Combine two arrays element by element.
pub fn zip_with<F>(lhs: &[f32], rhs: &[f32], op: F) -> Vec<f32>
where
    F: Fn(f32, f32) -> f32,
{
    lhs.iter().zip(rhs).map(|(&l, &r)| op(l, r)).collect()
}

/// Combine every element of an array with one scalar.
pub fn map_scalar<F>(lhs: &[f32], scalar: f32, op: F) -> Vec<f32>
where
    F: Fn(f32, f32) -> f32,
{
    lhs.iter().map(|&l| op(l, scalar)).collect()
}

/// Smaller of two values. Ties and NaN comparisons keep `lhs`.
#[inline]
pub fn min_op(lhs: f32, rhs: f32) -> f32 {
    if rhs < lhs {
        rhs
    } else {
        lhs
    }
}

#[inline]
pub fn max_op(lhs: f32, rhs: f32) -> f32 {
    if lhs < rhs {
        rhs
    } else {
        lhs
    }
}

/// Clamp without the `min <= max` panic of [`f32::clamp`].
#[inline]
pub fn clamp_op(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if max < value {
        max
    } else {
        value
    }
}

pub fn copy(source: &[f32]) -> Vec<f32> {
    source.to_vec()
}

pub fn sum(source: &[f32]) -> f32 {
    source.iter().sum()
}

pub fn add(lhs: &[f32], rhs: &[f32]) -> Vec<f32> {
    zip_with(lhs, rhs, |l, r| l + r)
}

pub fn sub(lhs: &[f32], rhs: &[f32]) -> Vec<f32> {
    zip_with(lhs, rhs, |l, r| l - r)
}

pub fn mul(lhs: &[f32], rhs: &[f32]) -> Vec<f32> {
    zip_with(lhs, rhs, |l, r| l * r)
}

/// Division follows IEEE rules: `x / 0.0` is infinite, `0.0 / 0.0` is NaN.
pub fn div(lhs: &[f32], rhs: &[f32]) -> Vec<f32> {
    zip_with(lhs, rhs, |l, r| l / r)
}

pub fn add_scalar(lhs: &[f32], scalar: f32) -> Vec<f32> {
    map_scalar(lhs, scalar, |l, s| l + s)
}

pub fn mul_scalar(lhs: &[f32], scalar: f32) -> Vec<f32> {
    map_scalar(lhs, scalar, |l, s| l * s)
}

pub fn clamp(source: &[f32], min: f32, max: f32) -> Vec<f32> {
    source.iter().map(|&v| clamp_op(v, min, max)).collect()
}

pub fn min(lhs: &[f32], rhs: &[f32]) -> Vec<f32> {
    zip_with(lhs, rhs, min_op)
}

pub fn max(lhs: &[f32], rhs: &[f32]) -> Vec<f32> {
    zip_with(lhs, rhs, max_op)
}

pub fn min_scalar(lhs: &[f32], scalar: f32) -> Vec<f32> {
    map_scalar(lhs, scalar, min_op)
}

pub fn max_scalar(lhs: &[f32], scalar: f32) -> Vec<f32> {
    map_scalar(lhs, scalar, max_op)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), vec![5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_sub_mul_div() {
        let a = [6.0, 8.0, 10.0];
        let b = [2.0, 4.0, 5.0];
        assert_eq!(sub(&a, &b), vec![4.0, 4.0, 5.0]);
        assert_eq!(mul(&a, &b), vec![12.0, 32.0, 50.0]);
        assert_eq!(div(&a, &b), vec![3.0, 2.0, 2.0]);
    }

    #[test]
    fn test_div_by_zero_is_infinite() {
        let out = div(&[1.0, -1.0], &[0.0, 0.0]);
        assert_eq!(out[0], f32::INFINITY);
        assert_eq!(out[1], f32::NEG_INFINITY);
    }

    #[test]
    fn test_mismatched_lengths_truncate() {
        assert_eq!(add(&[1.0, 2.0, 3.0], &[1.0]), vec![2.0]);
        assert_eq!(mul(&[2.0], &[3.0, 4.0]), vec![6.0]);
        assert!(sub(&[], &[1.0]).is_empty());
    }

    #[test]
    fn test_scalar_ops() {
        assert_eq!(add_scalar(&[1.0, -1.0], 0.5), vec![1.5, -0.5]);
        assert_eq!(mul_scalar(&[1.0, -2.0], 3.0), vec![3.0, -6.0]);
        assert_eq!(min_scalar(&[1.0, 5.0], 3.0), vec![1.0, 3.0]);
        assert_eq!(max_scalar(&[1.0, 5.0], 3.0), vec![3.0, 5.0]);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(&[-1.0, 0.0, 5.0], 0.0, 3.0), vec![0.0, 0.0, 3.0]);
    }

    #[test]
    fn test_clamp_inverted_bounds_does_not_panic() {
        // min > max: the lower bound is checked first.
        assert_eq!(clamp(&[0.0, 2.0, 9.0], 5.0, 1.0), vec![5.0, 5.0, 1.0]);
    }

    #[test]
    fn test_min_max() {
        let a = [1.0, 7.0, -3.0];
        let b = [2.0, 4.0, -3.0];
        assert_eq!(min(&a, &b), vec![1.0, 4.0, -3.0]);
        assert_eq!(max(&a, &b), vec![2.0, 7.0, -3.0]);
    }

    #[test]
    fn test_copy_and_sum() {
        let src = [0.5, 1.5, 2.0];
        assert_eq!(copy(&src), src.to_vec());
        assert_eq!(sum(&src), 4.0);
        assert_eq!(sum(&[]), 0.0);
    }
}
