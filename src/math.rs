//! Integer helpers: divisibility and polynomial interpolation.

use itertools::Itertools;

use crate::error::MathError;

/// Greatest common divisor; `gcd(0, 0) == 0`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple; zero if either argument is.
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// Least common multiple of every number in `nums`, 1 for none.
pub fn lcm_all<I: IntoIterator<Item=u64>>(nums: I) -> u64 {
    nums.into_iter().fold(1, lcm)
}

/// Prime factors of `num` in ascending order, repeated by multiplicity. Empty for 0 and 1.
pub fn prime_factorization(mut num: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if num == 0 {
        return factors;
    }

    while num % 2 == 0 {
        factors.push(2);
        num /= 2;
    }

    let mut i = 3;
    while i <= num / i {
        while num % i == 0 {
            factors.push(i);
            num /= i;
        }
        i += 2;
    }

    // whatever is left is prime
    if num > 1 {
        factors.push(num);
    }

    factors
}

/// Evaluate at `x` the polynomial through the samples `(xs[i], ys[i])`, using Neville's scheme in exact integer arithmetic.
///
/// Every intermediate value must come out integral, which holds for instance when the `xs` are consecutive integers and the `ys` are integers.
/// Otherwise this fails with [`MathError::NotIntegral`] rather than rounding.
pub fn neville_interpolation(xs: &[i64], ys: &[i64], x: i64) -> Result<i64, MathError> {
    if xs.is_empty() || xs.len() != ys.len() {
        return Err(MathError::SampleMismatch { xs: xs.len(), ys: ys.len() });
    }
    if let Some(dup) = xs.iter().duplicates().next() {
        return Err(MathError::DuplicateSample(*dup));
    }

    let xs = xs.iter().map(|&v| i128::from(v)).collect_vec();
    let x = i128::from(x);
    // p[i] holds the value at x of the polynomial through samples i..=i+width
    let mut p = ys.iter().map(|&v| i128::from(v)).collect_vec();

    for width in 1..xs.len() {
        for i in 0..xs.len() - width {
            let j = i + width;
            let numerator = (x - xs[j]) * p[i] + (xs[i] - x) * p[i + 1];
            let denominator = xs[i] - xs[j];
            if numerator % denominator != 0 {
                return Err(MathError::NotIntegral);
            }
            p[i] = numerator / denominator;
        }
    }

    i64::try_from(p[0]).map_err(|_| MathError::NotIntegral)
}
