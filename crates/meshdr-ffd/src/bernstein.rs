//! Bernstein polynomial basis.

/// Binomial coefficient `C(n, k)` as a float.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// Bernstein basis polynomial `B_{i,degree}(t) = C(degree, i) tⁱ (1-t)^(degree-i)`.
///
/// `0⁰` evaluates to 1, so the degree-0 basis is the constant 1.
pub fn bernstein(degree: usize, i: usize, t: f64) -> f64 {
    if i > degree {
        return 0.0;
    }
    binomial(degree, i) * t.powi(i as i32) * (1.0 - t).powi((degree - i) as i32)
}

/// All `degree + 1` basis values at `t`.
pub fn basis(degree: usize, t: f64) -> Vec<f64> {
    (0..=degree).map(|i| bernstein(degree, i, t)).collect()
}
