use crate::core::missing::MissingEncoding;

/// Online mean / sum-of-squared-deviations estimator (Welford, 1962).
///
/// State is the observed count `N`, the running `mean` and `M2`. Each
/// accumulation pass owns one estimator; nothing is shared between passes.
#[derive(Debug, Default, Clone, Copy)]
pub struct WelfordEstimator {
    count: u64,
    mean: f64,
    m2: f64,
}

impl WelfordEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Incorporates `x` unconditionally.
    #[inline]
    pub fn add(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    /// Incorporates `value` if it is a finite number outside `encoding`.
    /// Returns whether the value was accepted.
    #[inline]
    pub fn observe(&mut self, value: Option<f64>, encoding: &MissingEncoding) -> bool {
        match value {
            Some(x) if x.is_finite() && !encoding.is_missing(x) => {
                self.add(x);
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    #[inline]
    pub fn m2(&self) -> f64 {
        self.m2
    }

    /// Standard deviation of the accepted observations.
    ///
    /// `bias = false` divides by `N - 1`, `bias = true` by `N`. Fewer than two
    /// observations yield `0.0`.
    pub fn std_dev(&self, bias: bool) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        let n = self.count as f64;
        let denominator = if bias { n } else { n - 1.0 };
        (self.m2.max(0.0) / denominator).sqrt()
    }
}
