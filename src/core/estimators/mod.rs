mod welford_estimator;

pub use welford_estimator::WelfordEstimator;
