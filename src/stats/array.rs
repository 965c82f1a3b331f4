use crate::core::estimators::WelfordEstimator;
use crate::core::missing::MissingEncoding;
use crate::core::samples::Sample;
use std::convert::Infallible;

/// Standard deviation of `data`, reading each element through `accessor`.
///
/// The accessor runs exactly once per element, in order, with the element's
/// zero-based index. Its first error aborts the pass and is returned as is.
///
/// # Returns
/// - `Ok(None)` if `data` is empty;
/// - `Ok(Some(0.0))` if fewer than two values are finite numbers outside `encoding`;
/// - otherwise the sample (`bias = false`) or population (`bias = true`) estimate.
pub fn try_nanstdev_by<T, V, E, F>(
    data: &[T],
    encoding: &MissingEncoding,
    bias: bool,
    mut accessor: F,
) -> Result<Option<f64>, E>
where
    V: Sample,
    F: FnMut(&T, usize) -> Result<V, E>,
{
    if data.is_empty() {
        return Ok(None);
    }
    let mut est = WelfordEstimator::new();
    for (i, item) in data.iter().enumerate() {
        let value = accessor(item, i)?;
        est.observe(value.numeric(), encoding);
    }
    Ok(Some(est.std_dev(bias)))
}

/// Infallible form of [`try_nanstdev_by`].
pub fn nanstdev_by<T, V, F>(
    data: &[T],
    encoding: &MissingEncoding,
    bias: bool,
    mut accessor: F,
) -> Option<f64>
where
    V: Sample,
    F: FnMut(&T, usize) -> V,
{
    match try_nanstdev_by(data, encoding, bias, |x, i| Ok::<V, Infallible>(accessor(x, i))) {
        Ok(r) => r,
        Err(never) => match never {},
    }
}

/// Standard deviation of `data`, ignoring non-numeric, non-finite and missing values.
///
/// # Examples
/// ```
/// use nanstdev::core::missing::MissingEncoding;
/// use nanstdev::stats::nanstdev_array;
///
/// let v = [2.0, 4.0, f64::NAN, 5.0, 3.0, 8.0, 2.0, 999.0];
/// let sd = nanstdev_array(&v, &MissingEncoding::from([999.0]), false).unwrap();
/// assert!((sd - 5.2f64.sqrt()).abs() < 1e-12);
/// ```
pub fn nanstdev_array<S: Sample>(data: &[S], encoding: &MissingEncoding, bias: bool) -> Option<f64> {
    nanstdev_by(data, encoding, bias, |x, _| x.numeric())
}
