use serde_json::Value;

/// A datum that may or may not carry a number.
///
/// Only values for which [`numeric`](Sample::numeric) returns `Some` are
/// candidates for accumulation; whether the number is finite and not a
/// missing-value sentinel is decided by the accumulator.
pub trait Sample {
    fn numeric(&self) -> Option<f64>;
}

macro_rules! impl_numeric_sample {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sample for $t {
                #[inline]
                fn numeric(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_numeric_sample!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Sample for bool {
    #[inline]
    fn numeric(&self) -> Option<f64> {
        None
    }
}

impl Sample for str {
    #[inline]
    fn numeric(&self) -> Option<f64> {
        None
    }
}

impl Sample for String {
    #[inline]
    fn numeric(&self) -> Option<f64> {
        None
    }
}

impl<T: Sample> Sample for Option<T> {
    #[inline]
    fn numeric(&self) -> Option<f64> {
        self.as_ref().and_then(Sample::numeric)
    }
}

impl<T: Sample + ?Sized> Sample for &T {
    #[inline]
    fn numeric(&self) -> Option<f64> {
        (**self).numeric()
    }
}

impl Sample for Value {
    #[inline]
    fn numeric(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primitive_numbers_are_numeric() {
        assert_eq!(3u8.numeric(), Some(3.0));
        assert_eq!((-7i32).numeric(), Some(-7.0));
        assert_eq!(1.5f32.numeric(), Some(1.5));
        assert!(f64::NAN.numeric().unwrap().is_nan());
    }

    #[test]
    fn non_numbers_yield_none() {
        assert_eq!(true.numeric(), None);
        assert_eq!("5".numeric(), None);
        assert_eq!(String::from("5").numeric(), None);
        assert_eq!(None::<f64>.numeric(), None);
        assert_eq!(Some(2.0).numeric(), Some(2.0));
    }

    #[test]
    fn json_values_only_numbers_count() {
        assert_eq!(json!(4).numeric(), Some(4.0));
        assert_eq!(json!(-0.25).numeric(), Some(-0.25));
        for v in [json!(null), json!(true), json!("8"), json!([1]), json!({"x": 1})] {
            assert_eq!(v.numeric(), None, "{v}");
        }
    }
}
