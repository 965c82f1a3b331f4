use serde_json::Value;

/// Returns the elements of an array-like JSON value.
#[inline]
pub fn as_array_like(v: &Value) -> Option<&[Value]> {
    v.as_array().map(Vec::as_slice)
}

#[inline]
pub fn is_array_like(v: &Value) -> bool {
    as_array_like(v).is_some()
}

/// Matrix-like values are objects with a two-element `shape` and a `data` array.
pub fn is_matrix_like(v: &Value) -> bool {
    let Some(obj) = v.as_object() else {
        return false;
    };
    let shape_ok = obj
        .get("shape")
        .and_then(Value::as_array)
        .is_some_and(|s| s.len() == 2 && s.iter().all(|d| d.as_u64().is_some()));
    shape_ok && obj.get("data").is_some_and(Value::is_array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn arrays_are_array_like() {
        assert!(is_array_like(&json!([])));
        assert!(is_array_like(&json!([1, "a", null])));
        assert_eq!(as_array_like(&json!([1, 2])).map(<[Value]>::len), Some(2));
    }

    #[test]
    fn scalars_and_objects_are_not_array_like() {
        for v in [json!(5), json!("5"), json!(true), json!(null), json!({"length": 2})] {
            assert!(!is_array_like(&v), "{v}");
        }
    }

    #[test]
    fn matrix_like_needs_shape_and_data() {
        assert!(is_matrix_like(&json!({"shape": [2, 2], "data": [1, 2, 3, 4]})));
        assert!(is_matrix_like(&json!({"shape": [0, 0], "data": [], "dtype": "uint8"})));
        assert!(!is_matrix_like(&json!({"shape": [2, 2]})));
        assert!(!is_matrix_like(&json!({"data": [1]})));
        assert!(!is_matrix_like(&json!({"shape": [2, 2, 2], "data": []})));
        assert!(!is_matrix_like(&json!({"shape": [-1, 2], "data": []})));
        assert!(!is_matrix_like(&json!({"shape": [2, 2], "data": "1234"})));
        assert!(!is_matrix_like(&json!([[1, 2], [3, 4]])));
    }
}
