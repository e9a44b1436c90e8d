/*!
 * Serde Helpers
 * Predicates used with `skip_serializing_if`
 */

/// Skip serializing if Option is None
#[inline]
pub fn is_none<T>(value: &Option<T>) -> bool {
    value.is_none()
}

/// Skip serializing if value is zero
#[inline]
pub fn is_zero_u64(value: &u64) -> bool {
    *value == 0
}

/// Skip serializing if vec is empty
#[inline]
pub fn is_empty_vec<T>(value: &[T]) -> bool {
    value.is_empty()
}
