use super::Value;
use std::cmp::Ordering;

impl Value {
    /// Compares two values the way SQL compares them.
    ///
    /// Returns `None` when either side is null or the values are of
    /// incomparable kinds. Integers of different widths compare by value,
    /// and integers compare with floats after widening to `f64`.
    pub fn sql_cmp(&self, other: &Value) -> Option<Ordering> {
        use Value::*;

        match (self, other) {
            (Null, _) | (_, Null) => None,
            (Bool(lhs), Bool(rhs)) => Some(lhs.cmp(rhs)),
            (String(lhs), String(rhs)) => Some(lhs.cmp(rhs)),
            (Bytes(lhs), Bytes(rhs)) => Some(lhs.cmp(rhs)),
            (Uuid(lhs), Uuid(rhs)) => Some(lhs.cmp(rhs)),
            (lhs, rhs) => match (lhs.to_i64(), rhs.to_i64()) {
                (Some(lhs), Some(rhs)) => Some(lhs.cmp(&rhs)),
                _ => lhs.to_f64()?.partial_cmp(&rhs.to_f64()?),
            },
        }
    }

    /// SQL equality: `None` when either side is null.
    pub fn sql_eq(&self, other: &Value) -> Option<bool> {
        self.sql_cmp(other).map(|ordering| ordering == Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_incomparable() {
        assert_eq!(Value::Null.sql_cmp(&Value::I32(1)), None);
        assert_eq!(Value::I32(1).sql_eq(&Value::Null), None);
        assert_eq!(Value::Null.sql_eq(&Value::Null), None);
    }

    #[test]
    fn integers_compare_across_widths() {
        assert_eq!(Value::I16(3).sql_cmp(&Value::I64(3)), Some(Ordering::Equal));
        assert_eq!(Value::I32(2).sql_cmp(&Value::I64(3)), Some(Ordering::Less));
    }

    #[test]
    fn integers_compare_with_floats() {
        assert_eq!(Value::I32(2).sql_cmp(&Value::F64(2.5)), Some(Ordering::Less));
    }

    #[test]
    fn mismatched_kinds_are_incomparable() {
        assert_eq!(Value::from("a").sql_cmp(&Value::I32(1)), None);
    }
}
