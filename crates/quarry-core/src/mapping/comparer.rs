use crate::stmt::Value;
use std::cmp::Ordering;

/// How values of a mapped type compare in the database.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Comparer {
    /// Values compare by their natural order.
    #[default]
    Default,

    /// Strings compare ignoring case, as under SQL Server's default collation.
    CaseInsensitive,
}

impl Comparer {
    /// Compares two non-null values. Returns `None` when they are not
    /// comparable.
    pub fn compare(self, lhs: &Value, rhs: &Value) -> Option<Ordering> {
        match (self, lhs, rhs) {
            (Comparer::CaseInsensitive, Value::String(lhs), Value::String(rhs)) => {
                Some(lhs.to_lowercase().cmp(&rhs.to_lowercase()))
            }
            _ => lhs.sql_cmp(rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive_strings_are_equal() {
        let a = Value::from("London");
        let b = Value::from("LONDON");
        assert_eq!(Comparer::CaseInsensitive.compare(&a, &b), Some(Ordering::Equal));
        assert_ne!(Comparer::Default.compare(&a, &b), Some(Ordering::Equal));
    }

    #[test]
    fn non_strings_use_natural_order() {
        let a = Value::I32(1);
        let b = Value::I64(2);
        assert_eq!(Comparer::CaseInsensitive.compare(&a, &b), Some(Ordering::Less));
    }
}
