//! Primitive kind rules
//!
//! One rule per scalar kind. Each checks the input's variant and accepts it
//! unchanged on a match.

crate::rule! {
    /// Accepts string values.
    pub IsString;
    accept(input) { input.is_string() }
    fn string();
}

crate::rule! {
    /// Accepts number values, including `NaN` and the infinities.
    pub IsNumber;
    accept(input) { input.is_number() }
    fn number();
}

crate::rule! {
    /// Accepts boolean values.
    pub IsBoolean;
    accept(input) { input.is_bool() }
    fn boolean();
}

crate::rule! {
    /// Accepts big-integer values. Plain numbers are rejected.
    pub IsBigInt;
    accept(input) { input.is_bigint() }
    fn bigint();
}

crate::rule! {
    /// Accepts symbol values.
    pub IsSymbol;
    accept(input) { input.is_symbol() }
    fn symbol();
}

crate::rule! {
    /// Accepts only the absent value.
    pub IsUndefined;
    accept(input) { input.is_undefined() }
    fn undefined();
}

crate::rule! {
    /// Accepts `null`.
    ///
    /// Absent values are accepted too: `null` and `undefined` compare equal
    /// under loose equality and this rule keeps that conflation.
    pub IsNull;
    accept(input) { input.is_nullish() }
    fn null();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{RuleExt, Symbol, Value};

    fn samples() -> Vec<Value> {
        vec![
            Value::Undefined,
            Value::Null,
            Value::from(true),
            Value::from(1.5),
            Value::bigint(10),
            Value::from("s"),
            Value::from(Symbol::new("sym")),
            Value::array_empty(),
            Value::object_empty(),
        ]
    }

    #[test]
    fn test_each_kind_accepts_only_itself() {
        for value in samples() {
            assert_eq!(string().accepts(&value), value.is_string());
            assert_eq!(number().accepts(&value), value.is_number());
            assert_eq!(boolean().accepts(&value), value.is_bool());
            assert_eq!(bigint().accepts(&value), value.is_bigint());
            assert_eq!(symbol().accepts(&value), value.is_symbol());
            assert_eq!(undefined().accepts(&value), value.is_undefined());
        }
    }

    #[test]
    fn test_null_accepts_undefined() {
        assert!(null().accepts(&Value::Null));
        assert!(null().accepts(&Value::Undefined));
        assert!(!null().accepts(&Value::from(0)));
        assert!(!null().accepts(&Value::from("")));
        assert!(!undefined().accepts(&Value::Null));
    }

    #[test]
    fn test_number_accepts_non_finite() {
        assert!(number().accepts(&Value::from(f64::NAN)));
        assert!(number().accepts(&Value::from(f64::INFINITY)));
        assert!(!number().accepts(&Value::bigint(1)));
    }
}
