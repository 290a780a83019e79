//! Bind value types.
//!
//! Values never appear inside the generated SQL text; they travel in an
//! ordered bind list whose Nth entry matches the Nth `?` placeholder.

/// A single scalar bind value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// One entry of a statement's bind list.
///
/// `IN` clauses bind their whole sequence as a single unflattened [`List`]
/// entry; `IS` / `IS NOT` bind `Scalar(Value::Null)` like any other value.
///
/// [`List`]: QueryVariable::List
#[derive(Clone, Debug, PartialEq)]
pub enum QueryVariable {
    Scalar(Value),
    List(Vec<Value>),
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::$variant(v.into())
            }
        }

        impl From<$ty> for QueryVariable {
            fn from(v: $ty) -> Self {
                QueryVariable::Scalar(v.into())
            }
        }
    )*};
}

scalar_from! {
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Int,
    u16 => Int,
    u32 => Int,
    f32 => Float,
    f64 => Float,
    String => Text,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<&str> for QueryVariable {
    fn from(v: &str) -> Self {
        QueryVariable::Scalar(v.into())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl From<Value> for QueryVariable {
    fn from(v: Value) -> Self {
        QueryVariable::Scalar(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for QueryVariable {
    fn from(values: Vec<T>) -> Self {
        QueryVariable::List(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(Value::from(5i32), Value::Int(5));
        assert_eq!(Value::from("done"), Value::Text("done".to_owned()));
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(true)), Value::Bool(true));
    }

    #[test]
    fn test_list_stays_unflattened() {
        let var = QueryVariable::from(vec![1i64, 2, 3]);
        assert_eq!(
            var,
            QueryVariable::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );
    }
}
