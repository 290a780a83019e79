//! WHERE condition model and compiler.
//!
//! A condition is either a leaf [`Clause`] (field, operator, value) or an
//! [`Aggregation`] chaining two or more conditions with `AND`/`OR`,
//! recursively. The operator/value shape invariants are enforced by the
//! `Clause` constructors, so an invalid combination (an `IN` without a
//! sequence, an `IS` with a non-null value) cannot be represented.
//!
//! [`Condition::compile`] turns a tree into a SQL fragment plus the bind
//! values it references, in strict depth-first, left-to-right order.

use crate::error::{Error, Result};
use crate::schema::Field;
use crate::value::{QueryVariable, Value};

/// Scalar comparison operators: the ones that take a single value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparator {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
}

/// Every operator a leaf clause can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    Is,
    IsNot,
}

impl Operator {
    /// The operator as it appears in SQL text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::In => "IN",
            Operator::Is => "IS",
            Operator::IsNot => "IS NOT",
        }
    }
}

impl From<Comparator> for Operator {
    fn from(op: Comparator) -> Self {
        match op {
            Comparator::Eq => Operator::Eq,
            Comparator::Ne => Operator::Ne,
            Comparator::Gt => Operator::Gt,
            Comparator::Gte => Operator::Gte,
            Comparator::Lt => Operator::Lt,
            Comparator::Lte => Operator::Lte,
        }
    }
}

/// Chain keyword joining the members of an aggregation group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Chain {
    And,
    Or,
}

impl Chain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Chain::And => "AND",
            Chain::Or => "OR",
        }
    }
}

/// A single field/operator/value comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct Clause<F: Field> {
    field: F,
    operator: Operator,
    value: QueryVariable,
}

impl<F: Field> Clause<F> {
    /// Compare a field against a single scalar value.
    pub fn compare(field: F, operator: Comparator, value: impl Into<Value>) -> Self {
        Self {
            field,
            operator: operator.into(),
            value: QueryVariable::Scalar(value.into()),
        }
    }

    /// `field = value`
    pub fn eq(field: F, value: impl Into<Value>) -> Self {
        Self::compare(field, Comparator::Eq, value)
    }

    /// `field != value`
    pub fn ne(field: F, value: impl Into<Value>) -> Self {
        Self::compare(field, Comparator::Ne, value)
    }

    /// `field > value`
    pub fn gt(field: F, value: impl Into<Value>) -> Self {
        Self::compare(field, Comparator::Gt, value)
    }

    /// `field >= value`
    pub fn gte(field: F, value: impl Into<Value>) -> Self {
        Self::compare(field, Comparator::Gte, value)
    }

    /// `field < value`
    pub fn lt(field: F, value: impl Into<Value>) -> Self {
        Self::compare(field, Comparator::Lt, value)
    }

    /// `field <= value`
    pub fn lte(field: F, value: impl Into<Value>) -> Self {
        Self::compare(field, Comparator::Lte, value)
    }

    /// `field IN ?` — the sequence is bound as one unflattened list value.
    ///
    /// Fails with [`Error::Validation`] on an empty sequence.
    pub fn in_list<T: Into<Value>>(field: F, values: Vec<T>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::validation(format!(
                "IN clause on '{}' requires a non-empty value list",
                field.as_str()
            )));
        }
        Ok(Self {
            field,
            operator: Operator::In,
            value: QueryVariable::List(values.into_iter().map(Into::into).collect()),
        })
    }

    /// `field IS ?` with a null bind value.
    pub fn is_null(field: F) -> Self {
        Self {
            field,
            operator: Operator::Is,
            value: QueryVariable::Scalar(Value::Null),
        }
    }

    /// `field IS NOT ?` with a null bind value.
    pub fn is_not_null(field: F) -> Self {
        Self {
            field,
            operator: Operator::IsNot,
            value: QueryVariable::Scalar(Value::Null),
        }
    }
}

/// A boolean combination of conditions.
///
/// Holds one or more `(chain, conditions)` groups in the order the caller
/// declared them; every group carries at least two conditions.
#[derive(Clone, Debug, PartialEq)]
pub struct Aggregation<F: Field> {
    groups: Vec<(Chain, Vec<Condition<F>>)>,
}

impl<F: Field> Aggregation<F> {
    /// Create an aggregation with a single chain group.
    ///
    /// Fails with [`Error::Validation`] when fewer than two conditions are
    /// given.
    pub fn new(chain: Chain, conditions: Vec<Condition<F>>) -> Result<Self> {
        Self {
            groups: Vec::with_capacity(1),
        }
        .chain(chain, conditions)
    }

    /// Create an `AND` aggregation.
    pub fn all(conditions: Vec<Condition<F>>) -> Result<Self> {
        Self::new(Chain::And, conditions)
    }

    /// Create an `OR` aggregation.
    pub fn any(conditions: Vec<Condition<F>>) -> Result<Self> {
        Self::new(Chain::Or, conditions)
    }

    /// Append another chain group, preserving declaration order.
    pub fn chain(mut self, chain: Chain, conditions: Vec<Condition<F>>) -> Result<Self> {
        if conditions.len() < 2 {
            return Err(Error::validation(format!(
                "{} chain requires at least two conditions, got {}",
                chain.as_str(),
                conditions.len()
            )));
        }
        self.groups.push((chain, conditions));
        Ok(self)
    }

    pub(crate) fn render(&self, values: &mut Vec<QueryVariable>) -> String {
        let groups: Vec<String> = self
            .groups
            .iter()
            .map(|(chain, conditions)| {
                let members: Vec<String> = conditions
                    .iter()
                    .map(|condition| condition.render(values))
                    .collect();
                members.join(&format!(" {} ", chain.as_str()))
            })
            .collect();
        // One parenthesis pair around the whole aggregation, even with a
        // single chain group.
        format!("({})", groups.join(" "))
    }
}

/// A leaf clause or a nested aggregation.
#[derive(Clone, Debug, PartialEq)]
pub enum Condition<F: Field> {
    Clause(Clause<F>),
    Group(Aggregation<F>),
}

impl<F: Field> Condition<F> {
    /// Compile this condition into a SQL fragment and its bind values.
    ///
    /// Bind values appear in the same depth-first, left-to-right order as
    /// the `?` placeholders in the fragment.
    pub fn compile(&self) -> (String, Vec<QueryVariable>) {
        let mut values = Vec::new();
        let fragment = self.render(&mut values);
        (fragment, values)
    }

    pub(crate) fn render(&self, values: &mut Vec<QueryVariable>) -> String {
        match self {
            Condition::Clause(clause) => {
                values.push(clause.value.clone());
                format!("{} {} ?", clause.field.as_str(), clause.operator.as_str())
            }
            Condition::Group(aggregation) => aggregation.render(values),
        }
    }
}

impl<F: Field> From<Clause<F>> for Condition<F> {
    fn from(clause: Clause<F>) -> Self {
        Condition::Clause(clause)
    }
}

impl<F: Field> From<Aggregation<F>> for Condition<F> {
    fn from(aggregation: Aggregation<F>) -> Self {
        Condition::Group(aggregation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum TaskField {
        TaskId,
        Description,
        Active,
    }

    impl Field for TaskField {
        fn as_str(&self) -> &'static str {
            match self {
                TaskField::TaskId => "task_id",
                TaskField::Description => "description",
                TaskField::Active => "active",
            }
        }
    }

    #[test]
    fn test_leaf_compare() {
        let condition = Condition::from(Clause::eq(TaskField::Active, true));
        let (sql, values) = condition.compile();
        assert_eq!(sql, "active = ?");
        assert_eq!(values, vec![QueryVariable::Scalar(Value::Bool(true))]);
    }

    #[test]
    fn test_leaf_in_binds_unflattened_list() {
        let clause = Clause::in_list(TaskField::TaskId, vec![1i64, 2, 3]).unwrap();
        let (sql, values) = Condition::from(clause).compile();
        assert_eq!(sql, "task_id IN ?");
        assert_eq!(
            values,
            vec![QueryVariable::List(vec![
                Value::Int(1),
                Value::Int(2),
                Value::Int(3)
            ])]
        );
    }

    #[test]
    fn test_leaf_null_checks_bind_null() {
        let (sql, values) = Condition::from(Clause::is_null(TaskField::Description)).compile();
        assert_eq!(sql, "description IS ?");
        assert_eq!(values, vec![QueryVariable::Scalar(Value::Null)]);

        let (sql, _) = Condition::from(Clause::is_not_null(TaskField::Description)).compile();
        assert_eq!(sql, "description IS NOT ?");
    }

    #[test]
    fn test_empty_in_list_rejected() {
        let err = Clause::in_list(TaskField::TaskId, Vec::<i64>::new()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_and_group() {
        let aggregation = Aggregation::all(vec![
            Clause::eq(TaskField::TaskId, 1i64).into(),
            Clause::ne(TaskField::Description, "done").into(),
        ])
        .unwrap();
        let (sql, values) = Condition::from(aggregation).compile();
        assert_eq!(sql, "(task_id = ? AND description != ?)");
        assert_eq!(
            values,
            vec![
                QueryVariable::Scalar(Value::Int(1)),
                QueryVariable::Scalar(Value::Text("done".to_owned())),
            ]
        );
    }

    #[test]
    fn test_or_group() {
        let aggregation = Aggregation::any(vec![
            Clause::gt(TaskField::TaskId, 5i64).into(),
            Clause::is_null(TaskField::Description).into(),
        ])
        .unwrap();
        let (sql, values) = Condition::from(aggregation).compile();
        assert_eq!(sql, "(task_id > ? OR description IS ?)");
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_nested_aggregation_depth_first_order() {
        let inner = Aggregation::any(vec![
            Clause::in_list(TaskField::TaskId, vec![1i64]).unwrap().into(),
            Clause::is_not_null(TaskField::Description).into(),
        ])
        .unwrap();
        let outer = Aggregation::all(vec![
            inner.into(),
            Clause::ne(TaskField::Active, false).into(),
        ])
        .unwrap();
        let (sql, values) = Condition::from(outer).compile();
        assert_eq!(sql, "((task_id IN ? OR description IS NOT ?) AND active != ?)");
        assert_eq!(
            values,
            vec![
                QueryVariable::List(vec![Value::Int(1)]),
                QueryVariable::Scalar(Value::Null),
                QueryVariable::Scalar(Value::Bool(false)),
            ]
        );
    }

    #[test]
    fn test_multiple_chain_groups_keep_declaration_order() {
        let aggregation = Aggregation::all(vec![
            Clause::eq(TaskField::TaskId, 1i64).into(),
            Clause::eq(TaskField::Active, true).into(),
        ])
        .unwrap()
        .chain(
            Chain::Or,
            vec![
                Clause::is_null(TaskField::Description).into(),
                Clause::eq(TaskField::Description, "open").into(),
            ],
        )
        .unwrap();
        let (sql, values) = Condition::from(aggregation).compile();
        assert_eq!(
            sql,
            "(task_id = ? AND active = ? description IS ? OR description = ?)"
        );
        assert_eq!(values.len(), 4);
    }

    #[test]
    fn test_short_chain_rejected() {
        let err =
            Aggregation::all(vec![Condition::from(Clause::eq(TaskField::TaskId, 1i64))])
                .unwrap_err();
        assert!(err.is_validation());

        let err = Aggregation::<TaskField>::any(Vec::new()).unwrap_err();
        assert!(err.is_validation());
    }
}
