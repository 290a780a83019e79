//! Append-only statement accumulator shared by all verb builders.

use crate::value::QueryVariable;

/// Accumulated query text and ordered bind values.
///
/// Owned by exactly one builder instance; every builder method funnels its
/// mutation through [`append`]. `exec()` only reads the state, so a builder
/// can be executed more than once.
///
/// [`append`]: StatementState::append
#[derive(Clone, Debug, Default)]
pub struct StatementState {
    query: String,
    variables: Vec<QueryVariable>,
}

impl StatementState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment, separated from the existing text by a single
    /// space, and push its bind values at the end of the list.
    pub fn append(&mut self, fragment: &str, variables: Vec<QueryVariable>) {
        if !self.query.is_empty() {
            self.query.push(' ');
        }
        self.query.push_str(fragment);
        self.variables.extend(variables);
    }

    /// The accumulated SQL text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The accumulated bind values, in placeholder order.
    pub fn variables(&self) -> &[QueryVariable] {
        &self.variables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_first_append_sets_text() {
        let mut state = StatementState::new();
        state.append("SELECT * FROM tasks", Vec::new());
        assert_eq!(state.query(), "SELECT * FROM tasks");
        assert!(state.variables().is_empty());
    }

    #[test]
    fn test_appends_join_with_single_space() {
        let mut state = StatementState::new();
        state.append("SELECT * FROM tasks", Vec::new());
        state.append("LIMIT 3", Vec::new());
        assert_eq!(state.query(), "SELECT * FROM tasks LIMIT 3");
    }

    #[test]
    fn test_variables_preserve_call_order() {
        let mut state = StatementState::new();
        state.append("a = ?", vec![QueryVariable::Scalar(Value::Int(1))]);
        state.append(
            "b = ? AND c = ?",
            vec![
                QueryVariable::Scalar(Value::Int(2)),
                QueryVariable::Scalar(Value::Int(3)),
            ],
        );
        assert_eq!(
            state.variables(),
            &[
                QueryVariable::Scalar(Value::Int(1)),
                QueryVariable::Scalar(Value::Int(2)),
                QueryVariable::Scalar(Value::Int(3)),
            ]
        );
    }
}
