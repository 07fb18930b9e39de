//! Validation and dispatch of variable predicates onto a predicate sink.

use crate::task::{
    domain::{InvalidArgument, VariableOperation, VariablePredicate, VariableValue},
    ports::PredicateSink,
};

/// Validates `predicates` in order and forwards each one to `sink`.
///
/// Predicates combine conjunctively. The type hint on a predicate is not
/// used to convert its value.
///
/// # Errors
///
/// Returns [`InvalidArgument`] for the first predicate that has no
/// operation, has no value, uses a non-`equals` operation without a name, or
/// compares a non-string value case-insensitively. Predicates before the
/// failing one have already reached the sink.
pub fn translate_variables<S>(
    predicates: &[VariablePredicate],
    sink: &mut S,
) -> Result<(), InvalidArgument>
where
    S: PredicateSink + ?Sized,
{
    predicates
        .iter()
        .try_for_each(|predicate| translate_variable(predicate, sink))
}

fn translate_variable<S>(predicate: &VariablePredicate, sink: &mut S) -> Result<(), InvalidArgument>
where
    S: PredicateSink + ?Sized,
{
    let operation = predicate
        .operation
        .ok_or_else(|| InvalidArgument::MissingVariableOperation {
            name: predicate.name.clone(),
        })?;
    let value = predicate
        .value
        .as_ref()
        .ok_or_else(|| InvalidArgument::MissingVariableValue {
            name: predicate.name.clone(),
        })?;

    let Some(name) = predicate.name.as_deref() else {
        if operation != VariableOperation::Equals {
            return Err(InvalidArgument::ValueOnlyRequiresEquals);
        }
        sink.any_value_equals(value);
        return Ok(());
    };

    match operation {
        VariableOperation::Equals => sink.value_equals(name, value),
        VariableOperation::EqualsIgnoreCase => {
            sink.value_equals_ignore_case(name, require_string(value)?);
        }
        VariableOperation::NotEquals => sink.value_not_equals(name, value),
        VariableOperation::NotEqualsIgnoreCase => {
            sink.value_not_equals_ignore_case(name, require_string(value)?);
        }
    }
    Ok(())
}

fn require_string(value: &VariableValue) -> Result<&str, InvalidArgument> {
    value
        .as_str()
        .ok_or_else(|| InvalidArgument::IgnoreCaseRequiresString {
            actual: value.type_name(),
        })
}
