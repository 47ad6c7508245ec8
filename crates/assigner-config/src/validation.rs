//! Pure validation predicates for group contents
//!
//! These helpers have no error states of their own; the reducer consumes
//! their results and raises the actual errors.

use std::collections::HashSet;

use crate::types::{TypeTag, VariableRef};

/// Check whether a variable satisfies a declared output type
///
/// Compatibility is exact type-tag equality; there is no implicit widening.
pub fn is_type_compatible(var: &VariableRef, declared: TypeTag) -> bool {
    var.value_type == declared
}

/// Find the first variable whose `(node_id, variable_name)` pair repeats
pub fn find_duplicate(variables: &[VariableRef]) -> Option<&VariableRef> {
    let mut seen = HashSet::new();
    variables.iter().find(|v| !seen.insert(v.key()))
}

/// Infer a group's output type from its variable list
///
/// The inferred type is the first variable's type, or `None` for an empty
/// list.
pub fn infer_type(variables: &[VariableRef]) -> Option<TypeTag> {
    variables.first().map(|v| v.value_type)
}
